pub mod constants;
pub mod payload;
pub mod relay;
pub mod scene;
pub mod scroll;
pub mod submission;
pub mod theme;
pub mod timeline;
pub mod validate;

pub use payload::*;
pub use relay::*;
pub use submission::*;
pub use theme::*;
pub use validate::*;
