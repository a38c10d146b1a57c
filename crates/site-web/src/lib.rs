#![cfg(target_arch = "wasm32")]
mod constants;
mod context;
mod dom;
mod form;
mod lifecycle;
mod page;
mod relay;
mod reveal;
mod scene;
mod scroll;
mod theme;

use context::AppContext;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let ctx = AppContext::new(document.clone());

    page::wire_preloader(&document);
    theme::wire_theme_toggle(&ctx);

    scroll::wire_scroll_reactors(&document);
    scroll::wire_smooth_scroll(&document);
    scroll::wire_mobile_menu(&document);

    reveal::play_hero_timeline(&document);
    reveal::wire_scroll_reveals(&document);
    reveal::wire_aos(&document);
    reveal::wire_animate_on_scroll(&document);
    reveal::wire_parallax(&document);

    page::mount_lottie(&document);
    // the page stays usable without the background
    if let Err(e) = scene::init_hero_scene(&ctx) {
        log::warn!("[scene] disabled: {:?}", e);
    }

    form::wire_contact_form(&document);
    form::wire_focus_styling(&document);

    page::wire_catalogue_tracking(&document);
    page::set_current_year(&document);
    page::inject_invalid_style(&document);
    page::wire_lazy_images(&document);
    page::print_console_banner();

    log::info!("[init] theme {}", ctx.current_theme());
    Ok(())
}
