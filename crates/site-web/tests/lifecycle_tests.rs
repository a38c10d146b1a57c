// Host-side tests for the document lifecycle checks.

mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn load_still_pending_while_parsing_or_interactive() {
    assert!(load_pending("loading"));
    assert!(load_pending("interactive"));
}

#[test]
fn late_start_after_load_runs_immediately() {
    assert!(!load_pending("complete"));
}
