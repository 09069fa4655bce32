//! Panic hook that gives the user their terminal back.

use super::setup::emergency_restore;
use std::panic;

/// Install a hook that restores the terminal, then runs the previous hook
/// (color_eyre's, when installed first) to print the report.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
