//! Shell action handlers: history, zoom, devtools, accounts.

use crate::view::{AccountSwitch, AppContext};

/// Zoom-factor change applied per zoom action.
const ZOOM_STEP: f64 = 0.1;

/// Handle navigating back in history.
pub fn handle_go_back(ctx: &mut AppContext<'_>) -> bool {
    if !ctx.shell.can_go_back() {
        return false;
    }
    ctx.shell.go_back();
    true
}

/// Handle navigating forward in history.
pub fn handle_go_forward(ctx: &mut AppContext<'_>) -> bool {
    if !ctx.shell.can_go_forward() {
        return false;
    }
    ctx.shell.go_forward();
    true
}

/// Handle reloading the page.
pub fn handle_reload(ctx: &mut AppContext<'_>) -> bool {
    ctx.shell.reload();
    true
}

fn modify_zoom_factor(ctx: &mut AppContext<'_>, diff: f64) -> bool {
    let factor = ctx.shell.zoom_factor();
    ctx.shell.set_zoom_factor(factor + diff);
    true
}

/// Handle zooming in.
pub fn handle_zoom_in(ctx: &mut AppContext<'_>) -> bool {
    modify_zoom_factor(ctx, ZOOM_STEP)
}

/// Handle zooming out.
pub fn handle_zoom_out(ctx: &mut AppContext<'_>) -> bool {
    modify_zoom_factor(ctx, -ZOOM_STEP)
}

/// Handle opening the developer tools.
pub fn handle_open_devtools(ctx: &mut AppContext<'_>) -> bool {
    ctx.shell.open_devtools();
    true
}

/// Handle quitting the application.
pub fn handle_quit(ctx: &mut AppContext<'_>) -> bool {
    ctx.shell.quit();
    true
}

/// Handle signalling an account switch.
pub fn handle_switch_account(ctx: &mut AppContext<'_>, which: AccountSwitch) -> bool {
    ctx.shell.switch_account(which);
    true
}
