//! Focus-navigation and scrolling action handlers.

use tracing::debug;

use crate::navigator::FocusNavigator;
use crate::view::AppContext;

/// Logical index of the timeline tab.
pub const TAB_TIMELINE: usize = 0;
/// Logical index of the notifications tab.
pub const TAB_NOTIFICATIONS: usize = 1;
/// Logical index of the direct-messages tab.
pub const TAB_MESSAGES: usize = 2;
/// Logical index of the search tab.
pub const TAB_SEARCH: usize = 3;

/// Handle moving focus to the next item.
pub fn handle_next_item(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    nav.move_focus_by_offset(1, false, &mut *ctx.page, &mut *ctx.viewport);
    true
}

/// Handle moving focus to the previous item.
///
/// Aligns to the leading edge so the target is never left hidden under
/// the fixed header.
pub fn handle_previous_item(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    nav.move_focus_by_offset(-1, true, &mut *ctx.page, &mut *ctx.viewport);
    true
}

/// Handle dropping focus.
///
/// Inside the search input or a message composer this blurs the field to
/// get back out; with an edit overlay open it dismisses the overlay
/// instead of touching the marker.
pub fn handle_unfocus_item(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    if ctx.page.blur_active_text_field() {
        return true;
    }
    if ctx.page.click_dismiss_control() {
        return true;
    }
    nav.clear_focus(&mut *ctx.page);
    true
}

/// Handle scrolling down one page.
pub fn handle_scroll_page_down(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let height = ctx.viewport.height();
    ctx.viewport.scroll_by(height);
    nav.focus_first_in_view(&mut *ctx.page, &*ctx.viewport);
    true
}

/// Handle scrolling up one page.
pub fn handle_scroll_page_up(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let height = ctx.viewport.height();
    ctx.viewport.scroll_by(-height);
    nav.focus_first_in_view(&mut *ctx.page, &*ctx.viewport);
    true
}

/// Handle jumping to the top of the page.
///
/// Prefers the page's own "new items" notice, which also refreshes the
/// sequence, over a raw scroll.
pub fn handle_scroll_to_top(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    if !ctx.page.click_new_items_notice() {
        ctx.viewport.scroll_to(0.0);
    }
    nav.clear_focus(&mut *ctx.page);
    true
}

/// Handle jumping to the bottom of the page.
pub fn handle_scroll_to_bottom(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let bottom = ctx.viewport.content_height();
    ctx.viewport.scroll_to(bottom);
    nav.clear_focus(&mut *ctx.page);
    true
}

/// Handle switching to the tab at the given logical index.
pub fn handle_switch_tab(
    nav: &mut FocusNavigator,
    ctx: &mut AppContext<'_>,
    index: usize,
) -> bool {
    nav.click_tab(&mut *ctx.page, index)
}

/// Handle switching to the search tab and focusing its input.
pub fn handle_switch_search(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    if !nav.click_tab(&mut *ctx.page, TAB_SEARCH) {
        return false;
    }
    if !ctx.page.focus_search_input() {
        debug!("search input not found after switching tab");
    }
    true
}
