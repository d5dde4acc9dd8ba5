//! Composition action handlers: composing, sending, and reacting.

use tracing::{debug, error};

use crate::navigator::{FocusNavigator, ITEM_ACTION_LIKE, ITEM_ACTION_REPLY, ITEM_ACTION_REPOST};
use crate::view::{AppContext, ViewMode};

use super::navigation::TAB_TIMELINE;

/// Move input focus into the composition input once the host has
/// finished mounting it.
fn focus_composer(ctx: &mut AppContext<'_>) {
    if !ctx.page.focus_composer_deferred() {
        error!("composition input not found after opening composer");
    }
}

/// Handle opening the composition area.
///
/// In a message thread this focuses the thread's composer directly. The
/// compose button only renders on the timeline, so when it is missing we
/// switch there and try once more.
pub fn handle_compose(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    if ctx.page.view_mode() == ViewMode::MessageThread {
        if !ctx.page.focus_message_composer() {
            error!("message composer not found");
            return false;
        }
        return true;
    }

    if ctx.page.click_compose_button() {
        focus_composer(ctx);
        return true;
    }

    if nav.click_tab(&mut *ctx.page, TAB_TIMELINE) && ctx.page.click_compose_button() {
        focus_composer(ctx);
        return true;
    }

    error!("compose button not found");
    false
}

/// Handle submitting the composition or message being written.
pub fn handle_send_composition(ctx: &mut AppContext<'_>) -> bool {
    if ctx.page.view_mode() == ViewMode::MessageThread {
        ctx.page.click_message_send()
    } else {
        ctx.page.click_composition_send()
    }
}

/// Handle replying to the focused item.
pub fn handle_reply(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    if !nav.click_item_action(&mut *ctx.page, ITEM_ACTION_REPLY) {
        return false;
    }
    focus_composer(ctx);
    true
}

/// Handle liking the focused item.
pub fn handle_like(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    nav.click_item_action(&mut *ctx.page, ITEM_ACTION_LIKE)
}

/// Handle reposting the focused item.
///
/// The repost button opens a selection dialog with repost and quote
/// options; reposting picks the first.
pub fn handle_repost(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    if !nav.click_item_action(&mut *ctx.page, ITEM_ACTION_REPOST) {
        return false;
    }

    let options = ctx.page.selection_dialog_buttons();
    if options.len() < 2 {
        debug!(options = options.len(), "selection dialog did not open");
        return false;
    }

    ctx.page.click_button(options[0]);
    true
}

/// Handle quoting the focused item.
///
/// Same dialog as reposting, second option, then the composer opens for
/// the quote text.
pub fn handle_quote(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    if !nav.click_item_action(&mut *ctx.page, ITEM_ACTION_REPOST) {
        return false;
    }

    let options = ctx.page.selection_dialog_buttons();
    if options.len() < 2 {
        debug!(options = options.len(), "selection dialog did not open");
        return false;
    }

    ctx.page.click_button(options[1]);
    focus_composer(ctx);
    true
}
