//! Action dispatch: routes a resolved built-in action to its handler.

use crate::actions::Action;
use crate::navigator::FocusNavigator;
use crate::view::{AccountSwitch, AppContext};

use super::{compose, item, navigation, shell};

/// Dispatch a built-in action to the appropriate handler.
///
/// Returns whether the action was actually performed; composite handlers
/// use the same signal internally to abort half-done flows. Failures are
/// logged where they are detected, never raised.
pub fn dispatch_action(
    action: Action,
    nav: &mut FocusNavigator,
    ctx: &mut AppContext<'_>,
) -> bool {
    match action {
        // Focus navigation (3 actions)
        Action::NextItem => navigation::handle_next_item(nav, ctx),
        Action::PreviousItem => navigation::handle_previous_item(nav, ctx),
        Action::UnfocusItem => navigation::handle_unfocus_item(nav, ctx),

        // Scrolling (4 actions)
        Action::ScrollPageDown => navigation::handle_scroll_page_down(nav, ctx),
        Action::ScrollPageUp => navigation::handle_scroll_page_up(nav, ctx),
        Action::ScrollToTop => navigation::handle_scroll_to_top(nav, ctx),
        Action::ScrollToBottom => navigation::handle_scroll_to_bottom(nav, ctx),

        // Section switching (4 actions)
        Action::SwitchTimeline => navigation::handle_switch_tab(nav, ctx, navigation::TAB_TIMELINE),
        Action::SwitchNotifications => {
            navigation::handle_switch_tab(nav, ctx, navigation::TAB_NOTIFICATIONS)
        }
        Action::SwitchMessages => navigation::handle_switch_tab(nav, ctx, navigation::TAB_MESSAGES),
        Action::SwitchSearch => navigation::handle_switch_search(nav, ctx),

        // Composition (6 actions)
        Action::Compose => compose::handle_compose(nav, ctx),
        Action::SendComposition => compose::handle_send_composition(ctx),
        Action::Reply => compose::handle_reply(nav, ctx),
        Action::Repost => compose::handle_repost(nav, ctx),
        Action::Quote => compose::handle_quote(nav, ctx),
        Action::Like => compose::handle_like(nav, ctx),

        // Opening (5 actions)
        Action::OpenItem => item::handle_open_item(nav, ctx),
        Action::OpenMedia => item::handle_open_media(nav, ctx),
        Action::OpenMediaInBrowser => item::handle_open_media_in_browser(nav, ctx),
        Action::OpenLinks => item::handle_open_links(nav, ctx),
        Action::ShowAuthor => item::handle_show_author(nav, ctx),

        // Shell (7 actions)
        Action::GoBack => shell::handle_go_back(ctx),
        Action::GoForward => shell::handle_go_forward(ctx),
        Action::Reload => shell::handle_reload(ctx),
        Action::ZoomIn => shell::handle_zoom_in(ctx),
        Action::ZoomOut => shell::handle_zoom_out(ctx),
        Action::OpenDevtools => shell::handle_open_devtools(ctx),
        Action::Quit => shell::handle_quit(ctx),

        // Accounts (3 actions)
        Action::LastAccount => shell::handle_switch_account(ctx, AccountSwitch::Last),
        Action::NextAccount => shell::handle_switch_account(ctx, AccountSwitch::Next),
        Action::PreviousAccount => shell::handle_switch_account(ctx, AccountSwitch::Previous),
    }
}
