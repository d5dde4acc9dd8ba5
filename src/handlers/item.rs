//! Handlers that open the focused item or parts of it.

use tracing::debug;

use crate::navigator::FocusNavigator;
use crate::view::{AppContext, ViewMode};

/// Handle opening the focused item's detail view.
///
/// Message-list entries are clickable as a whole. Regular items open via
/// their body; activity notifications (liked, reposted) have no body, so
/// the first actor icon opens the detail instead.
pub fn handle_open_item(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let Some(item) = nav.focused() else {
        return false;
    };

    if ctx.page.view_mode() == ViewMode::MessageList {
        ctx.page.click_item(item);
        return true;
    }

    if let Some(body) = ctx.page.item_body_button(item) {
        ctx.page.click_button(body);
        return true;
    }

    let icons = ctx.page.item_activity_icons(item);
    if let Some(&icon) = icons.first() {
        debug!("opening activity actor");
        ctx.page.click_button(icon);
        return true;
    }

    false
}

/// Handle opening the focused item's media viewer.
pub fn handle_open_media(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let Some(item) = nav.focused() else {
        return false;
    };
    match ctx.page.item_media_thumbnail(item) {
        Some(thumbnail) => {
            ctx.page.click_button(thumbnail);
            true
        }
        None => false,
    }
}

/// Handle opening the focused item's media in the external browser.
pub fn handle_open_media_in_browser(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let Some(item) = nav.focused() else {
        return false;
    };
    let Some(mut url) = ctx.page.item_media_link(item) else {
        return false;
    };

    if url.starts_with('/') {
        // Path-only internal links resolve against the page origin.
        url = format!("{}{}", ctx.page.origin(), url);
    }

    ctx.shell.open_external(&url);
    true
}

/// Handle opening the focused item's links in the external browser.
///
/// Links inside the page origin (mentions and other in-app targets) are
/// skipped.
pub fn handle_open_links(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let Some(item) = nav.focused() else {
        return false;
    };

    let mut urls = ctx.page.item_links(item);
    if let Some(thumbnail) = ctx.page.item_media_link(item) {
        urls.push(thumbnail);
    }
    debug!(?urls, "opening links");

    let origin = ctx.page.origin();
    let mut opened = false;
    for url in &urls {
        if !url.starts_with(&origin) {
            ctx.shell.open_external(url);
            opened = true;
        }
    }
    opened
}

/// Handle opening the focused item's author profile.
pub fn handle_show_author(nav: &mut FocusNavigator, ctx: &mut AppContext<'_>) -> bool {
    let Some(item) = nav.focused() else {
        return false;
    };

    let icons = ctx.page.item_author_icons(item);
    // Conversations render one icon per participant; the last one belongs
    // to the focused post.
    let Some(&target) = icons.last() else {
        return false;
    };

    debug!("opening author profile");
    ctx.page.click_button(target);
    true
}
