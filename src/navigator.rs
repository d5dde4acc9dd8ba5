//! Viewport-aware focus navigation.
//!
//! The navigator owns the single "currently focused item" cursor and moves
//! it through the live, partially rendered item sequence while keeping the
//! target visible with minimal scrolling. The page is externally mutated
//! between calls, so every operation re-queries items and geometry from
//! scratch and re-resolves the focused item by identity; the only state
//! carried across calls is the focused identity itself and the last seen
//! page address.

use tracing::{debug, error};

use crate::view::{Item, ItemId, PageView, Viewport};

/// Number of buttons in a well-formed item action cluster
/// (reply, repost, like, share).
pub const ITEM_ACTION_COUNT: usize = 4;

/// Cluster index of the reply button.
pub const ITEM_ACTION_REPLY: usize = 0;
/// Cluster index of the repost button.
pub const ITEM_ACTION_REPOST: usize = 1;
/// Cluster index of the like button.
pub const ITEM_ACTION_LIKE: usize = 2;

/// Focus cursor and scroll computation over the live item sequence.
#[derive(Debug, Default)]
pub struct FocusNavigator {
    /// Identity of the focused item, re-resolved against the fresh
    /// sequence on every call.
    focused: Option<ItemId>,
    /// Page address observed on the previous navigation call. An address
    /// change means the item collection was replaced.
    last_address: String,
}

impl FocusNavigator {
    /// Create a navigator with no focus and no observed page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of the currently focused item, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<ItemId> {
        self.focused
    }

    /// Move the focus marker, unmarking the previous item first. At most
    /// one item carries the marker at any time.
    pub fn set_focused(&mut self, page: &mut dyn PageView, id: Option<ItemId>) {
        if let Some(prev) = self.focused.take() {
            page.set_focus_marker(prev, false);
        }
        self.focused = id;
        if let Some(id) = id {
            page.set_focus_marker(id, true);
        }
    }

    /// Drop the focus marker.
    pub fn clear_focus(&mut self, page: &mut dyn PageView) {
        self.set_focused(page, None);
    }

    /// Move focus by `offset` items, scrolling minimally to keep the
    /// target visible.
    ///
    /// With `align_to_leading` the target's top edge is aligned against
    /// the header's bottom edge; otherwise its bottom edge is aligned
    /// against the viewport's bottom edge. Backwards navigation aligns to
    /// the leading edge so the fixed header never occludes the target.
    ///
    /// When the current item overflows the reference edge on the side
    /// being navigated toward, the call only reveals the hidden remainder
    /// and leaves focus where it is; the next call advances.
    pub fn move_focus_by_offset(
        &mut self,
        offset: isize,
        align_to_leading: bool,
        page: &mut dyn PageView,
        viewport: &mut dyn Viewport,
    ) {
        let address = page.address();
        if address != self.last_address {
            debug!(address = %address, "page changed, dropping stale focus");
            self.focused = None;
            self.last_address = address;
        }

        let items = page.items();
        if items.is_empty() {
            debug!(mode = ?page.view_mode(), "no focusable items to move over");
            return;
        }

        let view_top = viewport.scroll_top();
        let view_bottom = view_top + viewport.height();

        // Querying header geometry forces layout work on some hosts, so
        // it is only read when leading-edge alignment needs it.
        let header_bottom = if align_to_leading {
            let header = page.header_height().map(|h| view_top + h);
            if header.is_none() {
                error!("no header found on moving focus; alignment skipped");
            }
            header
        } else {
            None
        };

        let index = self
            .focused
            .and_then(|id| items.iter().position(|item| item.id == id));

        let Some(index) = index else {
            // Fresh view: anchor on the first item intersecting the
            // viewport, falling back to the first item overall.
            let target = first_item_in_view(&items, view_top, view_bottom).unwrap_or(items[0]);
            if align_to_leading {
                if let Some(header) = header_bottom {
                    align_edge(viewport, target.top, header);
                }
            } else {
                align_edge(viewport, target.bottom, view_bottom);
            }
            self.set_focused(page, Some(target.id));
            return;
        };

        let current = items[index];

        // A too-tall item can extend past the reference edge. Reveal the
        // rest of it before advancing; focus moves on the next call.
        if align_to_leading {
            if let Some(header) = header_bottom {
                if header > current.top
                    && align_edge_verified(viewport, current.top, header, view_top)
                {
                    return;
                }
            }
        } else if current.bottom > view_bottom
            && align_edge_verified(viewport, current.bottom, view_bottom, view_top)
        {
            return;
        }

        let Some(next) = index
            .checked_add_signed(offset)
            .and_then(|i| items.get(i))
            .copied()
        else {
            debug!(index, offset, "focus already at sequence boundary");
            return;
        };

        let next_in_view = view_top <= next.top && next.bottom <= view_bottom;
        if !next_in_view {
            if align_to_leading {
                if let Some(header) = header_bottom {
                    align_edge(viewport, next.top, header);
                }
            } else {
                align_edge(viewport, next.bottom, view_bottom);
            }
        }

        self.set_focused(page, Some(next.id));
    }

    /// Re-anchor focus on the first item intersecting the viewport,
    /// clearing it when nothing intersects. Used after page scrolls.
    pub fn focus_first_in_view(&mut self, page: &mut dyn PageView, viewport: &dyn Viewport) {
        let items = page.items();
        let view_top = viewport.scroll_top();
        let view_bottom = view_top + viewport.height();
        let target = first_item_in_view(&items, view_top, view_bottom);
        self.set_focused(page, target.map(|item| item.id));
    }

    /// Click the tab at the given logical index.
    ///
    /// Some page variants render the account icon as the first tab-bar
    /// entry; logical indices skip it. Returns whether a tab was clicked.
    pub fn click_tab(&self, page: &mut dyn PageView, index: usize) -> bool {
        let tabs = page.tab_items();
        if tabs.is_empty() {
            debug!("no tab items found");
            return false;
        }

        let index = if tabs[0].is_account_icon {
            index + 1
        } else {
            index
        };

        if index < tabs.len() {
            page.click_tab(index);
            true
        } else {
            false
        }
    }

    /// Click the `index`-th action button of the focused item.
    ///
    /// Items containing a conversation render one cluster per post; the
    /// last cluster belongs to the focused post itself. A cluster of
    /// unexpected shape aborts without clicking. Returns whether the
    /// button was clicked.
    pub fn click_item_action(&self, page: &mut dyn PageView, index: usize) -> bool {
        let Some(item) = self.focused else {
            return false;
        };

        let clusters = page.item_action_clusters(item);
        let Some(cluster) = clusters.last() else {
            error!("focused item has no action-button cluster");
            return false;
        };

        if cluster.len() != ITEM_ACTION_COUNT {
            error!(
                buttons = cluster.len(),
                "unexpected action-button count in focused item"
            );
            return false;
        }

        match cluster.get(index) {
            Some(&button) => {
                page.click_button(button);
                true
            }
            None => false,
        }
    }
}

/// First item whose bounding box intersects the viewport window. Partial
/// visibility counts: the top edge inside the window, or the bottom edge
/// inside it.
fn first_item_in_view(items: &[Item], view_top: f64, view_bottom: f64) -> Option<Item> {
    items.iter().copied().find(|item| {
        (view_top <= item.top && item.top < view_bottom)
            || (view_top < item.bottom && item.bottom <= view_bottom)
    })
}

/// Scroll so that `edge` lands exactly on `reference`. Pure delta along
/// the vertical axis; out-of-bounds scrolling is left to the host viewport
/// to clamp.
fn align_edge(viewport: &mut dyn Viewport, edge: f64, reference: f64) {
    viewport.scroll_by(edge - reference);
}

/// Like [`align_edge`], but reports whether the scroll offset actually
/// changed from `from`. Only callers that need the answer pay for the
/// extra offset read.
fn align_edge_verified(viewport: &mut dyn Viewport, edge: f64, reference: f64, from: f64) -> bool {
    viewport.scroll_by(edge - reference);
    viewport.scroll_top() != from
}
