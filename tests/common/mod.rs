//! Shared test doubles for the collaborator traits.
//!
//! The fakes record every side effect (marker changes, clicks, scrolls,
//! shell calls) so tests can assert on exactly what the core did to the
//! host.

#![allow(dead_code)]

use std::collections::HashMap;

use perch::view::{
    AccountSwitch, AppContext, ButtonId, FocusTarget, Item, ItemId, PageView, Shell, TabItem,
    ViewMode, Viewport,
};

/// Scriptable page double.
pub struct FakePage {
    pub address: String,
    pub origin: String,
    pub mode: ViewMode,
    pub items: Vec<Item>,
    pub header_height: Option<f64>,
    pub focused_element: FocusTarget,
    pub tabs: Vec<TabItem>,

    pub action_clusters: HashMap<ItemId, Vec<Vec<ButtonId>>>,
    pub dialog_buttons: Vec<ButtonId>,
    pub body_buttons: HashMap<ItemId, ButtonId>,
    pub activity_icons: HashMap<ItemId, Vec<ButtonId>>,
    pub author_icons: HashMap<ItemId, Vec<ButtonId>>,
    pub media_thumbnails: HashMap<ItemId, ButtonId>,
    pub media_links: HashMap<ItemId, String>,
    pub links: HashMap<ItemId, Vec<String>>,

    pub has_compose_button: bool,
    pub has_composer_input: bool,
    pub has_message_composer: bool,
    pub has_search_input: bool,
    pub has_active_text_field: bool,
    pub has_dismiss_control: bool,
    pub has_new_items_notice: bool,
    pub has_message_send: bool,
    pub has_composition_send: bool,
    /// Simulate the compose button appearing once the timeline tab is
    /// clicked.
    pub compose_appears_after_tab_click: bool,

    // Recorded side effects
    pub marker_events: Vec<(ItemId, bool)>,
    pub marked: Vec<ItemId>,
    pub clicked_tabs: Vec<usize>,
    pub clicked_buttons: Vec<ButtonId>,
    pub clicked_items: Vec<ItemId>,
    pub compose_clicks: usize,
    pub composer_focus_requests: usize,
    pub message_composer_focuses: usize,
    pub search_focuses: usize,
    pub blurs: usize,
    pub dismiss_clicks: usize,
    pub notice_clicks: usize,
    pub message_sends: usize,
    pub composition_sends: usize,
}

impl Default for FakePage {
    fn default() -> Self {
        Self {
            // Navigator-level tests start with the epoch already in sync;
            // epoch tests set a real address explicitly.
            address: String::new(),
            origin: "https://example.com".to_string(),
            mode: ViewMode::Timeline,
            items: Vec::new(),
            header_height: None,
            focused_element: FocusTarget::None,
            tabs: Vec::new(),
            action_clusters: HashMap::new(),
            dialog_buttons: Vec::new(),
            body_buttons: HashMap::new(),
            activity_icons: HashMap::new(),
            author_icons: HashMap::new(),
            media_thumbnails: HashMap::new(),
            media_links: HashMap::new(),
            links: HashMap::new(),
            has_compose_button: false,
            has_composer_input: true,
            has_message_composer: false,
            has_search_input: false,
            has_active_text_field: false,
            has_dismiss_control: false,
            has_new_items_notice: false,
            has_message_send: false,
            has_composition_send: false,
            compose_appears_after_tab_click: false,
            marker_events: Vec::new(),
            marked: Vec::new(),
            clicked_tabs: Vec::new(),
            clicked_buttons: Vec::new(),
            clicked_items: Vec::new(),
            compose_clicks: 0,
            composer_focus_requests: 0,
            message_composer_focuses: 0,
            search_focuses: 0,
            blurs: 0,
            dismiss_clicks: 0,
            notice_clicks: 0,
            message_sends: 0,
            composition_sends: 0,
        }
    }
}

impl FakePage {
    /// A page showing `count` items of uniform `height`, stacked from 0.
    pub fn with_uniform_items(count: u64, height: f64) -> Self {
        Self {
            items: uniform_items(count, height),
            ..Self::default()
        }
    }

    /// The single currently marked item, if any.
    pub fn marked_item(&self) -> Option<ItemId> {
        assert!(
            self.marked.len() <= 1,
            "more than one focus marker: {:?}",
            self.marked
        );
        self.marked.first().copied()
    }
}

impl PageView for FakePage {
    fn address(&self) -> String {
        self.address.clone()
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn view_mode(&self) -> ViewMode {
        self.mode
    }

    fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn header_height(&self) -> Option<f64> {
        self.header_height
    }

    fn set_focus_marker(&mut self, item: ItemId, focused: bool) {
        self.marker_events.push((item, focused));
        if focused {
            self.marked.push(item);
        } else {
            self.marked.retain(|&m| m != item);
        }
    }

    fn focused_element(&self) -> FocusTarget {
        self.focused_element.clone()
    }

    fn tab_items(&self) -> Vec<TabItem> {
        self.tabs.clone()
    }

    fn click_tab(&mut self, index: usize) {
        self.clicked_tabs.push(index);
        if self.compose_appears_after_tab_click {
            self.has_compose_button = true;
        }
    }

    fn click_item(&mut self, item: ItemId) {
        self.clicked_items.push(item);
    }

    fn click_button(&mut self, button: ButtonId) {
        self.clicked_buttons.push(button);
    }

    fn item_action_clusters(&self, item: ItemId) -> Vec<Vec<ButtonId>> {
        self.action_clusters.get(&item).cloned().unwrap_or_default()
    }

    fn selection_dialog_buttons(&self) -> Vec<ButtonId> {
        self.dialog_buttons.clone()
    }

    fn item_body_button(&self, item: ItemId) -> Option<ButtonId> {
        self.body_buttons.get(&item).copied()
    }

    fn item_activity_icons(&self, item: ItemId) -> Vec<ButtonId> {
        self.activity_icons.get(&item).cloned().unwrap_or_default()
    }

    fn item_author_icons(&self, item: ItemId) -> Vec<ButtonId> {
        self.author_icons.get(&item).cloned().unwrap_or_default()
    }

    fn item_media_thumbnail(&self, item: ItemId) -> Option<ButtonId> {
        self.media_thumbnails.get(&item).copied()
    }

    fn item_media_link(&self, item: ItemId) -> Option<String> {
        self.media_links.get(&item).cloned()
    }

    fn item_links(&self, item: ItemId) -> Vec<String> {
        self.links.get(&item).cloned().unwrap_or_default()
    }

    fn click_compose_button(&mut self) -> bool {
        if !self.has_compose_button {
            return false;
        }
        self.compose_clicks += 1;
        true
    }

    fn focus_composer_deferred(&mut self) -> bool {
        if !self.has_composer_input {
            return false;
        }
        self.composer_focus_requests += 1;
        true
    }

    fn focus_message_composer(&mut self) -> bool {
        if !self.has_message_composer {
            return false;
        }
        self.message_composer_focuses += 1;
        true
    }

    fn focus_search_input(&mut self) -> bool {
        if !self.has_search_input {
            return false;
        }
        self.search_focuses += 1;
        true
    }

    fn blur_active_text_field(&mut self) -> bool {
        if !self.has_active_text_field {
            return false;
        }
        self.has_active_text_field = false;
        self.blurs += 1;
        true
    }

    fn click_dismiss_control(&mut self) -> bool {
        if !self.has_dismiss_control {
            return false;
        }
        self.dismiss_clicks += 1;
        true
    }

    fn click_new_items_notice(&mut self) -> bool {
        if !self.has_new_items_notice {
            return false;
        }
        self.notice_clicks += 1;
        true
    }

    fn click_message_send(&mut self) -> bool {
        if !self.has_message_send {
            return false;
        }
        self.message_sends += 1;
        true
    }

    fn click_composition_send(&mut self) -> bool {
        if !self.has_composition_send {
            return false;
        }
        self.composition_sends += 1;
        true
    }
}

/// Viewport double that clamps like a real scrolling surface and records
/// every scroll delta.
pub struct FakeViewport {
    pub scroll_top: f64,
    pub height: f64,
    pub content_height: f64,
    /// Deltas passed to `scroll_by`, in order.
    pub scroll_deltas: Vec<f64>,
}

impl Default for FakeViewport {
    fn default() -> Self {
        Self {
            scroll_top: 0.0,
            height: 500.0,
            content_height: 10_000.0,
            scroll_deltas: Vec::new(),
        }
    }
}

impl FakeViewport {
    pub fn new(height: f64, content_height: f64) -> Self {
        Self {
            height,
            content_height,
            ..Self::default()
        }
    }

    fn max_scroll(&self) -> f64 {
        (self.content_height - self.height).max(0.0)
    }
}

impl Viewport for FakeViewport {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn content_height(&self) -> f64 {
        self.content_height
    }

    fn scroll_by(&mut self, delta: f64) {
        self.scroll_deltas.push(delta);
        self.scroll_top = (self.scroll_top + delta).clamp(0.0, self.max_scroll());
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
    }
}

/// Shell double recording every call.
#[derive(Default)]
pub struct FakeShell {
    pub back_possible: bool,
    pub forward_possible: bool,
    pub backs: usize,
    pub forwards: usize,
    pub reloads: usize,
    pub zoom: f64,
    pub opened_urls: Vec<String>,
    pub devtools_opens: usize,
    pub quits: usize,
    pub account_switches: Vec<AccountSwitch>,
}

impl Shell for FakeShell {
    fn can_go_back(&self) -> bool {
        self.back_possible
    }

    fn go_back(&mut self) {
        self.backs += 1;
    }

    fn can_go_forward(&self) -> bool {
        self.forward_possible
    }

    fn go_forward(&mut self) {
        self.forwards += 1;
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    fn set_zoom_factor(&mut self, factor: f64) {
        self.zoom = factor;
    }

    fn open_external(&mut self, url: &str) {
        self.opened_urls.push(url.to_string());
    }

    fn open_devtools(&mut self) {
        self.devtools_opens += 1;
    }

    fn quit(&mut self) {
        self.quits += 1;
    }

    fn switch_account(&mut self, which: AccountSwitch) {
        self.account_switches.push(which);
    }
}

/// `count` items of uniform `height`, stacked downwards from offset 0.
pub fn uniform_items(count: u64, height: f64) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            id: ItemId(i),
            top: i as f64 * height,
            bottom: (i + 1) as f64 * height,
        })
        .collect()
}

/// Bundle the three fakes into an `AppContext`.
pub fn app_ctx<'a>(
    page: &'a mut FakePage,
    viewport: &'a mut FakeViewport,
    shell: &'a mut FakeShell,
) -> AppContext<'a> {
    AppContext {
        page,
        viewport,
        shell,
    }
}
