//! Collaborator interfaces to the live document, viewport, and shell.
//!
//! The core never touches a real DOM or browser process. Hosts implement
//! these traits over whatever document and window machinery they embed, and
//! the dispatcher and navigator query them fresh on every call. The
//! underlying page is externally mutated and transiently inconsistent by
//! nature (lazy rendering, infinite scroll), so nothing returned from these
//! methods may be cached across calls.

/// Identity of one focusable item in the rendered sequence.
///
/// Identities must be stable for as long as the element stays rendered on
/// the current page; they are compared, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

/// Identity of a clickable control queried from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(pub u64);

/// One focusable item with its bounding edges in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// Stable identity within the current page.
    pub id: ItemId,
    /// Top edge, in document-space pixels.
    pub top: f64,
    /// Bottom edge, in document-space pixels.
    pub bottom: f64,
}

/// One rendered entry of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem {
    /// Whether this entry is the leading account icon some page variants
    /// render before the first real tab.
    pub is_account_icon: bool,
}

/// The active view mode, which determines the focusable item collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The main timeline of posts.
    Timeline,
    /// The notifications / activity feed.
    Notifications,
    /// The list of direct-message conversations.
    MessageList,
    /// A single direct-message conversation thread.
    MessageThread,
}

/// Kind of element currently holding input focus, as reported by the page.
///
/// Used by the capture policy to decide whether a combination may fire
/// while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// Nothing relevant holds focus.
    None,
    /// A content-editable region.
    ContentEditable,
    /// A multi-line text area.
    TextArea,
    /// A drop-down selection element.
    Select,
    /// A single-line input element with the given `type` attribute.
    Input {
        /// The raw `type` attribute value (e.g. `"text"`, `"checkbox"`).
        input_type: String,
    },
    /// Some other focusable element.
    Other,
}

impl FocusTarget {
    /// Whether this element consumes normal typing.
    ///
    /// Inputs are only text entries for a fixed allow-list of types;
    /// checkboxes, radios and the rest never suppress combinations.
    #[must_use]
    pub fn is_text_entry(&self) -> bool {
        match self {
            Self::ContentEditable | Self::TextArea | Self::Select => true,
            Self::Input { input_type } => matches!(
                input_type.as_str(),
                "search" | "text" | "url" | "email" | "tel" | "number"
            ),
            Self::None | Self::Other => false,
        }
    }
}

/// Which account to switch to via the shell's inter-process signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSwitch {
    /// The next configured account.
    Next,
    /// The previous configured account.
    Previous,
    /// The most recently used account.
    Last,
}

/// Document/query collaborator: the rendered page.
///
/// Query methods take the page as it is *right now*; click and focus
/// methods are fire-and-forget side effects. Methods returning `bool`
/// report whether the target existed and the operation was performed.
pub trait PageView {
    /// Current page address, used as the navigation epoch.
    fn address(&self) -> String;

    /// Origin that internal links resolve against.
    fn origin(&self) -> String;

    /// The active view mode.
    fn view_mode(&self) -> ViewMode;

    /// Ordered focusable items for the active view mode.
    fn items(&self) -> Vec<Item>;

    /// Rendered height of the fixed header, if one is currently shown.
    /// Items aligned to the leading edge scroll against its bottom edge.
    fn header_height(&self) -> Option<f64>;

    /// Add or remove the focused-item marker on the given item.
    fn set_focus_marker(&mut self, item: ItemId, focused: bool);

    /// Kind of element currently holding input focus.
    fn focused_element(&self) -> FocusTarget;

    /// Rendered tab-bar entries, in display order.
    fn tab_items(&self) -> Vec<TabItem>;

    /// Click the `index`-th rendered tab-bar entry.
    fn click_tab(&mut self, index: usize);

    /// Click the item element itself.
    fn click_item(&mut self, item: ItemId);

    /// Click a previously queried control.
    fn click_button(&mut self, button: ButtonId);

    /// Action-button clusters of an item, outermost first. Items that
    /// contain a conversation render one cluster per post.
    fn item_action_clusters(&self, item: ItemId) -> Vec<Vec<ButtonId>>;

    /// Buttons of the currently open selection dialog, in display order.
    fn selection_dialog_buttons(&self) -> Vec<ButtonId>;

    /// The clickable body of an item, when it has one.
    fn item_body_button(&self, item: ItemId) -> Option<ButtonId>;

    /// User icons of an activity notification entry.
    fn item_activity_icons(&self, item: ItemId) -> Vec<ButtonId>;

    /// Author icons of an item, in display order.
    fn item_author_icons(&self, item: ItemId) -> Vec<ButtonId>;

    /// The media thumbnail inside an item, when present.
    fn item_media_thumbnail(&self, item: ItemId) -> Option<ButtonId>;

    /// Link target of the media thumbnail, possibly path-only.
    fn item_media_link(&self, item: ItemId) -> Option<String>;

    /// Link targets inside the item's text.
    fn item_links(&self, item: ItemId) -> Vec<String>;

    /// Click the compose button. `false` when no such button is rendered.
    fn click_compose_button(&mut self) -> bool;

    /// Schedule moving input focus into the composition input once the
    /// current event turn completes, letting the host finish mounting it.
    /// `false` when the input is not rendered; fire-and-forget otherwise.
    fn focus_composer_deferred(&mut self) -> bool;

    /// Focus the message composer of a conversation thread.
    fn focus_message_composer(&mut self) -> bool;

    /// Focus the search page's input field.
    fn focus_search_input(&mut self) -> bool;

    /// Blur the app text field currently holding focus, if any.
    fn blur_active_text_field(&mut self) -> bool;

    /// Click a dismiss control (back button or cancel-edit button).
    fn click_dismiss_control(&mut self) -> bool;

    /// Click the "new items available" notice when it is shown.
    fn click_new_items_notice(&mut self) -> bool;

    /// Click the send button of a message thread.
    fn click_message_send(&mut self) -> bool;

    /// Click the send button of the composition area.
    fn click_composition_send(&mut self) -> bool;
}

/// Viewport collaborator: the scrolling surface the page renders into.
pub trait Viewport {
    /// Current scroll offset from the top of the document.
    fn scroll_top(&self) -> f64;

    /// Visible height of the viewport.
    fn height(&self) -> f64;

    /// Total scrollable height of the document.
    fn content_height(&self) -> f64;

    /// Scroll by a signed vertical delta. Out-of-bounds deltas are left
    /// to the host to clamp.
    fn scroll_by(&mut self, delta: f64);

    /// Scroll to an absolute offset.
    fn scroll_to(&mut self, offset: f64);
}

/// Host shell collaborator: window, history, and process control.
///
/// All methods are opaque side effects; none of their outcomes feed back
/// into the core's logic.
pub trait Shell {
    /// Whether history navigation backwards is possible.
    fn can_go_back(&self) -> bool;

    /// Navigate back in history.
    fn go_back(&mut self);

    /// Whether history navigation forwards is possible.
    fn can_go_forward(&self) -> bool;

    /// Navigate forward in history.
    fn go_forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// Current zoom factor.
    fn zoom_factor(&self) -> f64;

    /// Set the zoom factor.
    fn set_zoom_factor(&mut self, factor: f64);

    /// Open a URL in the external browser.
    fn open_external(&mut self, url: &str);

    /// Open the developer tools.
    fn open_devtools(&mut self);

    /// Quit the application.
    fn quit(&mut self);

    /// Signal the main process to switch accounts.
    fn switch_account(&mut self, which: AccountSwitch);
}

/// Shared application context handed to action handlers.
///
/// Bundles mutable borrows of the three collaborators for the duration of
/// one dispatched event.
pub struct AppContext<'a> {
    /// The rendered page.
    pub page: &'a mut dyn PageView,
    /// The scrolling surface.
    pub viewport: &'a mut dyn Viewport,
    /// The host shell.
    pub shell: &'a mut dyn Shell,
}
