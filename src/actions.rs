//! Built-in action names.
//!
//! Every combination in the keymap resolves to either one of these
//! built-in actions or to an externally registered handler name. The enum
//! is closed on purpose: resolution always consults this table first, so a
//! custom handler can never shadow a built-in of the same name.

/// All built-in actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === FOCUS NAVIGATION ===
    /// Move the focus cursor to the next item.
    NextItem,
    /// Move the focus cursor to the previous item.
    PreviousItem,
    /// Drop focus: blur a text field, dismiss an overlay, or clear the
    /// focus marker.
    UnfocusItem,

    // === SCROLLING ===
    /// Scroll down one viewport height.
    ScrollPageDown,
    /// Scroll up one viewport height.
    ScrollPageUp,
    /// Jump to the top of the page.
    ScrollToTop,
    /// Jump to the bottom of the page.
    ScrollToBottom,

    // === SECTION SWITCHING ===
    /// Switch to the timeline tab.
    SwitchTimeline,
    /// Switch to the notifications tab.
    SwitchNotifications,
    /// Switch to the direct-messages tab.
    SwitchMessages,
    /// Switch to the search tab and focus its input.
    SwitchSearch,

    // === COMPOSITION ===
    /// Open the composition area (or the message composer in a thread).
    Compose,
    /// Submit the composition or message being written.
    SendComposition,
    /// Reply to the focused item.
    Reply,
    /// Repost the focused item.
    Repost,
    /// Quote the focused item.
    Quote,
    /// Like the focused item.
    Like,

    // === OPENING ===
    /// Open the focused item's detail view.
    OpenItem,
    /// Open the focused item's media viewer.
    OpenMedia,
    /// Open the focused item's media in the external browser.
    OpenMediaInBrowser,
    /// Open the focused item's links in the external browser.
    OpenLinks,
    /// Open the focused item's author profile.
    ShowAuthor,

    // === SHELL ===
    /// Navigate back in history.
    GoBack,
    /// Navigate forward in history.
    GoForward,
    /// Reload the page.
    Reload,
    /// Increase the zoom factor.
    ZoomIn,
    /// Decrease the zoom factor.
    ZoomOut,
    /// Open the developer tools.
    OpenDevtools,
    /// Quit the application.
    Quit,

    // === ACCOUNTS ===
    /// Switch to the most recently used account.
    LastAccount,
    /// Switch to the next account.
    NextAccount,
    /// Switch to the previous account.
    PreviousAccount,
}

/// Every built-in action, in display order.
pub const ALL_ACTIONS: &[Action] = &[
    Action::NextItem,
    Action::PreviousItem,
    Action::UnfocusItem,
    Action::ScrollPageDown,
    Action::ScrollPageUp,
    Action::ScrollToTop,
    Action::ScrollToBottom,
    Action::SwitchTimeline,
    Action::SwitchNotifications,
    Action::SwitchMessages,
    Action::SwitchSearch,
    Action::Compose,
    Action::SendComposition,
    Action::Reply,
    Action::Repost,
    Action::Quote,
    Action::Like,
    Action::OpenItem,
    Action::OpenMedia,
    Action::OpenMediaInBrowser,
    Action::OpenLinks,
    Action::ShowAuthor,
    Action::GoBack,
    Action::GoForward,
    Action::Reload,
    Action::ZoomIn,
    Action::ZoomOut,
    Action::OpenDevtools,
    Action::Quit,
    Action::LastAccount,
    Action::NextAccount,
    Action::PreviousAccount,
];

impl Action {
    /// Stable string id used in keymap configuration files.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NextItem => "next-item",
            Self::PreviousItem => "previous-item",
            Self::UnfocusItem => "unfocus-item",
            Self::ScrollPageDown => "scroll-page-down",
            Self::ScrollPageUp => "scroll-page-up",
            Self::ScrollToTop => "scroll-to-top",
            Self::ScrollToBottom => "scroll-to-bottom",
            Self::SwitchTimeline => "switch-timeline",
            Self::SwitchNotifications => "switch-notifications",
            Self::SwitchMessages => "switch-messages",
            Self::SwitchSearch => "switch-search",
            Self::Compose => "compose",
            Self::SendComposition => "send-composition",
            Self::Reply => "reply",
            Self::Repost => "repost",
            Self::Quote => "quote",
            Self::Like => "like",
            Self::OpenItem => "open-item",
            Self::OpenMedia => "open-media",
            Self::OpenMediaInBrowser => "open-media-in-browser",
            Self::OpenLinks => "open-links",
            Self::ShowAuthor => "show-author",
            Self::GoBack => "go-back",
            Self::GoForward => "go-forward",
            Self::Reload => "reload",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::OpenDevtools => "open-devtools",
            Self::Quit => "quit",
            Self::LastAccount => "last-account",
            Self::NextAccount => "next-account",
            Self::PreviousAccount => "previous-account",
        }
    }

    /// Resolve a configured action name to a built-in, if it is one.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        ALL_ACTIONS.iter().copied().find(|a| a.id() == id)
    }
}
