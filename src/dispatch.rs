//! Key-event dispatch.
//!
//! The dispatcher owns the binding table built from a [`KeymapConfig`],
//! the open registry of externally supplied handlers, and the capture
//! policy deciding whether a combination may fire while the user is
//! typing. Each key event is handled independently and synchronously;
//! nothing here raises to the caller, all failures are absorbed and
//! logged.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::actions::Action;
use crate::combo::KeyCombo;
use crate::config::KeymapConfig;
use crate::handlers;
use crate::navigator::FocusNavigator;
use crate::view::{AppContext, FocusTarget};

/// Externally registered action handler, invoked with the shared context
/// and the originating key event.
pub type CustomHandler = Box<dyn FnMut(&mut AppContext<'_>, &KeyEvent)>;

/// Capture predicate: whether a bound combination may fire given the
/// element currently holding input focus.
///
/// Supplied at construction rather than patched into any global binding
/// state, so hosts can tighten or relax the policy per dispatcher.
pub type CapturePredicate = fn(&KeyEvent, &FocusTarget) -> bool;

/// Default capture policy.
///
/// While a text-entry element holds focus, a combination fires only when
/// a ctrl/alt/meta-class modifier is held or the key is Escape, so normal
/// typing is never intercepted. Shift alone does not qualify. Outside
/// text entries every combination fires.
#[must_use]
pub fn default_capture_policy(event: &KeyEvent, target: &FocusTarget) -> bool {
    if !target.is_text_entry() {
        return true;
    }

    let bypass =
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META;
    if event.modifiers.intersects(bypass) {
        return true;
    }

    event.code == KeyCode::Esc
}

/// What a bound combination resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Binding {
    /// A built-in action. Built-ins always win over custom handlers of
    /// the same name.
    Builtin(Action),
    /// A name looked up in the custom registry at fire time, so handlers
    /// may be registered after the keymap is loaded.
    Custom(String),
}

/// Resolved kind of a binding, for inspection and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind<'a> {
    /// Routed to a built-in action.
    Builtin(Action),
    /// Routed to the custom registry under this name.
    Custom(&'a str),
}

/// Routes key events to built-in or externally registered actions.
pub struct Dispatcher {
    bindings: HashMap<KeyCombo, Binding>,
    handlers: HashMap<String, CustomHandler>,
    capture: CapturePredicate,
    navigator: FocusNavigator,
}

impl Dispatcher {
    /// Create an empty dispatcher with the default capture policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capture_policy(default_capture_policy)
    }

    /// Create an empty dispatcher with an explicit capture policy.
    #[must_use]
    pub fn with_capture_policy(capture: CapturePredicate) -> Self {
        Self {
            bindings: HashMap::new(),
            handlers: HashMap::new(),
            capture,
            navigator: FocusNavigator::new(),
        }
    }

    /// Create a dispatcher and load every binding of `config`.
    #[must_use]
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.load(config);
        dispatcher
    }

    /// Bind every combination of `config` that names an action.
    ///
    /// Malformed combinations are logged and skipped; loading never
    /// fails.
    pub fn load(&mut self, config: &KeymapConfig) {
        for (combination, action) in config.bindings() {
            self.bind(combination, action);
        }
        debug!(bindings = self.bindings.len(), "keymappings registered");
    }

    /// Bind a single combination to an action name.
    ///
    /// A name matching a built-in action routes to it directly; any other
    /// name is resolved against the custom registry when the combination
    /// fires. Parse failures are logged, not raised.
    pub fn bind(&mut self, combination: &str, action_name: &str) {
        let combo: KeyCombo = match combination.parse() {
            Ok(combo) => combo,
            Err(e) => {
                warn!(combination, "ignoring unbindable combination: {e}");
                return;
            }
        };

        let binding = match Action::from_id(action_name) {
            Some(action) => Binding::Builtin(action),
            None => Binding::Custom(action_name.to_string()),
        };
        self.bindings.insert(combo, binding);
    }

    /// Insert or overwrite the handler registered under `name`.
    ///
    /// No validation that any loaded combination references the name;
    /// unreferenced handlers are inert.
    pub fn register_handler<F>(&mut self, name: &str, handler: F)
    where
        F: FnMut(&mut AppContext<'_>, &KeyEvent) + 'static,
    {
        debug!(name, "registered custom handler");
        self.handlers.insert(name.to_string(), Box::new(handler));
    }

    /// Route one key event. Returns whether a binding fired.
    ///
    /// Events with no matching binding, and events suppressed by the
    /// capture policy while typing, are left untouched for the host.
    pub fn dispatch(&mut self, event: &KeyEvent, ctx: &mut AppContext<'_>) -> bool {
        let combo = KeyCombo::from_event(event);
        let Some(binding) = self.bindings.get(&combo).cloned() else {
            return false;
        };

        let focus = ctx.page.focused_element();
        if !(self.capture)(event, &focus) {
            debug!(%combo, "combination suppressed while typing");
            return false;
        }

        match binding {
            Binding::Builtin(action) => {
                debug!(%combo, action = action.id(), "keydown");
                handlers::dispatch_action(action, &mut self.navigator, ctx);
            }
            Binding::Custom(name) => {
                debug!(%combo, action = %name, "keydown: custom action");
                match self.handlers.get_mut(&name) {
                    Some(handler) => handler(ctx, event),
                    None => warn!(action = %name, "no custom handler found for the action"),
                }
            }
        }
        true
    }

    /// Whether a combination is currently bound.
    #[must_use]
    pub fn is_bound(&self, combo: &KeyCombo) -> bool {
        self.bindings.contains_key(combo)
    }

    /// Iterate over the loaded bindings, for inspection.
    pub fn bindings(&self) -> impl Iterator<Item = (KeyCombo, BindingKind<'_>)> {
        self.bindings.iter().map(|(combo, binding)| {
            let kind = match binding {
                Binding::Builtin(action) => BindingKind::Builtin(*action),
                Binding::Custom(name) => BindingKind::Custom(name.as_str()),
            };
            (*combo, kind)
        })
    }

    /// The focus navigator driven by the built-in navigation actions.
    #[must_use]
    pub const fn navigator(&self) -> &FocusNavigator {
        &self.navigator
    }

    /// Mutable access to the focus navigator.
    pub fn navigator_mut(&mut self) -> &mut FocusNavigator {
        &mut self.navigator
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
