//! Keymap configuration loading.
//!
//! Configuration is a single mapping from combination strings to action
//! names, loaded once at startup and read-only thereafter. The crate ships
//! a complete default keymap; a user file overlays it entry by entry, and
//! an entry whose value is `null` (JSON) or empty (TOML) unbinds the
//! default for that combination.
//!
//! TOML is the primary on-disk format, with platform-specific directory
//! resolution for the default location; `.json` files are accepted for
//! hosts that keep their settings in JSON.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::actions::Action;

/// Default keymap shipped with the crate. Every built-in action is
/// reachable out of the box.
const DEFAULT_KEYMAPS: &[(&str, &str)] = &[
    ("j", "next-item"),
    ("k", "previous-item"),
    ("escape", "unfocus-item"),
    ("space", "scroll-page-down"),
    ("shift+space", "scroll-page-up"),
    ("pagedown", "scroll-page-down"),
    ("pageup", "scroll-page-up"),
    ("home", "scroll-to-top"),
    ("end", "scroll-to-bottom"),
    ("1", "switch-timeline"),
    ("2", "switch-notifications"),
    ("3", "switch-messages"),
    ("4", "switch-search"),
    ("n", "compose"),
    ("ctrl+enter", "send-composition"),
    ("r", "reply"),
    ("t", "repost"),
    ("q", "quote"),
    ("f", "like"),
    ("o", "open-item"),
    ("i", "open-media"),
    ("shift+i", "open-media-in-browser"),
    ("l", "open-links"),
    ("u", "show-author"),
    ("alt+left", "go-back"),
    ("alt+right", "go-forward"),
    ("ctrl+r", "reload"),
    ("ctrl+plus", "zoom-in"),
    ("ctrl+-", "zoom-out"),
    ("ctrl+shift+i", "open-devtools"),
    ("ctrl+q", "quit"),
    ("ctrl+shift+a", "last-account"),
    ("ctrl+shift+j", "next-account"),
    ("ctrl+shift+k", "previous-account"),
];

/// Keymap configuration: combination string to optional action name.
///
/// `None` means "explicitly unbound" and exists so a user entry can remove
/// a default binding. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Mapping from combination string to action name.
    #[serde(default)]
    pub keymaps: HashMap<String, Option<String>>,
}

impl Default for KeymapConfig {
    /// The built-in default keymap.
    fn default() -> Self {
        let keymaps = DEFAULT_KEYMAPS
            .iter()
            .map(|&(combo, action)| (combo.to_string(), Some(action.to_string())))
            .collect();
        Self { keymaps }
    }
}

impl KeymapConfig {
    /// An empty configuration with no bindings at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            keymaps: HashMap::new(),
        }
    }

    /// Overlay `user` entries onto this configuration.
    ///
    /// Every user entry wins over the existing one, including `None`
    /// entries, which unbind.
    #[must_use]
    pub fn merged(mut self, user: Self) -> Self {
        for (combo, action) in user.keymaps {
            self.keymaps.insert(combo, action);
        }
        self
    }

    /// Iterate over the effective (combination, action) pairs, skipping
    /// unbound entries.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keymaps.iter().filter_map(|(combo, action)| {
            action
                .as_deref()
                .filter(|a| !a.is_empty())
                .map(|a| (combo.as_str(), a))
        })
    }

    /// Whether the given action name resolves to a built-in action.
    #[must_use]
    pub fn is_builtin(name: &str) -> bool {
        Action::from_id(name).is_some()
    }

    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/perch/`
    /// - macOS: `~/Library/Application Support/perch/`
    /// - Windows: `%APPDATA%\perch\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("perch"))
    }

    /// Default path of the configuration file.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Whether a configuration file exists at the default location.
    #[must_use]
    pub fn exists() -> bool {
        Self::default_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load the configuration from the default location, merged over the
    /// defaults. A missing file yields the defaults unchanged.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load a configuration file and merge it over the defaults.
    ///
    /// The format is chosen by extension: `.json` parses as JSON (where
    /// `null` unbinds), anything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read keymap config: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let user: Self = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Invalid TOML in {}", path.display()))?
        };

        Ok(Self::default().merged(user))
    }

    /// Serialize to TOML, for writing a starter configuration.
    ///
    /// Unbound entries cannot be represented in TOML and are rejected.
    pub fn to_toml(&self) -> Result<String> {
        if self.keymaps.values().any(Option::is_none) {
            bail!("unbound entries cannot be serialized to TOML");
        }
        toml::to_string_pretty(self).context("Failed to serialize keymap config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::KeyCombo;

    #[test]
    fn defaults_are_well_formed() {
        let config = KeymapConfig::default();
        for (combo, action) in config.bindings() {
            combo
                .parse::<KeyCombo>()
                .unwrap_or_else(|e| panic!("default combo '{combo}' must parse: {e}"));
            assert!(
                KeymapConfig::is_builtin(action),
                "default action '{action}' must be built-in"
            );
        }
    }

    #[test]
    fn defaults_cover_every_action() {
        let config = KeymapConfig::default();
        let bound: Vec<&str> = config.bindings().map(|(_, a)| a).collect();
        for &action in crate::actions::ALL_ACTIONS {
            assert!(
                bound.contains(&action.id()),
                "no default binding for '{}'",
                action.id()
            );
        }
    }

    #[test]
    fn user_entries_override_defaults() {
        let mut user = KeymapConfig::empty();
        user.keymaps
            .insert("j".to_string(), Some("scroll-page-down".to_string()));
        let merged = KeymapConfig::default().merged(user);
        let action = merged
            .bindings()
            .find(|&(combo, _)| combo == "j")
            .map(|(_, a)| a);
        assert_eq!(action, Some("scroll-page-down"));
    }

    #[test]
    fn null_and_empty_entries_unbind() {
        let mut user = KeymapConfig::empty();
        user.keymaps.insert("j".to_string(), None);
        user.keymaps.insert("k".to_string(), Some(String::new()));
        let merged = KeymapConfig::default().merged(user);
        assert!(!merged.bindings().any(|(combo, _)| combo == "j"));
        assert!(!merged.bindings().any(|(combo, _)| combo == "k"));
    }

    #[test]
    fn json_null_parses_as_unbound() {
        let parsed: KeymapConfig =
            serde_json::from_str(r#"{"keymaps": {"j": null, "x": "quit"}}"#)
                .expect("valid JSON keymap");
        assert_eq!(parsed.keymaps.get("j"), Some(&None));
        assert_eq!(parsed.keymaps.get("x"), Some(&Some("quit".to_string())));
    }

    #[test]
    fn toml_table_parses() {
        let parsed: KeymapConfig =
            toml::from_str("[keymaps]\n\"ctrl+j\" = \"next-item\"\nq = \"\"\n")
                .expect("valid TOML keymap");
        assert_eq!(
            parsed.keymaps.get("ctrl+j"),
            Some(&Some("next-item".to_string()))
        );
        assert_eq!(parsed.keymaps.get("q"), Some(&Some(String::new())));
    }

    #[test]
    fn default_round_trips_through_toml() {
        let toml_text = KeymapConfig::default().to_toml().expect("serializable");
        let parsed: KeymapConfig = toml::from_str(&toml_text).expect("round trip");
        assert_eq!(parsed, KeymapConfig::default());
    }
}
