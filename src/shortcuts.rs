//! Centralized shortcut and action system.
//!
//! Maps key events to actions for the main deck context. Overlay
//! panels own their keys directly (Esc, arrows) and bypass the
//! registry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::tui::effects::Slider;

/// All actions a user can take from the main deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === CORE ===
    /// Ignite the core: restart the boot-log ticker
    Ignite,
    /// Focus a random vault record
    Pulse,
    /// Scramble the identity monolith
    Scramble,

    // === VAULT ===
    /// Previous record
    VaultPrev,
    /// Next record
    VaultNext,
    /// Open the current record
    VaultOpen,

    // === OVERLAYS ===
    /// Open the about overlay
    OpenAbout,
    /// Open the contact overlay
    OpenContact,
    /// Open the projects overlay
    OpenProjects,

    // === CONTROL RACK ===
    /// Increase a rack slider
    SliderUp(Slider),
    /// Decrease a rack slider
    SliderDown(Slider),

    // === GENERAL ===
    /// Quit the application
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Creates a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key binding from a key event.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry mapping key bindings to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Creates a registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        use KeyCode as K;
        use KeyModifiers as M;

        let mut registry = Self {
            bindings: HashMap::new(),
        };

        // === CORE ===
        registry.register(K::Char('i'), M::NONE, Action::Ignite);
        registry.register(K::Char('p'), M::NONE, Action::Pulse);
        registry.register(K::Char('s'), M::NONE, Action::Scramble);

        // === VAULT ===
        registry.register(K::Left, M::NONE, Action::VaultPrev);
        registry.register(K::Right, M::NONE, Action::VaultNext);
        registry.register(K::Char('h'), M::NONE, Action::VaultPrev);
        registry.register(K::Char('l'), M::NONE, Action::VaultNext);
        registry.register(K::Enter, M::NONE, Action::VaultOpen);

        // === OVERLAYS ===
        registry.register(K::Char('a'), M::NONE, Action::OpenAbout);
        registry.register(K::Char('c'), M::NONE, Action::OpenContact);
        registry.register(K::Char('v'), M::NONE, Action::OpenProjects);

        // === CONTROL RACK ===
        registry.register(K::Char('K'), M::SHIFT, Action::SliderUp(Slider::Spark));
        registry.register(K::Char('J'), M::SHIFT, Action::SliderDown(Slider::Spark));
        registry.register(K::Char('N'), M::SHIFT, Action::SliderUp(Slider::Noise));
        registry.register(K::Char('M'), M::SHIFT, Action::SliderDown(Slider::Noise));
        registry.register(K::Char('G'), M::SHIFT, Action::SliderUp(Slider::Glitch));
        registry.register(K::Char('F'), M::SHIFT, Action::SliderDown(Slider::Glitch));

        // === GENERAL ===
        registry.register(K::Char('q'), M::NONE, Action::Quit);
        registry.register(K::Char('c'), M::CONTROL, Action::Quit);

        registry
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings
            .insert(KeyBinding::new(code, modifiers), action);
    }

    /// Looks up the action for a key event, if bound.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    /// Short hint strings for the status bar.
    #[must_use]
    pub fn hints() -> &'static str {
        "[i]gnite  [p]ulse  [s]cramble  [←/→] vault  [1-9] jump  [Enter] open  \
         [a]bout  [c]ontact  [v]ault panel  [q]uit"
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_bound_key() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::Ignite));
    }

    #[test]
    fn test_lookup_unbound_key() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), None);
    }

    #[test]
    fn test_modifiers_distinguish_bindings() {
        let registry = ShortcutRegistry::new();
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(plain), Some(Action::OpenContact));
        assert_eq!(registry.lookup(ctrl), Some(Action::Quit));
    }
}
