//! Key input routing and action dispatch.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::shortcuts::{Action, ShortcutRegistry};

use super::carousel::CarouselEvent;
use super::component::Component;
use super::{AppState, OverlayKind};

/// Handles a key event. Returns `true` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let now = Instant::now();

    // An open overlay owns the keyboard
    if !state.overlays.is_empty() {
        if let Some(CarouselEvent::Open(request)) = state.overlays.handle_input(key) {
            state.request_open(&request, now);
        }
        return Ok(false);
    }

    let registry = ShortcutRegistry::new();
    if let Some(action) = registry.lookup(key) {
        return dispatch_action(state, action, now);
    }

    // Unbound keys (digit jumps) fall through to the vault carousel
    if let Some(CarouselEvent::Open(request)) = state.vault.handle_input(key) {
        state.request_open(&request, now);
    }
    Ok(false)
}

/// Executes an action against the state. Returns `true` to quit.
pub fn dispatch_action(state: &mut AppState, action: Action, now: Instant) -> Result<bool> {
    match action {
        Action::Ignite => state.ignite(now),
        Action::Pulse => state.pulse(now),
        Action::Scramble => state.scramble(now),

        Action::VaultPrev => state.vault.advance(-1),
        Action::VaultNext => state.vault.advance(1),
        Action::VaultOpen => {
            if let Some(request) = state.vault.open() {
                state.request_open(&request, now);
            }
        }

        Action::OpenAbout => open_overlay(state, OverlayKind::About),
        Action::OpenContact => open_overlay(state, OverlayKind::Contact),
        Action::OpenProjects => open_overlay(state, OverlayKind::Projects),

        Action::SliderUp(slider) => state.rack.adjust(slider, 5),
        Action::SliderDown(slider) => state.rack.adjust(slider, -5),

        Action::Quit => return Ok(true),
    }
    Ok(false)
}

fn open_overlay(state: &mut AppState, kind: OverlayKind) {
    let records = state.records.clone();
    state.overlays.open(kind, &state.deck, &records);
    state.set_status(format!("panel online: {}", kind.title().trim().to_lowercase()));
}
