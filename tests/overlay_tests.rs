//! Integration tests for overlay panels driven through `AppState`
//! and the key event handler.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use steelcore::config::Config;
use steelcore::models::Deck;
use steelcore::tui::handlers::handle_key_event;
use steelcore::tui::{AppState, OverlayKind};

fn make_state() -> AppState {
    AppState::new(Deck::builtin(), Config::default())
}

fn press(state: &mut AppState, code: KeyCode) {
    handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

#[test]
fn opening_panels_stacks_newest_on_top() {
    let mut state = make_state();
    press(&mut state, KeyCode::Char('a'));
    press(&mut state, KeyCode::Char('c'));

    assert_eq!(
        state.overlays.kinds(),
        vec![OverlayKind::Contact, OverlayKind::About]
    );
}

#[test]
fn reopening_a_kind_replaces_it() {
    let mut state = make_state();
    press(&mut state, KeyCode::Char('a'));
    press(&mut state, KeyCode::Char('c'));
    press(&mut state, KeyCode::Char('a'));

    assert_eq!(state.overlays.len(), 2);
    assert_eq!(state.overlays.kinds()[0], OverlayKind::About);
}

#[test]
fn esc_closes_only_the_top_panel() {
    let mut state = make_state();
    press(&mut state, KeyCode::Char('a'));
    press(&mut state, KeyCode::Char('v'));

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.overlays.kinds(), vec![OverlayKind::About]);

    press(&mut state, KeyCode::Esc);
    assert!(state.overlays.is_empty());
}

#[test]
fn overlay_vault_is_independent_of_main_vault() {
    let mut state = make_state();
    press(&mut state, KeyCode::Right);
    assert_eq!(state.vault.cursor(), 1);

    press(&mut state, KeyCode::Char('v'));
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);

    // The overlay copy moved; the main panel did not
    assert_eq!(state.vault.cursor(), 1);

    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Right);
    assert_eq!(state.vault.cursor(), 2);
}

#[test]
fn source_regions_survive_repeated_open_close() {
    let mut state = make_state();
    let about_before = state.deck.about.clone();
    let contact_before = state.deck.contact.clone();

    for _ in 0..5 {
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('c'));
        press(&mut state, KeyCode::Esc);
    }

    assert_eq!(state.deck.about, about_before);
    assert_eq!(state.deck.contact, contact_before);
    assert!(state.overlays.is_empty());
}

#[test]
fn open_from_overlay_vault_schedules_navigation() {
    let mut state = make_state();
    press(&mut state, KeyCode::Char('v'));
    press(&mut state, KeyCode::Enter);

    assert!(state.nav.is_armed());
    assert!(state.nav_target.is_some());
}

#[test]
fn scheduled_navigation_fires_after_delay() {
    let mut state = make_state();
    press(&mut state, KeyCode::Enter);
    let target = state.nav_target.clone().unwrap();

    // Before the deadline nothing happens
    state.tick(Instant::now());
    assert!(!state.should_quit);

    state.tick(Instant::now() + Duration::from_secs(2));
    assert!(state.should_quit);
    assert_eq!(state.exit_link.as_deref(), Some(target.as_str()));
}

#[test]
fn rapid_reopen_supersedes_earlier_navigation() {
    let mut state = make_state();
    let t0 = Instant::now();
    press(&mut state, KeyCode::Enter);
    let gen_first = state.nav.generation();

    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);
    assert!(state.nav.generation() > gen_first);

    // Only the latest target survives
    state.tick(t0 + Duration::from_secs(2));
    assert!(state.should_quit);
    let link = state.exit_link.as_deref().unwrap();
    assert_eq!(link, state.deck.records[1].link.as_deref().unwrap());
}
