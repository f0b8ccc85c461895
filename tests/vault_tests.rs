//! Integration tests for the vault carousel invariants.
//!
//! Covers the wrap behavior, dot selection, surface projection, and the
//! independence of two carousel instances over the same record list.

use std::sync::Arc;

use steelcore::models::ProjectRecord;
use steelcore::tui::Carousel;

fn make_records(n: usize) -> Arc<Vec<ProjectRecord>> {
    let records = (0..n)
        .map(|i| {
            let mut r = ProjectRecord::new(format!("{:02}", i + 1), format!("Project {i}"));
            r.tagline = format!("tagline {i}");
            r.difficulty = "MID".to_string();
            r.tech = "Rust".to_string();
            if i % 2 == 0 {
                r.link = Some(format!("projects/{i}"));
                r.cmd = Some(format!("./run {i}"));
            }
            r
        })
        .collect();
    Arc::new(records)
}

#[test]
fn cursor_stays_in_range_for_any_sequence() {
    for n in 1..6 {
        let mut carousel = Carousel::new(make_records(n));
        // A fixed but irregular walk, long enough to wrap several times
        let walk = [1, 1, 1, -1, 1, -1, -1, -1, 1, 1, -1, 1, 1, 1, -1, -1];
        for direction in walk {
            carousel.advance(direction);
            assert!(
                carousel.cursor() < n,
                "cursor {} out of range for n={n}",
                carousel.cursor()
            );
        }
    }
}

#[test]
fn wrap_examples_from_three_records() {
    let mut carousel = Carousel::new(make_records(3));

    carousel.advance(-1);
    assert_eq!(carousel.cursor(), 2);

    carousel.advance(1);
    assert_eq!(carousel.cursor(), 0);
}

#[test]
fn select_marks_only_the_selected_dot() {
    let mut carousel = Carousel::new(make_records(4));
    for k in 0..4 {
        carousel.select(k);
        let dots = carousel.surface().unwrap().dots;
        assert_eq!(dots.iter().filter(|d| **d).count(), 1);
        assert!(dots[k]);
    }
}

#[test]
fn surface_projection_is_idempotent() {
    let mut carousel = Carousel::new(make_records(3));
    carousel.advance(1);
    let first = carousel.surface().unwrap();
    let second = carousel.surface().unwrap();
    assert_eq!(first, second);
}

#[test]
fn footer_path_formats_link_exactly() {
    let mut records = vec![ProjectRecord::new("01", "2048")];
    records[0].link = Some("projects/2048".to_string());
    let carousel = Carousel::new(Arc::new(records));
    assert_eq!(carousel.surface().unwrap().path, "./projects/2048");
}

#[test]
fn footer_path_empty_without_link() {
    let records = vec![ProjectRecord::new("01", "Unlinked")];
    let carousel = Carousel::new(Arc::new(records));
    assert_eq!(carousel.surface().unwrap().path, "");
}

#[test]
fn two_instances_never_affect_each_other() {
    let records = make_records(5);
    let mut a = Carousel::new(Arc::clone(&records));
    let mut b = Carousel::new(Arc::clone(&records));

    a.advance(1);
    a.advance(1);
    b.advance(-1);

    assert_eq!(a.cursor(), 2);
    assert_eq!(b.cursor(), 4);

    b.select(0);
    assert_eq!(a.cursor(), 2);
}

#[test]
fn empty_record_list_is_inert() {
    let mut carousel = Carousel::new(Arc::new(Vec::new()));
    assert!(carousel.surface().is_none());
    assert!(carousel.open().is_none());
    carousel.advance(1);
    carousel.select(5);
    assert_eq!(carousel.cursor(), 0);
}

#[test]
fn open_request_snapshots_the_record() {
    let mut carousel = Carousel::new(make_records(3));
    let request = carousel.open().unwrap();

    carousel.advance(1);
    carousel.advance(1);

    assert_eq!(request.link.as_deref(), Some("projects/0"));
    assert_eq!(request.cmd.as_deref(), Some("./run 0"));
}

#[test]
fn open_is_noop_for_bare_record() {
    let mut carousel = Carousel::new(make_records(2));
    // Record 1 has neither link nor cmd
    carousel.select(1);
    assert!(carousel.open().is_none());
}
