//! Virtual scroll region growth tests
//!
//! Tests for the geometric growth rule, per-axis independence, and the
//! spacer size that backs the native scrollbars.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::region::{ScrollRegion, BASELINE_EXTENT, EDGE_MARGIN, GROWTH_FACTOR};
use gridview::state::GridState;
use test_case::test_case;

#[test]
fn starts_at_the_baseline_extent() {
    let region = ScrollRegion::new();
    assert_eq!(region.width, BASELINE_EXTENT);
    assert_eq!(region.height, BASELINE_EXTENT);
}

#[test_case(0.0, BASELINE_EXTENT ; "at origin")]
#[test_case(4999.0, BASELINE_EXTENT ; "just inside")]
#[test_case(5000.0, BASELINE_EXTENT ; "exactly at the edge")]
#[test_case(5001.0, 7500.0 ; "just past the edge")]
#[test_case(6000.0, 7500.0 ; "past the edge")]
fn grows_only_when_scroll_passes_the_extent(scroll_x: f32, expected_width: f32) {
    let region = ScrollRegion::new().grown(scroll_x, 0.0);
    assert_eq!(region.width, expected_width);
    assert_eq!(region.height, BASELINE_EXTENT);
}

#[test]
fn growth_is_geometric_per_step() {
    let region = ScrollRegion::new().grown(6000.0, 0.0);
    assert_eq!(region.width, BASELINE_EXTENT * GROWTH_FACTOR);

    let region = region.grown(7600.0, 0.0);
    assert_eq!(region.width, BASELINE_EXTENT * GROWTH_FACTOR * GROWTH_FACTOR);
}

#[test]
fn one_growth_step_per_event() {
    // A jump far past the extent still multiplies once; subsequent
    // scroll events catch up.
    let region = ScrollRegion::new().grown(20_000.0, 0.0);
    assert_eq!(region.width, 7500.0);

    let region = region.grown(20_000.0, 0.0);
    assert_eq!(region.width, 11_250.0);
}

#[test]
fn axes_grow_independently() {
    let region = ScrollRegion::new().grown(6000.0, 0.0);
    assert_eq!(region.width, 7500.0);
    assert_eq!(region.height, BASELINE_EXTENT);

    let region = region.grown(0.0, 5500.0);
    assert_eq!(region.width, 7500.0);
    assert_eq!(region.height, 7500.0);
}

#[test]
fn region_never_shrinks() {
    let region = ScrollRegion::new().grown(6000.0, 6000.0);
    let back_at_origin = region.grown(0.0, 0.0);
    assert_eq!(back_at_origin, region);
}

#[test]
fn spacer_adds_the_edge_margin() {
    let region = ScrollRegion::new();
    assert_eq!(region.spacer_width(), BASELINE_EXTENT + EDGE_MARGIN);
    assert_eq!(region.spacer_height(), BASELINE_EXTENT + EDGE_MARGIN);
}

#[test]
fn scroll_event_reports_growth_exactly_when_it_happens() {
    let mut state = GridState::new(800.0, 600.0);

    assert!(!state.on_scroll(4000.0, 0.0).region_grew);
    assert!(state.on_scroll(5200.0, 0.0).region_grew);
    assert_eq!(state.region.width, 7500.0);

    // Same position again: already inside the grown region.
    assert!(!state.on_scroll(5200.0, 0.0).region_grew);
}
