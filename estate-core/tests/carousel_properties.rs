//! Behavioural properties of the carousel controller: index bounds, wrap
//! points, drag rounding, resize re-clamping and degenerate slide sets.

use std::time::{Duration, Instant};

use estate_core::carousel::navigator::{next_index, prev_index};
use estate_core::carousel::projection::translate_percent;
use estate_core::{
    CarouselConfig, CarouselController, GesturePhase, PointerEvent,
    ViewportClass,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDE: f32 = 1440.0;
const NARROW: f32 = 375.0;

fn controller(slides: usize, width: f32) -> CarouselController {
    CarouselController::new(slides, CarouselConfig::default(), width)
}

fn mouse(x: f32) -> PointerEvent {
    PointerEvent::Mouse { x }
}

fn touch(x: f32) -> PointerEvent {
    PointerEvent::Touch { x }
}

#[test]
fn random_steps_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(0x5eed_ca75);

    for slides in 0..12usize {
        for visible in 1..=5usize {
            let mut carousel = controller(slides, WIDE);
            carousel.set_visible_count(visible);
            let upper = slides.saturating_sub(visible);

            for _ in 0..200 {
                if rng.random_bool(0.5) {
                    carousel.next();
                } else {
                    carousel.prev();
                }
                assert!(
                    carousel.current_index() <= upper,
                    "index {} escaped [0, {}] for N={} visible={}",
                    carousel.current_index(),
                    upper,
                    slides,
                    visible
                );
            }
        }
    }
}

#[test]
fn next_at_end_wraps_to_start_and_prev_at_start_wraps_to_end() {
    let mut carousel = controller(8, WIDE);
    assert_eq!(carousel.visible_count(), 4);

    assert_eq!(carousel.prev(), 4);
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.next(), 0);

    assert_eq!(next_index(6, 7, 1), 0);
    assert_eq!(prev_index(0, 7, 1), 6);
}

#[test]
fn projection_is_deterministic() {
    let first = translate_percent(3, -7.5, 4, true);
    let second = translate_percent(3, -7.5, 4, true);
    assert_eq!(first.to_bits(), second.to_bits());

    let mut carousel = controller(8, WIDE);
    carousel.go_to(2);
    assert_eq!(carousel.translate_percent(), carousel.translate_percent());
    assert_eq!(carousel.snapshot(), carousel.snapshot());
}

#[test]
fn drag_past_midpoint_commits_to_the_farther_slide() {
    // N=8, visible=4, 800px track: 25% per slide. Dragging 300px left gives a
    // live translation of -37.5%, which rounds 1.5 up to slide 2.
    let mut carousel = controller(8, WIDE);
    carousel.pointer_down(mouse(700.0), 800.0);
    let live = carousel.pointer_move(mouse(400.0));
    assert_eq!(live, Some(-37.5));

    let outcome = carousel.pointer_up().expect("active drag");
    assert_eq!(outcome.moved_slides, 2);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.translate_percent(), -50.0);
}

#[test]
fn drag_short_of_midpoint_snaps_back() {
    let mut carousel = controller(8, WIDE);
    carousel.go_to(1);
    carousel.pointer_down(touch(500.0), 800.0);
    carousel.pointer_move(touch(420.0)); // 10% further
    let outcome = carousel.touch_end().expect("active drag");
    assert_eq!(outcome.index, 1);
}

#[test]
fn widening_the_window_reclamps_the_index() {
    let mut carousel = controller(4, NARROW);
    assert_eq!(carousel.viewport(), ViewportClass::Narrow);
    carousel.go_to(3);
    assert_eq!(carousel.current_index(), 3);

    assert!(carousel.resize(WIDE));
    assert_eq!(carousel.viewport(), ViewportClass::Wide);
    assert_eq!(carousel.visible_count(), 4);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.translate_percent(), 0.0);
}

#[test]
fn resize_within_the_same_class_is_a_no_op() {
    let mut carousel = controller(8, WIDE);
    carousel.go_to(3);
    assert!(!carousel.resize(WIDE + 200.0));
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn fewer_slides_than_window_is_static() {
    let mut carousel = controller(2, WIDE);
    carousel.set_visible_count(4);
    assert_eq!(carousel.max_index(), 0);

    carousel.next();
    assert_eq!(carousel.current_index(), 0);
    carousel.prev();
    assert_eq!(carousel.current_index(), 0);

    carousel.pointer_down(mouse(800.0), 800.0);
    carousel.pointer_move(mouse(0.0));
    let outcome = carousel.pointer_up().expect("active drag");
    assert_eq!(outcome.index, 0);
}

#[test]
fn empty_slide_set_never_divides_by_zero() {
    let mut carousel = controller(0, WIDE);
    assert_eq!(carousel.visible_count(), 1);
    carousel.next();
    carousel.prev();
    carousel.pointer_down(mouse(10.0), 0.0);
    assert_eq!(carousel.pointer_move(mouse(-500.0)), Some(0.0));
    let outcome = carousel.touch_cancel().expect("active drag");
    assert_eq!(outcome.index, 0);
    assert!(carousel.translate_percent().is_finite());
}

#[test]
fn stepping_through_five_narrow_slides_wraps_after_the_last() {
    let mut carousel = controller(5, NARROW);
    assert_eq!(carousel.visible_count(), 1);
    for expected in 1..=4 {
        assert_eq!(carousel.next(), expected);
    }
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.next(), 0);
}

#[test]
fn pointer_leave_mid_drag_settles_like_release() {
    let mut carousel = controller(8, WIDE);
    carousel.pointer_down(mouse(600.0), 800.0);
    carousel.pointer_move(mouse(380.0)); // -27.5%
    let outcome = carousel.pointer_leave().expect("implicit release");
    assert_eq!(outcome.index, 1);
    assert!(!carousel.is_dragging());
    assert!(!carousel.frame_pending());

    // Further moves are ignored until a new press.
    assert_eq!(carousel.pointer_move(mouse(0.0)), None);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn settle_ease_runs_to_idle() {
    let mut carousel = controller(8, WIDE);
    carousel.pointer_down(mouse(600.0), 800.0);
    carousel.pointer_move(mouse(430.0));
    carousel.poll_frame(Instant::now());
    carousel.pointer_up();

    assert_eq!(carousel.phase(), GesturePhase::Settling);
    assert!(carousel.needs_frames());

    let done = Instant::now() + Duration::from_millis(500);
    assert_eq!(carousel.tick(done), Some(carousel.settled_translation()));
    assert_eq!(carousel.phase(), GesturePhase::Idle);
    assert!(!carousel.needs_frames());
}

#[test]
fn half_slide_drag_right_of_the_start_rounds_away_then_clamps() {
    // +12.5% at 25% per slide is -0.5 slides, which rounds to -1.
    let mut carousel = controller(8, WIDE);
    carousel.pointer_down(mouse(400.0), 800.0);
    assert_eq!(carousel.pointer_move(mouse(500.0)), Some(12.5));

    let outcome = carousel.pointer_up().expect("active drag");
    assert_eq!(outcome.live_translation, 12.5);
    assert_eq!(outcome.moved_slides, -1);
    assert_eq!(outcome.index, 0);
    assert_eq!(carousel.translate_percent(), 0.0);
}
