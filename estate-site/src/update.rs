use estate_core::PointerEvent;
use estate_core::carousel::SettleOutcome;
use iced::Task;
use iced::widget::operation::scroll_to;

use crate::messages::{Message, TouchInput};
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::NextProject => {
            state.carousel.next();
            sync_strip(state)
        }
        Message::PrevProject => {
            state.carousel.prev();
            sync_strip(state)
        }
        Message::WindowResized(size) => {
            state.window_size = size;
            state.carousel.resize(size.width);
            // Track width changed even when the visible count did not.
            sync_strip(state)
        }
        Message::StripCursorMoved(point) => {
            state.cursor_x = Some(point.x);
            state.carousel.pointer_move(PointerEvent::Mouse { x: point.x });
            Task::none()
        }
        Message::StripPressed => {
            if let Some(x) = state.cursor_x {
                let track_width = state.track_width();
                state
                    .carousel
                    .pointer_down(PointerEvent::Mouse { x }, track_width);
            } else {
                log::debug!("Strip pressed before any cursor position was seen");
            }
            Task::none()
        }
        Message::StripReleased => {
            let outcome = state.carousel.pointer_up();
            after_release(state, outcome)
        }
        Message::StripExited => {
            state.cursor_x = None;
            let outcome = state.carousel.pointer_leave();
            after_release(state, outcome)
        }
        Message::StripScrolled(offset_x) => {
            if state.strip_drifted(offset_x) {
                log::debug!(
                    "Strip scrolled natively to {:.1}px, restoring {:.1}px",
                    offset_x,
                    state.strip_offset().x
                );
                sync_strip(state)
            } else {
                Task::none()
            }
        }
        Message::Touch(input) => handle_touch(state, input),
        Message::FrameTick(now) => {
            let dragged = state.carousel.poll_frame(now).is_some();
            let eased = state.carousel.tick(now).is_some();
            if dragged || eased {
                sync_strip(state)
            } else {
                Task::none()
            }
        }
        Message::NoOp => Task::none(),
    }
}

fn handle_touch(state: &mut State, input: TouchInput) -> Task<Message> {
    match input {
        TouchInput::Started(x) => {
            let track_width = state.track_width();
            state
                .carousel
                .pointer_down(PointerEvent::Touch { x }, track_width);
            Task::none()
        }
        TouchInput::Moved(x) => {
            state.carousel.pointer_move(PointerEvent::Touch { x });
            Task::none()
        }
        TouchInput::Ended => {
            let outcome = state.carousel.touch_end();
            after_release(state, outcome)
        }
        TouchInput::Cancelled => {
            let outcome = state.carousel.touch_cancel();
            after_release(state, outcome)
        }
    }
}

fn after_release(
    state: &mut State,
    outcome: Option<SettleOutcome>,
) -> Task<Message> {
    let Some(outcome) = outcome else {
        return Task::none();
    };
    log::info!(
        "Project strip settled on index {} of {} ({:?}, moved {})",
        outcome.index,
        state.carousel.max_index(),
        outcome.ended_by,
        outcome.moved_slides
    );
    sync_strip(state)
}

/// Scroll the strip to the translation the carousel currently applies.
fn sync_strip(state: &State) -> Task<Message> {
    scroll_to::<Message>(state.strip_id.clone(), state.strip_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use estate_core::{CarouselConfig, GesturePhase};
    use estate_model::{Slide, SlideSet};
    use iced::{Point, Size};

    // 1064px window: 1000px track, 4 visible, 250px and 25% per slide.
    fn state(slides: usize) -> State {
        let slides = SlideSet::new(
            (0..slides)
                .map(|i| {
                    Slide::new(
                        format!("assets/project_img_{i}.jpg").as_str(),
                        format!("Project {i}"),
                        "$100,000",
                        "Somewhere",
                    )
                })
                .collect(),
        )
        .expect("valid slides");
        State::new(
            slides,
            CarouselConfig::default(),
            Size::new(1064.0, 800.0),
            PathBuf::from("."),
        )
    }

    fn settle(state: &mut State) {
        let _ = update(
            state,
            Message::FrameTick(Instant::now() + Duration::from_secs(1)),
        );
    }

    #[test]
    fn arrows_wrap_at_both_ends() {
        let mut state = state(6);
        let _ = update(&mut state, Message::PrevProject);
        assert_eq!(state.carousel.current_index(), 2);
        let _ = update(&mut state, Message::NextProject);
        assert_eq!(state.carousel.current_index(), 0);
    }

    #[test]
    fn mouse_drag_commits_on_release() {
        let mut state = state(8);
        let _ = update(&mut state, Message::StripCursorMoved(Point::new(600.0, 50.0)));
        let _ = update(&mut state, Message::StripPressed);
        assert!(state.carousel.is_dragging());

        let _ = update(&mut state, Message::StripCursorMoved(Point::new(200.0, 50.0)));
        assert_eq!(state.carousel.translate_percent(), -40.0);

        let _ = update(&mut state, Message::StripReleased);
        assert_eq!(state.carousel.current_index(), 2);
        settle(&mut state);
        assert_eq!(state.carousel.phase(), GesturePhase::Idle);
        assert_eq!(state.strip_offset().x, 500.0);
    }

    #[test]
    fn press_without_a_cursor_position_is_ignored() {
        let mut state = state(8);
        let _ = update(&mut state, Message::StripPressed);
        assert!(!state.carousel.is_dragging());
    }

    #[test]
    fn leaving_the_strip_mid_drag_releases() {
        let mut state = state(8);
        let _ = update(&mut state, Message::StripCursorMoved(Point::new(500.0, 10.0)));
        let _ = update(&mut state, Message::StripPressed);
        let _ = update(&mut state, Message::StripCursorMoved(Point::new(330.0, 10.0)));
        let _ = update(&mut state, Message::StripExited);

        assert!(!state.carousel.is_dragging());
        assert_eq!(state.cursor_x, None);
        assert_eq!(state.carousel.current_index(), 1);
    }

    #[test]
    fn touch_drag_follows_frames_and_snaps_back() {
        let mut state = state(8);
        let _ = update(&mut state, Message::Touch(TouchInput::Started(700.0)));
        let _ = update(&mut state, Message::Touch(TouchInput::Moved(650.0)));

        let _ = update(&mut state, Message::FrameTick(Instant::now()));
        assert_eq!(state.carousel.surface().applied(), -5.0);

        let _ = update(&mut state, Message::Touch(TouchInput::Ended));
        assert_eq!(state.carousel.current_index(), 0);
        settle(&mut state);
        assert_eq!(state.carousel.surface().applied(), 0.0);
        assert!(!state.carousel.needs_frames());
    }

    #[test]
    fn native_strip_scroll_is_pulled_back_to_the_translation() {
        let mut state = state(8);
        let _ = update(&mut state, Message::NextProject);
        settle(&mut state);
        assert_eq!(state.strip_offset().x, 250.0);

        // A wheel scroll left the strip between slides.
        assert!(state.strip_drifted(371.0));
        let _ = update(&mut state, Message::StripScrolled(371.0));
        assert_eq!(state.carousel.current_index(), 1);
        assert_eq!(state.carousel.surface().applied(), -25.0);

        // The echo of our own scroll_to is not re-synced.
        assert!(!state.strip_drifted(250.0));
        assert!(!state.strip_drifted(250.3));
    }

    #[test]
    fn narrowing_the_window_switches_to_single_slides() {
        let mut state = state(8);
        let _ = update(&mut state, Message::WindowResized(Size::new(600.0, 800.0)));
        assert_eq!(state.carousel.visible_count(), 1);
        assert_eq!(state.carousel.max_index(), 7);
        assert_eq!(state.slot_width(), 536.0);
    }
}
