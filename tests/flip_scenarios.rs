#![allow(clippy::missing_panics_doc, clippy::arithmetic_side_effects)]
use {
    assert2::check as assert,
    std::{cell::RefCell, rc::Rc},
    storyflip::{
        Bounds, FlipConfig, FlipController, FlipDirection, FlipEvent, FlipView, ManualClock,
        PageRenderer, Phase, Story, TranscriptRenderer, story,
    },
};

const FLIP_MS: u64 = 750;

fn controller(total: usize, clock: &ManualClock) -> FlipController<ManualClock> {
    FlipController::with_clock(total, FlipConfig::default(), clock.clone()).unwrap()
}

fn settle(ctrl: &mut FlipController<ManualClock>, clock: &ManualClock) {
    clock.advance_ms(FLIP_MS);
    ctrl.poll();
}

#[test]
fn two_next_pages_reach_the_end_of_a_three_page_story() {
    let clock = ManualClock::new();
    let mut ctrl = controller(3, &clock);

    assert!(ctrl.next_page());
    settle(&mut ctrl, &clock);
    assert!(ctrl.next_page());
    settle(&mut ctrl, &clock);

    assert!(ctrl.current_page() == 3);
    assert!(!ctrl.next_page());
    assert!(ctrl.is_idle());
}

#[test]
fn large_leftward_drag_from_the_right_commits_to_the_next_page() {
    let clock = ManualClock::new();
    let mut ctrl = controller(3, &clock).starting_at(2).unwrap();
    let bounds = Bounds::new(0.0, 0.0, 300.0, 400.0);

    assert!(ctrl.start_drag(300.0, 200.0));
    assert!(ctrl.update_drag(100.0, 200.0, bounds));
    assert!(ctrl.state().flip_direction == FlipDirection::Next);
    assert!(ctrl.state().flip_progress > 0.9);

    assert!(ctrl.end_drag());
    assert!(ctrl.phase() == Phase::Committing);

    clock.advance_ms(FLIP_MS / 2);
    assert!(
        ctrl.poll()
            == Some(FlipEvent::PageChanged {
                page: 3,
                direction: FlipDirection::Next,
            })
    );
    assert!(ctrl.current_page() == 3);
}

#[test]
fn go_to_page_past_the_end_is_rejected_without_side_effects() {
    let clock = ManualClock::new();
    let mut ctrl = controller(3, &clock);
    let before = *ctrl.state();

    assert!(!ctrl.go_to_page(5));
    assert!(*ctrl.state() == before);
    assert!(ctrl.time_until_commit().is_none());
}

#[test]
fn boundaries_reject_without_changing_state() {
    let clock = ManualClock::new();
    let mut ctrl = controller(2, &clock);

    let before = *ctrl.state();
    assert!(!ctrl.prev_page());
    assert!(*ctrl.state() == before);

    ctrl.sync_page(2);
    let before = *ctrl.state();
    assert!(!ctrl.next_page());
    assert!(*ctrl.state() == before);
}

#[test]
fn commands_during_a_commit_are_rejected_until_it_resolves() {
    let clock = ManualClock::new();
    let mut ctrl = controller(5, &clock);

    assert!(ctrl.next_page());
    let during = *ctrl.state();
    assert!(!ctrl.next_page());
    assert!(!ctrl.prev_page());
    assert!(!ctrl.go_to_page(4));
    assert!(!ctrl.start_drag(10.0, 10.0));
    assert!(*ctrl.state() == during);

    settle(&mut ctrl, &clock);
    assert!(ctrl.current_page() == 2);
    assert!(ctrl.go_to_page(4));
}

#[test]
fn short_drag_snaps_back() {
    let clock = ManualClock::new();
    let mut ctrl = controller(3, &clock);
    let bounds = Bounds::new(0.0, 0.0, 300.0, 400.0);

    ctrl.start_drag(290.0, 100.0);
    ctrl.update_drag(280.0, 100.0, bounds);
    assert!(ctrl.state().flip_progress < FlipConfig::default().drag_threshold);

    assert!(!ctrl.end_drag());
    assert!(ctrl.state().flip_progress == 0.0);
    assert!(ctrl.is_idle());

    clock.advance_ms(FLIP_MS * 4);
    assert!(ctrl.poll().is_none());
    assert!(ctrl.current_page() == 1);
}

#[test]
fn cancelled_commit_never_lands() {
    let clock = ManualClock::new();
    let mut ctrl = controller(3, &clock);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    ctrl.subscribe(move |event| sink.borrow_mut().push(*event));

    assert!(ctrl.next_page());
    clock.advance_ms(FLIP_MS / 3);
    assert!(ctrl.cancel_flip());

    clock.advance_ms(FLIP_MS * 4);
    assert!(ctrl.poll().is_none());
    assert!(ctrl.current_page() == 1);
    assert!(events.borrow().is_empty());
}

#[test]
fn observers_hear_commits_and_story_completion() {
    let clock = ManualClock::new();
    let mut ctrl = controller(2, &clock);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    ctrl.subscribe(move |event| sink.borrow_mut().push(*event));

    ctrl.next_page();
    settle(&mut ctrl, &clock);
    ctrl.next_page();

    let seen = events.borrow().clone();
    assert!(
        seen == [
            FlipEvent::PageChanged {
                page: 2,
                direction: FlipDirection::Next,
            },
            FlipEvent::StoryComplete,
        ]
    );
}

#[test]
fn page_stays_in_range_under_a_long_mixed_sequence() {
    let clock = ManualClock::new();
    let mut ctrl = controller(4, &clock);
    let bounds = Bounds::new(0.0, 0.0, 120.0, 80.0);

    let mut seed: u32 = 0x2545_f491;
    for _ in 0..2_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        let x = (seed % 120) as f32;
        match seed % 9 {
            0 => {
                ctrl.next_page();
            }
            1 => {
                ctrl.prev_page();
            }
            2 => {
                ctrl.go_to_page((seed % 7) as usize);
            }
            3 => {
                ctrl.start_drag(x, 40.0);
            }
            4 => {
                ctrl.update_drag(x, 40.0, bounds);
            }
            5 => {
                ctrl.end_drag();
            }
            6 => {
                ctrl.cancel_flip();
            }
            7 => clock.advance_ms(u64::from(seed % 500)),
            _ => {
                ctrl.poll();
            }
        }

        let state = *ctrl.state();
        assert!((1..=4).contains(&state.current_page));
        assert!((0.0..=1.0).contains(&state.flip_progress));
        assert!(!(state.is_flipping && state.is_dragging));
    }
}

#[test]
fn transcript_follows_a_sample_story_through_a_drag() {
    let story: Story = story::sample("brave-hero").unwrap();
    let clock = ManualClock::new();
    let mut ctrl = controller(story.page_count(), &clock);
    let bounds = Bounds::new(0.0, 0.0, 300.0, 400.0);
    let mut renderer = TranscriptRenderer::default();

    ctrl.start_drag(280.0, 200.0);
    ctrl.update_drag(120.0, 200.0, bounds);

    let mut out = String::new();
    let view = FlipView::capture(&story, &ctrl).unwrap();
    renderer.render(&view, &mut out);
    assert!(out.contains("page 1 of 3"));
    assert!(out.contains("dragging next"));
    assert!(out.contains("-> page 2"));

    ctrl.end_drag();
    clock.advance_ms(FLIP_MS);
    ctrl.poll();

    let mut out = String::new();
    let view = FlipView::capture(&story, &ctrl).unwrap();
    renderer.render(&view, &mut out);
    assert!(out.contains("page 2 of 3"));
    assert!(!out.contains("dragging"));
}
