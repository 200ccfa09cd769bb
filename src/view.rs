//! Rendering seam between the flip controller and whatever draws the book.
//!
//! The controller never draws. Each frame, the embedding view takes a
//! [`FlipView`] snapshot and hands it to a [`PageRenderer`].

use {
    crate::{
        clock::Clock,
        controller::{FlipController, FlipState, Phase},
        story::{Story, StoryPage},
        types::FlipDirection,
    },
    std::fmt::Write,
};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FlipView<'a> {
    pub title: &'a str,
    pub page_number: usize,
    pub total_pages: usize,
    pub page: &'a StoryPage,
    /// Page being revealed by a drag or commit, if any.
    pub preview: Option<(usize, &'a StoryPage)>,
    pub state: FlipState,
    pub phase: Phase,
    /// Visual turn fraction in `[0, 1]`.
    pub turn: f32,
    pub can_go_next: bool,
    pub can_go_prev: bool,
}

impl<'a> FlipView<'a> {
    /// Snapshots `controller` against the pages of `story`. Returns `None`
    /// when the controller's page count does not match the story.
    pub fn capture<C: Clock>(story: &'a Story, controller: &FlipController<C>) -> Option<Self> {
        if story.page_count() != controller.total_pages() {
            return None;
        }

        let state = *controller.state();
        let page = story.page(state.current_page)?;
        let preview = controller
            .preview_page()
            .and_then(|number| story.page(number).map(|page| (number, page)));

        Some(Self {
            title: &story.title,
            page_number: state.current_page,
            total_pages: controller.total_pages(),
            page,
            preview,
            state,
            phase: controller.phase(),
            turn: controller.commit_fraction(),
            can_go_next: controller.can_go_next(),
            can_go_prev: controller.can_go_prev(),
        })
    }

    pub const fn direction(&self) -> FlipDirection {
        self.state.flip_direction
    }
}

/// A visual backend for the book.
pub trait PageRenderer {
    /// Where frames are drawn (a terminal buffer, a string, a canvas...).
    type Target: ?Sized;

    fn render(&mut self, view: &FlipView<'_>, target: &mut Self::Target);
}

/// Plain-text renderer, handy for logs, tests and dumb terminals.
#[derive(Debug, Clone)]
pub struct TranscriptRenderer {
    bar_width: usize,
}

impl Default for TranscriptRenderer {
    fn default() -> Self {
        Self { bar_width: 20 }
    }
}

impl TranscriptRenderer {
    pub const fn with_bar_width(bar_width: usize) -> Self {
        Self { bar_width }
    }

    #[allow(clippy::arithmetic_side_effects)]
    fn turn_bar(&self, turn: f32) -> String {
        let filled = ((turn.clamp(0.0, 1.0) * self.bar_width as f32).round() as usize)
            .min(self.bar_width);
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(self.bar_width - filled)
        )
    }
}

impl PageRenderer for TranscriptRenderer {
    type Target = String;

    fn render(&mut self, view: &FlipView<'_>, out: &mut String) {
        let _ = writeln!(
            out,
            "{} - page {} of {}",
            view.title, view.page_number, view.total_pages
        );

        if !view.page.text.is_empty() {
            let _ = writeln!(out, "  {}", view.page.text);
        }
        for asset in view.page.assets() {
            let _ = writeln!(out, "  <{asset}>");
        }

        match view.phase {
            Phase::Idle => {}
            Phase::Dragging | Phase::Committing => {
                let label = if view.phase == Phase::Dragging {
                    "dragging"
                } else {
                    "turning"
                };
                let _ = write!(
                    out,
                    "  {label} {} {}",
                    view.direction(),
                    self.turn_bar(view.turn)
                );
                if let Some((number, _)) = view.preview {
                    let _ = write!(out, " -> page {number}");
                }
                let _ = writeln!(out);
            }
        }

        let prev = if view.can_go_prev { "<" } else { " " };
        let next = if view.can_go_next { ">" } else { " " };
        let _ = writeln!(out, "  {prev} {next}");
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::missing_panics_doc)]
    use {
        super::*,
        crate::{
            clock::ManualClock,
            controller::{Bounds, FlipConfig},
        },
        assert2::check as assert,
    };

    fn story() -> Story {
        Story::new(
            "Three Pigs",
            vec![
                StoryPage::new("Straw").with_illustration("straw.png"),
                StoryPage::new("Sticks"),
                StoryPage::new("Bricks"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_capture_idle() {
        let story = story();
        let ctrl = FlipController::new(3, FlipConfig::default()).unwrap();
        let view = FlipView::capture(&story, &ctrl).unwrap();

        assert!(view.page_number == 1);
        assert!(view.page.text == "Straw");
        assert!(view.preview.is_none());
        assert!(view.can_go_next);
        assert!(!view.can_go_prev);
    }

    #[test]
    fn test_capture_rejects_mismatched_story() {
        let story = story();
        let ctrl = FlipController::new(5, FlipConfig::default()).unwrap();
        assert!(FlipView::capture(&story, &ctrl).is_none());
    }

    #[test]
    fn test_transcript_shows_drag_preview() {
        let story = story();
        let clock = ManualClock::new();
        let mut ctrl = FlipController::with_clock(3, FlipConfig::default(), clock).unwrap();
        ctrl.start_drag(90.0, 10.0);
        ctrl.update_drag(40.0, 10.0, Bounds::new(0.0, 0.0, 100.0, 50.0));

        let view = FlipView::capture(&story, &ctrl).unwrap();
        assert!(view.preview.map(|(n, _)| n) == Some(2));

        let mut out = String::new();
        TranscriptRenderer::with_bar_width(10).render(&view, &mut out);

        assert!(out.starts_with("Three Pigs - page 1 of 3\n"));
        assert!(out.contains("<straw.png>"));
        assert!(out.contains("dragging next [##########] -> page 2"));
    }
}
