//! storyflip - page-flipping storybooks
//!
//! The heart of the crate is [`FlipController`], a small synchronous state
//! machine that turns pointer drags and next/previous/go-to commands into
//! page changes, with a cancelable animation delay between a turn being
//! committed and the page index actually moving. Renderers observe it through
//! [`FlipView`] snapshots.
//!
//! ```
//! use storyflip::{FlipConfig, FlipController, ManualClock, Phase};
//!
//! let clock = ManualClock::new();
//! let mut book = FlipController::with_clock(3, FlipConfig::default(), clock.clone()).unwrap();
//!
//! assert!(book.next_page());
//! assert_eq!(book.phase(), Phase::Committing);
//!
//! clock.advance_ms(750);
//! book.poll();
//! assert_eq!(book.current_page(), 2);
//! ```

pub mod clock;
pub mod controller;
pub mod easing;
pub mod error;
pub mod gesture;
pub mod spread;
pub mod story;
pub mod timer;
pub mod types;
pub mod view;

pub use {
    clock::{Clock, ManualClock, SystemClock},
    controller::{
        Bounds, DEFAULT_DRAG_THRESHOLD, DEFAULT_FLIP_DURATION, FlipConfig, FlipController,
        FlipEvent, FlipState, Phase,
    },
    easing::Easing,
    error::{Result, StoryError},
    gesture::{Swipe, SwipeDetector},
    story::{Story, StoryIssue, StoryPage},
    types::{FlipDirection, MediaKind},
    view::{FlipView, PageRenderer, TranscriptRenderer},
};
