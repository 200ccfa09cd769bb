//! Press/release swipe recognition, used where continuous drag tracking is
//! unavailable or unwanted.

use crate::types::FlipDirection;

pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Share of the book width a swipe must cover when the threshold is scaled
/// to the surface instead of fixed in pixels.
const SWIPE_WIDTH_FRACTION: f32 = 6.0;
const MIN_SCALED_THRESHOLD: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    Down,
}

impl Swipe {
    /// Page turn a swipe maps to: left reveals the next page, right the
    /// previous one. Vertical swipes do not turn pages.
    pub const fn flip_direction(self) -> Option<FlipDirection> {
        match self {
            Self::Left => Some(FlipDirection::Next),
            Self::Right => Some(FlipDirection::Previous),
            Self::Up | Self::Down => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f32,
    start: Option<(f32, f32)>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeDetector {
    pub const fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// A detector whose threshold is a sixth of `width`, for surfaces
    /// measured in coarse units such as terminal cells.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn for_width(width: f32) -> Self {
        Self::new((width / SWIPE_WIDTH_FRACTION).max(MIN_SCALED_THRESHOLD))
    }

    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    pub const fn press(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    pub const fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Classifies the gesture between the last press and this release.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn release(&mut self, x: f32, y: f32) -> Option<Swipe> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;
        let (abs_x, abs_y) = (dx.abs(), dy.abs());

        if abs_x > abs_y && abs_x > self.threshold {
            Some(if dx > 0.0 { Swipe::Right } else { Swipe::Left })
        } else if abs_y > abs_x && abs_y > self.threshold {
            Some(if dy > 0.0 { Swipe::Down } else { Swipe::Up })
        } else {
            None
        }
    }

    pub const fn reset(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert2::check as assert};

    #[test]
    fn test_horizontal_swipes() {
        let mut detector = SwipeDetector::default();
        detector.press(200.0, 100.0);
        assert!(detector.release(100.0, 110.0) == Some(Swipe::Left));

        detector.press(100.0, 100.0);
        assert!(detector.release(180.0, 90.0) == Some(Swipe::Right));
    }

    #[test]
    fn test_vertical_swipes_do_not_turn_pages() {
        let mut detector = SwipeDetector::default();
        detector.press(100.0, 100.0);
        let swipe = detector.release(110.0, 20.0);
        assert!(swipe == Some(Swipe::Up));
        assert!(swipe.and_then(Swipe::flip_direction).is_none());
    }

    #[test]
    fn test_short_or_unpressed_release_is_ignored() {
        let mut detector = SwipeDetector::new(5.0);
        assert!(detector.release(50.0, 50.0).is_none());

        detector.press(10.0, 10.0);
        assert!(detector.release(14.0, 12.0).is_none());
        assert!(!detector.is_tracking());
    }

    #[test]
    fn test_half_book_swipe_in_cells_turns_the_page() {
        let mut detector = SwipeDetector::for_width(80.0);
        detector.press(60.0, 10.0);
        let swipe = detector.release(20.0, 10.0);
        assert!(swipe == Some(Swipe::Left));
        assert!(swipe.and_then(Swipe::flip_direction) == Some(FlipDirection::Next));

        detector.press(40.0, 10.0);
        assert!(detector.release(45.0, 10.0).is_none());
    }

    #[test]
    fn test_scaled_threshold_has_a_floor() {
        assert!(SwipeDetector::for_width(2.0).threshold() == 1.0);
    }

    #[test]
    fn test_reset_drops_the_pending_press() {
        let mut detector = SwipeDetector::new(5.0);
        detector.press(100.0, 10.0);
        assert!(detector.is_tracking());

        detector.reset();
        assert!(!detector.is_tracking());
        assert!(detector.release(10.0, 10.0).is_none());
    }

    #[test]
    fn test_swipe_direction_mapping() {
        assert!(Swipe::Left.flip_direction() == Some(FlipDirection::Next));
        assert!(Swipe::Right.flip_direction() == Some(FlipDirection::Previous));
    }
}
