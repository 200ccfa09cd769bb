//! Page-flip interaction controller.
//!
//! Turns discrete commands (next, previous, go to) and pointer drags into
//! page-index transitions. At most one transition is in flight: while a drag
//! is tracked or a committed turn is animating, every other command is
//! rejected rather than queued.
//!
//! ```text
//!            start_drag               end_drag (>= threshold)
//!   Idle ─────────────────▶ Dragging ──────────────────────▶ Committing
//!    ▲  ◀─────────────────────┘ end_drag (< threshold)          │
//!    │                          / cancel_flip                   │
//!    └──────────── poll (deadline reached) / cancel_flip ◀──────┘
//! ```
//!
//! `next_page`, `prev_page` and `go_to_page` move straight from `Idle` to
//! `Committing`.

use {
    crate::{
        StoryError,
        clock::{Clock, SystemClock},
        easing::Easing,
        timer::{CommitTimer, TimerHandle},
        types::FlipDirection,
    },
    std::{fmt, time::Duration},
};

/// Default length of a command-initiated page turn.
pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(750);
/// Default fraction of drag travel needed to commit a turn.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 0.3;

/// Pages turn fully once a drag has travelled this fraction of the container.
const FULL_TURN_WIDTH_RATIO: f32 = 3.0;
/// Vertical travel beyond this multiple of horizontal travel is a scroll.
const SCROLL_RATIO: f32 = 2.0;

/// Tuning for a [`FlipController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipConfig {
    pub flip_duration: Duration,
    pub drag_threshold: f32,
    pub easing: Easing,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            flip_duration: DEFAULT_FLIP_DURATION,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            easing: Easing::default(),
        }
    }
}

impl FlipConfig {
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.flip_duration.is_zero() {
            return Err(StoryError::InvalidConfig(
                "flip duration must be greater than zero".to_string(),
            ));
        }

        if !(self.drag_threshold > 0.0 && self.drag_threshold <= 1.0) {
            return Err(StoryError::InvalidConfig(format!(
                "drag threshold must be in (0, 1], got {}",
                self.drag_threshold
            )));
        }

        Ok(())
    }

    /// Drag-initiated turns finish in half the command duration.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn drag_commit_delay(&self) -> Duration {
        self.flip_duration / 2
    }
}

/// Screen-space rectangle of the book the pointer is interacting with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[allow(clippy::arithmetic_side_effects)]
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    #[allow(clippy::arithmetic_side_effects)]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Committing,
}

/// Interaction state exposed to renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipState {
    /// 1-based page on display.
    pub current_page: usize,
    /// A committed turn is animating.
    pub is_flipping: bool,
    /// A pointer gesture is being tracked.
    pub is_dragging: bool,
    pub flip_direction: FlipDirection,
    /// Fraction of drag travel toward a full turn, in `[0, 1]`.
    pub flip_progress: f32,
}

impl FlipState {
    const fn at_page(current_page: usize) -> Self {
        Self {
            current_page,
            is_flipping: false,
            is_dragging: false,
            flip_direction: FlipDirection::Next,
            flip_progress: 0.0,
        }
    }

    pub const fn phase(&self) -> Phase {
        if self.is_flipping {
            Phase::Committing
        } else if self.is_dragging {
            Phase::Dragging
        } else {
            Phase::Idle
        }
    }
}

/// Notification sent to observers when something commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipEvent {
    PageChanged {
        page: usize,
        direction: FlipDirection,
    },
    /// `next_page` was requested on the last page.
    StoryComplete,
}

#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy)]
struct PendingCommit {
    handle: TimerHandle,
    target: usize,
    direction: FlipDirection,
    from_progress: f32,
}

type Observer = Box<dyn FnMut(&FlipEvent)>;

pub struct FlipController<C: Clock = SystemClock> {
    state: FlipState,
    total_pages: usize,
    config: FlipConfig,
    clock: C,
    timer: CommitTimer,
    pending: Option<PendingCommit>,
    drag_origin: Option<DragOrigin>,
    observers: Vec<Observer>,
}

impl FlipController<SystemClock> {
    pub fn new(total_pages: usize, config: FlipConfig) -> Result<Self, StoryError> {
        Self::with_clock(total_pages, config, SystemClock)
    }
}

impl<C: Clock> FlipController<C> {
    pub fn with_clock(total_pages: usize, config: FlipConfig, clock: C) -> Result<Self, StoryError> {
        if total_pages == 0 {
            return Err(StoryError::InvalidConfig(
                "a flip controller needs at least one page".to_string(),
            ));
        }
        config.validate()?;

        Ok(Self {
            state: FlipState::at_page(1),
            total_pages,
            config,
            clock,
            timer: CommitTimer::new(),
            pending: None,
            drag_origin: None,
            observers: Vec::new(),
        })
    }

    /// Starts the session on `page` instead of page 1.
    pub fn starting_at(mut self, page: usize) -> Result<Self, StoryError> {
        if !self.in_range(page) {
            return Err(StoryError::PageOutOfRange {
                page,
                total: self.total_pages,
            });
        }

        self.state.current_page = page;
        Ok(self)
    }

    /// Registers a callback invoked for every committed page change and
    /// story-complete signal.
    pub fn subscribe(&mut self, observer: impl FnMut(&FlipEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub const fn state(&self) -> &FlipState {
        &self.state
    }

    pub const fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub const fn config(&self) -> &FlipConfig {
        &self.config
    }

    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub const fn is_idle(&self) -> bool {
        !self.state.is_flipping && !self.state.is_dragging
    }

    pub const fn can_go_next(&self) -> bool {
        self.state.current_page < self.total_pages && self.is_idle()
    }

    pub const fn can_go_prev(&self) -> bool {
        self.state.current_page > 1 && self.is_idle()
    }

    #[allow(clippy::arithmetic_side_effects)]
    pub fn progress_percent(&self) -> f32 {
        self.state.current_page as f32 / self.total_pages as f32 * 100.0
    }

    pub fn next_page(&mut self) -> bool {
        if !self.is_idle() {
            log::trace!("next_page rejected: transition in flight");
            return false;
        }

        if self.state.current_page >= self.total_pages {
            log::debug!("next_page on last page {}: story complete", self.total_pages);
            self.emit(&FlipEvent::StoryComplete);
            return false;
        }

        let target = self.state.current_page.saturating_add(1);
        self.begin_commit(target, FlipDirection::Next, self.config.flip_duration, 0.0);
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.is_idle() || self.state.current_page <= 1 {
            log::trace!("prev_page rejected at page {}", self.state.current_page);
            return false;
        }

        let target = self.state.current_page.saturating_sub(1);
        self.begin_commit(
            target,
            FlipDirection::Previous,
            self.config.flip_duration,
            0.0,
        );
        true
    }

    pub fn go_to_page(&mut self, target: usize) -> bool {
        if !self.is_idle() || !self.in_range(target) || target == self.state.current_page {
            log::trace!("go_to_page({target}) rejected");
            return false;
        }

        let direction = if target > self.state.current_page {
            FlipDirection::Next
        } else {
            FlipDirection::Previous
        };
        self.begin_commit(target, direction, self.config.flip_duration, 0.0);
        true
    }

    /// Begins tracking a pointer gesture. A drag already in progress is
    /// restarted from the new point.
    pub fn start_drag(&mut self, x: f32, y: f32) -> bool {
        if self.state.is_flipping {
            log::trace!("start_drag rejected: commit in flight");
            return false;
        }

        self.drag_origin = Some(DragOrigin { x, y });
        self.state.is_dragging = true;
        self.state.flip_progress = 0.0;
        true
    }

    /// Feeds a pointer sample. Returns `false` when no drag is tracked or the
    /// sample reads as a vertical scroll.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn update_drag(&mut self, x: f32, y: f32, bounds: Bounds) -> bool {
        let Some(origin) = self.drag_origin.filter(|_| self.state.is_dragging) else {
            return false;
        };

        let dx = x - origin.x;
        let dy = (y - origin.y).abs();
        if dy > dx.abs() * SCROLL_RATIO {
            return false;
        }

        let full_turn = bounds.width / FULL_TURN_WIDTH_RATIO;
        let travel = if full_turn > 0.0 {
            (dx.abs() / full_turn).min(1.0)
        } else {
            1.0
        };
        let started_on_right = origin.x > bounds.center_x();

        if started_on_right && dx < 0.0 && self.state.current_page < self.total_pages {
            self.state.flip_direction = FlipDirection::Next;
            self.state.flip_progress = travel;
        } else if !started_on_right && dx > 0.0 && self.state.current_page > 1 {
            self.state.flip_direction = FlipDirection::Previous;
            self.state.flip_progress = travel;
        } else {
            self.state.flip_progress = 0.0;
        }

        true
    }

    /// Ends the tracked gesture, committing it when it travelled far enough.
    /// Returns `true` only when a turn was committed.
    pub fn end_drag(&mut self) -> bool {
        if !self.state.is_dragging {
            return false;
        }

        self.state.is_dragging = false;
        self.drag_origin = None;

        let progress = self.state.flip_progress;
        let direction = self.state.flip_direction;
        let target = self.neighbour(direction);

        match target {
            Some(target) if progress >= self.config.drag_threshold => {
                self.begin_commit(
                    target,
                    direction,
                    self.config.drag_commit_delay(),
                    progress,
                );
                true
            }
            _ => {
                log::trace!("drag released at {progress:.2}, snapping back");
                self.state.flip_progress = 0.0;
                false
            }
        }
    }

    /// Aborts any drag or pending commit and returns to idle without changing
    /// the page. Returns whether anything was in flight.
    pub fn cancel_flip(&mut self) -> bool {
        let cancelled = self.timer.cancel();
        let was_busy = !self.is_idle();

        if let Some(handle) = cancelled {
            log::debug!("cancelled pending commit #{}", handle.generation());
        }

        self.pending = None;
        self.drag_origin = None;
        self.state.is_flipping = false;
        self.state.is_dragging = false;
        self.state.flip_progress = 0.0;

        was_busy
    }

    /// Applies a pending commit whose animation time has elapsed.
    pub fn poll(&mut self) -> Option<FlipEvent> {
        let handle = self.timer.fire_if_due(self.clock.now())?;
        let pending = self.pending.take().filter(|p| p.handle == handle)?;

        self.state.current_page = pending.target;
        self.state.is_flipping = false;
        self.state.flip_progress = 0.0;

        log::debug!(
            "committed {} turn to page {}",
            pending.direction,
            pending.target
        );

        let event = FlipEvent::PageChanged {
            page: pending.target,
            direction: pending.direction,
        };
        self.emit(&event);
        Some(event)
    }

    /// Sets the page from outside (e.g. a restored reading position) without
    /// animating or notifying. Any in-flight turn is cancelled first.
    pub fn sync_page(&mut self, page: usize) -> bool {
        if !self.in_range(page) {
            return false;
        }

        self.cancel_flip();
        self.state.current_page = page;
        true
    }

    pub fn time_until_commit(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }

    /// How far the page-turn visual has travelled, in `[0, 1]`.
    ///
    /// While dragging this is the drag progress; while committing it eases
    /// from wherever the drag was released (or 0) to a full turn.
    pub fn commit_fraction(&self) -> f32 {
        match (self.phase(), self.pending) {
            (Phase::Committing, Some(pending)) => {
                let t = self.timer.elapsed_fraction(self.clock.now()).unwrap_or(1.0);
                self.config.easing.between(pending.from_progress, 1.0, t)
            }
            (Phase::Dragging, _) => self.state.flip_progress,
            _ => 0.0,
        }
    }

    /// The page that would be revealed by the current gesture or commit.
    pub fn preview_page(&self) -> Option<usize> {
        if let Some(pending) = self.pending {
            return Some(pending.target);
        }

        if self.state.is_dragging && self.state.flip_progress > 0.0 {
            return self.neighbour(self.state.flip_direction);
        }

        None
    }

    fn begin_commit(
        &mut self,
        target: usize,
        direction: FlipDirection,
        delay: Duration,
        from_progress: f32,
    ) {
        let handle = self.timer.schedule(self.clock.now(), delay);

        self.state.flip_direction = direction;
        self.state.is_dragging = false;
        self.state.is_flipping = true;
        self.state.flip_progress = 0.0;
        self.pending = Some(PendingCommit {
            handle,
            target,
            direction,
            from_progress,
        });

        log::debug!(
            "scheduled {direction} turn {} -> {target} in {delay:?}",
            self.state.current_page
        );
    }

    fn neighbour(&self, direction: FlipDirection) -> Option<usize> {
        let page = self
            .state
            .current_page
            .checked_add_signed(direction.delta())?;
        self.in_range(page).then_some(page)
    }

    const fn in_range(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages
    }

    fn emit(&mut self, event: &FlipEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

impl<C: Clock> Drop for FlipController<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.cancel() {
            log::debug!("dropped controller with pending commit #{}", handle.generation());
        }
    }
}

impl<C: Clock> fmt::Debug for FlipController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlipController")
            .field("state", &self.state)
            .field("total_pages", &self.total_pages)
            .field("config", &self.config)
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
