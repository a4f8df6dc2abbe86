use crate::types::Phase;
use crate::{
    AutoplayState, CarouselOptions, CarouselState, Clock, Direction, Presenter, TimerHandle,
};

/// A headless carousel state machine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; visible state flows through [`Presenter::render`].
/// - Timers are requested from a [`Clock`] and identified by [`TimerHandle`]s. Your adapter
///   delivers each tick back via [`CarouselController::on_timer_tick`].
/// - Input (buttons, indicators, swipes, hover) arrives as plain method calls.
///
/// At most one autoplay timer is live at any time: every start cancels the previous handle
/// first, and ticks for any handle other than the live one are ignored.
///
/// For tick-driven clocks, swipe tracking and a keyed registry, see the `carousel-adapter`
/// crate.
#[derive(Debug)]
pub struct CarouselController<P, C> {
    options: CarouselOptions,
    presenter: P,
    clock: C,
    count: usize,
    index: usize,
    phase: Phase,
    autoplay: AutoplayState,
    timer: Option<TimerHandle>,
    direction: Option<Direction>,
}

impl<P: Presenter, C: Clock> CarouselController<P, C> {
    /// Creates a controller bound to the presenter's current item count.
    ///
    /// Nothing is rendered and no timer is scheduled until [`Self::initialize`].
    pub fn new(options: CarouselOptions, presenter: P, clock: C) -> Self {
        let options = options.normalized();
        let count = presenter.item_count();
        cdebug!(
            count,
            autoplay = options.autoplay_enabled,
            interval_ms = options.interval_ms,
            "CarouselController::new"
        );
        Self {
            options,
            presenter,
            clock,
            count,
            index: 0,
            phase: Phase::Idle,
            autoplay: AutoplayState::Stopped,
            timer: None,
            direction: None,
        }
    }

    /// Shows the first item and starts autoplay when it makes sense.
    ///
    /// An empty carousel stays inert forever. Calling this twice is a no-op.
    pub fn initialize(&mut self) {
        if self.phase != Phase::Idle {
            ctrace!(phase = ?self.phase, "CarouselController::initialize: already initialized");
            return;
        }
        self.phase = Phase::Active;
        if self.count == 0 {
            cdebug!("CarouselController::initialize: no items, staying inert");
            return;
        }

        self.index = 0;
        self.presenter.render(0);
        if self.autoplay_eligible() {
            self.start_timer();
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the carousel reacts to input: initialized, not torn down, and non-empty.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active && self.count > 0
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    /// The active index, or `None` while the carousel is inert.
    pub fn current_index(&self) -> Option<usize> {
        self.is_active().then_some(self.index)
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay
    }

    /// Direction of the most recent index change.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The live autoplay timer, if any.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            count: self.count,
            index: self.current_index(),
            autoplay: self.autoplay,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Tears the controller down and hands back its collaborators.
    pub fn into_parts(mut self) -> (P, C) {
        self.teardown();
        (self.presenter, self.clock)
    }

    /// Advances to the next item, wrapping to the first, and re-bases the autoplay cadence.
    ///
    /// Returns `true` when the carousel moved.
    pub fn next(&mut self) -> bool {
        if !self.can_cycle() {
            return false;
        }
        let index = (self.index + 1) % self.count;
        self.show(index, Direction::Forward);
        self.reset_autoplay();
        true
    }

    /// Steps back to the previous item, wrapping to the last, and re-bases the autoplay cadence.
    ///
    /// Returns `true` when the carousel moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_cycle() {
            return false;
        }
        let index = (self.index + self.count - 1) % self.count;
        self.show(index, Direction::Backward);
        self.reset_autoplay();
        true
    }

    /// Jumps to `index` (e.g. an indicator click).
    ///
    /// Out-of-range indexes are ignored without rendering. Jumping to the current index renders
    /// it again and re-bases the autoplay cadence.
    ///
    /// Returns `true` when the request was applied.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.is_active() {
            return false;
        }
        if index >= self.count {
            cwarn!(index, count = self.count, "CarouselController::go_to: out-of-range index");
            return false;
        }

        let direction = match index.cmp(&self.index) {
            core::cmp::Ordering::Greater => Some(Direction::Forward),
            core::cmp::Ordering::Less => Some(Direction::Backward),
            core::cmp::Ordering::Equal => self.direction,
        };
        self.index = index;
        self.direction = direction;
        self.presenter.render(index);
        self.reset_autoplay();
        true
    }

    /// Suspends autoplay (e.g. pointer entered the carousel).
    pub fn pause(&mut self) {
        if !self.is_active() || self.autoplay != AutoplayState::Running {
            return;
        }
        self.cancel_timer();
        self.autoplay = AutoplayState::Paused;
        ctrace!("CarouselController::pause");
    }

    /// Restarts autoplay after [`Self::pause`]. A stopped carousel never resumes.
    pub fn resume(&mut self) {
        if !self.is_active() || self.autoplay != AutoplayState::Paused || !self.autoplay_eligible()
        {
            return;
        }
        self.start_timer();
        ctrace!("CarouselController::resume");
    }

    /// Handles a completed horizontal swipe.
    ///
    /// Travel of at most `swipe_threshold_px` is ignored. Swiping left (start right of end)
    /// advances; swiping right goes back.
    ///
    /// Returns the direction taken, if the carousel moved.
    pub fn on_swipe(&mut self, start_x: i32, end_x: i32) -> Option<Direction> {
        let diff = i64::from(start_x) - i64::from(end_x);
        let threshold = i64::from(self.options.swipe_threshold_px);
        if diff > threshold {
            self.next().then_some(Direction::Forward)
        } else if diff < -threshold {
            self.previous().then_some(Direction::Backward)
        } else {
            ctrace!(diff, threshold, "CarouselController::on_swipe: below threshold");
            None
        }
    }

    /// Delivers an autoplay tick for `handle`.
    ///
    /// Advances like [`Self::next`] but leaves the recurring schedule untouched. Ticks for a
    /// handle that is not the live timer (cancelled, stale or foreign) are ignored.
    ///
    /// Returns `true` when the carousel moved.
    pub fn on_timer_tick(&mut self, handle: TimerHandle) -> bool {
        if !self.is_active()
            || self.autoplay != AutoplayState::Running
            || self.timer != Some(handle)
        {
            ctrace!(
                handle = handle.id(),
                live = ?self.timer,
                "CarouselController::on_timer_tick: ignoring stale tick"
            );
            return false;
        }
        let index = (self.index + 1) % self.count;
        self.show(index, Direction::Forward);
        true
    }

    /// Cancels any live timer and makes the controller permanently inert.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.cancel_timer();
        self.autoplay = AutoplayState::Stopped;
        self.phase = Phase::TornDown;
        cdebug!("CarouselController::teardown");
    }

    fn autoplay_eligible(&self) -> bool {
        self.options.autoplay_enabled && self.count > 1
    }

    // A single item cannot change index, so navigation neither re-renders nor touches timers.
    fn can_cycle(&self) -> bool {
        self.is_active() && self.count > 1
    }

    fn show(&mut self, index: usize, direction: Direction) {
        debug_assert!(index < self.count, "index out of bounds (i={index})");
        self.index = index;
        self.direction = Some(direction);
        self.presenter.render(index);
    }

    fn reset_autoplay(&mut self) {
        if self.autoplay_eligible() {
            self.start_timer();
        }
    }

    fn start_timer(&mut self) {
        self.cancel_timer();
        let handle = self.clock.set_recurring(self.options.interval_ms);
        ctrace!(
            handle = handle.id(),
            interval_ms = self.options.interval_ms,
            "CarouselController: timer started"
        );
        self.timer = Some(handle);
        self.autoplay = AutoplayState::Running;
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.clock.cancel(handle);
        }
    }
}
