use alloc::vec::Vec;

use carousel::{CarouselController, CarouselOptions, Presenter, TimerHandle};

use crate::{Command, ManualClock, Swipe};

/// A framework-neutral driver that bundles a [`CarouselController`] with a [`ManualClock`].
///
/// This type does not hold any UI objects beyond the presenter. Adapters drive it by calling:
/// - `tick(now_ms)` each frame/timer tick (fires due autoplay timers)
/// - `apply(command, now_ms)` when input arrives (buttons, indicators, swipes, hover)
///
/// Every entry point first catches the clock up to `now_ms`, so timers restarted by manual
/// navigation are re-based on the time of the input.
#[derive(Debug)]
pub struct Carousel<P> {
    c: CarouselController<P, ManualClock>,
    due: Vec<TimerHandle>,
}

impl<P: Presenter> Carousel<P> {
    /// Creates and initializes a carousel at `now_ms`.
    pub fn new(options: CarouselOptions, presenter: P, now_ms: u64) -> Self {
        let mut c = CarouselController::new(options, presenter, ManualClock::starting_at(now_ms));
        c.initialize();
        Self { c, due: Vec::new() }
    }

    pub fn controller(&self) -> &CarouselController<P, ManualClock> {
        &self.c
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController<P, ManualClock> {
        &mut self.c
    }

    pub fn into_controller(self) -> CarouselController<P, ManualClock> {
        self.c
    }

    pub fn current_index(&self) -> Option<usize> {
        self.c.current_index()
    }

    /// Advances time and delivers due autoplay ticks.
    ///
    /// Returns how many times the carousel advanced.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut due = core::mem::take(&mut self.due);
        due.clear();
        self.c.clock_mut().advance_to(now_ms, &mut due);

        let mut advanced = 0;
        for handle in due.iter().copied() {
            if self.c.on_timer_tick(handle) {
                advanced += 1;
            }
        }
        self.due = due;
        advanced
    }

    /// Applies an input event at `now_ms`. See [`Command::apply`] for the return value.
    pub fn apply(&mut self, command: Command, now_ms: u64) -> bool {
        self.tick(now_ms);
        command.apply(&mut self.c)
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.apply(Command::Next, now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.apply(Command::Previous, now_ms)
    }

    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        self.apply(Command::GoTo(index), now_ms)
    }

    pub fn on_swipe(&mut self, swipe: Swipe, now_ms: u64) -> bool {
        self.apply(Command::Swipe(swipe), now_ms)
    }

    /// Pauses autoplay while the pointer hovers the carousel.
    pub fn on_pointer_enter(&mut self, now_ms: u64) -> bool {
        self.apply(Command::PointerEnter, now_ms)
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) -> bool {
        self.apply(Command::PointerLeave, now_ms)
    }

    pub fn teardown(&mut self) {
        self.c.teardown();
    }
}
