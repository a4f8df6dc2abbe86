use crate::*;

use std::vec::Vec;

#[derive(Debug, Default)]
struct RecordingPresenter {
    count: usize,
    renders: Vec<usize>,
    active: Vec<bool>,
}

impl RecordingPresenter {
    fn new(count: usize) -> Self {
        Self {
            count,
            renders: Vec::new(),
            active: std::vec![false; count],
        }
    }

    fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }
}

impl Presenter for RecordingPresenter {
    fn item_count(&self) -> usize {
        self.count
    }

    fn render(&mut self, index: usize) {
        assert!(index < self.count, "render out of bounds: {index}");
        for (i, a) in self.active.iter_mut().enumerate() {
            *a = i == index;
        }
        self.renders.push(index);
    }
}

#[derive(Debug, Default)]
struct FakeClock {
    next_id: u64,
    live: Vec<TimerHandle>,
    started: usize,
    cancelled: usize,
    last_interval_ms: Option<u64>,
}

impl Clock for FakeClock {
    fn set_recurring(&mut self, interval_ms: u64) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.live.push(handle);
        self.started += 1;
        self.last_interval_ms = Some(interval_ms);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(pos) = self.live.iter().position(|h| *h == handle) {
            self.live.remove(pos);
            self.cancelled += 1;
        }
    }
}

type Ctl = CarouselController<RecordingPresenter, FakeClock>;

fn carousel(count: usize, options: CarouselOptions) -> Ctl {
    let mut c = CarouselController::new(
        options,
        RecordingPresenter::new(count),
        FakeClock::default(),
    );
    c.initialize();
    c
}

fn autoplay(count: usize) -> Ctl {
    carousel(count, CarouselOptions::default())
}

fn manual(count: usize) -> Ctl {
    carousel(count, CarouselOptions::manual())
}

fn live_timer(c: &Ctl) -> TimerHandle {
    assert_eq!(c.clock().live.len(), 1);
    c.clock().live[0]
}

#[test]
fn initialize_renders_first_item_and_starts_autoplay() {
    let c = autoplay(3);
    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.presenter().renders, [0]);
    assert_eq!(c.autoplay_state(), AutoplayState::Running);
    assert_eq!(c.timer(), Some(live_timer(&c)));
    assert_eq!(c.clock().last_interval_ms, Some(DEFAULT_INTERVAL_MS));
}

#[test]
fn new_does_not_render_or_schedule() {
    let c = CarouselController::new(
        CarouselOptions::default(),
        RecordingPresenter::new(3),
        FakeClock::default(),
    );
    assert_eq!(c.count(), 3);
    assert_eq!(c.current_index(), None);
    assert!(c.presenter().renders.is_empty());
    assert_eq!(c.clock().started, 0);
}

#[test]
fn operations_before_initialize_are_noops() {
    let mut c = CarouselController::new(
        CarouselOptions::default(),
        RecordingPresenter::new(3),
        FakeClock::default(),
    );
    assert!(!c.next());
    assert!(!c.previous());
    assert!(!c.go_to(1));
    assert_eq!(c.on_swipe(200, 0), None);
    c.resume();
    assert!(c.presenter().renders.is_empty());
    assert_eq!(c.clock().started, 0);
}

#[test]
fn initialize_twice_is_a_noop() {
    let mut c = autoplay(3);
    c.initialize();
    assert_eq!(c.presenter().renders, [0]);
    assert_eq!(c.clock().started, 1);
}

#[test]
fn autoplay_disabled_stays_stopped() {
    let c = manual(4);
    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
    assert_eq!(c.clock().started, 0);
}

#[test]
fn next_and_previous_wrap_around() {
    let mut c = manual(4);
    assert!(c.go_to(3));
    assert!(c.next());
    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.direction(), Some(Direction::Forward));

    assert!(c.previous());
    assert_eq!(c.current_index(), Some(3));
    assert_eq!(c.direction(), Some(Direction::Backward));
    assert_eq!(c.presenter().renders, [0, 3, 0, 3]);
}

#[test]
fn index_stays_in_bounds_under_mixed_navigation() {
    let mut c = autoplay(5);
    for step in 0..50usize {
        match step % 7 {
            0 | 3 => {
                c.next();
            }
            1 | 5 => {
                c.previous();
            }
            2 => {
                c.go_to(step % 9);
            }
            4 => {
                c.on_swipe(0, (step as i32) * 10 - 200);
            }
            _ => {
                let h = c.timer().unwrap();
                c.on_timer_tick(h);
            }
        }
        let index = c.current_index().unwrap();
        assert!(index < 5);
        assert_eq!(c.presenter().active_count(), 1);
        assert!(c.presenter().active[index]);
        assert!(c.clock().live.len() <= 1);
    }
}

#[test]
fn go_to_same_index_renders_each_time() {
    let mut c = manual(4);
    assert!(c.go_to(2));
    assert!(c.go_to(2));
    assert_eq!(c.current_index(), Some(2));
    assert_eq!(c.presenter().renders, [0, 2, 2]);
    assert_eq!(c.presenter().active_count(), 1);
}

#[test]
fn go_to_out_of_range_is_ignored() {
    let mut c = manual(3);
    c.go_to(1);
    let renders = c.presenter().renders.len();

    assert!(!c.go_to(5));
    assert!(!c.go_to(3));
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.presenter().renders.len(), renders);
}

#[test]
fn go_to_out_of_range_does_not_touch_timer() {
    let mut c = autoplay(3);
    let before = live_timer(&c);
    assert!(!c.go_to(7));
    assert_eq!(live_timer(&c), before);
    assert_eq!(c.clock().started, 1);
}

#[test]
fn go_to_records_direction() {
    let mut c = manual(5);
    c.go_to(3);
    assert_eq!(c.direction(), Some(Direction::Forward));
    c.go_to(1);
    assert_eq!(c.direction(), Some(Direction::Backward));
    c.go_to(1);
    assert_eq!(c.direction(), Some(Direction::Backward));
}

#[test]
fn swipe_respects_threshold() {
    let mut c = carousel(4, CarouselOptions::manual().with_swipe_threshold_px(50));

    assert_eq!(c.on_swipe(100, 40), Some(Direction::Forward));
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.presenter().renders, [0, 1]);

    assert_eq!(c.on_swipe(100, 70), None);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.presenter().renders, [0, 1]);

    // Exactly the threshold is not enough.
    assert_eq!(c.on_swipe(100, 50), None);
    assert_eq!(c.on_swipe(50, 100), None);

    assert_eq!(c.on_swipe(40, 100), Some(Direction::Backward));
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn swipe_handles_extreme_coordinates() {
    let mut c = manual(3);
    assert_eq!(c.on_swipe(i32::MAX, i32::MIN), Some(Direction::Forward));
    assert_eq!(c.on_swipe(i32::MIN, i32::MAX), Some(Direction::Backward));
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn manual_navigation_leaves_exactly_one_live_timer() {
    let mut c = autoplay(5);
    let first = live_timer(&c);

    c.next();
    c.next();

    let live = live_timer(&c);
    assert_ne!(live, first);
    assert_eq!(c.timer(), Some(live));
    assert_eq!(c.clock().started, 3);
    assert_eq!(c.clock().cancelled, 2);
    assert_eq!(c.autoplay_state(), AutoplayState::Running);
}

#[test]
fn teardown_leaves_no_live_timer() {
    let mut c = autoplay(5);
    c.next();
    c.teardown();
    assert!(c.clock().live.is_empty());
    assert_eq!(c.timer(), None);
    assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
    assert!(c.is_torn_down());
}

#[test]
fn teardown_makes_controller_inert() {
    let mut c = autoplay(5);
    let handle = live_timer(&c);
    c.teardown();
    let renders = c.presenter().renders.len();

    assert!(!c.next());
    assert!(!c.previous());
    assert!(!c.go_to(2));
    assert_eq!(c.on_swipe(500, 0), None);
    assert!(!c.on_timer_tick(handle));
    c.pause();
    c.resume();
    c.initialize();

    assert_eq!(c.current_index(), None);
    assert_eq!(c.presenter().renders.len(), renders);
    assert!(c.clock().live.is_empty());
    assert_eq!(c.clock().started, 1);
}

#[test]
fn timer_tick_advances_without_rescheduling() {
    let mut c = autoplay(3);
    let handle = live_timer(&c);

    assert!(c.on_timer_tick(handle));
    assert!(c.on_timer_tick(handle));
    assert!(c.on_timer_tick(handle));

    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.presenter().renders, [0, 1, 2, 0]);
    assert_eq!(live_timer(&c), handle);
    assert_eq!(c.clock().started, 1);
    assert_eq!(c.clock().cancelled, 0);
}

#[test]
fn stale_timer_tick_is_ignored() {
    let mut c = autoplay(3);
    let old = live_timer(&c);
    c.next();

    assert!(!c.on_timer_tick(old));
    assert!(!c.on_timer_tick(TimerHandle(999)));
    assert_eq!(c.current_index(), Some(1));

    let live = live_timer(&c);
    assert!(c.on_timer_tick(live));
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn pause_cancels_timer_and_resume_restarts_it() {
    let mut c = autoplay(3);
    let first = live_timer(&c);

    c.pause();
    assert_eq!(c.autoplay_state(), AutoplayState::Paused);
    assert!(c.clock().live.is_empty());
    assert!(!c.on_timer_tick(first));
    assert_eq!(c.current_index(), Some(0));

    // Pausing twice is harmless.
    c.pause();
    assert_eq!(c.clock().cancelled, 1);

    c.resume();
    assert_eq!(c.autoplay_state(), AutoplayState::Running);
    let second = live_timer(&c);
    assert_ne!(first, second);

    // Resuming while running does not stack timers.
    c.resume();
    assert_eq!(c.clock().started, 2);
}

#[test]
fn stopped_autoplay_never_resumes() {
    let mut c = manual(3);
    c.pause();
    c.resume();
    assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
    assert_eq!(c.clock().started, 0);

    c.next();
    assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
    assert_eq!(c.clock().started, 0);
}

#[test]
fn navigation_while_paused_rearms_autoplay() {
    let mut c = autoplay(4);
    c.pause();
    assert!(c.next());
    assert_eq!(c.autoplay_state(), AutoplayState::Running);
    assert_eq!(c.clock().live.len(), 1);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = autoplay(0);
    assert_eq!(c.current_index(), None);
    assert!(!c.is_active());
    assert!(!c.next());
    assert!(!c.previous());
    assert!(!c.go_to(0));
    assert_eq!(c.on_swipe(1000, 0), None);
    c.pause();
    c.resume();
    assert!(!c.on_timer_tick(TimerHandle(1)));

    assert!(c.presenter().renders.is_empty());
    assert_eq!(c.clock().started, 0);
    assert_eq!(c.autoplay_state(), AutoplayState::Stopped);
    assert!(c.state().is_inert());
}

#[test]
fn single_item_renders_once_and_never_cycles() {
    let mut c = autoplay(1);
    assert_eq!(c.autoplay_state(), AutoplayState::Stopped);

    assert!(!c.next());
    assert!(!c.previous());
    assert_eq!(c.on_swipe(1000, 0), None);
    assert_eq!(c.on_swipe(0, 1000), None);
    assert_eq!(c.on_swipe(10, 0), None);
    c.pause();
    c.resume();

    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.presenter().renders, [0]);
    assert_eq!(c.clock().started, 0);
}

#[test]
fn zero_options_are_normalized() {
    let c = carousel(3, CarouselOptions::new(true, 0, 0));
    assert_eq!(c.options().interval_ms, 1);
    assert_eq!(c.options().swipe_threshold_px, 1);
    assert_eq!(c.clock().last_interval_ms, Some(1));

    let raw = CarouselOptions {
        autoplay_enabled: false,
        interval_ms: 0,
        swipe_threshold_px: 0,
    };
    let c = carousel(3, raw);
    assert_eq!(c.options().interval_ms, 1);
}

#[test]
fn custom_interval_is_passed_to_clock() {
    let c = carousel(3, CarouselOptions::default().with_interval_ms(1_500));
    assert_eq!(c.clock().last_interval_ms, Some(1_500));
}

#[test]
fn state_snapshot_reflects_controller() {
    let mut c = autoplay(4);
    c.next();
    assert_eq!(
        c.state(),
        CarouselState {
            count: 4,
            index: Some(1),
            autoplay: AutoplayState::Running,
        }
    );

    c.pause();
    assert_eq!(c.state().autoplay, AutoplayState::Paused);
}

#[test]
fn into_parts_cancels_timer() {
    let c = autoplay(3);
    let (presenter, clock) = c.into_parts();
    assert_eq!(presenter.renders, [0]);
    assert!(clock.live.is_empty());
}

#[test]
fn borrowed_collaborators_can_be_lent() {
    let mut presenter = RecordingPresenter::new(3);
    let mut clock = FakeClock::default();
    {
        let mut c = CarouselController::new(CarouselOptions::default(), &mut presenter, &mut clock);
        c.initialize();
        c.previous();
        c.teardown();
    }
    assert_eq!(presenter.renders, [0, 2]);
    assert!(clock.live.is_empty());
    assert_eq!(clock.started, 2);
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_types_are_serializable() {
    fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
    assert_serde::<CarouselOptions>();
    assert_serde::<CarouselState>();
    assert_serde::<TimerHandle>();
}
