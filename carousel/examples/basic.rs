// Example: minimal usage with a console presenter and a clock that never fires on its own.
use carousel::{CarouselController, CarouselOptions, Clock, Presenter, TimerHandle};

struct Console {
    items: Vec<&'static str>,
}

impl Presenter for Console {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn render(&mut self, index: usize) {
        println!("showing #{index}: {}", self.items[index]);
    }
}

#[derive(Default)]
struct CountingClock {
    next: u64,
    live: usize,
}

impl Clock for CountingClock {
    fn set_recurring(&mut self, interval_ms: u64) -> TimerHandle {
        self.next += 1;
        self.live += 1;
        println!("  timer {} scheduled every {interval_ms}ms", self.next);
        TimerHandle(self.next)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.live = self.live.saturating_sub(1);
        println!("  timer {} cancelled", handle.id());
    }
}

fn main() {
    let presenter = Console {
        items: vec!["\"Great service\"", "\"Fast delivery\"", "\"Would buy again\""],
    };
    let mut c = CarouselController::new(
        CarouselOptions::default().with_interval_ms(4_000),
        presenter,
        CountingClock::default(),
    );
    c.initialize();

    c.next();
    c.on_swipe(40, 200);
    c.go_to(2);

    // The host would call this when the live timer fires.
    if let Some(handle) = c.timer() {
        c.on_timer_tick(handle);
    }

    c.pause();
    c.resume();
    println!("state={:?}", c.state());

    c.teardown();
    println!("live timers after teardown: {}", c.clock().live);
}
