use carousel::CarouselOptions;
use carousel_adapter::{Carousel, SwipeTracker, Target, TogglePresenter};

fn main() {
    // Example: a simulated page driving one carousel from a 250ms frame loop.
    //
    // An adapter would:
    // - forward clicks, swipes and hover to the carousel with the current time
    // - call tick(now_ms) from its event loop
    // - let the toggle callback flip the "active" class on slides and dots
    let presenter = TogglePresenter::new(4, |target, index, on| {
        if on && target == Target::Item {
            println!("  slide {index} active");
        }
    });
    let mut c = Carousel::new(
        CarouselOptions::default().with_interval_ms(1_000),
        presenter,
        0,
    );
    let mut swipe = SwipeTracker::new();

    let mut now_ms = 0u64;
    while now_ms < 6_000 {
        now_ms += 250;
        let advanced = c.tick(now_ms);
        if advanced > 0 {
            println!("t={now_ms} autoplay -> {:?}", c.current_index());
        }

        match now_ms {
            1_500 => {
                c.on_pointer_enter(now_ms);
                println!("t={now_ms} hover: {:?}", c.controller().autoplay_state());
            }
            3_000 => {
                c.on_pointer_leave(now_ms);
                println!("t={now_ms} leave: {:?}", c.controller().autoplay_state());
            }
            4_000 => {
                swipe.start(20);
                swipe.moved(120);
                if let Some(s) = swipe.end(220) {
                    c.on_swipe(s, now_ms);
                    println!("t={now_ms} swipe right -> {:?}", c.current_index());
                }
            }
            _ => {}
        }
    }

    c.teardown();
    println!(
        "done: index={:?} live_timers={}",
        c.current_index(),
        c.controller().clock().live_timers()
    );
}
