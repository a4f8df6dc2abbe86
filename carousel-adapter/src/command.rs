use carousel::{CarouselController, Clock, Presenter};

use crate::Swipe;

/// A navigation event, as produced by buttons, indicators, gestures and hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    Swipe(Swipe),
    PointerEnter,
    PointerLeave,
}

impl Command {
    /// Applies the command to a controller.
    ///
    /// Returns `true` when the controller changed: navigation was applied, or hover moved
    /// autoplay between running and paused.
    pub fn apply<P: Presenter, C: Clock>(self, c: &mut CarouselController<P, C>) -> bool {
        match self {
            Self::Next => c.next(),
            Self::Previous => c.previous(),
            Self::GoTo(index) => c.go_to(index),
            Self::Swipe(swipe) => c.on_swipe(swipe.start_x, swipe.end_x).is_some(),
            Self::PointerEnter => {
                let before = c.autoplay_state();
                c.pause();
                before != c.autoplay_state()
            }
            Self::PointerLeave => {
                let before = c.autoplay_state();
                c.resume();
                before != c.autoplay_state()
            }
        }
    }
}
