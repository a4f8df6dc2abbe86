//! A headless carousel state machine.
//!
//! For adapter-level utilities (tick-driven clocks, swipe tracking, a keyed registry), see the
//! `carousel-adapter` crate.
//!
//! This crate owns the only stateful part of a testimonial/slide carousel: the active index,
//! wraparound navigation, the autoplay timer lifecycle (including pause-on-hover), and swipe
//! thresholds.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - a [`Presenter`] that reports the item count and activates one item/indicator at a time
//! - a [`Clock`] that schedules and cancels recurring timers
//! - input events (button and indicator clicks, completed swipes, hover enter/leave)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod clock;
mod controller;
mod options;
mod presenter;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use clock::Clock;
pub use controller::CarouselController;
pub use options::{CarouselOptions, DEFAULT_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD_PX};
pub use presenter::Presenter;
pub use state::CarouselState;
pub use types::{AutoplayState, Direction, TimerHandle};
