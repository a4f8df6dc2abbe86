//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the state machine. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - A deterministic, tick-driven [`carousel::Clock`] (optionally shared by many carousels)
//! - Swipe gesture tracking from raw touch/pointer events
//! - A presenter that enforces the render contract over a "set active flag" primitive
//! - An explicit registry of carousels keyed by id, with command dispatch and tick routing
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod clock;
mod command;
mod driver;
mod key;
mod presenter;
mod registry;
mod swipe;


pub use clock::{ManualClock, SharedClock};
pub use command::Command;
pub use driver::Carousel;
pub use key::CarouselId;
pub use presenter::{Target, TogglePresenter};
pub use registry::CarouselRegistry;
pub use swipe::{Swipe, SwipeTracker};
