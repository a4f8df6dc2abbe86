use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use carousel::Presenter;

/// What a toggle applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The slide/testimonial itself.
    Item,
    /// The dot (or other marker) for the same position.
    Indicator,
}

/// A [`Presenter`] built on a "set active flag" primitive (e.g. toggling an `active` class).
///
/// `render(index)` deactivates every other item and indicator before activating `index`, and
/// only issues toggles whose flag actually changes. The first render touches every position so
/// that whatever state the host markup started in is overwritten.
pub struct TogglePresenter<F> {
    active: Vec<bool>,
    synced: bool,
    toggle: F,
}

impl<F: FnMut(Target, usize, bool)> TogglePresenter<F> {
    pub fn new(count: usize, toggle: F) -> Self {
        Self {
            active: vec![false; count],
            synced: false,
            toggle,
        }
    }

    /// The currently active position, if anything has been rendered.
    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|a| *a)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    fn set(&mut self, index: usize, on: bool) {
        (self.toggle)(Target::Item, index, on);
        (self.toggle)(Target::Indicator, index, on);
        self.active[index] = on;
    }
}

impl<F: FnMut(Target, usize, bool)> Presenter for TogglePresenter<F> {
    fn item_count(&self) -> usize {
        self.active.len()
    }

    fn render(&mut self, index: usize) {
        if index >= self.active.len() {
            debug_assert!(
                index < self.active.len(),
                "TogglePresenter: out-of-bounds index (i={index}, count={})",
                self.active.len()
            );
            return;
        }

        let full = !self.synced;
        for i in 0..self.active.len() {
            if i != index && (full || self.active[i]) {
                self.set(i, false);
            }
        }
        if full || !self.active[index] {
            self.set(index, true);
        }
        self.synced = true;
    }
}

impl<F> fmt::Debug for TogglePresenter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglePresenter")
            .field("active", &self.active)
            .field("synced", &self.synced)
            .finish_non_exhaustive()
    }
}
