/// A completed horizontal swipe, reduced to its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swipe {
    pub start_x: i32,
    pub end_x: i32,
}

impl Swipe {
    /// Positive when the pointer travelled left.
    pub fn delta(&self) -> i64 {
        i64::from(self.start_x) - i64::from(self.end_x)
    }
}

/// Reduces raw touch/pointer events to completed [`Swipe`]s.
///
/// Typical wiring: `touchstart` → `start`, `touchmove` → `moved`, `touchend` → `end` (or
/// `finish` when the end event carries no coordinate), `touchcancel` → `cancel`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    start_x: Option<i32>,
    last_x: Option<i32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn start(&mut self, x: i32) {
        self.start_x = Some(x);
        self.last_x = Some(x);
    }

    pub fn moved(&mut self, x: i32) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// Completes the gesture at `x`. Returns `None` if no gesture was started.
    pub fn end(&mut self, x: i32) -> Option<Swipe> {
        let start_x = self.start_x.take()?;
        self.last_x = None;
        Some(Swipe { start_x, end_x: x })
    }

    /// Completes the gesture at the last reported position.
    pub fn finish(&mut self) -> Option<Swipe> {
        let x = self.last_x?;
        self.end(x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }
}
