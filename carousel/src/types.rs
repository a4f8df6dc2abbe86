/// Autoplay lifecycle of a carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoplayState {
    /// A recurring timer is live.
    Running,
    /// Temporarily suspended (e.g. pointer hover); `resume` restarts it.
    Paused,
    /// Autoplay is disabled, pointless (fewer than two items) or torn down.
    #[default]
    Stopped,
}

impl AutoplayState {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Direction of the last index change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

/// Opaque identity of a scheduled recurring timer.
///
/// Handles are issued by a [`crate::Clock`] and handed back to it on cancellation. Ticks are
/// delivered to the controller together with the handle they were scheduled under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Phase {
    #[default]
    Idle,
    Active,
    TornDown,
}
