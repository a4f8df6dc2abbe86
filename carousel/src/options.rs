/// Default autoplay cadence.
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;
/// Default minimum horizontal travel for a swipe to navigate.
pub const DEFAULT_SWIPE_THRESHOLD_PX: u32 = 50;

/// Configuration for [`crate::CarouselController`].
///
/// Options are fixed for the life of a controller. Zero values are normalized to `1` so the
/// controller never schedules a zero-length timer or treats every touch as a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    /// Whether the carousel advances on its own.
    pub autoplay_enabled: bool,
    /// Autoplay cadence in milliseconds.
    pub interval_ms: u64,
    /// A swipe must travel strictly further than this to navigate.
    pub swipe_threshold_px: u32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay_enabled: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselOptions {
    pub fn new(autoplay_enabled: bool, interval_ms: u64, swipe_threshold_px: u32) -> Self {
        Self {
            autoplay_enabled,
            interval_ms,
            swipe_threshold_px,
        }
        .normalized()
    }

    /// Options with autoplay turned off; navigation is driven by input only.
    pub fn manual() -> Self {
        Self::default().with_autoplay(false)
    }

    pub fn with_autoplay(mut self, autoplay_enabled: bool) -> Self {
        self.autoplay_enabled = autoplay_enabled;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms.max(1);
        self
    }

    pub fn with_swipe_threshold_px(mut self, swipe_threshold_px: u32) -> Self {
        self.swipe_threshold_px = swipe_threshold_px.max(1);
        self
    }

    /// Clamps zero intervals/thresholds up to `1`.
    ///
    /// Deserialized options bypass the builder, so the controller normalizes again on
    /// construction.
    pub fn normalized(self) -> Self {
        Self {
            autoplay_enabled: self.autoplay_enabled,
            interval_ms: self.interval_ms.max(1),
            swipe_threshold_px: self.swipe_threshold_px.max(1),
        }
    }
}
