use crate::AutoplayState;

/// A lightweight, serializable snapshot of a carousel.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub count: usize,
    /// `None` while the carousel is empty, not yet initialized, or torn down.
    pub index: Option<usize>,
    pub autoplay: AutoplayState,
}

impl CarouselState {
    pub fn is_inert(&self) -> bool {
        self.index.is_none()
    }
}
