/// The rendering side of a carousel.
///
/// The controller never touches UI objects; it only asks the presenter how many items exist and
/// which one should be shown.
///
/// Contract for `render(index)`:
/// - It is idempotent: rendering the same index twice yields the same visible state.
/// - Every other item and indicator is deactivated before (or atomically with) activating
///   `index`, so once the call returns exactly one item is active.
///
/// Rendering is assumed infallible; failures belong to the host.
pub trait Presenter {
    /// Number of items. Read once when the controller is constructed.
    fn item_count(&self) -> usize;

    /// Activates the item and indicator at `index` and deactivates all others.
    fn render(&mut self, index: usize);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn render(&mut self, index: usize) {
        (**self).render(index);
    }
}
