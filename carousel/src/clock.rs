use crate::TimerHandle;

/// Timer primitives supplied by the host event loop.
///
/// A recurring timer keeps firing every `interval_ms` until cancelled. When it fires, the host
/// delivers the tick back to the owning controller via
/// [`crate::CarouselController::on_timer_tick`], on the event loop and never synchronously from
/// inside `set_recurring`.
pub trait Clock {
    fn set_recurring(&mut self, interval_ms: u64) -> TimerHandle;

    /// Cancels a timer. After this returns the handle must not fire again; unknown or already
    /// cancelled handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn set_recurring(&mut self, interval_ms: u64) -> TimerHandle {
        (**self).set_recurring(interval_ms)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}
