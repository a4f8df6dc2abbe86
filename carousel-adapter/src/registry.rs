use core::fmt;

use carousel::{CarouselController, Clock, Presenter, TimerHandle};

use crate::key::IdMap;
use crate::{CarouselId, Command};

/// An explicit collection of carousels keyed by id.
///
/// Event dispatchers (inline handlers, indicator clicks, a shared timer loop) look controllers
/// up here instead of reaching for ambient global state.
///
/// [`Self::deliver_tick`] routes by handle alone, which is only unambiguous when every
/// registered controller draws handles from one clock (e.g. clones of a
/// [`crate::SharedClock`]). Controllers with independent clocks issue overlapping handles;
/// route their ticks with [`Self::deliver_tick_to`].
pub struct CarouselRegistry<Id, P, C> {
    carousels: IdMap<Id, CarouselController<P, C>>,
}

impl<Id: CarouselId, P: Presenter, C: Clock> Default for CarouselRegistry<Id, P, C> {
    fn default() -> Self {
        Self {
            carousels: IdMap::new(),
        }
    }
}

impl<Id: CarouselId, P: Presenter, C: Clock> CarouselRegistry<Id, P, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.carousels.contains_key(id)
    }

    /// Registers a controller. A controller previously registered under `id` is torn down and
    /// returned.
    pub fn insert(
        &mut self,
        id: Id,
        controller: CarouselController<P, C>,
    ) -> Option<CarouselController<P, C>> {
        let mut prev = self.carousels.insert(id, controller)?;
        cdebug!("CarouselRegistry::insert: replaced existing carousel");
        prev.teardown();
        Some(prev)
    }

    pub fn get(&self, id: &Id) -> Option<&CarouselController<P, C>> {
        self.carousels.get(id)
    }

    pub fn get_mut(&mut self, id: &Id) -> Option<&mut CarouselController<P, C>> {
        self.carousels.get_mut(id)
    }

    /// Unregisters and tears down a controller (the owning view went away).
    pub fn remove(&mut self, id: &Id) -> Option<CarouselController<P, C>> {
        let mut controller = self.carousels.remove(id)?;
        controller.teardown();
        Some(controller)
    }

    /// Routes a command to the carousel registered under `id`.
    ///
    /// Returns `false` for unknown ids and for commands the controller ignored.
    pub fn dispatch(&mut self, id: &Id, command: Command) -> bool {
        let Some(controller) = self.carousels.get_mut(id) else {
            cwarn!(?command, "CarouselRegistry::dispatch: unknown carousel id");
            return false;
        };
        command.apply(controller)
    }

    /// Delivers a timer firing to whichever carousel owns `handle`.
    ///
    /// Requires the registered controllers to share one clock; see the type-level docs.
    ///
    /// Returns `true` when a carousel advanced.
    pub fn deliver_tick(&mut self, handle: TimerHandle) -> bool {
        self.carousels
            .values_mut()
            .find(|c| c.timer() == Some(handle))
            .is_some_and(|c| c.on_timer_tick(handle))
    }

    /// Delivers a timer firing to the carousel registered under `id`.
    ///
    /// Returns `true` when that carousel advanced. Handles it does not own are ignored.
    pub fn deliver_tick_to(&mut self, id: &Id, handle: TimerHandle) -> bool {
        self.carousels
            .get_mut(id)
            .is_some_and(|c| c.on_timer_tick(handle))
    }

    /// Tears down every registered controller and empties the registry.
    pub fn teardown_all(&mut self) {
        for (_, mut controller) in core::mem::take(&mut self.carousels) {
            controller.teardown();
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &CarouselController<P, C>> {
        self.carousels.values()
    }
}

impl<Id, P, C> fmt::Debug for CarouselRegistry<Id, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselRegistry")
            .field("len", &self.carousels.len())
            .finish_non_exhaustive()
    }
}
