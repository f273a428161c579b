use std::fmt;

use super::{SceneError, Surface};

/// Draw callback stored in a registry slot.
pub type DrawFn = Box<dyn FnMut(&mut dyn Surface)>;

/// Stable handle to a registry slot.
///
/// The generation distinguishes successive occupants of a reused slot, so a
/// handle kept past its primitive's disposal is rejected instead of touching
/// the new occupant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShapeId {
    index: u32,
    generation: u32,
}

impl ShapeId {
    /// Slot position; also the draw order of the slot.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    #[inline]
    pub(crate) const fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

enum SlotState {
    Live(DrawFn),
    Tombstoned,
}

struct Slot {
    generation: u32,
    state: SlotState,
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            SlotState::Live(_) => "live",
            SlotState::Tombstoned => "tombstoned",
        };
        f.debug_struct("Slot")
            .field("generation", &self.generation)
            .field("state", &state)
            .finish()
    }
}

/// Ordered collection of draw callbacks.
///
/// Slot order is draw order. Removing a slot leaves a tombstone in place, so
/// the ids of every other slot stay valid. Tombstoned slots are kept on a
/// free list and reissued with a bumped generation, which bounds growth when
/// primitives are churned.
///
/// Performance characteristics:
/// - `register()` is O(1) amortized
/// - `remove()` is O(1)
/// - `draw_all()` is O(slots)
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl ShapeRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `draw` and returns the id of its slot.
    ///
    /// Reuses the most recently tombstoned slot when one exists, otherwise
    /// appends a new slot at the end of the draw order.
    pub fn register<F>(&mut self, draw: F) -> ShapeId
    where
        F: FnMut(&mut dyn Surface) + 'static,
    {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.state = SlotState::Live(Box::new(draw));
            let id = ShapeId::from_parts(index, slot.generation);
            log::trace!("registered shape {id} (reused slot)");
            return id;
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, state: SlotState::Live(Box::new(draw)) });
        let id = ShapeId::from_parts(index, 0);
        log::trace!("registered shape {id}");
        id
    }

    /// Invokes every live callback against `surface`, in slot order.
    ///
    /// Tombstoned slots are skipped.
    pub fn draw_all(&mut self, surface: &mut dyn Surface) {
        for slot in &mut self.slots {
            if let SlotState::Live(draw) = &mut slot.state {
                draw(surface);
            }
        }
    }

    /// Tombstones the slot behind `id`.
    ///
    /// Fails with [`SceneError::OutOfRange`] when `id` was never issued or
    /// was already removed. The slot sequence is left untouched on failure.
    pub fn remove(&mut self, id: ShapeId) -> Result<(), SceneError> {
        let Some(slot) = self.slots.get_mut(id.index as usize) else {
            log::warn!("remove: {id} was never issued (slots: {})", self.slots.len());
            return Err(SceneError::OutOfRange(id));
        };
        if slot.generation != id.generation || matches!(slot.state, SlotState::Tombstoned) {
            log::warn!("remove: {id} is stale");
            return Err(SceneError::OutOfRange(id));
        }

        slot.state = SlotState::Tombstoned;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);

        log::debug!("removed shape {id} (slots: {})", self.slots.len());
        Ok(())
    }

    /// Returns `true` if `id` refers to a live slot.
    pub fn is_live(&self, id: ShapeId) -> bool {
        self.slots.get(id.index as usize).is_some_and(|slot| {
            slot.generation == id.generation && matches!(slot.state, SlotState::Live(_))
        })
    }

    /// Total slot count, tombstones included. Never decreases.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots currently holding a callback.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Live ids in draw order.
    pub fn live_ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| match slot.state {
            SlotState::Live(_) => Some(ShapeId::from_parts(index as u32, slot.generation)),
            SlotState::Tombstoned => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::scene::DrawList;

    /// Registers `n` callbacks that append their registration order to `log`.
    fn register_n(registry: &mut ShapeRegistry, n: usize, log: &Rc<RefCell<Vec<usize>>>) -> Vec<ShapeId> {
        (0..n)
            .map(|i| {
                let log = Rc::clone(log);
                registry.register(move |_| log.borrow_mut().push(i))
            })
            .collect()
    }

    // ── register / draw_all ───────────────────────────────────────────────

    #[test]
    fn register_issues_sequential_ids() {
        let mut registry = ShapeRegistry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let ids = register_n(&mut registry, 3, &log);
        let indices: Vec<u32> = ids.iter().map(|id| id.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.live_count(), 3);
    }

    #[test]
    fn draw_all_runs_each_callback_once_in_order() {
        let mut registry = ShapeRegistry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        register_n(&mut registry, 4, &log);

        registry.draw_all(&mut DrawList::new());
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);

        registry.draw_all(&mut DrawList::new());
        assert_eq!(log.borrow().len(), 8);
    }

    // ── remove ────────────────────────────────────────────────────────────

    #[test]
    fn removing_third_keeps_order_and_other_ids() {
        let mut registry = ShapeRegistry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let ids = register_n(&mut registry, 5, &log);

        registry.remove(ids[2]).unwrap();
        registry.draw_all(&mut DrawList::new());

        assert_eq!(*log.borrow(), vec![0, 1, 3, 4]);
        assert_eq!(registry.len(), 5);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(registry.is_live(*id), i != 2);
        }
        let live: Vec<ShapeId> = registry.live_ids().collect();
        assert_eq!(live, vec![ids[0], ids[1], ids[3], ids[4]]);
    }

    #[test]
    fn removing_twice_is_out_of_range() {
        let mut registry = ShapeRegistry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let ids = register_n(&mut registry, 2, &log);

        registry.remove(ids[0]).unwrap();
        assert_eq!(registry.remove(ids[0]), Err(SceneError::OutOfRange(ids[0])));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.live_count(), 1);

        registry.draw_all(&mut DrawList::new());
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn removing_never_issued_id_is_out_of_range() {
        let mut registry = ShapeRegistry::new();
        let bogus = ShapeId::from_parts(7, 0);
        assert_eq!(registry.remove(bogus), Err(SceneError::OutOfRange(bogus)));
        assert!(registry.is_empty());
    }

    // ── slot reuse ────────────────────────────────────────────────────────

    #[test]
    fn tombstoned_slot_is_reissued_with_new_generation() {
        let mut registry = ShapeRegistry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let ids = register_n(&mut registry, 3, &log);

        registry.remove(ids[1]).unwrap();
        let reused = registry.register(|_| {});

        assert_eq!(reused.index(), 1);
        assert_eq!(reused.generation(), 1);
        assert_eq!(registry.len(), 3);
        assert!(registry.is_live(reused));
        assert!(!registry.is_live(ids[1]));
    }

    #[test]
    fn stale_id_cannot_remove_new_occupant() {
        let mut registry = ShapeRegistry::new();
        let old = registry.register(|_| {});
        registry.remove(old).unwrap();
        let new = registry.register(|_| {});

        assert_eq!(registry.remove(old), Err(SceneError::OutOfRange(old)));
        assert!(registry.is_live(new));
    }
}
