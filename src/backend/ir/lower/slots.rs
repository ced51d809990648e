//! Temporary local slots.
//!
//! A function gets one arena. `request` hands back the most recently released slot when there is one and only
//! grows the arena otherwise, so the arena length is the number of locals the function needs.

use crate::backend::ir::value::LocalSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    InUse,
    Free,
}

#[derive(Debug, Default)]
pub(super) struct SlotArena {
    states: Vec<SlotState>,
    /// Released slots, most recent last.
    free: Vec<usize>,
}

impl SlotArena {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn request(&mut self) -> LocalSlot {
        let index = match self.free.pop() {
            Some(index) => {
                self.states[index] = SlotState::InUse;
                index
            }
            None => {
                self.states.push(SlotState::InUse);
                self.states.len() - 1
            }
        };
        tracing::trace!(slot = index, "request local slot");
        LocalSlot::new(index)
    }

    /// Return `slot` to the arena. Releasing a free slot again is a no-op.
    pub(super) fn release(&mut self, slot: LocalSlot) {
        let index = slot.index();
        if self.states.get(index) != Some(&SlotState::InUse) {
            return;
        }
        self.states[index] = SlotState::Free;
        self.free.push(index);
        tracing::trace!(slot = index, "release local slot");
    }

    /// Number of distinct slots ever handed out.
    pub(super) fn used(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_grows_when_nothing_is_free() {
        let mut arena = SlotArena::new();
        assert_eq!(arena.request().index(), 0);
        assert_eq!(arena.request().index(), 1);
        assert_eq!(arena.used(), 2);
    }

    #[test]
    fn test_release_is_reused_last_in_first_out() {
        let mut arena = SlotArena::new();
        let a = arena.request();
        let b = arena.request();
        arena.release(a);
        arena.release(b);
        assert_eq!(arena.request(), b);
        assert_eq!(arena.request(), a);
        assert_eq!(arena.used(), 2);
    }

    #[test]
    fn test_double_release_is_idempotent() {
        let mut arena = SlotArena::new();
        let a = arena.request();
        arena.release(a);
        arena.release(a);
        assert_eq!(arena.request(), a);
        // A second copy of `a` on the free list would be handed out again here.
        assert_eq!(arena.request().index(), 1);
    }

    #[test]
    fn test_release_of_unknown_slot_is_ignored() {
        let mut arena = SlotArena::new();
        arena.release(LocalSlot::new(7));
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.request().index(), 0);
    }
}
