//! Load-linked / store-conditional reservation tracking shared by all cores.

use std::sync::Mutex;

use crate::CoreIndex;

const NUM_CORES: usize = crate::NUM_CORES;

#[derive(Debug, Clone, Copy)]
struct Reservation {
    addr: u64,
    width: u32,
}

impl Reservation {
    fn overlaps(&self, addr: u64, width: u32) -> bool {
        let a_end = self.addr.wrapping_add(self.width as u64);
        let b_end = addr.wrapping_add(width as u64);
        self.addr < b_end && addr < a_end
    }
}

/// Per-core address reservations for load-linked/store-conditional
/// emulation. Mutated by the owning core; inspected by any core on a
/// store-conditional or ordinary store.
#[derive(Debug, Default)]
pub struct ExclusiveMonitor {
    reservations: Mutex<[Option<Reservation>; NUM_CORES]>,
}

impl ExclusiveMonitor {
    /// Construct a monitor with no outstanding reservations.
    pub fn new() -> Self {
        ExclusiveMonitor::default()
    }

    /// Record a reservation for `core`, overwriting any prior one.
    pub fn reserve(&self, core: CoreIndex, addr: u64, width: u32) {
        let mut slots = self.reservations.lock().unwrap();
        slots[core.as_usize()] = Some(Reservation { addr, width });
    }

    /// Invalidate every reservation (on any core) that overlaps
    /// `[addr, addr + width)`. Models the global visibility of an ordinary
    /// store.
    pub fn invalidate(&self, addr: u64, width: u32) {
        let mut slots = self.reservations.lock().unwrap();
        for slot in slots.iter_mut() {
            if matches!(slot, Some(r) if r.overlaps(addr, width)) {
                *slot = None;
            }
        }
    }

    /// Check whether `core` still holds a reservation overlapping
    /// `[addr, addr + width)`, then clear every overlapping reservation
    /// globally (this core's and any other's). Returns whether the
    /// store-conditional should be reported as successful.
    pub fn check_and_clear(&self, core: CoreIndex, addr: u64, width: u32) -> bool {
        let mut slots = self.reservations.lock().unwrap();
        let hit = matches!(slots[core.as_usize()], Some(r) if r.overlaps(addr, width));
        for slot in slots.iter_mut() {
            if matches!(slot, Some(r) if r.overlaps(addr, width)) {
                *slot = None;
            }
        }
        hit
    }

    /// Drop `core`'s reservation unconditionally.
    pub fn clear_all(&self, core: CoreIndex) {
        self.reservations.lock().unwrap()[core.as_usize()] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_then_check_and_clear_succeeds() {
        let mon = ExclusiveMonitor::new();
        mon.reserve(CoreIndex::new(0), 0x1000, 4);
        assert!(mon.check_and_clear(CoreIndex::new(0), 0x1000, 4));
        // already cleared
        assert!(!mon.check_and_clear(CoreIndex::new(0), 0x1000, 4));
    }

    #[test]
    fn overlapping_store_from_another_core_invalidates_reservation() {
        // S6: core 0 reserves 0x1000..0x1004; core 1 writes 0x1002..0x1006;
        // core 0's store-conditional must then fail.
        let mon = ExclusiveMonitor::new();
        mon.reserve(CoreIndex::new(0), 0x1000, 4);
        mon.invalidate(0x1002, 4);
        assert!(!mon.check_and_clear(CoreIndex::new(0), 0x1000, 4));
    }

    #[test]
    fn non_overlapping_store_does_not_invalidate() {
        let mon = ExclusiveMonitor::new();
        mon.reserve(CoreIndex::new(0), 0x1000, 4);
        mon.invalidate(0x2000, 4);
        assert!(mon.check_and_clear(CoreIndex::new(0), 0x1000, 4));
    }

    #[test]
    fn reservations_are_independent_per_core() {
        let mon = ExclusiveMonitor::new();
        mon.reserve(CoreIndex::new(0), 0x1000, 4);
        mon.reserve(CoreIndex::new(1), 0x5000, 8);
        assert!(mon.check_and_clear(CoreIndex::new(1), 0x5000, 8));
        assert!(mon.check_and_clear(CoreIndex::new(0), 0x1000, 4));
    }
}
