//! The debugger's breakpoint table: `(address, kind)` pairs ordered by
//! address so the core can ask "what's the next breakpoint at or after
//! this address".

use std::collections::{BTreeMap, BTreeSet};

use crate::error::CpuManagerError;

/// The four breakpoint kinds the GDB remote protocol distinguishes via its
/// `Z`/`z` packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BreakpointKind {
    /// `Z0`/`z0` — instruction fetch.
    Execute,
    /// `Z3`/`z3` — memory read (watchpoint).
    Read,
    /// `Z2`/`z2` — memory write (watchpoint).
    Write,
    /// `Z4`/`z4` — memory read or write (watchpoint).
    Access,
}

/// A located breakpoint, or the `{0, None}` sentinel when a query finds
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub addr: u64,
    pub kind: Option<BreakpointKind>,
}

impl Breakpoint {
    /// Returned by [`BreakpointTable::next_from`] when no breakpoint of the
    /// requested kind exists at or after the queried address.
    pub const NONE: Breakpoint = Breakpoint { addr: 0, kind: None };
}

/// Breakpoints keyed by `(address, kind)`, ordered by address.
///
/// Invariant: no duplicate `(address, kind)` pair; an `Access` breakpoint is
/// stored as a single entry, never split into a `Read` + `Write` pair.
#[derive(Debug, Default)]
pub struct BreakpointTable {
    by_addr: BTreeMap<u64, BTreeSet<BreakpointKind>>,
}

impl BreakpointTable {
    /// An empty table.
    pub fn new() -> Self {
        BreakpointTable::default()
    }

    /// Absent -> Inserted. Fails if `(addr, kind)` is already present.
    pub fn insert(&mut self, addr: u64, kind: BreakpointKind) -> Result<(), CpuManagerError> {
        let set = self.by_addr.entry(addr).or_default();
        if !set.insert(kind) {
            return Err(CpuManagerError::BreakpointInsertion { addr, kind });
        }
        Ok(())
    }

    /// Inserted -> Absent. Returns whether an entry was actually removed.
    pub fn remove(&mut self, addr: u64, kind: BreakpointKind) -> bool {
        match self.by_addr.get_mut(&addr) {
            Some(set) => {
                let removed = set.remove(&kind);
                if set.is_empty() {
                    self.by_addr.remove(&addr);
                }
                removed
            }
            None => false,
        }
    }

    /// Exact-match lookup. For `kind = Access`, also matches `Read` or
    /// `Write` entries at that address.
    pub fn check(&self, addr: u64, kind: BreakpointKind) -> bool {
        let set = match self.by_addr.get(&addr) {
            Some(set) => set,
            None => return false,
        };
        if set.contains(&kind) {
            return true;
        }
        kind == BreakpointKind::Access
            && (set.contains(&BreakpointKind::Read) || set.contains(&BreakpointKind::Write))
    }

    /// The breakpoint of `kind` with the lowest address `>= addr`, or
    /// [`Breakpoint::NONE`] if none exists.
    pub fn next_from(&self, addr: u64, kind: BreakpointKind) -> Breakpoint {
        for (&candidate, set) in self.by_addr.range(addr..) {
            if set.contains(&kind) {
                return Breakpoint {
                    addr: candidate,
                    kind: Some(kind),
                };
            }
        }
        Breakpoint::NONE
    }

    /// Drop every breakpoint. Called on `GdbServer::shutdown`.
    pub fn clear(&mut self) {
        self.by_addr.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_insert_check_remove() {
        let mut table = BreakpointTable::new();
        table.insert(0x4000, BreakpointKind::Execute).unwrap();
        assert!(table.check(0x4000, BreakpointKind::Execute));
        assert!(table.remove(0x4000, BreakpointKind::Execute));
        assert!(!table.check(0x4000, BreakpointKind::Execute));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut table = BreakpointTable::new();
        table.insert(0x4000, BreakpointKind::Execute).unwrap();
        let err = table.insert(0x4000, BreakpointKind::Execute).unwrap_err();
        match err {
            CpuManagerError::BreakpointInsertion { addr, kind } => {
                assert_eq!(addr, 0x4000);
                assert_eq!(kind, BreakpointKind::Execute);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn access_matches_read_and_write_but_not_execute() {
        let mut table = BreakpointTable::new();
        table.insert(0x8000, BreakpointKind::Read).unwrap();
        assert!(table.check(0x8000, BreakpointKind::Access));
        assert!(!table.check(0x8000, BreakpointKind::Execute));
    }

    #[test]
    fn access_is_not_split_into_read_and_write() {
        let mut table = BreakpointTable::new();
        table.insert(0x8000, BreakpointKind::Access).unwrap();
        assert!(!table.check(0x8000, BreakpointKind::Read));
        assert!(!table.check(0x8000, BreakpointKind::Write));
        assert!(table.check(0x8000, BreakpointKind::Access));
    }

    #[test]
    fn next_from_finds_minimum_address_at_or_after() {
        let mut table = BreakpointTable::new();
        table.insert(0x100, BreakpointKind::Execute).unwrap();
        table.insert(0x200, BreakpointKind::Execute).unwrap();
        table.insert(0x150, BreakpointKind::Write).unwrap();

        assert_eq!(
            table.next_from(0x120, BreakpointKind::Execute),
            Breakpoint { addr: 0x200, kind: Some(BreakpointKind::Execute) }
        );
        assert_eq!(
            table.next_from(0x201, BreakpointKind::Execute),
            Breakpoint::NONE
        );
    }
}
