//! Error types for the fallible boundaries of the driver.
//!
//! Most failures inside a core's run loop never reach a caller: engine
//! faults are converted to a debugger trap (see [`crate::core_runner`]) and
//! protocol errors just drop the debugger connection. The types here cover
//! the boundaries that *do* need to propagate: breakpoint-table mutation
//! requested by the debugger, and scheduler invariant violations that are
//! always a programmer error.

use core::fmt;

use crate::breakpoint::BreakpointKind;

/// Errors surfaced across the [`crate::cpu_manager::CpuManager`] /
/// [`crate::gdb_server::GdbServer`] boundary.
#[derive(Debug)]
pub enum CpuManagerError {
    /// The thread-to-core map was consulted for a host thread that never
    /// registered itself. This can only happen if a caller drives a
    /// [`crate::core_runner::CoreRunner`] from a thread `StartThreads` never
    /// spawned.
    SchedulerInvariant(String),
    /// The debugger asked to insert a breakpoint that already exists, or at
    /// an address the table rejects.
    BreakpointInsertion {
        addr: u64,
        kind: BreakpointKind,
    },
}

impl fmt::Display for CpuManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuManagerError::SchedulerInvariant(msg) => {
                write!(f, "scheduler invariant violated: {msg}")
            }
            CpuManagerError::BreakpointInsertion { addr, kind } => {
                write!(f, "could not insert {kind:?} breakpoint at {addr:#x}")
            }
        }
    }
}

impl std::error::Error for CpuManagerError {}
