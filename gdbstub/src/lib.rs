//! An implementation of the [GDB Remote Serial Protocol](https://sourceware.org/gdb/onlinedocs/gdb/Remote-Protocol.html)
//! in Rust, primarily for use in emulators.
//!
//! ## Feature flags
//!
//! - `std` (default):
//!   - Provides `impl Connection` for several common types (e.g: TcpStream)
//!   - Outputs protocol responses via `log`
//! - `alloc`:
//!   - Provides implementations for certain `Target` methods that require
//!     dynamic memory allocation.
//! - `sync` (default):
//!   - Use blocking I/O instead of async/await for the underlying transport.
//! - `trace-pkt` (default):
//!   - Trace all packets sent and received to/from the GDB client at the
//!     `trace` log level.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
extern crate log;

pub mod arch;
pub mod common;
pub mod conn;
mod internal;
pub mod protocol;
pub mod stub;
pub mod target;
mod util;

pub use common::{Pid, Tid};
pub use conn::Connection;
pub use stub::{DisconnectReason, GdbStub};

/// The fabricated thread ID used to represent a single-threaded target's
/// only thread of execution.
pub(crate) const SINGLE_THREAD_TID: Tid = match core::num::NonZeroUsize::new(1) {
    Some(v) => v,
    None => unreachable!(),
};

/// The fabricated process ID reported to GDB when a target does not
/// implement multiprocess extensions.
pub(crate) const FAKE_PID: Pid = match core::num::NonZeroUsize::new(1) {
    Some(v) => v,
    None => unreachable!(),
};
