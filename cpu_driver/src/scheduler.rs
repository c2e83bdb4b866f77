//! The per-core kernel thread scheduler. External collaborator: this crate
//! only specifies the interface it consumes, never the thread-selection
//! policy behind it.

use gdbstub::common::Tid;

use crate::CoreIndex;

/// Opaque thread identity handed out by the scheduler.
///
/// Reused from the GDB remote protocol's own thread-id type: both
/// `GdbServer`'s `per_thread_step` set and the scheduler's `GetCurrentThread`
/// need exactly this "small, non-zero, totally ordered handle" shape, and the
/// debugger-facing thread ids *are* these handles, so there's no reason to
/// wrap a second type around it.
pub type ThreadHandle = Tid;

/// Per-core current-thread holder and context-switch trigger.
///
/// One instance per [`crate::core_runner::CoreRunner`]; `select_thread` and
/// `try_do_context_switch` are always called together, under the caller's
/// global kernel lock (see [`crate::core_runner::CoreRunner`]'s `Reschedule`).
pub trait PerCoreScheduler: Send {
    /// Pick the next thread to run on `core`, updating internal
    /// ready-queue state. Does not itself perform the context switch.
    fn select_thread(&mut self, core: CoreIndex);

    /// Perform a context switch if `select_thread` picked a different
    /// thread than the one currently installed.
    fn try_do_context_switch(&mut self);

    /// The thread currently installed on `core`, or `None` if the core is
    /// idle (no runnable thread).
    fn get_current_thread(&self, core: CoreIndex) -> Option<ThreadHandle>;

    /// Whether the scheduler itself considers `thread` to be single-stepping.
    ///
    /// Mirrors the debugger's per-thread step flag (see
    /// [`crate::gdb_server::GdbServer::get_thread_step_flag`]) so the
    /// scheduler can avoid preempting a thread mid-step; `CoreRunner`
    /// consults the debugger's flag directly and does not call this method,
    /// but an implementation is expected to keep the two in sync.
    fn step_flag(&self, thread: ThreadHandle) -> bool;
}
