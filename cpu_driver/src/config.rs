//! Driver-wide configuration, supplied by the embedding application.

/// Configuration inputs consumed by [`crate::cpu_manager::CpuManager`] and
/// [`crate::gdb_server::GdbServer`].
///
/// Plain data, constructed by the caller before
/// [`CpuManager::initialize`](crate::cpu_manager::CpuManager::initialize).
/// No field here triggers I/O on construction; sockets only open once
/// `GdbServer::init`/`DeferStart` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Spawn three helper host threads and let the scheduler preempt, rather
    /// than rotating cores cooperatively on the caller's own thread.
    pub use_multi_core: bool,
    /// Upper bound on `CpuManager::run_loop` iterations while a debugger is
    /// connected, so a stalled guest can't starve packet servicing forever.
    pub gdbstub_loops: u32,
    /// TCP port `GdbServer` listens on.
    pub gdbstub_port: u16,
    /// Whether the debug server should be toggled on at startup.
    pub gdbstub_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_multi_core: false,
            gdbstub_loops: 64,
            gdbstub_port: 1234,
            gdbstub_enabled: false,
        }
    }
}
