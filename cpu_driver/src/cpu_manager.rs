//! Owns the four [`CoreRunner`]s, the [`Barrier`], the [`ExclusiveMonitor`],
//! and the host-thread-to-core mapping; drives either the multi-threaded or
//! single-threaded cooperative execution model depending on [`Config`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle, ThreadId};

use gdbstub::common::Tid;

use crate::arch_core::ArchCore;
use crate::barrier::Barrier;
use crate::config::Config;
use crate::core_runner::CoreRunner;
use crate::error::CpuManagerError;
use crate::exclusive_monitor::ExclusiveMonitor;
use crate::gdb_server::{DisconnectReason, GdbServer, GdbTarget};
use crate::scheduler::PerCoreScheduler;
use crate::timing::Timing;
use crate::{CoreIndex, NUM_CORES};

/// Multi-core CPU execution driver.
///
/// Construct with [`CpuManager::new`] (§4.4 `Initialize`), then call
/// [`CpuManager::start_threads`] once before driving execution. In
/// single-core mode, the caller repeatedly calls
/// [`CpuManager::run_loop`]; in multi-core mode the three helper threads
/// spawned by `start_threads` drive cores 1-3 on their own, and the caller
/// still calls `run_loop`-equivalent logic for core 0 by way of whichever
/// host thread it registered.
pub struct CpuManager {
    runners: Vec<Arc<CoreRunner>>,
    barrier: Arc<Barrier>,
    monitor: Arc<ExclusiveMonitor>,
    gdb: Arc<GdbServer>,
    timing: Arc<Mutex<dyn Timing>>,
    thread_to_core: Mutex<HashMap<ThreadId, CoreIndex>>,
    config: Config,
    active_core: AtomicUsize,
    system_powered_on: Arc<AtomicBool>,
    helper_threads: Mutex<Vec<JoinHandle<()>>>,
}

impl CpuManager {
    /// `Initialize`: construct the four `CoreRunner`s plus shared
    /// synchronization state. `archs` and `schedulers` must each have
    /// exactly [`NUM_CORES`] entries, core-index ordered.
    pub fn new(
        config: Config,
        archs: Vec<Box<dyn ArchCore>>,
        schedulers: Vec<Box<dyn PerCoreScheduler>>,
        timing: Arc<Mutex<dyn Timing>>,
    ) -> Self {
        assert_eq!(archs.len(), NUM_CORES, "one ArchCore per core required");
        assert_eq!(schedulers.len(), NUM_CORES, "one PerCoreScheduler per core required");

        let gdb = Arc::new(GdbServer::new(config));
        let monitor = Arc::new(ExclusiveMonitor::new());
        let barrier = Arc::new(Barrier::new());
        let kernel_lock = Arc::new(Mutex::new(()));

        let runners = archs
            .into_iter()
            .zip(schedulers)
            .enumerate()
            .map(|(i, (arch, sched))| {
                Arc::new(CoreRunner::new(
                    CoreIndex::new(i),
                    arch,
                    sched,
                    timing.clone(),
                    gdb.clone(),
                    kernel_lock.clone(),
                ))
            })
            .collect();

        CpuManager {
            runners,
            barrier,
            monitor,
            gdb,
            timing,
            thread_to_core: Mutex::new(HashMap::new()),
            config,
            active_core: AtomicUsize::new(0),
            system_powered_on: Arc::new(AtomicBool::new(true)),
            helper_threads: Mutex::new(Vec::new()),
        }
    }

    pub fn gdb_server(&self) -> &Arc<GdbServer> {
        &self.gdb
    }

    pub fn exclusive_monitor(&self) -> &Arc<ExclusiveMonitor> {
        &self.monitor
    }

    /// `StartThreads`: register the calling thread as core 0's driver, and
    /// in multi-core mode spawn three helper threads for cores 1-3, each
    /// looping `run_loop(true)` until the barrier ends.
    pub fn start_threads(&self) {
        self.register_current_thread(CoreIndex::new(0));

        if !self.config.use_multi_core {
            return;
        }

        if self.config.gdbstub_enabled {
            self.gdb.toggle_server(true);
            self.gdb.defer_start();
        }

        let mut handles = self.helper_threads.lock().unwrap();
        for i in 1..NUM_CORES {
            let runner = self.runners[i].clone();
            let barrier = self.barrier.clone();
            let powered_on = self.system_powered_on.clone();
            let handle = thread::Builder::new()
                .name(format!("core{i}"))
                .spawn(move || {
                    while powered_on.load(Ordering::SeqCst) && !barrier.is_ending() {
                        runner.run_loop(true);
                    }
                })
                .expect("failed to spawn core runner thread");
            handles.push(handle);
        }
    }

    fn register_current_thread(&self, core: CoreIndex) {
        self.thread_to_core
            .lock()
            .unwrap()
            .insert(thread::current().id(), core);
    }

    /// `Shutdown`: signal the barrier, join any helper threads, clear the
    /// thread map, and release the GDB server's socket/breakpoints.
    pub fn shutdown(&self) {
        self.system_powered_on.store(false, Ordering::SeqCst);
        self.barrier.notify_end();

        let mut handles = self.helper_threads.lock().unwrap();
        for handle in handles.drain(..) {
            let _ = handle.join();
        }
        drop(handles);

        for runner in &self.runners {
            runner.shutdown();
        }
        self.thread_to_core.lock().unwrap().clear();
        self.gdb.shutdown(DisconnectReason::TargetExited);
    }

    /// `GetCurrentCoreRunner`: in multi-core mode, look the calling host
    /// thread up in the thread map (must be present — a programmer error
    /// otherwise); in single-core mode, return the manager's own
    /// `active_core`.
    pub fn get_current_core_runner(&self) -> Result<Arc<CoreRunner>, CpuManagerError> {
        if self.config.use_multi_core {
            let map = self.thread_to_core.lock().unwrap();
            let core = map.get(&thread::current().id()).copied().ok_or_else(|| {
                CpuManagerError::SchedulerInvariant(
                    "current host thread is not registered to any core".to_string(),
                )
            })?;
            Ok(self.runners[core.as_usize()].clone())
        } else {
            let idx = self.active_core.load(Ordering::SeqCst);
            Ok(self.runners[idx].clone())
        }
    }

    /// Single-core cooperative rotation across all four cores, bounded by
    /// `config.gdbstub_loops` while a debugger is connected (so a connected
    /// debugger can't be starved by a guest that never idles).
    pub fn run_loop(&self, tight: bool) {
        self.register_current_thread(CoreIndex::new(self.active_core.load(Ordering::SeqCst)));

        let mut num_loops = 0u32;
        loop {
            if self.gdb.is_server_enabled() {
                let mut target = CpuManagerGdbTarget(self);
                self.gdb.handle_packet(&mut target);
            }

            self.timing.lock().unwrap().reset_run();

            let mut keep_running = false;
            for i in 0..NUM_CORES {
                self.active_core.store(i, Ordering::SeqCst);
                self.timing.lock().unwrap().switch_context(CoreIndex::new(i));
                let can_run = self.timing.lock().unwrap().can_current_context_run();
                if can_run {
                    self.runners[i].run_loop(tight);
                }
                keep_running |= can_run;
            }

            if self.gdb.is_connected() {
                num_loops += 1;
            }

            if !(keep_running && num_loops < self.config.gdbstub_loops) {
                break;
            }
        }
    }
}

/// Adapts [`CpuManager`] to the register/memory access surface
/// [`GdbServer`] drives. `Tid` is `CoreIndex + 1` (`Tid` is a `NonZeroUsize`,
/// `CoreIndex` is zero-based).
struct CpuManagerGdbTarget<'a>(&'a CpuManager);

fn tid_to_core(tid: Tid) -> CoreIndex {
    CoreIndex::new(tid.get() - 1)
}

fn core_to_tid(core: CoreIndex) -> Tid {
    Tid::new(core.as_usize() + 1).expect("core index + 1 is always non-zero")
}

impl<'a> GdbTarget for CpuManagerGdbTarget<'a> {
    fn read_registers(&mut self, thread: Tid, out: &mut [u8]) {
        let runner = &self.0.runners[tid_to_core(thread).as_usize()];
        let n = runner.num_regs();
        for reg in 0..n {
            let value = runner.read_reg(reg);
            let bytes = value.to_le_bytes();
            let start = reg as usize * 8;
            if start + 8 <= out.len() {
                out[start..start + 8].copy_from_slice(&bytes);
            }
        }
    }

    fn write_registers(&mut self, thread: Tid, data: &[u8]) {
        let runner = &self.0.runners[tid_to_core(thread).as_usize()];
        let n = runner.num_regs();
        for reg in 0..n {
            let start = reg as usize * 8;
            if start + 8 <= data.len() {
                let mut arr = [0u8; 8];
                arr.copy_from_slice(&data[start..start + 8]);
                runner.write_reg(reg, u64::from_le_bytes(arr));
            }
        }
    }

    fn read_register(&mut self, thread: Tid, reg: u32) -> u64 {
        self.0.runners[tid_to_core(thread).as_usize()].read_reg(reg)
    }

    fn write_register(&mut self, thread: Tid, reg: u32, value: u64) {
        self.0.runners[tid_to_core(thread).as_usize()].write_reg(reg, value);
    }

    fn read_memory(&mut self, addr: u64, out: &mut [u8]) -> bool {
        let core = CoreIndex::new(self.0.active_core.load(Ordering::SeqCst));
        self.0.runners[core.as_usize()].read_memory(addr, out)
    }

    fn write_memory(&mut self, addr: u64, data: &[u8]) -> bool {
        let core = CoreIndex::new(self.0.active_core.load(Ordering::SeqCst));
        self.0.runners[core.as_usize()].write_memory(addr, data)
    }

    fn list_threads(&self) -> Vec<Tid> {
        self.0
            .runners
            .iter()
            .filter(|r| r.current_thread().is_some())
            .map(|r| core_to_tid(r.index()))
            .collect()
    }

    fn resume(&mut self) {
        for runner in &self.0.runners {
            runner.prepare_reschedule();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch_core::StopReason;
    use crate::scheduler::ThreadHandle;
    use std::sync::atomic::AtomicU32;
    use std::time::{Duration, Instant};

    struct FakeArch;
    impl ArchCore for FakeArch {
        fn run(&mut self) -> StopReason {
            StopReason::Yielded
        }
        fn step(&mut self) -> StopReason {
            StopReason::SteppedOne
        }
        fn prepare_reschedule(&mut self) {}
        fn read_reg(&self, _reg: u32) -> u64 {
            0
        }
        fn write_reg(&mut self, _reg: u32, _value: u64) {}
        fn num_regs(&self) -> u32 {
            1
        }
        fn page_table_changed(&mut self) {}
        fn clear_instruction_cache(&mut self) {}
        fn clear_exclusive_state(&mut self) {}
        fn read_memory(&self, _addr: u64, _out: &mut [u8]) -> bool {
            true
        }
        fn write_memory(&mut self, _addr: u64, _data: &[u8]) -> bool {
            true
        }
    }

    struct FakeScheduler(usize);
    impl PerCoreScheduler for FakeScheduler {
        fn select_thread(&mut self, _core: CoreIndex) {}
        fn try_do_context_switch(&mut self) {}
        fn get_current_thread(&self, _core: CoreIndex) -> Option<ThreadHandle> {
            ThreadHandle::new(self.0)
        }
        fn step_flag(&self, _thread: ThreadHandle) -> bool {
            false
        }
    }

    struct FakeTiming {
        idle_calls: Arc<AtomicU32>,
        can_run_calls: AtomicU32,
    }
    impl Timing for FakeTiming {
        fn reset_run(&mut self) {}
        fn switch_context(&mut self, _core: CoreIndex) {}
        fn can_current_context_run(&self) -> bool {
            // True for exactly one full rotation (one call per core), then
            // false forever after: matches S4 ("... until
            // CanCurrentContextRun returns false for all") without looping
            // indefinitely, since nothing else in this fake ever becomes
            // runnable again.
            let n = self.can_run_calls.fetch_add(1, Ordering::SeqCst);
            (n as usize) < NUM_CORES
        }
        fn advance(&mut self) {}
        fn idle(&mut self) {
            self.idle_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn make_manager(config: Config) -> (CpuManager, Arc<AtomicU32>) {
        let idle_calls = Arc::new(AtomicU32::new(0));
        let archs: Vec<Box<dyn ArchCore>> = (0..NUM_CORES).map(|_| Box::new(FakeArch) as Box<dyn ArchCore>).collect();
        let scheds: Vec<Box<dyn PerCoreScheduler>> = (0..NUM_CORES)
            .map(|i| Box::new(FakeScheduler(i + 1)) as Box<dyn PerCoreScheduler>)
            .collect();
        let timing: Arc<Mutex<dyn Timing>> = Arc::new(Mutex::new(FakeTiming {
            idle_calls: idle_calls.clone(),
            can_run_calls: AtomicU32::new(0),
        }));
        (CpuManager::new(config, archs, scheds, timing), idle_calls)
    }

    #[test]
    fn s4_four_core_rotation_runs_all_cores_in_order() {
        let (manager, _idle) = make_manager(Config {
            use_multi_core: false,
            gdbstub_loops: 1,
            ..Config::default()
        });
        manager.start_threads();
        manager.run_loop(true);
        assert_eq!(manager.active_core.load(Ordering::SeqCst), NUM_CORES - 1);
    }

    #[test]
    fn s5_multi_core_shutdown_joins_helper_threads_promptly() {
        let (manager, _idle) = make_manager(Config {
            use_multi_core: true,
            ..Config::default()
        });
        manager.start_threads();
        assert_eq!(manager.helper_threads.lock().unwrap().len(), NUM_CORES - 1);

        let start = Instant::now();
        manager.shutdown();
        assert!(start.elapsed() < Duration::from_secs(2));
        assert!(manager.helper_threads.lock().unwrap().is_empty());
        assert!(manager.thread_to_core.lock().unwrap().is_empty());
    }

    #[test]
    fn single_core_mode_current_runner_tracks_active_core() {
        let (manager, _idle) = make_manager(Config::default());
        manager.start_threads();
        manager.active_core.store(2, Ordering::SeqCst);
        let runner = manager.get_current_core_runner().unwrap();
        assert_eq!(runner.index(), CoreIndex::new(2));
    }

    #[test]
    fn multi_core_mode_unregistered_thread_is_scheduler_invariant_error() {
        let (manager, _idle) = make_manager(Config {
            use_multi_core: true,
            ..Config::default()
        });
        // Not calling start_threads: no thread registered.
        let err = manager.get_current_core_runner().unwrap_err();
        assert!(matches!(err, CpuManagerError::SchedulerInvariant(_)));
    }
}
