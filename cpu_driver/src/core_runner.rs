//! The per-core run loop: reschedule, pick idle/run/step, consult the
//! debugger's halt and step flags, advance timing.

use std::sync::{Arc, Mutex};

use gdbstub::common::Signal;

use crate::arch_core::{ArchCore, StopReason};
use crate::gdb_server::GdbServer;
use crate::scheduler::PerCoreScheduler;
use crate::timing::Timing;
use crate::CoreIndex;

/// Drives one virtual CPU core.
///
/// At most one host thread is ever inside [`run_loop`](CoreRunner::run_loop)
/// for a given `CoreRunner` at a time: in multi-core mode that's the helper
/// thread bound to it at `StartThreads`, in single-core mode it's whichever
/// thread is driving [`crate::cpu_manager::CpuManager::run_loop`].
/// `arch` and `scheduler` are still behind a `Mutex` rather than accessed
/// through `&mut self`, since `CoreRunner` is shared via `Arc` across the
/// manager and (in multi-core mode) its own helper thread.
pub struct CoreRunner {
    index: CoreIndex,
    arch: Mutex<Box<dyn ArchCore>>,
    scheduler: Mutex<Box<dyn PerCoreScheduler>>,
    timing: Arc<Mutex<dyn Timing>>,
    gdb: Arc<GdbServer>,
    kernel_lock: Arc<Mutex<()>>,
}

impl CoreRunner {
    pub fn new(
        index: CoreIndex,
        arch: Box<dyn ArchCore>,
        scheduler: Box<dyn PerCoreScheduler>,
        timing: Arc<Mutex<dyn Timing>>,
        gdb: Arc<GdbServer>,
        kernel_lock: Arc<Mutex<()>>,
    ) -> Self {
        CoreRunner {
            index,
            arch: Mutex::new(arch),
            scheduler: Mutex::new(scheduler),
            timing,
            gdb,
            kernel_lock,
        }
    }

    pub fn index(&self) -> CoreIndex {
        self.index
    }

    /// Execute one scheduling slice.
    ///
    /// `tight` lets [`ArchCore::run`] execute many instructions before
    /// returning; when `false` (or forced by an outstanding step flag)
    /// exactly one instruction executes via [`ArchCore::step`].
    pub fn run_loop(&self, tight: bool) {
        self.reschedule();

        let current = {
            let sched = self.scheduler.lock().unwrap();
            sched.get_current_thread(self.index)
        };

        let current = match current {
            None => {
                self.timing.lock().unwrap().idle();
                self.prepare_reschedule();
                self.reschedule();
                return;
            }
            Some(t) => t,
        };

        if self.gdb.get_cpu_halt_flag() {
            self.reschedule();
            return;
        }

        let mut tight = tight;
        let mut forced_step = false;
        if self.gdb.get_thread_step_flag(current) {
            self.gdb.break_(false);
            tight = false;
            forced_step = true;
        }

        let stop = {
            let mut arch = self.arch.lock().unwrap();
            if tight {
                arch.run()
            } else {
                arch.step()
            }
        };

        match stop {
            StopReason::Fault(signal) => {
                self.gdb.send_trap(current, signal.0);
                self.gdb.break_(false);
            }
            StopReason::SteppedOne if forced_step => {
                self.gdb.send_trap(current, Signal::SIGTRAP.0);
            }
            _ => {}
        }

        self.timing.lock().unwrap().advance();
        self.reschedule();
    }

    /// Execute exactly one instruction. Equivalent to `run_loop(false)`.
    pub fn single_step(&self) {
        self.run_loop(false);
    }

    /// Ask an in-progress tight `run` to return at its next safe point.
    pub fn prepare_reschedule(&self) {
        self.arch.lock().unwrap().prepare_reschedule();
    }

    /// Release this core's execution engine resources.
    pub fn shutdown(&self) {
        self.arch.lock().unwrap().clear_exclusive_state();
    }

    pub fn read_reg(&self, reg: u32) -> u64 {
        self.arch.lock().unwrap().read_reg(reg)
    }

    pub fn write_reg(&self, reg: u32, value: u64) {
        self.arch.lock().unwrap().write_reg(reg, value);
    }

    pub fn num_regs(&self) -> u32 {
        self.arch.lock().unwrap().num_regs()
    }

    pub fn read_memory(&self, addr: u64, out: &mut [u8]) -> bool {
        self.arch.lock().unwrap().read_memory(addr, out)
    }

    pub fn write_memory(&self, addr: u64, data: &[u8]) -> bool {
        self.arch.lock().unwrap().write_memory(addr, data)
    }

    /// The thread currently installed on this core, as seen by its
    /// scheduler.
    pub fn current_thread(&self) -> Option<crate::scheduler::ThreadHandle> {
        self.scheduler.lock().unwrap().get_current_thread(self.index)
    }

    /// Acquire the global kernel lock, let the scheduler pick this core's
    /// next thread, then let it perform the context switch if needed.
    ///
    /// The lock is held only across the selection/switch pair, never across
    /// [`ArchCore`] execution: that's what lets other cores' SVC handlers
    /// manipulate scheduler state without racing this core's slice.
    fn reschedule(&self) {
        let _guard = self.kernel_lock.lock().unwrap();
        let mut sched = self.scheduler.lock().unwrap();
        sched.select_thread(self.index);
        sched.try_do_context_switch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gdb_server::GdbServer;
    use crate::scheduler::ThreadHandle;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FakeArch {
        run_calls: Arc<AtomicU32>,
        step_calls: Arc<AtomicU32>,
        next_stop: StopReason,
    }

    impl ArchCore for FakeArch {
        fn run(&mut self) -> StopReason {
            self.run_calls.fetch_add(1, Ordering::SeqCst);
            self.next_stop
        }
        fn step(&mut self) -> StopReason {
            self.step_calls.fetch_add(1, Ordering::SeqCst);
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

    struct FakeScheduler {
        current: Option<ThreadHandle>,
        select_calls: Arc<AtomicU32>,
    }

    impl PerCoreScheduler for FakeScheduler {
        fn select_thread(&mut self, _core: CoreIndex) {
            self.select_calls.fetch_add(1, Ordering::SeqCst);
        }
        fn try_do_context_switch(&mut self) {}
        fn get_current_thread(&self, _core: CoreIndex) -> Option<ThreadHandle> {
            self.current
        }
        fn step_flag(&self, _thread: ThreadHandle) -> bool {
            false
        }
    }

    struct FakeTiming {
        idle_calls: Arc<AtomicU32>,
        advance_calls: Arc<AtomicU32>,
    }

    impl Timing for FakeTiming {
        fn reset_run(&mut self) {}
        fn switch_context(&mut self, _core: CoreIndex) {}
        fn can_current_context_run(&self) -> bool {
            true
        }
        fn advance(&mut self) {
            self.advance_calls.fetch_add(1, Ordering::SeqCst);
        }
        fn idle(&mut self) {
            self.idle_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn thread(n: usize) -> ThreadHandle {
        ThreadHandle::new(n).unwrap()
    }

    fn make_runner(
        current: Option<ThreadHandle>,
        next_stop: StopReason,
    ) -> (
        CoreRunner,
        Arc<AtomicU32>,
        Arc<AtomicU32>,
        Arc<AtomicU32>,
        Arc<AtomicU32>,
        Arc<GdbServer>,
    ) {
        let run_calls = Arc::new(AtomicU32::new(0));
        let step_calls = Arc::new(AtomicU32::new(0));
        let idle_calls = Arc::new(AtomicU32::new(0));
        let advance_calls = Arc::new(AtomicU32::new(0));
        let select_calls = Arc::new(AtomicU32::new(0));

        let arch = Box::new(FakeArch {
            run_calls: run_calls.clone(),
            step_calls: step_calls.clone(),
            next_stop,
        });
        let sched = Box::new(FakeScheduler {
            current,
            select_calls,
        });
        let timing: Arc<Mutex<dyn Timing>> = Arc::new(Mutex::new(FakeTiming {
            idle_calls: idle_calls.clone(),
            advance_calls: advance_calls.clone(),
        }));
        let gdb = Arc::new(GdbServer::new(Config::default()));
        let kernel_lock = Arc::new(Mutex::new(()));

        let runner = CoreRunner::new(CoreIndex::new(0), arch, sched, timing, gdb.clone(), kernel_lock);
        (runner, run_calls, step_calls, idle_calls, advance_calls, gdb)
    }

    #[test]
    fn s1_idle_when_no_thread_calls_idle_not_run() {
        let (runner, run_calls, _step, idle_calls, _advance, _gdb) =
            make_runner(None, StopReason::Yielded);
        runner.run_loop(true);
        assert_eq!(idle_calls.load(Ordering::SeqCst), 1);
        assert_eq!(run_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn s2_halt_flag_prevents_execution() {
        let (runner, run_calls, step_calls, _idle, advance_calls, gdb) =
            make_runner(Some(thread(1)), StopReason::Yielded);
        gdb.break_(false);
        for _ in 0..10 {
            runner.run_loop(true);
        }
        assert_eq!(run_calls.load(Ordering::SeqCst), 0);
        assert_eq!(step_calls.load(Ordering::SeqCst), 0);
        assert_eq!(advance_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn s3_step_flag_forces_single_step_and_traps() {
        let (runner, run_calls, step_calls, _idle, _advance, gdb) =
            make_runner(Some(thread(3)), StopReason::Yielded);
        gdb.set_thread_step_flag(thread(3));
        runner.run_loop(true);
        assert_eq!(step_calls.load(Ordering::SeqCst), 1);
        assert_eq!(run_calls.load(Ordering::SeqCst), 0);
        assert!(gdb.get_cpu_halt_flag());
    }

    #[test]
    fn fault_sends_trap_and_halts() {
        let (runner, _run, _step, _idle, _advance, gdb) =
            make_runner(Some(thread(1)), StopReason::Fault(Signal::SIGSEGV));
        runner.run_loop(true);
        assert!(gdb.get_cpu_halt_flag());
    }
}
