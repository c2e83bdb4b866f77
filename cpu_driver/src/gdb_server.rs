//! The embedded GDB remote-protocol server.
//!
//! This talks the subset of the GDB Remote Serial Protocol needed to halt,
//! step, and inspect the cores this crate drives: it does not implement
//! `gdbstub`'s generic [`gdbstub::target::Target`] trait tree (that
//! machinery is built around a single-target, single-connection debug stub
//! and doesn't map cleanly onto four independently-scheduled cores sharing
//! one connection). Instead it reuses `gdbstub`'s transport abstraction
//! ([`gdbstub::conn`]) and common wire types ([`gdbstub::common`]) and hand
//! rolls packet framing/dispatch for exactly the command set in use here.

use std::collections::HashSet;
use std::io;
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::Mutex;

use gdbstub::common::Tid;
use gdbstub::conn::{Connection, ConnectionExt};

use crate::breakpoint::{Breakpoint, BreakpointKind, BreakpointTable};
use crate::config::Config;

/// Why a connection was torn down. Passed to [`GdbServer::shutdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectReason {
    /// The embedder is tearing the whole driver down.
    TargetExited,
    /// The debugger sent a detach packet, or the connection reset.
    Detached,
}

/// A loaded module's address range, advertised to the debugger via
/// `qXfer:libraries:read`.
#[derive(Debug, Clone)]
struct ModuleInfo {
    name: String,
    beg: u64,
    end: u64,
}

/// Register/memory access surface `GdbServer` drives against. Implemented
/// by [`crate::cpu_manager::CpuManager`], which maps a [`Tid`] to the
/// [`crate::core_runner::CoreRunner`] it names.
pub trait GdbTarget {
    fn read_registers(&mut self, thread: Tid, out: &mut [u8]);
    fn write_registers(&mut self, thread: Tid, data: &[u8]);
    fn read_register(&mut self, thread: Tid, reg: u32) -> u64;
    fn write_register(&mut self, thread: Tid, reg: u32, value: u64);
    fn read_memory(&mut self, addr: u64, out: &mut [u8]) -> bool;
    fn write_memory(&mut self, addr: u64, data: &[u8]) -> bool;
    fn list_threads(&self) -> Vec<Tid>;
    /// Resume every thread (clear the halt flag is handled by the server;
    /// this just lets the target know execution is about to continue).
    fn resume(&mut self);
}

/// Process-wide GDB remote-protocol server state.
///
/// Created once and shared (`Arc`) across every [`crate::core_runner::CoreRunner`]
/// and the [`crate::cpu_manager::CpuManager`] that owns them.
pub struct GdbServer {
    enabled: AtomicBool,
    connected: AtomicBool,
    deferred_start: AtomicBool,
    halt_flag: AtomicBool,
    memory_break: AtomicBool,
    listen_port: AtomicU16,
    listener: Mutex<Option<TcpListener>>,
    conn: Mutex<Option<TcpStream>>,
    per_thread_step: Mutex<HashSet<Tid>>,
    breakpoints: Mutex<BreakpointTable>,
    modules: Mutex<Vec<ModuleInfo>>,
}

impl GdbServer {
    pub fn new(config: Config) -> Self {
        GdbServer {
            enabled: AtomicBool::new(config.gdbstub_enabled),
            connected: AtomicBool::new(false),
            deferred_start: AtomicBool::new(false),
            halt_flag: AtomicBool::new(false),
            memory_break: AtomicBool::new(false),
            listen_port: AtomicU16::new(config.gdbstub_port),
            listener: Mutex::new(None),
            conn: Mutex::new(None),
            per_thread_step: Mutex::new(HashSet::new()),
            breakpoints: Mutex::new(BreakpointTable::new()),
            modules: Mutex::new(Vec::new()),
        }
    }

    pub fn set_server_port(&self, port: u16) {
        self.listen_port.store(port, Ordering::SeqCst);
    }

    pub fn toggle_server(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_server_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Open the listening socket now.
    ///
    /// Failure is logged and swallowed (§7 `SocketSetupError`): a debugger
    /// simply never connects, execution proceeds unaffected.
    pub fn init(&self) {
        let port = self.listen_port.load(Ordering::SeqCst);
        match TcpListener::bind(("127.0.0.1", port)) {
            Ok(listener) => {
                if let Err(e) = listener.set_nonblocking(true) {
                    warn!("gdbstub: failed to set listener non-blocking: {e}");
                    return;
                }
                info!("gdbstub: listening on 127.0.0.1:{port}");
                *self.listener.lock().unwrap() = Some(listener);
            }
            Err(e) => {
                warn!("gdbstub: failed to bind 127.0.0.1:{port}: {e}");
            }
        }
    }

    /// Mark initialization as deferred; the first [`handle_packet`](Self::handle_packet)
    /// call performs `init`'s work instead.
    pub fn defer_start(&self) {
        self.deferred_start.store(true, Ordering::SeqCst);
    }

    /// Tear the connection (if any) and listening socket down, and drop all
    /// breakpoints.
    pub fn shutdown(&self, reason: DisconnectReason) {
        debug!("gdbstub: shutting down ({reason:?})");
        *self.conn.lock().unwrap() = None;
        *self.listener.lock().unwrap() = None;
        self.connected.store(false, Ordering::SeqCst);
        self.halt_flag.store(false, Ordering::SeqCst);
        self.per_thread_step.lock().unwrap().clear();
        self.breakpoints.lock().unwrap().clear();
        self.modules.lock().unwrap().clear();
    }

    /// Advertise a loaded module's address range to the debugger.
    pub fn register_module(&self, name: impl Into<String>, beg: u64, end: u64, add_elf_ext: bool) {
        let mut name = name.into();
        if add_elf_ext {
            name.push_str(".elf");
        }
        self.modules.lock().unwrap().push(ModuleInfo { name, beg, end });
    }

    /// Raise the global halt flag. `is_memory_break` records whether this
    /// halt was triggered by a memory breakpoint (vs. e.g. a debugger-issued
    /// interrupt or a single-step completion).
    pub fn break_(&self, is_memory_break: bool) {
        self.halt_flag.store(true, Ordering::SeqCst);
        if is_memory_break {
            self.memory_break.store(true, Ordering::SeqCst);
        }
    }

    /// Read-and-clear: returns whether the current halt was due to a memory
    /// breakpoint, then resets the flag to `false`.
    pub fn is_memory_break(&self) -> bool {
        self.memory_break.swap(false, Ordering::SeqCst)
    }

    pub fn get_cpu_halt_flag(&self) -> bool {
        self.halt_flag.load(Ordering::SeqCst)
    }

    pub fn get_thread_step_flag(&self, thread: Tid) -> bool {
        self.per_thread_step.lock().unwrap().contains(&thread)
    }

    pub(crate) fn set_thread_step_flag(&self, thread: Tid) {
        self.per_thread_step.lock().unwrap().insert(thread);
    }

    fn clear_thread_step_flag(&self, thread: Tid) {
        self.per_thread_step.lock().unwrap().remove(&thread);
    }

    pub fn get_next_breakpoint_from_address(&self, addr: u64, kind: BreakpointKind) -> Breakpoint {
        self.breakpoints.lock().unwrap().next_from(addr, kind)
    }

    pub fn check_breakpoint(&self, addr: u64, kind: BreakpointKind) -> bool {
        self.breakpoints.lock().unwrap().check(addr, kind)
    }

    /// Deliver a stop reply (`T05thread:HEX;`-shaped) to the connected
    /// debugger, if any. Connection errors just drop the connection (§7
    /// `GdbProtocolError`); they never propagate to the caller.
    pub fn send_trap(&self, thread: Tid, trap_no: u8) {
        let mut guard = self.conn.lock().unwrap();
        let conn = match guard.as_mut() {
            Some(c) => c,
            None => return,
        };
        let packet = format!("T{:02x}thread:{:x};", trap_no, thread.get());
        if write_packet(conn, packet.as_bytes()).is_err() {
            warn!("gdbstub: connection error sending trap, dropping connection");
            *guard = None;
            drop(guard);
            self.connected.store(false, Ordering::SeqCst);
        }
    }

    /// Non-blocking: accept a pending connection if needed, and service at
    /// most one packet if one is fully available. Never suspends the
    /// calling (core-driving) thread.
    pub fn handle_packet(&self, target: &mut dyn GdbTarget) {
        if self.deferred_start.swap(false, Ordering::SeqCst) {
            self.init();
        }

        if self.conn.lock().unwrap().is_none() {
            self.try_accept();
        }

        let byte_available = {
            let mut guard = self.conn.lock().unwrap();
            match guard.as_mut() {
                Some(conn) => matches!(conn.peek(), Ok(Some(_))),
                None => false,
            }
        };
        if !byte_available {
            return;
        }

        let packet = {
            let mut guard = self.conn.lock().unwrap();
            let conn = match guard.as_mut() {
                Some(c) => c,
                None => return,
            };
            match read_packet(conn) {
                Ok(Some(p)) => p,
                Ok(None) => return,
                Err(e) => {
                    warn!("gdbstub: connection read error: {e}, dropping connection");
                    *guard = None;
                    drop(guard);
                    self.connected.store(false, Ordering::SeqCst);
                    return;
                }
            }
        };

        self.dispatch(&packet, target);
    }

    fn try_accept(&self) {
        let mut listener_guard = self.listener.lock().unwrap();
        let listener = match listener_guard.as_ref() {
            Some(l) => l,
            None => return,
        };
        match listener.accept() {
            Ok((stream, addr)) => {
                if let Err(e) = stream.set_nonblocking(true) {
                    warn!("gdbstub: failed to set connection non-blocking: {e}");
                    return;
                }
                let _ = stream.set_nodelay(true);
                info!("gdbstub: debugger connected from {addr}");
                drop(listener_guard);
                *self.conn.lock().unwrap() = Some(stream);
                self.connected.store(true, Ordering::SeqCst);
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
            Err(e) => warn!("gdbstub: accept failed: {e}"),
        }
    }

    fn dispatch(&self, packet: &[u8], target: &mut dyn GdbTarget) {
        trace!("gdbstub: <- {}", String::from_utf8_lossy(packet));
        let response = self.handle_command(packet, target);
        if let Some(resp) = response {
            let mut guard = self.conn.lock().unwrap();
            if let Some(conn) = guard.as_mut() {
                if write_packet(conn, &resp).is_err() {
                    warn!("gdbstub: connection error sending reply, dropping connection");
                    *guard = None;
                    drop(guard);
                    self.connected.store(false, Ordering::SeqCst);
                }
            }
        }
    }

    /// Returns `None` when the command already sent its own reply (or needs
    /// none), `Some(bytes)` otherwise.
    fn handle_command(&self, packet: &[u8], target: &mut dyn GdbTarget) -> Option<Vec<u8>> {
        if packet.is_empty() {
            return Some(Vec::new());
        }

        match packet[0] {
            b'?' => Some(b"S05".to_vec()),
            b'g' => {
                let thread = self.current_thread(target);
                let mut buf = vec![0u8; 64 * 8];
                target.read_registers(thread, &mut buf);
                Some(hex_encode(&buf).into_bytes())
            }
            b'G' => {
                let thread = self.current_thread(target);
                let data = hex_decode(&packet[1..]);
                target.write_registers(thread, &data);
                Some(b"OK".to_vec())
            }
            b'p' => {
                let thread = self.current_thread(target);
                let body = std::str::from_utf8(&packet[1..]).ok()?;
                let reg = u32::from_str_radix(body, 16).ok()?;
                let value = target.read_register(thread, reg);
                Some(hex_encode(&value.to_le_bytes()).into_bytes())
            }
            b'P' => {
                let thread = self.current_thread(target);
                let body = std::str::from_utf8(&packet[1..]).ok()?;
                let (reg_s, val_s) = body.split_once('=')?;
                let reg = u32::from_str_radix(reg_s, 16).ok()?;
                let bytes = hex_decode(val_s.as_bytes());
                let mut arr = [0u8; 8];
                for (i, b) in bytes.iter().take(8).enumerate() {
                    arr[i] = *b;
                }
                target.write_register(thread, reg, u64::from_le_bytes(arr));
                Some(b"OK".to_vec())
            }
            b'm' => {
                let body = std::str::from_utf8(&packet[1..]).ok()?;
                let (addr_s, len_s) = body.split_once(',')?;
                let addr = u64::from_str_radix(addr_s, 16).ok()?;
                let len = usize::from_str_radix(len_s, 16).ok()?;
                let mut buf = vec![0u8; len];
                if target.read_memory(addr, &mut buf) {
                    Some(hex_encode(&buf).into_bytes())
                } else {
                    Some(b"E01".to_vec())
                }
            }
            b'M' => {
                let body = std::str::from_utf8(&packet[1..]).ok()?;
                let (head, data_s) = body.split_once(':')?;
                let (addr_s, _len_s) = head.split_once(',')?;
                let addr = u64::from_str_radix(addr_s, 16).ok()?;
                let data = hex_decode(data_s.as_bytes());
                if target.write_memory(addr, &data) {
                    Some(b"OK".to_vec())
                } else {
                    Some(b"E01".to_vec())
                }
            }
            b'c' => {
                let thread = self.current_thread(target);
                self.clear_thread_step_flag(thread);
                self.resume_all(target);
                None
            }
            b's' => {
                let thread = self.current_thread(target);
                self.set_thread_step_flag(thread);
                self.resume_all(target);
                None
            }
            b'H' => Some(b"OK".to_vec()),
            b'v' if packet.starts_with(b"vCont?") => Some(b"vCont;c;s".to_vec()),
            b'v' if packet.starts_with(b"vCont;") => {
                self.handle_vcont(&packet[b"vCont;".len()..], target);
                None
            }
            b'Z' => self.handle_set_break(packet),
            b'z' => self.handle_clear_break(packet),
            b'q' if packet.starts_with(b"qXfer:libraries:read") => {
                Some(self.xfer_libraries_response())
            }
            b'q' if packet.starts_with(b"qfThreadInfo") || packet.starts_with(b"qsThreadInfo") => {
                Some(self.thread_info_response(packet, target))
            }
            _ => Some(Vec::new()),
        }
    }

    fn current_thread(&self, target: &dyn GdbTarget) -> Tid {
        target
            .list_threads()
            .into_iter()
            .next()
            .expect("at least one thread must exist")
    }

    fn resume_all(&self, target: &mut dyn GdbTarget) {
        self.halt_flag.store(false, Ordering::SeqCst);
        self.memory_break.store(false, Ordering::SeqCst);
        target.resume();
    }

    fn handle_vcont(&self, body: &[u8], target: &mut dyn GdbTarget) {
        let body = String::from_utf8_lossy(body);
        if let Some(tid_hex) = body.strip_prefix("s:") {
            if let Ok(tid) = usize::from_str_radix(tid_hex.trim(), 16) {
                if let Some(tid) = std::num::NonZeroUsize::new(tid) {
                    self.set_thread_step_flag(tid);
                }
            }
        } else {
            // "vCont;c" (continue): this packet consumes any outstanding
            // stop, so the step flag that produced it must not linger.
            let thread = self.current_thread(target);
            self.clear_thread_step_flag(thread);
        }
        self.resume_all(target);
    }

    fn handle_set_break(&self, packet: &[u8]) -> Option<Vec<u8>> {
        let (kind, addr) = parse_break_packet(&packet[1..])?;
        let mut table = self.breakpoints.lock().unwrap();
        match table.insert(addr, kind) {
            Ok(()) => Some(b"OK".to_vec()),
            Err(e) => {
                debug!("gdbstub: {e}");
                Some(b"E01".to_vec())
            }
        }
    }

    fn handle_clear_break(&self, packet: &[u8]) -> Option<Vec<u8>> {
        let (kind, addr) = parse_break_packet(&packet[1..])?;
        self.breakpoints.lock().unwrap().remove(addr, kind);
        Some(b"OK".to_vec())
    }

    fn xfer_libraries_response(&self) -> Vec<u8> {
        let modules = self.modules.lock().unwrap();
        let mut xml = String::from("l<library-list>");
        for m in modules.iter() {
            xml.push_str(&format!(
                "<library name=\"{}\"><segment address=\"0x{:x}\"/></library>",
                m.name, m.beg
            ));
            debug_assert!(m.end >= m.beg);
        }
        xml.push_str("</library-list>");
        xml.into_bytes()
    }

    fn thread_info_response(&self, packet: &[u8], target: &dyn GdbTarget) -> Vec<u8> {
        if packet.starts_with(b"qsThreadInfo") {
            return b"l".to_vec();
        }
        let ids: Vec<String> = target
            .list_threads()
            .into_iter()
            .map(|t| format!("{:x}", t.get()))
            .collect();
        format!("m{}", ids.join(",")).into_bytes()
    }
}

fn parse_break_packet(body: &[u8]) -> Option<(BreakpointKind, u64)> {
    let body = std::str::from_utf8(body).ok()?;
    let mut parts = body.splitn(3, ',');
    let kind_s = parts.next()?;
    let addr_s = parts.next()?;
    let kind = match kind_s {
        "0" => BreakpointKind::Execute,
        "2" => BreakpointKind::Write,
        "3" => BreakpointKind::Read,
        "4" => BreakpointKind::Access,
        _ => return None,
    };
    let addr = u64::from_str_radix(addr_s, 16).ok()?;
    Some((kind, addr))
}

fn hex_encode(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() * 2);
    for b in data {
        s.push_str(&format!("{b:02x}"));
    }
    s
}

fn hex_decode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 2);
    let mut iter = data.iter();
    while let (Some(&hi), Some(&lo)) = (iter.next(), iter.next()) {
        let hi = (hi as char).to_digit(16).unwrap_or(0) as u8;
        let lo = (lo as char).to_digit(16).unwrap_or(0) as u8;
        out.push((hi << 4) | lo);
    }
    out
}

/// Read one `$...#cc`-framed packet if fully available, without blocking
/// beyond the bytes gdbstub's `peek` already told the caller are present.
fn read_packet<C: ConnectionExt>(conn: &mut C) -> Result<Option<Vec<u8>>, C::Error> {
    let mut byte = conn.read()?;
    while byte != b'$' {
        if byte == 0x03 {
            return Ok(Some(vec![0x03]));
        }
        byte = conn.read()?;
    }

    let mut body = Vec::new();
    loop {
        let b = conn.read()?;
        if b == b'#' {
            break;
        }
        body.push(b);
    }
    let _checksum_hi = conn.read()?;
    let _checksum_lo = conn.read()?;
    conn.write_all(b"+")?;
    conn.flush()?;
    Ok(Some(body))
}

fn write_packet<C: Connection>(conn: &mut C, body: &[u8]) -> Result<(), C::Error> {
    let checksum = body.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    conn.write(b'$')?;
    conn.write_all(body)?;
    conn.write(b'#')?;
    conn.write_all(format!("{checksum:02x}").as_bytes())?;
    conn.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeTarget {
        threads: Vec<Tid>,
    }

    impl GdbTarget for FakeTarget {
        fn read_registers(&mut self, _thread: Tid, _out: &mut [u8]) {}
        fn write_registers(&mut self, _thread: Tid, _data: &[u8]) {}
        fn read_register(&mut self, _thread: Tid, _reg: u32) -> u64 {
            0
        }
        fn write_register(&mut self, _thread: Tid, _reg: u32, _value: u64) {}
        fn read_memory(&mut self, _addr: u64, _out: &mut [u8]) -> bool {
            true
        }
        fn write_memory(&mut self, _addr: u64, _data: &[u8]) -> bool {
            true
        }
        fn list_threads(&self) -> Vec<Tid> {
            self.threads.clone()
        }
        fn resume(&mut self) {}
    }

    #[test]
    fn continue_packet_clears_outstanding_step_flag() {
        let gdb = GdbServer::new(Config::default());
        let tid = Tid::new(1).unwrap();
        let mut target = FakeTarget { threads: vec![tid] };

        gdb.set_thread_step_flag(tid);
        assert!(gdb.get_thread_step_flag(tid));

        gdb.handle_command(b"c", &mut target);
        assert!(!gdb.get_thread_step_flag(tid));
    }

    #[test]
    fn vcont_continue_clears_outstanding_step_flag() {
        let gdb = GdbServer::new(Config::default());
        let tid = Tid::new(1).unwrap();
        let mut target = FakeTarget { threads: vec![tid] };

        gdb.set_thread_step_flag(tid);
        gdb.handle_command(b"vCont;c", &mut target);
        assert!(!gdb.get_thread_step_flag(tid));
    }

    #[test]
    fn step_packet_does_not_clear_the_flag_it_just_set() {
        let gdb = GdbServer::new(Config::default());
        let tid = Tid::new(1).unwrap();
        let mut target = FakeTarget { threads: vec![tid] };

        gdb.handle_command(b"s", &mut target);
        assert!(gdb.get_thread_step_flag(tid));
    }

    #[test]
    fn break_sets_halt_and_memory_break_read_and_clear() {
        let gdb = GdbServer::new(Config::default());
        assert!(!gdb.get_cpu_halt_flag());
        gdb.break_(true);
        assert!(gdb.get_cpu_halt_flag());
        assert!(gdb.is_memory_break());
        // read-and-clear
        assert!(!gdb.is_memory_break());
    }

    #[test]
    fn step_flag_round_trips() {
        let gdb = GdbServer::new(Config::default());
        let tid = Tid::new(1).unwrap();
        assert!(!gdb.get_thread_step_flag(tid));
        gdb.set_thread_step_flag(tid);
        assert!(gdb.get_thread_step_flag(tid));
        gdb.clear_thread_step_flag(tid);
        assert!(!gdb.get_thread_step_flag(tid));
    }

    #[test]
    fn breakpoint_lookup_delegates_to_table() {
        let gdb = GdbServer::new(Config::default());
        gdb.breakpoints
            .lock()
            .unwrap()
            .insert(0x1000, BreakpointKind::Execute)
            .unwrap();
        assert!(gdb.check_breakpoint(0x1000, BreakpointKind::Execute));
        assert_eq!(
            gdb.get_next_breakpoint_from_address(0x0, BreakpointKind::Execute),
            Breakpoint {
                addr: 0x1000,
                kind: Some(BreakpointKind::Execute)
            }
        );
    }

    #[test]
    fn parse_break_packet_decodes_kind_and_address() {
        let (kind, addr) = parse_break_packet(b"0,1000,1").unwrap();
        assert_eq!(kind, BreakpointKind::Execute);
        assert_eq!(addr, 0x1000);
    }

    #[test]
    fn hex_round_trip() {
        let data = [0xde, 0xad, 0xbe, 0xef];
        assert_eq!(hex_decode(hex_encode(&data).as_bytes()), data);
    }
}
