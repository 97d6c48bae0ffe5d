//! Plain-text report rendering.
//!
//! The templates are byte-exact contracts: frontend test harnesses parse
//! these bodies with literal prefixes, so formatting must not drift.

use std::fmt::Write;

/// One row of the fixed top-processes table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub memory: u64,
    pub command: &'static str,
}

/// Static table served by `/top-memory-processes`. Not derived from any
/// stream; the rows mimic a plausible desktop session and never change.
pub const TOP_PROCESSES: [ProcessEntry; 5] = [
    ProcessEntry { pid: 3760, memory: 3760, command: "firefox-bin" },
    ProcessEntry { pid: 4328, memory: 1321, command: "fwupd" },
    ProcessEntry { pid: 1215, memory: 12312, command: "Xorg" },
    ProcessEntry { pid: 3836, memory: 3242, command: "Privileged Cont" },
    ProcessEntry { pid: 3994, memory: 141412, command: "Isolated Web Co" },
];

pub fn memory_usage(free: u64, used: u64, cached: u64) -> String {
    format!("Free Memory: {free}\nUsed Memory: {used}\nCached Memory: {cached}")
}

pub fn active_inactive_pages(active: u64, inactive: u64) -> String {
    format!("Active Pages: {active}\nInactive Pages: {inactive}")
}

pub fn swap_info(total: u64, used: u64, free: u64) -> String {
    format!("Total Swap: {total}\nUsed Swap: {used}\nFree Swap: {free}")
}

pub fn page_faults(minor: u64, major: u64) -> String {
    format!("Minor Page Faults: {minor}\nMajor Page Faults: {major}")
}

/// Render the fixed top-processes table, one trailing newline per row.
pub fn top_processes() -> String {
    let mut out = String::from("Top 5 Memory Consuming Processes:\n");
    for p in &TOP_PROCESSES {
        let _ = writeln!(out, "PID: {}, Memory: {}, Command: {}", p.pid, p.memory, p.command);
    }
    out
}
