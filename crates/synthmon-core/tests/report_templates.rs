//! Report template vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use synthmon_core::report;

#[test]
fn memory_usage_template() {
    assert_eq!(
        report::memory_usage(1, 2, 3),
        "Free Memory: 1\nUsed Memory: 2\nCached Memory: 3"
    );
}

#[test]
fn active_inactive_pages_template() {
    assert_eq!(
        report::active_inactive_pages(42, 7),
        "Active Pages: 42\nInactive Pages: 7"
    );
}

#[test]
fn swap_info_template() {
    assert_eq!(
        report::swap_info(100, 60, 40),
        "Total Swap: 100\nUsed Swap: 60\nFree Swap: 40"
    );
}

#[test]
fn page_faults_template() {
    assert_eq!(
        report::page_faults(9999999, 0),
        "Minor Page Faults: 9999999\nMajor Page Faults: 0"
    );
}

#[test]
fn top_processes_is_fixed() {
    let expected = "Top 5 Memory Consuming Processes:\n\
                    PID: 3760, Memory: 3760, Command: firefox-bin\n\
                    PID: 4328, Memory: 1321, Command: fwupd\n\
                    PID: 1215, Memory: 12312, Command: Xorg\n\
                    PID: 3836, Memory: 3242, Command: Privileged Cont\n\
                    PID: 3994, Memory: 141412, Command: Isolated Web Co\n";
    assert_eq!(report::top_processes(), expected);
    // table is static; repeated renders are identical
    assert_eq!(report::top_processes(), report::top_processes());
}
