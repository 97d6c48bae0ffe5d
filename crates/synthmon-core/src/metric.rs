//! Metric stream catalog.
//!
//! Every endpoint is fed by one or more of these streams. Each stream is
//! produced by exactly one background task and consumed by exactly one
//! handler.

/// Exclusive upper bound for every synthetic sample.
pub const VALUE_BOUND: u64 = 10_000_000;

/// One named synthetic measurement, produced independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricId {
    FreeMemory,
    UsedMemory,
    CachedMemory,
    ActivePages,
    InactivePages,
    TotalSwap,
    UsedSwap,
    FreeSwap,
    MinorFaults,
    MajorFaults,
    /// Feeds `/top-memory-processes`; the sample paces the endpoint but is
    /// never rendered.
    ProcSample,
}

impl MetricId {
    /// Every stream the server generates, in wiring order.
    pub const ALL: [MetricId; 11] = [
        MetricId::FreeMemory,
        MetricId::UsedMemory,
        MetricId::CachedMemory,
        MetricId::ActivePages,
        MetricId::InactivePages,
        MetricId::TotalSwap,
        MetricId::UsedSwap,
        MetricId::FreeSwap,
        MetricId::MinorFaults,
        MetricId::MajorFaults,
        MetricId::ProcSample,
    ];

    /// Stable name used in log fields and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricId::FreeMemory => "free_memory",
            MetricId::UsedMemory => "used_memory",
            MetricId::CachedMemory => "cached_memory",
            MetricId::ActivePages => "active_pages",
            MetricId::InactivePages => "inactive_pages",
            MetricId::TotalSwap => "total_swap",
            MetricId::UsedSwap => "used_swap",
            MetricId::FreeSwap => "free_swap",
            MetricId::MinorFaults => "minor_faults",
            MetricId::MajorFaults => "major_faults",
            MetricId::ProcSample => "proc_sample",
        }
    }
}
