use crate::config::{Direction, Scenario};
use serde::Serialize;

/// One measured iperf UDP cell. `loss_percent` is `None` when the log
/// reported bandwidth but no loss line at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThroughputRecord {
    pub scenario: Scenario,
    pub upf: String,
    pub direction: Direction,
    pub target_mbps: u32,
    pub measured_mbps: f64,
    pub loss_percent: Option<f64>,
}

/// One measured ping cell (UE → DN, per ICMP payload size).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencyRecord {
    pub scenario: Scenario,
    pub upf: String,
    pub size_bytes: u32,
    pub avg_rtt_ms: f64,
    pub jitter_ms: f64,
}

/// Mean CPU usage of the UPF while driving one UDP cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuRecord {
    pub scenario: Scenario,
    pub upf: String,
    pub direction: Direction,
    pub target_mbps: u32,
    pub cpu_percent: f64,
}
