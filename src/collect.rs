//! Sweep the results tree and build the three record tables.
//!
//! The measurement space is fixed: scenario × UPF × direction × rate for
//! iperf and CPU cells, scenario × UPF × payload size for ping cells.
//! Parsers only fill in per-cell numbers; a missing file or a log with
//! no parseable primary metric drops the cell and nothing else.

use crate::config::{self, Direction, Scenario};
use crate::parsers;
use crate::records::{CpuRecord, LatencyRecord, ThroughputRecord};
use std::path::Path;

/// The three flat tables one full sweep produces.
#[derive(Debug, Default)]
pub struct RecordTables {
    pub throughput: Vec<ThroughputRecord>,
    pub latency: Vec<LatencyRecord>,
    pub cpu: Vec<CpuRecord>,
}

/// Walk every cell of the measurement space under `results_dir` and
/// accumulate whatever parses. Never fails: absent or unparseable cells
/// are skipped.
pub fn collect(results_dir: &Path) -> RecordTables {
    let mut tables = RecordTables::default();

    for scenario in Scenario::ALL {
        for upf in config::UPFS {
            collect_throughput(results_dir, scenario, upf, &mut tables.throughput);
            collect_latency(results_dir, scenario, upf, &mut tables.latency);
            collect_cpu(results_dir, scenario, upf, &mut tables.cpu);
        }
    }

    tables
}

fn collect_throughput(
    root: &Path,
    scenario: Scenario,
    upf: &str,
    out: &mut Vec<ThroughputRecord>,
) {
    for direction in Direction::ALL {
        for rate in config::RATES_MBPS {
            let path = config::udp_log(root, upf, scenario, direction, rate);
            let Some(text) = parsers::read_log(&path) else {
                continue;
            };
            let (bandwidth, loss) = parsers::iperf::extract(&text);
            let Some(measured_mbps) = bandwidth else {
                tracing::debug!(path = %path.display(), "no bandwidth in log, dropping cell");
                continue;
            };
            out.push(ThroughputRecord {
                scenario,
                upf: upf.to_uppercase(),
                direction,
                target_mbps: rate,
                measured_mbps,
                loss_percent: loss,
            });
        }
    }
}

fn collect_latency(root: &Path, scenario: Scenario, upf: &str, out: &mut Vec<LatencyRecord>) {
    for size in config::PING_SIZES {
        let path = config::ping_log(root, upf, scenario, size);
        let Some(text) = parsers::read_log(&path) else {
            continue;
        };
        let Some((avg_rtt_ms, jitter_ms)) = parsers::ping::extract(&text) else {
            tracing::debug!(path = %path.display(), "no RTT data in log, dropping cell");
            continue;
        };
        out.push(LatencyRecord {
            scenario,
            upf: upf.to_uppercase(),
            size_bytes: size,
            avg_rtt_ms,
            jitter_ms,
        });
    }
}

fn collect_cpu(root: &Path, scenario: Scenario, upf: &str, out: &mut Vec<CpuRecord>) {
    for direction in Direction::ALL {
        for rate in config::RATES_MBPS {
            let path = config::cpu_log(root, upf, scenario, direction, rate);
            let Some(text) = parsers::read_log(&path) else {
                continue;
            };
            let Some(cpu_percent) = parsers::cpu::extract(&text) else {
                tracing::debug!(path = %path.display(), "no CPU samples in log, dropping cell");
                continue;
            };
            out.push(CpuRecord {
                scenario,
                upf: upf.to_uppercase(),
                direction,
                target_mbps: rate,
                cpu_percent,
            });
        }
    }
}
