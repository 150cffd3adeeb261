use serde::Serialize;
use std::path::{Path, PathBuf};

/// UPF implementations under comparison. Directory names in the results
/// tree; upper-cased for display.
pub const UPFS: [&str; 3] = ["spgwu", "ebpf_xdp", "dpdk"];

/// Offered UDP rates in Mbps.
pub const RATES_MBPS: [u32; 5] = [10, 50, 100, 200, 500];

/// ICMP payload sizes in bytes for the ping sweep.
pub const PING_SIZES: [u32; 6] = [64, 128, 256, 512, 1024, 1380];

/// Test scenario: every UPF was measured in its stock configuration and
/// again with tuning applied. The baseline logs live directly under the
/// UPF directory; the optimised run adds an `optimise/` path component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scenario {
    #[serde(rename = "BASELINE")]
    Baseline,
    #[serde(rename = "OPTIMISE")]
    Optimise,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Baseline, Scenario::Optimise];

    /// Extra path component under the UPF directory, if any.
    pub fn subdir(self) -> Option<&'static str> {
        match self {
            Scenario::Baseline => None,
            Scenario::Optimise => Some("optimise"),
        }
    }

    /// Display label used in chart titles and CSV output.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::Baseline => "BASELINE",
            Scenario::Optimise => "OPTIMISE",
        }
    }

    /// Lowercase form used in output filenames.
    pub fn token(self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::Optimise => "optimise",
        }
    }
}

/// Traffic direction relative to the UE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[serde(rename = "UL")]
    Uplink,
    #[serde(rename = "DL")]
    Downlink,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Uplink, Direction::Downlink];

    /// Short form used in log filenames and chart filenames.
    pub fn token(self) -> &'static str {
        match self {
            Direction::Uplink => "ul",
            Direction::Downlink => "dl",
        }
    }

    /// Display label used in chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Uplink => "UL",
            Direction::Downlink => "DL",
        }
    }
}

fn scenario_dir(root: &Path, upf: &str, scenario: Scenario) -> PathBuf {
    let dir = root.join(upf);
    match scenario.subdir() {
        Some(sub) => dir.join(sub),
        None => dir,
    }
}

/// Path of an iperf UDP log: `{upf}[/optimise]/udp/{dir}_{rate}m.txt`.
pub fn udp_log(
    root: &Path,
    upf: &str,
    scenario: Scenario,
    direction: Direction,
    rate: u32,
) -> PathBuf {
    scenario_dir(root, upf, scenario)
        .join("udp")
        .join(format!("{}_{}m.txt", direction.token(), rate))
}

/// Path of a ping log: `{upf}[/optimise]/ping/ping_ue_dn_{size}.txt`.
pub fn ping_log(root: &Path, upf: &str, scenario: Scenario, size: u32) -> PathBuf {
    scenario_dir(root, upf, scenario)
        .join("ping")
        .join(format!("ping_ue_dn_{size}.txt"))
}

/// Path of a CPU sampler log: `{upf}[/optimise]/cpu/{dir}_{rate}.txt`.
pub fn cpu_log(
    root: &Path,
    upf: &str,
    scenario: Scenario,
    direction: Direction,
    rate: u32,
) -> PathBuf {
    scenario_dir(root, upf, scenario)
        .join("cpu")
        .join(format!("{}_{}.txt", direction.token(), rate))
}
