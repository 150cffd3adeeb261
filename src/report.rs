//! Chart inventory: which record slices become which PNG files.
//!
//! Throughput, loss and CPU get one chart per scenario and direction;
//! RTT and jitter get one chart per scenario across payload sizes.
//! Slices with no records are skipped by the renderer.

use crate::chart::{self, ChartSpec, SeriesPoint};
use crate::collect::RecordTables;
use crate::config::{Direction, Scenario};
use std::path::Path;

/// Render every chart the record tables support into `out_dir`.
pub fn render_all(tables: &RecordTables, out_dir: &Path) -> Result<(), String> {
    for scenario in Scenario::ALL {
        for direction in Direction::ALL {
            throughput_charts(tables, scenario, direction, out_dir)?;
        }
        latency_charts(tables, scenario, out_dir)?;
        for direction in Direction::ALL {
            cpu_chart(tables, scenario, direction, out_dir)?;
        }
    }
    Ok(())
}

fn render(
    rows: &[SeriesPoint],
    spec: &ChartSpec<'_>,
    out_dir: &Path,
    file_name: &str,
) -> Result<(), String> {
    let out = out_dir.join(file_name);
    chart::plot_lines(rows, spec, &out)
        .map(|_| ())
        .map_err(|e| format!("Failed to render {file_name}: {e}"))
}

fn throughput_charts(
    tables: &RecordTables,
    scenario: Scenario,
    direction: Direction,
    out_dir: &Path,
) -> Result<(), String> {
    let measured: Vec<SeriesPoint> = tables
        .throughput
        .iter()
        .filter(|r| r.scenario == scenario && r.direction == direction)
        .map(|r| SeriesPoint {
            group: r.upf.clone(),
            x: r.target_mbps as f64,
            y: r.measured_mbps,
        })
        .collect();

    let title = format!(
        "{} - Throughput vs Target ({})",
        scenario.label(),
        direction.label()
    );
    render(
        &measured,
        &ChartSpec {
            title: &title,
            x_label: "Offered load (Mbps)",
            y_label: "Measured throughput (Mbits/s)",
        },
        out_dir,
        &format!("throughput_{}_{}.png", direction.token(), scenario.token()),
    )?;

    // Loss records are a subset: cells whose log never reported loss
    // contribute no point.
    let loss: Vec<SeriesPoint> = tables
        .throughput
        .iter()
        .filter(|r| r.scenario == scenario && r.direction == direction)
        .filter_map(|r| {
            r.loss_percent.map(|loss| SeriesPoint {
                group: r.upf.clone(),
                x: r.target_mbps as f64,
                y: loss,
            })
        })
        .collect();

    let title = format!(
        "{} - UDP Loss vs Target ({})",
        scenario.label(),
        direction.label()
    );
    render(
        &loss,
        &ChartSpec {
            title: &title,
            x_label: "Offered load (Mbps)",
            y_label: "Loss (%)",
        },
        out_dir,
        &format!("loss_{}_{}.png", direction.token(), scenario.token()),
    )
}

fn latency_charts(
    tables: &RecordTables,
    scenario: Scenario,
    out_dir: &Path,
) -> Result<(), String> {
    let rtt: Vec<SeriesPoint> = tables
        .latency
        .iter()
        .filter(|r| r.scenario == scenario)
        .map(|r| SeriesPoint {
            group: r.upf.clone(),
            x: r.size_bytes as f64,
            y: r.avg_rtt_ms,
        })
        .collect();

    let title = format!("{} - RTT vs Packet size (UE to DN)", scenario.label());
    render(
        &rtt,
        &ChartSpec {
            title: &title,
            x_label: "ICMP payload size (bytes)",
            y_label: "RTT avg (ms)",
        },
        out_dir,
        &format!("rtt_vs_size_{}.png", scenario.token()),
    )?;

    let jitter: Vec<SeriesPoint> = tables
        .latency
        .iter()
        .filter(|r| r.scenario == scenario)
        .map(|r| SeriesPoint {
            group: r.upf.clone(),
            x: r.size_bytes as f64,
            y: r.jitter_ms,
        })
        .collect();

    let title = format!("{} - Jitter vs Packet size (UE to DN)", scenario.label());
    render(
        &jitter,
        &ChartSpec {
            title: &title,
            x_label: "ICMP payload size (bytes)",
            y_label: "Jitter (ms)",
        },
        out_dir,
        &format!("jitter_vs_size_{}.png", scenario.token()),
    )
}

fn cpu_chart(
    tables: &RecordTables,
    scenario: Scenario,
    direction: Direction,
    out_dir: &Path,
) -> Result<(), String> {
    let rows: Vec<SeriesPoint> = tables
        .cpu
        .iter()
        .filter(|r| r.scenario == scenario && r.direction == direction)
        .map(|r| SeriesPoint {
            group: r.upf.clone(),
            x: r.target_mbps as f64,
            y: r.cpu_percent,
        })
        .collect();

    let title = format!("{} - CPU vs Target ({})", scenario.label(), direction.label());
    render(
        &rows,
        &ChartSpec {
            title: &title,
            x_label: "Offered load (Mbps)",
            y_label: "CPU (%)",
        },
        out_dir,
        &format!("cpu_{}_{}.png", direction.token(), scenario.token()),
    )
}
