//! Optional CSV dump of the three record tables.

use crate::collect::RecordTables;
use serde::Serialize;
use std::path::Path;

/// Write `throughput.csv`, `latency.csv` and `cpu.csv` into `out_dir`.
pub fn write_csv(tables: &RecordTables, out_dir: &Path) -> Result<(), String> {
    write_table(&tables.throughput, &out_dir.join("throughput.csv"))?;
    write_table(&tables.latency, &out_dir.join("latency.csv"))?;
    write_table(&tables.cpu, &out_dir.join("cpu.csv"))
}

fn write_table<T: Serialize>(rows: &[T], path: &Path) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    println!("Saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, Scenario};
    use crate::records::ThroughputRecord;
    use tempfile::TempDir;

    #[test]
    fn throughput_rows_round_trip_as_labelled_csv() {
        let dir = TempDir::new().unwrap();
        let tables = RecordTables {
            throughput: vec![ThroughputRecord {
                scenario: Scenario::Baseline,
                upf: "SPGWU".to_string(),
                direction: Direction::Uplink,
                target_mbps: 100,
                measured_mbps: 99.4,
                loss_percent: Some(5.2),
            }],
            ..Default::default()
        };
        write_csv(&tables, dir.path()).unwrap();

        let text = std::fs::read_to_string(dir.path().join("throughput.csv")).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "scenario,upf,direction,target_mbps,measured_mbps,loss_percent"
        );
        assert_eq!(lines.next().unwrap(), "BASELINE,SPGWU,UL,100,99.4,5.2");
    }

    #[test]
    fn absent_loss_is_an_empty_field() {
        let dir = TempDir::new().unwrap();
        let tables = RecordTables {
            throughput: vec![ThroughputRecord {
                scenario: Scenario::Optimise,
                upf: "DPDK".to_string(),
                direction: Direction::Downlink,
                target_mbps: 500,
                measured_mbps: 480.0,
                loss_percent: None,
            }],
            ..Default::default()
        };
        write_csv(&tables, dir.path()).unwrap();

        let text = std::fs::read_to_string(dir.path().join("throughput.csv")).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with("480.0,"));
    }

    #[test]
    fn empty_tables_still_produce_files() {
        let dir = TempDir::new().unwrap();
        write_csv(&RecordTables::default(), dir.path()).unwrap();
        assert!(dir.path().join("throughput.csv").exists());
        assert!(dir.path().join("latency.csv").exists());
        assert!(dir.path().join("cpu.csv").exists());
    }
}
