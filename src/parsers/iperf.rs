//! Bandwidth and loss extraction from iperf UDP logs.
//!
//! iperf output differs across versions and platforms, but every variant
//! prints per-interval report lines followed by a summary line, each
//! carrying a `<number> Mbits/sec` field. The summary comes last, so the
//! last bandwidth occurrence is the one that counts. Loss shows up as
//! `lost/total (pct%)`; some builds omit the percentage and print only
//! the `lost/total` pair.

use regex::Regex;
use std::sync::LazyLock;

static BANDWIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s+Mbits/sec").unwrap());

static LOSS_WITH_PCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*/\s*(\d+)\s*\(([\d.]+)%\)").unwrap());

static LOSS_PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*/\s*(\d+)").unwrap());

/// Extract `(bandwidth_mbps, loss_percent)` from an iperf log.
///
/// Either field is `None` when its pattern never matches; a truncated or
/// garbled log yields `(None, None)` rather than an error. Callers drop
/// the cell when bandwidth is absent and tolerate absent loss.
pub fn extract(text: &str) -> (Option<f64>, Option<f64>) {
    let bandwidth = BANDWIDTH
        .captures_iter(text)
        .last()
        .and_then(|c| c[1].parse().ok());
    (bandwidth, extract_loss(text))
}

/// Last loss report wins, mirroring the bandwidth rule. An explicit
/// percentage is authoritative; a bare `lost/total` pair falls back to
/// computing the percentage (0 when total is 0).
fn extract_loss(text: &str) -> Option<f64> {
    if let Some(c) = LOSS_WITH_PCT.captures_iter(text).last() {
        return c[3].parse().ok();
    }

    let c = LOSS_PAIR.captures_iter(text).last()?;
    let lost: f64 = c[1].parse().ok()?;
    let total: f64 = c[2].parse().ok()?;
    if total == 0.0 {
        Some(0.0)
    } else {
        Some(lost / total * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_bandwidth_occurrence_wins() {
        let log = "\
[ ID] Interval       Transfer     Bandwidth
[  3]  0.0- 1.0 sec  11.8 MBytes  98.7 Mbits/sec
[  3]  1.0- 2.0 sec  12.0 MBytes  100.5 Mbits/sec
[  3]  0.0-10.0 sec   119 MBytes  99.4 Mbits/sec
";
        let (bw, _) = extract(log);
        assert_eq!(bw, Some(99.4));
    }

    #[test]
    fn explicit_loss_percentage_is_taken_verbatim() {
        let log = "[  3] 0.0-10.0 sec  119 MBytes  99.4 Mbits/sec   5/100 (5.2%)";
        let (bw, loss) = extract(log);
        assert_eq!(bw, Some(99.4));
        assert_eq!(loss, Some(5.2));
    }

    #[test]
    fn bare_lost_total_pair_computes_percentage() {
        let log = "Server Report: 3/50 datagrams lost";
        let (_, loss) = extract(log);
        assert_eq!(loss, Some(6.0));
    }

    #[test]
    fn zero_total_is_zero_loss_not_division_error() {
        let (_, loss) = extract("received 0/0 datagrams");
        assert_eq!(loss, Some(0.0));
    }

    #[test]
    fn last_loss_report_wins() {
        let log = "\
[  3]  0.0- 5.0 sec  2/500 (0.4%)
[  3]  0.0-10.0 sec  7/1000 (0.7%)
";
        let (_, loss) = extract(log);
        assert_eq!(loss, Some(0.7));
    }

    #[test]
    fn integer_bandwidth_parses() {
        let (bw, _) = extract("[  3]  0.0-10.0 sec   500 Mbits/sec");
        assert_eq!(bw, Some(500.0));
    }

    #[test]
    fn garbage_yields_no_fields() {
        assert_eq!(extract("not an iperf log at all"), (None, None));
        assert_eq!(extract(""), (None, None));
    }

    #[test]
    fn bandwidth_without_loss_is_tolerated() {
        let (bw, loss) = extract("TCP window size: ok\n[  3]  42.0 Mbits/sec\n");
        assert_eq!(bw, Some(42.0));
        assert_eq!(loss, None);
    }

    #[test]
    fn gbits_line_is_not_a_bandwidth_match() {
        // Only Mbits/sec is the unit the harness requests; a stray
        // Gbits line must not be misread.
        let (bw, _) = extract("[  3]  1.2 Gbits/sec");
        assert_eq!(bw, None);
    }

    #[test]
    fn malformed_loss_percentage_passes_through_unvalidated() {
        // No clamping: the tool reports what the log says.
        let (_, loss) = extract("999/10 (9990.0%)");
        assert_eq!(loss, Some(9990.0));
    }
}
