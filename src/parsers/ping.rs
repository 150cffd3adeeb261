//! RTT and jitter extraction from ping logs.
//!
//! A completed run ends with the `rtt min/avg/max/mdev = ...` summary,
//! which is authoritative. Interrupted runs only have the per-packet
//! `time=X ms` lines, in which case the statistics are recomputed from
//! the samples.

use regex::Regex;
use std::sync::LazyLock;

static SUMMARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rtt min/avg/max/mdev = [\d.]+/([\d.]+)/[\d.]+/([\d.]+)").unwrap()
});

// `time<1 ms` appears on some platforms for sub-millisecond replies.
static SAMPLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"time[=<]([\d.]+)\s*ms").unwrap());

/// Extract `(avg_rtt_ms, jitter_ms)` from a ping log, or `None` when the
/// log carries neither a summary line nor per-packet samples.
///
/// Jitter from per-packet samples is the population standard deviation
/// (divide by N), matching what ping's own mdev reports.
pub fn extract(text: &str) -> Option<(f64, f64)> {
    if let Some(c) = SUMMARY.captures(text) {
        let avg = c[1].parse().ok()?;
        let mdev = c[2].parse().ok()?;
        return Some((avg, mdev));
    }

    let samples: Vec<f64> = SAMPLE
        .captures_iter(text)
        .filter_map(|c| c[1].parse().ok())
        .collect();
    if samples.is_empty() {
        return None;
    }

    let n = samples.len() as f64;
    let avg = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|x| (x - avg) * (x - avg)).sum::<f64>() / n;
    Some((avg, var.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_is_authoritative() {
        let log = "\
64 bytes from 10.45.0.1: icmp_seq=1 ttl=64 time=9.9 ms
64 bytes from 10.45.0.1: icmp_seq=2 ttl=64 time=9.9 ms

--- 10.45.0.1 ping statistics ---
2 packets transmitted, 2 received, 0% packet loss, time 1001ms
rtt min/avg/max/mdev = 1.0/2.5/4.0/0.5 ms
";
        assert_eq!(extract(log), Some((2.5, 0.5)));
    }

    #[test]
    fn per_packet_fallback_uses_population_stddev() {
        let log = "\
64 bytes: icmp_seq=1 time=1.0 ms
64 bytes: icmp_seq=2 time=2.0 ms
64 bytes: icmp_seq=3 time=3.0 ms
";
        let (avg, jitter) = extract(log).unwrap();
        assert_eq!(avg, 2.0);
        // sqrt(((1-2)^2 + (2-2)^2 + (3-2)^2) / 3) = sqrt(2/3)
        assert!((jitter - (2.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn sub_millisecond_time_marker_counts_as_a_sample() {
        let log = "Reply from 10.45.0.1: bytes=64 time<1 ms TTL=64";
        let (avg, jitter) = extract(log).unwrap();
        assert_eq!(avg, 1.0);
        assert_eq!(jitter, 0.0);
    }

    #[test]
    fn single_sample_has_zero_jitter() {
        let (avg, jitter) = extract("time=3.2 ms").unwrap();
        assert_eq!(avg, 3.2);
        assert_eq!(jitter, 0.0);
    }

    #[test]
    fn no_time_unit_glued_to_number_still_matches() {
        // Linux ping prints `time=1.23 ms`; busybox prints `time=1.23ms`.
        let (avg, _) = extract("seq=1 time=1.5ms").unwrap();
        assert_eq!(avg, 1.5);
    }

    #[test]
    fn empty_or_garbled_log_yields_none() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("ping: sendmsg: Network is unreachable"), None);
    }
}
