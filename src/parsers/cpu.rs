//! Mean CPU usage extraction from sampler logs.
//!
//! Two capture tools were used depending on how the UPF is deployed: a
//! ps-based sampler writing `timestamp cpu mem` rows, and docker stats
//! writing free-form lines with a `NN.N%` field. Both scenario trees use
//! the same `cpu/` layout, so the format is sniffed from content rather
//! than inferred from the path.

use regex::Regex;
use std::sync::LazyLock;

static PERCENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s*%").unwrap());

/// Extract the mean CPU percentage across the sampling window, or `None`
/// when the log matches neither known format.
///
/// The tabular format is tried first and, when at least one row
/// qualifies, its result is final; a stray `%` in an unrelated line must
/// not flip a ps capture into the docker-stats branch.
pub fn extract(text: &str) -> Option<f64> {
    let tabular = tabular_samples(text);
    if !tabular.is_empty() {
        return Some(mean(&tabular));
    }

    let annotated: Vec<f64> = text
        .lines()
        .filter_map(|line| PERCENT.captures(line))
        .filter_map(|c| c[1].parse().ok())
        .collect();
    if annotated.is_empty() {
        return None;
    }
    Some(mean(&annotated))
}

/// A row qualifies as tabular only when it splits into exactly three
/// whitespace fields and the first is all digits (a timestamp). Rows
/// whose CPU field fails to parse are skipped, not fatal.
fn tabular_samples(text: &str) -> Vec<f64> {
    let mut samples = Vec::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 || !fields[0].bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        if let Ok(v) = fields[1].parse::<f64>() {
            samples.push(v);
        }
    }
    samples
}

fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}
