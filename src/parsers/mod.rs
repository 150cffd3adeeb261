pub mod cpu;
pub mod iperf;
pub mod ping;

use std::path::Path;

/// Read a log file for extraction.
///
/// Decoding is best-effort: invalid UTF-8 sequences are replaced, never
/// surfaced as an error. A missing or unreadable file returns `None`;
/// absent cells are normal in a partially-collected results tree.
pub fn read_log(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "log not readable, skipping cell");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_log(&dir.path().join("absent.txt")).is_none());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbled.txt");
        std::fs::write(&path, b"100 Mbits/sec\xff\xfe tail").unwrap();
        let text = read_log(&path).unwrap();
        assert!(text.contains("100 Mbits/sec"));
        assert!(text.contains("tail"));
    }
}
