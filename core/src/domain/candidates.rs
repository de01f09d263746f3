//! Candidate port sequences.

/// Iterator over the ports examined by a scan.
///
/// Yields `start`, `start + 1`, ... for at most `attempts` items, stopping
/// early instead of wrapping past 65535.
#[derive(Debug, Clone)]
pub struct Candidates {
    next: Option<u16>,
    remaining: u32,
}

impl Candidates {
    /// Create the candidate sequence for a scan.
    pub fn new(start: u16, attempts: u32) -> Self {
        Self {
            next: Some(start),
            remaining: attempts,
        }
    }
}

impl Iterator for Candidates {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.remaining == 0 {
            return None;
        }
        let port = self.next?;
        self.remaining -= 1;
        self.next = port.checked_add(1);
        Some(port)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let by_range = self
            .next
            .map(|p| (u16::MAX - p) as usize + 1)
            .unwrap_or(0);
        let n = by_range.min(self.remaining as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Candidates {}

/// Build the URL the web UI is reachable at.
pub fn web_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}
