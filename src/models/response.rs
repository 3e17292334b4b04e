/// A fully read response; lives for a single iteration of the run.
#[derive(Debug, Clone)]
pub struct ResponseOutcome {
    pub status: u16,
    pub size: usize,
    pub body: String,
}

impl ResponseOutcome {
    pub fn new(status: u16, bytes: &[u8]) -> Self {
        Self {
            status,
            size: bytes.len(),
            body: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_counts_bytes_not_chars() {
        let outcome = ResponseOutcome::new(200, "héllo".as_bytes());
        assert_eq!(outcome.size, 6);
        assert_eq!(outcome.body, "héllo");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let outcome = ResponseOutcome::new(200, &[b'o', b'k', 0xff]);
        assert_eq!(outcome.size, 3);
        assert!(outcome.body.starts_with("ok"));
    }
}
