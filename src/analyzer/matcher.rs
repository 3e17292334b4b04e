use crate::models::MatchRecord;

/// Substring search over the lines of a response body.
pub struct BodyMatcher<'a> {
    needle: &'a str,
}

impl<'a> BodyMatcher<'a> {
    pub fn new(needle: &'a str) -> Self {
        Self { needle }
    }

    /// Yields matches lazily so a caller can stop at the first one.
    pub fn scan<'b>(
        &'b self,
        value: &'b str,
        body: &'b str,
    ) -> impl Iterator<Item = MatchRecord> + 'b {
        body.split('\n')
            .filter(move |line| line.contains(self.needle))
            .map(move |line| MatchRecord::new(value, line))
    }
}
