use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub value: String,
    pub line: String,
}

impl MatchRecord {
    pub fn new(value: impl Into<String>, line: &str) -> Self {
        Self {
            value: value.into(),
            line: line.trim().to_string(),
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FOUND] {}: {}", self.value, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_trimmed() {
        let record = MatchRecord::new("5", "   <h1>Jobs applied by Jerry</h1>\r");
        assert_eq!(record.line, "<h1>Jobs applied by Jerry</h1>");
    }

    #[test]
    fn test_display_format() {
        let record = MatchRecord::new("7", "<p>applied by John</p>");
        assert_eq!(record.to_string(), "[FOUND] 7: <p>applied by John</p>");
    }
}
