//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary. Used to keep log lines short.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_queries() {
        assert_eq!(truncate_str("weather in Bangalore", 7), "weather");
    }

    #[test]
    fn short_input_is_unchanged() {
        assert_eq!(truncate_str("Paris", 100), "Paris");
    }

    #[test]
    fn respects_multibyte_boundaries() {
        // 'é' is 2 bytes; cutting mid-character must back up
        let s = "Mégève";
        assert_eq!(truncate_str(s, 2), "M");
        assert_eq!(truncate_str(s, 3), "Mé");
    }
}
