use std::fmt;
use std::time::Duration;

/// Delay between two automatic steps. Always at least one millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickInterval(u64);

impl TickInterval {
    pub const DEFAULT: TickInterval = TickInterval(500);

    pub fn from_millis(millis: u64) -> Option<Self> {
        (millis > 0).then_some(TickInterval(millis))
    }

    /// Reads a user-supplied millisecond value, `None` unless it is a positive integer.
    pub fn parse(input: &str) -> Option<Self> {
        input
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(TickInterval::from_millis)
    }

    /// Like [`TickInterval::parse`], but falls back to [`TickInterval::DEFAULT`]
    /// so the timer never spins.
    pub fn parse_or_default(input: &str) -> Self {
        TickInterval::parse(input).unwrap_or_default()
    }

    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        TickInterval::DEFAULT
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_number() {
        assert_eq!(TickInterval::parse_or_default("250").millis(), 250);
        assert_eq!(TickInterval::parse_or_default("  75 ").millis(), 75);
    }

    #[test]
    fn falls_back_on_missing_or_garbage() {
        for input in ["", "   ", "fast", "12.5", "-40", "0", "250ms"] {
            assert_eq!(
                TickInterval::parse_or_default(input),
                TickInterval::DEFAULT,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn parse_accepts_any_spelling_of_a_positive_integer() {
        assert_eq!(TickInterval::parse("+250").map(TickInterval::millis), Some(250));
        assert_eq!(TickInterval::parse("0250").map(TickInterval::millis), Some(250));
        assert_eq!(TickInterval::parse("0"), None);
        assert_eq!(TickInterval::parse(""), None);
    }

    #[test]
    fn zero_is_not_an_interval() {
        assert_eq!(TickInterval::from_millis(0), None);
        assert_eq!(
            TickInterval::from_millis(1).map(TickInterval::as_duration),
            Some(Duration::from_millis(1))
        );
    }

    #[test]
    fn displays_with_unit() {
        assert_eq!(TickInterval::DEFAULT.to_string(), "500 ms");
    }
}
