//! Log Line Parser
//!
//! Grammar: `<timestamp> -> ... X <int> ... Y <int> ... Z <int> ...`
//! The axis tokens may appear in any order inside the coordinate segment,
//! with arbitrary text (e.g. `;`) between them.

use crate::reading::ParsedLine;
use once_cell::sync::Lazy;
use regex::Regex;

/// Token separating the timestamp segment from the coordinate segment
const SEPARATOR: &str = "->";

static X_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"X (-?\d+)").unwrap());
static Y_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Y (-?\d+)").unwrap());
static Z_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Z (-?\d+)").unwrap());

/// Parse one raw log line into a structured reading.
///
/// Total and pure: any line that fails structural validation yields `None`,
/// never a panic or an error. Rejected lines are blank lines, lines without
/// exactly one `->` separator, and lines missing any of the three axis
/// tokens. No partial readings are produced.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    if line.trim().is_empty() {
        return None;
    }

    let mut parts = line.splitn(3, SEPARATOR);
    let (timestamp, coords) = match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => (left.trim(), right.trim()),
        _ => return None,
    };

    let axis = |re: &Regex| -> Option<i32> {
        re.captures(coords)?.get(1)?.as_str().parse().ok()
    };

    Some(ParsedLine {
        timestamp: timestamp.to_string(),
        x: axis(&X_REGEX)?,
        y: axis(&Y_REGEX)?,
        z: axis(&Z_REGEX)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let parsed = parse_line("14:23:01:123 -> X 120;Y -45;Z 980").unwrap();
        assert_eq!(parsed.timestamp, "14:23:01:123");
        assert_eq!(parsed.x, 120);
        assert_eq!(parsed.y, -45);
        assert_eq!(parsed.z, 980);
    }

    #[test]
    fn test_parse_is_token_order_independent() {
        let a = parse_line("14:23:01:123 -> X 1;Y 2;Z 3").unwrap();
        let b = parse_line("14:23:01:123 -> Z 3;X 1;Y 2").unwrap();
        let c = parse_line("14:23:01:123 -> Y 2 Z 3 X 1").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_parse_tolerates_surrounding_text() {
        let parsed = parse_line("boot -> accel X 5 ; gyro? Y -6 ;; Z 7 end").unwrap();
        assert_eq!((parsed.x, parsed.y, parsed.z), (5, -6, 7));
    }

    #[test]
    fn test_parse_negative_values() {
        let parsed = parse_line("00:00:00:001 -> X -1;Y -2;Z -3").unwrap();
        assert_eq!((parsed.x, parsed.y, parsed.z), (-1, -2, -3));
    }

    #[test]
    fn test_reject_blank_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t  "), None);
    }

    #[test]
    fn test_reject_missing_separator() {
        assert_eq!(parse_line("14:23:01:123 X 1;Y 2;Z 3"), None);
    }

    #[test]
    fn test_reject_double_separator() {
        assert_eq!(parse_line("a -> b -> X 1;Y 2;Z 3"), None);
    }

    #[test]
    fn test_reject_missing_axis_token() {
        assert_eq!(parse_line("t -> X 1;Y 2"), None);
        assert_eq!(parse_line("t -> Y 2;Z 3"), None);
        assert_eq!(parse_line("t -> X 1;Z 3"), None);
    }

    #[test]
    fn test_reject_integer_overflow() {
        // value exceeds i32, parse fails closed
        assert_eq!(parse_line("t -> X 99999999999;Y 2;Z 3"), None);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let line = "09:15:30:500 -> X 10;Y 20;Z 30";
        assert_eq!(parse_line(line), parse_line(line));
    }
}
