//! Small text formatting helpers shared by the generated pages.
//!
//! The catalog stores prep and total times as ISO-8601 durations (`PT15M`,
//! `PT1H30M`) because that is the form schema.org expects verbatim in the
//! HowTo output. Pages show the human form instead, produced by
//! [`format_duration`].
//!
//! A malformed duration is returned unchanged rather than rejected: the
//! string is display data by the time it reaches rendering, and frontmatter
//! validation has already had its chance to complain.

/// Format an ISO-8601 duration for display.
///
/// ```
/// use clean_pantry::format::format_duration;
///
/// assert_eq!(format_duration("PT15M"), "15 min");
/// assert_eq!(format_duration("PT1H30M"), "1 hr 30 min");
/// assert_eq!(format_duration("PT0M"), "< 1 min");
/// assert_eq!(format_duration("soon"), "soon");
/// ```
///
/// Hours pluralize (`2 hrs`), minutes do not. A seconds component is
/// accepted but never displayed; durations that round to nothing show as
/// `< 1 min`.
pub fn format_duration(iso: &str) -> String {
    let Some((hours, minutes)) = parse_duration(iso) else {
        return iso.to_string();
    };

    let mut parts = Vec::new();
    if hours > 0 {
        let unit = if hours == 1 { "hr" } else { "hrs" };
        parts.push(format!("{hours} {unit}"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes} min"));
    }
    if parts.is_empty() {
        parts.push("< 1 min".to_string());
    }

    parts.join(" ")
}

/// Parse `PT(nH)?(nM)?(nS)?` into `(hours, minutes)`.
///
/// Units must appear in H, M, S order, each at most once. Returns `None`
/// for anything outside that grammar. Seconds parse but are discarded.
fn parse_duration(iso: &str) -> Option<(u32, u32)> {
    let mut rest = iso.strip_prefix("PT")?;

    let mut hours = 0u32;
    let mut minutes = 0u32;
    // Index into "HMS"; each unit may only be followed by later units.
    let mut min_unit = 0;

    while !rest.is_empty() {
        let digits_end = rest.find(|c: char| !c.is_ascii_digit())?;
        if digits_end == 0 {
            return None;
        }
        let value: u32 = rest[..digits_end].parse().ok()?;
        let unit = rest.as_bytes()[digits_end];
        let unit_rank = match unit {
            b'H' => 0,
            b'M' => 1,
            b'S' => 2,
            _ => return None,
        };
        if unit_rank < min_unit {
            return None;
        }
        min_unit = unit_rank + 1;
        match unit {
            b'H' => hours = value,
            b'M' => minutes = value,
            _ => {} // seconds are below display resolution
        }
        rest = &rest[digits_end + 1..];
    }

    Some((hours, minutes))
}

/// Uppercase the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // format_duration() tests
    // =========================================================================

    #[test]
    fn formats_minutes_only() {
        assert_eq!(format_duration("PT15M"), "15 min");
    }

    #[test]
    fn formats_hours_only() {
        assert_eq!(format_duration("PT2H"), "2 hrs");
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_duration("PT1H30M"), "1 hr 30 min");
    }

    #[test]
    fn formats_single_hour() {
        assert_eq!(format_duration("PT1H"), "1 hr");
    }

    #[test]
    fn formats_single_minute() {
        assert_eq!(format_duration("PT1M"), "1 min");
    }

    #[test]
    fn formats_twelve_hours() {
        assert_eq!(format_duration("PT12H"), "12 hrs");
    }

    #[test]
    fn zero_duration_shows_as_under_a_minute() {
        assert_eq!(format_duration("PT0M"), "< 1 min");
    }

    #[test]
    fn seconds_only_shows_as_under_a_minute() {
        assert_eq!(format_duration("PT90S"), "< 1 min");
    }

    #[test]
    fn malformed_input_returned_unchanged() {
        assert_eq!(format_duration("invalid"), "invalid");
        assert_eq!(format_duration("15M"), "15M");
        assert_eq!(format_duration("pt15m"), "pt15m");
        assert_eq!(format_duration("PT15"), "PT15");
        assert_eq!(format_duration("PTM"), "PTM");
        assert_eq!(format_duration("PT15X"), "PT15X");
    }

    #[test]
    fn out_of_order_units_returned_unchanged() {
        assert_eq!(format_duration("PT30M1H"), "PT30M1H");
        assert_eq!(format_duration("PT1H2H"), "PT1H2H");
    }

    // =========================================================================
    // capitalize() tests
    // =========================================================================

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize("hello"), "Hello");
    }

    #[test]
    fn handles_empty_string() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn leaves_already_capitalized_alone() {
        assert_eq!(capitalize("Hello"), "Hello");
    }

    #[test]
    fn only_first_character_changes() {
        assert_eq!(capitalize("hello world"), "Hello world");
    }
}
