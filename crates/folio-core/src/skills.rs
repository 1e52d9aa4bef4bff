//! Skill proficiency display mapping.

/// Maps a 1-10 proficiency level to a bar width percentage.
///
/// Levels outside 1-10 are a catalog authoring defect, not a runtime
/// condition; debug builds assert on them and the catalog test suite checks
/// every shipped record.
pub fn width_percent(level: u8) -> u16 {
    debug_assert!(
        (1..=10).contains(&level),
        "skill level out of range: {level}"
    );
    u16::from(level) * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_linear_in_level() {
        assert_eq!(width_percent(1), 10);
        assert_eq!(width_percent(7), 70);
        assert_eq!(width_percent(10), 100);
    }
}
