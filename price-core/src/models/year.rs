use chrono::{Datelike, Local};

/// Oldest purchase year a surface may offer.
pub const MIN_YEAR: i32 = 1990;

/// The current calendar year, from the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Purchase-year options, newest first: the current year down to [`MIN_YEAR`].
pub fn year_options() -> Vec<i32> {
    (MIN_YEAR..=current_year()).rev().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn year_options_start_at_current_year() {
        let years = year_options();

        assert_eq!(years.first().copied(), Some(current_year()));
    }

    #[test]
    fn year_options_end_at_min_year() {
        let years = year_options();

        assert_eq!(years.last().copied(), Some(MIN_YEAR));
    }

    #[test]
    fn year_options_are_strictly_descending() {
        let years = year_options();

        assert!(years.windows(2).all(|pair| pair[0] == pair[1] + 1));
    }
}
