use chrono::NaiveDate;

/// Calendar dates cross the API as `YYYY-MM-DD`
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Dates leave the API in the fixed textual form `Mon Jan 01 2024`
pub const DATE_OUTPUT_FORMAT: &str = "%a %b %d %Y";

/// Lenient date parsing: anything that isn't a `YYYY-MM-DD` calendar date
/// (including whitespace-only input) is treated as absent
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_OUTPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_the_fixed_textual_form() {
        assert_eq!(format_date(date(2024, 1, 1)), "Mon Jan 01 2024");
        assert_eq!(format_date(date(2024, 2, 1)), "Thu Feb 01 2024");
        assert_eq!(format_date(date(2023, 12, 25)), "Mon Dec 25 2023");
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date(" 2024-01-15 "), Some(date(2024, 1, 15)));
    }

    #[test]
    fn malformed_dates_are_treated_as_absent() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("01/15/2024"), None);
    }

    #[test]
    fn output_form_round_trips_to_the_same_day() {
        let submitted = date(2024, 3, 9);
        let rendered = format_date(submitted);
        let reparsed = NaiveDate::parse_from_str(&rendered, DATE_OUTPUT_FORMAT).unwrap();
        assert_eq!(reparsed, submitted);
    }
}
