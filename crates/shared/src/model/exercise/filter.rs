use chrono::NaiveDate;
use sea_query::{Expr, SelectStatement};

use super::exercise::ExerciseIden;
use crate::types::parse_date;

/// Optional windowing and capping of a user's exercise log, built from raw
/// query text. Construction is deliberately lenient: a bound that fails to
/// parse is dropped rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u64>,
}

impl LogFilter {
    pub fn from_raw(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_date),
            to: to.and_then(parse_date),
            // Absent, zero or unparseable limits all mean "no cap"
            limit: limit
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .filter(|&limit| limit > 0),
        }
    }

    /// Narrow a select over the exercise table to the window. Date bounds
    /// are inclusive on both ends.
    pub(crate) fn apply(&self, query: &mut SelectStatement) {
        if let Some(from) = self.from {
            query.and_where(Expr::col(ExerciseIden::Date).gte(from));
        }
        if let Some(to) = self.to {
            query.and_where(Expr::col(ExerciseIden::Date).lte(to));
        }
        if let Some(limit) = self.limit {
            query.limit(limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_query::{Query, SqliteQueryBuilder};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rendered(filter: &LogFilter) -> String {
        let mut query = Query::select()
            .column(ExerciseIden::Id)
            .from(ExerciseIden::Table)
            .take();
        filter.apply(&mut query);
        query.to_string(SqliteQueryBuilder)
    }

    #[test]
    fn parses_bounds_and_limit() {
        let filter = LogFilter::from_raw(Some("2024-01-15"), Some("2024-02-15"), Some("5"));
        assert_eq!(filter.from, Some(date(2024, 1, 15)));
        assert_eq!(filter.to, Some(date(2024, 2, 15)));
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn malformed_values_drop_the_bound() {
        let filter = LogFilter::from_raw(Some("whenever"), Some("2024-99-99"), Some("many"));
        assert_eq!(filter, LogFilter::default());
    }

    #[test]
    fn zero_or_negative_limits_mean_no_cap() {
        assert_eq!(LogFilter::from_raw(None, None, Some("0")).limit, None);
        assert_eq!(LogFilter::from_raw(None, None, Some("-3")).limit, None);
    }

    #[test]
    fn empty_filter_adds_no_clauses() {
        let sql = rendered(&LogFilter::default());
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn date_bounds_render_inclusively() {
        let filter = LogFilter::from_raw(Some("2024-01-15"), Some("2024-02-15"), None);
        let sql = rendered(&filter);
        assert!(sql.contains(r#""date" >= '2024-01-15'"#), "{sql}");
        assert!(sql.contains(r#""date" <= '2024-02-15'"#), "{sql}");
    }

    #[test]
    fn limit_renders_a_cap() {
        let filter = LogFilter::from_raw(None, None, Some("2"));
        assert!(rendered(&filter).contains("LIMIT 2"));
    }
}
