use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration representing frequency (period) of time series data
///
/// Every variant defines a calendar grid: the set of dates that are valid
/// index points for a series declared at that frequency. `Weekly` is anchored
/// to a weekday, so `Weekly(Weekday::Sat)` is the grid of all Saturdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// Every day
    Daily,
    /// Every week, anchored to the given weekday
    Weekly(Weekday),
    /// First day of each calendar month
    MonthStart,
    /// First day of each calendar quarter
    QuarterStart,
    /// First day of each calendar year
    YearStart,
}

impl Frequency {
    /// Parse frequency from a pandas-style code string
    pub fn from_str(s: &str) -> Option<Self> {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "D" | "DAY" | "DAYS" | "DAILY" => Some(Frequency::Daily),
            "W" | "WEEK" | "WEEKS" | "WEEKLY" => Some(Frequency::Weekly(Weekday::Sun)),
            "M" | "MS" | "MONTH" | "MONTHS" | "MONTHLY" => Some(Frequency::MonthStart),
            "Q" | "QS" | "QUARTER" | "QUARTERS" | "QUARTERLY" => Some(Frequency::QuarterStart),
            "Y" | "YS" | "A" | "AS" | "YEAR" | "YEARS" | "YEARLY" | "ANNUAL" | "ANNUALLY" => {
                Some(Frequency::YearStart)
            }
            _ => {
                // Anchored weekly, e.g. "W-SAT"
                if let Some(anchor) = upper.strip_prefix("W-") {
                    parse_weekday(anchor).map(Frequency::Weekly)
                } else {
                    None
                }
            }
        }
    }

    /// The canonical start of the window containing `date`
    ///
    /// For `Weekly(anchor)` this is the previous-or-same anchor weekday; for
    /// the calendar variants it is the first day of the containing month,
    /// quarter, or year. `Daily` windows are the dates themselves.
    pub fn window_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => date,
            Frequency::Weekly(anchor) => {
                let back = (7 + date.weekday().num_days_from_monday() as i64
                    - anchor.num_days_from_monday() as i64)
                    % 7;
                date - Duration::days(back)
            }
            Frequency::MonthStart => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap(),
            Frequency::QuarterStart => {
                let quarter_month = ((date.month() - 1) / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), quarter_month, 1).unwrap()
            }
            Frequency::YearStart => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap(),
        }
    }

    /// The grid point immediately after an on-grid `date`
    ///
    /// Callers must pass an on-grid date (a window start); the calendar
    /// variants step whole months or years from the first of the period, so
    /// no day clamping is needed.
    pub fn next_grid_point(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => date + Duration::days(1),
            Frequency::Weekly(_) => date + Duration::weeks(1),
            Frequency::MonthStart => {
                let (mut year, mut month) = (date.year(), date.month() + 1);
                if month > 12 {
                    month = 1;
                    year += 1;
                }
                NaiveDate::from_ymd_opt(year, month, 1).unwrap()
            }
            Frequency::QuarterStart => {
                let (mut year, mut month) = (date.year(), date.month() + 3);
                if month > 12 {
                    month -= 12;
                    year += 1;
                }
                NaiveDate::from_ymd_opt(year, month, 1).unwrap()
            }
            Frequency::YearStart => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap(),
        }
    }

    /// The first grid point on or after `date`
    pub fn ceil(&self, date: NaiveDate) -> NaiveDate {
        let floor = self.window_start(date);
        if floor == date {
            date
        } else {
            self.next_grid_point(floor)
        }
    }

    /// Whether `date` lies on this frequency's grid
    pub fn is_on_grid(&self, date: NaiveDate) -> bool {
        self.window_start(date) == date
    }

    /// Approximate number of days per period
    ///
    /// Estimates for months, quarters and years; used only to order
    /// frequencies by coarseness, never for date arithmetic.
    pub fn approx_days(&self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly(_) => 7,
            Frequency::MonthStart => 30,
            Frequency::QuarterStart => 90,
            Frequency::YearStart => 365,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "D"),
            Frequency::Weekly(anchor) => write!(f, "W-{}", weekday_code(*anchor)),
            Frequency::MonthStart => write!(f, "MS"),
            Frequency::QuarterStart => write!(f, "QS"),
            Frequency::YearStart => write!(f, "YS"),
        }
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "MON" => Some(Weekday::Mon),
        "TUE" => Some(Weekday::Tue),
        "WED" => Some(Weekday::Wed),
        "THU" => Some(Weekday::Thu),
        "FRI" => Some(Weekday::Fri),
        "SAT" => Some(Weekday::Sat),
        "SUN" => Some(Weekday::Sun),
        _ => None,
    }
}

fn weekday_code(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}
