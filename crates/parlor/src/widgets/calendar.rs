//! Plain-text year calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::instrument;

/// Earliest year accepted.
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted.
pub const MAX_YEAR: i32 = 2100;

const MONTHS_PER_ROW: usize = 3;
const DAY_WIDTH: usize = 2;
const MONTH_WIDTH: usize = (DAY_WIDTH + 1) * 7 - 1;
const GUTTER: &str = "  ";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CalendarError {
    /// Year outside the supported range.
    #[display("Year {} is outside {}-{}", _0, MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(i32),
}

impl std::error::Error for CalendarError {}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

fn join_columns<I>(columns: I) -> String
where
    I: IntoIterator<Item = String>,
{
    columns
        .into_iter()
        .map(|col| center(&col, MONTH_WIDTH))
        .collect::<Vec<_>>()
        .join(GUTTER)
        .trim_end()
        .to_string()
}

fn week_header(first_weekday: Weekday) -> String {
    let mut day = first_weekday;
    let mut names = Vec::with_capacity(7);
    for _ in 0..7 {
        names.push(day.to_string().chars().take(DAY_WIDTH).collect::<String>());
        day = day.succ();
    }
    names.join(" ")
}

/// Weeks of a month as rows of seven day numbers, 0 for padding.
fn month_weeks(year: i32, month: u32, first_weekday: Weekday) -> Vec<[u32; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = (first.weekday().num_days_from_monday() + 7
        - first_weekday.num_days_from_monday())
        % 7;
    let days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .count() as u32;

    let mut weeks = Vec::new();
    let mut week = [0u32; 7];
    let mut slot = offset as usize;
    for day in 1..=days {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn format_week(week: &[u32; 7]) -> String {
    week.iter()
        .map(|day| {
            if *day == 0 {
                " ".repeat(DAY_WIDTH)
            } else {
                format!("{:>width$}", day, width = DAY_WIDTH)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders all twelve months of `year`, three per row.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] outside 1900-2100.
#[instrument]
pub fn render_year(year: i32, first_weekday: Weekday) -> Result<String, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }

    let total_width = MONTH_WIDTH * MONTHS_PER_ROW + GUTTER.len() * (MONTHS_PER_ROW - 1);
    let header = week_header(first_weekday);

    let mut lines = vec![center(&year.to_string(), total_width).trim_end().to_string()];
    for row in 0..12 / MONTHS_PER_ROW {
        let months: Vec<u32> = (0..MONTHS_PER_ROW)
            .map(|i| (row * MONTHS_PER_ROW + i + 1) as u32)
            .collect();
        let weeks: Vec<Vec<[u32; 7]>> = months
            .iter()
            .map(|m| month_weeks(year, *m, first_weekday))
            .collect();

        lines.push(String::new());
        lines.push(join_columns(
            months.iter().map(|m| MONTH_NAMES[(*m - 1) as usize].to_string()),
        ));
        lines.push(join_columns(months.iter().map(|_| header.clone())));

        let height = weeks.iter().map(Vec::len).max().unwrap_or(0);
        for j in 0..height {
            lines.push(join_columns(
                weeks
                    .iter()
                    .map(|w| w.get(j).map(format_week).unwrap_or_default()),
            ));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}
