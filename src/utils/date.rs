use chrono::{Datelike, NaiveDate, Weekday};
use std::str::Chars;

/// Number of days of `month` in `year`, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// All dates of a month in ascending order (empty for an invalid month).
pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let last = days_in_month(year, month).unwrap_or(0);
    (1..=last)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

pub fn is_weekend(date: &NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a text date trying each chrono pattern in order.
///
/// Matching is strict: the text must have exactly the shape of the pattern
/// (`%d`/`%m` two digits, `%Y` four digits, `%b` a capitalized English
/// abbreviation, literals as written, no surrounding blanks).
pub fn parse_with_formats<S: AsRef<str>>(s: &str, formats: &[S]) -> Option<NaiveDate> {
    formats.iter().find_map(|fmt| {
        let fmt = fmt.as_ref();
        if !matches_layout(s, fmt) {
            return None;
        }
        NaiveDate::parse_from_str(s, fmt).ok()
    })
}

/// Shape check of `s` against a chrono pattern.
/// Patterns using other specifiers are left to chrono alone.
fn matches_layout(s: &str, fmt: &str) -> bool {
    let mut text = s.chars();
    let mut pattern = fmt.chars();

    while let Some(p) = pattern.next() {
        let ok = match p {
            '%' => match pattern.next() {
                Some('d' | 'm') => take_digits(&mut text, 2),
                Some('Y') => take_digits(&mut text, 4),
                Some('b') => take_month_abbrev(&mut text),
                _ => return true,
            },
            literal => text.next() == Some(literal),
        };
        if !ok {
            return false;
        }
    }

    text.next().is_none()
}

fn take_digits(text: &mut Chars<'_>, n: usize) -> bool {
    (0..n).all(|_| text.next().is_some_and(|c| c.is_ascii_digit()))
}

fn take_month_abbrev(text: &mut Chars<'_>) -> bool {
    let abbrev: String = text.by_ref().take(3).collect();
    MONTH_ABBREVS.contains(&abbrev.as_str())
}
