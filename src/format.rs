use chrono::{NaiveDate, NaiveTime};

/// "March 21, Friday" — presentational only, the stored value stays ISO.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %A").to_string()
}

/// 12-hour clock with AM/PM suffix: 14:30 -> "2:30 PM", 00:15 -> "12:15 AM".
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
