use js_sys::Date;

/// Zero-padded `HH:MM:SS`.
pub fn format_clock_time(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Locale time of day, e.g. `2:03:27 PM` in `en-US` or `14:03:27` in `de-DE`.
pub fn format_time_label(date: &Date, locale: &str) -> String {
    date.to_locale_time_string(locale).into()
}
