//! Calendar-date helpers for wire dates and form defaults.
//!
//! The backend serves ISO-8601 timestamps; display and date inputs only use
//! the calendar-date prefix. Today's date comes from the browser clock and
//! requires a browser environment.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Date portion (`YYYY-MM-DD`) of an ISO-8601 timestamp.
pub fn display_date(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

/// Today's date as `YYYY-MM-DD` from the browser clock.
///
/// Empty outside the browser; the date input is then left blank.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
