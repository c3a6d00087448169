use chrono::{Datelike, NaiveDate, Utc};
use js_sys::Date;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_else(|| Utc::now().date_naive())
}

/// YYYY-MM-DD, the value format of `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn current_year() -> i32 {
    today().year()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_browser_clock() {
        let now = Date::new_0();
        let today = today();
        assert_eq!(today.year(), now.get_full_year() as i32);
        assert_eq!(today.month(), now.get_month() + 1);
        assert_eq!(today.day(), now.get_date());
        assert_eq!(current_year(), today.year());
    }
}
