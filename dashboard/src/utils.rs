use js_sys::{Array, Date, Intl, Object, Reflect};
use wasm_bindgen::JsValue;

/// Simulated dashboard metrics, in the same ranges the mock data feed used.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DashboardData {
    pub attendance: u32,
    pub average_score: u32,
    pub activities: u32,
}

pub fn sample_metrics() -> DashboardData {
    DashboardData {
        attendance: random_in(80, 20),
        average_score: random_in(70, 30),
        activities: random_in(50, 50),
    }
}

fn random_in(base: u32, spread: u32) -> u32 {
    base + (js_sys::Math::random() * f64::from(spread)) as u32
}

/// "Wednesday, August 6, 2026"-style date line.
pub fn format_date(date: &Date) -> String {
    let options = Object::new();
    set_str(&options, "weekday", "long");
    set_str(&options, "year", "numeric");
    set_str(&options, "month", "long");
    set_str(&options, "day", "numeric");
    format_with(&options, date)
}

/// "02:30 PM"-style time.
pub fn format_time(date: &Date) -> String {
    let options = Object::new();
    set_str(&options, "hour", "2-digit");
    set_str(&options, "minute", "2-digit");
    let _ = Reflect::set(&options, &"hour12".into(), &JsValue::TRUE);
    format_with(&options, date)
}

fn set_str(options: &Object, key: &str, value: &str) {
    // only fails on frozen objects
    let _ = Reflect::set(options, &key.into(), &value.into());
}

fn format_with(options: &Object, date: &Date) -> String {
    let locales = Array::of1(&"en-US".into());
    let format = Intl::DateTimeFormat::new(&locales, options).format();
    match format.call1(&JsValue::NULL, date) {
        Ok(formatted) => formatted.as_string().unwrap_or_default(),
        Err(e) => {
            log::error!("date formatting failed: {e:?}");
            String::new()
        }
    }
}
