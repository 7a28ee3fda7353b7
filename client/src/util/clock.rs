//! Wall-clock source for cache timestamps.

/// Milliseconds since the Unix epoch. Outside the browser this is always 0,
/// which makes every cached entry look fresh to server renders.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
