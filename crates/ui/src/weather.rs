//! Weather snapshot: the read-only data shape the screens lay out.
//!
//! A snapshot is replaced wholesale on every successful refresh and never
//! mutated in place. Temperatures, wind and pressure arrive already rounded
//! to whole units; precipitation, UV and sunshine keep their decimals.

use heapless::{String, Vec};

/// Hours of forecast kept per snapshot.
pub const MAX_HOURLY: usize = 24;
/// Days of forecast kept per snapshot.
pub const MAX_DAILY: usize = 7;

/// A configured place to fetch weather for.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// City name shown in headers.
    pub name: String<48>,
    /// Country name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub country: String<48>,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// One upcoming hour.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HourlyPoint {
    /// Local time label, `HH:MM`.
    pub time: String<8>,
    /// Temperature in °C.
    pub temp: i16,
    /// WMO weather condition code.
    pub wmo_code: u8,
    /// Precipitation probability, 0–100 %.
    pub precip_prob: u8,
    /// Precipitation amount in mm.
    pub precip_mm: f32,
    /// Wind speed in km/h.
    pub wind_speed: u16,
    /// Wind direction in degrees, meteorological (where it blows from).
    pub wind_dir: u16,
    /// Wind gust in km/h.
    pub wind_gust: u16,
}

/// One forecast day. Index 0 of the daily list is always today.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DailyPoint {
    /// Weekday abbreviation (`Mon`, `Tue`, ...).
    pub day: String<8>,
    /// WMO weather condition code.
    pub wmo_code: u8,
    /// Maximum temperature in °C.
    pub temp_max: i16,
    /// Minimum temperature in °C.
    pub temp_min: i16,
    /// Maximum precipitation probability, 0–100 %.
    pub precip_prob: u8,
    /// Precipitation sum in mm.
    pub precip_sum: f32,
    /// Maximum wind speed in km/h.
    pub wind_max: u16,
    /// Maximum UV index.
    pub uv_max: f32,
    /// Sunshine duration in hours.
    pub sunshine_hours: f32,
}

/// Everything the five screens need for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeatherSnapshot {
    /// City name.
    pub city: String<48>,
    /// Current temperature in °C.
    pub current_temp: i16,
    /// Current WMO condition code.
    pub current_wmo_code: u8,
    /// Current condition in words.
    pub current_description: String<32>,
    /// Apparent temperature in °C.
    pub feels_like: i16,
    /// Current wind speed in km/h.
    pub wind_speed: u16,
    /// Current wind direction in degrees.
    pub wind_direction: u16,
    /// Relative humidity, %.
    pub humidity: u8,
    /// Surface pressure in hPa.
    pub pressure: u16,
    /// Sunrise, `HH:MM`.
    pub sunrise: String<8>,
    /// Sunset, `HH:MM`.
    pub sunset: String<8>,
    /// Upcoming hours, ascending from now. Hours past the cap are dropped.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "capped::deserialize"))]
    pub hourly: Vec<HourlyPoint, MAX_HOURLY>,
    /// Upcoming days, index 0 is today. Days past the cap are dropped.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "capped::deserialize"))]
    pub daily: Vec<DailyPoint, MAX_DAILY>,
}

/// Deserialise a JSON array into a bounded vector, keeping the leading
/// elements that fit and skipping the rest.
#[cfg(feature = "serde")]
mod capped {
    use core::fmt;
    use core::marker::PhantomData;

    use heapless::Vec;
    use serde::de::{Deserialize, Deserializer, IgnoredAny, SeqAccess, Visitor};

    pub(super) fn deserialize<'de, D, T, const N: usize>(
        deserializer: D,
    ) -> Result<Vec<T, N>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        deserializer.deserialize_seq(CappedVisitor(PhantomData))
    }

    struct CappedVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for CappedVisitor<T, N> {
        type Value = Vec<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a sequence")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::new();
            while out.len() < N {
                match seq.next_element()? {
                    Some(item) => {
                        if out.push(item).is_err() {
                            break;
                        }
                    }
                    None => return Ok(out),
                }
            }
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(out)
        }
    }
}

impl WeatherSnapshot {
    /// Total precipitation over the first `hours` hourly points, in mm.
    pub fn precip_total(&self, hours: usize) -> f32 {
        self.hourly.iter().take(hours).map(|h| h.precip_mm).sum()
    }

    /// Highest gust across the hourly points, 0 when there are none.
    pub fn max_gust(&self) -> u16 {
        self.hourly.iter().map(|h| h.wind_gust).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(precip_mm: f32, wind_gust: u16) -> HourlyPoint {
        HourlyPoint {
            precip_mm,
            wind_gust,
            ..HourlyPoint::default()
        }
    }

    #[test]
    fn test_precip_total_counts_leading_hours_only() {
        let mut w = WeatherSnapshot::default();
        for mm in [0.5, 1.0, 0.25, 8.0] {
            w.hourly.push(hour(mm, 0)).ok();
        }
        assert!((w.precip_total(3) - 1.75).abs() < 1e-6);
    }

    #[test]
    fn test_precip_total_short_list() {
        let mut w = WeatherSnapshot::default();
        w.hourly.push(hour(2.0, 0)).ok();
        assert!((w.precip_total(12) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_max_gust() {
        let mut w = WeatherSnapshot::default();
        assert_eq!(w.max_gust(), 0);
        for g in [12, 40, 33] {
            w.hourly.push(hour(0.0, g)).ok();
        }
        assert_eq!(w.max_gust(), 40);
    }
}
