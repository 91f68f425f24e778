//! Condition vocabulary: WMO codes to words, degrees to compass points.

const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Long description of a WMO condition code ("Clear sky").
pub fn description(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51..=57 => "Drizzle",
        61..=67 => "Rain",
        71..=77 => "Snow",
        80..=82 => "Rain showers",
        85..=86 => "Snow showers",
        95.. => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Short label for list rows ("Clear"). Empty for unmapped codes.
pub fn short_label(code: u8) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51..=57 => "Drizzle",
        61..=67 => "Rain",
        71..=77 => "Snow",
        80..=82 => "Showers",
        85..=86 => "Snow showers",
        95 => "Thunderstorm",
        96.. => "Hail storm",
        _ => "",
    }
}

/// 8-point compass label for a direction in degrees, `round(deg / 45) mod 8`.
// 2 * u16::MAX + 45 fits in u32.
#[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
pub fn compass_label(deg: u16) -> &'static str {
    let sector = (2 * u32::from(deg) + 45) / 90 % 8;
    COMPASS[sector as usize]
}
