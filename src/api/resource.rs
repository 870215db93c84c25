use fake::Dummy;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

pub const RAIN_ICON: &str = "🌧";
pub const SNOW_ICON: &str = "❄";
pub const CLOUD_ICON: &str = "☁";
pub const SUN_ICON: &str = "☀";
pub const FOG_ICON: &str = "🌫";
pub const DEFAULT_ICON: &str = "🌤";

/// Defines current weather data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Weather {
    pub location_name: String,
    pub region: String,
    pub temp_f: f64,
    pub condition: String,
    pub humidity: u32,
    pub wind_mph: f64,
}

/// Defines advice slip data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Advice {
    pub id: u64,
    pub text: String,
}

/// Joined result of one weather and one advice request.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Dashboard {
    pub weather: Weather,
    pub advice: Advice,
}

impl Weather {
    /// Return "name, region", or just the name when the region is blank.
    ///
    pub fn location_display(&self) -> String {
        if self.region.trim().is_empty() {
            self.location_name.to_owned()
        } else {
            format!("{}, {}", self.location_name, self.region)
        }
    }

    /// Return the temperature rounded to whole degrees Fahrenheit.
    ///
    pub fn temperature(&self) -> i64 {
        self.temp_f.round() as i64
    }

    /// Return the wind speed rounded to whole miles per hour.
    ///
    pub fn wind(&self) -> i64 {
        self.wind_mph.round() as i64
    }

    pub fn temperature_display(&self) -> String {
        format!("{}°F", self.temperature())
    }

    pub fn wind_display(&self) -> String {
        format!("{} mph", self.wind())
    }

    pub fn humidity_display(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn icon(&self) -> &'static str {
        condition_icon(&self.condition)
    }
}

/// Ordered keyword table; the first pattern that matches wins, so "rain"
/// beats everything else ("Light rain and snow" is rain).
///
fn icon_table() -> &'static [(Regex, &'static str)] {
    static TABLE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            ("rain|drizzle|shower", RAIN_ICON),
            ("snow|sleet|blizzard|ice", SNOW_ICON),
            ("cloud|overcast", CLOUD_ICON),
            ("sun|clear", SUN_ICON),
            ("mist|fog|haze", FOG_ICON),
        ]
        .into_iter()
        .filter_map(|(pattern, icon)| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|re| (re, icon))
        })
        .collect()
    })
}

/// Map a free-text weather condition to a display glyph.
///
pub fn condition_icon(condition: &str) -> &'static str {
    icon_table()
        .iter()
        .find(|(re, _)| re.is_match(condition))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn rain_maps_to_rain_icon_case_insensitively() {
        assert_eq!(condition_icon("Moderate rain"), RAIN_ICON);
        assert_eq!(condition_icon("RAIN"), RAIN_ICON);
        assert_eq!(condition_icon("Patchy light rain with thunder"), RAIN_ICON);
    }

    #[test]
    fn snow_maps_to_snow_icon() {
        assert_eq!(condition_icon("Heavy Snow"), SNOW_ICON);
        assert_eq!(condition_icon("blowing snow"), SNOW_ICON);
    }

    #[test]
    fn rain_wins_over_snow() {
        assert_eq!(condition_icon("Light rain and snow"), RAIN_ICON);
    }

    #[test]
    fn other_keywords() {
        assert_eq!(condition_icon("Partly cloudy"), CLOUD_ICON);
        assert_eq!(condition_icon("Sunny"), SUN_ICON);
        assert_eq!(condition_icon("Clear"), SUN_ICON);
        assert_eq!(condition_icon("Freezing fog"), FOG_ICON);
        assert_eq!(condition_icon("Ice pellets"), SNOW_ICON);
        assert_eq!(condition_icon("Mist"), FOG_ICON);
    }

    #[test]
    fn unmatched_maps_to_default_icon() {
        assert_eq!(condition_icon("Thundery outbreaks possible"), DEFAULT_ICON);
        assert_eq!(condition_icon(""), DEFAULT_ICON);
    }

    #[test]
    fn temperature_and_wind_are_rounded() {
        let weather = Weather {
            temp_f: 71.6,
            wind_mph: 8.4,
            ..Faker.fake()
        };
        assert_eq!(weather.temperature(), 72);
        assert_eq!(weather.wind(), 8);
        assert_eq!(weather.temperature_display(), "72°F");
        assert_eq!(weather.wind_display(), "8 mph");
    }

    #[test]
    fn negative_temperatures_round_away_from_zero_at_half() {
        let weather = Weather {
            temp_f: -3.5,
            ..Faker.fake()
        };
        assert_eq!(weather.temperature(), -4);
    }

    #[test]
    fn location_display_skips_blank_region() {
        let mut weather: Weather = Faker.fake();
        weather.location_name = "Chicago".to_string();
        weather.region = "Illinois".to_string();
        assert_eq!(weather.location_display(), "Chicago, Illinois");
        weather.region = " ".to_string();
        assert_eq!(weather.location_display(), "Chicago");
    }
}
