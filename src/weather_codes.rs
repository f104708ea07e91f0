//! Weather code → display text and icon markup

/// Text and icon pair shown on a weather card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    pub text: &'static str,
    pub icon: &'static str,
}

const CLOUDY: WeatherCondition = WeatherCondition {
    text: "Cloudy",
    icon: r#"<i class="fas fa-cloud" style="color:rgb(172, 195, 220);"></i>"#,
};

const PARTLY_CLOUDY: WeatherCondition = WeatherCondition {
    text: "Partly Cloudy",
    icon: r#"<i class="fas fa-cloud-sun" style="color: #fbbf24;"></i>"#,
};

/// Every code the dashboard knows how to display
pub const WEATHER_CODES: [(u8, WeatherCondition); 7] = [
    (
        0,
        WeatherCondition {
            text: "Sunny",
            icon: r#"<i class="fas fa-sun" style="color: #f9d71c;"></i>"#,
        },
    ),
    (1, PARTLY_CLOUDY),
    (2, PARTLY_CLOUDY),
    (3, CLOUDY),
    (
        61,
        WeatherCondition {
            text: "Rainy",
            icon: r#"<i class="fas fa-cloud-showers-heavy" style="color:rgb(13, 100, 240);"></i>"#,
        },
    ),
    (
        71,
        WeatherCondition {
            text: "Snowy",
            icon: r#"<i class="fas fa-snowflake" style="color: #bae6fd;"></i>"#,
        },
    ),
    (
        95,
        WeatherCondition {
            text: "Thunderstorm",
            icon: r#"<i class="fas fa-bolt" style="color: #facc15;"></i>"#,
        },
    ),
];

/// Look up a code, falling back to "Cloudy" for anything unmapped
#[must_use]
pub fn resolve_weather_code(code: u16) -> WeatherCondition {
    WEATHER_CODES
        .iter()
        .find(|(known, _)| u16::from(*known) == code)
        .map_or(CLOUDY, |(_, condition)| *condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(resolve_weather_code(0).text, "Sunny");
        assert_eq!(resolve_weather_code(2).text, "Partly Cloudy");
        assert_eq!(resolve_weather_code(61).text, "Rainy");
        assert_eq!(resolve_weather_code(95).text, "Thunderstorm");
    }

    #[test]
    fn test_unknown_code_falls_back_to_cloudy() {
        assert_eq!(resolve_weather_code(999), resolve_weather_code(3));
        assert_eq!(resolve_weather_code(45), CLOUDY);
    }

    #[test]
    fn test_icons_are_markup() {
        for (_, condition) in WEATHER_CODES {
            assert!(condition.icon.starts_with("<i class=\"fas"));
        }
    }
}
