/// Combined rain and showers (mm) must exceed this to count as visible rain.
pub const RAIN_THRESHOLD_MM: f64 = 0.1;

/// Gusts (km/h) must exceed this to count as really windy, roughly 28 mph.
pub const WIND_GUST_THRESHOLD_KMH: f64 = 45.0;

/// One reading of current conditions. Missing readings are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeatherSnapshot {
    pub rain: f64,
    pub showers: f64,
    pub snowfall: f64,
    pub wind_gusts: f64,
    pub wind_direction: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherState {
    Clear,
    Snow,
    Rain,
    Wind,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn rain_amount(&self) -> f64 {
        self.rain + self.showers
    }

    #[must_use]
    pub fn is_snowing(&self) -> bool {
        self.snowfall > 0.0
    }

    #[must_use]
    pub fn is_raining(&self) -> bool {
        self.rain_amount() > RAIN_THRESHOLD_MM
    }

    #[must_use]
    pub fn is_windy(&self) -> bool {
        self.wind_gusts > WIND_GUST_THRESHOLD_KMH
    }

    /// Snow wins over rain, rain over wind, and anything over clear.
    #[must_use]
    pub fn classify(&self) -> WeatherState {
        if self.is_snowing() {
            WeatherState::Snow
        } else if self.is_raining() {
            WeatherState::Rain
        } else if self.is_windy() {
            WeatherState::Wind
        } else {
            WeatherState::Clear
        }
    }
}
