//! Current-conditions lookup for the fixed location.

pub mod open_meteo;
pub mod provider;

pub use open_meteo::OpenMeteoClient;
pub use provider::WeatherProvider;
