//! Stylesheet fragments for each weather state.
//!
//! Every fragment paints a full-viewport `body::after` overlay that ignores
//! pointer events, so it can be linked into any page without touching layout.

use std::fmt::Display;

use crate::core::models::WeatherState;

pub const CLEAR_CSS: &str = "/* Weather: Clear */";

pub const RAIN_CSS: &str = r#"
        /* WEATHER: RAIN */
        body::after { 
          content: ""; position: fixed; top: 0; left: 0; width: 100%; height: 100%; 
          pointer-events: none; z-index: 9999; 
          background-image: linear-gradient(to bottom, rgba(255,255,255,0) 0%, rgba(255,255,255,0.4) 100%); 
          background-size: 2px 30px; 
          animation: rain-fall 0.3s linear infinite; 
          opacity: 0.3; 
        }
        @keyframes rain-fall { from { background-position: 0 0; } to { background-position: 0 100vh; } }
      "#;

pub const SNOW_CSS: &str = r#"
        /* WEATHER: SNOW */
        body::after { 
          content: ""; position: fixed; top: 0; left: 0; width: 100%; height: 100%; 
          pointer-events: none; z-index: 9999; 
          background-image: radial-gradient(4px 4px at 100px 50px, #fff, transparent), 
                            radial-gradient(6px 6px at 200px 150px, #fff, transparent), 
                            radial-gradient(3px 3px at 300px 250px, #fff, transparent); 
          background-size: 550px 550px; 
          animation: snow-fall 10s linear infinite; 
          opacity: 0.8; 
        }
        @keyframes snow-fall { from { background-position: 0 0; } to { background-position: 0 550px; } }
      "#;

pub const WIND_CSS: &str = r#"
        /* WEATHER: WIND */
        body { animation: wind-shake 0.5s infinite; }
        body::after { 
          content: ""; position: fixed; top: 0; left: 0; width: 100%; height: 100%; 
          pointer-events: none; z-index: 9999; 
          background: linear-gradient(90deg, rgba(255,255,255,0) 0%, rgba(255,255,255,0.1) 50%, rgba(255,255,255,0) 100%); 
          background-size: 200% 100%; 
          animation: wind-blow 1s linear infinite; 
        }
        @keyframes wind-shake { 
          0%, 100% { transform: translateX(0); } 
          25% { transform: translateX(1px); } 
          75% { transform: translateX(-1px); } 
        }
        @keyframes wind-blow { from { background-position: 200% 0; } to { background-position: -200% 0; } }
      "#;

#[must_use]
pub fn for_state(state: WeatherState) -> &'static str {
    match state {
        WeatherState::Clear => CLEAR_CSS,
        WeatherState::Snow => SNOW_CSS,
        WeatherState::Rain => RAIN_CSS,
        WeatherState::Wind => WIND_CSS,
    }
}

/// Renders a failure as a CSS comment so a linking page keeps working.
#[must_use]
pub fn error_comment(err: &impl Display) -> String {
    // A literal `*/` in the message would close the comment early.
    let message = err.to_string().replace("*/", "* /");
    format!("/* Error fetching weather: {message} */")
}
