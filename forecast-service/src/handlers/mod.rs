pub mod weather_forecast;

pub use weather_forecast::get_forecast;
