//! The traffic light actor and its configuration.

pub mod config;
pub mod traffic_light;

pub use config::LightConfig;
pub use traffic_light::TrafficLight;
