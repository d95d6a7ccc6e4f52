//! # Crosslight
//!
//! Models a single traffic light as a finite-state actor. A background
//! thread cycles the light between red and green on a randomized
//! interval and publishes every transition onto a blocking message
//! queue; any number of caller threads can block until the next green
//! phase comes around.
//!
//! ```no_run
//! use crosslight::TrafficLight;
//!
//! let light = TrafficLight::new();
//! light.simulate();
//! light.wait_for_green().unwrap();
//! // cross the intersection
//! light.stop();
//! ```

pub mod light;
pub mod messaging;
pub mod phase;
pub mod utilities;

pub use light::config::LightConfig;
pub use light::traffic_light::TrafficLight;
pub use messaging::queue::{MessageQueue, RecvError};
pub use phase::Phase;
pub use utilities::errors::TrafficLightError;
pub use utilities::logger::Logger;

/// Library version.
pub const VERSION: &str = "0.1.0";
