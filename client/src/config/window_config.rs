use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MIN_WINDOW_SIZE: f32 = 320.0;
const MAX_WINDOW_SIZE: f32 = 4096.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&value) {
                return Err(format!(
                    "window {} must be between {} and {}, got {}",
                    name, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE, value
                ));
            }
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
        }
    }
}
