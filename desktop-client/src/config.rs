use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Fixed RNG seed for reproducing a logged game. Random when absent.
    pub seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window_width < 400.0 || self.window_height < 400.0 {
            return Err("Window dimensions must be at least 400x400".to_string());
        }
        if self.window_width > 4096.0 || self.window_height > 4096.0 {
            return Err("Window dimensions must not exceed 4096x4096".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            window_width: 760.0,
            window_height: 560.0,
            seed: None,
        }
    }
}
