pub mod calc;
pub mod config;
pub mod error;
pub mod share;

pub use config::{AppConfig, CampaignConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
