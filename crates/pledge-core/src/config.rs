use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub campaign: CampaignConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            campaign: CampaignConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Stat counter animation duration in milliseconds
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            counter_duration_ms: default_counter_duration(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve applied to animated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    Linear,
    Cubic,
    Quartic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Frame rate used while an animation is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Lines per scroll step when smooth scrolling is disabled
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Easing curve for scroll animations
    #[serde(default = "default_scroll_easing")]
    pub easing: EasingType,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
            easing: default_scroll_easing(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Public page URL used for share links
    #[serde(default = "default_campaign_url")]
    pub url: String,
    /// Page title used for share links and the terminal title
    #[serde(default = "default_campaign_title")]
    pub title: String,
    /// Pre-filled tweet text
    #[serde(default = "default_tweet_text")]
    pub tweet_text: String,
    /// Pre-filled email subject
    #[serde(default = "default_email_subject")]
    pub email_subject: String,
    /// Estimated cost to save one life, in dollars
    #[serde(default = "default_cost_per_life")]
    pub cost_per_life: f64,
    /// Cost of one malaria net, in dollars
    #[serde(default = "default_net_cost")]
    pub net_cost: f64,
    /// Initial pledge percentage shown in the calculator
    #[serde(default = "default_percent")]
    pub default_percent: f64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            url: default_campaign_url(),
            title: default_campaign_title(),
            tweet_text: default_tweet_text(),
            email_subject: default_email_subject(),
            cost_per_life: default_cost_per_life(),
            net_cost: default_net_cost(),
            default_percent: default_percent(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_animation_fps() -> u16 {
    60
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_scroll_easing() -> EasingType {
    EasingType::Cubic
}

fn default_campaign_url() -> String {
    "https://onepercent.example.org/pledge".to_string()
}

fn default_campaign_title() -> String {
    "Give 1% — Save Lives".to_string()
}

fn default_tweet_text() -> String {
    "This holiday season, I'm giving 1% of my income to save lives through \
     high-impact charities. Join me?"
        .to_string()
}

fn default_email_subject() -> String {
    "Save Lives This Holiday Season".to_string()
}

fn default_cost_per_life() -> f64 {
    2500.0
}

fn default_net_cost() -> f64 {
    3.0
}

fn default_percent() -> f64 {
    1.0
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            tracing::debug!("no config file at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pledge/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pledge")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.counter_duration_ms, 2000);
        assert_eq!(config.ui.scroll.animation_duration_ms, 150);
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
        assert_eq!(config.campaign.cost_per_life, 2500.0);
        assert_eq!(config.campaign.net_cost, 3.0);
        assert_eq!(config.campaign.default_percent, 1.0);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [campaign]
            url = "https://example.com/p"

            [ui.scroll]
            smooth_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.campaign.url, "https://example.com/p");
        assert_eq!(config.campaign.cost_per_life, 2500.0);
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_fps, 60);
    }

    #[test]
    fn test_easing_kebab_case() {
        let config: ScrollConfig = toml::from_str(r#"easing = "ease-out""#).unwrap();
        assert_eq!(config.easing, EasingType::EaseOut);
    }
}
