use serde::{Deserialize, Serialize};

/// Timing knobs for every animated piece of the site. Loaded from the
/// `motion` block of `content/site.json`; missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Pixels the featured-projects marquee advances per second.
    pub marquee_speed: f64,
    pub role_interval_ms: u64,
    pub loading_duration_ms: u64,
    /// Delay between the loading bar hitting 100% and the screen completing.
    pub loading_exit_ms: u64,
    /// The header may only hide once scrolled past this offset.
    pub header_hide_offset: f64,
    pub bottom_nav_footer_threshold: f64,
    pub contact_submit_delay_ms: u64,
    pub contact_sent_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            marquee_speed: 80.0,
            role_interval_ms: 2500,
            loading_duration_ms: 2800,
            loading_exit_ms: 500,
            header_hide_offset: 100.0,
            bottom_nav_footer_threshold: 200.0,
            contact_submit_delay_ms: 1000,
            contact_sent_ms: 3000,
        }
    }
}

impl MotionConfig {
    pub fn loading_duration_secs(&self) -> f64 {
        self.loading_duration_ms as f64 / 1000.0
    }

    pub fn loading_exit_secs(&self) -> f64 {
        self.loading_exit_ms as f64 / 1000.0
    }
}
