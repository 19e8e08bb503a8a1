//! Device classification for layout tweaks.

use serde::{Deserialize, Serialize};

/// Widest viewport treated as handheld, in CSS pixels.
pub const HANDHELD_MAX_WIDTH: u32 = 768;

/// Widest viewport treated as a phone; wider handhelds are tablets.
pub const PHONE_MAX_WIDTH: u32 = 480;

const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Layout class of the visiting device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Desktop,
    Tablet,
    Handheld,
}

impl DeviceClass {
    /// Classify from the user agent and the viewport width.
    pub fn detect(user_agent: &str, viewport_width: u32) -> Self {
        let agent = user_agent.to_lowercase();
        let mobile_agent = MOBILE_AGENTS.iter().any(|token| agent.contains(token));

        if viewport_width > PHONE_MAX_WIDTH && viewport_width <= HANDHELD_MAX_WIDTH {
            DeviceClass::Tablet
        } else if mobile_agent || viewport_width <= HANDHELD_MAX_WIDTH {
            DeviceClass::Handheld
        } else {
            DeviceClass::Desktop
        }
    }

    /// Whether mobile enhancements apply.
    pub fn is_handheld(&self) -> bool {
        !matches!(self, DeviceClass::Desktop)
    }

    /// Root font size in pixels.
    pub fn base_font_size(&self) -> u32 {
        match self {
            DeviceClass::Tablet => 18,
            _ => 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Firefox/125.0";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";

    #[test]
    fn test_desktop() {
        let class = DeviceClass::detect(DESKTOP_UA, 1440);
        assert_eq!(class, DeviceClass::Desktop);
        assert!(!class.is_handheld());
        assert_eq!(class.base_font_size(), 16);
    }

    #[test]
    fn test_width_breakpoints() {
        assert_eq!(DeviceClass::detect(DESKTOP_UA, 769), DeviceClass::Desktop);
        assert_eq!(DeviceClass::detect(DESKTOP_UA, 768), DeviceClass::Tablet);
        assert_eq!(DeviceClass::detect(DESKTOP_UA, 481), DeviceClass::Tablet);
        assert_eq!(DeviceClass::detect(DESKTOP_UA, 480), DeviceClass::Handheld);
        assert_eq!(DeviceClass::Tablet.base_font_size(), 18);
    }

    #[test]
    fn test_mobile_agent_on_wide_screen() {
        let class = DeviceClass::detect(IPHONE_UA, 1024);
        assert_eq!(class, DeviceClass::Handheld);
        assert!(class.is_handheld());
        assert_eq!(
            DeviceClass::detect("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)", 1200),
            DeviceClass::Handheld
        );
    }
}
