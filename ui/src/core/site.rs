//! Site-wide constants and the web app manifest.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::playground::encode_uri_component;

pub struct SiteConfig;

impl SiteConfig {
    pub const NAME: &'static str = "React Native Academy";
    pub const SHORT_NAME: &'static str = "RN Academy";
    pub const TITLE: &'static str =
        "React Native Academy - Learn Mobile Development for React Developers";
    pub const DESCRIPTION: &'static str = "Master React Native by bridging the gap from Web Components to Native Primitives. Interactive lessons, live code playground, and comprehensive curriculum from beginner to advanced.";
    pub const MANIFEST_DESCRIPTION: &'static str =
        "Master React Native by bridging the gap from Web Components to Native Primitives.";
    pub const OG_DESCRIPTION: &'static str =
        "Learn Once, Write Anywhere - Master React Native with interactive lessons";
    pub const KEYWORDS: &'static [&'static str] = &[
        "React Native",
        "React",
        "Mobile Development",
        "iOS",
        "Android",
        "Expo",
        "Tutorial",
        "Learn",
    ];
    pub const THEME_COLOR: &'static str = "#0a0e27";
    pub const GITHUB_PROFILE_URL: &'static str = "https://github.com/vickyvigneshcoc99-glitch";
    pub const GITHUB_REPOSITORIES_URL: &'static str =
        "https://github.com/vickyvigneshcoc99-glitch?tab=repositories";
    pub const SNACK_BASE_URL: &'static str = "https://snack.expo.dev/?code=";

    pub fn keywords() -> String {
        Self::KEYWORDS.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
}

impl Default for WebManifest {
    fn default() -> Self {
        Self {
            name: SiteConfig::NAME.to_string(),
            short_name: SiteConfig::SHORT_NAME.to_string(),
            description: SiteConfig::MANIFEST_DESCRIPTION.to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: SiteConfig::THEME_COLOR.to_string(),
            theme_color: SiteConfig::THEME_COLOR.to_string(),
        }
    }
}

impl WebManifest {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// `data:` URL suitable for `<link rel="manifest">`.
    pub fn data_url(&self) -> Result<String> {
        Ok(format!(
            "data:application/manifest+json,{}",
            encode_uri_component(&self.to_json()?)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_json_uses_snake_case_keys() {
        let json = WebManifest::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["short_name"], "RN Academy");
        assert_eq!(value["theme_color"], "#0a0e27");
        assert_eq!(value["display"], "standalone");
    }

    #[test]
    fn data_url_is_percent_encoded() {
        let url = WebManifest::default().data_url().unwrap();
        assert!(url.starts_with("data:application/manifest+json,%7B"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn keywords_are_comma_separated() {
        assert!(SiteConfig::keywords().starts_with("React Native, React, "));
    }
}
