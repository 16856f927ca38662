//! Web app manifest served as `manifest.json`.

use serde::Serialize;

use super::join_base;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Fullscreen,
    Standalone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPurpose {
    Any,
    Maskable,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub purpose: IconPurpose,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: DisplayMode,
    pub display_override: Vec<DisplayMode>,
    pub background_color: String,
    pub theme_color: String,
    pub orientation: String,
    pub scope: String,
    pub categories: Vec<String>,
    pub icons: Vec<ManifestIcon>,
}

const ICON_SIZES: [u32; 2] = [192, 512];

impl AppManifest {
    /// Manifest for the app deployed under `base` (empty for the site root).
    pub fn untime(base: &str) -> Self {
        let root = join_base(base, "/");
        let mut icons = Vec::new();
        for purpose in [IconPurpose::Any, IconPurpose::Maskable] {
            for size in ICON_SIZES {
                let suffix = match purpose {
                    IconPurpose::Any => "",
                    IconPurpose::Maskable => "-maskable",
                };
                icons.push(ManifestIcon {
                    src: join_base(base, &format!("/icon-{size}x{size}{suffix}.png")),
                    sizes: format!("{size}x{size}"),
                    mime: "image/png".to_string(),
                    purpose,
                });
            }
        }
        Self {
            name: "Untime - Countdown Timer".to_string(),
            short_name: "Untime".to_string(),
            description: "Interactive countdown timer with visual dot grid".to_string(),
            start_url: root.clone(),
            display: DisplayMode::Fullscreen,
            display_override: vec![DisplayMode::Fullscreen, DisplayMode::Standalone],
            background_color: "#282a36".to_string(),
            theme_color: "#8be9fd".to_string(),
            orientation: "any".to_string(),
            scope: root,
            categories: vec!["productivity".to_string(), "utilities".to_string()],
            icons,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
