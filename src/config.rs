use serde::{Deserialize, Serialize};

use crate::error::SketchResult;

/// Environment variable naming a JSON file with a [`SketchConfig`].
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Static settings of the sketchpad.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct SketchConfig {
    /// Window and heading title
    pub title: String,
    /// Width and height of the square canvas, in points
    pub canvas_size: u32,
    /// Upscale factor applied when exporting
    pub export_scale: u32,
    /// File name offered for the exported image
    pub export_file_name: String,
    /// Thickness active before any marker is chosen
    pub initial_thickness: u32,
    pub thin_thickness: u32,
    pub thick_thickness: u32,
    /// Font size used for stickers and their preview
    pub sticker_font_size: f32,
    /// Stickers available at startup
    pub stickers: Vec<String>,
    /// Text prefilled in the custom sticker dialog
    pub custom_sticker_default: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Brainstorming Board".to_owned(),
            canvas_size: 256,
            export_scale: 4,
            export_file_name: "drawing.png".to_owned(),
            initial_thickness: 1,
            thin_thickness: 2,
            thick_thickness: 7,
            sticker_font_size: 24.0,
            stickers: ["😤", "🥶", "🏹", "👊", "✌️"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            custom_sticker_default: "😊".to_owned(),
        }
    }
}

impl SketchConfig {
    /// Parse a configuration from JSON. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the configuration named by [`CONFIG_ENV_VAR`], or the defaults.
    ///
    /// A missing or malformed file is logged and ignored.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        let loaded = std::fs::read_to_string(&path)
            .map_err(crate::error::SketchError::from)
            .and_then(|json| Self::from_json(&json));

        match loaded {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.to_string_lossy());
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring configuration {}: {}",
                    path.to_string_lossy(),
                    err
                );
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
