use eframe::egui;
use serde::{Deserialize, Serialize};

pub const PREFERENCES_STORAGE_KEY: &str = "puzzlescript_editor.preferences";

pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const MIN_FONT_SIZE: f32 = 9.0;
pub const MAX_FONT_SIZE: f32 = 32.0;

/// View preferences kept across runs through eframe's storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    pub dark_mode: bool,
    pub font_size: f32,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl EditorPreferences {
    pub fn from_json(text: &str) -> Self {
        serde_json::from_str::<Self>(text)
            .map(Self::sanitized)
            .unwrap_or_default()
    }

    pub fn sanitized(self) -> Self {
        let font_size = if self.font_size.is_finite() {
            self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
        } else {
            DEFAULT_FONT_SIZE
        };
        Self { font_size, ..self }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    pub fn editor_font(&self) -> egui::FontId {
        egui::FontId::monospace(self.font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_broken_json_falls_back_to_defaults() {
        assert_eq!(EditorPreferences::from_json(""), EditorPreferences::default());
        assert_eq!(
            EditorPreferences::from_json("{\"dark_mode\": false}"),
            EditorPreferences {
                dark_mode: false,
                font_size: DEFAULT_FONT_SIZE,
            }
        );
    }

    #[test]
    fn font_size_is_clamped() {
        let prefs = EditorPreferences::from_json("{\"font_size\": 400.0}");
        assert_eq!(prefs.font_size, MAX_FONT_SIZE);
        let prefs = EditorPreferences::from_json("{\"font_size\": 1.0}");
        assert_eq!(prefs.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn persisted_round_trip() {
        let prefs = EditorPreferences {
            dark_mode: false,
            font_size: 18.0,
        };
        let text = serde_json::to_string(&prefs).expect("serialize");
        assert_eq!(EditorPreferences::from_json(&text), prefs);
    }
}
