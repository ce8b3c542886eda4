//! Settings model.

use crate::style::widgets::ThemeMode;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde", default)]
    pub theme_mode: ThemeMode,
}

/// Serde helpers for `ThemeMode`, which lives in the style layer.
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_as_string() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"theme_mode":"dark"}"#);
        assert_eq!(serde_json::from_str::<AppSettings>(&json).unwrap(), settings);
    }

    #[test]
    fn test_unknown_or_missing_theme_is_light() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode":"sepia"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }
}
