use {
    super::theme::ThemePreset,
    clap::ValueEnum,
    serde::Deserialize,
    std::{
        fs,
        path::{Path, PathBuf},
        time::Duration,
    },
    storyflip::{DEFAULT_DRAG_THRESHOLD, Easing, FlipConfig, StoryError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookLayout {
    /// One page at a time, illustration under the text
    #[default]
    Single,
    /// Open book: text on the left leaf, illustration on the right
    Spread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureMode {
    /// Drag the page edge to turn it
    #[default]
    Drag,
    /// Quick left/right swipes turn pages
    Swipe,
}

/// Reader settings from `config.toml`, before command-line overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    pub flip_duration_ms: u64,
    pub drag_threshold: f32,
    pub easing: Easing,
    pub theme: ThemePreset,
    pub layout: BookLayout,
    pub gesture: GestureMode,
    pub autoplay_delay_secs: f32,
    pub sidebar_width: u16,
    pub resume: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            flip_duration_ms: 750,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            easing: Easing::default(),
            theme: ThemePreset::default(),
            layout: BookLayout::default(),
            gesture: GestureMode::default(),
            autoplay_delay_secs: 4.0,
            sidebar_width: 24,
            resume: true,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("storyflip").join("config.toml"))
}

impl ReaderConfig {
    /// Loads the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self, StoryError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, StoryError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|source| StoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded reader config from {}", path.display());
        Ok(config)
    }

    pub fn flip_config(&self) -> Result<FlipConfig, StoryError> {
        let config = FlipConfig {
            flip_duration: Duration::from_millis(self.flip_duration_ms),
            drag_threshold: self.drag_threshold,
            easing: self.easing,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn autoplay_delay(&self) -> Result<Duration, StoryError> {
        Duration::try_from_secs_f32(self.autoplay_delay_secs)
            .ok()
            .filter(|d| !d.is_zero())
            .ok_or_else(|| {
                StoryError::InvalidConfig(format!(
                    "autoplay delay must be a positive number of seconds, got {}",
                    self.autoplay_delay_secs
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::missing_panics_doc)]
    use {super::*, assert2::check as assert};

    #[test]
    fn test_defaults_match_flip_defaults() {
        let flip = ReaderConfig::default().flip_config().unwrap();
        assert!(flip == FlipConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "flip_duration_ms = 400\ntheme = \"moonlight\"\nlayout = \"spread\"\n")
            .unwrap();

        let config = ReaderConfig::load_from(&path).unwrap();
        assert!(config.flip_duration_ms == 400);
        assert!(config.theme == ThemePreset::Moonlight);
        assert!(config.layout == BookLayout::Spread);
        assert!(config.gesture == GestureMode::Drag);
        assert!(config.resume);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "flip_speed = 3\n").unwrap();

        assert!(matches!(
            ReaderConfig::load_from(&path),
            Err(StoryError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = ReaderConfig {
            drag_threshold: 0.0,
            ..ReaderConfig::default()
        };
        assert!(config.flip_config().is_err());

        let config = ReaderConfig {
            autoplay_delay_secs: -1.0,
            ..ReaderConfig::default()
        };
        assert!(config.autoplay_delay().is_err());
    }
}
