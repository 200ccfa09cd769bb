mod config;
mod render;
mod state;
mod theme;
mod tui;

use {
    self::{
        config::{BookLayout, GestureMode, ReaderConfig},
        theme::ThemePreset,
    },
    clap::Args,
    miette::Context,
    std::path::{Path, PathBuf},
    storyflip::{Easing, FlipController, Result, Story, StoryError, story},
};

#[derive(Args, Debug, Default)]
#[command(author = "The storyflip authors")]
pub struct ReadArgs {
    /// Story file (TOML) to read
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Read one of the bundled sample stories instead of a file
    #[arg(long, value_name = "SLUG")]
    pub sample: Option<String>,

    /// Open at this page (1-based), ignoring any saved position
    #[arg(long, short)]
    pub page: Option<usize>,

    /// Length of a page turn in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration: Option<u64>,

    /// Fraction of the page width a drag must travel to turn the page
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Easing curve for the page-turn animation
    #[arg(long, value_enum)]
    pub easing: Option<Easing>,

    /// Colour theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemePreset>,

    /// Page layout
    #[arg(long, value_enum)]
    pub layout: Option<BookLayout>,

    /// How the mouse turns pages
    #[arg(long, value_enum)]
    pub gesture: Option<GestureMode>,

    /// Seconds between pages in autoplay
    #[arg(long, value_name = "SECONDS")]
    pub autoplay_delay: Option<f32>,

    /// Start from the beginning instead of the saved position
    #[arg(long)]
    pub no_resume: bool,
}

impl ReadArgs {
    /// Command-line flags win over the config file.
    fn apply_to(&self, config: &mut ReaderConfig) {
        if let Some(ms) = self.duration {
            config.flip_duration_ms = ms;
        }
        if let Some(threshold) = self.threshold {
            config.drag_threshold = threshold;
        }
        if let Some(easing) = self.easing {
            config.easing = easing;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(gesture) = self.gesture {
            config.gesture = gesture;
        }
        if let Some(delay) = self.autoplay_delay {
            config.autoplay_delay_secs = delay;
        }
        if self.no_resume {
            config.resume = false;
        }
    }

    /// Loads the story and the key its reading position is saved under.
    fn open_story(&self) -> Result<(Story, PathBuf)> {
        if let Some(ref slug) = self.sample {
            let story = story::sample(slug)?;
            return Ok((story, sample_key(slug)));
        }

        let input = self
            .input
            .as_ref()
            .ok_or_else(|| miette::miette!("no story given; pass a file or --sample"))?;
        let story = Story::load(input)
            .with_context(|| format!("Failed to open story: {}", input.display()))?;
        Ok((story, input.clone()))
    }
}

fn sample_key(slug: &str) -> PathBuf {
    Path::new("sample://").join(slug)
}

/// Picks the opening page: an explicit `--page`, then the saved position,
/// then page 1. A finished story starts over.
fn opening_page(
    requested: Option<usize>,
    saved: &state::ReadingState,
    resume: bool,
    total: usize,
) -> std::result::Result<usize, StoryError> {
    if let Some(page) = requested {
        if !(1..=total).contains(&page) {
            return Err(StoryError::PageOutOfRange { page, total });
        }
        return Ok(page);
    }

    if !resume || saved.finished {
        return Ok(1);
    }

    Ok(saved.resume_page(total).unwrap_or(1))
}

pub fn execute(args: ReadArgs) -> Result<()> {
    let mut config = ReaderConfig::load()?;
    args.apply_to(&mut config);

    let (story, story_key) = args.open_story()?;
    let total = story.page_count();

    let saved = state::load_state(&story_key);
    let page = opening_page(args.page, &saved, config.resume, total)?;
    log::info!("opening \"{}\" at page {page} of {total}", story.title);

    let controller = FlipController::new(total, config.flip_config()?)?.starting_at(page)?;
    let finished = saved.finished && page == total;

    let mut app = tui::TuiApp::new(story, story_key, controller, config, finished)?;
    app.run()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::missing_panics_doc)]
    use {super::*, assert2::check as assert, state::ReadingState};

    #[test]
    fn test_flags_override_config() {
        let args = ReadArgs {
            duration: Some(300),
            theme: Some(ThemePreset::Ocean),
            no_resume: true,
            ..ReadArgs::default()
        };
        let mut config = ReaderConfig::default();
        args.apply_to(&mut config);

        assert!(config.flip_duration_ms == 300);
        assert!(config.theme == ThemePreset::Ocean);
        assert!(!config.resume);
        assert!(config.layout == BookLayout::Single);
    }

    #[test]
    fn test_opening_page_prefers_explicit_page() {
        let saved = ReadingState {
            current_page: 2,
            ..ReadingState::default()
        };
        assert!(opening_page(Some(3), &saved, true, 4).unwrap() == 3);
        assert!(opening_page(None, &saved, true, 4).unwrap() == 2);
        assert!(opening_page(None, &saved, false, 4).unwrap() == 1);
    }

    #[test]
    fn test_opening_page_rejects_out_of_range() {
        let saved = ReadingState::default();
        assert!(matches!(
            opening_page(Some(5), &saved, true, 3),
            Err(StoryError::PageOutOfRange { page: 5, total: 3 })
        ));
        assert!(opening_page(Some(0), &saved, true, 3).is_err());
    }

    #[test]
    fn test_finished_story_starts_over() {
        let saved = ReadingState {
            current_page: 3,
            finished: true,
            ..ReadingState::default()
        };
        assert!(opening_page(None, &saved, true, 3).unwrap() == 1);
    }

    #[test]
    fn test_sample_story_opens_with_sample_key() {
        let args = ReadArgs {
            sample: Some("moon-balloon".to_string()),
            ..ReadArgs::default()
        };
        let (story, key) = args.open_story().unwrap();
        assert!(story.page_count() == 4);
        assert!(key == Path::new("sample://moon-balloon"));
    }
}
