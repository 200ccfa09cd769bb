use {
    miette::IntoDiagnostic,
    serde::{Deserialize, Serialize},
    std::{
        fs,
        path::{Path, PathBuf},
    },
    xxhash_rust::xxh3::xxh3_64,
};

/// Where a reader left a story.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReadingState {
    /// 1-based page; 0 means never opened.
    pub current_page: usize,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub source_path: String,
}

impl ReadingState {
    /// Page to reopen at, if the saved one still exists in a story of
    /// `total_pages` pages.
    pub const fn resume_page(&self, total_pages: usize) -> Option<usize> {
        if self.current_page >= 1 && self.current_page <= total_pages {
            Some(self.current_page)
        } else {
            None
        }
    }
}

fn saves_directory() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("storyflip").join("saves"))
}

fn save_filename(story_key: &Path) -> String {
    let canonical = story_key
        .canonicalize()
        .unwrap_or_else(|_| story_key.to_path_buf());
    let hash = xxh3_64(canonical.to_string_lossy().as_bytes());
    format!("{hash:016x}.toml")
}

pub fn load_state(story_key: &Path) -> ReadingState {
    saves_directory().map_or_else(ReadingState::default, |dir| load_state_in(&dir, story_key))
}

fn load_state_in(dir: &Path, story_key: &Path) -> ReadingState {
    let path = dir.join(save_filename(story_key));
    match fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable save {}: {err}", path.display());
            ReadingState::default()
        }),
        Err(_) => ReadingState::default(),
    }
}

pub fn save_state(story_key: &Path, state: &ReadingState) -> miette::Result<()> {
    let dir =
        saves_directory().ok_or_else(|| miette::miette!("Could not determine data directory"))?;
    save_state_in(&dir, story_key, state)
}

fn save_state_in(dir: &Path, story_key: &Path, state: &ReadingState) -> miette::Result<()> {
    fs::create_dir_all(dir).into_diagnostic()?;

    let path = dir.join(save_filename(story_key));
    let serialized = toml::to_string_pretty(state).into_diagnostic()?;
    fs::write(&path, serialized).into_diagnostic()?;

    log::debug!("saved reading position to {}", path.display());
    Ok(())
}
