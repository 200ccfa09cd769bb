use {miette::Diagnostic, std::path::PathBuf, thiserror::Error};

/// Errors raised while loading stories or validating reader settings.
///
/// The flip controller itself never fails; rejected transitions are plain
/// `false` returns. These variants cover the edges around it.
#[derive(Debug, Error, Diagnostic)]
pub enum StoryError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(storyflip::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to parse story file {}", path.display())]
    #[diagnostic(
        code(storyflip::parse),
        help("story files are TOML with a `title` and one `[[pages]]` table per page")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Story \"{0}\" has no pages")]
    #[diagnostic(code(storyflip::empty_story))]
    EmptyStory(String),

    #[error("Unknown sample story: {0}")]
    #[diagnostic(
        code(storyflip::unknown_sample),
        help("run `storyflip catalog` to list the bundled samples")
    )]
    UnknownSample(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(storyflip::config))]
    InvalidConfig(String),

    #[error("Page {page} is out of range (story has {total} pages)")]
    #[diagnostic(code(storyflip::page_range))]
    PageOutOfRange { page: usize, total: usize },
}

/// Crate-wide result, reported through `miette`.
pub type Result<T> = miette::Result<T>;
