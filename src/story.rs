//! Story data: an ordered, read-only sequence of pages.

use {
    crate::{
        StoryError,
        types::{self, MediaKind},
    },
    serde::{Deserialize, Serialize},
    std::{
        fmt, fs,
        path::{Path, PathBuf},
    },
};

/// One page of a story.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoryPage {
    #[serde(default)]
    pub text: String,
    /// Still image shown alongside the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
    /// Video or other media shown instead of (or besides) the illustration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl StoryPage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_illustration(mut self, reference: impl Into<String>) -> Self {
        self.illustration = Some(reference.into());
        self
    }

    pub fn with_media(mut self, reference: impl Into<String>) -> Self {
        self.media = Some(reference.into());
        self
    }

    /// Every asset reference on the page, illustration first.
    pub fn assets(&self) -> impl Iterator<Item = &str> {
        self.illustration
            .as_deref()
            .into_iter()
            .chain(self.media.as_deref())
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.illustration.is_none() && self.media.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub pages: Vec<StoryPage>,
    /// Directory relative asset references resolve against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Story {
    pub fn new(title: impl Into<String>, pages: Vec<StoryPage>) -> Result<Self, StoryError> {
        let story = Self {
            title: title.into(),
            author: None,
            summary: None,
            pages,
            base_dir: None,
        };
        story.ensure_pages()?;
        Ok(story)
    }

    pub fn from_toml_str(source: &str, origin: &Path) -> Result<Self, StoryError> {
        let story: Self = toml::from_str(source).map_err(|source| StoryError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        story.ensure_pages()?;
        Ok(story)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let mut story = Self::from_toml_str(&contents, path)?;
        story.base_dir = path.parent().map(Path::to_path_buf);

        log::debug!(
            "loaded \"{}\" ({} pages) from {}",
            story.title,
            story.page_count(),
            path.display()
        );

        Ok(story)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page by 1-based number.
    pub fn page(&self, number: usize) -> Option<&StoryPage> {
        self.pages.get(number.checked_sub(1)?)
    }

    /// Resolves a local asset reference against the story's directory.
    /// Remote references yield `None`.
    pub fn resolve_asset(&self, reference: &str) -> Option<PathBuf> {
        if types::is_remote(reference) {
            return None;
        }

        let path = Path::new(reference);
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.to_path_buf()),
        }
    }

    /// Checks every page and asset, returning human-readable problems.
    pub fn issues(&self) -> Vec<StoryIssue> {
        let mut issues = Vec::new();

        for (idx, page) in self.pages.iter().enumerate() {
            let number = idx.saturating_add(1);

            if page.is_blank() {
                issues.push(StoryIssue::new(number, "page has no text or media"));
            }

            for reference in page.assets() {
                if MediaKind::classify(reference) == MediaKind::Unknown {
                    issues.push(StoryIssue::new(
                        number,
                        format!("unrecognised media type: {reference}"),
                    ));
                }

                if let Some(path) = self.resolve_asset(reference)
                    && !path.exists()
                {
                    issues.push(StoryIssue::new(
                        number,
                        format!("missing asset file: {}", path.display()),
                    ));
                }
            }
        }

        issues
    }

    fn ensure_pages(&self) -> Result<(), StoryError> {
        if self.pages.is_empty() {
            return Err(StoryError::EmptyStory(self.title.clone()));
        }
        Ok(())
    }
}

/// A validation finding on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryIssue {
    pub page: usize,
    pub message: String,
}

impl StoryIssue {
    fn new(page: usize, message: impl Into<String>) -> Self {
        Self {
            page,
            message: message.into(),
        }
    }
}

impl fmt::Display for StoryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}: {}", self.page, self.message)
    }
}

/// Stories compiled into the crate, keyed by slug.
pub const SAMPLES: &[(&str, &str)] = &[
    (
        "moon-balloon",
        include_str!("../stories/moon-balloon.toml"),
    ),
    ("brave-hero", include_str!("../stories/brave-hero.toml")),
];

pub fn sample(slug: &str) -> Result<Story, StoryError> {
    let (_, source) = SAMPLES
        .iter()
        .find(|(name, _)| *name == slug)
        .ok_or_else(|| StoryError::UnknownSample(slug.to_string()))?;

    Story::from_toml_str(source, Path::new(slug))
}

pub fn sample_slugs() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|(slug, _)| *slug)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::missing_panics_doc)]
    use {super::*, assert2::check as assert, std::io::Write};

    #[test]
    fn test_parse_minimal_story() {
        let source = r#"
            title = "Tiny"

            [[pages]]
            text = "Hello"

            [[pages]]
            illustration = "one.png"
        "#;

        let story = Story::from_toml_str(source, Path::new("tiny.toml")).unwrap();
        assert!(story.title == "Tiny");
        assert!(story.page_count() == 2);
        assert!(story.page(1).map(|p| p.text.as_str()) == Some("Hello"));
        assert!(story.page(2).unwrap().text.is_empty());
        assert!(story.page(0).is_none());
        assert!(story.page(3).is_none());
    }

    #[test]
    fn test_story_without_pages_is_rejected() {
        let err = Story::from_toml_str("title = \"Nothing\"\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, StoryError::EmptyStory(ref title) if title == "Nothing"));
        assert!(Story::new("Empty", Vec::new()).is_err());
    }

    #[test]
    fn test_malformed_story_reports_path() {
        let err = Story::from_toml_str("title = ", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, StoryError::Parse { ref path, .. } if path == Path::new("broken.toml")));
    }

    #[test]
    fn test_samples_load() {
        for slug in sample_slugs() {
            let story = sample(slug).unwrap();
            assert!(story.page_count() >= 2, "{slug}");
        }
        assert!(matches!(sample("nope"), Err(StoryError::UnknownSample(_))));
    }

    #[test]
    fn test_load_resolves_relative_assets() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cover.png"), b"not really a png").unwrap();

        let story_path = dir.path().join("story.toml");
        let mut file = fs::File::create(&story_path).unwrap();
        writeln!(
            file,
            "title = \"Local\"\n\n[[pages]]\ntext = \"a\"\nillustration = \"cover.png\"\n\n[[pages]]\ntext = \"b\"\nillustration = \"gone.png\""
        )
        .unwrap();

        let story = Story::load(&story_path).unwrap();
        assert!(story.resolve_asset("cover.png") == Some(dir.path().join("cover.png")));
        assert!(story.resolve_asset("https://example.com/a.png").is_none());

        let issues = story.issues();
        assert!(issues.len() == 1);
        assert!(issues[0].page == 2);
        assert!(issues[0].message.contains("missing asset file"));
    }

    #[test]
    fn test_issues_flag_blank_pages_and_unknown_media() {
        let story = Story::new(
            "Odd",
            vec![
                StoryPage::new("  "),
                StoryPage::new("ok").with_media("clip.xyz"),
                StoryPage::new("remote").with_media("https://example.com/stream"),
            ],
        )
        .unwrap();

        let issues = story.issues();
        assert!(issues.len() == 3);
        assert!(issues[0].to_string() == "page 1: page has no text or media");
        assert!(issues[1].message.starts_with("unrecognised media type"));
        assert!(issues[2].message.starts_with("missing asset file"));
        assert!(issues.iter().all(|issue| issue.page != 3));
    }

    #[test]
    fn test_page_assets_order() {
        let page = StoryPage::new("x")
            .with_illustration("a.png")
            .with_media("b.mp4");
        let assets: Vec<&str> = page.assets().collect();
        assert!(assets == vec!["a.png", "b.mp4"]);
    }
}
