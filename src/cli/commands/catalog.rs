use {
    super::read::{self, ReadArgs},
    clap::Args,
    hashbrown::HashSet,
    inquire::Select,
    miette::IntoDiagnostic,
    std::{
        fmt, fs,
        path::{Path, PathBuf},
    },
    storyflip::{Result, Story, story},
};

#[derive(Args)]
#[command(author = "The storyflip authors")]
pub struct CatalogArgs {
    /// Directory to scan for `*.toml` stories
    dir: Option<PathBuf>,

    /// Choose a story interactively and open it in the reader
    #[arg(long)]
    pick: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Sample(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
struct Entry {
    source: Source,
    title: String,
    pages: usize,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = match &self.source {
            Source::Sample(slug) => format!("sample {slug}"),
            Source::File(path) => path.display().to_string(),
        };
        write!(f, "{} ({} pages) [{origin}]", self.title, self.pages)
    }
}

fn sample_entries() -> Vec<Entry> {
    story::sample_slugs()
        .filter_map(|slug| match story::sample(slug) {
            Ok(story) => Some(Entry {
                source: Source::Sample(slug.to_string()),
                pages: story.page_count(),
                title: story.title,
            }),
            Err(err) => {
                log::warn!("bundled sample {slug} does not load: {err}");
                None
            }
        })
        .collect()
}

/// Stories in `dir`, naturally ordered by file name. Files that fail to
/// parse are skipped with a warning; duplicate canonical paths are dropped.
fn directory_entries(dir: &Path) -> Result<Vec<Entry>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .into_diagnostic()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
        })
        .collect();

    alphanumeric_sort::sort_path_slice(&mut paths);

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let key = path.canonicalize().unwrap_or_else(|_| path.clone());
        if !seen.insert(key) {
            continue;
        }

        match Story::load(&path) {
            Ok(story) => entries.push(Entry {
                title: story.title.clone(),
                pages: story.page_count(),
                source: Source::File(path),
            }),
            Err(err) => log::warn!("skipping {}: {err}", path.display()),
        }
    }

    Ok(entries)
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    let mut entries = sample_entries();
    if let Some(ref dir) = args.dir {
        entries.extend(directory_entries(dir)?);
    }

    if !args.pick {
        for (i, entry) in entries.iter().enumerate() {
            let prefix = if i.saturating_add(1) == entries.len() {
                "\u{2514}"
            } else {
                "\u{251c}"
            };
            println!("  {prefix} {entry}");
        }
        return Ok(());
    }

    let choice = Select::new("Which story?", entries)
        .with_page_size(12)
        .prompt()
        .into_diagnostic()?;

    let args = match choice.source {
        Source::Sample(slug) => ReadArgs {
            sample: Some(slug),
            ..ReadArgs::default()
        },
        Source::File(path) => ReadArgs {
            input: Some(path),
            ..ReadArgs::default()
        },
    };

    read::execute(args)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::missing_panics_doc)]
    use {super::*, assert2::check as assert};

    fn write_story(dir: &Path, name: &str, title: &str) {
        fs::write(
            dir.join(name),
            format!("title = \"{title}\"\n\n[[pages]]\ntext = \"Once.\"\n"),
        )
        .unwrap();
    }

    #[test]
    fn test_samples_are_listed() {
        let entries = sample_entries();
        assert!(entries.len() == story::sample_slugs().count());
        assert!(
            entries
                .iter()
                .any(|e| e.source == Source::Sample("moon-balloon".to_string()))
        );
    }

    #[test]
    fn test_directory_entries_use_natural_order_and_skip_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        write_story(dir.path(), "story10.toml", "Ten");
        write_story(dir.path(), "story2.toml", "Two");
        fs::write(dir.path().join("broken.toml"), "title = ").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a story").unwrap();

        let entries = directory_entries(dir.path()).unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert!(titles == ["Two", "Ten"]);
    }
}
