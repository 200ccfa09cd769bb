use {
    clap::Args,
    miette::Context,
    std::path::PathBuf,
    storyflip::{MediaKind, Result, Story, story},
};

#[derive(Args)]
#[command(author = "The storyflip authors")]
pub struct InfoArgs {
    /// Story file (TOML)
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Describe a bundled sample instead of a file
    #[arg(long, value_name = "SLUG")]
    sample: Option<String>,
}

fn tree_prefix(index: usize, len: usize) -> &'static str {
    if index.saturating_add(1) == len {
        "\u{2514}"
    } else {
        "\u{251c}"
    }
}

fn excerpt(text: &str, width: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(width).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn execute(args: InfoArgs) -> Result<()> {
    let (story, origin) = match (args.sample, args.input) {
        (Some(slug), _) => (story::sample(&slug)?, format!("sample {slug}")),
        (None, Some(input)) => {
            let story = Story::load(&input)
                .with_context(|| format!("Failed to open story: {}", input.display()))?;
            (story, input.display().to_string())
        }
        (None, None) => return Err(miette::miette!("no story given; pass a file or --sample")),
    };

    println!("--- Storybook Info");
    println!("--- Source: {origin}");
    println!("--- Title: {}", story.title);
    if let Some(ref author) = story.author {
        println!("--- Author: {author}");
    }
    if let Some(ref summary) = story.summary {
        println!("--- Summary: {summary}");
    }
    println!("--- Pages: {}", story.page_count());

    println!();
    let total = story.page_count();
    for (i, page) in story.pages.iter().enumerate() {
        let number = i.saturating_add(1);
        println!(
            "  {} {:>3}. {}",
            tree_prefix(i, total),
            number,
            excerpt(&page.text, 40)
        );

        let assets: Vec<&str> = page.assets().collect();
        for (j, reference) in assets.iter().enumerate() {
            let kind = MediaKind::classify(reference);
            let pipe = if i.saturating_add(1) == total {
                " "
            } else {
                "\u{2502}"
            };
            println!(
                "  {pipe}    {} {:<8} {reference}",
                tree_prefix(j, assets.len()),
                kind.label(),
            );
        }
    }

    let issues = story.issues();
    if !issues.is_empty() {
        println!();
        println!("--- Issues:");
        for (i, issue) in issues.iter().enumerate() {
            println!("  {} {issue}", tree_prefix(i, issues.len()));
        }
    }

    println!("---");

    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, assert2::check as assert};

    #[test]
    fn test_excerpt_truncates_long_text() {
        assert!(excerpt("short", 10) == "short");
        assert!(excerpt("a much longer line", 6) == "a much...");
    }

    #[test]
    fn test_tree_prefix_marks_last_entry() {
        assert!(tree_prefix(0, 2) == "\u{251c}");
        assert!(tree_prefix(1, 2) == "\u{2514}");
    }
}
