use {
    clap::Args,
    indicatif::{ProgressBar, ProgressStyle},
    miette::IntoDiagnostic,
    rayon::iter::{IntoParallelRefIterator, ParallelIterator},
    std::path::{Path, PathBuf},
    storyflip::{Result, Story, StoryIssue},
};

#[derive(Args)]
#[command(author = "The storyflip authors")]
pub struct VerifyArgs {
    /// Story files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Only report stories that fail to load
    #[arg(long)]
    parse_only: bool,
}

enum Outcome {
    Clean { pages: usize },
    Issues(Vec<StoryIssue>),
    Unreadable(String),
}

fn check(path: &Path, parse_only: bool) -> Outcome {
    match Story::load(path) {
        Ok(story) if parse_only => Outcome::Clean {
            pages: story.page_count(),
        },
        Ok(story) => {
            let issues = story.issues();
            if issues.is_empty() {
                Outcome::Clean {
                    pages: story.page_count(),
                }
            } else {
                Outcome::Issues(issues)
            }
        }
        Err(err) => Outcome::Unreadable(format!("{:?}", miette::Report::from(err))),
    }
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let pb = ProgressBar::new(args.inputs.len() as u64)
        .with_message("Checking stories")
        .with_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len:4} {msg}")
                .into_diagnostic()?
                .progress_chars("##-"),
        );

    let outcomes: Vec<(&PathBuf, Outcome)> = args
        .inputs
        .par_iter()
        .map(|path| {
            let outcome = check(path, args.parse_only);
            pb.inc(1);
            (path, outcome)
        })
        .collect();

    pb.finish_and_clear();

    let mut failed = 0_usize;
    for (path, outcome) in &outcomes {
        match outcome {
            Outcome::Clean { pages } => {
                println!("\u{2713} {} ({pages} pages)", path.display());
            }
            Outcome::Issues(issues) => {
                failed = failed.saturating_add(1);
                println!("\u{2717} {}", path.display());
                for issue in issues {
                    println!("  \u{2022} {issue}");
                }
            }
            Outcome::Unreadable(report) => {
                failed = failed.saturating_add(1);
                println!("\u{2717} {}", path.display());
                println!("{report}");
            }
        }
    }

    if failed == 0 {
        println!("All {} stories passed", outcomes.len());
        Ok(())
    } else {
        Err(miette::miette!(
            "{failed} of {} stories have problems",
            outcomes.len()
        ))
    }
}
