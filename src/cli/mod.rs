mod commands;

use {
    miette::IntoDiagnostic,
    std::{fs::File, path::PathBuf},
};

const LOG_ENV: &str = "STORYFLIP_LOG";

#[derive(clap::Parser)]
#[command(
    name = "storyflip",
    version,
    about = "Page-turning storybook reader for the terminal",
    long_about = None
)]
pub struct Cli {
    /// Write logs to this file (filter with STORYFLIP_LOG, default `info`)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Print help as markdown
    Docs,

    /// Read a story in the terminal
    Read(commands::read::ReadArgs),

    /// Display story information
    Info(commands::info::InfoArgs),

    /// Check story files for missing pages and assets
    Verify(commands::verify::VerifyArgs),

    /// List bundled samples and stories in a directory
    Catalog(commands::catalog::CatalogArgs),

    /// Generate CLI completions
    Complete(commands::complete::CompleteArgs),
}

/// Logs stay silent unless asked for, since the reader owns the terminal.
fn init_logging(log_file: Option<&PathBuf>) -> storyflip::Result<()> {
    let filter = std::env::var(LOG_ENV).ok();
    if filter.is_none() && log_file.is_none() {
        return Ok(());
    }

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filter.as_deref().unwrap_or("info"));

    if let Some(path) = log_file {
        let file = File::create(path).into_diagnostic()?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().into_diagnostic()?;
    Ok(())
}

pub fn app() -> storyflip::Result<()> {
    let argv = <Cli as clap::Parser>::parse();
    init_logging(argv.log_file.as_ref())?;

    match argv.command {
        Commands::Docs => {
            clap_markdown::print_help_markdown::<Cli>();
            Ok(())
        }

        Commands::Read(args) => commands::read::execute(args),
        Commands::Info(args) => commands::info::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::Catalog(args) => commands::catalog::execute(args),
        Commands::Complete(args) => commands::complete::execute(args),
    }
}
