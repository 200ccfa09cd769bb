//! storyflip - a page-turning storybook reader for the terminal
mod cli;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().color(true).build())
    }))
    .ok();

    if let Err(err) = cli::app() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}
