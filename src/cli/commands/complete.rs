use {
    clap::{Args, Command, CommandFactory, ValueEnum},
    clap_complete::Generator,
    storyflip::Result,
};

#[allow(clippy::enum_variant_names)]
#[derive(Debug, ValueEnum, Clone)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    PowerShell,
    Zsh,
    Nushell,
    Clink,
    Fig,
}

impl Generator for Shell {
    fn file_name(&self, name: &str) -> String {
        match self {
            Shell::Bash => format!("{}.bash", name),
            Shell::Elvish => format!("{}.elv", name),
            Shell::Fish => format!("{}.fish", name),
            Shell::PowerShell => format!("_{}.ps1", name),
            Shell::Zsh => format!("_{}", name),
            Shell::Nushell => clap_complete_nushell::Nushell.file_name(name),
            Shell::Clink => clap_complete_clink::Clink.file_name(name),
            Shell::Fig => clap_complete_fig::Fig.file_name(name),
        }
    }

    fn generate(&self, cmd: &Command, buf: &mut dyn std::io::Write) {
        match self {
            Shell::Bash => clap_complete::shells::Bash.generate(cmd, buf),
            Shell::Elvish => clap_complete::shells::Elvish.generate(cmd, buf),
            Shell::Fish => clap_complete::shells::Fish.generate(cmd, buf),
            Shell::PowerShell => clap_complete::shells::PowerShell.generate(cmd, buf),
            Shell::Zsh => clap_complete::shells::Zsh.generate(cmd, buf),
            Shell::Nushell => clap_complete_nushell::Nushell.generate(cmd, buf),
            Shell::Clink => clap_complete_clink::Clink.generate(cmd, buf),
            Shell::Fig => clap_complete_fig::Fig.generate(cmd, buf),
        }
    }
}

#[derive(Args)]
#[command(author = "The storyflip authors")]
pub struct CompleteArgs {
    /// Shell to generate completions for
    shell: Shell,
}

pub fn execute(args: CompleteArgs) -> Result<()> {
    let mut app = crate::cli::Cli::command();
    let bin_name = app.get_name().to_string();
    log::debug!("generating {:?} completions for {bin_name}", args.shell);
    clap_complete::generate(args.shell, &mut app, bin_name, &mut std::io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, assert2::check as assert};

    #[test]
    fn test_completion_file_names() {
        assert!(Shell::Bash.file_name("storyflip") == "storyflip.bash");
        assert!(Shell::Zsh.file_name("storyflip") == "_storyflip");
        assert!(Shell::PowerShell.file_name("storyflip") == "_storyflip.ps1");
    }

    #[test]
    fn test_generates_fish_script_for_every_command() {
        let mut buf = Vec::new();
        let cmd = crate::cli::Cli::command();
        Shell::Fish.generate(&cmd, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        for sub in ["read", "info", "verify", "catalog"] {
            assert!(script.contains(sub));
        }
    }
}
