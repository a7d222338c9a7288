use clap::Parser;
use pivot_install::cli::Cli;
use pivot_install::{InstallOptions, Installer, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let options = InstallOptions {
        dry_run: cli.dry_run,
        quiet: cli.json,
    };

    let report = Installer::from_environment(options)?.run()?;

    if cli.json {
        ui::json(&report)?;
    }

    Ok(())
}
