//! dependabot-gen - Generate dependabot.yml from package.json version ranges
//!
//! Reads one or more package.json files, works out which semver update classes
//! each declared range already allows, and writes a Dependabot config that
//! ignores the rest.

use clap::Parser;
use colored::Colorize;
use dependabot_gen::cli::CliArgs;
use dependabot_gen::generator::Generator;
use dependabot_gen::output::{print_config, write_config};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!(
                "{}",
                "There were unhandled errors during the dependabot config generation".red()
            );
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let generator = Generator::in_current_dir(args.generator_options());

    if args.verbose {
        eprintln!("dependabot-gen v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Root: {}", generator.root().display());
        for manifest in &args.manifests {
            eprintln!("Manifest: {}", manifest.display());
        }
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let config = generator.generate_with_progress(&args.manifests, args.show_progress())?;

    if args.verbose {
        for update in &config.updates {
            eprintln!(
                "  {} {} ignore rule(s)",
                update.directory.bold(),
                update.ignore.len()
            );
        }
    }

    if args.dry_run {
        let mut stdout = io::stdout().lock();
        print_config(&config, &mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let path = write_config(&config, &args.output)?;

    if !args.quiet {
        eprintln!(
            "{} {} ({} update block(s))",
            "Wrote".green(),
            path.display(),
            config.updates.len()
        );
    }

    Ok(ExitCode::SUCCESS)
}
