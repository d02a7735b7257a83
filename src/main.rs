//! covergen CLI - interactive cover-letter generator
//!
//! Usage: covergen [COMMAND]
//!
//! Commands:
//!   run     Interactive session: pick a template, fill it, export a PDF (default)
//!   list    List available templates
//!   doctor  Validate the environment (directories, converter)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use covergen::convert::{Converter, SofficeConverter};
use covergen::{session, Config, Session};

/// covergen - fill .docx cover-letter templates and export PDFs
#[derive(Parser, Debug)]
#[command(name = "covergen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory scanned for .docx templates
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Directory where exported PDFs land
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive session: pick a template, fill it, export a PDF
    Run,

    /// List available templates
    List,

    /// Validate the environment (directories present, converter available)
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::discover();
    if let Some(dir) = cli.templates_dir {
        config.templates_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.outputs_dir = dir;
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&config),
        Commands::List => cmd_list(&config),
        Commands::Doctor => cmd_doctor(&config),
    }
}

fn cmd_run(config: &Config) -> Result<()> {
    let converter = SofficeConverter::from_config(config);
    Session::new(config, &converter)
        .run()
        .context("session failed")
}

fn cmd_list(config: &Config) -> Result<()> {
    let templates = session::list_templates(&config.templates_dir)?;

    if templates.is_empty() {
        println!("No templates found in {}.", config.templates_dir.display());
        return Ok(());
    }

    println!("Templates in {}:", config.templates_dir.display());
    for (i, template) in templates.iter().enumerate() {
        println!("  {}. {}", i + 1, session::display_name(template));
    }

    Ok(())
}

fn cmd_doctor(config: &Config) -> Result<()> {
    println!("🩺 covergen doctor");
    println!();

    let mut errors = 0;

    if config.templates_dir.is_dir() {
        let count = session::list_templates(&config.templates_dir)
            .map(|t| t.len())
            .unwrap_or(0);
        println!(
            "  ✓ templates directory: {} ({} template(s))",
            config.templates_dir.display(),
            count
        );
    } else {
        println!(
            "  ✗ templates directory missing: {}",
            config.templates_dir.display()
        );
        errors += 1;
    }

    if config.outputs_dir.is_dir() {
        println!("  ✓ output directory: {}", config.outputs_dir.display());
    } else {
        println!(
            "  ✗ output directory missing: {} (create it before exporting)",
            config.outputs_dir.display()
        );
        errors += 1;
    }

    let converter = SofficeConverter::from_config(config);
    if converter.is_available() {
        println!(
            "  ✓ converter: {} ({})",
            converter.name(),
            converter.program().display()
        );
    } else {
        println!(
            "  ✗ converter not available: {} ({})",
            converter.name(),
            converter.program().display()
        );
        errors += 1;
    }

    println!();
    if errors > 0 {
        println!("🔴 {errors} check(s) failed.");
        std::process::exit(1);
    }
    println!("🟢 All checks passed!");

    Ok(())
}
