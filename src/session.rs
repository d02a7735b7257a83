//! Interactive session driver
//!
//! Loops over: list templates, read a selection, load, scan, collect,
//! fill, export. Every failure short of a broken terminal is recoverable
//! at the loop; only explicit `exit` or running out of templates ends the
//! session.

use std::path::{Path, PathBuf};

use dialoguer::Input;

use crate::config::Config;
use crate::convert::Converter;
use crate::docx::Document;
use crate::error::{CovergenError, CovergenResult};
use crate::{export, fill, placeholder, values};

/// Value Set keys tried, in order, for the artifact's company portion
const COMPANY_KEYS: &[&str] = &["Company Name", "Company", "Employer"];

/// Filename prefix stripped from menu display names
const TEMPLATE_PREFIX: &str = "[Template]_";

/// One interactive session over a template directory
pub struct Session<'a> {
    config: &'a Config,
    converter: &'a dyn Converter,
}

/// Parsed menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    Exit,
    Pick(usize),
    Invalid,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a Config, converter: &'a dyn Converter) -> Self {
        Self { config, converter }
    }

    /// Run the menu loop until `exit` or no templates remain
    pub fn run(&self) -> CovergenResult<()> {
        println!("\n{}", "=".repeat(50));
        println!("       Cover Letter Generator");
        println!("{}", "=".repeat(50));

        loop {
            // Re-read each iteration so new templates show up
            let templates = list_templates(&self.config.templates_dir)?;

            if templates.is_empty() {
                println!(
                    "\nNo templates found in {}.",
                    self.config.templates_dir.display()
                );
                break;
            }

            println!("\nAvailable templates:");
            println!("{}", "-".repeat(40));
            for (i, template) in templates.iter().enumerate() {
                println!("  {}. {}", i + 1, display_name(template));
            }
            println!("\n  Type 'exit' to quit");

            let choice: String = Input::new()
                .with_prompt("Select template number")
                .allow_empty(true)
                .interact_text()?;

            let template = match parse_selection(&choice, templates.len()) {
                Selection::Exit => {
                    println!("\nGoodbye!");
                    break;
                }
                Selection::Pick(idx) => &templates[idx],
                Selection::Invalid => {
                    println!("\nInvalid input. Please enter a number or 'exit'.");
                    continue;
                }
            };

            self.fill_one(template)?;
            println!("\n{}", "-".repeat(50));
        }

        Ok(())
    }

    /// Load, scan, collect, fill, and export one template
    fn fill_one(&self, template: &Path) -> CovergenResult<()> {
        println!(
            "\nLoading template: {}",
            template.file_name().unwrap_or_default().to_string_lossy()
        );
        let mut doc = Document::open(template)?;

        let placeholders = placeholder::scan(&doc);
        if placeholders.is_empty() {
            println!("\nNo placeholders found in this template.");
            return Ok(());
        }

        println!("\nFound {} placeholder(s):", placeholders.len());
        for name in &placeholders {
            println!("  - [{name}]");
        }

        let values = values::collect_values(&placeholders)?;
        fill::fill_document(&mut doc, &values);

        let company = values.first_of(COMPANY_KEYS).unwrap_or("");

        println!("\nGenerating PDF...");
        match export::export_pdf(&doc, company, &self.config.outputs_dir, self.converter) {
            Ok(artifact) => println!("\nSaved: {}", artifact.display()),
            // Converter trouble is a session-level condition, not a crash
            Err(err) => eprintln!("\nError converting to PDF: {err}"),
        }

        Ok(())
    }
}

/// All `.docx` templates in a directory, filesystem-sorted
pub fn list_templates(dir: &Path) -> CovergenResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CovergenError::TemplatesDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut templates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
        })
        .collect();
    templates.sort();
    Ok(templates)
}

/// Menu label for a template: stem without the `[Template]_` prefix,
/// underscores rendered as spaces
pub fn display_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.strip_prefix(TEMPLATE_PREFIX)
        .unwrap_or(&stem)
        .replace('_', " ")
}

/// Interpret a menu line: `exit`, a 1-based index, or anything else
pub(crate) fn parse_selection(input: &str, count: usize) -> Selection {
    let input = input.trim();
    if input.eq_ignore_ascii_case("exit") {
        return Selection::Exit;
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Selection::Pick(n - 1),
        _ => Selection::Invalid,
    }
}
