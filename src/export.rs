//! PDF export pipeline
//!
//! Persists the filled document to a scoped temporary `.docx`, hands it to
//! the converter, then moves the produced PDF to its final collision-free
//! name. The temporary file is removed on every exit path, converter
//! failure included.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::convert::Converter;
use crate::docx::Document;
use crate::error::{CovergenError, CovergenResult};
use crate::values::DATE_FORMAT;

/// Characters stripped from the company portion of the artifact name
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Fallback when the company name is empty or entirely invalid
const UNKNOWN_COMPANY: &str = "Unknown";

/// Strip filename-invalid characters and trim. Characters outside the
/// invalid set (Unicode included) pass through untouched.
pub fn sanitize_company(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Candidate artifact name for a sanitized company and date
fn artifact_name(company: &str, date: NaiveDate, counter: Option<u32>) -> String {
    let date = date.format(DATE_FORMAT);
    match counter {
        None => format!("CoverLetter_{company}_{date}.pdf"),
        Some(n) => format!("CoverLetter_{company}_{date}_{n}.pdf"),
    }
}

/// First artifact path under `out_dir` that does not exist yet,
/// appending `_1`, `_2`, … on collision. Never overwrites.
fn free_artifact_path(out_dir: &Path, company: &str, date: NaiveDate) -> PathBuf {
    let mut candidate = out_dir.join(artifact_name(company, date, None));
    let mut counter = 1u32;
    while candidate.exists() {
        candidate = out_dir.join(artifact_name(company, date, Some(counter)));
        counter += 1;
    }
    candidate
}

/// Export the filled document as a PDF under `out_dir`, named from the
/// company string and today's date. Returns the final artifact path.
pub fn export_pdf(
    doc: &Document,
    company: &str,
    out_dir: &Path,
    converter: &dyn Converter,
) -> CovergenResult<PathBuf> {
    export_pdf_dated(doc, company, out_dir, converter, Local::now().date_naive())
}

/// Date-injected body of [`export_pdf`]
pub fn export_pdf_dated(
    doc: &Document,
    company: &str,
    out_dir: &Path,
    converter: &dyn Converter,
    date: NaiveDate,
) -> CovergenResult<PathBuf> {
    let company = sanitize_company(company);

    // Dropped on every return below, which removes the file
    let temp = tempfile::Builder::new()
        .prefix("covergen-")
        .suffix(".docx")
        .tempfile()?;

    doc.save(temp.path())?;
    converter.convert_to_pdf(temp.path(), out_dir)?;

    let stem = temp
        .path()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let produced = out_dir.join(format!("{stem}.pdf"));
    if !produced.exists() {
        return Err(CovergenError::ConverterOutputMissing { path: produced });
    }

    let final_path = free_artifact_path(out_dir, &company, date);
    std::fs::rename(&produced, &final_path)?;

    Ok(final_path)
}
