//! Run-preserving substitution
//!
//! Replaces `[Name]` tokens inside run text payloads, leaving everything
//! else in the paragraph untouched. Because only the `<w:t>` character
//! content is spliced, a run's formatting (font, bold, size) survives
//! exactly as authored.
//!
//! A token is only replaced when the whole `[Name]` sits within a single
//! run. A token whose brackets were split across runs by earlier
//! formatting edits is left as-is; closing that gap would require
//! matching against concatenated run text and re-splitting replacement
//! text over the original run boundaries.

use crate::docx::{self, Document, RUN_TEXT};
use crate::placeholder;
use crate::values::ValueSet;

/// Replace every single-run `[Name]` occurrence for every name in the
/// value set, across all paragraphs including table cells. Names that
/// never occur in the document are silent no-ops.
pub fn fill_document(doc: &mut Document, values: &ValueSet) {
    if values.is_empty() {
        return;
    }

    let ranges = doc.paragraph_ranges();
    let mut body = doc.body().to_string();

    // Reverse order keeps earlier ranges valid while splicing
    for (start, end) in ranges.into_iter().rev() {
        let para = body[start..end].to_string();

        // Cheap whole-paragraph scan; most paragraphs have no fields
        if !placeholder::contains_placeholder(&docx::paragraph_text(&para)) {
            continue;
        }

        let filled = fill_paragraph(&para, values);
        if filled != para {
            body.replace_range(start..end, &filled);
        }
    }

    doc.set_body(body);
}

/// Apply run-local replacement within one paragraph fragment
fn fill_paragraph(para: &str, values: &ValueSet) -> String {
    let runs: Vec<(usize, usize, String)> = RUN_TEXT
        .captures_iter(para)
        .filter_map(|caps| caps.get(1))
        .map(|m| (m.start(), m.end(), m.as_str().to_string()))
        .collect();

    let mut result = para.to_string();
    for (start, end, raw) in runs.into_iter().rev() {
        let decoded = docx::decode_text(&raw);
        let mut replaced = decoded.clone();
        for (name, value) in values.iter() {
            let token = format!("[{name}]");
            if replaced.contains(&token) {
                replaced = replaced.replace(&token, value);
            }
        }
        if replaced != decoded {
            result.replace_range(start..end, &docx::encode_text(&replaced));
        }
    }
    result
}
