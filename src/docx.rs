//! Docx archive access
//!
//! A `.docx` file is a zip archive whose document body lives in
//! `word/document.xml` as WordprocessingML. The body stores text as runs
//! (`<w:r>` holding one `<w:t>` payload each) grouped into paragraphs
//! (`<w:p>`); table cells hold ordinary paragraphs, so one paragraph walk
//! covers body text and table text alike.
//!
//! This module keeps the archive as an ordered entry list and edits the
//! body as raw XML. Entries other than the body are carried through
//! byte-for-byte, which is what keeps styles, numbering, and media intact.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CovergenError, CovergenResult};

/// Zip entry holding the document body
const DOCUMENT_BODY: &str = "word/document.xml";

/// Closing tag of a paragraph element
const PARA_END: &str = "</w:p>";

/// Matches a paragraph opening tag. `<w:p>` never nests, and related tags
/// (`<w:pPr>`, `<w:pStyle>`) have a non-delimiter after the `p`, so the
/// trailing space-or-`>` is enough to disambiguate.
static PARA_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:p[ >]").expect("paragraph regex"));

/// Matches one run's text payload, with optional attributes
/// (`xml:space="preserve"` is the common one).
pub(crate) static RUN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<w:t(?: [^>]*)?>([^<]*)</w:t>"#).expect("run text regex"));

/// An opened docx archive with its document body held as mutable XML
pub struct Document {
    /// All zip entries in original order; the body entry is refreshed
    /// from `body` on save
    entries: Vec<(String, Vec<u8>)>,
    /// Raw XML of word/document.xml
    body: String,
}

impl Document {
    /// Open a `.docx` file, reading every zip entry into memory
    pub fn open(path: &Path) -> CovergenResult<Self> {
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let name = entry.name().to_string();
            let mut data = Vec::new();
            entry.read_to_end(&mut data)?;
            entries.push((name, data));
        }

        let body = entries
            .iter()
            .find(|(name, _)| name == DOCUMENT_BODY)
            .map(|(_, data)| String::from_utf8_lossy(data).into_owned())
            .ok_or_else(|| CovergenError::MissingDocumentBody {
                file: path.to_path_buf(),
            })?;

        Ok(Self { entries, body })
    }

    /// Raw XML of the document body
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the document body wholesale
    pub(crate) fn set_body(&mut self, body: String) {
        self.body = body;
    }

    /// Byte ranges of every `<w:p>…</w:p>` element in the body, in
    /// document order. Table-cell paragraphs are included.
    pub fn paragraph_ranges(&self) -> Vec<(usize, usize)> {
        find_paragraphs(&self.body)
    }

    /// Concatenated, entity-decoded run text of one paragraph range
    pub fn paragraph_text(&self, range: (usize, usize)) -> String {
        paragraph_text(&self.body[range.0..range.1])
    }

    /// Write the archive to `path`, replacing the body entry with the
    /// current XML. Media entries stay STORED and everything else is
    /// DEFLATED, matching the layout word processors produce.
    pub fn save(&self, path: &Path) -> CovergenResult<()> {
        let file = File::create(path)?;
        let mut writer = zip::ZipWriter::new(file);

        let deflated = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        let stored = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);

        for (name, data) in &self.entries {
            let opts = if name.starts_with("word/media/") {
                stored
            } else {
                deflated
            };
            writer.start_file(name.as_str(), opts)?;
            if name == DOCUMENT_BODY {
                writer.write_all(self.body.as_bytes())?;
            } else {
                writer.write_all(data)?;
            }
        }

        writer.finish()?;
        Ok(())
    }
}

/// Find all `<w:p>…</w:p>` byte ranges in the body XML. Paragraphs never
/// nest, so the first closing tag after each opening tag is the match.
fn find_paragraphs(xml: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    for m in PARA_START.find_iter(xml) {
        let start = m.start();
        if let Some(rel) = xml[start..].find(PARA_END) {
            ranges.push((start, start + rel + PARA_END.len()));
        }
    }
    ranges
}

/// Concatenated, entity-decoded text of every run in a paragraph fragment
pub(crate) fn paragraph_text(para: &str) -> String {
    RUN_TEXT
        .captures_iter(para)
        .filter_map(|caps| caps.get(1))
        .map(|m| decode_text(m.as_str()))
        .collect()
}

/// Decode the XML character entities a `<w:t>` payload can carry.
/// `&amp;` goes last so it cannot manufacture new entities.
pub(crate) fn decode_text(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Encode text for insertion into a `<w:t>` payload.
/// `&` goes first so entity introducers are not double-escaped.
pub(crate) fn encode_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_paragraphs_top_level() {
        let xml = "<w:body><w:p><w:r><w:t>one</w:t></w:r></w:p>\
                   <w:p><w:r><w:t>two</w:t></w:r></w:p></w:body>";
        let ranges = find_paragraphs(xml);
        assert_eq!(ranges.len(), 2);
        assert!(xml[ranges[0].0..ranges[0].1].contains("one"));
        assert!(xml[ranges[1].0..ranges[1].1].contains("two"));
    }

    #[test]
    fn test_find_paragraphs_includes_table_cells() {
        let xml = "<w:body><w:p><w:r><w:t>intro</w:t></w:r></w:p>\
                   <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
                   </w:body>";
        let ranges = find_paragraphs(xml);
        assert_eq!(ranges.len(), 2);
        assert!(xml[ranges[1].0..ranges[1].1].contains("cell"));
    }

    #[test]
    fn test_find_paragraphs_ignores_ppr() {
        let xml = r#"<w:p w14:paraId="3F"><w:pPr><w:pStyle w:val="Body"/></w:pPr><w:r><w:t>x</w:t></w:r></w:p>"#;
        assert_eq!(find_paragraphs(xml).len(), 1);
    }

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let para = r#"<w:p><w:r><w:t>Dear </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">[Company]</w:t></w:r></w:p>"#;
        assert_eq!(paragraph_text(para), "Dear [Company]");
    }

    #[test]
    fn test_paragraph_text_decodes_entities() {
        let para = "<w:p><w:r><w:t>Smith &amp; Sons</w:t></w:r></w:p>";
        assert_eq!(paragraph_text(para), "Smith & Sons");
    }

    #[test]
    fn test_decode_amp_last() {
        assert_eq!(decode_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_encode_round_trip() {
        let original = "a < b & \"c\" > 'd'";
        assert_eq!(decode_text(&encode_text(original)), original);
    }
}
