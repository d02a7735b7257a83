//! Shared fixtures for covergen integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// Write a minimal `.docx` whose body holds one single-run paragraph per
/// entry. Text is inserted verbatim, so callers escape `&`/`<` themselves.
pub fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|text| {
            format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
        })
        .collect();
    write_docx_body(path, &body);
}

/// Write a minimal `.docx` with an arbitrary body fragment
pub fn write_docx_body(path: &Path, body: &str) {
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let file = std::fs::File::create(path).expect("create fixture docx");
    let mut writer = zip::ZipWriter::new(file);
    let opts = zip::write::SimpleFileOptions::default();

    writer.start_file("[Content_Types].xml", opts).unwrap();
    writer.write_all(CONTENT_TYPES.as_bytes()).unwrap();

    writer.start_file("_rels/.rels", opts).unwrap();
    writer.write_all(RELS.as_bytes()).unwrap();

    writer.start_file("word/document.xml", opts).unwrap();
    writer.write_all(document.as_bytes()).unwrap();

    writer.finish().unwrap();
}
