//! covergen - interactive cover-letter generator
//!
//! Fills `[Placeholder]` fields in `.docx` templates with user-supplied
//! values and exports the result as a PDF through an external headless
//! converter (LibreOffice by default).

pub mod config;
pub mod convert;
pub mod docx;
pub mod error;
pub mod export;
pub mod fill;
pub mod placeholder;
pub mod session;
pub mod values;

// Re-exports for convenience
pub use config::Config;
pub use convert::{Converter, SofficeConverter};
pub use docx::Document;
pub use error::{CovergenError, CovergenResult};
pub use export::{export_pdf, sanitize_company};
pub use fill::fill_document;
pub use placeholder::scan;
pub use session::Session;
pub use values::ValueSet;
