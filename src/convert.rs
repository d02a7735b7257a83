//! External PDF converter
//!
//! The export pipeline only needs a narrow contract: given an input file
//! and an output directory, produce `<input stem>.pdf` inside that
//! directory and report success through the exit status. Any converter
//! honoring that contract is substitutable, which also keeps the pipeline
//! testable without launching a real process.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::Config;
use crate::error::{CovergenError, CovergenResult};

/// Document-to-PDF converter contract
pub trait Converter {
    fn name(&self) -> &'static str;

    /// Whether the converter can be launched at all
    fn is_available(&self) -> bool;

    /// Convert `input` to a PDF inside `out_dir`. The output file is
    /// expected at `<out_dir>/<input stem>.pdf` afterward.
    fn convert_to_pdf(&self, input: &Path, out_dir: &Path) -> CovergenResult<()>;
}

/// LibreOffice `soffice` in headless mode
pub struct SofficeConverter {
    program: PathBuf,
}

/// Well-known install locations probed before falling back to PATH
const KNOWN_LOCATIONS: &[&str] = &[
    "/usr/bin/soffice",
    "/usr/local/bin/soffice",
    "/opt/libreoffice/program/soffice",
    r"C:\Program Files\LibreOffice\program\soffice.exe",
    r"C:\Program Files (x86)\LibreOffice\program\soffice.exe",
];

impl SofficeConverter {
    /// Use an explicit executable path
    pub fn with_program(program: PathBuf) -> Self {
        Self { program }
    }

    /// Probe known install locations, falling back to `soffice` on PATH
    pub fn discover() -> Self {
        for location in KNOWN_LOCATIONS {
            let path = Path::new(location);
            if path.exists() {
                return Self::with_program(path.to_path_buf());
            }
        }
        Self::with_program(PathBuf::from("soffice"))
    }

    /// Configured executable if set, discovery otherwise
    pub fn from_config(config: &Config) -> Self {
        match &config.converter {
            Some(program) => Self::with_program(program.clone()),
            None => Self::discover(),
        }
    }

    /// The executable this converter will launch
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Converter for SofficeConverter {
    fn name(&self) -> &'static str {
        "soffice"
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn convert_to_pdf(&self, input: &Path, out_dir: &Path) -> CovergenResult<()> {
        let program = self.program.display().to_string();

        // Blocks until the subprocess exits; no timeout is imposed
        let output = Command::new(&self.program)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(out_dir)
            .arg(input)
            .output()
            .map_err(|source| CovergenError::ConverterSpawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CovergenError::ConverterFailed {
                program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
