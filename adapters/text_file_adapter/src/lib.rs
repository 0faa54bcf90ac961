use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use subscription_core::domain::{Report, SourceFile};
use subscription_core::error::SubscriptionError;
use subscription_core::ports::{ReportSink, Result, SubscriptionSource};

/// Reads subscription files from the local filesystem
pub struct TextFileSource;

impl SubscriptionSource for TextFileSource {
    fn read(&self, path: &Path) -> Result<SourceFile> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        if !name.ends_with(".txt") {
            return Err(Box::new(SubscriptionError::InvalidFileType { name }));
        }

        let bytes = fs::read(path).map_err(SubscriptionError::ReadFailure)?;
        let size = bytes.len() as u64;
        let mut content = String::from_utf8(bytes).map_err(|err| {
            SubscriptionError::ReadFailure(io::Error::new(io::ErrorKind::InvalidData, err))
        })?;
        // Editors like Notepad prepend a byte order mark
        if content.starts_with('\u{feff}') {
            content.remove(0);
        }

        Ok(SourceFile {
            name,
            size,
            content,
        })
    }
}

/// Saves reports as text files inside an output folder
pub struct FileReportWriter {
    output_folder: String,
}

impl FileReportWriter {
    pub fn new(output_folder: String) -> Self {
        Self { output_folder }
    }
}

impl ReportSink for FileReportWriter {
    fn deliver(&self, report: &Report) -> Result<String> {
        // Create output directory if it doesn't exist
        let output_dir = Path::new(&self.output_folder);
        fs::create_dir_all(output_dir)?;

        let file_path: PathBuf = output_dir.join(&report.file_name);
        fs::write(&file_path, report.body.as_bytes())?;
        info!("Wrote report to {}", file_path.display());

        Ok(file_path.display().to_string())
    }
}

/// Prints reports verbatim, ready to be piped or copied
pub struct StdoutReportWriter;

impl StdoutReportWriter {
    /// Writes the body byte for byte, without a trailing newline
    fn write_to<W: Write>(&self, out: &mut W, report: &Report) -> io::Result<()> {
        out.write_all(report.body.as_bytes())?;
        out.flush()
    }
}

impl ReportSink for StdoutReportWriter {
    fn deliver(&self, report: &Report) -> Result<String> {
        self.write_to(&mut io::stdout().lock(), report)?;
        Ok("stdout".to_string())
    }
}
