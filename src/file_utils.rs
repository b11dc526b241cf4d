use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use walkdir::WalkDir;

use crate::errors::ScriptError;

// @module: File and directory utilities

/// Input formats the extraction pipeline understands.
///
/// Chosen by file extension; the format decides which front end produces the
/// screenplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    /// Final Draft markup (`.fdx`), handled by the structured front end
    FinalDraft,
    /// Plain text recovered from a page layout, handled by the heuristic
    /// front end
    PlainText,
}

impl ScriptFormat {
    /// Determine the format for a path from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "fdx" => Ok(Self::FinalDraft),
            "txt" | "text" => Ok(Self::PlainText),
            _ => Err(ScriptError::UnsupportedFormat(format!(
                "{} (expected .fdx or .txt)",
                path.display()
            ))),
        }
    }

    /// Extensions this format claims, lowercase without the dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::FinalDraft => &["fdx"],
            Self::PlainText => &["txt", "text"],
        }
    }
}

impl fmt::Display for ScriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FinalDraft => write!(f, "fdx"),
            Self::PlainText => write!(f, "txt"),
        }
    }
}

impl FromStr for ScriptFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fdx" | "finaldraft" => Ok(Self::FinalDraft),
            "txt" | "text" | "plain" => Ok(Self::PlainText),
            _ => Err(anyhow!("Invalid script format: {}", s)),
        }
    }
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for an extraction report
    // @params: input_file, extension
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, extension: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(extension);

        match input_file.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        }
    }

    /// Find files with any of the given extensions in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    let ext = ext.to_string_lossy();
                    if extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
