use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use serde::Serialize;

use crate::analysis;
use crate::app_config::Config;
use crate::file_utils::{FileManager, ScriptFormat};
use crate::finaldraft::FinalDraftParser;
use crate::heuristic::HeuristicParser;
use crate::screenplay::{Element, ScriptMetadata};

// @module: Application controller for screenplay extraction

/// Everything the extraction pipeline produced for one input file.
///
/// This is the JSON report shape written next to the input: the canonical
/// element stream plus the derived analytical views.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// Recovered title/author metadata
    pub metadata: ScriptMetadata,

    /// Canonical elements in document order
    pub content: Vec<Element>,

    /// Sorted character roster
    pub characters: Vec<String>,

    /// Scene headings in document order
    pub scenes: Vec<String>,

    /// Sorted emphasized terms from action text
    pub emphasized: Vec<String>,
}

/// Main application controller for screenplay extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Extract one input file into a report, selecting the front end by
    /// file extension.
    pub fn extract_report(&self, input: &Path) -> Result<ExtractionReport> {
        let format = ScriptFormat::from_path(input)?;
        self.extract_report_as(input, format)
    }

    /// Extract one input file with an explicit format override.
    pub fn extract_report_as(
        &self,
        input: &Path,
        format: ScriptFormat,
    ) -> Result<ExtractionReport> {
        let raw = FileManager::read_to_string(input)?;
        debug!("Extracting {} as {}", input.display(), format);

        let (screenplay, cast) = match format {
            ScriptFormat::FinalDraft => {
                let parser = FinalDraftParser::with_metadata_config(self.config.heuristic.clone());
                let script = parser.parse_script(&raw)?;
                (script.screenplay, script.cast)
            }
            ScriptFormat::PlainText => {
                let parser = HeuristicParser::with_config(self.config.heuristic.clone());
                (parser.parse_text(&raw), Vec::new())
            }
        };

        let analysis = analysis::analyze(&screenplay, &cast);
        Ok(ExtractionReport {
            metadata: screenplay.metadata,
            content: screenplay.elements,
            characters: analysis.characters,
            scenes: analysis.scenes,
            emphasized: analysis.emphasized,
        })
    }

    /// Run extraction for a single file and write the JSON report.
    ///
    /// The output path defaults to the input path with the configured report
    /// extension. Existing reports are only replaced with `force_overwrite`.
    pub fn run(
        &self,
        input: &Path,
        output: Option<&Path>,
        format: Option<ScriptFormat>,
        force_overwrite: bool,
    ) -> Result<PathBuf> {
        if !FileManager::file_exists(input) {
            return Err(anyhow!("Input file does not exist: {}", input.display()));
        }

        let output_path = match output {
            Some(path) => path.to_path_buf(),
            None => FileManager::generate_output_path(input, &self.config.output_extension),
        };

        if FileManager::file_exists(&output_path) && !force_overwrite {
            warn!(
                "Skipping {}: report already exists at {} (use --force-overwrite to replace)",
                input.display(),
                output_path.display()
            );
            return Ok(output_path);
        }

        let report = match format {
            Some(format) => self.extract_report_as(input, format)?,
            None => self.extract_report(input)?,
        };

        let serialized = if self.config.pretty_output {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .context("Failed to serialize extraction report")?;

        FileManager::write_to_file(&output_path, &serialized)?;
        info!(
            "Extracted {} elements, {} characters, {} scenes from {} -> {}",
            report.content.len(),
            report.characters.len(),
            report.scenes.len(),
            input.display(),
            output_path.display()
        );

        Ok(output_path)
    }

    /// Run extraction over every screenplay file found in a directory.
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<usize> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!(
                "Input directory does not exist: {}",
                input_dir.display()
            ));
        }

        let mut extensions: Vec<&str> = Vec::new();
        extensions.extend_from_slice(ScriptFormat::FinalDraft.extensions());
        extensions.extend_from_slice(ScriptFormat::PlainText.extensions());

        let files = FileManager::find_files(input_dir, &extensions)?;
        if files.is_empty() {
            warn!("No screenplay files found in {}", input_dir.display());
            return Ok(0);
        }

        info!(
            "Processing {} screenplay file(s) in {}",
            files.len(),
            input_dir.display()
        );

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );

        let mut processed = 0;
        for file in &files {
            progress.set_message(
                file.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            match self.run(file, None, None, force_overwrite) {
                Ok(_) => processed += 1,
                Err(e) => warn!("Failed to extract {}: {}", file.display(), e),
            }
            progress.inc(1);
        }

        progress.finish_with_message(format!("{}/{} extracted", processed, files.len()));
        Ok(processed)
    }
}
