/*!
 * Common test utilities for the fadein test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample plain-text screenplay for testing the heuristic front end
pub fn create_test_screenplay(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"THE LONG NIGHT

Written by

Alex Rivera

INT. KITCHEN - DAY

Sunlight cuts across the counter. The KETTLE rattles on the stove.

JOHN
(quietly)
Did you hear that?

MARA
Hear what?

EXT. GARDEN - NIGHT

The gate creaks. Somewhere beyond the hedge, a DOG barks twice.
"#;
    create_test_file(dir, filename, content)
}

/// Creates a sample Final Draft document for testing the structured front end
pub fn create_test_fdx(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_fdx())
}

/// A small but complete Final Draft document: title page, cast list, and a
/// paragraph stream covering every mapped type plus one unmapped type.
pub fn sample_fdx() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<FinalDraft DocumentType="Script" Template="No" Version="1">
  <Content>
    <Paragraph Type="Scene Heading">
      <Text>INT. KITCHEN - DAY</Text>
    </Paragraph>
    <Paragraph Type="Action">
      <Text>Sunlight cuts across the counter. The </Text>
      <Text AdornmentStyle="-1">KETTLE</Text>
      <Text> rattles on the stove.</Text>
    </Paragraph>
    <Paragraph Type="Character">
      <Text>JOHN</Text>
    </Paragraph>
    <Paragraph Type="Parenthetical">
      <Text>(quietly)</Text>
    </Paragraph>
    <Paragraph Type="Dialogue">
      <Text>Did you hear that?</Text>
    </Paragraph>
    <Paragraph Type="Transition">
      <Text>CUT TO:</Text>
    </Paragraph>
    <Paragraph Type="Scene Heading">
      <Text>EXT. GARDEN - NIGHT</Text>
    </Paragraph>
    <Paragraph Type="Character">
      <Text>MARA</Text>
    </Paragraph>
    <Paragraph Type="Dialogue">
      <Text>Hear what?</Text>
    </Paragraph>
  </Content>
  <TitlePage>
    <Content>
      <Paragraph Type="General">
        <Text>THE LONG NIGHT</Text>
      </Paragraph>
      <Paragraph Type="General">
        <Text>Written by</Text>
      </Paragraph>
      <Paragraph Type="General">
        <Text>Alex Rivera</Text>
      </Paragraph>
    </Content>
  </TitlePage>
  <Cast>
    <Member Character="JOHN"/>
    <Member Character="MARA"/>
  </Cast>
</FinalDraft>
"#
}

/// Split a fixture string into the trimmed line sequence the classifier
/// consumes, mirroring the upstream page-text collaborator.
pub fn to_lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|line| line.to_string()).collect()
}
