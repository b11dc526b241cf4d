/*!
 * Tests for title/author metadata recovery
 */

use fadein::app_config::HeuristicConfig;
use fadein::heuristic::metadata;

use crate::common;

fn config() -> HeuristicConfig {
    HeuristicConfig::default()
}

/// Test the title is the first qualifying upper-case line
#[test]
fn test_find_title_withUppercaseLine_shouldPickFirstCandidate() {
    let lines = common::to_lines(&["a quiet draft", "THE LONG NIGHT", "SECOND CANDIDATE"]);
    let title = metadata::find_title(&lines, 10, &[]);
    assert_eq!(title, Some("THE LONG NIGHT".to_string()));
}

/// Test scene headings, transitions and vocabulary are never titles
#[test]
fn test_find_title_withExcludedVocabulary_shouldSkipKnownLines() {
    let lines = common::to_lines(&[
        "FADE IN:",
        "INT. KITCHEN - DAY",
        "CUT TO:",
        "NIGHT",
        "THE REAL TITLE",
    ]);
    let title = metadata::find_title(&lines, 10, &[]);
    assert_eq!(title, Some("THE REAL TITLE".to_string()));
}

/// Test digit-leading lines (page numbers, dates) are rejected
#[test]
fn test_find_title_withDigitLeadingLine_shouldReject() {
    let lines = common::to_lines(&["12 DRAFTS LATER", "2019 EDITION", "FINAL CUT"]);
    let title = metadata::find_title(&lines, 10, &[]);
    assert_eq!(title, Some("FINAL CUT".to_string()));
}

/// Test the title scan stops at the configured depth
#[test]
fn test_find_title_withCandidateBeyondScanWindow_shouldReturnNone() {
    let mut raw: Vec<&str> = vec!["line one", "line two", "line three"];
    raw.push("TOO DEEP");
    let lines = common::to_lines(&raw);

    assert_eq!(metadata::find_title(&lines, 3, &[]), None);
    assert_eq!(
        metadata::find_title(&lines, 4, &[]),
        Some("TOO DEEP".to_string())
    );
}

/// Test author recovery after both byline cue spellings
#[test]
fn test_find_author_withBylineCues_shouldMatchCaseInsensitively() {
    let lines = common::to_lines(&["SOME TITLE", "Written By", "Jane Doe"]);
    assert_eq!(
        metadata::find_author(&lines, &[]),
        Some("Jane Doe".to_string())
    );

    let lines = common::to_lines(&["SOME TITLE", "BY", "John Smith"]);
    assert_eq!(
        metadata::find_author(&lines, &[]),
        Some("John Smith".to_string())
    );
}

/// Test the author scan skips excluded lines after the cue
#[test]
fn test_find_author_withExcludedLineAfterCue_shouldSkipToNextCandidate() {
    let lines = common::to_lines(&["by", "FADE IN:", "INT. LAB - DAY", "Jane Doe"]);
    assert_eq!(
        metadata::find_author(&lines, &[]),
        Some("Jane Doe".to_string())
    );
}

/// Test the author scan covers the whole document, not just the head
#[test]
fn test_find_author_withDeepByline_shouldStillFind() {
    let mut raw: Vec<String> = (0..40).map(|i| format!("filler line {}", i)).collect();
    raw.push("written by".to_string());
    raw.push("Alex Rivera".to_string());

    assert_eq!(
        metadata::find_author(&raw, &[]),
        Some("Alex Rivera".to_string())
    );
}

/// Test a line merely containing "by" is not a byline cue
#[test]
fn test_find_author_withByInsideSentence_shouldNotTrigger() {
    let lines = common::to_lines(&["He walks by the window.", "Jane Doe"]);
    assert_eq!(metadata::find_author(&lines, &[]), None);
}

/// Test both defaults apply when nothing is discoverable
#[test]
fn test_extract_metadata_withNoCandidates_shouldUseDefaults() {
    let lines = common::to_lines(&[
        "a lowercase opening line",
        "another one",
        "INT. NOWHERE - DAY",
    ]);
    let metadata = metadata::extract_metadata(&lines, &config());

    assert_eq!(metadata.title, "Unknown Title");
    assert_eq!(metadata.author, "Unknown Author");
}

/// Test the scans are independent: one may succeed while the other defaults
#[test]
fn test_extract_metadata_withTitleOnly_shouldDefaultAuthorOnly() {
    let lines = common::to_lines(&["STANDALONE TITLE", "INT. LAB - DAY"]);
    let metadata = metadata::extract_metadata(&lines, &config());

    assert_eq!(metadata.title, "STANDALONE TITLE");
    assert_eq!(metadata.author, "Unknown Author");
}

/// Test configured extra vocabulary also disqualifies candidates
#[test]
fn test_find_title_withExtraExcludedTerms_shouldRespectConfig() {
    let extra = vec!["DRAFT THREE".to_string()];
    let lines = common::to_lines(&["DRAFT THREE", "ACTUAL TITLE"]);

    assert_eq!(
        metadata::find_title(&lines, 10, &extra),
        Some("ACTUAL TITLE".to_string())
    );
}
