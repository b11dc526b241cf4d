/*!
 * Tests for the Final Draft structured front end
 */

use anyhow::Result;
use fadein::finaldraft::FinalDraftParser;
use fadein::screenplay::{Element, ElementKind, ScreenplaySource};

use crate::common;

/// Test the paragraph stream maps one element per tagged paragraph
#[test]
fn test_parse_script_withSampleDocument_shouldMapParagraphTypes() -> Result<()> {
    let script = FinalDraftParser::new().parse_script(common::sample_fdx())?;
    let kinds: Vec<ElementKind> = script
        .screenplay
        .elements
        .iter()
        .map(Element::kind)
        .collect();

    // The Transition paragraph has no canonical kind and is skipped.
    assert_eq!(
        kinds,
        vec![
            ElementKind::SceneHeading,
            ElementKind::Action,
            ElementKind::Character,
            ElementKind::Parenthetical,
            ElementKind::Dialogue,
            ElementKind::SceneHeading,
            ElementKind::Character,
            ElementKind::Dialogue,
        ]
    );
    Ok(())
}

/// Test nested text runs concatenate into one string
#[test]
fn test_parse_script_withNestedTextRuns_shouldConcatenate() -> Result<()> {
    let script = FinalDraftParser::new().parse_script(common::sample_fdx())?;

    assert_eq!(
        script.screenplay.elements[1],
        Element::action("Sunlight cuts across the counter. The KETTLE rattles on the stove.")
    );
    Ok(())
}

/// Test deeply nested tagged structure still yields flat text
#[test]
fn test_parse_script_withDeeplyNestedRuns_shouldRecurse() -> Result<()> {
    let xml = r#"<FinalDraft>
  <Content>
    <Paragraph Type="Dialogue">
      <Text>It was </Text>
      <Text><Style Bold="1"><Text>never</Text></Style></Text>
      <Text> mine.</Text>
    </Paragraph>
  </Content>
</FinalDraft>"#;

    let script = FinalDraftParser::new().parse_script(xml)?;
    assert_eq!(
        script.screenplay.elements,
        vec![Element::dialogue("It was never mine.")]
    );
    Ok(())
}

/// Test cast list recovery from Member attributes
#[test]
fn test_parse_script_withCastList_shouldCollectMembers() -> Result<()> {
    let script = FinalDraftParser::new().parse_script(common::sample_fdx())?;
    assert_eq!(script.cast, vec!["JOHN".to_string(), "MARA".to_string()]);
    Ok(())
}

/// Test title-page metadata recovery mirrors the heuristic scans
#[test]
fn test_parse_script_withTitlePage_shouldRecoverMetadata() -> Result<()> {
    let script = FinalDraftParser::new().parse_script(common::sample_fdx())?;

    assert_eq!(script.screenplay.metadata.title, "THE LONG NIGHT");
    assert_eq!(script.screenplay.metadata.author, "Alex Rivera");
    Ok(())
}

/// Test documents without a title page default their metadata
#[test]
fn test_parse_script_withoutTitlePage_shouldUseDefaults() -> Result<()> {
    let xml = r#"<FinalDraft>
  <Content>
    <Paragraph Type="Action"><Text>A door opens.</Text></Paragraph>
  </Content>
</FinalDraft>"#;

    let script = FinalDraftParser::new().parse_script(xml)?;
    assert_eq!(script.screenplay.metadata.title, "Unknown Title");
    assert_eq!(script.screenplay.metadata.author, "Unknown Author");
    Ok(())
}

/// Test malformed markup aborts the parse with a markup error
#[test]
fn test_parse_script_withMalformedXml_shouldFail() {
    let result = FinalDraftParser::new().parse_script("<FinalDraft><Content></FinalDraft>");
    assert!(result.is_err(), "Malformed markup must be a hard failure");
}

/// Test a non-screenplay document is rejected, not coerced
#[test]
fn test_parse_script_withWrongRootElement_shouldFail() {
    let result = FinalDraftParser::new().parse_script("<Movie><Content/></Movie>");
    assert!(result.is_err(), "Non-FinalDraft markup must be rejected");
}

/// Test a document without content is rejected
#[test]
fn test_parse_script_withoutContent_shouldFail() {
    let result = FinalDraftParser::new().parse_script("<FinalDraft></FinalDraft>");
    assert!(result.is_err(), "A document with no Content must be rejected");
}

/// Test paragraphs without a Type attribute are skipped quietly
#[test]
fn test_parse_script_withUntypedParagraph_shouldSkipIt() -> Result<()> {
    let xml = r#"<FinalDraft>
  <Content>
    <Paragraph><Text>stray text</Text></Paragraph>
    <Paragraph Type="Action"><Text>A door opens.</Text></Paragraph>
  </Content>
</FinalDraft>"#;

    let script = FinalDraftParser::new().parse_script(xml)?;
    assert_eq!(script.screenplay.elements, vec![Element::action("A door opens.")]);
    Ok(())
}

/// Test the trait surface produces the same screenplay shape
#[test]
fn test_extract_withSampleDocument_shouldMatchParseScript() -> Result<()> {
    let parser = FinalDraftParser::new();
    let via_trait = parser.extract(common::sample_fdx())?;
    let via_parse = parser.parse_script(common::sample_fdx())?;

    assert_eq!(via_trait, via_parse.screenplay);
    Ok(())
}
