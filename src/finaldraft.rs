/*!
 * Structured screenplay front end for Final Draft (`.fdx`) markup.
 *
 * The source already segments paragraphs explicitly, so this is a thin tree
 * walk: one canonical element per `Paragraph` node, with the `Type`
 * attribute mapped straight onto [`ElementKind`] and nested text runs
 * concatenated recursively. No lookahead or multi-line merging happens here.
 *
 * Unlike the heuristic path, markup failures are hard failures: an
 * unparsable document aborts the whole extraction rather than producing a
 * partial screenplay.
 */

use std::str::FromStr;

use log::debug;

use crate::app_config::HeuristicConfig;
use crate::errors::{MarkupError, ScriptError};
use crate::heuristic::metadata;
use crate::heuristic::HeuristicParser;
use crate::screenplay::{Element, ElementKind, Screenplay, ScreenplaySource, ScriptMetadata};

// @module: Final Draft markup front end

/// A structured parse result: the screenplay plus the explicit cast list the
/// markup carries alongside the content.
#[derive(Debug, Clone)]
pub struct FinalDraftScript {
    /// Canonical screenplay produced from the paragraph stream
    pub screenplay: Screenplay,

    /// Cast member names declared in the document's cast list
    pub cast: Vec<String>,
}

/// Tree-walk producer of canonical screenplay elements.
#[derive(Debug, Clone, Default)]
pub struct FinalDraftParser {
    metadata_config: HeuristicConfig,
}

impl FinalDraftParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use non-default metadata scan settings for title-page recovery.
    pub fn with_metadata_config(metadata_config: HeuristicConfig) -> Self {
        FinalDraftParser { metadata_config }
    }

    /// Parse Final Draft markup into a screenplay plus its cast list.
    pub fn parse_script(&self, xml: &str) -> Result<FinalDraftScript, ScriptError> {
        let doc = roxmltree::Document::parse(xml).map_err(MarkupError::from)?;
        let root = doc.root_element();

        if !root.has_tag_name("FinalDraft") {
            return Err(MarkupError::MissingContent(format!(
                "expected FinalDraft document, found <{}>",
                root.tag_name().name()
            ))
            .into());
        }

        let content = root
            .children()
            .find(|node| node.has_tag_name("Content"))
            .ok_or_else(|| {
                MarkupError::MissingContent("document has no Content element".to_string())
            })?;

        let mut elements = Vec::new();
        for paragraph in content.children().filter(|n| n.has_tag_name("Paragraph")) {
            let Some(type_attr) = paragraph.attribute("Type") else {
                debug!("Skipping paragraph without a Type attribute");
                continue;
            };

            let text = Self::nested_text(paragraph);
            match ElementKind::from_str(type_attr) {
                Ok(ElementKind::DualDialogue) => {
                    // Dual dialogue is a layout property in this format, not
                    // a paragraph type with a single text payload.
                    debug!("Skipping Dual Dialogue paragraph in structured content");
                }
                Ok(kind) => {
                    if let Ok(element) = Element::from_kind(kind, text) {
                        elements.push(element);
                    }
                }
                Err(_) => {
                    debug!("Skipping paragraph of unmapped type: {}", type_attr);
                }
            }
        }

        let metadata = self.title_page_metadata(&doc);
        let cast = Self::cast_members(&doc);

        Ok(FinalDraftScript {
            screenplay: Screenplay::new(metadata, elements),
            cast,
        })
    }

    /// Concatenate every nested text run under a node, recursing through any
    /// nested tagged structure, and trim the result.
    ///
    /// Whitespace-only nodes are markup indentation, not text runs, and are
    /// dropped.
    fn nested_text(node: roxmltree::Node) -> String {
        let mut text = String::new();
        for descendant in node.descendants() {
            if descendant.is_text() {
                let run = descendant.text().unwrap_or_default();
                if !run.trim().is_empty() {
                    text.push_str(run);
                }
            }
        }
        text.trim().to_string()
    }

    /// Cast member names from `Member` elements' `Character` attributes.
    fn cast_members(doc: &roxmltree::Document) -> Vec<String> {
        doc.root()
            .descendants()
            .filter(|node| node.has_tag_name("Member"))
            .filter_map(|node| node.attribute("Character"))
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }

    /// Recover title/author from the document's title page, if present.
    ///
    /// The title-page paragraphs are flattened to trimmed lines and run
    /// through the same scans the heuristic front end uses, so both
    /// producers yield the same metadata shape.
    fn title_page_metadata(&self, doc: &roxmltree::Document) -> ScriptMetadata {
        let lines: Vec<String> = doc
            .root()
            .descendants()
            .find(|node| node.has_tag_name("TitlePage"))
            .map(|title_page| {
                title_page
                    .descendants()
                    .filter(|n| n.has_tag_name("Paragraph"))
                    .flat_map(|p| HeuristicParser::split_lines(&Self::nested_text(p)))
                    .collect()
            })
            .unwrap_or_default();

        metadata::extract_metadata(&lines, &self.metadata_config)
    }
}

impl ScreenplaySource for FinalDraftParser {
    fn extract(&self, input: &str) -> Result<Screenplay, ScriptError> {
        Ok(self.parse_script(input)?.screenplay)
    }
}
