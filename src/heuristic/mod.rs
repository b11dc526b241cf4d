/*!
 * Heuristic screenplay front end.
 *
 * Reconstructs screenplay structure from a flat sequence of text lines with
 * no tagging to rely on. Classification is an ordered set of pattern rules
 * evaluated over a cursor: each step inspects the current line (or a
 * multi-line window for dialogue blocks and dual-dialogue columns), returns
 * the elements it produced together with the number of lines it consumed,
 * and the driver advances by that count. Ambiguity is resolved by rule
 * priority, never by failure — every input yields a best-effort screenplay.
 *
 * Rule priority per window:
 * 1. Scene heading (`INT.` / `EXT.` / `INT/EXT.` prefix)
 * 2. Dual-dialogue lookahead (two adjacent character cues)
 * 3. Character cue with optional parenthetical and greedy dialogue run
 * 4. Action fallback (greedy run until a scene heading or cue)
 *
 * A metadata pre-pass recovers title and author and, when a byline cue
 * proves a title page is present, strips the recognized title-page lines so
 * they do not surface as action text.
 */

use log::debug;

use crate::app_config::HeuristicConfig;
use crate::errors::ScriptError;
use crate::screenplay::{
    Element, Screenplay, ScreenplaySource, ScriptMetadata, UNKNOWN_AUTHOR, UNKNOWN_TITLE,
};

pub mod metadata;
pub mod rules;

/// One classification step: the elements produced and the lines consumed.
///
/// `consumed` is always at least 1, so the driver makes progress on every
/// input.
#[derive(Debug)]
struct Step {
    elements: Vec<Element>,
    consumed: usize,
}

impl Step {
    fn one(element: Element, consumed: usize) -> Self {
        Step {
            elements: vec![element],
            consumed,
        }
    }
}

/// Rule-based classifier for unstructured screenplay text.
///
/// Stateless across invocations: each call operates on its own line buffer
/// and produces its own screenplay, so distinct documents may be classified
/// in parallel. Within one pass, consumption is strictly sequential because
/// run lengths are only known after scanning forward.
#[derive(Debug, Clone)]
pub struct HeuristicParser {
    config: HeuristicConfig,
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicParser {
    pub fn new() -> Self {
        Self::with_config(HeuristicConfig::default())
    }

    pub fn with_config(config: HeuristicConfig) -> Self {
        HeuristicParser { config }
    }

    /// Split raw text into the trimmed, blank-filtered line sequence the
    /// classifier consumes.
    pub fn split_lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    /// Parse raw text: split into lines, then classify.
    pub fn parse_text(&self, text: &str) -> Screenplay {
        let lines = Self::split_lines(text);
        self.parse_lines(&lines)
    }

    /// Parse an already-prepared line sequence into a screenplay.
    ///
    /// Lines must be trimmed and non-empty. Never fails: metadata defaults
    /// are substituted and unclassifiable lines fall through to Action.
    pub fn parse_lines(&self, lines: &[String]) -> Screenplay {
        let metadata = metadata::extract_metadata(lines, &self.config);
        let content = self.strip_title_page(lines, &metadata);
        let elements = self.classify(&content);
        Screenplay::new(metadata, elements)
    }

    /// Drop recognized title-page lines from the top of the document.
    ///
    /// Only runs when a byline cue sits in the skip window — a bare
    /// upper-case opening line with no byline is screenplay content (a cue
    /// or shouted action), not a title page, and must reach the classifier
    /// untouched.
    fn strip_title_page(&self, lines: &[String], metadata: &ScriptMetadata) -> Vec<String> {
        let window = self.config.metadata_skip_lines.min(lines.len());
        let has_byline = lines[..window].iter().any(|l| metadata::is_byline_cue(l));
        if !has_byline {
            return lines.to_vec();
        }

        lines
            .iter()
            .enumerate()
            .filter(|(i, line)| {
                let residue = *i < window && self.is_title_page_residue(line, metadata);
                if residue {
                    debug!("Skipping title-page residue at line {}: {}", i, line);
                }
                !residue
            })
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Lines near the top that repeat the recovered metadata (title, byline
    /// cue, author).
    fn is_title_page_residue(&self, line: &str, metadata: &ScriptMetadata) -> bool {
        if metadata::is_byline_cue(line) {
            return true;
        }
        if metadata.title != UNKNOWN_TITLE && line == metadata.title {
            return true;
        }
        if metadata.author != UNKNOWN_AUTHOR && line == metadata.author {
            return true;
        }
        false
    }

    /// Run the classification rules over a line sequence.
    pub fn classify(&self, lines: &[String]) -> Vec<Element> {
        let mut elements = Vec::new();
        let mut pos = 0;

        while pos < lines.len() {
            let step = self.classify_step(lines, pos);
            elements.extend(step.elements);
            pos += step.consumed.max(1);
        }

        elements
    }

    // @evaluates: One rule window at the cursor position
    fn classify_step(&self, lines: &[String], pos: usize) -> Step {
        let line = &lines[pos];

        if rules::is_scene_heading(line) {
            return Step::one(Element::scene_heading(line.clone()), 1);
        }

        if let Some(step) = self.try_dual_dialogue(lines, pos) {
            return step;
        }

        if rules::is_character_name(line, self.config.max_character_name_len) {
            return self.parse_character_block(lines, pos);
        }

        self.parse_action_run(lines, pos)
    }

    /// Attempt the dual-dialogue hypothesis at the cursor.
    ///
    /// Triggered only when the current line and the next are both character
    /// cues and a third line exists. Page-text extraction flattens
    /// side-by-side columns row by row, so the dialogue run following the
    /// two cues is dealt alternately between the speakers and each speaker's
    /// rows are joined into one dialogue. An empty run abandons the
    /// hypothesis: the caller degrades to a single-speaker parse and the
    /// second cue line is re-examined on the next iteration.
    fn try_dual_dialogue(&self, lines: &[String], pos: usize) -> Option<Step> {
        let max_len = self.config.max_character_name_len;

        // A third line must exist for the hypothesis to be worth testing.
        if pos + 2 >= lines.len() {
            return None;
        }
        if !rules::is_character_name(&lines[pos], max_len)
            || !rules::is_character_name(&lines[pos + 1], max_len)
        {
            return None;
        }

        let mut columns: [Vec<&str>; 2] = [Vec::new(), Vec::new()];
        let mut column = 0;
        let mut cursor = pos + 2;
        while cursor < lines.len() && rules::is_dialogue(&lines[cursor], max_len) {
            columns[column].push(lines[cursor].as_str());
            column = 1 - column;
            cursor += 1;
        }

        if columns[0].is_empty() {
            debug!(
                "Dual-dialogue hypothesis abandoned at line {}: no dialogue follows the cues",
                pos
            );
            return None;
        }

        let characters = vec![lines[pos].clone(), lines[pos + 1].clone()];
        let dialogues = vec![columns[0].join(" "), columns[1].join(" ")];

        Element::dual_dialogue(characters, dialogues)
            .ok()
            .map(|element| Step::one(element, cursor - pos))
    }

    /// Parse a character cue, an optional parenthetical, and the greedy
    /// dialogue run that follows.
    ///
    /// Emission order is parenthetical (if present), character, dialogue;
    /// the dialogue element is emitted even when the run is empty.
    fn parse_character_block(&self, lines: &[String], pos: usize) -> Step {
        let max_len = self.config.max_character_name_len;
        let name = lines[pos].clone();
        let mut cursor = pos + 1;
        let mut elements = Vec::new();

        if cursor < lines.len() && rules::is_parenthetical(&lines[cursor]) {
            elements.push(Element::parenthetical(lines[cursor].clone()));
            cursor += 1;
        }

        let mut dialogue_lines: Vec<&str> = Vec::new();
        while cursor < lines.len() && rules::is_dialogue(&lines[cursor], max_len) {
            dialogue_lines.push(lines[cursor].as_str());
            cursor += 1;
        }

        elements.push(Element::character(name));
        elements.push(Element::dialogue(dialogue_lines.join(" ")));

        Step {
            elements,
            consumed: cursor - pos,
        }
    }

    /// Fallback: accumulate an action run until a scene heading or character
    /// cue terminates it.
    fn parse_action_run(&self, lines: &[String], pos: usize) -> Step {
        let max_len = self.config.max_character_name_len;
        let mut cursor = pos + 1;

        while cursor < lines.len()
            && !rules::is_scene_heading(&lines[cursor])
            && !rules::is_character_name(&lines[cursor], max_len)
        {
            cursor += 1;
        }

        let text = lines[pos..cursor].join(" ");
        Step::one(Element::action(text), cursor - pos)
    }
}

impl ScreenplaySource for HeuristicParser {
    fn extract(&self, input: &str) -> Result<Screenplay, ScriptError> {
        Ok(self.parse_text(input))
    }
}
