/*!
 * Derived analytical views over a parsed screenplay.
 *
 * These read-only analyzers work on the canonical element stream, so they
 * serve both front ends:
 * - the character roster (explicit cast list merged with character cues),
 * - the ordered scene list,
 * - the emphasized (capitalized) terms found in action text.
 */

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::screenplay::{Element, ElementKind, Screenplay};

/// Pattern for emphasized terms in action text: runs of at least two
/// upper-case letters, digits, or spaces.
static EMPHASIS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z0-9\s]{2,})\b").expect("Invalid emphasis regex"));

/// The three derived views bundled for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptAnalysis {
    /// Sorted, de-duplicated character roster
    pub characters: Vec<String>,

    /// Scene headings in document order
    pub scenes: Vec<String>,

    /// Sorted capitalized terms from action text, minus the roster
    pub emphasized: Vec<String>,
}

/// Gather the distinct character names appearing in a screenplay.
///
/// Two sources contribute: an explicit cast list (empty for heuristic
/// parses) and every character cue whose text carries no parenthetical
/// remnant. Names are upper-cased, de-duplicated, and sorted.
pub fn extract_roster(script: &Screenplay, cast: &[String]) -> Vec<String> {
    let mut roster: Vec<String> = Vec::new();

    for name in cast {
        push_unique(&mut roster, name.to_uppercase());
    }

    for element in script.elements_of_kind(ElementKind::Character) {
        if let Some(text) = element.text() {
            let text = text.trim();
            if !text.is_empty() && !text.contains('(') {
                push_unique(&mut roster, text.to_uppercase());
            }
        }
    }

    roster.sort();
    roster
}

/// Collect every scene heading's text, in document order, not de-duplicated.
pub fn extract_scenes(script: &Screenplay) -> Vec<String> {
    script
        .elements_of_kind(ElementKind::SceneHeading)
        .filter_map(Element::text)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect()
}

/// Collect emphasized terms from action text.
///
/// Only the first pattern match per action block is taken. Terms already in
/// the roster or already collected are dropped; the result is sorted.
pub fn extract_emphasis(script: &Screenplay, roster: &[String]) -> Vec<String> {
    let mut emphasized: Vec<String> = Vec::new();

    for element in script.elements_of_kind(ElementKind::Action) {
        let Some(text) = element.text() else { continue };
        let Some(found) = EMPHASIS_PATTERN.find(text) else {
            continue;
        };

        let term = found.as_str().trim().to_string();
        if !term.is_empty() && !roster.contains(&term) {
            push_unique(&mut emphasized, term);
        }
    }

    emphasized.sort();
    emphasized
}

/// Run all three analyzers over a screenplay.
pub fn analyze(script: &Screenplay, cast: &[String]) -> ScriptAnalysis {
    let characters = extract_roster(script, cast);
    let scenes = extract_scenes(script);
    let emphasized = extract_emphasis(script, &characters);

    ScriptAnalysis {
        characters,
        scenes,
        emphasized,
    }
}

fn push_unique(items: &mut Vec<String>, value: String) {
    if !items.contains(&value) {
        items.push(value);
    }
}
