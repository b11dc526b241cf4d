use once_cell::sync::Lazy;
use regex::Regex;

// @module: Line classification predicates

// @const: Scene heading prefix pattern
static SCENE_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(INT\.|EXT\.|INT/EXT\.)").unwrap()
});

// @const: Character cue alphabet (upper-case letters plus cue punctuation)
static CHARACTER_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z\s\-()']+$").unwrap()
});

// @const: Full-line parenthetical
static PARENTHETICAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(.*\)$").unwrap()
});

// @const: Editing transition cues
static TRANSITION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(CUT TO:|FADE IN:|FADE OUT:|DISSOLVE TO:|SMASH CUT TO:)").unwrap()
});

/// Lines that look like titles or authors but belong to the screenplay's
/// formatting vocabulary. Used by the metadata scans to reject candidates.
pub const EXCLUDED_TERMS: [&str; 15] = [
    "CUT TO:",
    "FADE IN:",
    "FADE OUT:",
    "CREDITS START.",
    "CREDITS END.",
    "DISSOLVE TO:",
    "SMASH CUT TO:",
    "INT.",
    "EXT.",
    "INT/EXT.",
    "DAY",
    "NIGHT",
    "MORNING",
    "EVENING",
    "LATER",
];

/// Scene heading: `INT.`, `EXT.` or `INT/EXT.` prefix, case-insensitive.
pub fn is_scene_heading(line: &str) -> bool {
    SCENE_HEADING_REGEX.is_match(line)
}

/// Character cue: entirely cue alphabet, equal to its own upper-cased form,
/// and short enough to be a name rather than shouted action text.
pub fn is_character_name(line: &str, max_len: usize) -> bool {
    CHARACTER_NAME_REGEX.is_match(line)
        && line == line.to_uppercase()
        && line.chars().count() <= max_len
}

/// Parenthetical: a full line wrapped in parentheses.
pub fn is_parenthetical(line: &str) -> bool {
    PARENTHETICAL_REGEX.is_match(line)
}

/// Dialogue continuation: any non-empty line that is not a scene heading,
/// character cue, or parenthetical. Evaluated per line, so a scene heading
/// embedded in a dialogue run always terminates the run.
pub fn is_dialogue(line: &str, max_name_len: usize) -> bool {
    !line.is_empty()
        && !is_scene_heading(line)
        && !is_character_name(line, max_name_len)
        && !is_parenthetical(line)
}

/// Transition cue such as `CUT TO:` or `FADE IN:`.
pub fn is_transition(line: &str) -> bool {
    TRANSITION_REGEX.is_match(line)
}

/// Whether a line is disqualified as a title/author candidate.
///
/// Rejects the fixed vocabulary, scene headings, transitions, and lines
/// leading with a digit (page numbers, dates).
pub fn is_excluded_candidate(line: &str, extra_excluded: &[String]) -> bool {
    EXCLUDED_TERMS.contains(&line)
        || extra_excluded.iter().any(|term| term == line)
        || is_scene_heading(line)
        || is_transition(line)
        || line.chars().next().is_some_and(|c| c.is_ascii_digit())
}
