/*!
 * Title and author recovery from the opening lines of a plain-text script.
 *
 * Both scans are pure functions returning `Option<String>`; the default
 * strings are substituted once at the boundary (`extract_metadata`), after
 * both scans have run, so no partially filled state is ever observable.
 * Metadata recovery never fails: absence is an option, not an error.
 */

use log::debug;

use crate::app_config::HeuristicConfig;
use crate::heuristic::rules;
use crate::screenplay::ScriptMetadata;

/// Scan the first `scan_limit` lines for a title candidate.
///
/// A title is the first fully upper-case line that is not screenplay
/// vocabulary and does not lead with a digit.
pub fn find_title(lines: &[String], scan_limit: usize, extra_excluded: &[String]) -> Option<String> {
    for line in lines.iter().take(scan_limit) {
        if !line.is_empty()
            && *line == line.to_uppercase()
            && !rules::is_excluded_candidate(line, extra_excluded)
        {
            debug!("Title candidate accepted: {}", line);
            return Some(line.clone());
        }
    }
    None
}

/// Scan the whole document for a byline cue and the author following it.
///
/// The cue is a line equal (case-insensitively) to `written by` or `by`; the
/// author is the first subsequent line passing the title filters. The first
/// success anywhere in the document wins.
pub fn find_author(lines: &[String], extra_excluded: &[String]) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        if !is_byline_cue(line) {
            continue;
        }

        for candidate in &lines[i + 1..] {
            if !candidate.is_empty() && !rules::is_excluded_candidate(candidate, extra_excluded) {
                debug!("Author candidate accepted after byline: {}", candidate);
                return Some(candidate.clone());
            }
        }
    }
    None
}

/// Whether a line introduces the author (`by` / `written by`).
pub fn is_byline_cue(line: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered == "written by" || lowered == "by"
}

/// Run both scans and substitute the defaults for whatever is missing.
pub fn extract_metadata(lines: &[String], config: &HeuristicConfig) -> ScriptMetadata {
    let title = find_title(lines, config.title_scan_lines, &config.extra_excluded_terms);
    let author = find_author(lines, &config.extra_excluded_terms);
    ScriptMetadata::from_scans(title, author)
}
