/*!
 * # fadein
 *
 * A Rust library for extracting structured screenplay content from script
 * files.
 *
 * ## Features
 *
 * - Heuristic reconstruction of screenplay structure from unstructured
 *   plain text (scene headings, character cues, parentheticals, dialogue,
 *   dual dialogue, action)
 * - Structured extraction from Final Draft (`.fdx`) markup
 * - Title/author metadata recovery with sensible defaults
 * - Derived views: character roster, scene list, emphasized terms
 * - JSON extraction reports
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `screenplay`: Canonical element model shared by both front ends
 * - `heuristic`: Rule-based classifier for unstructured line text:
 *   - `heuristic::rules`: Line predicates and pattern vocabulary
 *   - `heuristic::metadata`: Title/author recovery scans
 * - `finaldraft`: Tree-walk front end for Final Draft markup
 * - `analysis`: Roster, scene list, and emphasis analyzers
 * - `app_config`: Configuration management
 * - `app_controller`: Extraction pipeline controller
 * - `file_utils`: File system operations and format dispatch
 * - `errors`: Custom error types for the extraction surfaces
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod finaldraft;
pub mod heuristic;
pub mod screenplay;

// Re-export main types for easier usage
pub use analysis::{ScriptAnalysis, analyze, extract_emphasis, extract_roster, extract_scenes};
pub use app_config::{Config, HeuristicConfig};
pub use app_controller::{Controller, ExtractionReport};
pub use errors::{MarkupError, ScriptError};
pub use file_utils::ScriptFormat;
pub use finaldraft::{FinalDraftParser, FinalDraftScript};
pub use heuristic::HeuristicParser;
pub use screenplay::{Element, ElementKind, Screenplay, ScreenplaySource, ScriptMetadata};
