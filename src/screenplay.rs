use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::errors::ScriptError;

// @module: Canonical screenplay element model

/// Default title used when no title line can be recovered
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Default author used when no byline can be recovered
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// The structural kind of a screenplay element.
///
/// The string forms mirror the paragraph `Type` attribute values used by the
/// Final Draft format, which is also the shape the JSON report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    SceneHeading,
    Character,
    Parenthetical,
    Dialogue,
    DualDialogue,
    Action,
}

impl ElementKind {
    // @returns: The paragraph-type string for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SceneHeading => "Scene Heading",
            Self::Character => "Character",
            Self::Parenthetical => "Parenthetical",
            Self::Dialogue => "Dialogue",
            Self::DualDialogue => "Dual Dialogue",
            Self::Action => "Action",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Scene Heading" => Ok(Self::SceneHeading),
            "Character" => Ok(Self::Character),
            "Parenthetical" => Ok(Self::Parenthetical),
            "Dialogue" => Ok(Self::Dialogue),
            "Dual Dialogue" => Ok(Self::DualDialogue),
            "Action" => Ok(Self::Action),
            _ => Err(anyhow!("Unknown paragraph type: {}", s)),
        }
    }
}

/// One structural unit of a screenplay.
///
/// All single-speaker kinds carry one text payload. `DualDialogue` carries
/// two index-aligned character/dialogue pairs; it is never constructed with
/// any other arity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    #[serde(rename = "Scene Heading")]
    SceneHeading { text: String },

    Character { text: String },

    Parenthetical { text: String },

    Dialogue { text: String },

    #[serde(rename = "Dual Dialogue")]
    DualDialogue {
        characters: Vec<String>,
        dialogues: Vec<String>,
    },

    Action { text: String },
}

impl Element {
    pub fn scene_heading<S: Into<String>>(text: S) -> Self {
        Self::SceneHeading { text: text.into() }
    }

    pub fn character<S: Into<String>>(text: S) -> Self {
        Self::Character { text: text.into() }
    }

    pub fn parenthetical<S: Into<String>>(text: S) -> Self {
        Self::Parenthetical { text: text.into() }
    }

    pub fn dialogue<S: Into<String>>(text: S) -> Self {
        Self::Dialogue { text: text.into() }
    }

    pub fn action<S: Into<String>>(text: S) -> Self {
        Self::Action { text: text.into() }
    }

    // @creates: Validated dual-dialogue element
    // @validates: Exactly two index-aligned character/dialogue pairs
    pub fn dual_dialogue(characters: Vec<String>, dialogues: Vec<String>) -> Result<Self> {
        if characters.len() != 2 || dialogues.len() != 2 {
            return Err(anyhow!(
                "Dual dialogue requires exactly two speakers, got {} characters and {} dialogues",
                characters.len(),
                dialogues.len()
            ));
        }

        Ok(Self::DualDialogue {
            characters,
            dialogues,
        })
    }

    /// Build a single-payload element for the given kind.
    ///
    /// `DualDialogue` has no single-text form and is rejected here; the
    /// structured front end only ever maps single-speaker paragraph types.
    pub fn from_kind(kind: ElementKind, text: String) -> Result<Self> {
        match kind {
            ElementKind::SceneHeading => Ok(Self::SceneHeading { text }),
            ElementKind::Character => Ok(Self::Character { text }),
            ElementKind::Parenthetical => Ok(Self::Parenthetical { text }),
            ElementKind::Dialogue => Ok(Self::Dialogue { text }),
            ElementKind::Action => Ok(Self::Action { text }),
            ElementKind::DualDialogue => {
                Err(anyhow!("Dual dialogue cannot be built from a single text"))
            }
        }
    }

    // @returns: Structural kind of this element
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::SceneHeading { .. } => ElementKind::SceneHeading,
            Self::Character { .. } => ElementKind::Character,
            Self::Parenthetical { .. } => ElementKind::Parenthetical,
            Self::Dialogue { .. } => ElementKind::Dialogue,
            Self::DualDialogue { .. } => ElementKind::DualDialogue,
            Self::Action { .. } => ElementKind::Action,
        }
    }

    /// Text payload for single-speaker kinds, `None` for dual dialogue.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::SceneHeading { text }
            | Self::Character { text }
            | Self::Parenthetical { text }
            | Self::Dialogue { text }
            | Self::Action { text } => Some(text),
            Self::DualDialogue { .. } => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DualDialogue {
                characters,
                dialogues,
            } => {
                for (name, line) in characters.iter().zip(dialogues.iter()) {
                    writeln!(f, "{}: {}", name, line)?;
                }
                Ok(())
            }
            other => write!(f, "{}", other.text().unwrap_or_default()),
        }
    }
}

/// Title and author recovered from a screenplay's opening segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    // @field: Document title
    #[serde(rename = "Title")]
    pub title: String,

    // @field: Document author
    #[serde(rename = "Author")]
    pub author: String,
}

impl Default for ScriptMetadata {
    fn default() -> Self {
        ScriptMetadata {
            title: UNKNOWN_TITLE.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
        }
    }
}

impl ScriptMetadata {
    /// Apply the default strings to whatever the metadata scans recovered.
    ///
    /// Substitution happens once here, after both scans have run, so partial
    /// results never depend on scan order.
    pub fn from_scans(title: Option<String>, author: Option<String>) -> Self {
        ScriptMetadata {
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author: author.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        }
    }
}

/// A parsed screenplay: ordered elements plus recovered metadata.
///
/// Produced once per parse call and owned by the caller; nothing in this
/// crate mutates a screenplay after it has been produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screenplay {
    /// Recovered title/author metadata
    pub metadata: ScriptMetadata,

    /// Elements in document order
    pub elements: Vec<Element>,
}

impl Screenplay {
    pub fn new(metadata: ScriptMetadata, elements: Vec<Element>) -> Self {
        Screenplay { metadata, elements }
    }

    /// Iterator over elements of one kind, in document order.
    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.kind() == kind)
    }
}

impl fmt::Display for Screenplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screenplay")?;
        writeln!(f, "Title: {}", self.metadata.title)?;
        writeln!(f, "Author: {}", self.metadata.author)?;
        writeln!(f, "Elements: {}", self.elements.len())?;
        Ok(())
    }
}

/// A producer of [`Screenplay`] values from raw document text.
///
/// Both front ends implement this, so callers pick a producer by input kind
/// and share everything downstream.
pub trait ScreenplaySource {
    fn extract(&self, input: &str) -> Result<Screenplay, ScriptError>;
}
