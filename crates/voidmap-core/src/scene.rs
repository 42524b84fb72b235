//! Scene files: an area and the boxes placed in it.
//!
//! A scene is stored as TOML (or JSON, picked by file extension):
//!
//! ```toml
//! [area]
//! x = 0
//! y = 0
//! width = 100
//! height = 200
//!
//! [[box]]
//! x = 20
//! y = 20
//! width = 10
//! height = 10
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DecomposeError, Rect, group, min_buffer_len, try_decompose};

/// The input to one decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// The region to tile.
    pub area: Rect,
    /// Occupied boxes, in placement order.
    #[serde(default, rename = "box", alias = "boxes")]
    pub boxes: Vec<Rect>,
}

/// A broken placement precondition found by [`Scene::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneIssue {
    /// Box has zero width or height.
    Degenerate { index: usize },
    /// Box extends past the area.
    OutsideArea { index: usize },
    /// Two boxes share at least one pixel.
    Overlap { first: usize, second: usize },
}

impl fmt::Display for SceneIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { index } => write!(f, "box #{index} is empty"),
            Self::OutsideArea { index } => write!(f, "box #{index} extends past the area"),
            Self::Overlap { first, second } => {
                write!(f, "box #{first} overlaps box #{second}")
            }
        }
    }
}

impl Scene {
    pub fn new(area: Rect, boxes: Vec<Rect>) -> Self {
        Self { area, boxes }
    }

    /// Parses a scene from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Parses a scene from JSON text.
    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Reads a scene file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    ///
    /// Errors are prefixed with the file path.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        };
        parsed.map_err(|e| format!("{}: {e}", path.display()))
    }

    /// Decomposes the free space, optionally grouping the result.
    ///
    /// Sizes the buffer with [`min_buffer_len`], so only
    /// [`DecomposeError::TooManyBoxes`] can fail in practice.
    pub fn map(&self, grouped: bool) -> Result<Vec<Rect>, DecomposeError> {
        let mut buffer = vec![Rect::EMPTY; min_buffer_len(self.boxes.len())];
        let mut len = try_decompose(&self.area, &self.boxes, &mut buffer)?;
        if grouped {
            len = group(&mut buffer[..len]);
        }
        buffer.truncate(len);
        Ok(buffer)
    }

    /// Lists every box that breaks the placement preconditions.
    ///
    /// Decomposition never calls this; its output for a scene with
    /// issues is unspecified.
    pub fn check(&self) -> Vec<SceneIssue> {
        let mut issues = Vec::new();
        for (index, b) in self.boxes.iter().enumerate() {
            if b.is_empty() {
                issues.push(SceneIssue::Degenerate { index });
            } else if !self.area.contains(b) {
                issues.push(SceneIssue::OutsideArea { index });
            }
        }
        for (first, a) in self.boxes.iter().enumerate() {
            for (second, b) in self.boxes.iter().enumerate().skip(first + 1) {
                if a.overlaps(b) {
                    issues.push(SceneIssue::Overlap { first, second });
                }
            }
        }
        issues
    }
}
