use std::str::FromStr;

use thiserror::Error;

/// A draggable side of a resizable rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// The dimension a drag on a given edge manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 4] = [
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::Left,
        ResizeEdge::Right,
    ];

    pub const fn axis(self) -> Axis {
        match self {
            ResizeEdge::Left | ResizeEdge::Right => Axis::Width,
            ResizeEdge::Top | ResizeEdge::Bottom => Axis::Height,
        }
    }

    /// Whether positive pointer movement along the axis grows the
    /// rectangle. Dragging the right edge rightward grows the box;
    /// dragging the left edge rightward shrinks it.
    pub const fn grows_with_pointer(self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::Bottom)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown edge {0:?} (expected top, bottom, left or right)")]
pub struct ParseEdgeError(String);

impl FromStr for ResizeEdge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(ResizeEdge::Top),
            "bottom" => Ok(ResizeEdge::Bottom),
            "left" => Ok(ResizeEdge::Left),
            "right" => Ok(ResizeEdge::Right),
            other => Err(ParseEdgeError(other.to_owned())),
        }
    }
}

/// Which edges of a pane accept resize drags.
///
/// `resolve` normalizes the three accepted shapes into a deduplicated,
/// order-stable edge list. An explicit empty list disables resizing
/// entirely; only content renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeSpec {
    Single(ResizeEdge),
    Many(Vec<ResizeEdge>),
    All,
}

impl EdgeSpec {
    pub fn resolve(&self) -> Vec<ResizeEdge> {
        match self {
            EdgeSpec::All => ResizeEdge::ALL.to_vec(),
            EdgeSpec::Single(edge) => vec![*edge],
            EdgeSpec::Many(edges) => {
                let mut resolved = Vec::with_capacity(edges.len());
                for edge in edges {
                    if !resolved.contains(edge) {
                        resolved.push(*edge);
                    }
                }
                resolved
            }
        }
    }
}

impl Default for EdgeSpec {
    fn default() -> Self {
        EdgeSpec::All
    }
}

impl From<ResizeEdge> for EdgeSpec {
    fn from(edge: ResizeEdge) -> Self {
        EdgeSpec::Single(edge)
    }
}

impl FromStr for EdgeSpec {
    type Err = ParseEdgeError;

    /// Parses `"all"`, a single edge name, or a comma-separated list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(EdgeSpec::All);
        }
        let edges = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(ResizeEdge::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        match edges.as_slice() {
            [edge] => Ok(EdgeSpec::Single(*edge)),
            _ => Ok(EdgeSpec::Many(edges)),
        }
    }
}
