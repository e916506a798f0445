use crate::edge::Axis;

/// A width/height pair in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn along(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }
}

/// Per-axis lower bounds for a resizable pane.
///
/// The drag controller compares candidate sizes against these floors with a
/// strict `>`: a pane never lands on the floor itself, it stops one cell of
/// movement above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinSize {
    pub width: u16,
    pub height: u16,
}

impl MinSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A uniform floor applied to both axes.
    pub const fn splat(value: u16) -> Self {
        Self {
            width: value,
            height: value,
        }
    }

    pub const fn along(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }
}

impl From<u16> for MinSize {
    fn from(value: u16) -> Self {
        MinSize::splat(value)
    }
}
