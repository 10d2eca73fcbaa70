use crate::types::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub include_start: bool,
    pub include_end: bool,
}

impl Bounds {
    pub const HALF_OPEN: Bounds = Bounds::new(true, false);
    pub const HALF_OPEN_START: Bounds = Bounds::new(false, true);
    pub const CLOSED: Bounds = Bounds::new(true, true);
    pub const OPEN: Bounds = Bounds::new(false, false);

    pub const fn new(include_start: bool, include_end: bool) -> Self {
        Self {
            include_start,
            include_end,
        }
    }

    pub const fn uniform(include_edges: bool) -> Self {
        Self::new(include_edges, include_edges)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::HALF_OPEN
    }
}

/// Tests whether `x` lies between `start` and `end`. The bounds are not reordered, so
/// `start > end` never matches. NaN never matches.
pub fn in_range(x: Float, start: Float, end: Float, bounds: Bounds) -> bool {
    let start_check = if bounds.include_start {
        x >= start
    } else {
        x > start
    };
    let end_check = if bounds.include_end { x <= end } else { x < end };
    start_check && end_check
}
