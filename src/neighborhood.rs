/// State of every cell beyond either edge of the world. Edges are fixed, not wrapped.
pub const OFF: bool = false;

/// The three cells a new cell is computed from.
///
///   left center right
///          |
///         new
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    pub left: bool,
    pub center: bool,
    pub right: bool,
}

impl Neighborhood {
    pub const fn new(left: bool, center: bool, right: bool) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Index into a [`Rule`](crate::rule::Rule) table.
    ///
    /// Every off cell contributes its positional weight and every on cell contributes nothing, so
    /// `(on, on, on)` is `0` and `(off, off, off)` is `7`. This lines up with the most significant
    /// bit of a rule number landing at index `0`.
    pub const fn index(&self) -> u8 {
        let l = if self.left { 0 } else { 4 };
        let c = if self.center { 0 } else { 2 };
        let r = if self.right { 0 } else { 1 };

        l + c + r
    }
}
