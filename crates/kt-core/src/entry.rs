use crate::grid;

/// Ce qu'une position de la grille décode : un scalaire ou une paire.
///
/// # Example
/// ```
/// use kt_core::entry::Target;
/// let t = Target::from_scalars(&['\u{304b}', '\u{309a}']).unwrap();
/// assert_eq!(t.as_slice(), &['\u{304b}', '\u{309a}']);
/// assert!(Target::from_scalars(&[]).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// One Unicode scalar.
    Single(char),
    /// Two scalars decoded in sequence (base + combining mark, typically).
    Pair([char; 2]),
}

impl Target {
    /// Build a target from one or two scalars. Any other count is `None`.
    #[must_use]
    pub fn from_scalars(scalars: &[char]) -> Option<Self> {
        match *scalars {
            [c] => Some(Self::Single(c)),
            [a, b] => Some(Self::Pair([a, b])),
            _ => None,
        }
    }

    /// The scalars this target decodes to, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        match self {
            Self::Single(c) => std::slice::from_ref(c),
            Self::Pair(pair) => pair,
        }
    }
}

/// One `(row, column) → target` mapping fed to the compiler.
///
/// `row` may carry a plane prefix above its low byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceEntry {
    /// First grid axis (wire value, e.g. `0x7a` for ku 90).
    pub row: u16,
    /// Second grid axis, expected in `[0x21, 0x7e]`.
    pub column: u8,
    /// Decoded scalar(s).
    pub target: Target,
}

impl SourceEntry {
    #[must_use]
    pub fn new(row: u16, column: u8, target: Target) -> Self {
        Self {
            row,
            column,
            target,
        }
    }

    /// Shorthand for a single-scalar entry.
    ///
    /// # Example
    /// ```
    /// use kt_core::entry::SourceEntry;
    /// let e = SourceEntry::single(0x75, 0x21, '\u{4e9c}');
    /// assert_eq!(e.code_point(), 0x7521);
    /// ```
    #[must_use]
    pub fn single(row: u16, column: u8, c: char) -> Self {
        Self::new(row, column, Target::Single(c))
    }

    /// Shorthand for a two-scalar entry.
    #[must_use]
    pub fn pair(row: u16, column: u8, a: char, b: char) -> Self {
        Self::new(row, column, Target::Pair([a, b]))
    }

    /// Code point addressing this entry.
    #[must_use]
    pub fn code_point(&self) -> u32 {
        grid::code_point(self.row, self.column)
    }

    /// Sort key matching ascending `(row, column)` order.
    #[must_use]
    pub fn position(&self) -> (u16, u8) {
        (self.row, self.column)
    }
}
