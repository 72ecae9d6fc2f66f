//! Loop counter name allocation.

const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Starting cursor position, biased so the first name is `i`.
const START_POS: usize = 8;

/// Allocator for distinct loop counter names.
///
/// Hands out `i` through `z`, then two-character names and beyond. Each
/// generation session should own its own allocator (or call [`reset`]
/// between independent passes) so counter names never leak across
/// unrelated outputs.
///
/// Names past `z` are repetitions of a single letter (`aa`, `bb`, …, `zz`,
/// `aaa`, …), not combinatorial pairs: the repeated letter is chosen by
/// `position % 26` and the repeat count grows by one every 26 calls.
///
/// # Example
///
/// ```
/// use jsfrag::IteratorNames;
///
/// let mut names = IteratorNames::new();
/// assert_eq!(names.next_name(), "i");
/// assert_eq!(names.next_name(), "j");
/// names.reset();
/// assert_eq!(names.next_name(), "i");
/// ```
///
/// [`reset`]: IteratorNames::reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IteratorNames {
    pos: usize,
}

impl IteratorNames {
    /// Create a fresh allocator positioned at `i`.
    pub fn new() -> Self {
        Self { pos: START_POS }
    }

    /// Return the next unused counter name and advance the cursor.
    pub fn next_name(&mut self) -> String {
        let (idx, count) = if self.pos < ALPHABET.len() {
            (self.pos, 1)
        } else {
            (self.pos % ALPHABET.len(), self.pos / ALPHABET.len() + 1)
        };
        self.pos += 1;

        ALPHABET[idx].to_string().repeat(count)
    }

    /// Move the cursor back to `i`, as if freshly created.
    pub fn reset(&mut self) {
        self.pos = START_POS;
    }
}

impl Default for IteratorNames {
    fn default() -> Self {
        Self::new()
    }
}
