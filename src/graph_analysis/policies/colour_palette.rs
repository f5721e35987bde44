/// Colours assigned to groups, in order
pub const PALETTE: [&str; 9] = [
    "red",
    "blue",
    "green",
    "yellow",
    "orange",
    "purple",
    "maroon",
    "brown",
    "greenyellow",
];

/// Per-render cursor over [`PALETTE`].
///
/// `next` advances before reading, so the first group is coloured with the
/// second palette entry. The cursor wraps after the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColourPalette {
    cursor: usize,
}

impl ColourPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        PALETTE[self.cursor]
    }

    pub fn next(&mut self) -> &'static str {
        self.cursor = (self.cursor + 1) % PALETTE.len();
        self.current()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
