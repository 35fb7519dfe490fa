use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// Mount a new item sequence, positioned at index 0.
    Load { items: Vec<String> },
    /// Advance to the next item, wrapping at the end.
    Next,
    /// Go back to the previous item, wrapping at the start.
    Prev,
    /// Jump directly to an index (dot control).
    JumpTo(usize),
    /// The settle window elapsed. Emitted by the settle timer only.
    Settle,
}

impl Intent for GalleryIntent {}
