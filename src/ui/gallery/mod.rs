//! Image gallery carousel (MVI pattern).
//!
//! A fixed-length sequence of image URLs with a single current index.
//! Navigation wraps at both ends. Each accepted navigation opens a
//! settle window during which further navigation is dropped, not
//! queued; the window closes when the settle timer fires.

mod intent;
mod reducer;
mod state;

use std::time::Duration;

pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use state::{classify, Direction, GalleryState, Slot};

/// How long a transition stays in flight after an accepted navigation.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
