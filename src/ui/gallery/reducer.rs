use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::state::{Direction, GalleryState};
use crate::ui::mvi::Reducer;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::Load { items } => GalleryState::new(items),

            GalleryIntent::Settle => GalleryState {
                transitioning: false,
                direction: Direction::None,
                ..state
            },

            // Navigation while a transition is in flight is dropped,
            // never queued: at most one transition at a time.
            GalleryIntent::Next => {
                if state.transitioning || state.items.is_empty() {
                    return state;
                }
                let len = state.items.len();
                GalleryState {
                    current: (state.current + 1) % len,
                    direction: Direction::Forward,
                    transitioning: true,
                    ..state
                }
            }

            GalleryIntent::Prev => {
                if state.transitioning || state.items.is_empty() {
                    return state;
                }
                let len = state.items.len();
                GalleryState {
                    current: (state.current + len - 1) % len,
                    direction: Direction::Backward,
                    transitioning: true,
                    ..state
                }
            }

            GalleryIntent::JumpTo(target) => {
                // Out-of-range targets are a caller contract violation;
                // ignored rather than asserted so a stray dot index can
                // never take the UI down.
                if state.transitioning || target >= state.items.len() {
                    return state;
                }
                // Plain numeric comparison, not modular distance: a jump
                // from the last index to 0 classifies as Backward even
                // though the wrap-forward path is shorter.
                let direction = if target > state.current {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                GalleryState {
                    current: target,
                    direction,
                    transitioning: true,
                    ..state
                }
            }
        }
    }
}
