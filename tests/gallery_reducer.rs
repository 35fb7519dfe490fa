use fluxmart::ui::gallery::{classify, Direction, GalleryIntent, GalleryReducer, GalleryState, Slot};
use fluxmart::ui::mvi::Reducer;

fn gallery(n: usize) -> GalleryState {
    GalleryState::new((0..n).map(|i| format!("img-{}.png", i)).collect())
}

fn reduce(state: GalleryState, intent: GalleryIntent) -> GalleryState {
    GalleryReducer::reduce(state, intent)
}

fn settled(state: GalleryState) -> GalleryState {
    reduce(state, GalleryIntent::Settle)
}

// -- basic navigation --------------------------------------------------------

#[test]
fn load_starts_at_zero_not_transitioning() {
    let state = reduce(GalleryState::default(), GalleryIntent::Load {
        items: vec!["a".into(), "b".into()],
    });
    assert_eq!(state.current(), 0);
    assert_eq!(state.direction(), Direction::None);
    assert!(!state.is_transitioning());
}

#[test]
fn next_advances_and_marks_forward() {
    let state = reduce(gallery(3), GalleryIntent::Next);
    assert_eq!(state.current(), 1);
    assert_eq!(state.direction(), Direction::Forward);
    assert!(state.is_transitioning());
}

#[test]
fn prev_retreats_and_marks_backward() {
    let state = settled(reduce(gallery(3), GalleryIntent::Next));
    let state = reduce(state, GalleryIntent::Prev);
    assert_eq!(state.current(), 0);
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn next_wraps_at_the_end() {
    let mut state = gallery(3);
    for expected in [1, 2, 0, 1] {
        state = settled(reduce(state, GalleryIntent::Next));
        assert_eq!(state.current(), expected);
    }
}

#[test]
fn prev_wraps_at_the_start() {
    let state = reduce(gallery(5), GalleryIntent::Prev);
    assert_eq!(state.current(), 4);
}

// -- inverse property --------------------------------------------------------

#[test]
fn next_then_prev_returns_to_start_once_settled() {
    for n in 2..=6 {
        for start in 0..n {
            let mut state = gallery(n);
            for _ in 0..start {
                state = settled(reduce(state, GalleryIntent::Next));
            }
            assert_eq!(state.current(), start);
            let state = settled(reduce(state, GalleryIntent::Next));
            let state = settled(reduce(state, GalleryIntent::Prev));
            assert_eq!(state.current(), start, "n={} start={}", n, start);
        }
    }
}

// -- index stays in bounds ---------------------------------------------------

#[test]
fn index_stays_in_bounds_under_mixed_intents() {
    let intents = [
        GalleryIntent::Next,
        GalleryIntent::Next,
        GalleryIntent::Prev,
        GalleryIntent::JumpTo(3),
        GalleryIntent::Prev,
        GalleryIntent::Prev,
        GalleryIntent::Next,
        GalleryIntent::JumpTo(0),
        GalleryIntent::Prev,
    ];
    let mut state = gallery(4);
    for intent in intents {
        state = settled(reduce(state, intent.clone()));
        assert!(state.current() < state.len(), "after {:?}", intent);
    }
}

// -- transition gating -------------------------------------------------------

#[test]
fn second_next_during_transition_is_dropped() {
    let first = reduce(gallery(4), GalleryIntent::Next);
    let second = reduce(first.clone(), GalleryIntent::Next);
    assert_eq!(second.current(), first.current());
    assert_eq!(second.direction(), first.direction());
    assert!(second.is_transitioning());
}

#[test]
fn prev_and_jump_also_dropped_during_transition() {
    let state = reduce(gallery(4), GalleryIntent::Next);
    let after_prev = reduce(state.clone(), GalleryIntent::Prev);
    assert_eq!(after_prev.current(), state.current());
    let after_jump = reduce(state.clone(), GalleryIntent::JumpTo(3));
    assert_eq!(after_jump.current(), state.current());
}

#[test]
fn settle_clears_transition_and_direction() {
    let state = settled(reduce(gallery(4), GalleryIntent::Next));
    assert!(!state.is_transitioning());
    assert_eq!(state.direction(), Direction::None);
    // Navigation is accepted again.
    let state = reduce(state, GalleryIntent::Next);
    assert_eq!(state.current(), 2);
}

// -- jump-to -----------------------------------------------------------------

#[test]
fn jump_sets_index_exactly() {
    for target in 0..5 {
        let state = reduce(gallery(5), GalleryIntent::JumpTo(target));
        assert_eq!(state.current(), target);
    }
}

#[test]
fn jump_forward_classifies_forward() {
    let state = reduce(gallery(5), GalleryIntent::JumpTo(3));
    assert_eq!(state.direction(), Direction::Forward);
}

#[test]
fn jump_from_last_to_first_classifies_backward() {
    // Numeric comparison, not modular distance: 4 → 0 in a 5-item
    // gallery is Backward even though wrapping forward is shorter.
    let state = settled(reduce(gallery(5), GalleryIntent::JumpTo(4)));
    assert_eq!(state.current(), 4);
    let state = reduce(state, GalleryIntent::JumpTo(0));
    assert_eq!(state.current(), 0);
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn jump_to_current_classifies_backward() {
    let state = settled(reduce(gallery(5), GalleryIntent::JumpTo(2)));
    let state = reduce(state, GalleryIntent::JumpTo(2));
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn jump_out_of_range_is_ignored() {
    let state = reduce(gallery(3), GalleryIntent::JumpTo(7));
    assert_eq!(state.current(), 0);
    assert!(!state.is_transitioning());
}

// -- degenerate sizes --------------------------------------------------------

#[test]
fn single_item_navigation_stays_at_zero() {
    let state = reduce(gallery(1), GalleryIntent::Next);
    assert_eq!(state.current(), 0);
    let state = settled(state);
    let state = reduce(state, GalleryIntent::Prev);
    assert_eq!(state.current(), 0);
    assert!(!state.controls_visible());
}

#[test]
fn empty_gallery_navigation_is_inert() {
    let state = reduce(gallery(0), GalleryIntent::Next);
    assert!(state.is_empty());
    assert!(!state.is_transitioning());
    let state = reduce(state, GalleryIntent::Prev);
    let state = reduce(state, GalleryIntent::JumpTo(0));
    let state = reduce(state, GalleryIntent::Settle);
    assert!(state.is_empty());
    assert!(!state.controls_visible());
}

// -- slot classification -----------------------------------------------------

#[test]
fn slots_follow_the_current_index() {
    let state = settled(reduce(gallery(5), GalleryIntent::JumpTo(2)));
    assert_eq!(state.slot(2), Slot::Current);
    assert_eq!(state.slot(1), Slot::Previous);
    assert_eq!(state.slot(3), Slot::Next);
    assert_eq!(state.slot(0), Slot::Hidden);
    assert_eq!(state.slot(4), Slot::Hidden);
}

#[test]
fn classify_wraps_like_navigation() {
    assert_eq!(classify(4, 0, 5), Slot::Previous);
    assert_eq!(classify(0, 4, 5), Slot::Next);
}
