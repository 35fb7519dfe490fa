//! Gallery navigation controls: previous/next arrows and the dot row.
//!
//! The controls are stateless over the gallery state. Rendering and
//! mouse hit-testing share [`control_rects`] so the click targets are
//! exactly the drawn affordances. Activation is suppressed at the
//! source while a transition is in flight, and the controls disappear
//! entirely when there is at most one item.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::ui::app::{App, View};
use crate::ui::gallery::{GalleryIntent, GalleryState};
use crate::ui::layout::body_rect;

pub const PREV_SYMBOL: &str = "‹";
pub const NEXT_SYMBOL: &str = "›";

/// Screen regions of the activation targets within the gallery body.
pub struct ControlRects {
    pub prev: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

/// Compute the arrow and dot regions for a gallery body.
///
/// Arrows sit vertically centered at the left and right edges; dots
/// form a centered row one line above the bottom border. Degenerate
/// bodies collapse the rects to zero size, which no click can hit.
pub fn control_rects(body: Rect, dot_count: usize) -> ControlRects {
    let arrow_height = 3.min(body.height);
    let arrow_y = body.y + (body.height.saturating_sub(arrow_height)) / 2;
    let arrow_width = 3.min(body.width);

    let prev = Rect {
        x: body.x,
        y: arrow_y,
        width: arrow_width,
        height: arrow_height,
    };
    let next = Rect {
        x: body.x + body.width.saturating_sub(arrow_width),
        y: arrow_y,
        width: arrow_width,
        height: arrow_height,
    };

    // One cell per dot, one cell gap between dots.
    let mut dots = Vec::with_capacity(dot_count);
    if body.height >= 2 && dot_count > 0 {
        let row_width = (dot_count * 2 - 1) as u16;
        if row_width <= body.width {
            let x0 = body.x + (body.width - row_width) / 2;
            let y = body.y + body.height - 2;
            for i in 0..dot_count {
                dots.push(Rect {
                    x: x0 + (i as u16) * 2,
                    y,
                    width: 1,
                    height: 1,
                });
            }
        }
    }

    ControlRects { prev, next, dots }
}

/// Map a click position to a navigation intent.
///
/// Returns None when the controls are not offered (≤ 1 item), while a
/// transition is in flight (disabled), or when nothing was hit.
pub fn hit_test(
    state: &GalleryState,
    rects: &ControlRects,
    column: u16,
    row: u16,
) -> Option<GalleryIntent> {
    if !state.controls_visible() || state.is_transitioning() {
        return None;
    }

    let position = Position::new(column, row);
    if rects.prev.contains(position) {
        return Some(GalleryIntent::Prev);
    }
    if rects.next.contains(position) {
        return Some(GalleryIntent::Next);
    }
    for (i, dot) in rects.dots.iter().enumerate() {
        if dot.contains(position) {
            return Some(GalleryIntent::JumpTo(i));
        }
    }
    None
}

/// Route a mouse event to the gallery controls.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.view() != View::Gallery {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    let rects = control_rects(body, app.gallery().len());
    match hit_test(app.gallery(), &rects, mouse.column, mouse.row) {
        Some(GalleryIntent::Prev) => app.gallery_retreat(),
        Some(GalleryIntent::Next) => app.gallery_advance(),
        Some(GalleryIntent::JumpTo(index)) => app.gallery_jump(index),
        _ => {}
    }
}
