use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, View};
use crate::ui::controls::{control_rects, ControlRects, NEXT_SYMBOL, PREV_SYMBOL};
use crate::ui::footer::Footer;
use crate::ui::gallery::{Direction, GalleryState, Slot};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACCENT_DIM, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, TEXT_DIMMED,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(&app.config().api.base_url, app.is_loading()),
        header,
    );

    match app.view() {
        View::Catalog => draw_catalog(frame, app, body),
        View::Gallery => draw_gallery(frame, app, body),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.view(), footer), footer);
}

fn draw_catalog(frame: &mut Frame<'_>, app: &App, body: Rect) {
    if body.height == 0 {
        return;
    }
    let status_height = 1.min(body.height);
    let list_area = Rect {
        height: body.height - status_height,
        ..body
    };
    let status_area = Rect {
        y: body.y + list_area.height,
        height: status_height,
        ..body
    };

    let title = match app.active_category() {
        Some(category) => format!(" Catalog — page {} — {} ", app.query().page, category),
        None => format!(" Catalog — page {} ", app.query().page),
    };

    let items: Vec<ListItem> = app
        .products()
        .iter()
        .map(|product| {
            let line = Line::from(vec![
                Span::styled(product.title.clone(), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("  ${:.2}", product.price),
                    Style::default().fg(ACCENT),
                ),
                Span::styled(
                    format!("  {}", product.category),
                    Style::default().fg(TEXT_DIMMED),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, list_area, &mut state);

    let status = if let Some(error) = app.last_error() {
        Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        ))
    } else if app.is_loading() {
        Line::from(Span::styled(
            " loading…",
            Style::default().fg(TEXT_DIMMED),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {} products", app.products().len()),
            Style::default().fg(TEXT_DIMMED),
        ))
    };
    frame.render_widget(Paragraph::new(status), status_area);
}

fn draw_gallery(frame: &mut Frame<'_>, app: &App, body: Rect) {
    if body.height == 0 || body.width == 0 {
        return;
    }
    let state = app.gallery();
    let title = app.gallery_title().unwrap_or("Gallery");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(format!(" {} ", title));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    if state.is_empty() {
        frame.render_widget(
            Paragraph::new("No images for this product")
                .style(Style::default().fg(TEXT_DIMMED))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let rects = control_rects(inner, state.len());

    // Every item gets a slot; only the three visible slots render.
    for (index, url) in state.items().iter().enumerate() {
        match state.slot(index) {
            Slot::Current => draw_current(frame, state, index, url, inner, &rects),
            Slot::Previous => draw_edge_hint(frame, url, &rects, true),
            Slot::Next => draw_edge_hint(frame, url, &rects, false),
            Slot::Hidden => {}
        }
    }

    if state.controls_visible() {
        draw_arrows(frame, state, &rects);
        draw_dots(frame, state, inner);
    }
}

fn draw_current(
    frame: &mut Frame<'_>,
    state: &GalleryState,
    index: usize,
    url: &str,
    inner: Rect,
    rects: &ControlRects,
) {
    let margin = rects.prev.width + 1;
    let panel = Rect {
        x: inner.x + margin,
        y: inner.y,
        width: inner.width.saturating_sub(margin * 2),
        height: inner.height.saturating_sub(2),
    };
    if panel.width == 0 || panel.height == 0 {
        return;
    }

    let transition = match (state.is_transitioning(), state.direction()) {
        (true, Direction::Forward) => "  →",
        (true, Direction::Backward) => "  ←",
        _ => "",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Image {} of {}{}", index + 1, state.len(), transition),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(url.to_string(), Style::default().fg(ACCENT))),
    ];
    // Vertically center by padding above.
    let pad = (panel.height as usize).saturating_sub(lines.len()) / 2;
    for _ in 0..pad {
        lines.insert(0, Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        panel,
    );
}

fn draw_edge_hint(frame: &mut Frame<'_>, url: &str, rects: &ControlRects, previous: bool) {
    let anchor = if previous { rects.prev } else { rects.next };
    if anchor.height == 0 {
        return;
    }
    let width = 14.min(if previous {
        rects.next.x.saturating_sub(anchor.x + anchor.width)
    } else {
        anchor.x.saturating_sub(rects.prev.x + rects.prev.width)
    });
    if width == 0 {
        return;
    }
    let hint = Rect {
        x: if previous {
            anchor.x + anchor.width
        } else {
            anchor.x.saturating_sub(width)
        },
        y: anchor.y + anchor.height / 2,
        width,
        height: 1,
    };
    let label = short_name(url);
    let alignment = if previous {
        Alignment::Left
    } else {
        Alignment::Right
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(TEXT_DIMMED)))
            .alignment(alignment),
        hint,
    );
}

fn draw_arrows(frame: &mut Frame<'_>, state: &GalleryState, rects: &ControlRects) {
    // Dimmed while a transition is in flight: the disabled affordance.
    let style = if state.is_transitioning() {
        Style::default().fg(TEXT_DIMMED)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };

    for (rect, symbol) in [(rects.prev, PREV_SYMBOL), (rects.next, NEXT_SYMBOL)] {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        let centered = Rect {
            y: rect.y + rect.height / 2,
            height: 1,
            ..rect
        };
        frame.render_widget(
            Paragraph::new(Span::styled(symbol, style)).alignment(Alignment::Center),
            centered,
        );
    }
}

fn draw_dots(frame: &mut Frame<'_>, state: &GalleryState, inner: Rect) {
    if inner.height < 2 {
        return;
    }
    let row = Rect {
        x: inner.x,
        y: inner.y + inner.height - 2,
        width: inner.width,
        height: 1,
    };

    let mut spans = Vec::with_capacity(state.len() * 2);
    for index in 0..state.len() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let (symbol, color) = if index == state.current() {
            ("●", ACCENT)
        } else {
            ("○", ACCENT_DIM)
        };
        let mut style = Style::default().fg(color);
        if state.is_transitioning() {
            style = style.add_modifier(Modifier::DIM);
        }
        spans.push(Span::styled(symbol, style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );
}

fn short_name(url: &str) -> String {
    url.rsplit('/')
        .next()
        .unwrap_or(url)
        .chars()
        .take(14)
        .collect()
}
