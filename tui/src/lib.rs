//! TUI rendering for Vitrine using ratatui.

pub mod effects;
mod input;
mod page;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};
use unicode_width::UnicodeWidthStr;

use vitrine_engine::{App, NavItem, Section};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color.
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_particles(frame, app, chunks[0], &palette, &glyphs);

    let built = page::build(app, chunks[0], &palette, &glyphs);
    let mut layout = built.layout;

    let paragraph = Paragraph::new(built.lines).scroll((app.scroll_offset(), 0));
    frame.render_widget(paragraph, chunks[0]);

    draw_scrollbar(frame, app, chunks[0], &palette, &glyphs, &layout);
    draw_nav(frame, app, chunks[0], &palette, &glyphs, &mut layout);

    app.update_layout(layout);

    draw_status_bar(frame, app, chunks[1], &palette, &glyphs);
    draw_cursor_follower(frame, app, &palette, &glyphs);
}

fn draw_particles(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let cells = app.particle_cells(area.width, area.height);
    let buffer = frame.buffer_mut();
    for (column, row) in cells {
        let position = Position::new(area.x + column, area.y + row);
        if let Some(cell) = buffer.cell_mut(position) {
            cell.set_symbol(glyphs.particle);
            cell.set_fg(palette.bg_border);
        }
    }
}

fn draw_scrollbar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    layout: &vitrine_engine::PageLayout,
) {
    let max_scroll = layout.total_rows.saturating_sub(layout.viewport_rows);
    if max_scroll == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some(glyphs.arrow_up))
        .end_symbol(Some(glyphs.arrow_down))
        .track_symbol(Some(glyphs.track))
        .thumb_symbol(glyphs.thumb)
        .style(Style::default().fg(palette.text_muted));

    let mut state = ScrollbarState::new(usize::from(max_scroll))
        .position(usize::from(app.scroll_offset().min(max_scroll)));

    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state,
    );
}

/// The floating navigation bar, fixed over the scrolling page.
fn draw_nav(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    layout: &mut vitrine_engine::PageLayout,
) {
    let active = active_section(app, layout);

    // One label row inside a rounded pill.
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    let mut widths: Vec<(NavItem, u16, u16)> = Vec::new();
    let mut cursor: u16 = 1;
    for (index, item) in NavItem::ALL.into_iter().enumerate() {
        if index > 0 {
            let separator = format!(" {} ", glyphs.separator);
            cursor += separator.width() as u16;
            spans.push(Span::styled(
                separator,
                Style::default().fg(palette.bg_border),
            ));
        }
        let label = item.label();
        let style = if active == Some(item.target()) {
            styles::nav_label_active(palette)
        } else {
            styles::nav_label(palette)
        };
        let width = label.width() as u16;
        widths.push((item, cursor, cursor + width.saturating_sub(1)));
        cursor += width;
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::raw(" "));
    cursor += 1;

    let pill_width = (cursor + 2).min(area.width);
    let pill = Rect {
        x: area.x + area.width.saturating_sub(pill_width) / 2,
        y: area.y,
        width: pill_width,
        height: 3.min(area.height),
    };

    frame.render_widget(Clear, pill);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(block),
        pill,
    );

    // Absolute hit extents for mouse clicks: content begins after the border.
    layout.nav_row = pill.y + 1;
    layout.nav_hits = widths
        .into_iter()
        .map(|(item, first, last)| (item, pill.x + 1 + first, pill.x + 1 + last))
        .collect();
}

/// The region currently at the top of the viewport.
fn active_section(app: &App, layout: &vitrine_engine::PageLayout) -> Option<Section> {
    let offset = app.scroll_offset();
    layout
        .sections
        .iter()
        .rev()
        .find(|(_, start)| *start <= offset.saturating_add(2))
        .map(|(section, _)| *section)
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some((message, kind)) = app.status() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                message.to_string(),
                Style::default().fg(palette.status_color(kind)),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("1-4", styles::key_highlight(palette)),
            Span::styled(" sections  ", styles::key_hint(palette)),
            Span::styled(
                format!("{}{}/PgUp/PgDn", glyphs.arrow_up, glyphs.arrow_down),
                styles::key_highlight(palette),
            ),
            Span::styled(" scroll  ", styles::key_hint(palette)),
            Span::styled("e", styles::key_highlight(palette)),
            Span::styled(" copy email  ", styles::key_hint(palette)),
            Span::styled("l", styles::key_highlight(palette)),
            Span::styled(" copy profile  ", styles::key_hint(palette)),
            Span::styled("q", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}

/// Decorative follower glyph bound to the latest pointer position.
fn draw_cursor_follower(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let Some(cursor) = app.cursor() else {
        return;
    };
    let position = Position::new(cursor.column, cursor.row);
    if !frame.area().contains(position) {
        return;
    }
    if let Some(cell) = frame.buffer_mut().cell_mut(position) {
        cell.set_symbol(glyphs.sparkle);
        cell.set_fg(palette.accent);
    }
}
