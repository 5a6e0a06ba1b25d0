//! Reveal transforms: map the animation model's source units onto cells.
//!
//! The reveal machines speak the original page's units (opacity 0..1, a
//! 50-unit slide, a 0.95 scale). Cells are roughly 8x16 units, so the slide
//! becomes whole rows, the scale a symmetric horizontal inset, and opacity a
//! blend between the background and each span's color.

use ratatui::style::Color;
use ratatui::text::{Line, Span};

use vitrine_engine::ui::RevealStyle;

/// Vertical units per terminal row.
pub const UNITS_PER_ROW: f32 = 16.0;

/// Rows of downward slide for a style.
#[must_use]
pub fn offset_rows(style: RevealStyle) -> u16 {
    (style.offset / UNITS_PER_ROW).round().max(0.0) as u16
}

/// Columns of symmetric inset for a style at a given width.
#[must_use]
pub fn scale_inset(style: RevealStyle, width: u16) -> u16 {
    let inset = (1.0 - style.scale.clamp(0.0, 1.0)) * f32::from(width) / 2.0;
    (inset.round() as u16).min(width / 2)
}

/// Blend `fg` over `bg` at `alpha`. Non-RGB colors snap at 50%.
#[must_use]
pub fn blend(bg: Color, fg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (bg, fg) {
        (Color::Rgb(br, bg_, bb), Color::Rgb(fr, fg_, fb)) => {
            let mix = |b: u8, f: u8| -> u8 {
                (f32::from(b) + (f32::from(f) - f32::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(br, fr), mix(bg_, fg_), mix(bb, fb))
        }
        _ if alpha < 0.5 => bg,
        _ => fg,
    }
}

/// Apply a reveal style to a block of lines without changing its height.
///
/// The slide pushes content down inside the block (rows falling off the end
/// are clipped), the inset indents every line, and the opacity fades every
/// span toward the background. Settled blocks pass through untouched.
#[must_use]
pub fn apply_reveal(
    lines: Vec<Line<'static>>,
    style: RevealStyle,
    width: u16,
    bg: Color,
    fallback_fg: Color,
) -> Vec<Line<'static>> {
    if style == RevealStyle::VISIBLE {
        return lines;
    }

    let height = lines.len();
    let drop = usize::from(offset_rows(style)).min(height);
    let inset = scale_inset(style, width);

    let mut out: Vec<Line<'static>> = Vec::with_capacity(height);
    out.extend((0..drop).map(|_| Line::default()));

    for mut line in lines.into_iter().take(height - drop) {
        for span in &mut line.spans {
            let fg = span.style.fg.unwrap_or(fallback_fg);
            span.style.fg = Some(blend(bg, fg, style.opacity));
        }
        if inset > 0 {
            line.spans.insert(0, Span::raw(" ".repeat(usize::from(inset))));
        }
        out.push(line);
    }

    out
}
