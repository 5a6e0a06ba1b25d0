//! Page composition: the portfolio document as a virtual line buffer.
//!
//! Each frame rebuilds the document for the current width and reports the
//! resulting geometry (section starts, marked block extents) back to the
//! engine. Marked blocks are pushed in a fixed document order that must match
//! the engine's reveal registry: experience heading, one block per experience
//! card, skills heading, the skills and education cards, the contact heading
//! and the contact links.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use vitrine_engine::{App, PageLayout, RowSpan, Section};

use crate::effects;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) struct BuiltPage {
    pub lines: Vec<Line<'static>>,
    /// Geometry for the engine; nav extents are filled in by the caller.
    pub layout: PageLayout,
}

pub(crate) fn build(app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) -> BuiltPage {
    let mut builder = PageBuilder {
        app,
        palette,
        glyphs,
        width: area.width,
        viewport: area.height,
        lines: Vec::new(),
        sections: Vec::new(),
        blocks: Vec::new(),
        next_block: 0,
    };

    builder.hero();
    builder.experience();
    builder.skills();
    builder.contact();
    builder.footer();

    debug_assert_eq!(builder.next_block, app.reveal_len());

    BuiltPage {
        layout: PageLayout {
            total_rows: builder.lines.len() as u16,
            viewport_rows: area.height,
            sections: builder.sections,
            reveal_blocks: builder.blocks,
            nav_hits: Vec::new(),
            nav_row: 0,
        },
        lines: builder.lines,
    }
}

struct PageBuilder<'a> {
    app: &'a App,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
    width: u16,
    viewport: u16,
    lines: Vec<Line<'static>>,
    sections: Vec<(Section, u16)>,
    blocks: Vec<RowSpan>,
    next_block: usize,
}

impl PageBuilder<'_> {
    fn row(&self) -> u16 {
        self.lines.len() as u16
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn begin_section(&mut self, section: Section) {
        self.sections.push((section, self.row()));
    }

    /// Push a marked block through its reveal transform.
    fn push_block(&mut self, block: Vec<Line<'static>>) {
        let start = self.row();
        let style = self.app.reveal_style(self.next_block);
        self.next_block += 1;

        let transformed = effects::apply_reveal(
            block,
            style,
            self.width,
            self.palette.bg_dark,
            self.palette.text_primary,
        );
        self.blocks.push(RowSpan {
            start,
            rows: transformed.len() as u16,
        });
        self.lines.extend(transformed);
    }

    fn text_width(&self) -> usize {
        usize::from(self.width.saturating_sub(8)).clamp(16, 84)
    }

    fn heading_block(&self, title: &str) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            Line::from(Span::styled(title.to_string(), styles::section_title(self.palette)))
                .centered(),
            Line::from(Span::styled(
                self.glyphs.underline.repeat(title.width()),
                Style::default().fg(self.palette.primary_dim),
            ))
            .centered(),
            Line::default(),
        ]
    }

    // === Sections ===

    fn hero(&mut self) {
        self.begin_section(Section::Hero);
        let profile = self.app.content().profile;

        let mut content: Vec<Line<'static>> = Vec::new();
        content.push(
            Line::from(Span::styled(
                self.app.typed_title().to_string(),
                styles::hero_title(self.palette),
            ))
            .centered(),
        );
        content.push(Line::default());

        for row in wrap_text(profile.tagline, self.text_width()) {
            content.push(
                Line::from(Span::styled(row, Style::default().fg(self.palette.accent))).centered(),
            );
        }
        content.push(Line::default());

        for row in wrap_text(profile.summary, self.text_width()) {
            content.push(
                Line::from(Span::styled(
                    row,
                    Style::default().fg(self.palette.text_secondary),
                ))
                .centered(),
            );
        }
        content.push(Line::default());

        content.push(
            Line::from(vec![
                Span::styled(
                    format!("{} {}", self.glyphs.mail, profile.email),
                    Style::default().fg(self.palette.link),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("{} LinkedIn", self.glyphs.link),
                    Style::default().fg(self.palette.link),
                ),
            ])
            .centered(),
        );

        // The hero fills at least one viewport, content vertically centered.
        let rows = content.len() as u16;
        let pad_top = self.viewport.saturating_sub(rows) / 2;
        let pad_bottom = self.viewport.saturating_sub(rows + pad_top);
        for _ in 0..pad_top {
            self.blank();
        }
        self.lines.extend(content);
        for _ in 0..pad_bottom {
            self.blank();
        }
    }

    fn experience(&mut self) {
        self.begin_section(Section::Experience);
        self.push_block(self.heading_block("Professional Experience"));

        let entries = self.app.content().experience;
        for entry in entries {
            let mut card: Vec<Line<'static>> = Vec::new();
            card.push(Line::from(Span::styled(
                entry.title.to_string(),
                Style::default()
                    .fg(self.palette.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            card.push(Line::from(vec![
                Span::styled(
                    entry.company.to_string(),
                    Style::default().fg(self.palette.accent),
                ),
                Span::styled(
                    format!(" {} ", self.glyphs.separator),
                    Style::default().fg(self.palette.text_muted),
                ),
                Span::styled(
                    entry.period.to_string(),
                    Style::default().fg(self.palette.yellow),
                ),
            ]));
            for task in entry.responsibilities {
                let wrapped = wrap_text(task, self.text_width().saturating_sub(4));
                for (index, row) in wrapped.into_iter().enumerate() {
                    let prefix = if index == 0 {
                        format!("  {} ", self.glyphs.bullet)
                    } else {
                        "    ".to_string()
                    };
                    card.push(Line::from(vec![
                        Span::styled(prefix, Style::default().fg(self.palette.primary)),
                        Span::styled(row, Style::default().fg(self.palette.text_secondary)),
                    ]));
                }
            }
            card.push(Line::default());
            self.push_block(card);
        }
    }

    fn skills(&mut self) {
        self.begin_section(Section::Skills);
        self.push_block(self.heading_block("Skills & Education"));

        let skills = self.app.content().skills;
        let mut card: Vec<Line<'static>> = Vec::new();
        card.push(Line::from(Span::styled(
            "Skills & Certifications",
            Style::default()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD),
        )));
        card.push(Line::default());
        card.push(Line::from(Span::styled(
            "Top Skills",
            Style::default().fg(self.palette.text_secondary),
        )));
        let mut tags: Vec<Span<'static>> = Vec::new();
        for (index, skill) in skills.skills.iter().enumerate() {
            if index > 0 {
                tags.push(Span::raw("  "));
            }
            tags.push(Span::styled(
                format!("[{skill}]"),
                Style::default().fg(self.palette.accent),
            ));
        }
        card.push(Line::from(tags));
        card.push(Line::default());
        card.push(Line::from(Span::styled(
            "Certifications & Workshops",
            Style::default().fg(self.palette.text_secondary),
        )));
        for cert in skills.certifications {
            card.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", self.glyphs.bullet),
                    Style::default().fg(self.palette.accent),
                ),
                Span::styled(
                    (*cert).to_string(),
                    Style::default().fg(self.palette.text_secondary),
                ),
            ]));
        }
        card.push(Line::default());
        self.push_block(card);

        let mut card: Vec<Line<'static>> = Vec::new();
        card.push(Line::from(Span::styled(
            "Education",
            Style::default()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD),
        )));
        card.push(Line::default());
        for entry in self.app.content().education {
            card.push(Line::from(Span::styled(
                entry.institution.to_string(),
                Style::default()
                    .fg(self.palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )));
            card.push(Line::from(Span::styled(
                entry.degree.to_string(),
                Style::default().fg(self.palette.text_secondary),
            )));
            card.push(Line::from(Span::styled(
                entry.field.to_string(),
                Style::default().fg(self.palette.text_secondary),
            )));
            card.push(Line::from(Span::styled(
                entry.period.to_string(),
                Style::default().fg(self.palette.yellow),
            )));
            card.push(Line::default());
        }
        self.push_block(card);
    }

    fn contact(&mut self) {
        self.begin_section(Section::Contact);
        let profile = self.app.content().profile;

        let mut heading = self.heading_block("Let's Connect");
        for row in wrap_text(
            "Ready to collaborate or have questions? Reach out through your preferred channel.",
            self.text_width(),
        ) {
            heading.push(
                Line::from(Span::styled(
                    row,
                    Style::default().fg(self.palette.text_secondary),
                ))
                .centered(),
            );
        }
        heading.push(Line::default());
        self.push_block(heading);

        let links = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} Email Me  ", self.glyphs.mail),
                    Style::default()
                        .fg(self.palette.link)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(profile.mailto(), Style::default().fg(self.palette.text_muted)),
            ])
            .centered(),
            Line::from(vec![
                Span::styled(
                    format!("{} Connect on LinkedIn  ", self.glyphs.link),
                    Style::default()
                        .fg(self.palette.link)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    profile.linkedin.to_string(),
                    Style::default().fg(self.palette.text_muted),
                ),
            ])
            .centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("e", styles::key_highlight(self.palette)),
                Span::styled(" copy email   ", styles::key_hint(self.palette)),
                Span::styled("l", styles::key_highlight(self.palette)),
                Span::styled(" copy profile", styles::key_hint(self.palette)),
            ])
            .centered(),
        ];
        self.push_block(links);
    }

    fn footer(&mut self) {
        self.blank();
        self.lines.push(
            Line::from(Span::styled(
                self.glyphs
                    .underline
                    .repeat(usize::from(self.width.saturating_sub(4)).min(100)),
                Style::default().fg(self.palette.bg_border),
            ))
            .centered(),
        );
        self.blank();
        self.lines.push(
            Line::from(Span::styled(
                self.app.content().footer.to_string(),
                Style::default().fg(self.palette.text_muted),
            ))
            .centered(),
        );
        self.blank();
    }
}

/// Greedy word wrap by display width.
fn wrap_text(text: &str, max: usize) -> Vec<String> {
    let max = max.max(8);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= max {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use vitrine_types::ui::UiOptions;

    fn built() -> BuiltPage {
        let app = App::new(UiOptions::default());
        let palette = theme::palette(app.ui_options());
        let glyphs = theme::glyphs(app.ui_options());
        build(&app, Rect::new(0, 0, 80, 24), &palette, &glyphs)
    }

    #[test]
    fn block_count_matches_reveal_registry() {
        let app = App::new(UiOptions::default());
        let page = built();
        assert_eq!(page.layout.reveal_blocks.len(), app.reveal_len());
    }

    #[test]
    fn all_four_sections_are_addressable() {
        let page = built();
        for section in Section::ALL {
            assert!(
                page.layout.section_start(section).is_some(),
                "{} missing",
                section.id()
            );
        }
    }

    #[test]
    fn sections_appear_in_page_order() {
        let page = built();
        let starts: Vec<u16> = Section::ALL
            .iter()
            .map(|section| page.layout.section_start(*section).unwrap())
            .collect();
        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn hero_fills_the_viewport() {
        let page = built();
        let experience_start = page.layout.section_start(Section::Experience).unwrap();
        assert!(experience_start >= 24);
    }

    #[test]
    fn blocks_are_contiguous_and_in_bounds() {
        let page = built();
        let total = page.layout.total_rows;
        for span in &page.layout.reveal_blocks {
            assert!(span.rows > 0);
            assert!(span.start + span.rows <= total);
        }
    }

    #[test]
    fn wrap_respects_width() {
        let rows = wrap_text(
            "A passionate professional exploring the intersection of international business",
            20,
        );
        assert!(rows.len() > 1);
        for row in rows {
            assert!(row.width() <= 20);
        }
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap_text("", 20).is_empty());
    }
}
