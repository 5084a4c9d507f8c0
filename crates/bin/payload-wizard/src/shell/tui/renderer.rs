//! Renderer - converts ViewModel to terminal UI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::view::{Body, FieldView, ItemView};
use crate::core::ViewModel;

/// Below this height the intro text is dropped to leave room for the form
const COMPACT_HEIGHT: u16 = 20;

#[derive(Clone, Copy, Debug)]
struct Theme {
    text: Color,
    muted: Color,
    accent: Color,
    danger: Color,
}

const THEME: Theme = Theme {
    text: Color::Rgb(230, 230, 230),
    muted: Color::Rgb(110, 110, 110),
    accent: Color::Rgb(0, 122, 204),
    danger: Color::Rgb(255, 60, 60),
};

fn style_title() -> Style {
    Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)
}

fn style_muted() -> Style {
    Style::default().fg(THEME.muted)
}

fn style_selected() -> Style {
    Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD)
}

/// Renders the ViewModel to the terminal
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the entire UI from a ViewModel
    pub fn render(&self, f: &mut Frame, view_model: &ViewModel) {
        let area = f.area();
        let compact = area.height < COMPACT_HEIGHT;
        let intro_height = if compact {
            0
        } else {
            view_model.intro.len() as u16 + 1
        };
        let error_height = if view_model.error.is_some() { 2 } else { 0 };

        // [Header | Intro | Body | Error | Footer]
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(intro_height),
                Constraint::Min(3),
                Constraint::Length(error_height),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(view_model.title, style_title()))),
            chunks[0],
        );

        if !compact {
            let intro: Vec<Line> = view_model
                .intro
                .iter()
                .map(|line| Line::from(line.as_str()))
                .collect();
            f.render_widget(Paragraph::new(intro).wrap(Wrap { trim: false }), chunks[1]);
        }

        match &view_model.body {
            Body::Selection {
                heading,
                items,
                cursor,
            } => self.render_selection(f, heading, items, *cursor, chunks[2]),
            Body::Form {
                fields,
                cursor_visible,
            } => self.render_form(f, fields, *cursor_visible, chunks[2]),
            Body::Done => {}
        }

        if let Some(error) = &view_model.error {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("Error: {}", error),
                    Style::default().fg(THEME.danger),
                )))
                .wrap(Wrap { trim: true }),
                chunks[3],
            );
        }

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(view_model.hints, style_muted()))),
            chunks[4],
        );
    }

    fn render_selection(
        &self,
        f: &mut Frame,
        heading: &str,
        items: &[ItemView],
        cursor: usize,
        area: Rect,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style_muted())
            .title(Span::styled(heading.to_string(), style_title()));

        let mut lines = Vec::with_capacity(items.len() * 2);
        for (i, item) in items.iter().enumerate() {
            let selected = i == cursor;
            let marker = if selected { "> " } else { "  " };
            let title_style = if selected {
                style_selected()
            } else if item.supported {
                Style::default().fg(THEME.text)
            } else {
                style_muted()
            };

            let mut title = vec![Span::styled(format!("{}{}", marker, item.title), title_style)];
            if !item.supported {
                title.push(Span::styled("  (not supported yet)", style_muted()));
            }
            lines.push(Line::from(title));
            lines.push(Line::from(Span::styled(
                format!("    {}", item.description),
                style_muted(),
            )));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_form(&self, f: &mut Frame, fields: &[FieldView], cursor_visible: bool, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style_muted());

        let mut lines = Vec::with_capacity(fields.len() * 3);
        for field in fields {
            let label_style = if field.focused {
                style_selected()
            } else {
                Style::default().fg(THEME.text)
            };
            lines.push(Line::from(Span::styled(field.label, label_style)));

            let marker = if field.focused { "> " } else { "  " };
            let mut value = vec![Span::raw(marker)];
            if field.value.is_empty() && !field.focused {
                value.push(Span::styled(field.placeholder, style_muted()));
            } else {
                value.push(Span::raw(field.value.clone()));
            }
            if field.focused {
                value.push(Span::raw(if cursor_visible { "█" } else { " " }));
                if field.value.is_empty() {
                    value.push(Span::styled(field.placeholder, style_muted()));
                }
            }
            lines.push(Line::from(value));
            lines.push(Line::from(""));
        }

        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}
