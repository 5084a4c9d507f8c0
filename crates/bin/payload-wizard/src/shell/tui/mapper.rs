//! Event Mapper - converts terminal events to core events

use crossterm::event::{Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::Event;

/// Maps terminal events to core events
#[derive(Default)]
pub struct EventMapper;

impl EventMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map terminal event to core events. Most produce one; a paste produces
    /// one `Input` per character.
    pub fn map_event(&self, term_event: TermEvent) -> Vec<Event> {
        match term_event {
            TermEvent::Paste(text) => text
                .chars()
                .filter(|c| !c.is_control())
                .map(Event::Input)
                .collect(),
            other => vec![self.map_single(other)],
        }
    }

    fn map_single(&self, term_event: TermEvent) -> Event {
        match term_event {
            TermEvent::Key(key) => {
                // Only process Press events, ignore Repeat and Release
                if key.kind != KeyEventKind::Press {
                    return Event::Ignored;
                }

                // Ctrl+C should always quit
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match key.code {
                        KeyCode::Char('c') => Event::Quit,
                        _ => Event::Ignored,
                    };
                }

                match key.code {
                    KeyCode::Esc => Event::Back,
                    KeyCode::Enter => Event::Confirm,
                    KeyCode::Tab => Event::NextField,
                    KeyCode::BackTab => Event::PrevField,
                    KeyCode::Up => Event::Up,
                    KeyCode::Down => Event::Down,
                    KeyCode::Backspace => Event::Backspace,
                    KeyCode::Char(c) => Event::Input(c),
                    _ => Event::Ignored,
                }
            }

            TermEvent::Resize(width, height) => Event::Resize { width, height },

            _ => Event::Ignored,
        }
    }
}
