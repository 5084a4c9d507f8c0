//! TUI Shell - Terminal UI implementation
//!
//! Maps terminal events to core Events and executes Effects

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

use super::Outcome;
use crate::core::{Effect, Event, WizardConfig, WizardCore};

mod mapper;
mod renderer;

pub use mapper::EventMapper;
pub use renderer::Renderer;

/// Cursor blink period; also the poll timeout
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// TUI Shell - manages terminal UI and core interaction
pub struct TuiShell {
    /// Core business logic
    core: WizardCore,

    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    mapper: EventMapper,
    renderer: Renderer,

    /// Redraw on the next loop iteration
    dirty: bool,
    restored: bool,
}

impl TuiShell {
    /// Take over the terminal
    pub fn new(config: WizardConfig) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .context("failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            core: WizardCore::new(config),
            terminal,
            mapper: EventMapper::new(),
            renderer: Renderer::new(),
            dirty: true,
            restored: false,
        })
    }

    /// Run until the session finishes, is aborted, or fails
    pub fn run(&mut self) -> Result<Outcome> {
        let size = self.terminal.size()?;
        self.dispatch(Event::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            if self.dirty {
                let view_model = self.core.view_model();
                let renderer = &self.renderer;
                self.terminal.draw(|f| renderer.render(f, &view_model))?;
                self.dirty = false;
            }

            let events = if event::poll(BLINK_INTERVAL)? {
                self.mapper.map_event(event::read()?)
            } else {
                vec![Event::Tick]
            };

            for event in events {
                if let Some(outcome) = self.dispatch(event) {
                    self.cleanup()?;
                    return Ok(outcome);
                }
            }
        }
    }

    /// Feed one event to the core and execute the resulting effects
    fn dispatch(&mut self, event: Event) -> Option<Outcome> {
        let mut outcome = None;
        for effect in self.core.update(event) {
            debug!(?effect, "executing effect");
            match effect {
                Effect::Render => self.dirty = true,
                Effect::Finish(payload) => outcome = Some(Outcome::Finished(payload)),
                Effect::Abort => outcome = Some(Outcome::Aborted),
                Effect::Fatal(err) => outcome = Some(Outcome::Failed(err)),
            }
        }
        outcome
    }

    /// Restore terminal
    pub fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiShell {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
