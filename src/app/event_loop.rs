use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};
use crate::document::Document;
use crate::editor::EditHistory;

impl App {
    /// Run the main event loop.
    ///
    /// The file is read before the terminal is taken over, so open
    /// failures are reported on a normal screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the terminal cannot
    /// be initialized, or reading terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        let document = Document::load(self.storage.as_ref(), &self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;

        // Initialize terminal
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: jot requires an interactive terminal")?;
        let size = terminal.size()?;

        let history = self
            .history_limit
            .map_or_else(EditHistory::new, EditHistory::with_limit);
        let mut model = Model::new(self.file_path.clone(), document, (size.width, size.height))
            .with_history(history)
            .with_line_numbers(self.line_numbers);

        // Main loop
        let result = self.event_loop(&mut terminal, &mut model);

        // Restore terminal
        ratatui::restore();

        result
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            // Wake periodically so toasts expire without input.
            if event::poll(Duration::from_millis(250))? {
                if let Some(msg) = Self::handle_event(&event::read()?) {
                    tracing::trace!(?msg, "message");
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    self.handle_message_side_effects(model, &side_msg);
                }
                needs_render = true;
            }
        }
        Ok(())
    }
}
