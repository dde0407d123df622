use anyhow::Result;
use bmz_core::SearchOutcome;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

const PAGE_SIZE: usize = 10;

impl App<'_> {
	/// React to a key press. Returns an outcome once the session is over.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(SearchOutcome::cancelled(self.query()))),
			KeyCode::Char('c') if ctrl => return Ok(Some(SearchOutcome::cancelled(self.query()))),
			KeyCode::Enter => {
				let selection = self.selected().cloned();
				return Ok(Some(SearchOutcome::accepted(self.query(), selection)));
			}
			KeyCode::Up => self.move_selection_up(1),
			KeyCode::Char('p') if ctrl => self.move_selection_up(1),
			KeyCode::Down => self.move_selection_down(1),
			KeyCode::Char('n') if ctrl => self.move_selection_down(1),
			KeyCode::PageUp => self.move_selection_up(PAGE_SIZE),
			KeyCode::PageDown => self.move_selection_down(PAGE_SIZE),
			_ => {
				if self.input.input(key) {
					tracing::trace!(query = self.query(), "query changed");
					self.refresh_results();
				}
			}
		}
		Ok(None)
	}

	fn move_selection_up(&mut self, step: usize) {
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(step)));
		}
	}

	fn move_selection_down(&mut self, step: usize) {
		if let Some(selected) = self.table_state.selected() {
			let last = self.filtered_len().saturating_sub(1);
			self.table_state.select(Some((selected + step).min(last)));
		}
	}
}
