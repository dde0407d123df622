//! Application runtime and event loop.

use std::io;

use anyhow::Result;
use bmz_core::SearchOutcome;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::App;

impl App<'_> {
	/// Take over the terminal until the user accepts or cancels.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		let result = terminal
			.clear()
			.map_err(anyhow::Error::from)
			.and_then(|()| self.drive(&mut terminal, event::read));
		ratatui::restore();
		result
	}

	/// Draw, then block on the next event, until a key ends the session.
	pub(crate) fn drive<B, E>(&mut self, terminal: &mut Terminal<B>, mut next_event: E) -> Result<SearchOutcome>
	where
		B: Backend,
		E: FnMut() -> io::Result<Event>,
	{
		loop {
			terminal.draw(|frame| self.draw(frame))?;
			match next_event()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key)? {
						tracing::debug!(
							accepted = outcome.accepted,
							query = %outcome.query,
							"picker finished"
						);
						return Ok(outcome);
					}
				}
				_ => {}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;

	use bmz_core::{Bookmark, BookmarkSession};
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

	use super::*;

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn release(code: KeyCode) -> Event {
		Event::Key(KeyEvent {
			code,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Release,
			state: KeyEventState::NONE,
		})
	}

	fn drive_with(events: Vec<Event>) -> Result<SearchOutcome> {
		let mut app = App::new(BookmarkSession::new(vec![
			Bookmark::new("Example", "https://example.com", "g1"),
			Bookmark::new("GitHub", "https://github.com", "g2"),
		]));
		let mut terminal = Terminal::new(TestBackend::new(60, 8))?;
		let mut events = VecDeque::from(events);
		app.drive(&mut terminal, move || {
			events
				.pop_front()
				.ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
		})
	}

	#[test]
	fn scripted_session_accepts_the_match() {
		let outcome = drive_with(vec![
			key(KeyCode::Char('h')),
			release(KeyCode::Char('x')),
			Event::Resize(40, 6),
			key(KeyCode::Char('u')),
			key(KeyCode::Enter),
		])
		.unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.query, "hu");
		assert_eq!(outcome.selected_url(), Some("https://github.com"));
	}

	#[test]
	fn escape_cancels_with_the_typed_query() {
		let outcome = drive_with(vec![key(KeyCode::Char('e')), key(KeyCode::Esc)]).unwrap();
		assert_eq!(outcome, SearchOutcome::cancelled("e"));
	}

	#[test]
	fn event_source_errors_propagate() {
		let err = drive_with(vec![key(KeyCode::Char('e'))]).unwrap_err();
		assert!(err.to_string().contains("no more events"));
	}
}
