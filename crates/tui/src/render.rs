use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::{Paragraph, Wrap};

use crate::App;
use crate::components::{
	PromptContext, TableSpec, build_bookmark_rows, column_widths, render_prompt, render_table,
};

/// Header row plus the separator drawn beneath it.
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		let prompt = PromptContext {
			title: self.title(),
			input: &self.input,
			visible: self.filtered_len(),
			total: self.session.len(),
			theme: &self.theme,
		};
		render_prompt(frame, layout[0], prompt);

		let results_area = layout[1];
		if let Some(message) = &self.load_error {
			let error = Paragraph::new(message.as_str())
				.style(self.theme.error_style())
				.wrap(Wrap { trim: false });
			frame.render_widget(error, results_area);
			return;
		}

		self.render_results(frame, results_area);

		if self.filtered_len() == 0 && results_area.height > HEADER_AND_DIVIDER_HEIGHT {
			let message_area = Rect {
				y: results_area.y + HEADER_AND_DIVIDER_HEIGHT,
				height: results_area.height - HEADER_AND_DIVIDER_HEIGHT,
				..results_area
			};
			let empty = Paragraph::new(self.labels.empty_message.as_str())
				.style(self.theme.empty_style())
				.alignment(Alignment::Center);
			frame.render_widget(empty, message_area);
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let widths = column_widths(area);
		let rows = build_bookmark_rows(
			self.session.results(),
			self.session.query(),
			Some(widths),
			self.theme.highlight_style(),
		);
		let spec = TableSpec {
			headers: self.labels.headers(),
			widths,
			rows,
		};
		render_table(frame, area, &mut self.table_state, spec, &self.theme);
	}
}

#[cfg(test)]
mod tests {
	use bmz_core::{Bookmark, BookmarkSession};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	/// Draw `app` and return the frame without the blank side margins.
	fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		let buffer = terminal.backend().buffer();
		let mut lines = Vec::new();
		for y in 0..buffer.area.height {
			assert_eq!(buffer[(0, y)].symbol(), " ");
			assert_eq!(buffer[(width - 1, y)].symbol(), " ");
			let line: String = (1..width - 1).map(|x| buffer[(x, y)].symbol()).collect();
			lines.push(line.trim_end().to_string());
		}
		lines.join("\n")
	}

	fn app() -> App<'static> {
		App::new(BookmarkSession::new(vec![
			Bookmark::new("GitHub", "https://github.com/rust-lang", "g1"),
			Bookmark::new("Hacker News", "https://news.ycombinator.com/", "g2"),
		]))
	}

	#[test]
	fn renders_prompt_headers_and_rows() {
		let mut app = app();
		insta::assert_snapshot!(render(&mut app, 40, 8), @r"
		Bookmarks > Search sidekick bookma 2/2
		  Name                    Domain
		 ────────────────────────────────────
		▶ GitHub                  github.com
		  Hacker News             …binator.com
		");
	}

	#[test]
	fn filtered_view_updates_the_counter() {
		let mut app = app();
		app.set_query("news");
		insta::assert_snapshot!(render(&mut app, 40, 8), @r"
		Bookmarks > news                   1/2
		  Name                    Domain
		 ────────────────────────────────────
		▶ Hacker News             …binator.com
		");
	}

	#[test]
	fn empty_results_show_the_message() {
		let mut app = app();
		app.set_query("nothing");
		insta::assert_snapshot!(render(&mut app, 40, 8), @r"
		Bookmarks > nothing                0/2
		  Name                    Domain
		 ────────────────────────────────────
		              No results
		");
	}

	#[test]
	fn load_errors_replace_the_table() {
		let err = bmz_core::bookmarks::load(std::path::Path::new("/missing/Bookmarks")).unwrap_err();
		let mut app = App::failed(err);
		insta::assert_snapshot!(render(&mut app, 100, 4), @r"
		Bookmarks > Search sidekick bookmarks...                                                       0/0
		bookmark file /missing/Bookmarks could not be read: No such file or directory (os error 2)
		");
	}
}
