use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Everything the prompt line needs to render.
pub struct PromptContext<'a, 'b> {
	pub title: &'a str,
	pub input: &'a QueryInput<'b>,
	pub visible: usize,
	pub total: usize,
	pub theme: &'a Theme,
}

/// Render `title > query` on the left and the `visible/total` count on the right.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: PromptContext<'_, '_>) {
	let prefix = format!("{} > ", ctx.title);
	let count = format!(" {}/{}", ctx.visible, ctx.total);
	let prefix_width = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
	let count_width = u16::try_from(count.width()).unwrap_or(u16::MAX);

	let [prefix_area, input_area, count_area] = Layout::horizontal([
		Constraint::Length(prefix_width),
		Constraint::Min(1),
		Constraint::Length(count_width),
	])
	.areas(area);

	let prompt = Paragraph::new(Line::from(Span::styled(prefix, ctx.theme.prompt_style())));
	frame.render_widget(prompt, prefix_area);
	frame.render_widget(ctx.input.widget(), input_area);
	if let Some((placeholder, style)) = ctx.input.placeholder() {
		render_placeholder(frame, input_area, placeholder, style);
	}
	let counter = Paragraph::new(Line::from(Span::styled(count, ctx.theme.empty_style())));
	frame.render_widget(counter, count_area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, style: Style) {
	if area.is_empty() {
		return;
	}
	let (visible, _) = text.unicode_truncate(usize::from(area.width));
	frame
		.buffer_mut()
		.set_line(area.left(), area.top(), &Line::from(Span::styled(visible, style)), area.width);
}
