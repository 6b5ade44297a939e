//! Rendering for the interactive session.
//!
//! Draws the visible result window with the selection marker, per-entry icons
//! and query-character highlighting, followed by the status footer. Only the
//! window the user asked for is rendered; the rest of the ranked list never
//! reaches the terminal.

use crate::app::session::{NO_SELECTION, Session};
use crate::ui::icons::icon_for;
use ratatui::Frame;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::collections::HashSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder shown while the walker is still building the corpus.
pub fn render_loading(f: &mut Frame) {
    f.render_widget(Paragraph::new("Loading ..."), f.area());
}

/// Draw the full interactive frame: result window plus status footer.
pub fn render(f: &mut Frame, session: &Session) {
    let area = f.area();
    let n = session.visible_len();

    let mut lines: Vec<Line> = Vec::with_capacity(n + 5);
    for (i, path) in session.results().iter().take(n).enumerate() {
        lines.push(result_line(session, i, path, area.width as usize));
    }

    lines.push(Line::default());
    lines.push(Line::from(format!(" Choice Index: {}", session.selection())));
    lines.push(Line::from(format!(
        " Selected Choice: {}",
        session.selected().unwrap_or(NO_SELECTION)
    )));
    lines.push(Line::default());
    lines.push(Line::from(format!(" Search 🔍: {}", session.query())));

    f.render_widget(Paragraph::new(lines), area);
}

/// One result row: padding, selection marker, icon, highlighted path.
fn result_line<'a>(session: &Session, index: usize, path: &'a str, width: usize) -> Line<'a> {
    let mut prefix = String::from(" ");
    if index as isize == session.selection() {
        prefix.push_str("[*] ");
    }
    if session.config().icons() {
        prefix.push_str(icon_for(path));
        prefix.push(' ');
    }

    let budget = width.saturating_sub(prefix.width());
    let mut spans = vec![Span::raw(prefix)];
    spans.extend(highlighted_spans(
        path,
        session.highlight(),
        session.config().text(),
        session.config().highlight(),
        budget,
    ));
    Line::from(spans)
}

/// Split a path into spans, coloring every character found in the highlight
/// set. Consecutive characters with the same style are grouped into one span;
/// the row is clipped to the given display-width budget.
fn highlighted_spans<'a>(
    path: &'a str,
    highlight: &HashSet<char>,
    text: Color,
    marked: Color,
    budget: usize,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_marked = false;
    let mut used = 0usize;

    for ch in path.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;

        let is_marked = highlight.contains(&ch.to_ascii_lowercase());
        if is_marked != run_marked && !run.is_empty() {
            spans.push(styled(std::mem::take(&mut run), run_marked, text, marked));
        }
        run_marked = is_marked;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(styled(run, run_marked, text, marked));
    }
    spans
}

fn styled(content: String, is_marked: bool, text: Color, marked: Color) -> Span<'static> {
    let color = if is_marked { marked } else { text };
    Span::styled(content, Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_groups_runs() {
        let set: HashSet<char> = ['o'].into_iter().collect();
        let spans = highlighted_spans("foo", &set, Color::Reset, Color::Magenta, 80);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content.as_ref(), "f");
        assert_eq!(spans[1].content.as_ref(), "oo");
    }

    #[test]
    fn clipping_respects_budget() {
        let set = HashSet::new();
        let spans = highlighted_spans("abcdef", &set, Color::Reset, Color::Magenta, 3);
        let total: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(total, "abc");
    }
}
