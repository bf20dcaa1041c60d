//! Header widget — the one-line strip at the top of the screen.
//!
//! Left: app name and the last matched feeling. Middle: the latest flash
//! message. Right: full-Bible availability and keybinding hints.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct Header<'a> {
    /// Title of the category on screen, if any.
    feeling: Option<&'a str>,
    status: Option<&'a str>,
    /// Loaded verse count, `None` while the corpus is unavailable.
    corpus_len: Option<usize>,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(
        feeling: Option<&'a str>,
        status: Option<&'a str>,
        corpus_len: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self { feeling, status, corpus_len, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut spans = vec![Span::styled(
            " fmv ",
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )];
        if let Some(feeling) = self.feeling {
            spans.push(Span::styled(format!(" {feeling} "), self.theme.title));
        }
        if let Some(status) = self.status {
            spans.push(Span::styled(format!(" {status} "), self.theme.status_ok));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let corpus = match self.corpus_len {
            Some(n) => Span::styled(format!(" bible: {n} verses "), self.theme.corpus_available),
            None => Span::styled(" bible: unavailable ", self.theme.status_muted),
        };
        let hint = Span::styled(" q:quit  ?:help ", Style::default().add_modifier(Modifier::DIM));
        let right = Line::from(vec![corpus, hint]);
        let width = right.width() as u16;
        let x = area.right().saturating_sub(width).max(area.x);
        buf.set_line(x, area.y, &right, area.right().saturating_sub(x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(feeling: Option<&str>, corpus_len: Option<usize>) -> String {
        let theme = Theme::load_default();
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(Header::new(feeling, None, corpus_len, &theme), frame.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_unavailable_before_load() {
        let line = rendered(None, None);
        assert!(line.contains("bible: unavailable"), "got {line:?}");
        assert!(line.contains("?:help"));
    }

    #[test]
    fn shows_verse_count_once_loaded() {
        let line = rendered(Some("Lonely"), Some(31102));
        assert!(line.contains("bible: 31102 verses"), "got {line:?}");
        assert!(line.contains("Lonely"));
        assert!(!line.contains("unavailable"));
    }

    #[test]
    fn zero_height_area_renders_nothing() {
        let theme = Theme::load_default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 1));
        Header::new(Some("Joyful"), None, None, &theme).render(Rect::new(0, 0, 40, 0), &mut buf);
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }
}
