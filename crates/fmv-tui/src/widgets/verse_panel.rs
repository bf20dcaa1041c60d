//! Verse panel — the main pane showing the current presentation.
//!
//! The panel state is the presenter's display [`Surface`]: every submit or
//! "another" request replaces the presentation and resets the scroll.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Scroll up one line |
//! | `↓` / `j` | Scroll down one line |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use fmv_core::{Presentation, Surface};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const PAGE_STEP: u16 = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct VersePanelState {
    pub current: Option<Presentation>,
    /// Lines scrolled off the top.
    pub scroll: u16,
    /// How many presentations this panel has received.
    pub shown: usize,
    pub show_references: bool,
    pub show_image_hint: bool,
}

impl Default for VersePanelState {
    fn default() -> Self {
        Self {
            current: None,
            scroll: 0,
            shown: 0,
            show_references: true,
            show_image_hint: true,
        }
    }
}

impl Surface for VersePanelState {
    fn show(&mut self, presentation: Presentation) {
        tracing::debug!(key = presentation.key, verses = presentation.verses.len(), "panel: new presentation");
        self.current = Some(presentation);
        self.scroll = 0;
        self.shown += 1;
    }
}

impl VersePanelState {
    pub fn handle(&mut self, event: &AppEvent) {
        if self.current.is_none() {
            return;
        }
        match event {
            AppEvent::Nav(Direction::Up) => self.scroll = self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll = self.scroll.saturating_add(1),
            AppEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.scroll = self.scroll.saturating_add(PAGE_STEP),
            _ => return,
        }
        tracing::debug!(scroll = self.scroll, "panel: scrolled");
    }

    /// The lines of the current presentation, before wrapping.
    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let Some(p) = &self.current else {
            return vec![
                Line::default(),
                Line::from(Span::styled(
                    "  Tell me how you feel and press Enter.",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ];
        };

        let mut lines = vec![Line::from(Span::styled(p.title.clone(), theme.title)), Line::default()];

        for verse in &p.verses {
            lines.push(Line::from(Span::styled(
                format!("“{}”", verse.text),
                theme.verse_text,
            )));
            lines.push(Line::from(Span::styled(
                format!("    {}", verse.reference),
                theme.verse_reference,
            )));
            lines.push(Line::default());
        }

        if self.show_references && !p.verses.is_empty() {
            lines.push(Line::from(Span::styled(p.references(), theme.refs_line)));
        }
        if self.show_image_hint {
            lines.push(Line::from(Span::styled(
                format!("image: {}", p.image),
                theme.image_hint,
            )));
        }
        lines
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct VersePanel<'a> {
    state: &'a VersePanelState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> VersePanel<'a> {
    pub fn new(state: &'a VersePanelState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for VersePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Verses ")
            .border_style(self.theme.border(self.focused));

        Paragraph::new(self.state.lines(self.theme))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmv_core::Verse;
    use ratatui::{backend::TestBackend, Terminal};

    fn presentation() -> Presentation {
        Presentation::new(
            "lonely",
            vec![Verse::new_static("I will never leave you nor forsake you.", "Hebrews 13:5")],
        )
    }

    fn rendered(state: &VersePanelState) -> String {
        let theme = Theme::load_default();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(VersePanel::new(state, true, &theme), frame.area()))
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
    fn show_replaces_presentation_and_resets_scroll() {
        let mut state = VersePanelState::default();
        state.show(presentation());
        state.handle(&AppEvent::ScrollDown);
        assert_eq!(state.scroll, PAGE_STEP);

        state.show(presentation());
        assert_eq!(state.scroll, 0);
        assert_eq!(state.shown, 2);
    }

    #[test]
    fn scrolling_without_presentation_is_ignored() {
        let mut state = VersePanelState::default();
        state.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn renders_title_text_and_reference() {
        let mut state = VersePanelState::default();
        state.show(presentation());
        let screen = rendered(&state);
        assert!(screen.contains("Lonely"));
        assert!(screen.contains("never leave you"));
        assert!(screen.contains("Hebrews 13:5"));
    }

    #[test]
    fn renders_prompt_when_empty() {
        let screen = rendered(&VersePanelState::default());
        assert!(screen.contains("Tell me how you feel"));
    }
}
