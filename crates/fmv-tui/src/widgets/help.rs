//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    keymap: &'a Keymap,
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(keymap: &'a Keymap, theme: &'a Theme) -> Self {
        Self { keymap, theme }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        vec![
            ("q  /  Ctrl+c".to_string(), "Quit"),
            ("Tab".to_string(), "Switch focus: query ↔ verses"),
            (self.keymap.query_focus.to_string(), "Focus the feeling input"),
            ("Enter".to_string(), "Find verses for the feeling"),
            ("Escape".to_string(), "Leave the feeling input"),
            (self.keymap.another.to_string(), "Show me more"),
            (self.keymap.copy.to_string(), "Copy verses to clipboard"),
            ("↑ k  /  ↓ j".to_string(), "Scroll verses"),
            ("PageUp / PageDown".to_string(), "Scroll verses by a page"),
            (":".to_string(), "Command line (:more, :copy, :theme)"),
            ("?".to_string(), "Toggle this help popup"),
        ]
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, 15, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" fmv — keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let lines: Vec<Line> = self
            .bindings()
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(popup, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
