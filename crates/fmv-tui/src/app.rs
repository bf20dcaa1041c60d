//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every interactive action
//! (submit, more, copy) runs to completion inside [`App::handle`], so the
//! presenter's last-match slot is only ever touched from this loop.

use crate::{
    commands::{self, Command, CommandError},
    event::{self, AppEvent, Keymap},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        header::Header,
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        verse_panel::{VersePanel, VersePanelState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fmv_core::{
    clipboard::{copy_verses, Clipboard},
    config::Config,
    Catalog, Presenter,
};
use fmv_corpus::FullBible;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Verses,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub query: QueryBarState,
    pub panel: VersePanelState,
    pub presenter: Presenter,
    pub bible: FullBible,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// One-shot message shown in the header until the next key.
    pub status: Option<String>,
    pub clipboard: Box<dyn Clipboard>,
    pub quit: bool,
}

impl AppState {
    /// Submit the query bar contents to the presenter.
    pub fn submit(&mut self) {
        let matched = self.presenter.submit(&self.query.input, &mut self.panel);
        tracing::debug!(key = matched.key, tier = %matched.tier, "submitted feeling");
    }

    /// Re-sample the last feeling. No-op before the first submit.
    pub fn more(&mut self) {
        self.presenter.request_more(&mut self.panel);
    }

    /// Copy the verses on screen. Clipboard failures are not surfaced.
    pub fn copy(&mut self) {
        let Some(current) = &self.panel.current else {
            return;
        };
        if copy_verses(self.clipboard.as_mut(), &current.verses) {
            self.status = Some(format!("copied {} verses", current.verses.len()));
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(
        config: Config,
        theme: Theme,
        bible: FullBible,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let presenter =
            Presenter::new(Catalog::builtin()).with_sample_count(config.ui.sample_count);

        let panel = VersePanelState {
            show_references: config.ui.show_references,
            show_image_hint: config.ui.show_image_hint,
            ..VersePanelState::default()
        };

        let state = AppState {
            focus: Focus::Query,
            prev_focus: Focus::Query,
            query: QueryBarState::default(),
            panel,
            presenter,
            bible,
            theme,
            keymap: Keymap::from_config(&config.keybindings),
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            status: None,
            clipboard,
            quit: false,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            // Poll with a timeout so the header picks up a finished corpus load.
            if ct_event::poll(Duration::from_millis(100))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == ct_event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw, &self.state.keymap)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other, &self.state.keymap) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        if !matches!(event, AppEvent::Resize(_, _)) {
            s.status = None;
        }

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Quit => s.quit = true,
                AppEvent::Enter => match Command::parse(&s.command_bar.input) {
                    Ok(cmd) => {
                        tracing::debug!(command = ?cmd, "executing command");
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                        commands::execute_command(s, cmd);
                    }
                    Err(CommandError::Empty) => {
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                    }
                    Err(err) => {
                        // Show the error; bar stays open
                        s.command_bar.error = Some(err.to_string());
                    }
                },
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') if s.focus != Focus::Query => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus != Focus::Query => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Enter if s.focus == Focus::Query => {
                s.submit();
                s.focus = Focus::Verses;
            }

            AppEvent::Escape => {
                if s.focus == Focus::Query {
                    tracing::debug!("focus: Query -> Verses");
                    s.focus = Focus::Verses;
                }
            }

            AppEvent::FocusNext => {
                s.focus = match s.focus {
                    Focus::Query => Focus::Verses,
                    Focus::Verses | Focus::Command => Focus::Query,
                };
                tracing::debug!(to = ?s.focus, "focus cycle");
            }

            AppEvent::QueryFocus => s.focus = Focus::Query,
            AppEvent::Another => s.more(),
            AppEvent::Copy => s.copy(),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Query | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Query => s.query.handle(&event),
        Focus::Verses => s.panel.handle(&event),
        Focus::Command => {} // handled before dispatch
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line header | verse panel | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let feeling = state.panel.current.as_ref().map(|p| p.title.as_str());
    frame.render_widget(
        Header::new(feeling, state.status.as_deref(), state.bible.len(), &state.theme),
        vert[0],
    );
    frame.render_widget(
        VersePanel::new(&state.panel, state.focus == Focus::Verses, &state.theme),
        vert[1],
    );
    frame.render_widget(
        QueryBar::new(&state.query, state.focus == Focus::Query, &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.keymap, &state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Query {
        let qb = QueryBar::new(&state.query, true, &state.theme);
        frame.set_cursor_position(qb.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
