//! TUI shell: terminal management and the event loop (impure).

mod layout;

pub use layout::render;

use crate::config::KeyBindings;
use crate::integration;
use crate::model::AppError;
use crate::source::DirectoryFeed;
use crate::state::{AppState, InputMode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, warn};

/// How often the idle loop wakes to poll the feed.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    /// The one-shot feed; `None` once its result has been applied.
    feed: Option<DirectoryFeed>,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the TUI: raw mode, alternate screen.
    pub fn new(feed: DirectoryFeed, state: AppState) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state,
            feed: Some(feed),
            key_bindings: KeyBindings::default(),
        })
    }

    /// Run the main event loop until the user quits.
    ///
    /// Event-driven: redraws on key events and resize immediately; the
    /// idle timer polls the in-flight feed and redraws when its result
    /// lands.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            } else if self.poll_feed() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal (test backends).
    pub fn with_terminal(terminal: Terminal<B>, feed: DirectoryFeed, state: AppState) -> Self {
        Self {
            terminal,
            state,
            feed: Some(feed),
            key_bindings: KeyBindings::default(),
        }
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Poll the feed; returns true when its result was applied.
    fn poll_feed(&mut self) -> bool {
        let Some(feed) = self.feed.as_mut() else {
            return false;
        };
        match feed.poll() {
            Some(result) => {
                match &result {
                    Ok(companies) => info!(count = companies.len(), "Directory feed loaded"),
                    Err(error) => warn!(%error, "Directory feed failed"),
                }
                self.state.apply_feed_result(result);
                self.feed = None;
                true
            }
            None => false,
        }
    }

    /// Handle one key event. Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, regardless of mode or bindings.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Text input goes to the active editor before binding dispatch.
        if !matches!(self.state.mode, InputMode::Browse) {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => integration::finish_edit(&mut self.state),
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    integration::apply_edit_char(&mut self.state, ch);
                }
                KeyCode::Backspace => integration::apply_edit_backspace(&mut self.state),
                KeyCode::Left => self.move_edit_cursor(Direction::Left),
                KeyCode::Right => self.move_edit_cursor(Direction::Right),
                _ => {}
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        integration::apply_action(&mut self.state, action) == integration::Applied::Quit
    }

    fn move_edit_cursor(&mut self, direction: Direction) {
        let editor = match &mut self.state.mode {
            InputMode::EditSearch(editor) | InputMode::EditMinEmployees(editor) => editor,
            InputMode::Browse => return,
        };
        match direction {
            Direction::Left => editor.move_left(),
            Direction::Right => editor.move_right(),
        }
    }

    /// Render the current state.
    fn draw(&mut self) -> Result<(), AppError> {
        let state = &self.state;
        self.terminal.draw(|frame| layout::render(frame, state))?;
        Ok(())
    }
}

enum Direction {
    Left,
    Right,
}

/// Run the TUI over a feed, restoring the terminal on the way out.
pub fn run_with_feed(feed: DirectoryFeed, state: AppState) -> Result<(), AppError> {
    let mut app = TuiApp::new(feed, state)?;
    let result = app.run();
    restore_terminal();
    result
}

/// Best-effort terminal restore; errors here are not actionable.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileFeed;
    use crate::test_harness::sample_directory;
    use ratatui::backend::TestBackend;

    fn ready_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        // A feed that will never be polled in these tests.
        let feed = DirectoryFeed::File(FileFeed::new("/nonexistent/unused.json"));
        let mut state = AppState::new(8);
        state.apply_feed_result(Ok(sample_directory()));
        TuiApp::with_terminal(terminal, feed, state)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_in_browse_mode() {
        let mut app = ready_app();
        assert!(app.handle_key(press(KeyCode::Char('q'))));
    }

    #[test]
    fn ctrl_c_quits_even_while_editing() {
        let mut app = ready_app();
        app.handle_key(press(KeyCode::Char('/')));
        assert!(matches!(app.state().mode, InputMode::EditSearch(_)));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c));
    }

    #[test]
    fn slash_enters_search_and_typing_filters() {
        let mut app = ready_app();
        assert!(!app.handle_key(press(KeyCode::Char('/'))));
        assert!(!app.handle_key(press(KeyCode::Char('z'))));
        assert_eq!(app.state().search_query(), "z");
        assert_eq!(app.state().directory_view().items.len(), 1);
    }

    #[test]
    fn q_is_text_while_editing_search() {
        let mut app = ready_app();
        app.handle_key(press(KeyCode::Char('/')));
        assert!(!app.handle_key(press(KeyCode::Char('q'))), "q types, not quits");
        assert_eq!(app.state().search_query(), "q");
    }

    #[test]
    fn escape_returns_to_browse_mode() {
        let mut app = ready_app();
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.state().mode, InputMode::Browse);
    }

    #[test]
    fn draw_renders_without_panicking() {
        let mut app = ready_app();
        app.draw().unwrap();
    }

    #[test]
    fn poll_feed_applies_result_once() {
        let temp = std::env::temp_dir().join("cdv_view_poll_feed.json");
        std::fs::write(&temp, r#"{"companies": []}"#).unwrap();

        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let feed = DirectoryFeed::File(FileFeed::new(&temp));
        let mut app = TuiApp::with_terminal(terminal, feed, AppState::new(8));

        assert!(app.poll_feed(), "first poll applies the result");
        assert_eq!(*app.state().load(), crate::state::LoadState::Ready);
        assert!(!app.poll_feed(), "feed is consumed after delivery");

        let _ = std::fs::remove_file(&temp);
    }
}
