//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod image;
mod layout;
mod search_input;
mod styles;

pub use self::image::ImageRow;
pub use layout::{calculate_areas, keyboard_hints, render_layout, ScreenAreas};
pub use search_input::SearchInput;
pub use styles::ColorConfig;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{KeyAction, Payload};
use crate::state::search_input_handler::{
    activate_search_input, cancel_search, handle_backspace, handle_char_input,
    handle_cursor_left, handle_cursor_right, submit_search,
};
use crate::state::{
    handle_expand_action, handle_mouse_click, handle_mouse_scroll, handle_scroll_action,
    handle_toggle_raw, next_match, prev_match, AppState,
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Options for a viewer session that are not part of the resolved config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Query to search for on startup.
    pub search: Option<String>,
    /// Disable colors.
    pub no_color: bool,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    /// Last rendered body pane area (for click detection)
    last_body_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(app_state: AppState, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, colors))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application on an already prepared terminal.
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, colors: ColorConfig) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            colors,
            last_body_area: None,
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(constants::POLL_INTERVAL_MS);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }

    /// Apply a state transition.
    fn update(&mut self, transition: impl FnOnce(AppState) -> AppState) {
        let state = std::mem::take(&mut self.app_state);
        self.app_state = transition(state);
    }

    /// Handle a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing a query
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.search.is_typing() {
            self.handle_search_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");

        let viewport = self.app_state.viewport_height;
        match action {
            KeyAction::Quit => return true,
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                self.update(|state| handle_scroll_action(state, action, viewport));
            }
            KeyAction::ToggleExpand => self.update(handle_expand_action),
            KeyAction::ToggleRaw => self.update(handle_toggle_raw),
            KeyAction::StartSearch => self.update(activate_search_input),
            KeyAction::NextMatch => self.update(next_match),
            KeyAction::PrevMatch => self.update(prev_match),
            KeyAction::ClearSearch => self.update(cancel_search),
        }
        false
    }

    /// Keys while the search bar has input focus. Unhandled keys are dropped.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.update(|state| handle_char_input(state, ch));
            }
            KeyCode::Backspace => self.update(handle_backspace),
            KeyCode::Left => self.update(handle_cursor_left),
            KeyCode::Right => self.update(handle_cursor_right),
            KeyCode::Enter => self.update(submit_search),
            KeyCode::Esc => self.update(cancel_search),
            _ => {}
        }
    }

    /// Handle a mouse event: wheel scrolls, left click selects and toggles.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.update(|state| handle_mouse_scroll(state, true)),
            MouseEventKind::ScrollDown => self.update(|state| handle_mouse_scroll(state, false)),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(body) = self.last_body_area {
                    self.update(|state| handle_mouse_click(state, body, mouse.column, mouse.row));
                }
            }
            _ => {}
        }
    }

    /// Render the current frame
    ///
    /// Recomputes the body area first so scrolling and clicks use the
    /// geometry that is actually on screen.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let areas = calculate_areas(Rect::new(0, 0, size.width, size.height), &self.app_state);
        self.last_body_area = Some(areas.body);

        let height = usize::from(areas.body.height);
        if self.app_state.viewport_height != height {
            self.app_state.viewport_height = height;
            self.app_state.ensure_cursor_visible();
        }

        let state = &self.app_state;
        let colors = self.colors;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, colors);
        })?;

        Ok(())
    }
}

/// Initialize and run the viewer for `payload`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, also when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(payload: Payload, config: &ResolvedConfig, options: RunOptions) -> Result<(), TuiError> {
    let state = initial_state(payload, config, options.search.as_deref());
    let colors = ColorConfig::from_env_and_args(options.no_color);

    let mut app = TuiApp::new(state, colors)?;
    let result = app.run();

    restore_terminal()?;

    result
}

/// Build the starting state, running the startup search if one was given.
pub fn initial_state(payload: Payload, config: &ResolvedConfig, search: Option<&str>) -> AppState {
    let mut state = AppState::new(payload, config);
    if let Some(query) = search {
        state = activate_search_input(state);
        for ch in query.chars() {
            state = handle_char_input(state, ch);
        }
        state = submit_search(state);
    }
    state
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
