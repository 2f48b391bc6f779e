//! Playback application state and event loop

use crate::engine::{RenderedStep, RenderedTrace};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Autoplay intervals, slowest first
pub const PLAY_INTERVALS_MS: [u64; 6] = [2000, 1000, 500, 250, 100, 50];
const DEFAULT_SPEED: usize = 2;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    State,
    Narration,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::State => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::State,
        }
    }
}

/// The main application state
pub struct App {
    /// The trace being replayed
    pub trace: RenderedTrace,

    /// Index of the step on screen
    pub position: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset of the state pane
    pub state_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Index into [`PLAY_INTERVALS_MS`]
    pub speed: usize,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(trace: RenderedTrace) -> Self {
        let status_message = format!("{}: {} steps", trace.info.name, trace.len());
        App {
            trace,
            position: 0,
            focused_pane: FocusedPane::State,
            state_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            speed: DEFAULT_SPEED,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(PLAY_INTERVALS_MS[self.speed])
    }

    /// Step currently on screen
    pub fn current(&self) -> Option<&RenderedStep> {
        self.trace.steps.get(self.position)
    }

    fn last_index(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.interval() {
                self.tick();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(30))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one step of autoplay, stopping at the end
    pub fn tick(&mut self) {
        if self.position < self.last_index() {
            self.position += 1;
            self.status_message = "Playing...".to_string();
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
        self.last_play_time = Instant::now();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // State (top) | Narration (bottom)
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let title = format!("{} · {}", self.trace.info.name, self.trace.info.family);
        let Some(step) = self.trace.steps.get(self.position) else {
            return;
        };

        super::panes::render_state_pane(
            frame,
            rows[0],
            &title,
            &step.rows,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        super::panes::render_narration_pane(
            frame,
            rows[1],
            step,
            self.focused_pane == FocusedPane::Narration,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.position,
                total_steps: self.trace.len(),
                outcome: self.trace.outcome(),
                is_playing: self.is_playing,
                interval_ms: PLAY_INTERVALS_MS[self.speed],
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let target = (self.position + n).min(self.last_index());
                let stepped = target - self.position;
                self.position = target;
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                self.state_scroll = self.state_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.state_scroll = self.state_scroll.saturating_add(1);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed = (self.speed + 1).min(PLAY_INTERVALS_MS.len() - 1);
                self.status_message =
                    format!("Speed: one step every {}ms", PLAY_INTERVALS_MS[self.speed]);
            }
            KeyCode::Char('-') => {
                self.speed = self.speed.saturating_sub(1);
                self.status_message =
                    format!("Speed: one step every {}ms", PLAY_INTERVALS_MS[self.speed]);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.position = self.last_index();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.position = 0;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            // Replaying from the end restarts at the beginning
            if self.position >= self.last_index() {
                self.position = 0;
            }
            self.last_play_time = Instant::now();
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    fn step_forward(&mut self) {
        if self.position < self.last_index() {
            self.position += 1;
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Cannot step forward: at the last step".to_string();
        }
    }

    fn step_backward(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.status_message = "Stepped backward".to_string();
        } else {
            self.status_message = "Cannot step backward: at the first step".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DynAlgorithm, TraceConfig};
    use crate::registry;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(id: &str) -> App {
        let algorithm = registry::find(id, &TraceConfig::default()).unwrap();
        App::new(algorithm.render(&TraceConfig::default()).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn arrows_step_within_bounds() {
        let mut app = app("binary-search");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.position, 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.position, 2);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.position, app.trace.len() - 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.position, app.trace.len() - 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.position, 0);
    }

    #[test]
    fn number_keys_clamp_to_last_step() {
        let mut app = app("binary-search");
        press(&mut app, KeyCode::Char('9'));
        assert!(app.position <= app.trace.len() - 1);
        assert!(app.position > 0);
    }

    #[test]
    fn speed_keys_stay_in_range() {
        let mut app = app("bfs");
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.speed, PLAY_INTERVALS_MS.len() - 1);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.interval(), Duration::from_millis(PLAY_INTERVALS_MS[0]));
    }

    #[test]
    fn autoplay_stops_at_the_end() {
        let mut app = app("bfs");
        app.toggle_play();
        for _ in 0..app.trace.len() + 1 {
            app.tick();
        }
        assert!(!app.is_playing);
        assert_eq!(app.position, app.trace.len() - 1);
    }

    #[test]
    fn renders_step_counter_and_description() {
        let mut app = app("bfs");
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains(&format!("Step 1/{}", app.trace.len())));
        assert!(text.contains("Breadth"));
    }
}
