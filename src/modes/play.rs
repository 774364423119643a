use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameSession};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, SessionInfo};
use crate::ticker::{Ticker, on_tick, restart};

/// Redraw period, independent of the simulation tick
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive game in the terminal
pub struct PlayMode {
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    game_number: u32,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval: config.tick_interval(),
            game_number: 1,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = Ticker::new(self.tick_interval);
        ticker.arm();
        let mut render_timer = interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    self.handle_input(maybe_event, &mut ticker);
                }

                _ = ticker.tick() => {
                    on_tick(&mut self.session, &mut ticker);
                }

                _ = render_timer.tick() => {
                    let info = SessionInfo {
                        tick_interval: self.tick_interval,
                        game_number: self.game_number,
                    };
                    let state = self.session.state();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, state, &info);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Teardown: no tick may outlive the loop
        ticker.disarm();
        info!("leaving play mode after {} game(s)", self.game_number);
        Ok(())
    }

    /// One item from the terminal event stream. `None` means the stream has
    /// ended and will keep returning `None`, so the loop stops.
    fn handle_input(&mut self, maybe_event: Option<io::Result<Event>>, ticker: &mut Ticker) {
        match maybe_event {
            Some(Ok(event)) => self.handle_event(event, ticker),
            Some(Err(err)) => warn!("terminal event error: {err}"),
            None => {
                warn!("terminal event stream ended, leaving play mode");
                self.should_quit = true;
            }
        }
    }

    fn handle_event(&mut self, event: Event, ticker: &mut Ticker) {
        let Event::Key(key) = event else {
            return;
        };

        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => {
                self.session.set_direction(direction);
            }
            KeyAction::Restart => {
                restart(&mut self.session, ticker);
                self.game_number += 1;
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
