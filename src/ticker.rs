//! Fixed-cadence tick source for the simulation
//!
//! One `Ticker` lives for the whole play loop. It is armed when a game starts,
//! disarmed when the game ends or the loop tears down, so there is never more
//! than one tick stream driving a session.

use log::debug;
use std::future;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::game::{FoodSpawner, GameSession, StepResult};

pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    /// Create a disarmed ticker
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Start a fresh cadence; the first tick fires one period from now.
    /// Any previous cadence is dropped. Must run inside a tokio runtime.
    pub fn arm(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    /// Stop ticking. Returns whether a cadence was running.
    pub fn disarm(&mut self) -> bool {
        self.interval.take().is_some()
    }

    /// Wait for the next tick. Never resolves while disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

/// Outcome of one timer fire
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The session ran one step
    Advanced(StepResult),
    /// The game was already over; the ticker has been disarmed
    Halted,
}

/// Apply one timer fire to the session
pub fn on_tick<F: FoodSpawner>(session: &mut GameSession<F>, ticker: &mut Ticker) -> TickOutcome {
    if session.is_game_over() {
        if ticker.disarm() {
            debug!("game over, tick source stopped");
        }
        return TickOutcome::Halted;
    }
    TickOutcome::Advanced(session.advance())
}

/// Fresh game with a fresh cadence
pub fn restart<F: FoodSpawner>(session: &mut GameSession<F>, ticker: &mut Ticker) {
    session.restart();
    ticker.arm();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Direction, GameEngine, Position, ScriptedFood};
    use tokio::time::timeout;

    const PERIOD: Duration = Duration::from_millis(200);

    fn session() -> GameSession<ScriptedFood> {
        GameSession::with_engine(GameEngine::with_spawner(
            Board::new(200, 200, 20),
            ScriptedFood::new([Position::new(0, 0)]),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_armed_ticker_fires_every_period() {
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm();
        let start = Instant::now();

        ticker.tick().await;
        assert_eq!(start.elapsed(), PERIOD);

        ticker.tick().await;
        assert_eq!(start.elapsed(), PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_ticker_never_fires() {
        let mut ticker = Ticker::new(PERIOD);
        assert!(!ticker.is_armed());
        assert!(timeout(Duration::from_secs(60), ticker.tick()).await.is_err());

        ticker.arm();
        assert!(ticker.disarm());
        assert!(!ticker.disarm());
        assert!(timeout(Duration::from_secs(60), ticker.tick()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_game_over_then_halts() {
        let mut session = session();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm();
        let start = Instant::now();

        let mut advanced = 0;
        loop {
            ticker.tick().await;
            match on_tick(&mut session, &mut ticker) {
                TickOutcome::Advanced(_) => advanced += 1,
                TickOutcome::Halted => break,
            }
        }

        // Four safe moves to the right edge, the fifth hits the wall, and
        // the following fire finds the game over
        assert_eq!(advanced, 5);
        assert!(session.is_game_over());
        assert!(!ticker.is_armed());
        assert_eq!(start.elapsed(), PERIOD * 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_between_ticks_applies_to_next_step() {
        let mut session = session();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm();

        ticker.tick().await;
        on_tick(&mut session, &mut ticker);
        assert_eq!(session.state().snake.head(), Position::new(120, 100));

        session.set_direction(Direction::Down);
        ticker.tick().await;
        on_tick(&mut session, &mut ticker);
        assert_eq!(session.state().snake.head(), Position::new(120, 120));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_rearms_after_game_over() {
        let mut session = session();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm();

        while on_tick(&mut session, &mut ticker) != TickOutcome::Halted {}
        assert!(!ticker.is_armed());

        restart(&mut session, &mut ticker);
        assert!(ticker.is_armed());
        assert!(!session.is_game_over());

        let start = Instant::now();
        ticker.tick().await;
        assert_eq!(start.elapsed(), PERIOD);
        assert!(matches!(
            on_tick(&mut session, &mut ticker),
            TickOutcome::Advanced(_)
        ));
    }
}
