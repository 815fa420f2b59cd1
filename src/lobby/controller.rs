//! Lobby controller: the single event loop driving every screen.

use std::time::{Duration, Instant};

use bakers_dozen::RoundSetup;
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, error, info, instrument};

use crate::input::{InputEvent, poll_input_events};
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{MenuScreen, RoundEndScreen, RoundProgress, RoundScreen};
use crate::{AppConfig, SessionStats};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    Round(RoundScreen),
    RoundEnd(RoundEndScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Round(s) => s,
            ActiveScreen::RoundEnd(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Round(s) => s,
            ActiveScreen::RoundEnd(s) => s,
        }
    }
}

/// Controller that drives the Menu → Round → RoundEnd state machine.
///
/// Call [`LobbyController::run`] to start the event loop. Rounds restart
/// by transition, never by recursion.
#[derive(Debug, Getters)]
pub struct LobbyController {
    config: AppConfig,
    stats: SessionStats,
    /// Seed from the command line, used for the first round only.
    first_seed: Option<u64>,
}

impl LobbyController {
    /// Creates a new controller.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig, first_seed: Option<u64>) -> Self {
        info!("Creating LobbyController");
        Self {
            config,
            stats: SessionStats::new(),
            first_seed,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        let frame = Duration::from_millis(*self.config.ui().frame_ms());
        let max_events = *self.config.ui().max_events_per_tick();

        let mut screen = ActiveScreen::Menu(MenuScreen::new());

        loop {
            terminal.draw(|f| screen.as_screen().render(f, &self.stats))?;

            for event in poll_input_events(max_events, frame)? {
                let transition = match event {
                    InputEvent::Quit => ScreenTransition::Quit,
                    InputEvent::Key(key) => screen.as_screen_mut().handle_key(key),
                    InputEvent::Pointer(pointer) => screen.as_screen_mut().handle_pointer(pointer),
                };
                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }

            screen = self.tick(screen, Instant::now());
        }
    }

    /// Advances the round clock, moving to the round-end screen when it finishes.
    #[instrument(level = "trace", skip(self, screen))]
    fn tick(&mut self, screen: ActiveScreen, now: Instant) -> ActiveScreen {
        match screen {
            ActiveScreen::Round(round) => match round.advance(now) {
                RoundProgress::Continue(round) => ActiveScreen::Round(round),
                RoundProgress::Over(finished) => {
                    self.stats.record(&finished);
                    ActiveScreen::RoundEnd(RoundEndScreen::new(finished))
                }
            },
            other => other,
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMenu => {
                info!("Navigating to Menu");
                Some(ActiveScreen::Menu(MenuScreen::new()))
            }

            ScreenTransition::StartRound { seed } => {
                let seed = seed.or_else(|| self.first_seed.take());
                Some(self.start_round(seed))
            }

            ScreenTransition::PlayAgain | ScreenTransition::ReplayDeal => match current {
                ActiveScreen::RoundEnd(end) => {
                    let finished = end.into_finished();
                    let setup = if transition == ScreenTransition::PlayAgain {
                        Some(finished.restart())
                    } else {
                        finished.replay()
                    };
                    Some(match setup {
                        Some(setup) => self.deal(setup),
                        None => ActiveScreen::Menu(MenuScreen::with_notice(
                            "That deal has no seed to replay".to_string(),
                        )),
                    })
                }
                other => Some(other),
            },

            ScreenTransition::Quit => None,
        }
    }

    /// Deals a round from the configured settings.
    #[instrument(skip(self))]
    fn start_round(&mut self, seed: Option<u64>) -> ActiveScreen {
        let (round, geometry) = (*self.config.round(), *self.config.geometry());
        let setup = match seed {
            Some(seed) => RoundSetup::with_seed(round, geometry, seed),
            None => RoundSetup::new(round, geometry),
        };
        self.deal(setup)
    }

    /// Deals `setup`, falling back to the menu if dealing fails.
    #[instrument(skip(self, setup), fields(seed = setup.seed()))]
    fn deal(&self, setup: RoundSetup) -> ActiveScreen {
        debug!("Dealing round");
        match setup.deal() {
            Ok(round) => ActiveScreen::Round(RoundScreen::new(
                round,
                *self.config.ui().double_click_ms(),
            )),
            Err(e) => {
                error!(error = %e, "Deal failed");
                ActiveScreen::Menu(MenuScreen::with_notice(format!("Could not deal: {}", e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakers_dozen::{TickResult, start_round};

    fn round_end(config: &AppConfig, seed: u64) -> ActiveScreen {
        let round = start_round(*config.round(), *config.geometry(), Some(seed)).unwrap();
        let limit = round.clock().limit();
        match round.tick(limit) {
            TickResult::Finished(done) => ActiveScreen::RoundEnd(RoundEndScreen::new(done)),
            TickResult::InProgress(_) => panic!("clock should have run out"),
        }
    }

    #[test]
    fn test_replay_deals_the_same_seed() {
        let mut controller = LobbyController::new(AppConfig::default(), None);
        let screen = round_end(controller.config(), 77);
        match controller.apply_transition(ScreenTransition::ReplayDeal, screen) {
            Some(ActiveScreen::Round(round)) => assert_eq!(round.round().seed(), Some(77)),
            other => panic!("expected a round, got {:?}", other),
        }
    }

    #[test]
    fn test_play_again_deals_a_fresh_round() {
        let mut controller = LobbyController::new(AppConfig::default(), None);
        let screen = round_end(controller.config(), 77);
        match controller.apply_transition(ScreenTransition::PlayAgain, screen) {
            Some(ActiveScreen::Round(round)) => {
                assert_eq!(round.round().score(), 0);
                assert_eq!(round.round().tableau().card_count(), 52);
            }
            other => panic!("expected a round, got {:?}", other),
        }
    }

    #[test]
    fn test_round_end_transitions_ignored_elsewhere() {
        let mut controller = LobbyController::new(AppConfig::default(), None);
        let menu = ActiveScreen::Menu(MenuScreen::new());
        assert!(matches!(
            controller.apply_transition(ScreenTransition::PlayAgain, menu),
            Some(ActiveScreen::Menu(_))
        ));
    }
}
