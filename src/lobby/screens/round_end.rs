//! Round-end screen: the outcome, and a forced choice of what comes next.

use bakers_dozen::{Outcome, RoundFinished};
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument};

use crate::SessionStats;
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the round-end screen.
#[derive(Debug, Getters)]
pub struct RoundEndScreen {
    finished: RoundFinished,
}

impl RoundEndScreen {
    /// Shows the result of `finished`.
    #[instrument(skip(finished), fields(outcome = %finished.outcome(), score = finished.score()))]
    pub fn new(finished: RoundFinished) -> Self {
        info!("Showing round result");
        Self { finished }
    }

    /// Gives back the finished round.
    pub fn into_finished(self) -> RoundFinished {
        self.finished
    }
}

impl Screen for RoundEndScreen {
    #[instrument(skip(self, frame, stats))]
    fn render(&self, frame: &mut Frame, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let color = match self.finished.outcome() {
            Outcome::Won => Color::Green,
            Outcome::TimedOut => Color::Red,
            Outcome::Stuck => Color::Yellow,
        };
        let title = Paragraph::new(self.finished.outcome().to_string())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let elapsed = self.finished.elapsed().as_secs();
        let seed = self
            .finished
            .seed()
            .map_or_else(|| "-".to_string(), |seed| seed.to_string());
        let lines = vec![
            Line::from(format!("Score: {}", self.finished.score())),
            Line::from(format!(
                "Cards home: {} / 52",
                self.finished.foundations().card_count()
            )),
            Line::from(format!("Moves: {}", self.finished.moves_made())),
            Line::from(format!("Time: {:02}:{:02}", elapsed / 60, elapsed % 60)),
            Line::from(format!("Seed: {}", seed)),
            Line::from(format!("Best this session: {}", stats.best_score())),
        ];
        let summary = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Round"));
        frame.render_widget(summary, chunks[1]);

        let help = Paragraph::new("Enter/r: Play again | s: Same deal | m: Menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::PlayAgain,
            KeyCode::Char('s') | KeyCode::Char('S') if self.finished.seed().is_some() => {
                ScreenTransition::ReplayDeal
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => ScreenTransition::GoToMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakers_dozen::{RoundConfig, TableGeometry, TickResult, start_round};
    use crossterm::event::KeyModifiers;

    fn finished(seed: u64) -> RoundFinished {
        let round = start_round(RoundConfig::new(), TableGeometry::default(), Some(seed)).unwrap();
        let limit = round.clock().limit();
        match round.tick(limit) {
            TickResult::Finished(done) => done,
            TickResult::InProgress(_) => panic!("clock should have run out"),
        }
    }

    #[test]
    fn test_same_deal_key_asks_for_replay() {
        let mut screen = RoundEndScreen::new(finished(77));
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(screen.handle_key(key), ScreenTransition::ReplayDeal);
        assert_eq!(screen.into_finished().seed(), Some(77));
    }

    #[test]
    fn test_enter_plays_fresh_deal() {
        let mut screen = RoundEndScreen::new(finished(1));
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(screen.handle_key(key), ScreenTransition::PlayAgain);
        assert_eq!(screen.finished().outcome(), Outcome::TimedOut);
    }
}
