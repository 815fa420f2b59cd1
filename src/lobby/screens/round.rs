//! Round screen: the card table, driven by mouse gestures.

use bakers_dozen::{
    ClickTracker, Gesture, GestureOutcome, InteractionController, Point, RoundFinished,
    RoundInProgress, TickResult,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::SessionStats;
use crate::input::{PointerEvent, PointerKind};
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::render::{RenderContext, TableRenderer};

/// Rows above the table used by the status bar.
const HEADER_HEIGHT: u16 = 3;

/// Result of advancing the round clock.
#[derive(Debug)]
pub enum RoundProgress {
    /// Still playing.
    Continue(RoundScreen),
    /// The round reached an outcome.
    Over(RoundFinished),
}

/// State for the round screen.
#[derive(Debug)]
pub struct RoundScreen {
    round: RoundInProgress,
    controller: InteractionController,
    clicks: ClickTracker,
    started: Instant,
    notice: Option<String>,
}

impl RoundScreen {
    /// Starts showing `round`, with its clock running from now.
    #[instrument(skip(round), fields(seed = ?round.seed()))]
    pub fn new(round: RoundInProgress, double_click_ms: u64) -> Self {
        info!("Round started");
        Self {
            round,
            controller: InteractionController::new(),
            clicks: ClickTracker::new(double_click_ms),
            started: Instant::now(),
            notice: None,
        }
    }

    /// The round being played.
    pub fn round(&self) -> &RoundInProgress {
        &self.round
    }

    /// Time since the round started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Feeds elapsed time to the round and checks for its end.
    #[instrument(level = "trace", skip(self))]
    pub fn advance(self, now: Instant) -> RoundProgress {
        let elapsed = self.elapsed(now);
        let Self {
            round,
            controller,
            clicks,
            started,
            notice,
        } = self;
        match round.tick(elapsed) {
            TickResult::InProgress(round) => RoundProgress::Continue(Self {
                round,
                controller,
                clicks,
                started,
                notice,
            }),
            TickResult::Finished(finished) => RoundProgress::Over(finished),
        }
    }

    /// Maps a screen cell to table coordinates.
    fn table_point(pointer: PointerEvent) -> Point {
        Point::new(
            i32::from(pointer.column),
            i32::from(pointer.row) - i32::from(HEADER_HEIGHT),
        )
    }

    #[instrument(skip(self))]
    fn undo(&mut self) {
        self.controller.cancel(&mut self.round);
        self.notice = match self.round.undo() {
            Ok(()) => None,
            Err(e) => {
                debug!(error = %e, "Undo unavailable");
                Some(e.to_string())
            }
        };
    }

    fn status_line(&self) -> String {
        let remaining = self.round.clock().remaining().as_secs();
        let seed = self
            .round
            .seed()
            .map_or_else(|| "-".to_string(), |seed| seed.to_string());
        format!(
            "Score {:>5}   Time {:02}:{:02}   Undos {}   Seed {}",
            self.round.score(),
            remaining / 60,
            remaining % 60,
            self.round.undo_budget(),
            seed
        )
    }

    fn render_table(&self, ctx: &mut impl TableRenderer) {
        let geometry = self.round.geometry();
        let label_style = Style::default().fg(Color::DarkGray);

        for (suit, pile) in self.round.foundations().iter() {
            ctx.render_pile(pile, geometry.foundation_origin(suit), &suit.symbol().to_string());
        }

        let dragged = self.controller.drag().map(|drag| drag.card);
        for (index, column) in self.round.tableau().columns().iter().enumerate() {
            let home = geometry.column_card_origin(index, 0);
            ctx.render_text(
                &format!("{:>2}", index + 1),
                Point::new(home.x + 2, *geometry.tableau_y()),
                label_style,
            );
            if column.is_empty() {
                ctx.render_slot(home, "");
                continue;
            }
            for (row, &card) in column.cards().iter().enumerate() {
                if Some(card) == dragged {
                    continue;
                }
                let at = self
                    .round
                    .placement()
                    .position(card)
                    .unwrap_or_else(|| geometry.column_card_origin(index, row));
                ctx.render_card(card, at, false);
            }
        }

        if let Some(card) = dragged
            && let Some(at) = self.round.placement().position(card)
        {
            ctx.render_card(card, at, true);
        }
    }
}

impl Screen for RoundScreen {
    #[instrument(level = "trace", skip(self, frame, _stats))]
    fn render(&self, frame: &mut Frame, _stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let low_time = self.round.clock().remaining() < Duration::from_secs(30);
        let status = Paragraph::new(self.status_line())
            .style(
                Style::default()
                    .fg(if low_time { Color::Red } else { Color::Green })
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).title("Baker's Dozen"));
        frame.render_widget(status, chunks[0]);

        let footer = match &self.notice {
            Some(notice) => Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new("drag: move | double-click: to foundation | u: undo | r: restart | m: menu | q: quit")
                .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(footer, chunks[2]);

        let mut ctx = RenderContext::new(frame, chunks[1], *self.round.geometry());
        self.render_table(&mut ctx);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.undo();
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("Restarting round");
                ScreenTransition::StartRound { seed: None }
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                info!("Abandoning round for menu");
                ScreenTransition::GoToMenu
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn handle_pointer(&mut self, pointer: PointerEvent) -> ScreenTransition {
        let at = Self::table_point(pointer);
        let gesture = match pointer.kind {
            PointerKind::Down => self.clicks.classify(at, self.started.elapsed()),
            PointerKind::Drag => Gesture::PointerMove(at),
            PointerKind::Up => Gesture::PointerUp(at),
        };
        match self.controller.apply(&mut self.round, gesture) {
            GestureOutcome::Moved(report) => {
                debug!(mv = %report.mv, points = report.points, "Move made");
                self.notice = None;
            }
            GestureOutcome::SnappedBack {
                reason: Some(reason),
                ..
            } => self.notice = Some(reason.to_string()),
            _ => {}
        }
        ScreenTransition::Stay
    }
}
