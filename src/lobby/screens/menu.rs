//! Menu screen: start a round or quit, with session statistics.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::SessionStats;
use crate::lobby::screen::{Screen, ScreenTransition};

/// Menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    NewRound,
    Quit,
}

impl MenuOption {
    fn label(self) -> &'static str {
        match self {
            Self::NewRound => "New Round",
            Self::Quit => "Quit",
        }
    }

    fn all() -> &'static [MenuOption] {
        &[Self::NewRound, Self::Quit]
    }
}

const RULES: &str = "Move one card at a time by dragging it with the mouse. \
A card may go on a column whose top card is exactly one rank higher, any suit. \
Empty columns stay empty. Build each suit from ace to king on the foundations \
(double-click sends a card there). Foundation cards score 50. \
Clear all thirteen columns before the clock runs out.";

/// State for the menu screen.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    list_state: ListState,
    notice: Option<String>,
}

impl MenuScreen {
    /// Creates a menu with the first option selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MenuScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            list_state: state,
            notice: None,
        }
    }

    /// Menu showing `notice` above the options.
    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::new()
        }
    }

    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    #[instrument(skip(self, frame, stats))]
    fn render(&self, frame: &mut Frame, stats: &SessionStats) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Baker's Dozen")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let stats_text = format!(
            "Played: {}   Won: {}   Timed out: {}   Stuck: {}   Best: {}   Win rate: {:.1}%",
            stats.played(),
            stats.won(),
            stats.timed_out(),
            stats.stuck(),
            stats.best_score(),
            stats.win_rate()
        );
        let stats_bar = Paragraph::new(self.notice.clone().unwrap_or(stats_text))
            .style(Style::default().fg(if self.notice.is_some() {
                Color::Red
            } else {
                Color::Green
            }))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Session"));
        frame.render_widget(stats_bar, chunks[1]);

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let rules = Paragraph::new(RULES)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("How to play"));
        frame.render_widget(rules, chunks[3]);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::NewRound => ScreenTransition::StartRound { seed: None },
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('n') => ScreenTransition::StartRound { seed: None },
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
