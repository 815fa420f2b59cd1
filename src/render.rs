//! Explicit rendering context for the card table.
//!
//! A [`RenderContext`] is built from the ratatui frame for each draw and
//! handed to whatever draws the table. Game logic never sees it.

use bakers_dozen::{Card, Point, Suit, TableGeometry};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Drawing operations the table needs.
pub trait TableRenderer {
    /// Draws the top of a pile at `anchor`, or an empty slot labelled `label`.
    fn render_pile(&mut self, cards: &[Card], anchor: Point, label: &str);

    /// Draws one face-up card.
    fn render_card(&mut self, card: Card, at: Point, highlighted: bool);

    /// Draws an empty card-sized outline.
    fn render_slot(&mut self, at: Point, label: &str);

    /// Draws a line of text.
    fn render_text(&mut self, text: &str, at: Point, style: Style);
}

/// Draws the table into a region of the current frame.
pub struct RenderContext<'a, 'f> {
    frame: &'a mut Frame<'f>,
    area: Rect,
    geometry: TableGeometry,
}

impl<'a, 'f> RenderContext<'a, 'f> {
    /// Context drawing into `area`, with table point (0, 0) at its top-left.
    pub fn new(frame: &'a mut Frame<'f>, area: Rect, geometry: TableGeometry) -> Self {
        Self {
            frame,
            area,
            geometry,
        }
    }

    /// Screen rect for a `width` x `height` box at table point `at`, clipped.
    ///
    /// `None` when nothing of it is visible.
    fn cells(&self, at: Point, width: i32, height: i32) -> Option<Rect> {
        let left = i32::from(self.area.x) + at.x;
        let top = i32::from(self.area.y) + at.y;
        let right = (left + width).min(i32::from(self.area.right()));
        let bottom = (top + height).min(i32::from(self.area.bottom()));
        let left = left.max(i32::from(self.area.x));
        let top = top.max(i32::from(self.area.y));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            u16::try_from(left).ok()?,
            u16::try_from(top).ok()?,
            u16::try_from(right - left).ok()?,
            u16::try_from(bottom - top).ok()?,
        ))
    }

    fn card_cells(&self, at: Point) -> Option<Rect> {
        self.cells(at, *self.geometry.card_width(), *self.geometry.card_height())
    }
}

fn suit_color(suit: Suit) -> Color {
    if suit.is_red() { Color::Red } else { Color::White }
}

impl TableRenderer for RenderContext<'_, '_> {
    fn render_pile(&mut self, cards: &[Card], anchor: Point, label: &str) {
        match cards.last() {
            Some(&top) => self.render_card(top, anchor, false),
            None => self.render_slot(anchor, label),
        }
    }

    fn render_card(&mut self, card: Card, at: Point, highlighted: bool) {
        let Some(area) = self.card_cells(at) else {
            return;
        };
        let color = suit_color(card.suit());
        let border = if highlighted {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = card.to_string();
        let text = vec![
            Line::styled(label.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Line::styled(label, Style::default().fg(color)).right_aligned(),
        ];
        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        self.frame.render_widget(Clear, area);
        self.frame.render_widget(widget, area);
    }

    fn render_slot(&mut self, at: Point, label: &str) {
        let Some(area) = self.card_cells(at) else {
            return;
        };
        let widget = Paragraph::new(Line::styled(label.to_string(), Style::default().fg(Color::DarkGray)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        self.frame.render_widget(widget, area);
    }

    fn render_text(&mut self, text: &str, at: Point, style: Style) {
        let width = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        let Some(area) = self.cells(at, width, 1) else {
            return;
        };
        self.frame
            .render_widget(Paragraph::new(Line::styled(text.to_string(), style)), area);
    }
}
