//! Table coordinates and per-card visual placement.
//!
//! Positions are in abstract table units. The terminal shell uses one unit
//! per character cell; nothing here depends on how a frontend draws.

use crate::card::{Card, CardId, Suit};
use crate::table::{COLUMN_COUNT, Foundations, Tableau};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// A point in table coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: i32,
    /// Vertical offset from the top edge.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle, origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Width in table units.
    pub width: i32,
    /// Height in table units.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(origin: Point, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Whether `p` lies inside (left/top edges inclusive, right/bottom exclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.height
    }
}

/// Dimensions of the table, used to derive every card's home position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TableGeometry {
    card_width: i32,
    card_height: i32,
    spacing_x: i32,
    spacing_y: i32,
    margin_x: i32,
    foundation_y: i32,
    tableau_y: i32,
    table_width: i32,
}

impl Default for TableGeometry {
    fn default() -> Self {
        // Terminal-cell scale of the classic 1000x600 layout.
        Self {
            card_width: 7,
            card_height: 4,
            spacing_x: 8,
            spacing_y: 2,
            margin_x: 1,
            foundation_y: 1,
            tableau_y: 5,
            table_width: 105,
        }
    }
}

impl TableGeometry {
    /// Home position of the card at `row` (0 = bottom) in column `column`.
    pub fn column_card_origin(&self, column: usize, row: usize) -> Point {
        Point::new(
            self.margin_x + self.spacing_x * column as i32,
            self.tableau_y + self.spacing_y * (row as i32 + 1),
        )
    }

    /// Drop slot of column `column` when it holds `len` cards.
    ///
    /// For a non-empty column this is its top card's rect; for an empty
    /// column it is where the first card would sit.
    pub fn column_slot(&self, column: usize, len: usize) -> Rect {
        let row = len.saturating_sub(1);
        self.card_rect(self.column_card_origin(column, row))
    }

    /// Position of the foundation pile for `suit`.
    pub fn foundation_origin(&self, suit: Suit) -> Point {
        let from_right = 4 - suit.index() as i32;
        Point::new(self.table_width - from_right * self.spacing_x, self.foundation_y)
    }

    /// Drop slot of the foundation pile for `suit`.
    pub fn foundation_slot(&self, suit: Suit) -> Rect {
        self.card_rect(self.foundation_origin(suit))
    }

    /// A card-sized rect at `origin`.
    pub fn card_rect(&self, origin: Point) -> Rect {
        Rect::new(origin, self.card_width, self.card_height)
    }
}

/// Where each card is currently drawn, keyed by stable card id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualPlacement {
    positions: BTreeMap<CardId, Point>,
}

impl VisualPlacement {
    /// Places every card at its home position for the given piles.
    #[instrument(level = "trace", skip_all)]
    pub fn from_layout(geometry: &TableGeometry, tableau: &Tableau, foundations: &Foundations) -> Self {
        let mut placement = Self::default();
        placement.relayout(geometry, tableau, foundations);
        placement
    }

    /// Snaps every card back to its home position.
    pub fn relayout(&mut self, geometry: &TableGeometry, tableau: &Tableau, foundations: &Foundations) {
        self.positions.clear();
        for (c, column) in tableau.columns().iter().enumerate().take(COLUMN_COUNT) {
            for (row, card) in column.cards().iter().enumerate() {
                self.positions
                    .insert(card.id(), geometry.column_card_origin(c, row));
            }
        }
        for (suit, pile) in foundations.iter() {
            for card in pile {
                self.positions.insert(card.id(), geometry.foundation_origin(suit));
            }
        }
    }

    /// Current position of `card`, if it is on the table.
    pub fn position(&self, card: Card) -> Option<Point> {
        self.positions.get(&card.id()).copied()
    }

    /// Moves `card` to `at`.
    pub fn set_position(&mut self, card: Card, at: Point) {
        self.positions.insert(card.id(), at);
    }

    /// Number of placed cards.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no card is placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
