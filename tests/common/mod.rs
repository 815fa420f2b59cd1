//! Shared layouts for integration tests.

#![allow(dead_code)]

use bakers_dozen::{
    COLUMN_COUNT, Card, Foundations, Rank, RoundConfig, RoundInProgress, Suit, TableGeometry,
    Tableau,
};

/// Column `r` holds the four cards of rank value `r`, spades at the bottom
/// and hearts on top. Every card can reach its foundation in rank order.
pub fn ladder_columns() -> [Vec<Card>; COLUMN_COUNT] {
    std::array::from_fn(|value| {
        let rank = Rank::from_value(value as u8).expect("rank value in range");
        [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts]
            .into_iter()
            .map(|suit| Card::new(rank, suit))
            .collect()
    })
}

/// Active round over `columns` with empty foundations.
pub fn round_from(columns: [Vec<Card>; COLUMN_COUNT], config: RoundConfig) -> RoundInProgress {
    RoundInProgress::from_layout(
        config,
        TableGeometry::default(),
        Tableau::from_columns(columns),
        Foundations::new(),
    )
    .expect("valid layout")
}

/// Active round over the ladder layout.
pub fn ladder_round(config: RoundConfig) -> RoundInProgress {
    round_from(ladder_columns(), config)
}

/// Shorthand for a card.
pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}
