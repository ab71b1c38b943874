//! Hands and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores a sequence of cards.
///
/// Aces start at 11 and are reduced to 1 one at a time while the total is
/// over 21. When `reveal_concealed` is false, face-down cards are left out of
/// the sum entirely.
#[must_use]
pub fn score(cards: &[Card], reveal_concealed: bool) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.concealed && !reveal_concealed {
            continue;
        }
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A hand of cards held by one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    seat: Seat,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(seat: Seat) -> Self {
        Self {
            seat,
            cards: Vec::new(),
        }
    }

    /// Returns the seat holding the hand.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, which is always dealt face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Scores the hand. See [`score`].
    #[must_use]
    pub fn score(&self, reveal_concealed: bool) -> u8 {
        score(&self.cards, reveal_concealed)
    }

    /// Scores the hand as the table sees it, with face-down cards left out.
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        self.score(false)
    }

    /// Returns whether any card is still face down.
    #[must_use]
    pub fn has_concealed(&self) -> bool {
        self.cards.iter().any(|c| c.concealed)
    }

    /// Turns every face-down card face up and returns the revealed cards.
    pub fn reveal(&mut self) -> Vec<Card> {
        let mut revealed = Vec::new();
        for card in self.cards.iter_mut().filter(|c| c.concealed) {
            card.concealed = false;
            revealed.push(*card);
        }
        revealed
    }

    /// Returns whether the full hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score(true) > 21
    }

    /// Returns whether the hand is two cards of the same rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
