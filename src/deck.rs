//! Single 52-card deck.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, DeckExhausted};

/// A single deck of playing cards, drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52-card deck in suit-major order, unshuffled.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck whose successive draws yield `draws` in order.
    ///
    /// The deck may be shorter than 52 cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a suit and rank appear twice.
    pub fn stacked(draws: &[Card]) -> Result<Self, DeckError> {
        for (i, card) in draws.iter().enumerate() {
            if draws[..i].contains(card) {
                return Err(DeckError::DuplicateCard);
            }
        }

        let cards = draws
            .iter()
            .rev()
            .map(|card| Card::new(card.suit, card.rank))
            .collect();

        Ok(Self { cards })
    }

    /// Shuffles the deck in place with a backward Fisher-Yates pass.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn build_has_every_card_once() {
        let deck = Deck::build();
        assert_eq!(deck.len(), DECK_SIZE);

        let mut sorted = deck.cards().to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let deck = Deck::shuffled(&mut rng);

        let mut shuffled = deck.cards().to_vec();
        shuffled.sort();
        let mut original = Deck::build().cards().to_vec();
        original.sort();

        assert_eq!(shuffled, original);
        assert_ne!(deck, Deck::build());
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(5));
        let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn draw_until_exhausted() {
        let mut deck = Deck::build();
        for _ in 0..DECK_SIZE {
            assert!(deck.draw().is_ok());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckExhausted));
    }

    #[test]
    fn stacked_draws_in_order() {
        let first = Card::new(Suit::Hearts, Rank::Ace);
        let second = Card::new(Suit::Clubs, Rank::Nine);
        let mut deck = Deck::stacked(&[first, second]).unwrap();

        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
        assert_eq!(deck.draw(), Err(DeckExhausted));
    }

    #[test]
    fn stacked_rejects_duplicates() {
        let card = Card::new(Suit::Spades, Rank::King);
        assert_eq!(
            Deck::stacked(&[card, card.face_down()]),
            Err(DeckError::DuplicateCard)
        );
    }
}
