//! Canonical deck construction, drawing, and the shuffle contract.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Color, SpecialKind};
use crate::domain::rules::{DECK_SIZE, SPECIAL_COPIES, SUITED_VALUES};
use crate::errors::domain::{DomainError, ValidationKind};

static CANONICAL: Lazy<Vec<Card>> = Lazy::new(build);

fn build() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for value in SUITED_VALUES {
        for color in Color::ALL {
            deck.push(Card::Suited { color, value });
        }
    }
    for index in 0..SPECIAL_COPIES {
        deck.push(Card::Special {
            kind: SpecialKind::Wizard,
            index,
        });
        deck.push(Card::Special {
            kind: SpecialKind::Joker,
            index,
        });
    }
    deck
}

/// Source of shuffle randomness, supplied by the environment.
///
/// The engine calls this exactly once per round while dealing; it performs no
/// other I/O.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// ChaCha-backed shuffler. A fixed seed reproduces every deal of a session.
pub struct SeededShuffler {
    rng: ChaCha8Rng,
}

impl SeededShuffler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// An ordered pile of cards, consumed from the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh copy of the canonical 60-card set, unshuffled.
    pub fn canonical() -> Self {
        Self {
            cards: CANONICAL.clone(),
        }
    }

    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn shuffle(&mut self, shuffler: &mut dyn Shuffler) {
        shuffler.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DomainError> {
        self.cards
            .pop()
            .ok_or_else(|| DomainError::validation(ValidationKind::EmptyDeck, "Deck is exhausted"))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn canonical_deck_holds_sixty_unique_cards() {
        let deck = Deck::canonical();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        assert_eq!(deck.cards().iter().filter(|c| c.is_wizard()).count(), 4);
        assert_eq!(deck.cards().iter().filter(|c| c.is_joker()).count(), 4);
        assert_eq!(deck.cards().iter().filter(|c| !c.is_special()).count(), 52);
    }

    #[test]
    fn draw_consumes_from_the_end() {
        let mut deck = Deck::canonical();
        let last = *deck.cards().last().unwrap();
        assert_eq!(deck.draw().unwrap(), last);
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }

    #[test]
    fn draw_fails_on_empty_deck() {
        let mut deck = Deck::empty();
        let err = deck.draw().unwrap_err();
        assert_eq!(err.kind(), ValidationKind::EmptyDeck);
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let mut a = Deck::canonical();
        let mut b = Deck::canonical();
        a.shuffle(&mut SeededShuffler::from_seed(7));
        b.shuffle(&mut SeededShuffler::from_seed(7));
        assert_eq!(a, b);

        let mut c = Deck::canonical();
        c.shuffle(&mut SeededShuffler::from_seed(8));
        assert_ne!(a, c);
    }

    #[test]
    fn shuffle_keeps_the_card_set() {
        let mut deck = Deck::canonical();
        deck.shuffle(&mut SeededShuffler::from_seed(99));
        let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
        let canonical: HashSet<Card> = Deck::canonical().cards().iter().copied().collect();
        assert_eq!(shuffled, canonical);
    }
}
