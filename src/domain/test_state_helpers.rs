//! Builders shared by the domain test modules.

use crate::domain::cards_types::{Card, Color, Trump};
use crate::domain::deck::{Deck, Shuffler};
use crate::domain::state::{GameState, Player, PlayerId, Seat};
use crate::domain::transitions::GamePhase;

pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

/// Players seated in join order, ids 1..=count.
pub fn seated_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player {
            id: PlayerId(i as i64 + 1),
            nickname: format!("player-{i}"),
            hand: Vec::new(),
        })
        .collect()
}

/// A state mid-bidding: hands dealt, nobody has guessed yet.
pub fn guess_state(hands: &[&[&str]], dealer: Seat) -> GameState {
    let n = hands.len();
    let mut state = GameState::new();
    state.players = seated_players(n);
    for (seat, tokens) in hands.iter().enumerate() {
        state.players[seat].hand = parse_cards(tokens);
    }
    state.phase = GamePhase::Guess;
    state.round = hands[0].len() as u8;
    state.dealer = dealer;
    state.turn = (dealer + 1) % n;
    state.guesses = vec![None; n];
    state.wins_this_round = vec![0; n];
    state.totals = vec![0; n];
    state
}

/// A state mid-trick-play: everyone bid zero, `turn` leads.
pub fn play_state(hands: &[&[&str]], trump_color: Option<Color>, turn: Seat) -> GameState {
    let mut state = guess_state(hands, 0);
    state.phase = GamePhase::Play;
    state.turn = turn;
    state.guesses = vec![Some(0); hands.len()];
    state.trump = trump_color.map(|color| Trump {
        card: Card::wizard(0),
        color: Some(color),
    });
    state
}

/// Shuffler that imposes a fixed arrangement; the arrangement must be a
/// permutation of the canonical deck.
pub struct StackedShuffler {
    order: Vec<Card>,
}

impl StackedShuffler {
    pub fn new(order: Vec<Card>) -> Self {
        Self { order }
    }
}

impl Shuffler for StackedShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        assert_eq!(cards.len(), self.order.len(), "stacked order must cover the deck");
        cards.copy_from_slice(&self.order);
    }
}

/// Arrange a canonical-deck permutation so that dealing pops exactly
/// `deal_sequence` in order (seat left of the dealer first), then `trump` as
/// the turn-up, with the unnamed remainder underneath.
pub fn stack_deck(deal_sequence: &[Card], trump: Option<Card>) -> Vec<Card> {
    let mut named: Vec<Card> = deal_sequence.to_vec();
    if let Some(t) = trump {
        named.push(t);
    }
    let mut order: Vec<Card> = Deck::canonical()
        .cards()
        .iter()
        .copied()
        .filter(|c| !named.contains(c))
        .collect();
    // Pops come from the back: trump below the deal sequence, which sits
    // reversed so its first card pops first.
    if let Some(t) = trump {
        order.push(t);
    }
    order.extend(deal_sequence.iter().rev().copied());
    order
}
