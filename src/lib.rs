#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::player_view::{PlayerView, SeatView};
pub use domain::state::{GameState, PlayedCard, Player, PlayerId, Seat};
pub use domain::transitions::GamePhase;
pub use domain::{Card, Color, Deck, SeededShuffler, Shuffler, SpecialKind, Trump};
pub use errors::domain::{DomainError, ValidationKind};
pub use services::game_flow::GameFlow;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
