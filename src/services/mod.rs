//! Command orchestration over the domain aggregate.

pub mod game_flow;
