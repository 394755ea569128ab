//! The domain module encapsulates the core simulation logic. It defines the
//! `Grid`, `Agent` and `CoinRegistry` entities, along with the rules governing
//! their interactions.
//!
//! By minimizing hard dependencies, this module ensures the simulation rules
//! remain adaptable and independent of specific implementation details.

mod agent;
mod basis;
mod coin;
pub mod collision;
mod grid;
mod level;

pub use agent::Agent;
pub use basis::{Angle, Position};
pub use coin::CoinRegistry;
pub use grid::Grid;
pub use level::Level;
