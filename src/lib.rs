//! Simulation core for a coin-collecting agent in a grid world.
//!
//! Discrete actions become continuous position and heading updates; collisions
//! between the agent's circular body and solid grid cells are resolved, and
//! coins within pickup range are removed from the level. Rendering and
//! learning are external collaborators: they drive [`StepController::step`]
//! and read the level state back, sharing it across threads through
//! [`SharedLevel`].

pub mod controller;
pub mod domain;
pub mod shared;

pub use controller::{Action, ActionError, StepConfig, StepController};
pub use domain::{Agent, Angle, CoinRegistry, Grid, Level, Position};
pub use shared::SharedLevel;
