//! The level aggregate: one grid, one agent, the remaining coins.

use super::{Agent, CoinRegistry, Grid};

/// Everything a single playable level owns. The step controller borrows it
/// mutably for exactly one step at a time; it never owns or allocates it.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    grid: Grid,
    agent: Agent,
    coins: CoinRegistry,
}

impl Level {
    pub const fn new(grid: Grid, agent: Agent, coins: CoinRegistry) -> Self {
        Self { grid, agent, coins }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    pub fn coins(&self) -> &CoinRegistry {
        &self.coins
    }

    pub fn coins_mut(&mut self) -> &mut CoinRegistry {
        &mut self.coins
    }
}
