//! Collectible coins.

use super::Position;

/// Ordered collection of coin positions with one pickup radius shared by all
/// coins. Coins are removed outright when collected, never just marked.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct CoinRegistry {
    coins: Vec<Position>,
    pickup_radius: f64,
}

impl CoinRegistry {
    pub const fn new(coins: Vec<Position>, pickup_radius: f64) -> Self {
        Self {
            coins,
            pickup_radius,
        }
    }

    pub fn coins(&self) -> &[Position] {
        &self.coins
    }

    pub fn pickup_radius(&self) -> f64 {
        self.pickup_radius
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Remove every coin strictly closer to `center` than
    /// `agent_radius + pickup_radius`, comparing squared distances. A coin at
    /// exactly the threshold stays. Surviving coins keep their relative order.
    /// Returns how many coins were collected.
    pub fn collect(&mut self, center: Position, agent_radius: f64) -> usize {
        let threshold = agent_radius + self.pickup_radius;
        let threshold_squared = threshold * threshold;

        let before = self.coins.len();
        self.coins
            .retain(|coin| coin.distance_squared(center) >= threshold_squared);
        before - self.coins.len()
    }
}
