//! The agent's continuous state inside the grid.

use super::{Angle, Position};

/// Circular body with a continuous position and an unconstrained heading.
/// Mutated in place by every simulation step.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Agent {
    position: Position,
    heading: Angle,
    radius: f64,
}

impl Agent {
    /// `radius` is the collision circle in grid units (one cell = 1.0) and is
    /// expected to be positive and smaller than a cell.
    pub const fn new(position: Position, heading: Angle, radius: f64) -> Self {
        Self {
            position,
            heading,
            radius,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: Angle) {
        self.heading = heading;
    }
}
