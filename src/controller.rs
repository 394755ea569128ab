//! Step controller translating discrete actions into continuous motion.
//!
//! One step applies the heading change (for turns), advances the agent along
//! its heading, resolves grid collisions and collects coins in pickup range,
//! then reports whether any collision correction was applied. Policies such as
//! a learning loop or a keyboard driver live outside this crate and feed
//! actions in through [`Action`].

use std::slice::Iter;

use thiserror::Error;

use crate::domain::{collision, Angle, Level};

/// The discrete action space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Action {
    WalkForward,
    TurnLeft,
    TurnRight,
}

impl Action {
    /// All actions in index order, for consumers enumerating the action space.
    pub fn iter() -> Iter<'static, Action> {
        static ACTIONS: [Action; 3] = [Action::WalkForward, Action::TurnLeft, Action::TurnRight];
        ACTIONS.iter()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Action {
    type Error = ActionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::WalkForward),
            1 => Ok(Action::TurnLeft),
            2 => Ok(Action::TurnRight),
            _ => Err(ActionError::InvalidAction(value)),
        }
    }
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("unrecognized action index {0}")]
    InvalidAction(usize),
}

/// Motion constants, fixed at construction. All distances are in grid units
/// and must stay below one cell for the collision scheme to be sound.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct StepConfig {
    stride: f64,
    stride_on_turn: f64,
    turn_angle: Angle,
}

impl StepConfig {
    /// `stride` is the forward walk distance, `stride_on_turn` the (usually
    /// smaller) forward nudge applied after a turn, `turn_angle` the heading
    /// change per turn action.
    pub const fn new(stride: f64, stride_on_turn: f64, turn_angle: Angle) -> Self {
        Self {
            stride,
            stride_on_turn,
            turn_angle,
        }
    }

    pub fn stride(&self) -> f64 {
        self.stride
    }

    pub fn stride_on_turn(&self) -> f64 {
        self.stride_on_turn
    }

    pub fn turn_angle(&self) -> Angle {
        self.turn_angle
    }
}

pub struct StepController {
    config: StepConfig,
}

impl StepController {
    pub const fn new(config: StepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Apply one action to the level. Returns whether the agent collided with
    /// the grid during this step.
    pub fn step(&self, level: &mut Level, action: Action) -> bool {
        match action {
            Action::WalkForward => self.walk(level, self.config.stride),
            Action::TurnLeft => {
                let heading = level.agent().heading() + self.config.turn_angle;
                level.agent_mut().set_heading(heading);
                self.walk(level, self.config.stride_on_turn)
            }
            Action::TurnRight => {
                let heading = level.agent().heading() - self.config.turn_angle;
                level.agent_mut().set_heading(heading);
                self.walk(level, self.config.stride_on_turn)
            }
        }
    }

    fn walk(&self, level: &mut Level, distance: f64) -> bool {
        let heading = level.agent().heading();
        let radius = level.agent().radius();
        let moved = level.agent().position().advanced(heading, distance);

        let (resolved, collided) = collision::resolve(level.grid(), moved, radius);
        level.agent_mut().set_position(resolved);
        level.coins_mut().collect(resolved, radius);

        collided
    }
}
