use super::Config;
use super::trend::Direction;

/// Mutable search state for a single solve call.
///
/// Created when the solve starts, mutated once per corrective move, and
/// discarded when the solve returns. Nothing persists across calls.
pub(super) struct State {
    x: f64,
    step: f64,
    direction: Direction,
}

impl State {
    pub(super) fn new(config: &Config) -> Self {
        Self {
            x: config.start,
            step: config.initial_step.abs(),
            direction: Direction::Up,
        }
    }

    pub(super) fn x(&self) -> f64 {
        self.x
    }

    pub(super) fn step(&self) -> f64 {
        self.step
    }

    /// Applies one corrective move and clamps into the configured bounds.
    ///
    /// A direction reversal divides the step by the scaler before the move is
    /// applied; two consecutive moves in the same direction share the same
    /// step. Clamping never touches the step.
    pub(super) fn advance(&mut self, direction: Direction, config: &Config) {
        if direction != self.direction {
            self.step /= config.step_scaler;
            self.direction = direction;
        }
        self.x = config.clamp(self.x + direction.signum() * self.step);
    }
}
