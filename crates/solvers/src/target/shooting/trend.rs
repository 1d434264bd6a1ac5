/// Monotonic relationship between the free variable and the observed value.
///
/// The trend determines the sign logic of every correction: it tells the
/// solver which way to move the free variable to push the observed value
/// toward the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// The observed value grows as the free variable grows.
    Increasing,
    /// The observed value falls as the free variable grows.
    Decreasing,
}

impl Trend {
    /// Trend implied by a probe pair, or `None` when the pair is flat.
    ///
    /// `step` is the signed offset from the start point to the probe point,
    /// so a negative probe step still resolves the trend correctly.
    pub(super) fn probed(y: f64, probe_y: f64, step: f64) -> Option<Self> {
        let slope = (probe_y - y) * step.signum();
        if slope > 0.0 {
            Some(Self::Increasing)
        } else if slope < 0.0 {
            Some(Self::Decreasing)
        } else {
            None
        }
    }

    /// Direction that moves the observed value toward the target.
    pub(super) fn correction(self, deviation: Deviation) -> Direction {
        match (self, deviation) {
            (Self::Increasing, Deviation::Above) | (Self::Decreasing, Deviation::Below) => {
                Direction::Down
            }
            (Self::Increasing, Deviation::Below) | (Self::Decreasing, Deviation::Above) => {
                Direction::Up
            }
        }
    }
}

/// Where the observed value sits relative to the target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Deviation {
    Above,
    Below,
}

impl Deviation {
    /// Classifies an observed value, or `None` when it is within tolerance.
    pub(super) fn classify(y: f64, target: f64, tolerance: f64) -> Option<Self> {
        if y > target + tolerance {
            Some(Self::Above)
        } else if y < target - tolerance {
            Some(Self::Below)
        } else {
            None
        }
    }
}

/// Direction of the next move of the free variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Direction {
    Up,
    Down,
}

impl Direction {
    pub(super) fn signum(self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}
