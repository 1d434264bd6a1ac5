use super::Trend;

/// Events emitted by the shooting solver.
///
/// Trend events fire at most once, before the main loop. [`Event::Evaluated`]
/// fires for every evaluation in the loop, including the start point as
/// iteration zero, giving observers the full search trajectory without
/// altering control flow.
pub enum Event<'a, I, O> {
    /// The trend probe resolved the response trend.
    TrendProbed {
        /// The start point.
        x: f64,
        /// Observed value at the start point.
        y: f64,
        /// Observed value one initial step away.
        probe_y: f64,
        /// The trend the probe detected.
        trend: Trend,
    },

    /// The trend probe observed the same value at both points.
    ///
    /// The response is indistinguishable from flat at the start point; the
    /// solver proceeds assuming an increasing trend and flags the assumption
    /// in the solution.
    AmbiguousTrend {
        /// The start point.
        x: f64,
        /// Observed value at both probe points.
        y: f64,
    },

    /// One evaluation in the main search loop.
    Evaluated {
        /// Corrective iteration counter; zero is the start-point evaluation.
        iter: usize,
        /// The free variable that was evaluated.
        x: f64,
        /// The observed value at `x`.
        y: f64,
        /// The target the search is driving toward.
        target: f64,
        /// Deviation of the observed value from the target.
        deviation: f64,
        /// Step magnitude used to reach this `x` (the initial step for
        /// iteration zero).
        step: f64,
        /// The model input at this evaluation.
        input: &'a I,
        /// The model output at this evaluation.
        output: &'a O,
    },
}

impl<I, O> Event<'_, I, O> {
    /// Returns the free variable this event refers to.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::TrendProbed { x, .. }
            | Self::AmbiguousTrend { x, .. }
            | Self::Evaluated { x, .. } => *x,
        }
    }

    /// Returns the observed value this event refers to.
    #[must_use]
    pub fn y(&self) -> f64 {
        match self {
            Self::TrendProbed { y, .. }
            | Self::AmbiguousTrend { y, .. }
            | Self::Evaluated { y, .. } => *y,
        }
    }
}
