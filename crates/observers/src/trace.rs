use std::io::{self, Write};

use glide_core::Observer;
use glide_solvers::target::shooting::{Action, Event};

/// Observer that writes one line per solver event to a sink.
///
/// Each search iteration produces a line with the iteration count, absolute
/// error, current free variable, observed value, and target. Trend events are
/// logged as they occur, including the ambiguous-trend warning.
///
/// The trace never steers the solver: it always returns `None`. Write
/// failures are held on the side and exposed through
/// [`error`](IterationTrace::error) instead of interrupting the search.
pub struct IterationTrace<W> {
    sink: W,
    error: Option<io::Error>,
}

impl<W: Write> IterationTrace<W> {
    /// Creates a trace writing to the given sink.
    pub fn new(sink: W) -> Self {
        Self { sink, error: None }
    }

    /// Returns the first write error, if any occurred.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Consumes the trace and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.sink, "{line}") {
            self.error = Some(e);
        }
    }
}

impl<I, O, W: Write> Observer<Event<'_, I, O>, Action> for IterationTrace<W> {
    fn observe(&mut self, event: &Event<'_, I, O>) -> Option<Action> {
        match event {
            Event::TrendProbed { trend, .. } => {
                self.write_line(&format!("trend probe: {trend:?}"));
            }
            Event::AmbiguousTrend { x, .. } => {
                self.write_line(&format!(
                    "warning: trend at x = {x:.4} cannot be assessed, assuming increasing"
                ));
            }
            Event::Evaluated {
                iter,
                x,
                y,
                target,
                deviation,
                ..
            } => {
                self.write_line(&format!(
                    "{iter} err: {:.4} - x = {x:.4} - y = {y:.4} - target = {target:.4}",
                    deviation.abs()
                ));
            }
        }
        None
    }
}
