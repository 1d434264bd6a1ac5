/// Control actions supported by the shooting solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the most recent evaluation as the
    /// solution, marked [`Status::StoppedByObserver`].
    ///
    /// [`Status::StoppedByObserver`]: super::Status::StoppedByObserver
    StopEarly,
}
