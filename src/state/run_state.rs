/// Run state definitions for the traversal engine
///
/// A run starts in `Running` and ends in exactly one terminal state.
use std::fmt;

/// Represents the current state of a traversal run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    // ===== Active State =====
    /// The traversal is still following links
    Running,

    // ===== Terminal Success State =====
    /// The goal page was reached
    Success,

    // ===== Terminal Failure States =====
    /// The current page had no qualifying outgoing link, or could not be
    /// fetched at all
    NoLink,

    /// The selected link resolved to an already-visited page
    LoopDetected,

    /// The hop budget ran out before the goal was reached
    HopsExceeded,
}

impl RunState {
    /// Returns true if this is a terminal state (the run is over)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if this represents a failed run
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::NoLink | Self::LoopDetected | Self::HopsExceeded)
    }

    /// Returns a short string form used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Success => "success",
            Self::NoLink => "no_link",
            Self::LoopDetected => "loop_detected",
            Self::HopsExceeded => "hops_exceeded",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
