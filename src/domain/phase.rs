//! Lifecycle of a single command invocation

/// Phase of a command invocation.
///
/// `Idle → Launching → (LaunchFailed | Running) → Draining → Exited(code)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Launching,
    LaunchFailed,
    Running,
    Draining,
    Exited(i32),
}

impl RunPhase {
    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::LaunchFailed | RunPhase::Exited(_))
    }

    /// Whether a child process is being launched or is alive
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            RunPhase::Launching | RunPhase::Running | RunPhase::Draining
        )
    }

    pub fn can_advance_to(&self, next: RunPhase) -> bool {
        matches!(
            (self, next),
            (RunPhase::Idle, RunPhase::Launching)
                | (RunPhase::Launching, RunPhase::LaunchFailed)
                | (RunPhase::Launching, RunPhase::Running)
                | (RunPhase::Running, RunPhase::Draining)
                | (RunPhase::Draining, RunPhase::Exited(_))
        )
    }

    /// Move to `next`, or return the current phase unchanged in `Err` if the
    /// transition is not allowed.
    pub fn advance(&mut self, next: RunPhase) -> Result<(), RunPhase> {
        if self.can_advance_to(next) {
            *self = next;
            Ok(())
        } else {
            Err(*self)
        }
    }

    /// Short label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Launching => "launching",
            RunPhase::LaunchFailed => "launch failed",
            RunPhase::Running => "running",
            RunPhase::Draining => "draining",
            RunPhase::Exited(_) => "exited",
        }
    }
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunPhase::Exited(code) => write!(f, "exited ({})", code),
            other => write!(f, "{}", other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut phase = RunPhase::default();
        assert!(phase.advance(RunPhase::Launching).is_ok());
        assert!(phase.advance(RunPhase::Running).is_ok());
        assert!(phase.advance(RunPhase::Draining).is_ok());
        assert!(phase.advance(RunPhase::Exited(3)).is_ok());
        assert_eq!(phase, RunPhase::Exited(3));
        assert!(phase.is_terminal());
    }

    #[test]
    fn test_launch_failure_is_terminal() {
        let mut phase = RunPhase::Launching;
        assert!(phase.advance(RunPhase::LaunchFailed).is_ok());
        assert!(phase.is_terminal());
        assert_eq!(phase.advance(RunPhase::Running), Err(RunPhase::LaunchFailed));
    }

    #[test]
    fn test_cannot_skip_phases() {
        let mut phase = RunPhase::Idle;
        assert_eq!(phase.advance(RunPhase::Running), Err(RunPhase::Idle));
        assert_eq!(phase.advance(RunPhase::Exited(0)), Err(RunPhase::Idle));

        let mut running = RunPhase::Running;
        assert!(running.advance(RunPhase::Exited(0)).is_err());
        assert_eq!(running, RunPhase::Running);
    }

    #[test]
    fn test_active_phases() {
        assert!(!RunPhase::Idle.is_active());
        assert!(RunPhase::Launching.is_active());
        assert!(RunPhase::Running.is_active());
        assert!(RunPhase::Draining.is_active());
        assert!(!RunPhase::Exited(1).is_active());
        assert!(!RunPhase::LaunchFailed.is_active());
    }

    #[test]
    fn test_display() {
        assert_eq!(RunPhase::Exited(2).to_string(), "exited (2)");
        assert_eq!(RunPhase::Draining.to_string(), "draining");
    }
}
