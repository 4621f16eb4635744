//! Submission status and the view it selects

/// Lifecycle of a waitlist submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionStatus {
    /// Whether `next` is a legal successor of `self`.
    ///
    /// Status only moves forward: Idle -> Submitting -> Submitted.
    pub fn can_advance_to(&self, next: SubmissionStatus) -> bool {
        matches!(
            (self, next),
            (SubmissionStatus::Idle, SubmissionStatus::Submitting)
                | (SubmissionStatus::Submitting, SubmissionStatus::Submitted)
        )
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmissionStatus::Submitting
    }
}

/// What the form panel renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistView {
    /// The input form; `busy` disables the button and shows a spinner
    ShowingForm { busy: bool },
    ShowingConfirmation,
}

impl From<SubmissionStatus> for WaitlistView {
    fn from(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Idle => WaitlistView::ShowingForm { busy: false },
            SubmissionStatus::Submitting => WaitlistView::ShowingForm { busy: true },
            SubmissionStatus::Submitted => WaitlistView::ShowingConfirmation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_forward_transitions_only() {
        use SubmissionStatus::*;

        assert!(Idle.can_advance_to(Submitting));
        assert!(Submitting.can_advance_to(Submitted));

        assert!(!Idle.can_advance_to(Submitted));
        assert!(!Submitting.can_advance_to(Idle));
        assert!(!Submitted.can_advance_to(Idle));
        assert!(!Submitted.can_advance_to(Submitting));
        assert!(!Submitted.can_advance_to(Submitted));
    }

    #[test]
    fn test_view_selection() {
        assert_eq!(
            WaitlistView::from(SubmissionStatus::Idle),
            WaitlistView::ShowingForm { busy: false }
        );
        assert_eq!(
            WaitlistView::from(SubmissionStatus::Submitting),
            WaitlistView::ShowingForm { busy: true }
        );
        assert_eq!(
            WaitlistView::from(SubmissionStatus::Submitted),
            WaitlistView::ShowingConfirmation
        );
    }

    #[test]
    fn test_button_busy_iff_submitting() {
        for status in [
            SubmissionStatus::Idle,
            SubmissionStatus::Submitting,
            SubmissionStatus::Submitted,
        ] {
            let busy = matches!(WaitlistView::from(status), WaitlistView::ShowingForm { busy: true });
            assert_eq!(busy, status.is_submitting());
        }
    }
}
