//! Submit control with its loading indicator.

use crate::errors::AppError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug)]
pub struct SubmitButton {
    label: &'static str,
    loading_label: &'static str,
    state: SubmitState,
}

impl SubmitButton {
    #[must_use]
    pub const fn new(label: &'static str, loading_label: &'static str) -> Self {
        Self {
            label,
            loading_label,
            state: SubmitState::Idle,
        }
    }

    /// Idle -> Submitting. Disables the control and shows the indicator.
    ///
    /// # Errors
    /// Returns [`AppError::Busy`] while a submission is outstanding.
    pub fn begin(&mut self) -> Result<(), AppError> {
        if self.state == SubmitState::Submitting {
            return Err(AppError::Busy);
        }
        self.state = SubmitState::Submitting;
        Ok(())
    }

    /// Submitting -> Idle on either settle branch.
    pub fn finish(&mut self) {
        self.state = SubmitState::Idle;
    }

    #[must_use]
    pub const fn state(&self) -> SubmitState {
        self.state
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state == SubmitState::Idle
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    #[must_use]
    pub const fn loading_label(&self) -> &'static str {
        self.loading_label
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.is_loading() {
            self.loading_label
        } else {
            self.label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_and_finish_toggle_loading() {
        let mut button = SubmitButton::new("Sign in", "Signing in...");
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Sign in");

        assert_eq!(button.begin(), Ok(()));
        assert!(!button.is_enabled());
        assert!(button.is_loading());
        assert_eq!(button.label(), "Signing in...");

        button.finish();
        assert_eq!(button.state(), SubmitState::Idle);
        assert_eq!(button.label(), "Sign in");
    }

    #[test]
    fn begin_while_submitting_is_rejected() {
        let mut button = SubmitButton::new("Sign in", "Signing in...");
        assert_eq!(button.begin(), Ok(()));
        assert_eq!(button.begin(), Err(AppError::Busy));
        assert!(button.is_loading());
    }
}
