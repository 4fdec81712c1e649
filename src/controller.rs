//! Container Controller Policy
//!
//! The guest container is started and stopped by an external service. The
//! bridge core never consults it; this module only decides what the UI layer
//! should offer at launch and on exit, and carries out the user's answer.
//!
//! Controller failures never propagate. They are logged and the policy falls
//! back to leaving things as they are.

use thiserror::Error;
use tracing::{error, info};

/// Default container name
pub const DEFAULT_CONTAINER: &str = "default";

/// Controller errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// The controller service could not be reached
    #[error("Container service unavailable: {0}")]
    Unavailable(String),

    /// The service rejected the request
    #[error("Container {container} {operation} failed: {reason}")]
    Rejected {
        /// Container name
        container: String,
        /// Operation that failed
        operation: &'static str,
        /// Reason reported by the service
        reason: String,
    },
}

/// External container/session controller
#[cfg_attr(test, mockall::automock)]
pub trait ContainerController: Send + Sync {
    /// Whether the container is running
    fn is_running(&self, container: &str) -> Result<bool, ControllerError>;

    /// Start the container
    fn start(&self, container: &str) -> Result<(), ControllerError>;

    /// Stop the container
    fn stop(&self, container: &str) -> Result<(), ControllerError>;
}

/// What to show when the display comes up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchAction {
    /// No controller service on this system; tell the user and finish
    Unsupported,
    /// Container is stopped; ask whether to start it
    OfferStart,
    /// Nothing to ask
    Proceed,
}

/// What to do when the user leaves the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// Container is running; ask whether to stop it
    OfferStop,
    /// Container is not running; just close
    Finish,
    /// Controller could not be queried; do nothing
    Stay,
}

/// User's answer to [`ExitAction::OfferStop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    /// Stop the container, then close
    StopAndFinish,
    /// Leave the container running and move to the background
    KeepRunning,
    /// Dismiss the prompt
    Cancel,
}

/// Result of applying a user answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Close the display
    Finish,
    /// Close the display, container keeps running
    Background,
    /// Keep the display open
    Stay,
}

/// Decide what to show at launch
pub fn launch_action(controller: Option<&dyn ContainerController>, container: &str) -> LaunchAction {
    let Some(controller) = controller else {
        error!("Container service not found");
        return LaunchAction::Unsupported;
    };

    match controller.is_running(container) {
        Ok(true) => LaunchAction::Proceed,
        Ok(false) => LaunchAction::OfferStart,
        Err(e) => {
            error!("Failed to query container {}: {}", container, e);
            LaunchAction::Proceed
        }
    }
}

/// Carry out the answer to [`LaunchAction::OfferStart`]
///
/// Returns whether the display should stay open.
pub fn apply_launch_choice(
    controller: &dyn ContainerController,
    container: &str,
    accept: bool,
) -> bool {
    if !accept {
        info!("Container {} start declined", container);
        return false;
    }

    match controller.start(container) {
        Ok(()) => info!("Container {} started", container),
        Err(e) => error!("Failed to start container {}: {}", container, e),
    }
    true
}

/// Decide what to show when the user leaves
pub fn exit_action(controller: &dyn ContainerController, container: &str) -> ExitAction {
    match controller.is_running(container) {
        Ok(true) => ExitAction::OfferStop,
        Ok(false) => ExitAction::Finish,
        Err(e) => {
            error!("Failed to query container {}: {}", container, e);
            ExitAction::Stay
        }
    }
}

/// Carry out the answer to [`ExitAction::OfferStop`]
pub fn apply_exit_choice(
    controller: &dyn ContainerController,
    container: &str,
    choice: ExitChoice,
) -> ExitOutcome {
    match choice {
        ExitChoice::StopAndFinish => {
            if let Err(e) = controller.stop(container) {
                error!("Failed to stop container {}: {}", container, e);
            } else {
                info!("Container {} stopped", container);
            }
            ExitOutcome::Finish
        }
        ExitChoice::KeepRunning => ExitOutcome::Background,
        ExitChoice::Cancel => ExitOutcome::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable() -> ControllerError {
        ControllerError::Unavailable("binder died".to_string())
    }

    #[test]
    fn test_launch_without_service() {
        assert_eq!(launch_action(None, DEFAULT_CONTAINER), LaunchAction::Unsupported);
    }

    #[test]
    fn test_launch_offers_start_when_stopped() {
        let mut mock = MockContainerController::new();
        mock.expect_is_running()
            .times(1)
            .returning(|_| Ok(false));

        assert_eq!(
            launch_action(Some(&mock), DEFAULT_CONTAINER),
            LaunchAction::OfferStart
        );
    }

    #[test]
    fn test_launch_proceeds_when_running_or_unknown() {
        let mut running = MockContainerController::new();
        running.expect_is_running().returning(|_| Ok(true));
        assert_eq!(
            launch_action(Some(&running), DEFAULT_CONTAINER),
            LaunchAction::Proceed
        );

        let mut failing = MockContainerController::new();
        failing.expect_is_running().returning(|_| Err(unavailable()));
        assert_eq!(
            launch_action(Some(&failing), DEFAULT_CONTAINER),
            LaunchAction::Proceed
        );
    }

    #[test]
    fn test_launch_choice() {
        let mut mock = MockContainerController::new();
        mock.expect_start().times(1).returning(|_| Ok(()));
        assert!(apply_launch_choice(&mock, DEFAULT_CONTAINER, true));

        let mut declined = MockContainerController::new();
        declined.expect_start().never();
        assert!(!apply_launch_choice(&declined, DEFAULT_CONTAINER, false));
    }

    #[test]
    fn test_exit_action() {
        let mut running = MockContainerController::new();
        running.expect_is_running().returning(|_| Ok(true));
        assert_eq!(exit_action(&running, DEFAULT_CONTAINER), ExitAction::OfferStop);

        let mut stopped = MockContainerController::new();
        stopped.expect_is_running().returning(|_| Ok(false));
        assert_eq!(exit_action(&stopped, DEFAULT_CONTAINER), ExitAction::Finish);

        let mut failing = MockContainerController::new();
        failing.expect_is_running().returning(|_| Err(unavailable()));
        assert_eq!(exit_action(&failing, DEFAULT_CONTAINER), ExitAction::Stay);
    }

    #[test]
    fn test_exit_choices() {
        let mut mock = MockContainerController::new();
        mock.expect_stop()
            .times(1)
            .returning(|_| Err(unavailable()));

        // A failed stop still closes the display
        assert_eq!(
            apply_exit_choice(&mock, DEFAULT_CONTAINER, ExitChoice::StopAndFinish),
            ExitOutcome::Finish
        );
        assert_eq!(
            apply_exit_choice(&mock, DEFAULT_CONTAINER, ExitChoice::KeepRunning),
            ExitOutcome::Background
        );
        assert_eq!(
            apply_exit_choice(&mock, DEFAULT_CONTAINER, ExitChoice::Cancel),
            ExitOutcome::Stay
        );
    }
}
