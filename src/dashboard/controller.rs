//! Dashboard Controller
//!
//! Dispatches control activations to the navigation and session collaborators.

use std::rc::Rc;

use crate::dashboard::controls::{Control, ControlAction};
use crate::error::DashboardResult;
use crate::identity::SessionProvider;
use crate::routes::Route;

/// Navigation collaborator
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn navigate_to(&self, path: &str) {
        (**self).navigate_to(path)
    }
}

/// What an activation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    Navigated(Route),
    LoggedOut,
    /// The control was disabled when activated
    Ignored,
    /// Placeholder control; carries the feature name
    Unavailable(&'static str),
}

/// Wires dashboard controls to their collaborators
#[derive(Clone)]
pub struct DashboardController<N, S> {
    navigator: N,
    session: S,
}

impl<N: Navigator, S: SessionProvider> DashboardController<N, S> {
    pub fn new(navigator: N, session: S) -> Self {
        Self { navigator, session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Handle a click on `control`
    pub async fn activate(&self, control: Control) -> DashboardResult<ControlOutcome> {
        match control.action() {
            ControlAction::Navigate(route) => {
                tracing::debug!(?control, path = route.path(), "Navigating");
                self.navigator.navigate_to(route.path());
                Ok(ControlOutcome::Navigated(route))
            }
            ControlAction::Logout => {
                if self.session.is_logout_pending() {
                    tracing::debug!("Logout already in flight, ignoring");
                    return Ok(ControlOutcome::Ignored);
                }

                tracing::info!("Logging out");
                self.session.logout().await.map_err(|e| {
                    tracing::error!(error = %e, "Logout failed");
                    e
                })?;
                Ok(ControlOutcome::LoggedOut)
            }
            ControlAction::NotImplemented(feature) => {
                tracing::debug!(?control, feature, "Control has no action wired");
                Ok(ControlOutcome::Unavailable(feature))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::identity::{LocalSession, UserProfile};
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    struct BrokenSession;

    #[async_trait(?Send)]
    impl SessionProvider for BrokenSession {
        fn current_user(&self) -> Option<UserProfile> {
            None
        }

        fn is_logout_pending(&self) -> bool {
            false
        }

        async fn logout(&self) -> DashboardResult<()> {
            Err(DashboardError::Logout("session store offline".into()))
        }
    }

    fn controller() -> DashboardController<Rc<RecordingNavigator>, Rc<LocalSession>> {
        DashboardController::new(
            Rc::new(RecordingNavigator::default()),
            Rc::new(LocalSession::signed_in(UserProfile::guest())),
        )
    }

    #[tokio::test]
    async fn test_navigation_calls_navigator_once_per_click() {
        let controller = controller();

        let outcome = controller.activate(Control::Profile).await.unwrap();
        assert_eq!(outcome, ControlOutcome::Navigated(Route::Profile));
        assert_eq!(*controller.navigator.visited.borrow(), vec!["/profile"]);

        controller.activate(Control::EditProfile).await.unwrap();
        assert_eq!(
            *controller.navigator.visited.borrow(),
            vec!["/profile", "/profile"]
        );

        // No side effect on the session
        assert!(controller.session().current_user().is_some());
        assert_eq!(controller.session().logout_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_ends_session() {
        let controller = controller();

        let outcome = controller.activate(Control::Logout).await.unwrap();
        assert_eq!(outcome, ControlOutcome::LoggedOut);
        assert_eq!(controller.session().current_user(), None);
        assert!(controller.navigator.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_logout_ignored_while_pending() {
        let controller = controller();
        controller.session().set_logout_pending(true);

        let outcome = controller.activate(Control::Logout).await.unwrap();
        assert_eq!(outcome, ControlOutcome::Ignored);
        assert_eq!(controller.session().logout_count(), 0);
        assert!(controller.session().current_user().is_some());
    }

    #[tokio::test]
    async fn test_logout_error_propagates() {
        let controller = DashboardController::new(RecordingNavigator::default(), BrokenSession);
        let err = controller.activate(Control::Logout).await.unwrap_err();
        assert_eq!(err, DashboardError::Logout("session store offline".into()));
    }

    #[tokio::test]
    async fn test_placeholders_touch_nothing() {
        let controller = controller();

        assert_eq!(
            controller.activate(Control::ChangePassword).await.unwrap(),
            ControlOutcome::Unavailable("Password change")
        );
        assert_eq!(
            controller.activate(Control::EnableTwoFactor).await.unwrap(),
            ControlOutcome::Unavailable("Two-factor authentication")
        );
        assert!(controller.navigator.visited.borrow().is_empty());
        assert_eq!(controller.session().logout_count(), 0);
    }
}
