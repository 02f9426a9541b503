//! Dashboard
//!
//! The account dashboard: its render contract, its controls and the
//! controller that wires controls to navigation and the session.

pub mod controller;
pub mod controls;
pub mod view;

pub use controller::{ControlOutcome, DashboardController, Navigator};
pub use controls::{Control, ControlAction, LogoutControl};
pub use view::{DashboardModel, DashboardState, DashboardView, SecurityOverview, Tone, VerifiedBadge};
