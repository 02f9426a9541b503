//! State Management
//!
//! Session signals, the identity query resource and router navigation.

pub mod identity;
pub mod navigation;
pub mod session;

pub use identity::{identity_status, use_identity_query};
pub use navigation::RouterNavigator;
pub use session::{provide_session_state, HttpSession, SessionState};
