//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod profile;

pub use dashboard::Dashboard;
pub use profile::Profile;
