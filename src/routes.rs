//! Route Table
//!
//! Client-side routes the dashboard can navigate to.

use std::fmt;

/// A page of the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Profile => "/profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
