//! Identity
//!
//! User profiles, the guest policy, the identity query and the session
//! capability the dashboard consumes.

pub mod profile;
pub mod query;
pub mod session;

pub use profile::{GuestPolicy, UserProfile};
pub use query::{GuestFetcher, IdentityFetcher, IdentityQuery, QueryStatus, IDENTITY_QUERY_KEY};
pub use session::{LocalSession, SessionProvider};
