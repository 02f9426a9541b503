//! UI Components
//!
//! Visual primitives shared by the pages.

pub mod avatar;
pub mod button;
pub mod card;
pub mod loading;
pub mod logo;
pub mod toast;

pub use avatar::Avatar;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardFooter, CardHeader};
pub use loading::{InlineLoading, PageLoading};
pub use logo::Logo;
pub use toast::Toast;
