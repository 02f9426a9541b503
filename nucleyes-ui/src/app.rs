//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use nucleyes::routes::Route as AppRoute;

use crate::components::Toast;
use crate::config::UiConfig;
use crate::pages::{Dashboard, Profile};
use crate::state::provide_session_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    if !config.auth_enabled {
        web_sys::console::warn_1(
            &"Authentication disabled: the dashboard shows the guest profile".into(),
        );
    }
    provide_context(config);
    provide_session_state();

    view! {
        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-900">
                <Routes>
                    <Route path=AppRoute::Dashboard.path() view=Dashboard />
                    <Route path=AppRoute::Profile.path() view=Profile />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=AppRoute::Dashboard.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
