//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-primary-600" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block animate-spin rounded-full h-4 w-4 border-b-2 border-current" />
    }
}
