//! Nucleyes logo with wordmark

use leptos::*;

#[component]
pub fn Logo(
    /// Icon size in pixels
    #[prop(default = 32)]
    size: u32,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-center space-x-2 {}", class)>
            <svg
                width=size
                height=size
                viewBox="0 0 32 32"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
            >
                <circle cx="16" cy="16" r="14" stroke="currentColor" stroke-width="2" />
                <ellipse cx="16" cy="16" rx="14" ry="6" stroke="currentColor" stroke-width="2" />
                <circle cx="16" cy="16" r="4" fill="currentColor" />
            </svg>
            <span class="text-lg font-semibold tracking-tight">"Nucleyes"</span>
        </div>
    }
}
