//! Card Components
//!
//! Bordered panel with header, content and footer slots.

use leptos::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border border-gray-200 shadow-sm flex flex-col">
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="p-6 pb-4 space-y-1.5">
            <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
            {description.map(|text| view! {
                <p class="text-sm text-gray-500">{text}</p>
            })}
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="px-6 pb-6 flex-1">{children()}</div> }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="px-6 pb-6 flex items-center">{children()}</div> }
}
