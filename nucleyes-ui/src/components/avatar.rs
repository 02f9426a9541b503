//! Avatar Component
//!
//! Profile picture, or initials when no picture is available.

use leptos::*;

/// Up to two uppercase initials of `label`
fn initials(label: &str) -> String {
    let letters: String = label
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

#[component]
pub fn Avatar(
    /// Name the initials are taken from
    #[prop(into)]
    label: String,
    #[prop(into)]
    alt: String,
    #[prop(optional, into)]
    src: Option<String>,
) -> impl IntoView {
    let src = src.filter(|url| !url.is_empty());

    view! {
        <div class="h-12 w-12 rounded-full overflow-hidden flex-shrink-0">
            {match src {
                Some(url) => view! {
                    <img src=url alt=alt class="h-full w-full object-cover" />
                }.into_view(),
                None => view! {
                    <div
                        class="h-full w-full bg-primary-600 text-white flex items-center justify-center font-semibold"
                        title=alt
                    >
                        {initials(&label)}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
