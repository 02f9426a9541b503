//! Button Component

use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "bg-primary-600 hover:bg-primary-700 text-white",
        ButtonVariant::Outline => "border border-gray-300 bg-white hover:bg-gray-100 text-gray-900",
    };
    let size = match size {
        ButtonSize::Default => "h-10 px-4 py-2",
        ButtonSize::Small => "h-9 px-3",
    };

    format!(
        "inline-flex items-center justify-center rounded-md font-medium transition-colors \
         disabled:opacity-50 disabled:cursor-not-allowed {} {} {}",
        variant, size, extra
    )
    .trim_end()
    .to_string()
}

/// Button with the app's variants
#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional)]
    size: ButtonSize,
    /// Extra classes appended to the variant classes
    #[prop(optional, into)]
    class: String,
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Tooltip
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional, into)]
    on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_classes(variant, size, &class)
            disabled=move || disabled.get()
            title=title
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
