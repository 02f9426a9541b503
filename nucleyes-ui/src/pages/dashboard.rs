//! Dashboard Page
//!
//! Account overview: greeting, account card and security card. What to show
//! is decided by `nucleyes::dashboard::DashboardView`; this module only maps
//! the resulting state to markup and routes clicks to the controller.

use leptos::*;

use nucleyes::dashboard::{
    Control, ControlOutcome, DashboardController, DashboardModel, DashboardState, DashboardView,
};
use nucleyes::error::DashboardError;

use crate::components::{
    Avatar, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader,
    InlineLoading, Logo, PageLoading,
};
use crate::config::UiConfig;
use crate::state::{
    identity_status, use_identity_query, HttpSession, RouterNavigator, SessionState,
};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_context::<UiConfig>().expect("UiConfig not found");
    let session = use_context::<SessionState>().expect("SessionState not found");

    let dashboard = DashboardView::new(config.guest_policy());
    let identity = use_identity_query(&config, session);

    let controller = store_value(DashboardController::new(
        RouterNavigator::new(),
        HttpSession::new(session, config.clone()),
    ));

    let auth_enabled = config.auth_enabled;
    let on_control = Callback::new(move |control: Control| {
        let controller = controller.get_value();
        spawn_local(async move {
            match controller.activate(control).await {
                Ok(ControlOutcome::LoggedOut) => {
                    session.show_success(logout_message(auth_enabled))
                }
                Ok(ControlOutcome::Unavailable(feature)) => {
                    session.show_error(&DashboardError::NotImplemented(feature).to_string())
                }
                Ok(ControlOutcome::Navigated(_)) | Ok(ControlOutcome::Ignored) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("{:?} failed: {}", control, e).into());
                    session.show_error(&e.to_string());
                }
            }
        });
    });

    let on_retry = Callback::new(move |_: ()| identity.refetch());

    let state = move || {
        dashboard.render(
            &identity_status(identity),
            session.user.get().as_ref(),
            session.logout_pending.get(),
        )
    };

    view! {
        {move || match state() {
            DashboardState::Loading => view! { <PageLoading /> }.into_view(),
            DashboardState::Error(error) => {
                view! { <DashboardFailure error=error on_retry=on_retry /> }.into_view()
            }
            DashboardState::Ready(model) => {
                view! { <DashboardPage model=model on_control=on_control /> }.into_view()
            }
        }}
    }
}

/// Toast after a logout. Without authentication the guest profile stays on screen.
fn logout_message(auth_enabled: bool) -> &'static str {
    if auth_enabled {
        "Logged out"
    } else {
        "Session cleared; still viewing as guest"
    }
}

#[component]
fn DashboardPage(model: DashboardModel, on_control: Callback<Control>) -> impl IntoView {
    let logout = model.logout;
    let greeting = model.greeting();
    let is_guest = model.is_guest;

    view! {
        <div class="min-h-screen bg-gray-50 p-4 sm:p-6 lg:p-8">
            <div class="max-w-4xl mx-auto">
                // Header
                <div class="flex flex-col sm:flex-row items-start sm:items-center justify-between pb-6 border-b border-gray-200 mb-6">
                    <div>
                        <div class="mb-3">
                            <Logo size=32 class="text-gray-700" />
                        </div>
                        <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>
                        <p class="text-gray-600 mt-1">{greeting}</p>
                        {is_guest.then(|| view! {
                            <p class="text-xs text-amber-600 mt-1">
                                "Viewing as guest while authentication is disabled"
                            </p>
                        })}
                    </div>
                    <div class="mt-4 sm:mt-0 flex items-center space-x-4">
                        <Button
                            variant=ButtonVariant::Outline
                            class="text-sm"
                            on_click=move |_: ev::MouseEvent| on_control.call(Control::Profile)
                        >
                            {Control::Profile.label()}
                        </Button>
                        <Button
                            class="text-sm space-x-2"
                            disabled=logout.disabled()
                            on_click=move |_: ev::MouseEvent| on_control.call(Control::Logout)
                        >
                            {logout.pending.then(|| view! { <InlineLoading /> })}
                            <span>{logout.label()}</span>
                        </Button>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <AccountCard model=model.clone() on_control=on_control />
                    <SecurityCard model=model on_control=on_control />
                </div>
            </div>
        </div>
    }
}

#[component]
fn AccountCard(model: DashboardModel, on_control: Callback<Control>) -> impl IntoView {
    let badge = model.email_verified;
    let google = if model.security.google_linked {
        "Linked"
    } else {
        "Not linked"
    };
    let user = model.user;

    view! {
        <Card>
            <CardHeader title="Account Info" description="Your account details" />
            <CardContent>
                <div class="flex items-center space-x-4 mb-4">
                    <Avatar label=model.display_label.clone() alt=user.username.clone() />
                    <div>
                        <p class="text-lg font-medium">{model.display_label}</p>
                        <p class="text-sm text-gray-500">{user.email}</p>
                    </div>
                </div>

                <div class="space-y-2">
                    <div class="flex justify-between text-sm">
                        <span class="text-gray-500">"Username:"</span>
                        <span class="font-medium">{user.username}</span>
                    </div>
                    <div class="flex justify-between text-sm">
                        <span class="text-gray-500">"Email Verified:"</span>
                        <span class=format!("font-medium {}", badge.tone().text_class())>
                            {badge.label()}
                        </span>
                    </div>
                    <div class="flex justify-between text-sm">
                        <span class="text-gray-500">"Google Account:"</span>
                        <span class="font-medium">{google}</span>
                    </div>
                </div>
            </CardContent>
            <CardFooter>
                <Button
                    variant=ButtonVariant::Outline
                    class="w-full text-sm"
                    on_click=move |_: ev::MouseEvent| on_control.call(Control::EditProfile)
                >
                    {Control::EditProfile.label()}
                </Button>
            </CardFooter>
        </Card>
    }
}

/// Security card. Its controls are placeholders and render disabled.
#[component]
fn SecurityCard(model: DashboardModel, on_control: Callback<Control>) -> impl IntoView {
    let security = model.security.clone();

    let placeholder = move |control: Control| {
        view! {
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Small
                class="text-sm"
                disabled=!model.is_enabled(control)
                title="Not available yet"
                on_click=move |_: ev::MouseEvent| on_control.call(control)
            >
                {control.label()}
            </Button>
        }
    };

    view! {
        <Card>
            <CardHeader title="Security" description="Manage your account security" />
            <CardContent>
                <div class="space-y-6">
                    <div>
                        <h3 class="text-sm font-medium mb-2">"Password"</h3>
                        <p class="text-sm text-gray-500 mb-3">{security.password_summary()}</p>
                        {placeholder(Control::ChangePassword)}
                    </div>

                    <div>
                        <h3 class="text-sm font-medium mb-2">"Two-Factor Authentication"</h3>
                        <p class="text-sm text-gray-500 mb-3">{security.two_factor_summary()}</p>
                        {placeholder(Control::EnableTwoFactor)}
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}

/// Shown when the identity query failed or nobody is signed in
#[component]
fn DashboardFailure(error: DashboardError, on_retry: Callback<()>) -> impl IntoView {
    let (title, message) = match &error {
        DashboardError::SignedOut => ("Signed out", "Sign in to see your dashboard.".to_string()),
        other => ("Something went wrong", other.to_string()),
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 p-4">
            <div class="max-w-md w-full">
                <Card>
                    <CardHeader title=title description=message />
                    <CardFooter>
                        <Button class="w-full text-sm" on_click=move |_: ev::MouseEvent| on_retry.call(())>
                            "Try again"
                        </Button>
                    </CardFooter>
                </Card>
            </div>
        </div>
    }
}
