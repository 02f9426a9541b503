//! Profile Page
//!
//! Read-only view of the account record. Editing is not wired yet.

use leptos::*;
use leptos_router::*;

use nucleyes::identity::UserProfile;
use nucleyes::routes::Route;

use crate::components::{Avatar, Card, CardContent, CardHeader, PageLoading};
use crate::config::UiConfig;
use crate::state::{identity_status, use_identity_query, SessionState};

#[component]
pub fn Profile() -> impl IntoView {
    let config = use_context::<UiConfig>().expect("UiConfig not found");
    let session = use_context::<SessionState>().expect("SessionState not found");

    let policy = config.guest_policy();
    let identity = use_identity_query(&config, session);

    let user = move || policy.resolve(session.user.get().as_ref()).cloned();

    view! {
        <div class="min-h-screen bg-gray-50 p-4 sm:p-6 lg:p-8">
            <div class="max-w-2xl mx-auto space-y-6">
                <A href=Route::Dashboard.path() class="text-sm text-primary-600 hover:underline">
                    "← Back to Dashboard"
                </A>

                {move || {
                    if identity_status(identity).is_loading() {
                        return view! { <PageLoading /> }.into_view();
                    }
                    match user() {
                        Some(user) => view! { <ProfileDetails user=user /> }.into_view(),
                        None => view! {
                            <p class="text-gray-600">"You are not signed in."</p>
                        }.into_view(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ProfileDetails(user: UserProfile) -> impl IntoView {
    let label = user.display_label().to_string();
    let rows = vec![
        ("Name", user.name.clone().unwrap_or_else(|| "—".to_string())),
        ("Username", user.username.clone()),
        ("Email", user.email.clone()),
        (
            "Email Verified",
            if user.email_verified { "Yes" } else { "No" }.to_string(),
        ),
        (
            "Google Account",
            user.google_id.clone().unwrap_or_else(|| "Not linked".to_string()),
        ),
        ("User ID", user.id.to_string()),
    ];

    view! {
        <Card>
            <CardHeader title="Profile" description="Your account record" />
            <CardContent>
                <div class="flex items-center space-x-4 mb-6">
                    <Avatar label=label.clone() alt=user.username.clone() />
                    <p class="text-lg font-medium">{label}</p>
                </div>
                <dl class="space-y-2">
                    {rows.into_iter().map(|(term, value)| view! {
                        <div class="flex justify-between text-sm">
                            <dt class="text-gray-500">{term}</dt>
                            <dd class="font-medium">{value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </CardContent>
        </Card>
    }
}
