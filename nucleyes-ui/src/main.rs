//! Nucleyes Dashboard
//!
//! Account dashboard for Nucleyes built with Leptos (WASM).
//!
//! # Features
//!
//! - Account overview with verification status
//! - Security card (password, two-factor placeholders)
//! - Logout and profile navigation
//! - Guest fallback while authentication is disabled
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. What to render comes from `nucleyes::dashboard`; this crate
//! supplies the collaborators (router navigation, HTTP session, identity
//! fetcher) and the markup.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
