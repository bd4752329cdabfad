//! SubTrack Dashboard
//!
//! Subscription dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary stats and cycle/cost charts from server-embedded data
//! - Per-subscription cards with a confirm-then-cancel flow
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that
//! compiles to WebAssembly. The server embeds the dashboard data as
//! JSON in the page; the only network call the app makes is the
//! DELETE that cancels a subscription.

use leptos::*;

mod api;
mod app;
mod charts;
mod components;
mod cycles;
mod pages;
mod payload;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // The payload is read exactly once; everything renders from this
    let payload = payload::read_embedded();

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App payload=payload /> });
}
