use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, CLOUD_ARROW_UP, MAGNIFYING_GLASS};

pub const WELCOME_HEADING: &str = "Welcome to SlideSearch";
pub const TAGLINE: &str = "Search through your presentation slides with ease";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-gray-900 mb-4">{WELCOME_HEADING}</h1>
            <p class="text-xl text-gray-600 mb-8">{TAGLINE}</p>
            <div class="flex justify-center gap-4">
                <A
                    href="/search"
                    attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-md bg-primary-600 text-white font-medium hover:bg-primary-700"
                >
                    <Icon icon=MAGNIFYING_GLASS size="20px" />
                    "Start Searching"
                </A>
                <A
                    href="/upload"
                    attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-md bg-white text-primary-600 font-medium border border-primary-600 hover:bg-primary-50"
                >
                    <Icon icon=CLOUD_ARROW_UP size="20px" />
                    "Upload Slides"
                </A>
            </div>
        </div>
    }
}
