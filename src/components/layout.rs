//! Application chrome: top navigation bar and the centered content column.

use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, CLOUD_ARROW_UP, MAGNIFYING_GLASS, PRESENTATION};

const NAV_LINK_CLASS: &str =
    "flex items-center gap-1 text-sm font-medium text-gray-700 hover:text-primary-600";

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-2 text-xl font-bold text-primary-600">
                    <Icon icon=PRESENTATION size="24px" />
                    "SlideSearch"
                </A>
                <div class="flex items-center gap-6">
                    <A href="/search" attr:class=NAV_LINK_CLASS>
                        <Icon icon=MAGNIFYING_GLASS size="18px" />
                        "Search"
                    </A>
                    <A href="/upload" attr:class=NAV_LINK_CLASS>
                        <Icon icon=CLOUD_ARROW_UP size="18px" />
                        "Upload"
                    </A>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <NavBar />
            <main class="py-10 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}
