use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::{provide_api_client, ApiClient};
use crate::components::layout::AppShell;
use crate::config::AppConfig;
use crate::pages::{HomePage, SearchPage, SlideDetailPage, UploadPage};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    provide_api_client(ApiClient::new(&config.api));

    view! {
        <Router>
            <AppShell>
                <Routes fallback=|| view! { <div class="text-center py-16 text-gray-600">"404 - Page Not Found"</div> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/upload") view=UploadPage />
                    <Route path=path!("/slides/:id") view=SlideDetailPage />
                </Routes>
            </AppShell>
        </Router>
    }
}
