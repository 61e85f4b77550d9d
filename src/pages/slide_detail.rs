//! Slide Detail Page
//!
//! Shows the metadata of one slide, addressed by the `:id` route segment.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::api::{use_api_client, SlideMetadata};
use crate::components::design_system::{Card, CardBody, LoadingSpinner, Notice, NoticeKind};
use crate::services::slide_lookup::{DetailState, SlideLookup};

pub const NOT_FOUND_MESSAGE: &str = "Slide not found.";
pub const FAILURE_MESSAGE: &str = "Error loading slide details. Please try again.";
pub const NO_METADATA_MESSAGE: &str = "No metadata available for this slide.";

/// Route params for the slide detail page
#[derive(Params, PartialEq, Clone, Default)]
pub struct SlideParams {
    pub id: Option<String>,
}

#[component]
pub fn SlideDetailPage() -> impl IntoView {
    let client = use_api_client();
    let params = use_params::<SlideParams>();
    let slide_id = Memo::new(move |_| {
        params.get()
            .ok()
            .and_then(|p| p.id)
            .unwrap_or_default()
    });

    let state = RwSignal::new(DetailState::Loading);
    let lookup = StoredValue::new(SlideLookup::new());

    Effect::new(move |_| {
        let id = slide_id.get();
        let Some(ticket) = lookup.try_update_value(|l| l.begin(id)) else {
            return;
        };
        state.set(DetailState::Loading);

        let client = client.clone();
        spawn_local(async move {
            let outcome = client.get_slide_metadata(ticket.slide_id()).await;
            if let Err(e) = &outcome {
                log::warn!("Loading slide '{}' failed: {e}", ticket.slide_id());
            }
            let shown = lookup.try_with_value(|l| l.settle(&ticket, outcome)).flatten();
            if let Some(next) = shown {
                state.set(next);
            }
        });
    });

    let body = move || match state.get() {
        DetailState::Loading => view! { <LoadingSpinner /> }.into_any(),
        DetailState::NotFound => view! {
            <Notice class="py-12">{NOT_FOUND_MESSAGE}</Notice>
        }.into_any(),
        DetailState::Failed => view! {
            <Notice kind=NoticeKind::Error class="py-12">{FAILURE_MESSAGE}</Notice>
        }.into_any(),
        DetailState::Loaded(metadata) => view! { <MetadataList metadata=metadata /> }.into_any(),
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <div class="mb-6 flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">"Slide " {move || slide_id.get()}</h1>
                <A href="/search" attr:class="text-sm text-primary-600 hover:text-primary-700">
                    "Back to search"
                </A>
            </div>
            {body}
        </div>
    }
}

#[component]
fn MetadataList(metadata: SlideMetadata) -> impl IntoView {
    let fields = metadata.display_fields();
    if fields.is_empty() {
        return view! { <Notice class="py-12">{NO_METADATA_MESSAGE}</Notice> }.into_any();
    }

    view! {
        <Card>
            <CardBody>
                <dl class="divide-y divide-gray-100" data-testid="slide-metadata">
                    {fields.into_iter().map(|(label, value)| view! {
                        <div class="py-3 grid grid-cols-3 gap-4">
                            <dt class="text-sm font-medium text-gray-500">{label}</dt>
                            <dd class="col-span-2 text-sm text-gray-900 break-words">{value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </CardBody>
        </Card>
    }
    .into_any()
}
