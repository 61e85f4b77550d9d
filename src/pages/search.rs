//! Search Page
//!
//! Owns the query text and the filters. Every change of the derived
//! [`SearchKey`] goes through the [`SearchSession`], which decides whether to
//! fetch, reuse a cached answer, or do nothing; responses that arrive after a
//! newer key was issued never reach the result list.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, MAGNIFYING_GLASS};

use crate::api::{use_api_client, ApiClient, FilterEdit, FilterSet};
use crate::components::{FilterPanel, ResultList};
use crate::services::search_session::{SearchKey, SearchSession, SearchStep, SearchTicket, SearchView};

/// Run one issued request and publish its outcome if it is still current.
async fn run_search(
    client: ApiClient,
    session: StoredValue<SearchSession>,
    view_state: RwSignal<SearchView>,
    ticket: SearchTicket,
) {
    let SearchKey { query, filters } = ticket.key().clone();
    let outcome = client.search_slides(&query, &filters).await;
    match &outcome {
        Ok(results) => log::debug!("Search '{query}' returned {} result(s)", results.len()),
        Err(e) => log::warn!("Search '{query}' failed: {e}"),
    }

    let shown = session
        .try_update_value(|s| s.settle(ticket, outcome))
        .flatten();
    if let Some(outcome) = shown {
        view_state.set(SearchView::from_outcome(outcome));
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let client = use_api_client();

    let query = RwSignal::new(String::new());
    let filters = RwSignal::new(FilterSet::default());
    let key = Memo::new(move |_| SearchKey::new(query.get(), filters.get()));

    let session = StoredValue::new(SearchSession::new());
    let view_state = RwSignal::new(SearchView::default());

    Effect::new(move |_| {
        let key = key.get();
        let Some(step) = session.try_update_value(|s| s.begin(key)) else {
            return;
        };

        match step {
            SearchStep::Idle => view_state.set(SearchView::default()),
            SearchStep::Unchanged => {}
            SearchStep::Cached(results) => view_state.set(SearchView::ready(results)),
            SearchStep::Fetch(ticket) => {
                view_state.set(SearchView::loading());
                spawn_local(run_search(client.clone(), session, view_state, ticket));
            }
        }
    });

    let on_filter_change = Callback::new(move |edit: FilterEdit| {
        filters.update(|f| f.apply(edit));
    });

    let on_input = move |evt: ev::Event| {
        query.set(event_target_value(&evt));
    };

    let results = Memo::new(move |_| view_state.with(|v| v.results.clone()));
    let is_loading = Memo::new(move |_| view_state.with(|v| v.is_loading));
    let error = Memo::new(move |_| view_state.with(|v| v.error.clone()));

    view! {
        <div class="max-w-7xl mx-auto">
            <div class="mb-8">
                <div class="mt-1 relative rounded-md shadow-sm">
                    <input
                        type="search"
                        aria-label="Search slides"
                        class="focus:ring-primary-500 focus:border-primary-500 block w-full pl-4 pr-12 py-3 sm:text-sm border-gray-300 rounded-md"
                        placeholder="Search slides..."
                        prop:value=move || query.get()
                        on:input=on_input
                    />
                    <div class="absolute inset-y-0 right-0 pr-4 flex items-center pointer-events-none text-gray-400">
                        <Icon icon=MAGNIFYING_GLASS size="20px" />
                    </div>
                </div>
            </div>

            <div class="flex gap-8">
                <aside class="w-64 flex-shrink-0">
                    <FilterPanel filters=filters on_change=on_filter_change />
                </aside>
                <section class="flex-1">
                    <ResultList results=results is_loading=is_loading error=error />
                </section>
            </div>
        </div>
    }
}
