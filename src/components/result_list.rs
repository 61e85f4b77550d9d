//! Result List Component
//!
//! Renders exactly one of four states. Precedence is fixed: loading wins
//! over error, error wins over empty, and only then are cards shown.

use leptos::prelude::*;
use leptos_router::components::A;
use url::form_urlencoded;

use crate::api::{ApiError, SearchResult};
use crate::components::design_system::{Badge, BadgeVariant, Card, CardBody, LoadingSpinner, Notice, NoticeKind};

pub const LOADING_MESSAGE: &str = "Searching...";
pub const ERROR_MESSAGE: &str = "Error loading search results. Please try again.";
pub const EMPTY_MESSAGE: &str = "No results found. Try different search terms.";

/// Link to a slide's detail page. The id is encoded as one path segment.
pub fn slide_href(id: &str) -> String {
    let segment: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    // Form encoding writes spaces as '+'; a literal '+' is already "%2B".
    format!("/slides/{}", segment.replace('+', "%20"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultListState {
    Loading,
    Error,
    Empty,
    Populated,
}

impl ResultListState {
    pub fn select(is_loading: bool, has_error: bool, result_count: usize) -> Self {
        if is_loading {
            ResultListState::Loading
        } else if has_error {
            ResultListState::Error
        } else if result_count == 0 {
            ResultListState::Empty
        } else {
            ResultListState::Populated
        }
    }
}

#[component]
pub fn ResultList(
    #[prop(into)]
    results: Signal<Vec<SearchResult>>,
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Only its presence matters; backend detail is never shown
    #[prop(into)]
    error: Signal<Option<ApiError>>,
) -> impl IntoView {
    move || {
        let state = ResultListState::select(
            is_loading.get(),
            error.with(Option::is_some),
            results.with(Vec::len),
        );

        match state {
            ResultListState::Loading => view! {
                <LoadingSpinner label=LOADING_MESSAGE />
            }.into_any(),
            ResultListState::Error => view! {
                <Notice kind=NoticeKind::Error class="py-12">{ERROR_MESSAGE}</Notice>
            }.into_any(),
            ResultListState::Empty => view! {
                <Notice class="py-12">{EMPTY_MESSAGE}</Notice>
            }.into_any(),
            ResultListState::Populated => view! {
                <div class="space-y-6" data-testid="result-list">
                    {results.get().into_iter().map(|result| view! {
                        <ResultCard result=result />
                    }).collect_view()}
                </div>
            }.into_any(),
        }
    }
}

/// One slide hit
#[component]
pub fn ResultCard(result: SearchResult) -> impl IntoView {
    let title = result.title();
    let image = result.visible_image().map(|url| {
        view! {
            <img
                src=url.to_string()
                alt=title.clone()
                class="mt-4 rounded-lg max-w-full h-auto"
            />
        }
    });
    let tags = result.has_topics().then(|| {
        view! {
            <div class="mt-4 flex flex-wrap gap-2" data-testid="topic-tags">
                {result.topics.iter().cloned().map(|topic| view! {
                    <Badge variant=BadgeVariant::Topic>{topic}</Badge>
                }).collect_view()}
            </div>
        }
    });
    let presentation = result
        .presentation_id
        .clone()
        .map(|id| view! { <span class="text-sm text-gray-500">"Presentation: " {id}</span> });
    let detail_href = slide_href(&result.id);

    view! {
        <Card>
            <CardBody>
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-medium text-gray-900">{title.clone()}</h3>
                    {presentation}
                </div>
                <p class="mt-2 text-gray-600">{result.content.clone().unwrap_or_default()}</p>
                {image}
                {tags}
                <div class="mt-4 text-right">
                    <A href=detail_href attr:class="text-sm text-primary-600 hover:text-primary-700">
                        "Details"
                    </A>
                </div>
            </CardBody>
        </Card>
    }
}
