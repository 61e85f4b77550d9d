//! Filter Panel Component
//!
//! Controlled form for the search filters. It keeps no state of its own:
//! every input edit is reported upward as one [`FilterEdit`], which the
//! owning page merges into its `FilterSet`.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::api::{FilterEdit, FilterSet, DATE_FORMAT};
use crate::components::design_system::{Card, CardBody};

/// Topics offered in the multi-select, as `(value, label)`.
pub const TOPIC_OPTIONS: &[(&str, &str)] = &[
    ("technology", "Technology"),
    ("business", "Business"),
    ("science", "Science"),
    ("education", "Education"),
];

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-primary-500 focus:ring-primary-500 sm:text-sm";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";

/// Every selected option of a `<select multiple>`, in document order.
fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[component]
pub fn FilterPanel(
    /// Current filters, owned by the caller
    #[prop(into)]
    filters: Signal<FilterSet>,
    /// Receives one edit per changed field
    on_change: Callback<FilterEdit>,
) -> impl IntoView {
    let on_presentation_id = move |evt: ev::Event| {
        on_change.run(FilterEdit::presentation_id(&event_target_value(&evt)));
    };
    let on_start_date = move |evt: ev::Event| {
        on_change.run(FilterEdit::start_date(&event_target_value(&evt)));
    };
    let on_end_date = move |evt: ev::Event| {
        on_change.run(FilterEdit::end_date(&event_target_value(&evt)));
    };
    let on_topics = move |evt: ev::Event| {
        let select = event_target::<HtmlSelectElement>(&evt);
        on_change.run(FilterEdit::Topics(selected_values(&select)));
    };

    view! {
        <Card>
            <CardBody padding="p-4">
                <h2 class="text-lg font-medium text-gray-900 mb-4">"Filters"</h2>

                <div class="space-y-4">
                    <div>
                        <label class=LABEL_CLASS for="filter-presentation-id">"Presentation ID"</label>
                        <input
                            id="filter-presentation-id"
                            type="text"
                            class=INPUT_CLASS
                            prop:value=move || filters.with(|f| f.presentation_id.clone().unwrap_or_default())
                            on:input=on_presentation_id
                        />
                    </div>

                    <div>
                        <span class=LABEL_CLASS>"Date Range"</span>
                        <div class="mt-1 grid grid-cols-2 gap-2">
                            <input
                                type="date"
                                aria-label="Start date"
                                class=INPUT_CLASS
                                prop:value=move || filters.with(|f| date_value(f.start_date))
                                on:change=on_start_date
                            />
                            <input
                                type="date"
                                aria-label="End date"
                                class=INPUT_CLASS
                                prop:value=move || filters.with(|f| date_value(f.end_date))
                                on:change=on_end_date
                            />
                        </div>
                    </div>

                    <div>
                        <label class=LABEL_CLASS for="filter-topics">"Topics"</label>
                        <select
                            id="filter-topics"
                            multiple=true
                            class=INPUT_CLASS
                            on:change=on_topics
                        >
                            {TOPIC_OPTIONS.iter().map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <option
                                        value=value
                                        prop:selected=move || filters.with(|f| f.topics.iter().any(|t| t == value))
                                    >
                                        {*label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </CardBody>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> FilterSet {
        FilterSet {
            presentation_id: Some("q3".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            topics: vec!["science".to_string()],
        }
    }

    #[test]
    fn test_edit_replaces_only_its_key() {
        let base = sample();

        let edited = base.clone().merged(FilterEdit::presentation_id("q4"));
        assert_eq!(edited.presentation_id.as_deref(), Some("q4"));
        assert_eq!(edited.start_date, base.start_date);
        assert_eq!(edited.end_date, base.end_date);
        assert_eq!(edited.topics, base.topics);

        let edited = base.clone().merged(FilterEdit::end_date("2025-02-01"));
        assert_eq!(edited.end_date, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert_eq!(edited.presentation_id, base.presentation_id);
        assert_eq!(edited.start_date, base.start_date);
        assert_eq!(edited.topics, base.topics);
    }

    #[test]
    fn test_topics_edit_replaces_list() {
        let edited = sample().merged(FilterEdit::Topics(vec![
            "technology".to_string(),
            "business".to_string(),
        ]));
        assert_eq!(edited.topics, vec!["technology".to_string(), "business".to_string()]);

        let cleared = edited.merged(FilterEdit::Topics(Vec::new()));
        assert!(cleared.topics.is_empty());
    }

    #[test]
    fn test_clearing_inputs_removes_keys() {
        let cleared = sample()
            .merged(FilterEdit::presentation_id(""))
            .merged(FilterEdit::start_date(""))
            .merged(FilterEdit::end_date(""))
            .merged(FilterEdit::Topics(Vec::new()));
        assert!(cleared.is_empty());
        assert!(cleared.query_pairs().is_empty());
    }

    #[test]
    fn test_inverted_range_passes_through() {
        let filters = FilterSet::default()
            .merged(FilterEdit::start_date("2024-06-01"))
            .merged(FilterEdit::end_date("2024-01-01"));
        assert!(filters.start_date > filters.end_date);
        assert_eq!(filters.query_pairs().len(), 2);
    }

    #[test]
    fn test_date_value_formatting() {
        assert_eq!(date_value(NaiveDate::from_ymd_opt(2024, 3, 9)), "2024-03-09");
        assert_eq!(date_value(None), "");
    }

    #[test]
    fn test_topic_options_are_unique() {
        let mut values: Vec<_> = TOPIC_OPTIONS.iter().map(|(v, _)| *v).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), TOPIC_OPTIONS.len());
    }
}
