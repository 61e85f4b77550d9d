use leptos::prelude::*;

/// Centered spinner with an optional caption
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "lg")]
    size: &'static str,
    #[prop(into, optional)]
    label: Option<String>,
) -> impl IntoView {
    let size_class = match size {
        "sm" => "h-4 w-4",
        "md" => "h-8 w-8",
        _ => "h-12 w-12",
    };

    view! {
        <div class="text-center py-12" role="status">
            <div class=format!("{size_class} animate-spin rounded-full border-b-2 border-primary-500 mx-auto")></div>
            {label.map(|text| view! { <p class="mt-4 text-gray-600">{text}</p> })}
        </div>
    }
}
