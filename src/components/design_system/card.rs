use leptos::prelude::*;

/// White panel with a soft shadow
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("bg-white shadow rounded-lg overflow-hidden {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardBody(
    /// Padding utility class
    #[prop(default = "p-6")]
    padding: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = padding;

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}
