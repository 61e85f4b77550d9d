use leptos::prelude::*;

/// Badge variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Topic,
}

impl BadgeVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-gray-100 text-gray-700",
            BadgeVariant::Topic => "bg-primary-100 text-primary-800",
        }
    }
}

/// A rounded tag, used for slide topics
#[component]
pub fn Badge(
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium";
    let full_class = format!("{base_class} {} {class}", variant.class());

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
