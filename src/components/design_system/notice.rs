use leptos::prelude::*;
use phosphor_leptos::{Icon, CHECK_CIRCLE, INFO, WARNING_CIRCLE};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "text-gray-600",
            NoticeKind::Success => "text-green-600",
            NoticeKind::Error => "text-red-600",
        }
    }

    /// ARIA role; errors interrupt, everything else is polite.
    pub(crate) fn role(&self) -> &'static str {
        match self {
            NoticeKind::Error => "alert",
            _ => "status",
        }
    }
}

/// One-line status message with an icon
#[component]
pub fn Notice(
    #[prop(default = NoticeKind::Info)]
    kind: NoticeKind,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let icon = match kind {
        NoticeKind::Info => INFO,
        NoticeKind::Success => CHECK_CIRCLE,
        NoticeKind::Error => WARNING_CIRCLE,
    };
    let full_class = format!(
        "flex items-center justify-center gap-2 {} {class}",
        kind.class()
    );

    view! {
        <div class=full_class role=kind.role()>
            <Icon icon=icon size="18px" />
            <span>{children()}</span>
        </div>
    }
}
