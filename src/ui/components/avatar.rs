//! Avatar component showing sender initials.

use leptos::prelude::*;

/// Round avatar with initials.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Avatar fallback="Bot" class="mr-2" /> }
/// ```
#[component]
pub fn Avatar(
    /// Accessible label.
    #[prop(default = "Avatar")]
    alt: &'static str,
    /// Initials shown in the badge.
    fallback: &'static str,
    /// Spacing classes (e.g. "mr-2").
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let container_classes =
        format!("relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full {class}");

    view! {
        <span class=container_classes role="img" aria-label=alt>
            <span class="flex h-full w-full items-center justify-center rounded-full bg-muted text-textMuted text-xs font-medium">
                {fallback}
            </span>
        </span>
    }
}
