//! Inline SVG icons.

use leptos::prelude::*;

/// Paper-plane icon used on the send button.
#[component]
pub fn SendIcon(
    /// Size and colour classes.
    #[prop(default = "h-4 w-4")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            <path d="m22 2-7 20-4-9-9-4Z" />
            <path d="M22 2 11 13" />
        </svg>
    }
}
