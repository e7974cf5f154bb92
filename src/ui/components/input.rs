//! Single-line text input.

use leptos::prelude::*;

/// Text input component.
///
/// `value` is rendered as the initial content, which is how the server
/// hands the current draft back to the browser.
#[component]
pub fn Input(
    /// Form field name.
    name: &'static str,
    /// Current value.
    #[prop(into, optional)]
    value: String,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = false)]
    autofocus: bool,
) -> impl IntoView {
    let classes = "flex h-10 w-full rounded-md border border-panelBorder bg-background \
         px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
         focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
         focus-visible:ring-offset-2";

    view! {
        <input
            type="text"
            class=classes
            name=name
            value=value
            placeholder=placeholder
            autocomplete="off"
            autofocus=autofocus
        />
    }
}
