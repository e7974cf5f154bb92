//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable container with a thin scrollbar.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ScrollArea class="h-[400px] pr-4">
///         <MessageList messages=messages />
///     </ScrollArea>
/// }
/// ```
#[component]
pub fn ScrollArea(
    /// Height and padding classes.
    #[prop(default = "")]
    class: &'static str,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative overflow-y-auto scrollbar-thin scrollbar-thumb-panelBorder \
         scrollbar-track-transparent {class}"
    );

    view! {
        <div class=classes role="log" aria-live="polite">
            {children()}
        </div>
    }
}
