//! Card frame: header, content and footer sections.

use leptos::prelude::*;

/// Card container.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="w-full max-w-md mx-auto">
///         <CardHeader class="p-0">
///             <img src="/cat.png" />
///         </CardHeader>
///         <CardContent class="p-4">"Messages"</CardContent>
///         <CardFooter class="p-4 pt-0">"Input"</CardFooter>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-lg border border-panelBorder bg-panel text-textPrimary shadow-sm {class}"
    );

    view! { <div class=classes>{children()}</div> }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes; `p-0` lets media bleed to the edges.
    #[prop(default = "p-6")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("flex flex-col space-y-1.5 {class}");

    view! { <div class=classes>{children()}</div> }
}

#[component]
pub fn CardContent(
    #[prop(default = "p-6 pt-0")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardFooter(
    #[prop(default = "p-6 pt-0")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("flex items-center {class}");

    view! { <div class=classes>{children()}</div> }
}
