//! Button component with sizes.

use leptos::prelude::*;

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    /// Square, icon-only button.
    Icon,
}

impl ButtonSize {
    /// CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Icon => "h-10 w-10 shrink-0",
        }
    }
}

/// ShadCN-style button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button button_type="submit" size=ButtonSize::Icon>
///         <SendIcon />
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(default = false)]
    disabled: bool,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center rounded-md font-medium transition-colors \
         focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
         disabled:pointer-events-none disabled:opacity-50 \
         bg-primary text-primary-foreground hover:bg-primaryMuted {}",
        size.classes(),
    );

    view! {
        <button type=button_type class=classes disabled=disabled aria-disabled=disabled.to_string()>
            {children()}
        </button>
    }
}
