//! ShadCN-style building blocks, rendered via Leptos SSR.
//!
//! - [`Card`], [`CardHeader`], [`CardContent`], [`CardFooter`]: panel frame
//! - [`Avatar`]: sender badge with fallback initials
//! - [`ScrollArea`]: scrollable message container
//! - [`Input`]: single-line text field
//! - [`Button`]: submit control
//! - [`SendIcon`]: paper-plane glyph

mod avatar;
mod button;
mod card;
mod icons;
mod input;
mod scroll_area;

pub use avatar::Avatar;
pub use button::{Button, ButtonSize};
pub use card::{Card, CardContent, CardFooter, CardHeader};
pub use icons::SendIcon;
pub use input::Input;
pub use scroll_area::ScrollArea;
