pub mod imports;

mod default_styling;
pub mod theme_ctx;
mod toggle_button;

pub use default_styling::DefaultStyling;
pub use theme_ctx::{ThemeCtx, ThemeCtxSub, ThemeState, WithTheme};
pub use toggle_button::ThemeToggleButton;
