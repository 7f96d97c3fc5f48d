pub mod store;
pub mod surface;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::store::{LocalThemeStore, MemoryStore, ThemeStore};
    pub use super::surface::{SystemPreference, ThemeSurface};
    pub use super::themes::{Theme, Themes};
    pub use super::toggle::{resolve, ThemeToggle};
}
