pub mod app;
pub mod components;
pub mod conf;
pub mod dom;
pub mod error;
pub mod telemetry;
pub mod theme;

pub use conf::ToggleConf;
pub use error::{StoreError, ToggleError};
pub use theme::prelude::*;
