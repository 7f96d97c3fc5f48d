pub use crate::components::{ThemeCtx, ThemeCtxSub};
pub use crate::theme::themes::{Theme, Themes};

pub use std::rc::Rc;

pub use gloo_console as console;
pub use stylist::css;
pub use stylist::yew::Global;
pub use yew::prelude::*;
