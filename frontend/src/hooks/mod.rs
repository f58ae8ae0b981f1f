pub mod animation_frame;
pub mod use_on_screen;

pub use animation_frame::{request_animation_frame, AnimationFrame};
pub use use_on_screen::use_on_screen;

use std::rc::Rc;

use yew::prelude::*;

use crate::config::DeckConfig;
use crate::engine::number::NumberFormat;

/// Visibility threshold from the deck config in context.
#[hook]
pub fn use_visibility_threshold() -> f64 {
    let config = use_context::<Rc<DeckConfig>>();
    DeckConfig::visibility_threshold_or_default(config.as_deref())
}

/// Number formatting for the browser's preferred language, read once per
/// component.
#[hook]
pub fn use_number_format() -> NumberFormat {
    (*use_memo(|_| browser_number_format(), ())).clone()
}

pub fn browser_number_format() -> NumberFormat {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .map(|tag| NumberFormat::for_locale(&tag))
        .unwrap_or_default()
}
