//! Platform-independent state machines behind the interactive widgets.

pub mod counter;
pub mod number;
pub mod transport;
pub mod visibility;
