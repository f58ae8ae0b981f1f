pub mod animated_counter;
pub mod chart;
pub mod cookie_popup;
pub mod fade_in;
pub mod header;
pub mod podcast_player;
pub mod section_title;

pub use animated_counter::AnimatedCounter;
pub use chart::{ChartCanvas, ChartKind};
pub use cookie_popup::CookiePopup;
pub use fade_in::FadeInSection;
pub use header::Header;
pub use podcast_player::PodcastPlayer;
pub use section_title::SectionTitle;
