pub mod case_study;
pub mod financials;
pub mod pitch;

pub use case_study::CaseStudy;
pub use financials::Financials;
pub use pitch::Pitch;
