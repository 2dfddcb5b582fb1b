pub mod client;
pub mod renderer;
pub mod state;
pub mod tabs;
pub mod terms;

pub use client::ReportClient;
pub use state::{SectionView, ViewerPhase, ViewerState};
pub use tabs::Tab;
