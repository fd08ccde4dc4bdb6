// Component library exports

pub mod app;
pub mod leaderboard;
pub mod status_bar;
pub mod table;

pub use app::App;
pub use leaderboard::{LeaderboardPanel, LeaderboardPanelProps};
pub use status_bar::{StatusBar, StatusBarProps};
pub use table::TableWidget;
