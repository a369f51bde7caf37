pub mod dashboard;

pub use dashboard::HoldingsDashboard;
