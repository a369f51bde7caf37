pub mod chart_canvas;
pub mod d400_portfolio;
pub mod d401_holdings;

pub use d400_portfolio::ui::PortfolioDashboard;
pub use d401_holdings::ui::HoldingsDashboard;
