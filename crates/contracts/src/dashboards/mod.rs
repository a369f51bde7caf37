pub mod d400_portfolio;
pub mod d401_holdings;
