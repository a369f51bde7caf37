pub mod entity_config;
pub mod trade_math;

pub use entity_config::{EntityConfig, EntityKind};
pub use trade_math::TradeSide;
