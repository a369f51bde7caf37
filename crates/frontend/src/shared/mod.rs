pub mod alerts;
pub mod csrf;
pub mod entity_modal;
pub mod icons;
pub mod list_region;
pub mod modal_frame;
pub mod modal_host;
