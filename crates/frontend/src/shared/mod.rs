pub mod components;
pub mod icons;
pub mod modal_frame;
