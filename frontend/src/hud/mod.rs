pub mod controller;
pub mod overlay;

pub use overlay::Hud;
