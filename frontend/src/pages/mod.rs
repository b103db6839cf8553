pub mod landing;
pub mod pitch_deck;
pub mod pricing;
