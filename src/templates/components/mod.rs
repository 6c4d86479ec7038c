pub mod card;

pub use card::{property_card, recent_rail};
