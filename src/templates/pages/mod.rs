pub mod cities;
pub mod finder;
pub mod home;
pub mod property;

pub use cities::cities_page;
pub use finder::finder_page;
pub use home::home_page;
pub use property::property_page;
