pub mod cities_tests;
pub mod finder_tests;
pub mod property_tests;
