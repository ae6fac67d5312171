pub mod assignment;
pub mod city;
pub mod genre;

pub use city::{City, CityFilter, CoverageArea};
pub use genre::Genre;
