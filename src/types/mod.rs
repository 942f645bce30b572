pub mod coordinate;
pub mod observation;
pub mod product;
pub mod station;
