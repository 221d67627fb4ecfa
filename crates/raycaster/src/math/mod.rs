pub mod float;
pub mod point;
pub mod vec;
