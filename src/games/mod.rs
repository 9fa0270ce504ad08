//! Game implementations.

pub mod british_square;
