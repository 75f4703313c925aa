//! Distance model: the immutable symmetric matrix and tour lengths.

mod matrix;

pub use matrix::DistanceMatrix;
