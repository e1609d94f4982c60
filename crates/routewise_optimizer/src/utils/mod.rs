pub mod approx;
pub mod normalize;
pub mod round;
