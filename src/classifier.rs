pub mod impl_fake;
pub mod impl_vision;
pub mod interface;
pub mod normalize;
