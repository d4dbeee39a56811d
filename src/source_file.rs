pub mod impl_disk;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
