//! Vector module: the row vector types row views combine with and materialize into.

pub mod compressed;
pub mod dynamic;
pub mod static_vector;
pub mod transposed;

pub use compressed::CompressedVector;
pub use dynamic::DynamicVector;
pub use static_vector::StaticVector;
pub use transposed::Transposed;
