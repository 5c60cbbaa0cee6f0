pub mod serializer;
pub use serializer::{serialize, Serializer};
