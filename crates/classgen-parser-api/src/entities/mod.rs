pub mod class;
pub mod field;

pub use class::{AccessLevel, ClassDescriptor, SuperClass};
pub use field::Field;
