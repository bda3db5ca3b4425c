pub mod fields;
pub mod shape;
pub mod values;

pub use fields::*;
pub use shape::*;
pub use values::*;
