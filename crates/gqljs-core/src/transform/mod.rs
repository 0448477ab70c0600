pub mod assembler;
pub mod options;
pub mod scalar;
pub mod type_body;
pub mod type_ref;

pub use assembler::convert;
pub use options::{ConvertOptions, IdTypeMapping};
