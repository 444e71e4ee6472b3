pub mod field;
pub mod template;
pub mod value;

pub use field::*;
pub use template::*;
pub use value::*;
