//! Descriptor AST types.

mod enums;
mod field;
mod message;
mod ty;

pub use enums::Enum;
pub use field::{Field, Label};
pub use message::Message;
pub use ty::{Scalar, Ty};
