pub mod assemble;
pub mod encode;
pub mod error;
pub mod opcode;
pub mod parse;

pub use assemble::{assemble, Assembler};
pub use error::AsmError;
pub use opcode::{lookup, OpDesc, OperandKind, TABLE};
