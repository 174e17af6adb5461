mod encode;
pub use encode::*;

mod reader;
pub use reader::*;

mod decode;
pub use decode::*;


/// The longest encoding of a `u32`: five 7-bit groups.
pub const MAX_VLQ_LEN: usize = 5;

const CARRY_BIT: u8 = 0b1000_0000;
const MASK: u8 = 0b0111_1111;
