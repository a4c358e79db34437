pub mod codec;
pub mod hash;
pub mod verify;

pub use hash::*;
pub use verify::verify;
