pub mod claim_record;
pub mod distribution;

pub use claim_record::*;
pub use distribution::*;
