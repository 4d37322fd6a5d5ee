// Utils compartidos

pub mod constants;
pub mod storage;
pub mod utility;

pub use constants::*;
pub use storage::*;
