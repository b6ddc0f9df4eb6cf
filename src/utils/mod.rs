// Shared helpers

pub mod constants;
pub mod format;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use format::*;
pub use storage::*;
pub use validation::*;
