pub mod engine;
pub mod standings;

pub use engine::*;
pub use standings::*;
