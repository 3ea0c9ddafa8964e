pub mod entry;
pub mod game;
pub mod golf;

pub use entry::*;
pub use game::*;
pub use golf::*;
