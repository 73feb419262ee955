pub mod course;
pub mod event;
pub mod roster;
pub mod score;
pub mod utils;

pub use course::*;
pub use event::*;
pub use roster::*;
pub use score::*;
pub use utils::*;
