pub mod picker;
pub mod scoreboard;
pub mod scorecard;
pub mod template;
pub mod types;
pub mod utils;

pub use picker::*;
pub use scoreboard::*;
pub use scorecard::*;
pub use template::*;
pub use types::*;
pub use utils::*;
