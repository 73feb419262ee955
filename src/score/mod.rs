pub mod format;
pub mod leaderboard;
pub mod pairing;
pub mod round;
pub mod team;

pub use format::*;
pub use leaderboard::*;
pub use pairing::*;
pub use round::*;
pub use team::*;
