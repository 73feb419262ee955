pub mod decode;
pub mod http_handlers;

pub use decode::*;
pub use http_handlers::*;
