pub mod args;
pub mod controller {
    pub mod client;
    pub mod refresh;
    pub mod score;
    pub mod store;
}
pub mod error;
pub mod model;
pub mod score;
pub mod view;

pub const HTMX_PATH: &str = "https://unpkg.com/htmx.org@2.0.4";

pub use error::AppError;
