pub mod index;
pub mod score;
