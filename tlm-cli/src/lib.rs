pub mod config;
pub mod error;
pub mod export;
pub mod select;

pub use config::*;
pub use error::*;
pub use export::*;
pub use select::*;
