pub mod constants;
pub mod error;
pub mod models;

pub use constants::*;
pub use error::{Result, RtmError};
pub use models::*;
