pub mod checker;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod output;

pub use error::{ReleaseExistsError, Result};
