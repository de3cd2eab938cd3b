pub mod config;
pub mod error;

pub use config::MapGeometry;
pub use error::{Result, SamSiteError};
