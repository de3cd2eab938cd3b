//! Strategic SAM Sites - SAM site locations for the strategic map

pub mod core;
pub mod strategic;
