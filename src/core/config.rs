//! Strategic map geometry
//!
//! The tactical map is a square grid of tiles addressed by a single grid
//! number, `row * world_cols + col`. SAM site adjacency and orientation are
//! defined in terms of the row width, so it is collected here instead of
//! being scattered as a magic number.

use crate::core::error::{Result, SamSiteError};
use crate::strategic::sam_site::GridNo;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of tile columns on a stock tactical map
pub const WORLD_COLS: i32 = 160;

/// Number of tile rows on a stock tactical map
pub const WORLD_ROWS: i32 = 160;

/// Tactical map dimensions used when interpreting grid numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapGeometry {
    /// Tiles per map row
    ///
    /// Two grid numbers that differ by exactly this amount are vertically
    /// adjacent (same column, consecutive rows).
    pub world_cols: i32,

    /// Number of map rows
    pub world_rows: i32,
}

impl Default for MapGeometry {
    fn default() -> Self {
        Self {
            world_cols: WORLD_COLS,
            world_rows: WORLD_ROWS,
        }
    }
}

impl MapGeometry {
    /// Create a geometry with explicit dimensions
    pub fn new(world_cols: i32, world_rows: i32) -> Self {
        Self {
            world_cols,
            world_rows,
        }
    }

    /// Total number of addressable tiles
    pub fn tile_count(&self) -> i64 {
        i64::from(self.world_cols) * i64::from(self.world_rows)
    }

    /// Parse geometry from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let geometry: MapGeometry = toml::from_str(content)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Load geometry from a TOML file on disk
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.world_cols <= 0 || self.world_rows <= 0 {
            return Err(SamSiteError::InvalidConfig(format!(
                "map dimensions must be positive (got {}x{})",
                self.world_cols, self.world_rows
            )));
        }

        // Every tile must be addressable by a GridNo
        let max_tiles = i64::from(GridNo::MAX) + 1;
        if self.tile_count() > max_tiles {
            return Err(SamSiteError::InvalidConfig(format!(
                "{}x{} map has more tiles than a grid number can address ({})",
                self.world_cols, self.world_rows, max_tiles
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_valid() {
        let geometry = MapGeometry::default();
        assert_eq!(geometry.world_cols, 160);
        assert_eq!(geometry.tile_count(), 25_600);
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_override() {
        let geometry = MapGeometry::from_toml_str("world_cols = 10\nworld_rows = 12\n").unwrap();
        assert_eq!(geometry, MapGeometry::new(10, 12));

        let geometry = MapGeometry::from_toml_str("world_cols = 10\n").unwrap();
        assert_eq!(geometry.world_rows, WORLD_ROWS);

        let geometry = MapGeometry::from_toml_str("").unwrap();
        assert_eq!(geometry, MapGeometry::default());
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        assert!(matches!(
            MapGeometry::from_toml_str("world_cols = 0"),
            Err(SamSiteError::InvalidConfig(_))
        ));
        assert!(MapGeometry::new(-1, 10).validate().is_err());
        assert!(MapGeometry::new(1000, 1000).validate().is_err());
        assert!(matches!(
            MapGeometry::from_toml_str("world_cols = \"wide\""),
            Err(SamSiteError::TomlError(_))
        ));
    }
}
