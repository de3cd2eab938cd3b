//! SAM site - an anti-air emplacement on the strategic map
//!
//! Each site's control terminal covers two adjacent tactical tiles inside one
//! sector. The pair is always stored sorted descending, and the terminal
//! graphic is picked from the direction the two tiles are laid out in.

use crate::core::config::MapGeometry;
use crate::core::error::{Result, SamSiteError};
use crate::strategic::sector::{parse_sector_id, Sector, SectorId};
use serde_json::Value;

/// Tactical tile index: `row * world_cols + col`
pub type GridNo = i16;

/// Number of SAM sites the strategic layer expects
///
/// Save games and the Skyrider and Meanwhile dialogues all assume this count.
pub const NUMBER_OF_SAMS: usize = 4;

/// Terminal graphic orientation for a SAM site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamGraphicIndex {
    /// "/" orientation: tiles stacked in consecutive rows
    NeSw,
    /// "\" orientation: tiles side by side in one row
    NwSe,
}

impl SamGraphicIndex {
    /// Tile graphic number of the SAM computer terminal
    pub fn graphic_number(&self) -> i8 {
        match self {
            Self::NeSw => 3,
            Self::NwSe => 4,
        }
    }

    fn for_pair(grid_nos: [GridNo; 2], geometry: &MapGeometry) -> Self {
        if tile_gap(grid_nos) == geometry.world_cols {
            Self::NeSw
        } else {
            Self::NwSe
        }
    }
}

/// Location of one SAM site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamSiteModel {
    sector_id: SectorId,
    grid_nos: [GridNo; 2],
    graphic_index: SamGraphicIndex,
}

impl SamSiteModel {
    /// Create a site from an already sorted tile pair
    ///
    /// # Panics
    ///
    /// Panics unless `grid_nos[0] > grid_nos[1]`. Adjacency is not checked
    /// here; `deserialize` does that before calling in.
    pub fn new(sector_id: SectorId, grid_nos: [GridNo; 2], geometry: &MapGeometry) -> Self {
        assert!(
            grid_nos[0] > grid_nos[1],
            "SAM site gridNos must be sorted descending, got {:?}",
            grid_nos
        );
        Self {
            sector_id,
            grid_nos,
            graphic_index: SamGraphicIndex::for_pair(grid_nos, geometry),
        }
    }

    /// Like `new`, but reports an unsorted pair as an error
    pub fn try_new(sector_id: SectorId, grid_nos: [GridNo; 2], geometry: &MapGeometry) -> Result<Self> {
        if grid_nos[0] <= grid_nos[1] {
            return Err(SamSiteError::UnsortedGridNos {
                first: grid_nos[0],
                second: grid_nos[1],
            });
        }
        Ok(Self::new(sector_id, grid_nos, geometry))
    }

    pub fn sector_id(&self) -> SectorId {
        self.sector_id
    }

    pub fn sector(&self) -> Sector {
        Sector::from(self.sector_id)
    }

    /// The two tiles, higher grid number first
    pub fn grid_nos(&self) -> [GridNo; 2] {
        self.grid_nos
    }

    pub fn graphic_index(&self) -> SamGraphicIndex {
        self.graphic_index
    }

    /// Check whether this site occupies `grid_no` in `sector`
    pub fn does_sam_exist_here(&self, sector: Sector, grid_no: GridNo) -> bool {
        sector == self.sector() && self.grid_nos.contains(&grid_no)
    }

    /// Build a site from one JSON record on the stock map
    pub fn deserialize(obj: &Value) -> Result<Self> {
        Self::deserialize_with(obj, &MapGeometry::default())
    }

    /// Build a site from one JSON record: `{"sector": "D2", "gridNos": [a, b]}`
    ///
    /// The tiles may be given in either order.
    pub fn deserialize_with(obj: &Value, geometry: &MapGeometry) -> Result<Self> {
        let sector = obj
            .get("sector")
            .and_then(Value::as_str)
            .ok_or(SamSiteError::MissingField("sector"))?;
        let sector_id = parse_sector_id(sector)?;

        let g = match obj.get("gridNos") {
            Some(Value::Array(items)) if items.len() == 2 => items,
            other => {
                return Err(SamSiteError::MalformedGridNos {
                    found: describe(other),
                })
            }
        };
        let mut grid_nos = [
            read_grid_no(&g[0], geometry)?,
            read_grid_no(&g[1], geometry)?,
        ];

        // Descending, so grid_nos[0] is always the lower tile on screen
        grid_nos.sort_unstable_by(|a, b| b.cmp(a));

        let diff = tile_gap(grid_nos);
        if diff != 1 && diff != geometry.world_cols {
            return Err(SamSiteError::NonAdjacentTiles {
                first: grid_nos[0],
                second: grid_nos[1],
            });
        }

        Ok(Self::new(sector_id, grid_nos, geometry))
    }

    /// Check that a fully loaded collection has exactly `NUMBER_OF_SAMS` sites
    pub fn validate_data(models: &[SamSiteModel]) -> Result<()> {
        if models.len() != NUMBER_OF_SAMS {
            // Game saves, Skyrider and Meanwhile dialogues all assume 4 SAM sites
            tracing::error!(
                found = models.len(),
                "There must be exactly {} SAM sites defined",
                NUMBER_OF_SAMS
            );
            return Err(SamSiteError::UnexpectedSiteCount {
                expected: NUMBER_OF_SAMS,
                found: models.len(),
            });
        }
        Ok(())
    }
}

fn tile_gap(grid_nos: [GridNo; 2]) -> i32 {
    i32::from(grid_nos[0]) - i32::from(grid_nos[1])
}

fn read_grid_no(value: &Value, geometry: &MapGeometry) -> Result<GridNo> {
    let raw = value.as_i64().ok_or_else(|| SamSiteError::MalformedGridNos {
        found: format!("element {}", value),
    })?;
    if raw < 0 || raw >= geometry.tile_count() {
        return Err(SamSiteError::GridNoOutOfRange(raw));
    }
    GridNo::try_from(raw).map_err(|_| SamSiteError::GridNoOutOfRange(raw))
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "no gridNos field".to_string(),
        Some(Value::Array(items)) => format!("{} elements", items.len()),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(_)) => "a boolean".to_string(),
        Some(Value::Number(_)) => "a number".to_string(),
        Some(Value::String(_)) => "a string".to_string(),
        Some(Value::Object(_)) => "an object".to_string(),
    }
}
