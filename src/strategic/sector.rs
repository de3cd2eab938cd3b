//! Sector - a cell of the strategic map
//!
//! The strategic map is a 16x16 grid. Sectors are named by a row letter
//! (`A`..`P`) followed by a column number (`1`..`16`), e.g. `"D15"`.
//! Internally a sector is also addressed by a packed `SectorId`.

use crate::core::error::{Result, SamSiteError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sectors per strategic map row (and rows per map)
pub const MAP_WORLD_X: u8 = 16;
pub const MAP_WORLD_Y: u8 = 16;

/// Packed sector identifier: `(y - 1) * 16 + (x - 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectorId(pub u8);

/// Sector coordinates, both 1-based (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sector {
    pub x: u8,
    pub y: u8,
}

impl Sector {
    /// Create a sector, checking that it lies on the strategic map
    pub fn new(x: u8, y: u8) -> Result<Self> {
        if !(1..=MAP_WORLD_X).contains(&x) || !(1..=MAP_WORLD_Y).contains(&y) {
            return Err(SamSiteError::InvalidSector(format!("({}, {})", x, y)));
        }
        Ok(Self { x, y })
    }

    /// Row letter of this sector
    pub fn row_letter(&self) -> char {
        char::from(b'A' + self.y - 1)
    }

    pub fn id(&self) -> SectorId {
        SectorId::from(*self)
    }
}

impl From<SectorId> for Sector {
    fn from(id: SectorId) -> Self {
        Self {
            x: id.0 % MAP_WORLD_X + 1,
            y: id.0 / MAP_WORLD_X + 1,
        }
    }
}

impl From<Sector> for SectorId {
    fn from(sector: Sector) -> Self {
        SectorId((sector.y - 1) * MAP_WORLD_X + (sector.x - 1))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.x)
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Sector::from(*self), f)
    }
}

impl FromStr for Sector {
    type Err = SamSiteError;

    fn from_str(s: &str) -> Result<Self> {
        parse_sector_id(s).map(Sector::from)
    }
}

impl FromStr for SectorId {
    type Err = SamSiteError;

    fn from_str(s: &str) -> Result<Self> {
        parse_sector_id(s)
    }
}

/// Parse a sector name such as `"A9"` into its packed identifier
///
/// Surrounding whitespace is ignored and the row letter may be lowercase.
pub fn parse_sector_id(name: &str) -> Result<SectorId> {
    let invalid = || SamSiteError::InvalidSector(name.to_string());

    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    let row = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    let column = chars.as_str();

    if !('A'..='P').contains(&row) {
        return Err(invalid());
    }
    // u8::from_str accepts a leading '+', which is not a valid sector name
    if column.is_empty() || !column.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let x: u8 = column.parse().map_err(|_| invalid())?;
    let y = row as u8 - b'A' + 1;

    Sector::new(x, y).map(SectorId::from).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        assert_eq!(parse_sector_id("A1").unwrap(), SectorId(0));
        assert_eq!(parse_sector_id("A16").unwrap(), SectorId(15));
        assert_eq!(parse_sector_id("B1").unwrap(), SectorId(16));
        assert_eq!(parse_sector_id("P16").unwrap(), SectorId(255));
    }

    #[test]
    fn test_parse_lenient_forms() {
        assert_eq!(parse_sector_id(" d15 ").unwrap(), parse_sector_id("D15").unwrap());
        assert_eq!(parse_sector_id("A09").unwrap(), parse_sector_id("A9").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for name in ["", "A", "9A", "Q1", "A0", "A17", "A+9", "A9x", "AA9", "A-1", "Ä1"] {
            assert!(
                matches!(parse_sector_id(name), Err(SamSiteError::InvalidSector(_))),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_sector_conversions() {
        let sector = Sector::new(9, 1).unwrap();
        assert_eq!(sector.to_string(), "A9");
        assert_eq!(sector.id(), SectorId(8));
        assert_eq!(Sector::from(SectorId(8)), sector);
        assert_eq!(SectorId(8).to_string(), "A9");
        assert_eq!("A9".parse::<Sector>().unwrap(), sector);
    }

    #[test]
    fn test_sector_bounds() {
        assert!(Sector::new(0, 1).is_err());
        assert!(Sector::new(1, 17).is_err());
        assert!(Sector::new(16, 16).is_ok());
    }
}
