//! Strategic map data: sectors and SAM sites

pub mod loader;
pub mod sam_site;
pub mod sector;

pub use loader::{SamSiteLoader, SamSites};
pub use sam_site::{GridNo, SamGraphicIndex, SamSiteModel, NUMBER_OF_SAMS};
pub use sector::{parse_sector_id, Sector, SectorId};
