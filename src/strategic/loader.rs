//! Load SAM site locations from the strategic data file
//!
//! The file is a JSON array of `{"sector": .., "gridNos": [..]}` records.
//! `SamSiteLoader` turns it into a `SamSites` collection that has passed
//! per-record checks and the site count check.

use crate::core::config::MapGeometry;
use crate::core::error::{Result, SamSiteError};
use crate::strategic::sam_site::{GridNo, SamSiteModel};
use crate::strategic::sector::Sector;
use serde_json::Value;
use std::path::Path;

/// Validated set of SAM sites, in file order
///
/// A site's index is its SAM site number as used by save games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamSites {
    sites: Vec<SamSiteModel>,
}

impl SamSites {
    /// Wrap already deserialized sites, checking the site count
    pub fn new(sites: Vec<SamSiteModel>) -> Result<Self> {
        SamSiteModel::validate_data(&sites)?;
        Ok(Self { sites })
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SamSiteModel> {
        self.sites.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SamSiteModel> {
        self.sites.get(index)
    }

    pub fn as_slice(&self) -> &[SamSiteModel] {
        &self.sites
    }

    /// Index of the site occupying `grid_no` in `sector`, if any
    pub fn find_at(&self, sector: Sector, grid_no: GridNo) -> Option<usize> {
        self.sites
            .iter()
            .position(|site| site.does_sam_exist_here(sector, grid_no))
    }

    /// Check if any site is located in `sector`
    pub fn is_sam_sector(&self, sector: Sector) -> bool {
        self.sites.iter().any(|site| site.sector() == sector)
    }

    /// Sectors holding a SAM site, in site order
    pub fn sectors(&self) -> Vec<Sector> {
        self.sites.iter().map(SamSiteModel::sector).collect()
    }
}

impl<'a> IntoIterator for &'a SamSites {
    type Item = &'a SamSiteModel;
    type IntoIter = std::slice::Iter<'a, SamSiteModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}

/// Loader that converts the SAM site data file into `SamSites`
#[derive(Debug, Clone, Default)]
pub struct SamSiteLoader {
    geometry: MapGeometry,
}

impl SamSiteLoader {
    /// Create a loader for maps with the given geometry
    pub fn new(geometry: MapGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &MapGeometry {
        &self.geometry
    }

    /// Load sites from a JSON string
    pub fn load_from_json(&self, json: &str) -> Result<SamSites> {
        let value: Value = serde_json::from_str(json)?;
        self.load_from_value(&value)
    }

    /// Load sites from a JSON file on disk
    pub fn load_from_file(&self, path: &Path) -> Result<SamSites> {
        let content = std::fs::read_to_string(path)?;
        let sites = self.load_from_json(&content)?;
        tracing::info!("Loaded {} SAM sites from {}", sites.len(), path.display());
        Ok(sites)
    }

    /// Deserialize every record, then check the count
    ///
    /// The first bad record aborts the load; the error carries its index.
    pub fn load_from_value(&self, value: &Value) -> Result<SamSites> {
        let records = value.as_array().ok_or(SamSiteError::MissingField("SAM site array"))?;

        let mut sites = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let site = SamSiteModel::deserialize_with(record, &self.geometry)
                .map_err(|e| e.in_record(index))?;
            tracing::debug!(
                index,
                sector = %site.sector(),
                grid_nos = ?site.grid_nos(),
                "Loaded SAM site"
            );
            sites.push(site);
        }

        SamSites::new(sites)
    }
}
