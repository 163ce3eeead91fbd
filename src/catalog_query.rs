//! # Catalog query URLs
//!
//! Builds the literal URLs handed to an HTTP client to run a cone search around a position:
//!
//! - **SIMBAD**: a synchronous TAP request carrying a percent-encoded ADQL query.
//! - **IRSA**: a Simple Cone Search (SCS) request returning CSV.
//!
//! No request is performed here. Endpoints come from [`CatalogEndpoints`], which defaults to
//! the public services and can be loaded from a TOML file:
//!
//! ```toml
//! simbad_tap_url = "https://simbad.cds.unistra.fr/simbad/sim-tap/sync"
//! irsa_scs_url = "https://irsa.ipac.caltech.edu/SCS"
//! irsa_table = "allwise_p3as_psd"
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::astrocalc_errors::{AstroCalcError, Result};
use crate::constants::Degree;
use crate::coordinates::DecimalCoords;

/// Columns returned by the SIMBAD cone search, in output order.
pub const SIMBAD_COLUMNS: [&str; 9] = [
    "main_id",
    "otype_txt",
    "ra",
    "dec",
    "plx_value",
    "pmra",
    "pmdec",
    "rvz_radvel",
    "sp_type",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEndpoints {
    #[serde(default = "default_simbad_tap_url")]
    pub simbad_tap_url: String,

    #[serde(default = "default_irsa_scs_url")]
    pub irsa_scs_url: String,

    #[serde(default = "default_irsa_table")]
    pub irsa_table: String,
}

fn default_simbad_tap_url() -> String {
    "https://simbad.cds.unistra.fr/simbad/sim-tap/sync".to_string()
}

fn default_irsa_scs_url() -> String {
    "https://irsa.ipac.caltech.edu/SCS".to_string()
}

fn default_irsa_table() -> String {
    "allwise_p3as_psd".to_string()
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self {
            simbad_tap_url: default_simbad_tap_url(),
            irsa_scs_url: default_irsa_scs_url(),
            irsa_table: default_irsa_table(),
        }
    }
}

impl CatalogEndpoints {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Builds cone-search URLs against the configured endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQueryBuilder {
    endpoints: CatalogEndpoints,
}

fn check_radius(radius: Degree) -> Result<Degree> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        tracing::debug!(radius, "rejected cone search radius");
        Err(AstroCalcError::InvalidRadius(radius))
    }
}

impl CatalogQueryBuilder {
    pub fn new(endpoints: CatalogEndpoints) -> Self {
        CatalogQueryBuilder { endpoints }
    }

    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    /// ADQL cone search on the SIMBAD `basic` table, before encoding.
    pub fn simbad_adql(&self, coords: &DecimalCoords, radius: Degree) -> Result<String> {
        let radius = check_radius(radius)?;
        Ok(format!(
            "SELECT {} FROM basic WHERE 1=CONTAINS(POINT('ICRS', ra, dec), CIRCLE('ICRS', {}, {}, {}))",
            SIMBAD_COLUMNS.iter().join(", "),
            coords.ra(),
            coords.dec(),
            radius
        ))
    }

    /// SIMBAD TAP URL for a cone of `radius` degrees around `coords`.
    ///
    /// Return
    /// ------
    /// * `{simbad_tap_url}?request=doQuery&lang=adql&format=csv&query={percent-encoded ADQL}`
    /// * `Err(InvalidRadius)` for a negative or non-finite radius
    pub fn simbad_url(&self, coords: &DecimalCoords, radius: Degree) -> Result<String> {
        let adql = self.simbad_adql(coords, radius)?;
        let url = format!(
            "{}?request=doQuery&lang=adql&format=csv&query={}",
            self.endpoints.simbad_tap_url,
            urlencoding::encode(&adql)
        );
        tracing::trace!(%url, "built SIMBAD query");
        Ok(url)
    }

    /// IRSA Simple Cone Search URL for a cone of `radius` degrees around `coords`.
    ///
    /// Return
    /// ------
    /// * `{irsa_scs_url}?table={table}&RA={ra}&DEC={dec}&SR={radius}&format=csv`
    /// * `Err(InvalidRadius)` for a negative or non-finite radius
    pub fn irsa_url(&self, coords: &DecimalCoords, radius: Degree) -> Result<String> {
        let radius = check_radius(radius)?;
        let url = format!(
            "{}?table={}&RA={}&DEC={}&SR={}&format=csv",
            self.endpoints.irsa_scs_url,
            urlencoding::encode(&self.endpoints.irsa_table),
            coords.ra(),
            coords.dec(),
            radius
        );
        tracing::trace!(%url, "built IRSA query");
        Ok(url)
    }
}

/// SIMBAD cone search URL against the public endpoint.
pub fn create_simbad_url(coords: &DecimalCoords, radius: Degree) -> Result<String> {
    CatalogQueryBuilder::default().simbad_url(coords, radius)
}

/// IRSA AllWISE cone search URL against the public endpoint.
pub fn create_irsa_url(coords: &DecimalCoords, radius: Degree) -> Result<String> {
    CatalogQueryBuilder::default().irsa_url(coords, radius)
}
