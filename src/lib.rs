pub mod astrocalc_errors;
pub mod astrometry;
pub mod catalog_query;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod photometry;
pub mod time;
