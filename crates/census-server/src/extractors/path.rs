use serde::Deserialize;

/// Extractor para rutas /api/entrepreneur/{year}
#[derive(Debug, Deserialize)]
pub struct YearPath {
    pub year: u32,
}
