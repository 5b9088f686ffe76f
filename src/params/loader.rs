//! Load projection parameters from JSON

use super::data::ProjectionParameters;
use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load parameters from a JSON file. Fields absent from the file take their defaults.
///
/// The returned parameters are not validated; the engine validates on construction.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<ProjectionParameters> {
    let path = path.as_ref();
    debug!("Loading projection parameters from {}", path.display());
    let file = File::open(path)?;
    load_parameters_from_reader(BufReader::new(file))
}

/// Load parameters from any reader (e.g., string buffer, stdin)
pub fn load_parameters_from_reader<R: std::io::Read>(reader: R) -> Result<ProjectionParameters> {
    let params = serde_json::from_reader(reader)?;
    Ok(params)
}
