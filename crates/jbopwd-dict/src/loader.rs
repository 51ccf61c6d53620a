use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jbopwd_core::{Cmavo, Gismu, Lexicon};
use tracing::info;

use crate::errors::DictError;
use crate::parse::{parse_cmavo, parse_gismu};

fn open(path: &Path) -> Result<BufReader<File>, DictError> {
    let file = File::open(path).map_err(|source| DictError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Opens and parses a gismu table file.
pub fn parse_gismu_file(path: impl AsRef<Path>) -> Result<Vec<Gismu>, DictError> {
    parse_gismu(open(path.as_ref())?)
}

/// Opens and parses a cmavo table file.
pub fn parse_cmavo_file(path: impl AsRef<Path>) -> Result<Vec<Cmavo>, DictError> {
    parse_cmavo(open(path.as_ref())?)
}

/// Loads both tables and builds the lexicon.
pub fn load_lexicon(
    gismu_path: impl AsRef<Path>,
    cmavo_path: impl AsRef<Path>,
) -> Result<Lexicon, DictError> {
    let gismu = parse_gismu_file(gismu_path)?;
    let cmavo = parse_cmavo_file(cmavo_path)?;
    info!(
        gismu = gismu.len(),
        cmavo = cmavo.len(),
        "dictionary tables loaded"
    );
    Ok(Lexicon::new(gismu, cmavo))
}
