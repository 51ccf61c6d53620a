use std::env;
use std::path::{Path, PathBuf};

use jbopwd_core::Lexicon;
use jbopwd_dict::{DictError, load_lexicon};
use tracing::info;

const GISMU_FILE: &str = "gismu.txt";
const CMAVO_FILE: &str = "cmavo.txt";

#[cfg(feature = "embedded-dicts")]
mod embedded {
    /// Bundled excerpts of the reference tables.
    pub const GISMU: &str = include_str!("../dicts/gismu.txt");
    pub const CMAVO: &str = include_str!("../dicts/cmavo.txt");
}

/// Directory holding the table files: `DICTIONARY_DIR` when set, the
/// current directory otherwise.
fn dictionary_dir() -> PathBuf {
    env::var_os("DICTIONARY_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolves and loads both tables. Explicit paths win; otherwise the
/// dictionary directory is searched, and with the `embedded-dicts` feature
/// enabled the bundled tables stand in for files that do not exist.
pub fn load(gismu: Option<&Path>, cmavo: Option<&Path>) -> Result<Lexicon, DictError> {
    let dir = dictionary_dir();
    let gismu_path = gismu
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(GISMU_FILE));
    let cmavo_path = cmavo
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(CMAVO_FILE));

    #[cfg(feature = "embedded-dicts")]
    if gismu.is_none() && cmavo.is_none() && (!gismu_path.exists() || !cmavo_path.exists()) {
        info!("dictionary files not found, using bundled tables");
        let gismu = jbopwd_dict::parse_gismu(std::io::Cursor::new(embedded::GISMU))?;
        let cmavo = jbopwd_dict::parse_cmavo(std::io::Cursor::new(embedded::CMAVO))?;
        return Ok(Lexicon::new(gismu, cmavo));
    }

    info!(
        gismu = %gismu_path.display(),
        cmavo = %cmavo_path.display(),
        "loading dictionary tables"
    );
    load_lexicon(gismu_path, cmavo_path)
}
