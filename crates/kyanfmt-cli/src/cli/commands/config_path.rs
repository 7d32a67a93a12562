//! `kyanfmt config-path`

use std::path::Path;

pub fn run_config_path(path: &Path) {
    println!("{}", path.display());
}
