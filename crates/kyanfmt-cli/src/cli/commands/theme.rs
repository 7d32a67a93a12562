//! `kyanfmt theme [show|toggle]`

use anyhow::Result;
use kyanfmt_core::theme::{self, FileStore, Theme};

pub fn run_theme(toggle: bool) -> Result<()> {
    let path = FileStore::default_path()?;
    let mut store = FileStore::open(&path)?;
    let theme = if toggle {
        theme::toggle_theme(&mut store)?
    } else {
        Theme::load(&store)
    };
    println!("{} ({})", theme.as_str(), theme.stylesheet());
    Ok(())
}
