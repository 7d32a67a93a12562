//! Upload form helpers: file-input labels, torrent validation and the
//! drag-and-drop zone.

/// Warning shown next to the drop zone when a non-torrent file is chosen.
pub const INVALID_TORRENT_WARNING: &str = "Invalid file selected. Please select a torrent file.";

/// Display name for a file-input value: browsers report `C:\fakepath\x.torrent`
/// or a plain name; only the part after the last separator is kept.
pub fn file_label(value: &str) -> String {
    let normalized = value.replace('\\', "/");
    match normalized.rsplit_once('/') {
        Some((_, name)) => name.to_string(),
        None => normalized,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TorrentSelection {
    /// Text for the read-only field next to the input.
    Accepted(String),
    /// The input must be cleared and [`INVALID_TORRENT_WARNING`] shown.
    Rejected,
}

/// Validates a torrent file selection of `num_files` files whose first file
/// is labelled `label`.
pub fn torrent_selection(num_files: usize, label: &str) -> TorrentSelection {
    if !label.ends_with(".torrent") {
        return TorrentSelection::Rejected;
    }
    if num_files > 1 {
        TorrentSelection::Accepted(format!("{num_files} files selected"))
    } else {
        TorrentSelection::Accepted(label.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// Something is dragged over the page body.
    Enter,
    /// The drag left the drop zone.
    Leave,
    Over,
    /// Files were dropped; the names as the file input reports them.
    Drop(Vec<String>),
}

/// Files dropped on the zone, handed to the torrent file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropped {
    pub num_files: usize,
    pub label: String,
}

/// Overlay shown while a file is dragged over the upload page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZone {
    visible: bool,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies `event`; a drop hides the zone and yields the new selection.
    pub fn handle(&mut self, event: DragEvent) -> Option<Dropped> {
        match event {
            DragEvent::Enter => {
                self.visible = true;
                None
            }
            DragEvent::Leave => {
                self.visible = false;
                None
            }
            DragEvent::Over => None,
            DragEvent::Drop(files) => {
                self.visible = false;
                let label = files.first().map(|f| file_label(f)).unwrap_or_default();
                Some(Dropped {
                    num_files: files.len(),
                    label,
                })
            }
        }
    }
}
