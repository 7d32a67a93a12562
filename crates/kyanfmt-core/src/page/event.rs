//! Page events and the DOM effects handlers produce.

use crate::upload::DragEvent;

/// Which file input fired a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileInput {
    Torrent,
    Avatar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ThemeToggle,
    FileSelect,
    Drag,
    FolderToggle,
    CommentEdit,
    InfoBubble,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    ThemeToggleClicked,
    FileSelected {
        input: FileInput,
        num_files: usize,
        /// Raw input value, e.g. `C:\fakepath\x.torrent`.
        value: String,
    },
    Drag(DragEvent),
    FolderClicked {
        folder: usize,
    },
    EditCommentClicked {
        comment: u64,
    },
    CommentEditSubmitted {
        comment: u64,
    },
    /// Reply to a comment edit submission.
    CommentEditResponse {
        comment: u64,
        status: u16,
        body: String,
    },
    InfoBubbleClosed {
        bubble_ts: i64,
    },
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::ThemeToggleClicked => EventKind::ThemeToggle,
            PageEvent::FileSelected { .. } => EventKind::FileSelect,
            PageEvent::Drag(_) => EventKind::Drag,
            PageEvent::FolderClicked { .. } => EventKind::FolderToggle,
            PageEvent::EditCommentClicked { .. }
            | PageEvent::CommentEditSubmitted { .. }
            | PageEvent::CommentEditResponse { .. } => EventKind::CommentEdit,
            PageEvent::InfoBubbleClosed { .. } => EventKind::InfoBubble,
        }
    }
}

/// A DOM mutation for the caller to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetStylesheet(&'static str),
    SetBodyClass { class: &'static str, present: bool },
    ShowInfoBubble,
    SetFieldText { input: FileInput, text: String },
    ShowFileWarning(&'static str),
    HideFileWarning,
    ShowDropZone,
    HideDropZone,
    SetFolderIcon { folder: usize, icon: &'static str },
    SlideToggle { folder: usize, millis: u32 },
    SetEditing { comment: u64, editing: bool },
    DisableSubmit { comment: u64 },
    EnableSubmit { comment: u64 },
    ShowWaitIndicator { comment: u64 },
    HideWaitIndicator { comment: u64 },
    SetCommentHtml { comment: u64, html: String },
    SetCommentError { comment: u64, message: String },
    ResetCaptcha,
}
