//! Page model: state touched by the front-end event handlers, wired up in one
//! initialisation pass.
//!
//! Callers translate DOM events into [`PageEvent`]s, pass them to
//! [`Page::dispatch`] and apply the returned [`Effect`]s.

mod comment;
mod event;
mod registry;

pub use comment::{parse_edit_reply, EditOutcome, UNKNOWN_EDIT_ERROR};
pub use event::{Effect, EventKind, FileInput, PageEvent};
pub use registry::{EventRegistry, Handler};

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use crate::markdown::Renderer;
use crate::theme::{self, KeyValueStore, Theme};
use crate::upload::{self, DropZone, TorrentSelection, INVALID_TORRENT_WARNING};

const FOLDER_OPEN_ICON: &str = "fa-folder-open";
const FOLDER_CLOSED_ICON: &str = "fa-folder";
const FOLDER_SLIDE_MS: u32 = 250;

/// State shared by the handlers.
pub struct PageState {
    store: Box<dyn KeyValueStore>,
    renderer: Renderer,
    drop_zone: DropZone,
    /// Folders start open; this holds the collapsed ones.
    collapsed: HashSet<usize>,
    editing: HashMap<u64, bool>,
}

impl PageState {
    pub fn theme(&self) -> Theme {
        Theme::load(self.store.as_ref())
    }

    pub fn drop_zone(&self) -> DropZone {
        self.drop_zone
    }

    pub fn is_editing(&self, comment: u64) -> bool {
        self.editing.get(&comment).copied().unwrap_or(false)
    }

    fn toggle_editing(&mut self, comment: u64) -> bool {
        let editing = !self.is_editing(comment);
        self.editing.insert(comment, editing);
        editing
    }
}

pub struct Page {
    state: PageState,
    registry: EventRegistry<PageState>,
    bubble_ts: Option<i64>,
}

impl Page {
    /// Builds the page and binds every handler. `bubble_ts` is the revision
    /// of the info bubble on this page, if it has one.
    pub fn new(renderer: Renderer, store: Box<dyn KeyValueStore>, bubble_ts: Option<i64>) -> Self {
        let mut registry: EventRegistry<PageState> = EventRegistry::new();
        registry.on(EventKind::ThemeToggle, on_theme_toggle);
        registry.on(EventKind::FileSelect, on_file_select);
        registry.on(EventKind::Drag, on_drag);
        registry.on(EventKind::FolderToggle, on_folder_toggle);
        registry.on(EventKind::CommentEdit, on_comment_edit);
        registry.on(EventKind::InfoBubble, on_info_bubble);

        Self {
            state: PageState {
                store,
                renderer,
                drop_zone: DropZone::new(),
                collapsed: HashSet::new(),
                editing: HashMap::new(),
            },
            registry,
            bubble_ts,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Effects to apply once the document has loaded: the stored theme and
    /// the info bubble, if it has not been dismissed.
    pub fn initial_effects(&self) -> Vec<Effect> {
        let mut effects = theme_effects(self.state.theme());
        if let Some(ts) = self.bubble_ts {
            if theme::info_bubble_visible(self.state.store.as_ref(), ts) {
                effects.push(Effect::ShowInfoBubble);
            }
        }
        effects
    }

    /// Whether any handler listens for `kind`.
    pub fn handles(&self, kind: EventKind) -> bool {
        self.registry.is_bound(kind)
    }

    pub fn dispatch(&mut self, event: &PageEvent) -> Result<Vec<Effect>> {
        if !self.handles(event.kind()) {
            tracing::debug!(?event, "no handler bound");
            return Ok(Vec::new());
        }
        let effects = self.registry.dispatch(&mut self.state, event)?;
        tracing::trace!(?event, effects = effects.len(), "dispatched page event");
        Ok(effects)
    }
}

fn theme_effects(theme: Theme) -> Vec<Effect> {
    vec![
        Effect::SetStylesheet(theme.stylesheet()),
        Effect::SetBodyClass {
            class: "dark",
            present: theme.body_class().is_some(),
        },
    ]
}

fn on_theme_toggle(state: &mut PageState, _: &PageEvent) -> Result<Vec<Effect>> {
    let theme = theme::toggle_theme(state.store.as_mut())?;
    Ok(theme_effects(theme))
}

fn torrent_effects(num_files: usize, label: &str) -> Vec<Effect> {
    match upload::torrent_selection(num_files, label) {
        TorrentSelection::Accepted(text) => vec![
            Effect::HideFileWarning,
            Effect::SetFieldText {
                input: FileInput::Torrent,
                text,
            },
        ],
        TorrentSelection::Rejected => vec![
            Effect::ShowFileWarning(INVALID_TORRENT_WARNING),
            Effect::SetFieldText {
                input: FileInput::Torrent,
                text: String::new(),
            },
        ],
    }
}

fn on_file_select(_: &mut PageState, event: &PageEvent) -> Result<Vec<Effect>> {
    let PageEvent::FileSelected {
        input,
        num_files,
        value,
    } = event
    else {
        return Ok(Vec::new());
    };
    let label = upload::file_label(value);
    Ok(match input {
        FileInput::Torrent => torrent_effects(*num_files, &label),
        FileInput::Avatar => vec![Effect::SetFieldText {
            input: FileInput::Avatar,
            text: label,
        }],
    })
}

fn on_drag(state: &mut PageState, event: &PageEvent) -> Result<Vec<Effect>> {
    let PageEvent::Drag(drag) = event else {
        return Ok(Vec::new());
    };
    let dropped = state.drop_zone.handle(drag.clone());
    let mut effects = vec![if state.drop_zone.is_visible() {
        Effect::ShowDropZone
    } else {
        Effect::HideDropZone
    }];
    if let Some(d) = dropped {
        effects.extend(torrent_effects(d.num_files, &d.label));
    }
    Ok(effects)
}

fn on_folder_toggle(state: &mut PageState, event: &PageEvent) -> Result<Vec<Effect>> {
    let PageEvent::FolderClicked { folder } = *event else {
        return Ok(Vec::new());
    };
    let icon = if state.collapsed.remove(&folder) {
        FOLDER_OPEN_ICON
    } else {
        state.collapsed.insert(folder);
        FOLDER_CLOSED_ICON
    };
    Ok(vec![
        Effect::SetFolderIcon { folder, icon },
        Effect::SlideToggle {
            folder,
            millis: FOLDER_SLIDE_MS,
        },
    ])
}

fn on_comment_edit(state: &mut PageState, event: &PageEvent) -> Result<Vec<Effect>> {
    let effects = match event {
        PageEvent::EditCommentClicked { comment } => {
            let comment = *comment;
            vec![Effect::SetEditing {
                comment,
                editing: state.toggle_editing(comment),
            }]
        }
        PageEvent::CommentEditSubmitted { comment } => {
            let comment = *comment;
            vec![
                Effect::DisableSubmit { comment },
                Effect::ShowWaitIndicator { comment },
                Effect::SetCommentError {
                    comment,
                    message: String::new(),
                },
            ]
        }
        PageEvent::CommentEditResponse {
            comment,
            status,
            body,
        } => {
            let comment = *comment;
            let mut effects = match parse_edit_reply(*status, body) {
                EditOutcome::Saved(source) => vec![
                    Effect::SetCommentHtml {
                        comment,
                        html: state.renderer.render(&source),
                    },
                    Effect::SetEditing {
                        comment,
                        editing: state.toggle_editing(comment),
                    },
                ],
                EditOutcome::Failed(message) => {
                    tracing::debug!(comment, "comment edit failed: {message}");
                    vec![Effect::SetCommentError { comment, message }]
                }
            };
            effects.extend([
                Effect::EnableSubmit { comment },
                Effect::ResetCaptcha,
                Effect::HideWaitIndicator { comment },
            ]);
            effects
        }
        _ => Vec::new(),
    };
    Ok(effects)
}

fn on_info_bubble(state: &mut PageState, event: &PageEvent) -> Result<Vec<Effect>> {
    if let PageEvent::InfoBubbleClosed { bubble_ts } = *event {
        theme::dismiss_info_bubble(state.store.as_mut(), bubble_ts)?;
    }
    Ok(Vec::new())
}
