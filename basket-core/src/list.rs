//! The shopping list state store.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tracing::debug;

use crate::alert::AlertChannel;
use crate::draft::{ApplyField, DraftField, ItemDraft};
use crate::edit::EditSession;
use crate::error::{ListError, ValidationError};
use crate::item::{IdGenerator, Item, ItemId, line_total, names_collide};
use crate::total::total;

/// Which list the view is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Active,
    Archived,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Active => ViewMode::Archived,
            ViewMode::Archived => ViewMode::Active,
        }
    }
}

/// Every mutation the view can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    UpdateDraft(DraftField),
    Add,
    Archive(ItemId),
    BeginEdit(ItemId),
    UpdateEdit(DraftField),
    SaveEdit,
    CancelEdit,
    SetView(ViewMode),
    ToggleView,
}

/// What a successful [`Action`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(ItemId),
    Archived(ItemId),
    Saved(ItemId),
    /// State changed but no item was created, moved or replaced.
    Changed,
    /// The action did not apply (unknown id, no edit in progress).
    Unchanged,
}

/// Owns every piece of application state.
///
/// Each operation validates before it mutates, so a rejected operation
/// leaves the store exactly as it was apart from the alert it raises.
#[derive(Debug, Default)]
pub struct ShoppingList {
    active: Vec<Item>,
    archived: Vec<Item>,
    draft: ItemDraft,
    edit: EditSession,
    alert: AlertChannel,
    view: ViewMode,
    ids: IdGenerator,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alert_window(window: Duration) -> Self {
        Self {
            alert: AlertChannel::new(window),
            ..Self::default()
        }
    }

    /// Apply `action`. Rejections are also raised on the alert channel.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> Result<Outcome, ListError> {
        match action {
            Action::UpdateDraft(field) => {
                self.update_draft(field);
                Ok(Outcome::Changed)
            }
            Action::Add => self.add(now).map(Outcome::Added),
            Action::Archive(id) => Ok(if self.archive(id) {
                Outcome::Archived(id)
            } else {
                Outcome::Unchanged
            }),
            Action::BeginEdit(id) => Ok(if self.begin_edit(id) {
                Outcome::Changed
            } else {
                Outcome::Unchanged
            }),
            Action::UpdateEdit(field) => Ok(if self.update_edit(field) {
                Outcome::Changed
            } else {
                Outcome::Unchanged
            }),
            Action::SaveEdit => self.save_edit(now).map(|saved| match saved {
                Some(id) => Outcome::Saved(id),
                None => Outcome::Unchanged,
            }),
            Action::CancelEdit => Ok(if self.cancel_edit() {
                Outcome::Changed
            } else {
                Outcome::Unchanged
            }),
            Action::SetView(view) => {
                self.set_view(view);
                Ok(Outcome::Changed)
            }
            Action::ToggleView => {
                self.toggle_view();
                Ok(Outcome::Changed)
            }
        }
    }

    pub fn update_draft(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    /// Commit the new-item draft. On success the draft resets to its defaults;
    /// on failure it is left exactly as it was.
    pub fn add(&mut self, now: Instant) -> Result<ItemId, ListError> {
        if let Err(e) = self.check_new_draft() {
            return Err(self.reject(e, now));
        }

        let id = self.ids.next_id();
        let item = std::mem::take(&mut self.draft).to_item(id);
        debug!(id, name = %item.name, "added item");
        self.active.push(item);
        Ok(id)
    }

    fn check_new_draft(&self) -> Result<(), ListError> {
        self.draft.validate()?;
        self.check_unique(&self.draft.name, None)?;
        self.check_fits(line_total(self.draft.price, self.draft.quantity), None)
    }

    /// The active total must stay computable with `subtotal` standing in for
    /// the item with id `except` (or appended, if `except` is `None`).
    fn check_fits(&self, subtotal: Option<Decimal>, except: Option<ItemId>) -> Result<(), ListError> {
        let others = total(self.active.iter().filter(|item| Some(item.id) != except));
        match others.zip(subtotal) {
            Some((sum, line)) if sum.checked_add(line).is_some() => Ok(()),
            _ => Err(ValidationError::TooLarge.into()),
        }
    }

    fn check_unique(&self, name: &str, except: Option<ItemId>) -> Result<(), ListError> {
        let taken = self
            .active
            .iter()
            .filter(|item| Some(item.id) != except)
            .any(|item| names_collide(&item.name, name));
        if taken {
            Err(ListError::Duplicate {
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn reject(&mut self, error: ListError, now: Instant) -> ListError {
        debug!(%error, "rejected");
        self.alert.raise(error.to_string(), now);
        error
    }

    /// Move the active item with `id` to the archive. Returns false if no
    /// active item has that id.
    pub fn archive(&mut self, id: ItemId) -> bool {
        let Some(index) = self.active.iter().position(|item| item.id == id) else {
            return false;
        };
        let item = self.active.remove(index);
        debug!(id, name = %item.name, "archived item");
        self.archived.push(item);
        true
    }

    /// Start editing the active item with `id`, replacing any edit already
    /// in progress. Returns false if no active item has that id.
    pub fn begin_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.active.iter().find(|item| item.id == id) else {
            return false;
        };
        if let Some(previous) = self.edit.editing_id() {
            debug!(previous, id, "discarding unsaved edit");
        }
        self.edit = EditSession::Editing(item.clone());
        true
    }

    /// Returns false if no edit is in progress.
    pub fn update_edit(&mut self, field: DraftField) -> bool {
        match self.edit.draft_mut() {
            Some(draft) => {
                draft.apply(field);
                true
            }
            None => false,
        }
    }

    /// Commit the edit draft over the active item with the same id.
    ///
    /// Only the name is re-checked; the add-time price rule does not apply
    /// here. An amount too large to total is also refused. On rejection the
    /// session stays open with the draft intact. Returns `Ok(None)` when there was nothing to save.
    pub fn save_edit(&mut self, now: Instant) -> Result<Option<ItemId>, ListError> {
        let Some(draft) = self.edit.draft() else {
            return Ok(None);
        };
        let checked = self
            .check_unique(&draft.name, Some(draft.id))
            .and_then(|()| self.check_fits(draft.subtotal(), Some(draft.id)));
        if let Err(e) = checked {
            return Err(self.reject(e, now));
        }

        let EditSession::Editing(draft) = std::mem::take(&mut self.edit) else {
            return Ok(None);
        };
        let id = draft.id;
        match self.active.iter_mut().find(|item| item.id == id) {
            Some(slot) => {
                debug!(id, name = %draft.name, "saved edit");
                *slot = draft;
                Ok(Some(id))
            }
            None => {
                debug!(id, "edited item is no longer active");
                Ok(None)
            }
        }
    }

    /// Discard the edit draft. Returns false if no edit was in progress.
    pub fn cancel_edit(&mut self) -> bool {
        std::mem::take(&mut self.edit).is_editing()
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    /// Advance time-based state (alert expiry).
    pub fn tick(&mut self, now: Instant) -> bool {
        self.alert.tick(now)
    }

    /// Running total of the active list. `None` only if archiving a
    /// negative-priced item pushed the rest past the `Decimal` range.
    pub fn total(&self) -> Option<Decimal> {
        total(&self.active)
    }

    pub fn active(&self) -> &[Item] {
        &self.active
    }

    pub fn archived(&self) -> &[Item] {
        &self.archived
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    pub fn alert(&self) -> &AlertChannel {
        &self.alert
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Items for the current view mode.
    pub fn visible(&self) -> &[Item] {
        match self.view {
            ViewMode::Active => &self.active,
            ViewMode::Archived => &self.archived,
        }
    }
}
