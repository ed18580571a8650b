use crate::item::{Item, ItemId};

/// In-place edit state. At most one item is being edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    /// Holds a detached copy of the item; the stored item is untouched until save.
    Editing(Item),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn draft(&self) -> Option<&Item> {
        match self {
            EditSession::Editing(item) => Some(item),
            EditSession::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Item> {
        match self {
            EditSession::Editing(item) => Some(item),
            EditSession::Idle => None,
        }
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        self.draft().map(|item| item.id)
    }
}
