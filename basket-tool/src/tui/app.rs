//! Terminal application state on top of the shopping list store.

use std::time::Instant;

use basket_core::{
    Action, Category, Decimal, DraftField, Item, ItemId, Outcome, ShoppingList, ViewMode,
};
use tracing::info;

use crate::config::Settings;

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Quantity,
    Price,
    Category,
    SuggestedBy,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Quantity,
        FormField::Price,
        FormField::Category,
        FormField::SuggestedBy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Quantity => "Quantity",
            FormField::Price => "Price",
            FormField::Category => "Category",
            FormField::SuggestedBy => "Suggested by",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Field values of whichever form is on screen.
#[derive(Debug, Clone, Copy)]
pub struct FormValues<'a> {
    pub name: &'a str,
    pub category: Option<Category>,
    pub suggested_by: &'a str,
}

pub struct BasketApp {
    pub list: ShoppingList,
    pub focus: Focus,
    pub field: FormField,
    pub selected: usize,
    pub currency: String,
    pub should_quit: bool,

    // Raw text of the numeric inputs; the store holds the parsed values
    pub quantity_input: String,
    pub price_input: String,
}

impl BasketApp {
    pub fn new(settings: &Settings) -> Self {
        let mut app = Self {
            list: ShoppingList::with_alert_window(settings.alert_window),
            focus: Focus::List,
            field: FormField::Name,
            selected: 0,
            currency: settings.currency.clone(),
            should_quit: false,
            quantity_input: String::new(),
            price_input: String::new(),
        };
        app.sync_inputs();
        app
    }

    fn dispatch(&mut self, action: Action) -> Option<Outcome> {
        let result = self.list.dispatch(action, Instant::now());
        self.clamp_selection();
        // Rejections are already on the alert channel
        result.ok()
    }

    pub fn tick(&mut self) {
        self.list.tick(Instant::now());
    }

    pub fn is_editing(&self) -> bool {
        self.list.edit().is_editing()
    }

    pub fn form_values(&self) -> FormValues<'_> {
        match self.list.edit().draft() {
            Some(item) => FormValues {
                name: &item.name,
                category: item.category,
                suggested_by: &item.suggested_by,
            },
            None => {
                let draft = self.list.draft();
                FormValues {
                    name: &draft.name,
                    category: draft.category,
                    suggested_by: &draft.suggested_by,
                }
            }
        }
    }

    fn form_numbers(&self) -> (u32, Decimal) {
        match self.list.edit().draft() {
            Some(item) => (item.quantity, item.price),
            None => (self.list.draft().quantity, self.list.draft().price),
        }
    }

    /// Reload the numeric input buffers from the form now on screen.
    fn sync_inputs(&mut self) {
        let (quantity, price) = self.form_numbers();
        self.quantity_input = quantity.to_string();
        self.price_input = if price.is_zero() {
            String::new()
        } else {
            price.to_string()
        };
    }

    fn update_field(&mut self, field: DraftField) {
        let action = if self.is_editing() {
            Action::UpdateEdit(field)
        } else {
            Action::UpdateDraft(field)
        };
        self.dispatch(action);
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.list.visible().get(self.selected)
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.selected_item().map(|item| item.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.list.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.list.visible().len() {
            self.selected += 1;
        }
    }

    pub fn toggle_view(&mut self) {
        self.dispatch(Action::ToggleView);
        self.selected = 0;
        self.focus = Focus::List;
    }

    pub fn focus_form(&mut self) {
        if self.list.view() == ViewMode::Active {
            self.focus = Focus::Form;
        }
    }

    pub fn begin_edit_selected(&mut self) {
        if self.list.view() != ViewMode::Active {
            return;
        }
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.dispatch(Action::BeginEdit(id)) == Some(Outcome::Changed) {
            self.sync_inputs();
            self.focus = Focus::Form;
            self.field = FormField::Name;
        }
    }

    pub fn archive_selected(&mut self) {
        if self.list.view() != ViewMode::Active {
            return;
        }
        if let Some(id) = self.selected_id() {
            self.dispatch(Action::Archive(id));
        }
    }

    /// Enter in the form: add the draft or save the edit.
    pub fn submit(&mut self) {
        if self.is_editing() {
            if self.dispatch(Action::SaveEdit).is_some() {
                self.sync_inputs();
                self.focus = Focus::List;
            }
        } else if let Some(Outcome::Added(id)) = self.dispatch(Action::Add) {
            self.sync_inputs();
            self.field = FormField::Name;
            if let Some(index) = self.list.active().iter().position(|item| item.id == id) {
                self.selected = index;
            }
        }
    }

    /// Esc in the form: drop the edit, or just leave the add form.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            self.dispatch(Action::CancelEdit);
            self.sync_inputs();
        }
        self.focus = Focus::List;
    }

    pub fn quit(&mut self) {
        info!(
            active = self.list.active().len(),
            archived = self.list.archived().len(),
            "quitting"
        );
        self.should_quit = true;
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    pub fn input_char(&mut self, c: char) {
        match self.field {
            FormField::Name => {
                let mut name = self.form_values().name.to_string();
                name.push(c);
                self.update_field(DraftField::Name(name));
            }
            FormField::SuggestedBy => {
                let mut who = self.form_values().suggested_by.to_string();
                who.push(c);
                self.update_field(DraftField::SuggestedBy(who));
            }
            FormField::Quantity => match c {
                '0'..='9' => {
                    self.quantity_input.push(c);
                    self.commit_quantity();
                }
                '+' => self.step_quantity(1),
                '-' => self.step_quantity(-1),
                _ => {}
            },
            FormField::Price => {
                let accept = match c {
                    '0'..='9' => true,
                    '.' => !self.price_input.contains('.'),
                    '-' => self.price_input.is_empty(),
                    _ => false,
                };
                if accept {
                    self.price_input.push(c);
                    self.commit_price();
                }
            }
            FormField::Category => {}
        }
    }

    pub fn input_backspace(&mut self) {
        match self.field {
            FormField::Name => {
                let mut name = self.form_values().name.to_string();
                if name.pop().is_some() {
                    self.update_field(DraftField::Name(name));
                }
            }
            FormField::SuggestedBy => {
                let mut who = self.form_values().suggested_by.to_string();
                if who.pop().is_some() {
                    self.update_field(DraftField::SuggestedBy(who));
                }
            }
            FormField::Quantity => {
                if self.quantity_input.pop().is_some() {
                    self.commit_quantity();
                }
            }
            FormField::Price => {
                if self.price_input.pop().is_some() {
                    self.commit_price();
                }
            }
            FormField::Category => self.update_field(DraftField::Category(None)),
        }
    }

    /// Left/Right in the form.
    pub fn input_step(&mut self, forward: bool) {
        match self.field {
            FormField::Category => {
                let next = Category::cycle(self.form_values().category, forward);
                self.update_field(DraftField::Category(next));
            }
            FormField::Quantity => self.step_quantity(if forward { 1 } else { -1 }),
            _ => {}
        }
    }

    fn step_quantity(&mut self, delta: i64) {
        let (quantity, _) = self.form_numbers();
        self.update_field(DraftField::Quantity(i64::from(quantity) + delta));
        self.quantity_input = self.form_numbers().0.to_string();
    }

    /// Parse the quantity buffer and write the clamped value back. An empty
    /// buffer is left empty so a new number can be typed.
    fn commit_quantity(&mut self) {
        let typed = self.quantity_input.parse::<i64>().unwrap_or(0);
        self.update_field(DraftField::Quantity(typed));
        if !self.quantity_input.is_empty() {
            self.quantity_input = self.form_numbers().0.to_string();
        }
    }

    /// Parse the price buffer; anything unparsable counts as zero.
    fn commit_price(&mut self) {
        let price = self.price_input.parse::<Decimal>().unwrap_or(Decimal::ZERO);
        self.update_field(DraftField::Price(price));
    }
}
