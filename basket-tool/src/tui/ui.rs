use basket_core::{Category, Decimal, Item, ViewMode, format_money};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::app::{BasketApp, Focus, FormField};

pub fn render(frame: &mut Frame, app: &BasketApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Alert
            Constraint::Length(1), // Total
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.list.view() {
        ViewMode::Active => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);
            render_items(frame, app, body[0]);
            render_form(frame, app, body[1]);
        }
        ViewMode::Archived => render_items(frame, app, chunks[1]),
    }

    render_alert(frame, app, chunks[2]);
    render_total(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn money(app: &BasketApp, amount: Decimal) -> String {
    format!("{}{}", app.currency, format_money(amount))
}

/// Like [`money`], for sums that may not fit in a `Decimal`.
fn sum(app: &BasketApp, amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => money(app, amount),
        None => "overflow".to_string(),
    }
}

fn render_header(frame: &mut Frame, app: &BasketApp, area: Rect) {
    let mode = match app.list.view() {
        ViewMode::Active => "shopping list",
        ViewMode::Archived => "archive",
    };
    let title = format!(
        "bsk - {}  [{} active, {} archived]",
        mode,
        app.list.active().len(),
        app.list.archived().len()
    );

    let header =
        Paragraph::new(title).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn item_card<'a>(app: &BasketApp, item: &'a Item, editing: bool) -> ListItem<'a> {
    let mut title = vec![Span::styled(
        item.name.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    title.push(Span::raw(format!(
        "  {} × {} = {}",
        item.quantity,
        money(app, item.price),
        sum(app, item.subtotal())
    )));
    if editing {
        title.push(Span::styled(
            "  (editing)",
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut details = format!("  {}", Category::display(item.category));
    if !item.suggested_by.is_empty() {
        details.push_str(&format!(" · suggested by {}", item.suggested_by));
    }

    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(details, Style::default().fg(Color::DarkGray))),
    ])
}

fn render_items(frame: &mut Frame, app: &BasketApp, area: Rect) {
    let items = app.list.visible();
    let (title, archived) = match app.list.view() {
        ViewMode::Active => ("Items", false),
        ViewMode::Archived => ("Archived (read-only)", true),
    };
    let editing_id = app.list.edit().editing_id();

    let cards: Vec<ListItem> = if items.is_empty() {
        let empty = if archived {
            "Nothing archived yet"
        } else {
            "Your list is empty. Press Tab to add an item."
        };
        vec![ListItem::new(Span::styled(
            empty,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        items
            .iter()
            .map(|item| item_card(app, item, !archived && Some(item.id) == editing_id))
            .collect()
    };

    let border = if app.focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(cards)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_form(frame: &mut Frame, app: &BasketApp, area: Rect) {
    let values = app.form_values();
    let title = if app.is_editing() { "Edit item" } else { "Add item" };
    let focused = app.focus == Focus::Form;

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let value = match field {
                FormField::Name => values.name.to_string(),
                FormField::Quantity => app.quantity_input.clone(),
                FormField::Price => {
                    if app.price_input.is_empty() {
                        "0.00".to_string()
                    } else {
                        app.price_input.clone()
                    }
                }
                FormField::Category => format!("< {} >", Category::display(values.category)),
                FormField::SuggestedBy => values.suggested_by.to_string(),
            };
            let style = if focused && field == app.field {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>13}: ", field.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(value, style),
            ])
        })
        .collect();

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );

    frame.render_widget(form, area);
}

fn render_alert(frame: &mut Frame, app: &BasketApp, area: Rect) {
    if let Some(message) = app.list.alert().message() {
        let alert = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(alert, area);
    }
}

fn render_total(frame: &mut Frame, app: &BasketApp, area: Rect) {
    let total = Paragraph::new(format!("Total: {}", sum(app, app.list.total())))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(total, area);
}

fn render_status_bar(frame: &mut Frame, app: &BasketApp, area: Rect) {
    let status = match (app.list.view(), app.focus) {
        (ViewMode::Archived, _) => "↑/↓: Navigate  v: Active list  q: Quit",
        (ViewMode::Active, Focus::List) => {
            "↑/↓: Navigate  e: Edit  a: Archive  Tab: Form  v: Archive view  q: Quit"
        }
        (ViewMode::Active, Focus::Form) if app.is_editing() => {
            "Tab/↑/↓: Field  ←/→: Change  Enter: Save  Esc: Cancel edit"
        }
        (ViewMode::Active, Focus::Form) => {
            "Tab/↑/↓: Field  ←/→: Change  Enter: Add  Esc: Back to list"
        }
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::Settings;

    fn app() -> BasketApp {
        BasketApp::new(&Settings {
            alert_window: Duration::from_secs(3),
            currency: "$".to_string(),
            log_file: None,
        })
    }

    fn screen(app: &BasketApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn add(app: &mut BasketApp, name: &str, price: &str) {
        app.focus_form();
        app.field = FormField::Name;
        for c in name.chars() {
            app.input_char(c);
        }
        app.field = FormField::Price;
        for c in price.chars() {
            app.input_char(c);
        }
        app.submit();
    }

    #[test]
    fn renders_items_form_and_total() {
        let mut app = app();
        add(&mut app, "Bread", "5");

        let text = screen(&app);
        assert!(text.contains("Bread"));
        assert!(text.contains("uncategorized"));
        assert!(text.contains("Add item"));
        assert!(text.contains("Total: $5.00"));
    }

    #[test]
    fn archived_view_hides_form() {
        let mut app = app();
        add(&mut app, "Bread", "5");
        app.focus = Focus::List;
        app.archive_selected();
        app.toggle_view();

        let text = screen(&app);
        assert!(text.contains("Archived (read-only)"));
        assert!(text.contains("Bread"));
        assert!(!text.contains("Add item"));
        assert!(text.contains("Total: $0.00"));
    }

    #[test]
    fn shows_alert_text() {
        let mut app = app();
        app.focus_form();
        app.submit();

        let text = screen(&app);
        assert!(text.contains("Item name cannot be empty"));
    }

    #[test]
    fn oversized_item_is_refused_without_breaking_render() {
        let mut app = app();
        app.focus_form();
        app.field = FormField::Quantity;
        app.input_backspace();
        for c in "4000000000".chars() {
            app.input_char(c);
        }
        add(&mut app, "Gold", "100000000000000000000");

        assert!(app.list.active().is_empty());
        let text = screen(&app);
        assert!(text.contains("Amount is too large"));
        assert!(text.contains("Total: $0.00"));
    }
}
