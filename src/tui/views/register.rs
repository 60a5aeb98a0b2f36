//! Register view
//!
//! The form for recording a new transaction: name, amount, a type toggle
//! and a category picked from a modal list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Category, TransactionType};
use crate::services::RegisterInput;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::theme::Theme;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the register form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Amount,
    Type,
    Category,
}

impl RegisterField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Type,
            Self::Type => Self::Category,
            Self::Category => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Amount => Self::Name,
            Self::Type => Self::Amount,
            Self::Category => Self::Type,
        }
    }
}

/// State for the register form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub focused_field: RegisterField,
    pub name: TextInput,
    pub amount: TextInput,
    pub kind: Option<TransactionType>,
    pub category: Option<&'static Category>,
    /// Highlighted row while the category picker is open
    pub category_picker: Option<usize>,
    /// Last validation message
    pub error: Option<String>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterForm {
    pub fn new() -> Self {
        let mut form = Self {
            focused_field: RegisterField::Name,
            name: TextInput::new().label("Name").placeholder("e.g. Pizza"),
            amount: TextInput::new().label("Amount").placeholder("0,00"),
            kind: None,
            category: None,
            category_picker: None,
            error: None,
        };
        form.set_focus(RegisterField::Name);
        form
    }

    /// Move focus and keep the input widgets' focus flags in sync
    pub fn set_focus(&mut self, field: RegisterField) {
        self.focused_field = field;
        self.name.focused = field == RegisterField::Name;
        self.amount.focused = field == RegisterField::Amount;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// The text input under focus, if the focused field is a text field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            RegisterField::Name => Some(&mut self.name),
            RegisterField::Amount => Some(&mut self.amount),
            RegisterField::Type | RegisterField::Category => None,
        }
    }

    pub fn select_kind(&mut self, kind: TransactionType) {
        self.kind = Some(kind);
    }

    /// Flip between income and outcome, starting with income
    pub fn toggle_kind(&mut self) {
        self.kind = Some(match self.kind {
            Some(TransactionType::Positive) => TransactionType::Negative,
            _ => TransactionType::Positive,
        });
    }

    pub fn is_picking_category(&self) -> bool {
        self.category_picker.is_some()
    }

    /// Open the picker on the current category (or the first one)
    pub fn open_category_picker(&mut self) {
        let index = self
            .category
            .and_then(|c| Category::index_of(c.key))
            .unwrap_or(0);
        self.category_picker = Some(index);
    }

    pub fn close_category_picker(&mut self) {
        self.category_picker = None;
    }

    pub fn picker_down(&mut self) {
        if let Some(index) = self.category_picker {
            self.category_picker = Some((index + 1).min(Category::all().len() - 1));
        }
    }

    pub fn picker_up(&mut self) {
        if let Some(index) = self.category_picker {
            self.category_picker = Some(index.saturating_sub(1));
        }
    }

    /// Take the highlighted row as the category and close the picker
    pub fn confirm_category(&mut self) {
        if let Some(index) = self.category_picker.take() {
            self.category = Category::all().get(index);
        }
    }

    /// Collect the form values for the service layer
    pub fn to_input(&self) -> RegisterInput {
        RegisterInput {
            name: self.name.value().to_string(),
            amount: self.amount.value().to_string(),
            kind: self.kind,
            category: self.category.map(|c| c.key.to_string()),
        }
    }

    /// Back to an empty form with the name field focused
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Render the register view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let form = &app.register_form;

    let block = Block::default()
        .title(" Register ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Name
            Constraint::Length(2), // Amount
            Constraint::Length(2), // Type
            Constraint::Length(2), // Category
            Constraint::Length(2), // Error
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let name = form.name.clone().accent(theme.primary);
    frame.render_widget(&name, rows[0]);
    let amount = form.amount.clone().accent(theme.primary);
    frame.render_widget(&amount, rows[1]);

    frame.render_widget(
        Paragraph::new(type_line(form, theme)),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(category_line(form, theme)),
        rows[3],
    );

    if let Some(ref error) = form.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(theme.attention)),
            rows[4],
        );
    }

    let hints = "Tab/Shift+Tab: field  ←/→: type  Ctrl+U: clear  Enter: choose category / send  Esc: back";
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.muted)),
        rows[5],
    );

    if form.is_picking_category() {
        render_category_picker(frame, form, theme, area);
    }
}

fn field_label<'a>(text: &'a str, focused: bool, theme: &Theme) -> Span<'a> {
    let style = if focused {
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary)
    };
    Span::styled(text, style)
}

fn type_line<'a>(form: &RegisterForm, theme: &Theme) -> Line<'a> {
    let focused = form.focused_field == RegisterField::Type;
    let button = |kind: TransactionType, text: &'a str| {
        let color = theme.amount_color(kind);
        let style = if form.kind == Some(kind) {
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(color)
        };
        Span::styled(text, style)
    };

    Line::from(vec![
        field_label("Type", focused, theme),
        Span::raw(": "),
        button(TransactionType::Positive, " ↑ Income "),
        Span::raw("  "),
        button(TransactionType::Negative, " ↓ Outcome "),
    ])
}

fn category_line<'a>(form: &RegisterForm, theme: &Theme) -> Line<'a> {
    let focused = form.focused_field == RegisterField::Category;
    let value = match form.category {
        Some(category) => Span::styled(
            format!("{} ▾", category.name),
            Style::default().fg(theme.category_color(category.key)),
        ),
        None => Span::styled("Category ▾", Style::default().fg(theme.muted)),
    };

    Line::from(vec![
        field_label("Category", focused, theme),
        Span::raw(": "),
        value,
    ])
}

fn render_category_picker(frame: &mut Frame, form: &RegisterForm, theme: &Theme, area: Rect) {
    let popup = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = Category::all()
        .iter()
        .map(|category| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.category_color(category.key))),
                Span::raw(category.name),
                Span::styled(
                    format!("  ({})", category.icon),
                    Style::default().fg(theme.muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Category ")
                .title_style(theme.title_style())
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(form.category_picker);
    frame.render_stateful_widget(list, popup, &mut state);
}
