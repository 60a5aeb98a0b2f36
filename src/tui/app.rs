//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::display::currency::CurrencyFormat;
use crate::error::FinanceError;
use crate::models::MonthPeriod;
use crate::reports::{Dashboard, ResumeReport};
use crate::services::TransactionService;
use crate::storage::Storage;

use super::theme::Theme;
use super::views::register::RegisterForm;

/// The screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Resume,
    Register,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Resume, Route::Register];

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Listing",
            Self::Resume => "Summary",
            Self::Register => "Register",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Resume => 1,
            Self::Register => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Route bound to a number key (`1`, `2`, `3`)
    pub fn from_digit(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    pub theme: Theme,

    pub currency: CurrencyFormat,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently shown screen
    pub route: Route,

    /// Dashboard data, loaded when the dashboard gains focus
    pub dashboard: Option<Dashboard>,

    /// Summary data, loaded on focus and on month changes
    pub resume: Option<ResumeReport>,

    /// Month shown on the summary screen
    pub selected_month: MonthPeriod,

    /// Selected row in the history list
    pub selected_history_index: usize,

    pub register_form: RegisterForm,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create the app state and load the initial screen
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let mut app = Self {
            storage,
            settings,
            theme: Theme::from_name(settings.theme),
            currency: CurrencyFormat::for_locale(settings.locale),
            should_quit: false,
            route: Route::default(),
            dashboard: None,
            resume: None,
            selected_month: MonthPeriod::current(),
            selected_history_index: 0,
            register_form: RegisterForm::new(),
            status_message: None,
        };
        app.focus();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show a screen and reload its data
    pub fn switch_route(&mut self, route: Route) {
        self.route = route;
        self.focus();
    }

    /// Reload the data of the current screen from storage
    pub fn focus(&mut self) {
        debug!(route = ?self.route, "screen focused");
        match self.route {
            Route::Dashboard => self.reload_dashboard(),
            Route::Resume => self.reload_resume(),
            Route::Register => {}
        }
    }

    fn reload_dashboard(&mut self) {
        match Dashboard::generate(self.storage, &self.currency, &self.settings.date_format) {
            Ok(dashboard) => {
                let len = dashboard.history.len();
                self.selected_history_index = self.selected_history_index.min(len.saturating_sub(1));
                self.dashboard = Some(dashboard);
            }
            Err(e) => self.report_load_error(e),
        }
    }

    fn reload_resume(&mut self) {
        match ResumeReport::generate(self.storage, self.selected_month, self.currency) {
            Ok(report) => self.resume = Some(report),
            Err(e) => self.report_load_error(e),
        }
    }

    fn report_load_error(&mut self, error: FinanceError) {
        warn!(error = %error, "failed to load transactions");
        self.set_status(format!("Error: {}", error));
    }

    /// Step the summary one month back
    pub fn prev_month(&mut self) {
        self.selected_month = self.selected_month.prev();
        self.reload_resume();
    }

    /// Step the summary one month forward
    pub fn next_month(&mut self) {
        self.selected_month = self.selected_month.next();
        self.reload_resume();
    }

    fn history_len(&self) -> usize {
        self.dashboard.as_ref().map_or(0, |d| d.history.len())
    }

    pub fn move_up(&mut self) {
        self.selected_history_index = self.selected_history_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.history_len();
        if len > 0 && self.selected_history_index < len - 1 {
            self.selected_history_index += 1;
        }
    }

    /// Validate and store the register form, then go back to the dashboard
    pub fn submit_register(&mut self) {
        let service = TransactionService::new(self.storage);
        match service.register(self.register_form.to_input()) {
            Ok(txn) => {
                self.register_form.reset();
                self.set_status(format!("Registered '{}'", txn.name));
                self.switch_route(Route::Dashboard);
                self.selected_history_index = self.history_len().saturating_sub(1);
            }
            Err(FinanceError::Validation(message)) => {
                self.register_form.error = Some(message.clone());
                self.set_status(message);
            }
            Err(e) => {
                warn!(error = %e, "failed to register transaction");
                self.register_form.error = Some(e.to_string());
                self.set_status(format!("Error: {}", e));
            }
        }
    }
}
