use std::time::{Duration, Instant};

use arboard::Clipboard;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;

use crate::api::{ApiError, RestClient};
use crate::calendar::MonthCursor;
use crate::config::{self, ThemePreference};
use crate::export;
use crate::models::{Customer, CustomerFields, Links, Training, TrainingFields};
use crate::stats::{self, ActivitySummary, StatsTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Customers,
    Trainings,
    Calendar,
    Stats,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Customers => "Customers",
            View::Trainings => "Trainings",
            View::Calendar => "Calendar",
            View::Stats => "Statistics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Loading,
    Browse,
    CustomerForm,
    TrainingForm,
    ConfirmDeleteCustomer,
    ConfirmDeleteTraining,
    ConfirmReset,
    FilterInput,
    Error,
}

pub const CUSTOMER_FIELD_LABELS: [&str; 7] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Street Address",
    "Postcode",
    "City",
];

#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub values: [String; 7],
    pub focus: usize,
    pub editing: Option<Links>,
}

impl CustomerForm {
    pub fn for_edit(customer: &Customer) -> Self {
        let data = &customer.data;
        Self {
            values: [
                data.firstname.clone(),
                data.lastname.clone(),
                data.email.clone(),
                data.phone.clone(),
                data.streetaddress.clone(),
                data.postcode.clone(),
                data.city.clone(),
            ],
            focus: 0,
            editing: Some(customer.links.clone()),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Customer"
        } else {
            "Add Customer"
        }
    }

    pub fn to_fields(&self) -> Result<CustomerFields, String> {
        let [firstname, lastname, email, phone, streetaddress, postcode, city] =
            self.values.clone();
        if firstname.trim().is_empty() || lastname.trim().is_empty() {
            return Err("First and last name are required.".to_string());
        }
        Ok(CustomerFields {
            firstname: firstname.trim().to_string(),
            lastname: lastname.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            streetaddress: streetaddress.trim().to_string(),
            postcode: postcode.trim().to_string(),
            city: city.trim().to_string(),
        })
    }
}

pub const TRAINING_FIELD_LABELS: [&str; 3] = ["Date and Time", "Activity", "Duration (minutes)"];

#[derive(Debug, Clone)]
pub struct TrainingForm {
    pub customer_name: String,
    pub customer_links: Links,
    pub values: [String; 3],
    pub focus: usize,
}

impl TrainingForm {
    pub fn for_customer(customer: &Customer) -> Self {
        let default_date = Local::now().format("%Y-%m-%d %H:%M").to_string();
        Self {
            customer_name: customer.data.full_name(),
            customer_links: customer.links.clone(),
            values: [default_date, String::new(), String::new()],
            focus: 0,
        }
    }

    pub fn to_fields(&self) -> Result<TrainingFields, String> {
        let date = NaiveDateTime::parse_from_str(self.values[0].trim(), "%Y-%m-%d %H:%M")
            .map_err(|_| "Invalid date. Use YYYY-MM-DD HH:MM.".to_string())?;
        let date = Local
            .from_local_datetime(&date)
            .earliest()
            .ok_or_else(|| "Invalid local date.".to_string())?;
        let activity = self.values[1].trim().to_string();
        if activity.is_empty() {
            return Err("Activity is required.".to_string());
        }
        let duration: i64 = self.values[2]
            .trim()
            .parse()
            .map_err(|_| "Duration must be a whole number of minutes.".to_string())?;
        if duration <= 0 {
            return Err("Duration must be greater than zero.".to_string());
        }
        Ok(TrainingFields {
            date,
            duration,
            activity,
        })
    }
}

pub struct App {
    pub should_quit: bool,
    pub needs_refresh: bool,
    pub mode: Mode,
    pub view: View,
    pub status: Option<String>,
    pub client: RestClient,
    pub customers: Vec<Customer>,
    pub trainings: Vec<Training>,
    pub summaries: Vec<ActivitySummary>,
    pub stat_totals: StatsTotals,
    pub filter: String,
    pub filter_input: String,
    pub customer_state: TableState,
    pub training_state: TableState,
    pub month: MonthCursor,
    pub selected_day: NaiveDate,
    pub customer_form: Option<CustomerForm>,
    pub training_form: Option<TrainingForm>,
    pub pending_customer_delete: Option<Customer>,
    pub pending_training_delete: Option<Training>,
    pub show_help: bool,
    pub theme: ThemePreference,
    toast: Option<Toast>,
    loaded_once: bool,
}

impl App {
    pub fn new(client: RestClient) -> Self {
        let mut customer_state = TableState::default();
        customer_state.select(Some(0));
        let mut training_state = TableState::default();
        training_state.select(Some(0));

        App {
            should_quit: false,
            needs_refresh: true,
            mode: Mode::Loading,
            view: View::Customers,
            status: None,
            client,
            customers: Vec::new(),
            trainings: Vec::new(),
            summaries: Vec::new(),
            stat_totals: StatsTotals::default(),
            filter: String::new(),
            filter_input: String::new(),
            customer_state,
            training_state,
            month: MonthCursor::current(),
            selected_day: Local::now().date_naive(),
            customer_form: None,
            training_form: None,
            pending_customer_delete: None,
            pending_training_delete: None,
            show_help: false,
            theme: config::read_theme(),
            toast: None,
            loaded_once: false,
        }
    }

    /// Refetches both collections and recomputes the dashboard. Called on
    /// startup and after every mutation; view state is only replaced once
    /// both fetches succeed.
    pub fn refresh_data(&mut self) {
        self.needs_refresh = false;

        let customers = match self.client.list_customers() {
            Ok(customers) => customers,
            Err(err) => {
                self.handle_fetch_error(err);
                return;
            }
        };
        let trainings = match self.client.list_trainings() {
            Ok(trainings) => trainings,
            Err(err) => {
                self.handle_fetch_error(err);
                return;
            }
        };

        self.summaries = stats::summarize_activities(&trainings);
        self.stat_totals = stats::totals(&self.summaries);
        self.customers = customers;
        self.trainings = trainings;
        self.loaded_once = true;
        self.clamp_selections();
        if self.mode == Mode::Loading || self.mode == Mode::Error {
            self.mode = Mode::Browse;
        }
    }

    fn handle_fetch_error(&mut self, err: ApiError) {
        let message = err.message();
        if self.loaded_once {
            self.set_toast(format!("Refresh failed: {message}"), true);
            if self.mode == Mode::Loading {
                self.mode = Mode::Browse;
            }
        } else {
            self.mode = Mode::Error;
            self.status = Some(message);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.show_help {
            match key.code {
                KeyCode::Char('h') | KeyCode::Esc | KeyCode::Char('q') => self.show_help = false,
                _ => {}
            }
            return;
        }

        match self.mode {
            Mode::Browse | Mode::Loading => self.handle_browse_input(key),
            Mode::Error => self.handle_error_input(key),
            Mode::CustomerForm => self.handle_customer_form_input(key),
            Mode::TrainingForm => self.handle_training_form_input(key),
            Mode::ConfirmDeleteCustomer => self.handle_confirm_customer_delete(key),
            Mode::ConfirmDeleteTraining => self.handle_confirm_training_delete(key),
            Mode::ConfirmReset => self.handle_confirm_reset(key),
            Mode::FilterInput => self.handle_filter_input(key),
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('h') => self.show_help = true,
            KeyCode::Char('r') => self.trigger_refresh(),
            KeyCode::Char('1') => self.view = View::Customers,
            KeyCode::Char('2') => self.view = View::Trainings,
            KeyCode::Char('3') => self.view = View::Calendar,
            KeyCode::Char('4') => self.view = View::Stats,
            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.previous_view(),
            KeyCode::Char('c') => self.cycle_theme(),
            KeyCode::Char('R') => self.mode = Mode::ConfirmReset,
            KeyCode::Char('/') if self.filter_applies() => {
                self.filter_input = self.filter.clone();
                self.mode = Mode::FilterInput;
            }
            KeyCode::Esc if !self.filter.is_empty() => {
                self.filter.clear();
                self.clamp_selections();
            }
            _ => match self.view {
                View::Customers => self.handle_customer_view_input(key),
                View::Trainings => self.handle_training_view_input(key),
                View::Calendar => self.handle_calendar_input(key),
                View::Stats => {}
            },
        }
    }

    fn handle_error_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.trigger_refresh(),
            _ => {}
        }
    }

    fn handle_customer_view_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                let len = self.visible_customers().len();
                select_previous(&mut self.customer_state, len);
            }
            KeyCode::Down => {
                let len = self.visible_customers().len();
                select_next(&mut self.customer_state, len);
            }
            KeyCode::Char('a') => {
                self.customer_form = Some(CustomerForm::default());
                self.mode = Mode::CustomerForm;
            }
            KeyCode::Char('e') => {
                if let Some(customer) = self.selected_customer().cloned() {
                    self.customer_form = Some(CustomerForm::for_edit(&customer));
                    self.mode = Mode::CustomerForm;
                }
            }
            KeyCode::Char('d') => {
                if let Some(customer) = self.selected_customer().cloned() {
                    self.pending_customer_delete = Some(customer);
                    self.mode = Mode::ConfirmDeleteCustomer;
                }
            }
            KeyCode::Char('t') => {
                if let Some(customer) = self.selected_customer().cloned() {
                    self.training_form = Some(TrainingForm::for_customer(&customer));
                    self.mode = Mode::TrainingForm;
                }
            }
            KeyCode::Char('x') => self.export_csv_file(),
            KeyCode::Char('y') => self.copy_csv_to_clipboard(),
            _ => {}
        }
    }

    fn handle_training_view_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                let len = self.visible_trainings().len();
                select_previous(&mut self.training_state, len);
            }
            KeyCode::Down => {
                let len = self.visible_trainings().len();
                select_next(&mut self.training_state, len);
            }
            KeyCode::Char('d') => {
                if let Some(training) = self.selected_training().cloned() {
                    self.pending_training_delete = Some(training);
                    self.mode = Mode::ConfirmDeleteTraining;
                }
            }
            _ => {}
        }
    }

    fn handle_calendar_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.move_selected_day(-1),
            KeyCode::Right => self.move_selected_day(1),
            KeyCode::Up => self.move_selected_day(-7),
            KeyCode::Down => self.move_selected_day(7),
            KeyCode::Char('n') | KeyCode::PageDown => {
                self.month = self.month.next();
                self.snap_day_into_month();
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                self.month = self.month.previous();
                self.snap_day_into_month();
            }
            KeyCode::Char('t') => {
                self.selected_day = Local::now().date_naive();
                self.month = MonthCursor::current();
            }
            _ => {}
        }
    }

    fn handle_customer_form_input(&mut self, key: KeyEvent) {
        let Some(form) = self.customer_form.as_mut() else {
            self.mode = Mode::Browse;
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.customer_form = None;
                self.mode = Mode::Browse;
                self.status = None;
            }
            KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % form.values.len(),
            KeyCode::BackTab | KeyCode::Up => {
                form.focus = (form.focus + form.values.len() - 1) % form.values.len()
            }
            KeyCode::Backspace => {
                form.values[form.focus].pop();
            }
            KeyCode::Enter => self.save_customer_form(),
            KeyCode::Char(ch) if !ch.is_control() => form.values[form.focus].push(ch),
            _ => {}
        }
    }

    fn handle_training_form_input(&mut self, key: KeyEvent) {
        let Some(form) = self.training_form.as_mut() else {
            self.mode = Mode::Browse;
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.training_form = None;
                self.mode = Mode::Browse;
                self.status = None;
            }
            KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % form.values.len(),
            KeyCode::BackTab | KeyCode::Up => {
                form.focus = (form.focus + form.values.len() - 1) % form.values.len()
            }
            KeyCode::Backspace => {
                form.values[form.focus].pop();
            }
            KeyCode::Enter => self.save_training_form(),
            KeyCode::Char(ch) if !ch.is_control() => form.values[form.focus].push(ch),
            _ => {}
        }
    }

    fn handle_confirm_customer_delete(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.delete_pending_customer(),
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_customer_delete = None;
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    fn handle_confirm_training_delete(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.delete_pending_training(),
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_training_delete = None;
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    fn handle_confirm_reset(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => self.perform_reset(),
            KeyCode::Char('n') | KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Browse,
            _ => {}
        }
    }

    fn handle_filter_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.filter = self.filter_input.trim().to_string();
                self.filter_input.clear();
                self.mode = Mode::Browse;
                self.clamp_selections();
            }
            KeyCode::Esc => {
                self.filter_input.clear();
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.filter_input.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => self.filter_input.push(ch),
            _ => {}
        }
    }

    fn save_customer_form(&mut self) {
        let Some(form) = self.customer_form.as_ref() else {
            return;
        };
        let fields = match form.to_fields() {
            Ok(fields) => fields,
            Err(message) => {
                self.status = Some(message);
                return;
            }
        };
        let result = match form.editing.as_ref() {
            Some(links) => self
                .client
                .update_customer(&fields, links)
                .map(|_| "Customer updated."),
            None => self
                .client
                .create_customer(&fields)
                .map(|_| "Customer added."),
        };
        match result {
            Ok(message) => {
                self.customer_form = None;
                self.status = None;
                self.set_toast(message, false);
                self.trigger_refresh();
            }
            Err(err) => self.status = Some(err.message()),
        }
    }

    fn save_training_form(&mut self) {
        let Some(form) = self.training_form.as_ref() else {
            return;
        };
        let fields = match form.to_fields() {
            Ok(fields) => fields,
            Err(message) => {
                self.status = Some(message);
                return;
            }
        };
        match self.client.create_training(&fields, &form.customer_links) {
            Ok(_) => {
                self.training_form = None;
                self.status = None;
                self.set_toast("Training added.", false);
                self.trigger_refresh();
            }
            Err(err) => self.status = Some(err.message()),
        }
    }

    fn delete_pending_customer(&mut self) {
        let Some(customer) = self.pending_customer_delete.take() else {
            self.mode = Mode::Browse;
            return;
        };
        match self.client.delete_customer(&customer.links) {
            Ok(()) => {
                self.set_toast("Customer deleted.", false);
                self.trigger_refresh();
            }
            Err(err) => {
                self.mode = Mode::Browse;
                self.set_toast(err.message(), true);
            }
        }
    }

    fn delete_pending_training(&mut self) {
        let Some(training) = self.pending_training_delete.take() else {
            self.mode = Mode::Browse;
            return;
        };
        match self.client.delete_training(training.id) {
            Ok(()) => {
                self.set_toast("Training deleted.", false);
                self.trigger_refresh();
            }
            Err(err) => {
                self.mode = Mode::Browse;
                self.set_toast(err.message(), true);
            }
        }
    }

    fn perform_reset(&mut self) {
        match self.client.reset_database() {
            Ok(()) => {
                self.set_toast("Database reset.", false);
                self.trigger_refresh();
            }
            Err(err) => {
                self.mode = Mode::Browse;
                self.set_toast(err.message(), true);
            }
        }
    }

    fn export_csv_file(&mut self) {
        if self.customers.is_empty() {
            self.set_toast("No customers to export.", true);
            return;
        }
        let fields: Vec<CustomerFields> = self
            .customers
            .iter()
            .map(|customer| customer.data.clone())
            .collect();
        match export::write_csv_export(&fields, None) {
            Ok(path) => self.set_toast(format!("Exported {}", path.display()), false),
            Err(err) => self.set_toast(format!("Export failed: {err}"), true),
        }
    }

    fn copy_csv_to_clipboard(&mut self) {
        if self.customers.is_empty() {
            self.set_toast("No customers to copy.", true);
            return;
        }
        let fields: Vec<CustomerFields> = self
            .customers
            .iter()
            .map(|customer| customer.data.clone())
            .collect();
        let text = export::customers_to_csv(&fields);
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.set_toast("Copied CSV to clipboard.", false),
            Err(err) => self.set_toast(format!("Clipboard error: {err}"), true),
        }
    }

    fn cycle_theme(&mut self) {
        self.theme = match self.theme {
            ThemePreference::Terminal => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Terminal,
        };
        if let Err(err) = config::write_theme(self.theme) {
            self.set_toast(format!("Failed to save theme: {err}"), true);
        }
    }

    pub fn visible_customers(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|customer| customer_matches(&customer.data, &self.filter))
            .collect()
    }

    pub fn visible_trainings(&self) -> Vec<&Training> {
        self.trainings
            .iter()
            .filter(|training| training_matches(training, &self.filter))
            .collect()
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        let visible = self.visible_customers();
        self.customer_state
            .selected()
            .and_then(|index| visible.get(index).copied())
    }

    pub fn selected_training(&self) -> Option<&Training> {
        let visible = self.visible_trainings();
        self.training_state
            .selected()
            .and_then(|index| visible.get(index).copied())
    }

    fn filter_applies(&self) -> bool {
        matches!(self.view, View::Customers | View::Trainings)
    }

    fn next_view(&mut self) {
        self.view = match self.view {
            View::Customers => View::Trainings,
            View::Trainings => View::Calendar,
            View::Calendar => View::Stats,
            View::Stats => View::Customers,
        };
    }

    fn previous_view(&mut self) {
        self.view = match self.view {
            View::Customers => View::Stats,
            View::Trainings => View::Customers,
            View::Calendar => View::Trainings,
            View::Stats => View::Calendar,
        };
    }

    fn move_selected_day(&mut self, days: i64) {
        self.selected_day = self.selected_day + chrono::Duration::days(days);
        if !self.month.contains(self.selected_day) {
            self.month = MonthCursor {
                year: self.selected_day.year(),
                month: self.selected_day.month(),
            };
        }
    }

    fn snap_day_into_month(&mut self) {
        if !self.month.contains(self.selected_day) {
            self.selected_day = self.month.first_day();
        }
    }

    fn trigger_refresh(&mut self) {
        self.mode = Mode::Loading;
        self.needs_refresh = true;
    }

    fn clamp_selections(&mut self) {
        let customers = self.visible_customers().len();
        let trainings = self.visible_trainings().len();
        clamp(&mut self.customer_state, customers);
        clamp(&mut self.training_state, trainings);
    }

    pub fn active_toast(&mut self) -> Option<ToastView> {
        let toast = self.toast.as_ref()?;
        if toast.created_at.elapsed() > Duration::from_millis(2500) {
            self.toast = None;
            return None;
        }
        Some(ToastView {
            message: toast.message.clone(),
            is_error: toast.is_error,
        })
    }

    fn set_toast(&mut self, message: impl Into<String>, is_error: bool) {
        self.toast = Some(Toast {
            message: message.into(),
            created_at: Instant::now(),
            is_error,
        });
    }
}

fn customer_matches(fields: &CustomerFields, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    [
        &fields.firstname,
        &fields.lastname,
        &fields.email,
        &fields.phone,
        &fields.streetaddress,
        &fields.postcode,
        &fields.city,
    ]
    .iter()
    .any(|value| value.to_lowercase().contains(&needle))
}

fn training_matches(training: &Training, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    training.activity.to_lowercase().contains(&needle)
        || training.customer_name().to_lowercase().contains(&needle)
        || training.date.contains(&needle)
}

fn select_previous(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let selected = state.selected().unwrap_or(0);
    let new_index = if selected == 0 { len - 1 } else { selected - 1 };
    state.select(Some(new_index));
}

fn select_next(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let selected = state.selected().unwrap_or(0);
    let new_index = if selected + 1 >= len { 0 } else { selected + 1 };
    state.select(Some(new_index));
}

fn clamp(state: &mut TableState, len: usize) {
    match state.selected() {
        Some(selected) if len > 0 && selected >= len => state.select(Some(len - 1)),
        None if len > 0 => state.select(Some(0)),
        _ => {}
    }
}

struct Toast {
    message: String,
    created_at: Instant,
    is_error: bool,
}

pub struct ToastView {
    pub message: String,
    pub is_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first: &str, last: &str, city: &str) -> CustomerFields {
        CustomerFields {
            firstname: first.to_string(),
            lastname: last.to_string(),
            city: city.to_string(),
            ..CustomerFields::default()
        }
    }

    #[test]
    fn filter_matches_any_string_field() {
        let fields = customer("Jane", "Doe", "Espoo");
        assert!(customer_matches(&fields, ""));
        assert!(customer_matches(&fields, "jane"));
        assert!(customer_matches(&fields, "ESP"));
        assert!(!customer_matches(&fields, "helsinki"));
    }

    #[test]
    fn training_filter_matches_activity_and_customer() {
        let training = Training {
            id: 1,
            date: "2026-08-01T10:00:00.000+00:00".to_string(),
            duration: 30,
            activity: "Spinning".to_string(),
            customer: Some(customer("Jane", "Doe", "Espoo")),
        };
        assert!(training_matches(&training, "spin"));
        assert!(training_matches(&training, "doe"));
        assert!(!training_matches(&training, "yoga"));
    }

    #[test]
    fn customer_form_requires_names() {
        let form = CustomerForm::default();
        assert!(form.to_fields().is_err());

        let mut form = CustomerForm::default();
        form.values[0] = "Jane".to_string();
        form.values[1] = "Doe".to_string();
        let fields = form.to_fields().unwrap();
        assert_eq!(fields.firstname, "Jane");
        assert_eq!(fields.email, "");
    }

    #[test]
    fn training_form_validates_duration_and_date() {
        let mut form = TrainingForm {
            customer_name: "Jane Doe".to_string(),
            customer_links: Links::default(),
            values: [
                "2026-08-01 10:30".to_string(),
                "Yoga".to_string(),
                "60".to_string(),
            ],
            focus: 0,
        };
        let fields = form.to_fields().unwrap();
        assert_eq!(fields.duration, 60);
        assert_eq!(fields.activity, "Yoga");

        form.values[2] = "0".to_string();
        assert!(form.to_fields().is_err());
        form.values[2] = "abc".to_string();
        assert!(form.to_fields().is_err());
        form.values[2] = "45".to_string();
        form.values[0] = "01.08.2026".to_string();
        assert!(form.to_fields().is_err());
        form.values[0] = "2026-08-01 10:30".to_string();
        form.values[1] = "  ".to_string();
        assert!(form.to_fields().is_err());
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = TableState::default();
        state.select(Some(0));
        select_previous(&mut state, 3);
        assert_eq!(state.selected(), Some(2));
        select_next(&mut state, 3);
        assert_eq!(state.selected(), Some(0));
        state.select(Some(5));
        clamp(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
    }
}
