//! CareVault — interactive Ratatui TUI
//!
//! Every key press becomes an `Action` dispatched to the application store;
//! the screen is redrawn from `Store::state()` on each loop iteration. A
//! `Tick` with the wall-clock time is dispatched every iteration so the
//! assistant's simulated typing delay elapses while the user is idle.
//!
//! Usage:
//!   cargo run -p carevault-tui
//!   cargo run -p carevault-tui -- path/to/rules.toml

mod ui;

use std::{io, path::Path, time::Duration};

use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use carevault_assistant::KeywordSelector;
use carevault_contracts::{
    error::CarevaultResult,
    navigation::{FeedbackTab, HospitalTab, Section},
};
use carevault_core::{Action, Store, StoreConfig};

/// Poll interval for key events; also the granularity of the typing delay.
const POLL_MS: u64 = 100;

// ── App state ─────────────────────────────────────────────────────────────────

/// Which text field, if any, is receiving typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editing {
    None,
    ChatDraft,
    ReportQuery,
}

pub struct App {
    pub store: Store,
    pub editing: Editing,
    /// Last rejected action, shown in the footer until the next key press.
    pub last_error: Option<String>,
    pub quit: bool,
}

/// What a key press asks for, before it reaches the store.
enum Command {
    Quit,
    Edit(Editing),
    Dispatch(Action),
    Nothing,
}

impl App {
    fn new(store: Store) -> Self {
        Self {
            store,
            editing: Editing::None,
            last_error: None,
            quit: false,
        }
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.store.dispatch(action) {
            self.last_error = Some(e.to_string());
        }
    }

    fn tick(&mut self, now: DateTime<Utc>) {
        self.dispatch(Action::Tick { now });
    }

    fn on_key(&mut self, key: KeyEvent, now: DateTime<Utc>) {
        self.last_error = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        let command = match self.editing {
            Editing::ChatDraft => self.chat_input_key(key, now),
            Editing::ReportQuery => self.query_input_key(key),
            Editing::None => self.command_key(key, now),
        };

        match command {
            Command::Quit => self.quit = true,
            Command::Edit(editing) => self.editing = editing,
            Command::Dispatch(action) => self.dispatch(action),
            Command::Nothing => {}
        }
    }

    fn chat_input_key(&self, key: KeyEvent, now: DateTime<Utc>) -> Command {
        let draft = &self.store.state().chat.draft;
        match key.code {
            KeyCode::Esc => Command::Edit(Editing::None),
            KeyCode::Enter => Command::Dispatch(Action::SubmitDraft { at: now }),
            KeyCode::Backspace => {
                let mut text = draft.clone();
                text.pop();
                Command::Dispatch(Action::EditDraft(text))
            }
            KeyCode::Char(c) if is_plain(key) => {
                Command::Dispatch(Action::EditDraft(format!("{}{}", draft, c)))
            }
            KeyCode::F(n) => quick_question(n, now),
            _ => Command::Nothing,
        }
    }

    fn query_input_key(&self, key: KeyEvent) -> Command {
        let query = &self.store.state().hospital.report_query;
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Command::Edit(Editing::None),
            KeyCode::Backspace => {
                let mut text = query.clone();
                text.pop();
                Command::Dispatch(Action::SetReportQuery(text))
            }
            KeyCode::Char(c) if is_plain(key) => {
                Command::Dispatch(Action::SetReportQuery(format!("{}{}", query, c)))
            }
            _ => Command::Nothing,
        }
    }

    fn command_key(&self, key: KeyEvent, now: DateTime<Utc>) -> Command {
        let state = self.store.state();

        // Global keys.
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Command::Quit,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                return Command::Dispatch(Action::Navigate(Section::ALL[index]));
            }
            _ => {}
        }

        match state.section {
            Section::Home => match key.code {
                KeyCode::Enter => Command::Dispatch(Action::GetStarted),
                KeyCode::Char('l') => Command::Dispatch(Action::LearnMore),
                _ => Command::Nothing,
            },

            Section::Hospital => match key.code {
                KeyCode::Tab => Command::Dispatch(Action::SelectHospitalTab(cycle(
                    &HospitalTab::ALL,
                    state.hospital.tab,
                ))),
                KeyCode::Char('/') if state.hospital.tab == HospitalTab::Reports => {
                    Command::Edit(Editing::ReportQuery)
                }
                KeyCode::Char('f') if state.hospital.tab == HospitalTab::Reports => {
                    Command::Dispatch(Action::SetReportFilter(state.hospital.report_filter.next()))
                }
                _ => Command::Nothing,
            },

            Section::Patient => match key.code {
                KeyCode::Char('m') if !state.patient.signed_in => {
                    Command::Dispatch(Action::SetLoginMethod(state.patient.login_method.toggled()))
                }
                KeyCode::Enter if !state.patient.signed_in => Command::Dispatch(Action::SignIn),
                KeyCode::Char('o') if state.patient.signed_in => Command::Dispatch(Action::SignOut),
                _ => Command::Nothing,
            },

            Section::Feedback => match key.code {
                KeyCode::Tab => Command::Dispatch(Action::SelectFeedbackTab(cycle(
                    &FeedbackTab::ALL,
                    state.feedback.tab,
                ))),
                KeyCode::Right if state.feedback.tab == FeedbackTab::Submit => {
                    Command::Dispatch(Action::Rate((state.feedback.rating + 1).min(5)))
                }
                KeyCode::Left if state.feedback.tab == FeedbackTab::Submit => {
                    Command::Dispatch(Action::Rate(state.feedback.rating.saturating_sub(1).max(1)))
                }
                KeyCode::Char('t') if state.feedback.tab == FeedbackTab::Submit => {
                    Command::Dispatch(Action::SetFeedbackType(state.feedback.feedback_type.next()))
                }
                _ => Command::Nothing,
            },

            Section::Chatbot => match key.code {
                KeyCode::Char('i') | KeyCode::Enter => Command::Edit(Editing::ChatDraft),
                KeyCode::Char('g') => Command::Dispatch(Action::SelectLanguage(state.chat.language.next())),
                KeyCode::Char('v') => Command::Dispatch(Action::ToggleListening),
                KeyCode::F(n) => quick_question(n, now),
                _ => Command::Nothing,
            },
        }
    }
}

/// True for keys typed without Ctrl or Alt held.
fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// F1 asks the first quick question, F2 the second, and so on.
fn quick_question(n: u8, now: DateTime<Utc>) -> Command {
    match usize::from(n).checked_sub(1) {
        Some(index) => Command::Dispatch(Action::AskQuickQuestion { index, at: now }),
        None => Command::Nothing,
    }
}

/// The element after `current` in `all`, wrapping around.
fn cycle<T: PartialEq + Copy>(all: &[T], current: T) -> T {
    let pos = all.iter().position(|t| *t == current).unwrap_or(0);
    all[(pos + 1) % all.len()]
}

fn build_store(rules: Option<&Path>) -> CarevaultResult<Store> {
    let selector = match rules {
        Some(path) => KeywordSelector::from_file(path)?,
        None => KeywordSelector::builtin(),
    };
    Ok(Store::new(Box::new(selector), StoreConfig::default(), Utc::now()))
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Load rules before touching the terminal so errors print normally.
    let rules = std::env::args().nth(1);
    let store = match build_store(rules.as_deref().map(Path::new)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("carevault-tui: {}", e);
            std::process::exit(1);
        }
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(store);

    while !app.quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key, Utc::now());
            }
        }

        app.tick(Utc::now());
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use carevault_contracts::{chat::Sender, portal::StatusFilter};

    fn app() -> (App, DateTime<Utc>) {
        let now = DateTime::parse_from_rfc3339("2026-01-01T09:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        let store = Store::new(Box::new(KeywordSelector::builtin()), StoreConfig::default(), now);
        (App::new(store), now)
    }

    fn press(app: &mut App, code: KeyCode, now: DateTime<Utc>) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut App, text: &str, now: DateTime<Utc>) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    #[test]
    fn number_keys_select_sections() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('3'), now);
        assert_eq!(app.store.state().section, Section::Patient);
        press(&mut app, KeyCode::Char('5'), now);
        assert_eq!(app.store.state().section, Section::Chatbot);
    }

    #[test]
    fn q_quits_outside_input_but_types_inside() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('5'), now);
        press(&mut app, KeyCode::Char('i'), now);
        type_text(&mut app, "q", now);
        assert!(!app.quit, "q inside the chat input must be typed, not quit");
        assert_eq!(app.store.state().chat.draft, "q");

        press(&mut app, KeyCode::Esc, now);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(app.quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let (mut app, now) = app();
        app.editing = Editing::ChatDraft;
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(app.quit);
    }

    #[test]
    fn modifier_chords_are_not_typed_into_inputs() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('5'), now);
        press(&mut app, KeyCode::Char('i'), now);
        type_text(&mut app, "hi", now);
        app.on_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL), now);
        app.on_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT), now);
        app.on_key(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT), now);
        assert_eq!(app.store.state().chat.draft, "hi!");

        press(&mut app, KeyCode::Esc, now);
        press(&mut app, KeyCode::Char('2'), now);
        app.dispatch(Action::SelectHospitalTab(HospitalTab::Reports));
        press(&mut app, KeyCode::Char('/'), now);
        type_text(&mut app, "ja", now);
        app.on_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), now);
        assert_eq!(app.store.state().hospital.report_query, "ja");
        assert!(!app.quit);
    }

    #[test]
    fn tab_cycles_hospital_tabs_and_wraps() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('2'), now);
        for _ in 0..HospitalTab::ALL.len() {
            press(&mut app, KeyCode::Tab, now);
        }
        assert_eq!(app.store.state().hospital.tab, HospitalTab::ALL[0]);
    }

    // ── Hospital search ───────────────────────────────────────────────────────

    #[test]
    fn report_search_edits_query_and_filter() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('2'), now);
        app.dispatch(Action::SelectHospitalTab(HospitalTab::Reports));

        press(&mut app, KeyCode::Char('/'), now);
        type_text(&mut app, "jane", now);
        press(&mut app, KeyCode::Backspace, now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.store.state().hospital.report_query, "jan");
        assert_eq!(app.editing, Editing::None);

        press(&mut app, KeyCode::Char('f'), now);
        assert_eq!(app.store.state().hospital.report_filter, StatusFilter::All.next());
    }

    // ── Feedback rating ───────────────────────────────────────────────────────

    #[test]
    fn arrows_adjust_rating_within_bounds() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('4'), now);
        for _ in 0..7 {
            press(&mut app, KeyCode::Right, now);
        }
        assert_eq!(app.store.state().feedback.rating, 5);
        for _ in 0..7 {
            press(&mut app, KeyCode::Left, now);
        }
        assert_eq!(app.store.state().feedback.rating, 1);
        assert!(app.last_error.is_none(), "clamped ratings never error");
    }

    // ── Assistant ─────────────────────────────────────────────────────────────

    #[test]
    fn typed_question_gets_reply_after_tick() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('5'), now);
        press(&mut app, KeyCode::Enter, now);
        type_text(&mut app, "ibuprofen dose?", now);
        press(&mut app, KeyCode::Enter, now);

        let chat = &app.store.state().chat;
        assert!(chat.draft.is_empty());
        assert!(chat.session.is_typing());

        app.tick(now + app.store.config().typing_delay());
        let last = app
            .store
            .state()
            .chat
            .session
            .conversation()
            .last()
            .cloned()
            .expect("reply delivered");
        assert_eq!(last.sender, Sender::Assistant);
        assert!(last.text.contains("Ibuprofen"), "got: {}", last.text);
    }

    #[test]
    fn unknown_quick_question_shows_error() {
        let (mut app, now) = app();
        press(&mut app, KeyCode::Char('5'), now);
        press(&mut app, KeyCode::F(9), now);
        assert!(app.last_error.is_some());

        press(&mut app, KeyCode::F(1), now);
        assert!(app.last_error.is_none(), "error clears on next key");
        assert!(app.store.state().chat.session.is_typing());
    }
}
