//! Application state and core logic

use crate::api::SchoolApi;
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{
    AppState, ClassOptions, FieldKind, FormController, FormSchema, Notifier, View,
    CLASSROOM_SCHEMA, STUDENT_SCHEMA, TEACHER_SCHEMA,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the school backend
    api: Box<dyn SchoolApi>,
    /// Admin contact link opened from the home view
    admin_contact: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Box<dyn SchoolApi>, config: &TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            api,
            admin_contact: config.admin_contact_url(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::TeacherCreate | View::StudentCreate | View::ClassroomCreate => {
                self.handle_form_key(key).await;
            }
        }
        Ok(())
    }

    /// Handle keys on the home menu
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.home_menu_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.home_menu_up(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Enter => self.activate_home_entry(),
            _ => {}
        }
    }

    fn activate_home_entry(&mut self) {
        match self.state.home_index {
            0 => self.open_form(View::TeacherCreate),
            1 => self.open_form(View::StudentCreate),
            2 => self.open_form(View::ClassroomCreate),
            3 => self.contact_admin(),
            _ => {}
        }
    }

    /// Open a create form. The class list is loaded lazily by
    /// [`Self::load_class_options`] on the next tick when the schema has a
    /// selection field.
    fn open_form(&mut self, view: View) {
        let schema: &'static FormSchema = match view {
            View::TeacherCreate => &TEACHER_SCHEMA,
            View::StudentCreate => &STUDENT_SCHEMA,
            View::ClassroomCreate => &CLASSROOM_SCHEMA,
            View::Home => return,
        };
        self.state.current_view = view;
        self.state.form = Some(FormController::new(schema));
        self.state.class_options = if schema.has_select() {
            ClassOptions::Loading
        } else {
            ClassOptions::NotLoaded
        };
    }

    /// Fetch the class list once per form session while the loading flag is up
    pub async fn load_class_options(&mut self) {
        if !self.state.class_options.is_loading() {
            return;
        }
        self.state.class_options = match self.api.list_classes().await {
            Ok(options) => ClassOptions::Loaded(options),
            Err(err) => {
                tracing::warn!("failed to load class list: {err}");
                ClassOptions::Failed
            }
        };
    }

    /// Open the administrative contact link in the system handler
    fn contact_admin(&mut self) {
        if let Err(err) = platform::open_url(&self.admin_contact) {
            tracing::warn!("failed to open admin contact: {err}");
            self.state
                .toasts
                .notify("Gagal membuka tautan admin", true);
        }
    }

    /// Handle keys in a create form view
    async fn handle_form_key(&mut self, key: KeyEvent) {
        if self.state.form.is_none() {
            self.state.current_view = View::Home;
            return;
        }
        let on_submit_row = self
            .state
            .form
            .as_ref()
            .is_some_and(|f| f.on_submit_row());

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
                return;
            }
            KeyCode::Enter if on_submit_row => {
                self.submit_form().await;
                return;
            }
            KeyCode::Esc => {
                self.close_form();
                return;
            }
            _ => {}
        }

        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match form.active_spec().map(|s| s.kind) {
                    Some(FieldKind::Enum(_)) => form.cycle_enum(forward),
                    Some(FieldKind::Select) => {
                        form.cycle_select(self.state.class_options.options(), forward);
                    }
                    _ => {}
                }
            }
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                form.input_char(ch);
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Submit the open form; success and failure land in the toast queue
    async fn submit_form(&mut self) {
        let AppState { form, toasts, .. } = &mut self.state;
        if let Some(form) = form.as_mut() {
            form.submit(self.api.as_ref(), toasts).await;
        }
    }

    /// Discard the open form and return home
    fn close_form(&mut self) {
        self.state.form = None;
        self.state.class_options = ClassOptions::NotLoaded;
        self.state.current_view = View::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockSchoolApi, RemoteError};
    use crate::state::{ClassOption, SubmitStatus};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn sample_classes() -> Vec<ClassOption> {
        vec![
            ClassOption {
                id: 1,
                name: "X IPA 1".to_string(),
            },
            ClassOption {
                id: 2,
                name: "X IPA 2".to_string(),
            },
        ]
    }

    fn app_with(api: MockSchoolApi) -> App {
        App::new(Box::new(api), &TuiConfig::default())
    }

    #[tokio::test]
    async fn test_enter_on_home_opens_teacher_form_and_flags_loading() {
        let mut app = app_with(MockSchoolApi::new());

        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.state.current_view, View::TeacherCreate);
        let form = app.state.form.as_ref().unwrap();
        assert_eq!(form.schema().title, "Tambah Data Guru");
        assert!(app.state.class_options.is_loading());
    }

    #[tokio::test]
    async fn test_class_options_loaded_once_per_form_session() {
        let mut api = MockSchoolApi::new();
        api.expect_list_classes()
            .times(1)
            .returning(|| Ok(sample_classes()));
        let mut app = app_with(api);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.load_class_options().await;
        assert_eq!(app.state.class_options.options().len(), 2);

        // Flag is down, a second tick must not refetch
        app.load_class_options().await;
    }

    #[tokio::test]
    async fn test_classroom_form_needs_no_class_list() {
        let mut api = MockSchoolApi::new();
        api.expect_list_classes().never();
        let mut app = app_with(api);

        app.state.home_index = 2;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.current_view, View::ClassroomCreate);
        assert!(!app.state.class_options.is_loading());
        app.load_class_options().await;
    }

    #[tokio::test]
    async fn test_failed_class_fetch_sets_failed_flag() {
        let mut api = MockSchoolApi::new();
        api.expect_list_classes()
            .times(1)
            .returning(|| Err(RemoteError::Transport("connection refused".to_string())));
        let mut app = app_with(api);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.load_class_options().await;
        assert_eq!(app.state.class_options, ClassOptions::Failed);
    }

    #[tokio::test]
    async fn test_typing_edits_active_field_and_tab_advances() {
        let mut app = app_with(MockSchoolApi::new());
        app.state.home_index = 2;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char('1'))).await.unwrap();

        let form = app.state.form.as_ref().unwrap();
        assert_eq!(form.value("nama_kelas"), Some("xi"));
        assert_eq!(form.value("tingkat"), Some("1"));
    }

    #[tokio::test]
    async fn test_arrows_cycle_select_field() {
        let mut api = MockSchoolApi::new();
        api.expect_list_classes()
            .times(1)
            .returning(|| Ok(sample_classes()));
        let mut app = app_with(api);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.load_class_options().await;

        // Focus id_kelas, the last declared teacher field
        for _ in 0..9 {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();

        let form = app.state.form.as_ref().unwrap();
        assert_eq!(form.value("id_kelas"), Some("2"));
    }

    #[tokio::test]
    async fn test_ctrl_s_on_invalid_form_makes_no_request() {
        let mut api = MockSchoolApi::new();
        api.expect_create().never();
        let mut app = app_with(api);

        app.state.home_index = 2;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.handle_key(ctrl('s')).await.unwrap();

        let form = app.state.form.as_ref().unwrap();
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.error("nama_kelas"), Some("Nama kelas wajib untuk diisi"));
        assert!(app.state.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_successful_submit_toasts_and_keeps_form_open() {
        let mut api = MockSchoolApi::new();
        api.expect_create()
            .times(1)
            .returning(|_, _| Ok(serde_json::json!({"id_kelas": 9})));
        let mut app = app_with(api);

        app.state.home_index = 2;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        for c in "XI IPS 2".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char('2'))).await.unwrap();
        app.handle_key(ctrl('s')).await.unwrap();

        assert_eq!(app.state.current_view, View::ClassroomCreate);
        let form = app.state.form.as_ref().unwrap();
        assert_eq!(form.status(), SubmitStatus::Succeeded);
        assert_eq!(app.state.toasts.len(), 1);
    }

    #[tokio::test]
    async fn test_enter_on_submit_row_submits() {
        let mut api = MockSchoolApi::new();
        api.expect_create()
            .times(1)
            .returning(|_, _| Ok(serde_json::json!({"id_kelas": 9})));
        let mut app = app_with(api);

        app.state.home_index = 2;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        for c in "XII".chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char('3'))).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        let form = app.state.form.as_ref().unwrap();
        assert_eq!(form.status(), SubmitStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_esc_discards_form_and_returns_home() {
        let mut app = app_with(MockSchoolApi::new());
        app.state.home_index = 2;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();

        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.state.current_view, View::Home);
        assert!(app.state.form.is_none());
        assert_eq!(app.state.class_options, ClassOptions::NotLoaded);
    }

    #[tokio::test]
    async fn test_q_on_home_quits() {
        let mut app = app_with(MockSchoolApi::new());
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }
}
