//! Application state definitions

use super::forms::FormController;
use super::toast::Toasts;
use serde::{Deserialize, Serialize};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    TeacherCreate,
    StudentCreate,
    ClassroomCreate,
}

/// Entries on the home menu, in display order
pub const HOME_MENU: &[&str] = &[
    "Tambah Guru",
    "Tambah Siswa",
    "Tambah Kelas",
    "Hubungi Admin",
];

/// Class reference record used to populate selection fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOption {
    #[serde(rename = "id_kelas")]
    pub id: i64,
    #[serde(rename = "nama_kelas")]
    pub name: String,
}

impl ClassOption {
    /// Value stored in the form when this class is selected
    pub fn id_value(&self) -> String {
        self.id.to_string()
    }
}

/// Fetch-once class list with its loading flag.
///
/// The list is never mutated in place, only replaced wholesale by a refetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassOptions {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<ClassOption>),
    Failed,
}

impl ClassOptions {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded options, empty until the fetch completes
    pub fn options(&self) -> &[ClassOption] {
        match self {
            Self::Loaded(options) => options,
            _ => &[],
        }
    }

    /// Display name for a stored id value
    pub fn name_for(&self, id_value: &str) -> Option<&str> {
        self.options()
            .iter()
            .find(|c| c.id_value() == id_value)
            .map(|c| c.name.as_str())
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub current_view: View,
    /// Controller for the open form, if any
    pub form: Option<FormController>,
    pub class_options: ClassOptions,
    pub toasts: Toasts,
    /// Selected entry on the home menu
    pub home_index: usize,
}

impl AppState {
    /// Move home menu selection down
    pub fn home_menu_down(&mut self) {
        self.home_index = (self.home_index + 1) % HOME_MENU.len();
    }

    /// Move home menu selection up
    pub fn home_menu_up(&mut self) {
        if self.home_index == 0 {
            self.home_index = HOME_MENU.len() - 1;
        } else {
            self.home_index -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert!(state.form.is_none());
        assert_eq!(state.class_options, ClassOptions::NotLoaded);
    }

    #[test]
    fn test_home_menu_wraps_both_ways() {
        let mut state = AppState::default();
        state.home_menu_up();
        assert_eq!(state.home_index, HOME_MENU.len() - 1);
        state.home_menu_down();
        assert_eq!(state.home_index, 0);
    }

    #[test]
    fn test_class_option_id_value() {
        let option = ClassOption {
            id: 3,
            name: "XI IPS 2".to_string(),
        };
        assert_eq!(option.id_value(), "3");
    }

    #[test]
    fn test_class_options_lookup() {
        let options = ClassOptions::Loaded(vec![
            ClassOption {
                id: 1,
                name: "X IPA 1".to_string(),
            },
            ClassOption {
                id: 2,
                name: "X IPA 2".to_string(),
            },
        ]);
        assert_eq!(options.name_for("2"), Some("X IPA 2"));
        assert_eq!(options.name_for("9"), None);
        assert_eq!(options.options().len(), 2);
    }

    #[test]
    fn test_options_empty_until_loaded() {
        assert!(ClassOptions::NotLoaded.options().is_empty());
        assert!(ClassOptions::Loading.options().is_empty());
        assert!(ClassOptions::Failed.options().is_empty());
        assert!(ClassOptions::Loading.is_loading());
    }

    #[test]
    fn test_class_option_deserializes_backend_keys() {
        let json = r#"{"id_kelas":5,"nama_kelas":"XII IPA 1"}"#;
        let option: ClassOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.id, 5);
        assert_eq!(option.name, "XII IPA 1");
    }
}
