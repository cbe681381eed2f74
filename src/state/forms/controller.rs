//! Form controller: values, validation, and submission for one form instance

use super::schema::{FieldKind, FieldSpec, FormSchema};
use crate::api::{RemoteError, SchoolApi};
use crate::state::toast::Notifier;
use crate::state::ClassOption;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Success notification title
pub const SUBMIT_SUCCESS: &str = "Berhasil menyimpan perubahan";
/// Generic failure notification title, used when the backend gives no
/// structured message
pub const SUBMIT_FAILURE: &str = "Gagal menyimpan perubahan";

/// Submission status of a form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Owns one open form: the current value for every declared field, per-field
/// validation errors, and the submission status.
///
/// Validation runs on submit only, never on change. The value map always holds
/// exactly the keys the schema declares.
pub struct FormController {
    schema: &'static FormSchema,
    /// One value per schema field, same order
    values: Vec<String>,
    errors: BTreeMap<&'static str, &'static str>,
    status: SubmitStatus,
    /// Index of the focused field; `field_count()` is the submit button row
    active_field: usize,
}

impl FormController {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: vec![String::new(); schema.fields.len()],
            errors: BTreeMap::new(),
            status: SubmitStatus::Idle,
            active_field: 0,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Whether the submit affordance should be disabled
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Update the value for a declared field; undeclared names are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        match self.schema.fields.iter().position(|f| f.name == name) {
            Some(idx) => self.values[idx] = value.into(),
            None => tracing::warn!("set_field on undeclared field {name:?}"),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.schema
            .fields
            .iter()
            .position(|f| f.name == name)
            .map(|idx| self.values[idx].as_str())
    }

    /// Validation error currently shown for a field
    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).copied()
    }

    /// Evaluate every field against its rule; returns field -> message failures
    pub fn validate(&self) -> BTreeMap<&'static str, &'static str> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter_map(|(f, v)| f.rule.check(v).map(|msg| (f.name, msg)))
            .collect()
    }

    /// Current value map, exactly the declared schema keys
    pub fn payload(&self) -> Map<String, Value> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .map(|(f, v)| (f.name.to_string(), Value::String(v.clone())))
            .collect()
    }

    /// Validate and, when clean, send exactly one create request.
    ///
    /// Local failures stay inline per field and never reach the network.
    /// Remote failures land in the status and the notifier; the values are
    /// kept intact so the user can retry. No fault propagates out.
    pub async fn submit(&mut self, api: &dyn SchoolApi, notifier: &mut dyn Notifier) {
        // At most one outstanding mutation per form instance
        if self.is_submitting() {
            return;
        }

        let failures = self.validate();
        if !failures.is_empty() {
            self.errors = failures;
            self.status = SubmitStatus::Failed;
            return;
        }

        self.errors.clear();
        self.status = SubmitStatus::Submitting;

        match api.create(self.schema.resource, self.payload()).await {
            Ok(_) => {
                self.status = SubmitStatus::Succeeded;
                notifier.notify(SUBMIT_SUCCESS, false);
            }
            Err(RemoteError::Server(message)) => {
                self.status = SubmitStatus::Failed;
                notifier.notify(&message, true);
            }
            Err(err @ RemoteError::Transport(_)) => {
                tracing::warn!("submit to {} failed: {err}", self.schema.resource.path());
                self.status = SubmitStatus::Failed;
                notifier.notify(SUBMIT_FAILURE, true);
            }
        }
    }

    // --- field navigation and editing ---

    pub fn field_count(&self) -> usize {
        self.schema.fields.len()
    }

    pub fn active_field(&self) -> usize {
        self.active_field
    }

    /// True when focus is on the virtual submit button row
    pub fn on_submit_row(&self) -> bool {
        self.active_field == self.field_count()
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % (self.field_count() + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_field == 0 {
            self.active_field = self.field_count();
        } else {
            self.active_field -= 1;
        }
    }

    /// Spec of the focused field; `None` on the submit row
    pub fn active_spec(&self) -> Option<&'static FieldSpec> {
        self.schema.fields.get(self.active_field)
    }

    /// Append a character to the focused field. Enum and Select fields are
    /// cycled, not typed into.
    pub fn input_char(&mut self, c: char) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        match spec.kind {
            FieldKind::Enum(_) | FieldKind::Select => {}
            _ => self.values[self.active_field].push(c),
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        match spec.kind {
            FieldKind::Enum(_) | FieldKind::Select => {}
            _ => {
                self.values[self.active_field].pop();
            }
        }
    }

    /// Cycle the focused enum field through its allowed values
    pub fn cycle_enum(&mut self, forward: bool) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        let FieldKind::Enum(allowed) = spec.kind else {
            return;
        };
        if allowed.is_empty() {
            return;
        }
        let current = allowed
            .iter()
            .position(|v| *v == self.values[self.active_field]);
        let next = cycle_index(current, allowed.len(), forward);
        self.values[self.active_field] = allowed[next].to_string();
    }

    /// Cycle the focused select field through the loaded class options
    pub fn cycle_select(&mut self, options: &[ClassOption], forward: bool) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if spec.kind != FieldKind::Select || options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|c| c.id_value() == self.values[self.active_field]);
        let next = cycle_index(current, options.len(), forward);
        self.values[self.active_field] = options[next].id_value();
    }
}

fn cycle_index(current: Option<usize>, len: usize, forward: bool) -> usize {
    match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => {
            if i == 0 {
                len - 1
            } else {
                i - 1
            }
        }
    }
}
