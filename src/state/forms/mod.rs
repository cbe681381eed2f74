//! Form schemas and the form controller

mod controller;
mod schema;

pub use controller::{FormController, SubmitStatus, SUBMIT_FAILURE, SUBMIT_SUCCESS};
pub use schema::{
    FieldKind, FieldRule, FieldSpec, FormSchema, Resource, CLASSROOM_SCHEMA, GENDER_OPTIONS,
    STUDENT_SCHEMA, TEACHER_SCHEMA,
};
