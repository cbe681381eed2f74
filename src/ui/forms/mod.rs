//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `create_page`: Schema-driven create page shared by all forms

mod create_page;
mod field_renderer;

pub use create_page::draw_create;
