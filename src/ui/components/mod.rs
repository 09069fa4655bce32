//! Reusable UI Components
//!
//! - `InputField` - Composer with placeholder and inline hint
//! - `StatCard` - Icon, title and value card
//! - `Toast` - Transient bottom-right notification

mod input_field;
mod stat_card;
mod toast;

pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use stat_card::render_stat_card;
pub use toast::{render_toast, toast_area};
