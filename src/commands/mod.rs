pub mod list;
pub mod preset;
pub mod validate;

pub use list::execute_list;
pub use preset::{execute_preset, render_preset};
pub use validate::execute_validate;
