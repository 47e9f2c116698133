pub mod guard;
pub mod subject;

pub use guard::{require_edit, require_permission, require_view};
pub use subject::CurrentSubject;
