//! Project data structures and intake loading

mod data;
pub mod loader;

pub use data::Project;
pub use loader::{load_projects, load_projects_from_reader, load_projects_json};
