mod get_project_by_id;
mod get_projects;

pub use get_project_by_id::*;
pub use get_projects::*;
