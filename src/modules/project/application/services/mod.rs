mod get_project_by_id_service;
mod get_projects_service;

pub use get_project_by_id_service::GetProjectByIdService;
pub use get_projects_service::GetProjectsService;
