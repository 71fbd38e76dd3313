mod get_about_service;

pub use get_about_service::GetAboutService;
