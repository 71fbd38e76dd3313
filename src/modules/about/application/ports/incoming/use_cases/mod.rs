mod get_about_use_case;

pub use get_about_use_case::{GetAboutError, GetAboutUseCase};
