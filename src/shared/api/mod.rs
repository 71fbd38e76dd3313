mod fallback;
mod json_config;
mod response;

pub use fallback::not_found_handler;
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse, FieldError};
