mod about_query;

pub use about_query::{AboutQuery, AboutQueryError};
