mod about_query_postgres;
pub mod sea_orm_entity;

pub use about_query_postgres::AboutQueryPostgres;
