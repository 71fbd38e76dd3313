pub mod entities;
pub mod grouping;
