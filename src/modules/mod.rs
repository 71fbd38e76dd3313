pub mod about;
pub mod contact;
pub mod download;
pub mod project;
pub mod skill;
