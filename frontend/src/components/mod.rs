pub mod admin;
pub mod cards;
