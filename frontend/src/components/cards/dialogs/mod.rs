pub mod card;
pub mod tale;
