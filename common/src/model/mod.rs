pub mod card;
pub mod record;
pub mod record_type;
pub mod schema;
pub mod tale;
