pub mod browser;
pub mod dialogs;
