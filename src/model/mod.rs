pub mod card;
pub mod label;
pub mod list;
pub mod status;
