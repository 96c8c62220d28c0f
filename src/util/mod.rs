pub mod dates;
pub mod seller;
