pub mod dates;
pub mod error;
pub mod lists;
pub mod logger;
pub mod validation;
