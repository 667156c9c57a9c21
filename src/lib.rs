#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::ToolConfig;
pub use utils::dates::{date_arg, is_valid_date, parse_date, subtract_days, valid_date};
pub use utils::error::{Result, UtilsError};
pub use utils::lists::remove_list_items;
pub use utils::validation::valid_name;
