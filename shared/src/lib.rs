pub mod logger;
pub mod money;


pub use logger::{init_logger, LogFormat};
pub use money::format_currency;
