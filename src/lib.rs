pub mod args;
pub mod date;
pub mod error;
pub mod handler;
pub mod mvu;
pub mod page;
pub mod venue;
pub mod view;

pub use date::parse_iso_string;
pub use error::{BindError, DateParseError, DeleteError};
pub use handler::DeleteHandler;
