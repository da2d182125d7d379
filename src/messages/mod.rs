mod catalog;
mod compensate;
mod template;

pub use catalog::{MessageCatalog, DEFAULT_LOCALE};
pub(crate) use catalog::GENERIC_MESSAGE;
pub use compensate::compensate;
pub use template::render;
