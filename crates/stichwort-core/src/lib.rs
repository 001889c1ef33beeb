pub mod dom;
pub mod error;
pub mod fetch;
pub mod page;
pub mod resolver;
pub mod source;
pub mod word;
