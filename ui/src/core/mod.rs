//! Pure logic behind the views. No Dioxus types in here.

pub mod browser;
pub mod curriculum;
pub mod error;
pub mod flexbox;
pub mod format;
pub mod keyword;
pub mod platform;
pub mod playground;
pub mod routing;
pub mod site;

pub use error::{Error, Result};
