pub mod browser;
pub mod dispatcher;
pub mod matcher;
pub mod reconciler;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use browser::{ListingBrowser, SharedBrowser};
pub use reconciler::{Display, Notice};
