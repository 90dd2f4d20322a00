//! Catalog service implementations

pub mod feed_fetcher;

#[cfg(test)]
pub mod tests;

pub use feed_fetcher::*;
