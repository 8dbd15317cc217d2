//! Data provider implementations for the laredo engine.
//!
//! This crate provides concrete [`DataProvider`] backends. Providers are
//! interchangeable behind the trait; the engine never knows whether its
//! series come from memory, files, a database, or a network API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use laredo_data::InMemoryProvider;
//! use laredo_traits::DataProvider;
//!
//! let provider = InMemoryProvider::new(quarterly, Some(daily), base);
//! let slice = provider.load_quarterly_data(&["AAPL".to_string()])?;
//! ```
//!
//! [`DataProvider`]: laredo_traits::DataProvider

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod memory;

pub use memory::InMemoryProvider;
