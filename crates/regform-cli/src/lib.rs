//! regform-cli
//! ===========
//!
//! Command-line interface for the `regform-core` registration form
//! models.
//!
//! This crate primarily provides a binary (`regform-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! regform-cli --help
//! regform-cli countries
//! regform-cli check-dob 1990-01-31
//! ```
//!
//! For programmatic access to the models, use the [`regform-core`] crate
//! directly.
//!
//! [`regform-core`]: https://docs.rs/regform-core

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
