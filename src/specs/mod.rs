// src/specs/mod.rs
//! # Source “specs”
//!
//! One module per data source. Each knows *where the numbers live* in its
//! source and how to pull them out into plain `data` types.
//!
//! ## What lives here
//! - **Pure parsing** of fetched HTML or file text (`parse_doc`, `parse_table`),
//!   split from the I/O wrapper (`fetch`, `load`) so it can be tested offline.
//! - **Row-level tolerance**: a malformed row is skipped and debug-logged; it
//!   never aborts the whole source.
//!
//! ## What does **not** live here
//! - Deciding that an empty result is fatal (see `load`).
//! - Normalization, layout or drawing.
//!
//! ## Typical call chain
//! ```text
//! bin → load::collect → specs::<source>::fetch()/load()
//!                     ↘ Vec<Sample> / ClimateTable / Vec<TyphoonWarning>
//! ```
pub mod climate;
pub mod tides;
pub mod typhoon;
