//! # Rusty-id3
//!
//! `rusty-id3` induces classification trees from categorical data using the
//! gain ratio split criterion. It also contains the entropy statistics the
//! criterion is built from and utilities to render the induced tree.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! As a quick example, here's how you can induce a tree from a handful of rows
//! and classify a new one:
//!
//! ```rust
//! use rusty_id3::data::dataset::Dataset;
//! use rusty_id3::trees::classifier::Id3Classifier;
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec!["sunny", "high", "no"],
//!     vec!["sunny", "normal", "yes"],
//!     vec!["overcast", "high", "yes"],
//!     vec!["rain", "high", "no"],
//! ])
//! .unwrap();
//!
//! let mut model = Id3Classifier::new();
//!
//! model.fit(&dataset).unwrap();
//!
//! let predictions = model.predict(&[vec!["overcast", "normal"]]).unwrap();
//! assert_eq!(predictions, vec!["yes"]);
//! ```

/// Categorical datasets and row ingestion
pub mod data;
/// Error types
pub mod error;
/// Split statistics and classification metrics
pub mod metrics;
/// Text and Graphviz rendering of induced trees
pub mod render;
/// Decision trees
pub mod trees;
