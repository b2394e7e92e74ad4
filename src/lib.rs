//! wbinfo
//!
//! Reshape a World Bank DataBank population export and render it as a
//! four-panel infographic. Pairs with the `wbinfo` CLI.
//!
//! ### Features
//! - Load the wide, year-columned CSV into a row-per-(country, series) table
//! - Melt any series into a tidy long-form table (CSV or JSON export)
//! - Grouped summary statistics (count, missing, min, max, mean, median)
//! - Compose bar, line, pie and histogram charts into one PNG or SVG
//!
//! ### Example
//! ```no_run
//! use wbinfo::{loader, viz};
//!
//! let (wide, _transposed) = loader::load_world_bank_csv("world_population_data.csv")?;
//! viz::render_infographic(&wide, "22077669.png", &viz::FigureOptions::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod reshape;
pub mod stats;
pub mod storage;
pub mod viz;

pub use error::{DataError, DataResult};
pub use models::{LongRow, LongTable, TransposedTable, WideTable};
