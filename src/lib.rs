//! Helpers for a scientific-plotting workflow.
//!
//! Two independent layers:
//!
//! * [`data`] — [`MatData`], an existence-checked wrapper that loads named
//!   variables from a MATLAB `.mat` file.
//! * [`label`] / [`style`] — [`PlotLabelManager`], which assigns and recalls
//!   per-series style arguments and legend text, emitting each text label
//!   exactly once per key so legends stay free of duplicates. Style arguments
//!   can be auto-assigned from pre-declared [`ArgumentPool`]s.
//!
//! ```
//! use plotassist::{color_pool, PlotLabelManager};
//! use std::collections::BTreeMap;
//!
//! let pools = BTreeMap::from([("color".to_string(), color_pool(4))]);
//! let mut labels = PlotLabelManager::with_pools(pools);
//!
//! labels.add("series_a", "Series A", None)?;
//! // First retrieval carries the legend text, later ones suppress it.
//! let args = labels.get_args(&"series_a", true)?;
//! assert!(args.contains_key("color"));
//! # Ok::<(), plotassist::PlotAssistError>(())
//! ```

pub mod data;
pub mod error;
pub mod label;
pub mod style;

pub use data::MatData;
pub use error::{PlotAssistError, Result};
pub use label::{PlotLabel, PlotLabelManager, LABEL_KEY};
pub use style::{color_pool, ArgumentPool, StyleArgs, StyleValue};
