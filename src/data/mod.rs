/// Data layer: loading named variables from MATLAB containers.
///
/// Architecture:
/// ```text
///      .mat file
///          │
///          ▼
///    ┌───────────┐
///    │  matfile   │  parse MAT5 container (external crate)
///    └───────────┘
///          │
///          ▼
///    ┌───────────┐
///    │  MatData   │  existence checks, name lookup, f64/ndarray views
///    └───────────┘
/// ```
pub mod container;

pub use container::MatData;
