/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///   renderer stdout ──► data.txt
///                          │
///                          ▼
///                    ┌──────────┐
///                    │  loader  │  parse "x y z" rows → PointCloud
///                    └──────────┘
///                          │
///                          ▼
///                    ┌────────────┐
///                    │ PointCloud │  Vec<SamplePoint>, per-axis bounds
///                    └────────────┘
/// ```

pub mod loader;
pub mod model;
