/// Chart layer: layout, scales, scene building and tooltip logic.
///
/// Architecture:
/// ```text
///   Dataset + viewport size
///        │
///        ▼
///   ┌──────────┐
///   │  layout   │  canvas/chart geometry, year/month bands, colour scale
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  scene    │  titles, axes, cells, legend (ids + data-* tags)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  tooltip  │  Hidden/Visible state, placement, content
///   └──────────┘
/// ```

pub mod layout;
pub mod scale;
pub mod scene;
pub mod tooltip;
