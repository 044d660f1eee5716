/// Chart specification layer.
///
/// Each builder is a pure function of (loaded dataset, selector values)
/// producing a declarative chart description: rows already filtered and
/// derived, encodings resolved to concrete points/segments/nodes, labels
/// and tooltips rendered. The UI renders these specs without touching the
/// data layer, and the builders are testable without a UI.

pub mod bar;
pub mod line;
pub mod map;
pub mod tooltip;
pub mod treemap;
