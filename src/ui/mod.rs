/// UI shell: selector panels and chart renderers. Everything here consumes
/// chart specs and app state; no data-layer logic lives in this module.

pub mod panels;
pub mod plot;
