mod bar_style_resolver;
mod drag_controller;
mod overlay_frame_builder;
mod position_reconciler;
mod renderer_config;
mod selection_renderer;
mod transition_controller;

pub use bar_style_resolver::BarStyle;
pub use position_reconciler::{HandleUpdate, HandleUpdateSource, ReconciledSelection};
pub use renderer_config::SelectionRendererConfig;
pub use selection_renderer::SelectionRenderer;
