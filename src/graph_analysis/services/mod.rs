mod dependency_aggregator;
mod graph_renderer;

pub use dependency_aggregator::{AggregatedGraph, DependencyAggregator};
pub use graph_renderer::{
    CanvasSize, GraphRenderer, RenderState, RenderedGraph, SkipReason, SkippedEdge,
};
