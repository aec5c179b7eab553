pub mod histogram_data;
pub mod histogram_selection;
pub mod selection;

pub use histogram_data::{HistogramBin, HistogramContent, HistogramData};
pub use histogram_selection::{
    HistogramSelection, MultipleHistogramSelection, SelectionMode, SingleHistogramSelection,
    new_histogram_selection,
};
pub use selection::{SelectionEdge, SelectionPoint, SelectionRange, boundary_values};
