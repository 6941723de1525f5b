pub mod plotly;
pub mod png;
