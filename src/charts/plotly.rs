//! Plotly figure construction. The server never renders these itself;
//! each figure is a `{data, layout}` JSON object handed to the plotly.js
//! script embedded in the page templates.

use serde_json::{json, Value};

use crate::data::BenchmarkTable;

/// Static demo figure for the landing page.
pub fn demo_line_figure() -> Value {
    json!({
        "data": [{
            "x": [1, 2, 3, 4],
            "y": [10, 20, 15, 25],
            "mode": "lines+markers",
            "type": "scatter"
        }],
        "layout": {
            "title": { "text": "Interactive Plotly Chart" }
        }
    })
}

/// Bar chart of frame rate per game.
pub fn fps_bar_figure(table: &BenchmarkTable) -> Value {
    let games: Vec<&str> = table.rows.iter().map(|r| r.game.as_str()).collect();
    let fps: Vec<Option<f64>> = table.rows.iter().map(|r| r.fps).collect();

    json!({
        "data": [{
            "x": games,
            "y": fps,
            "type": "bar"
        }],
        "layout": {
            "title": { "text": "FPS by Game" },
            "yaxis": { "title": { "text": "FPS" } }
        }
    })
}

/// Scatter plot of board power draw against frame rate, one point per
/// game. Rows without a derived power value come through as nulls,
/// which plotly drops from the trace.
pub fn power_fps_scatter_figure(table: &BenchmarkTable) -> Value {
    let power: Vec<Option<f64>> = table.rows.iter().map(|r| r.power_w).collect();
    let fps: Vec<Option<f64>> = table.rows.iter().map(|r| r.fps).collect();
    let labels: Vec<&str> = table.rows.iter().map(|r| r.game.as_str()).collect();

    json!({
        "data": [{
            "x": power,
            "y": fps,
            "text": labels,
            "mode": "markers",
            "type": "scatter"
        }],
        "layout": {
            "title": { "text": "Power Draw vs FPS" },
            "xaxis": { "title": { "text": "Board power (W)" } },
            "yaxis": { "title": { "text": "FPS" } }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BenchmarkRow, BenchmarkTable};

    #[test]
    fn demo_figure_is_a_line_and_marker_trace() {
        let figure = demo_line_figure();

        assert_eq!(figure["data"][0]["mode"], "lines+markers");
        assert_eq!(figure["data"][0]["x"], json!([1, 2, 3, 4]));
        assert_eq!(figure["data"][0]["y"], json!([10, 20, 15, 25]));
        assert_eq!(figure["layout"]["title"]["text"], "Interactive Plotly Chart");
    }

    #[test]
    fn bar_figure_carries_one_bar_per_row() {
        let table = BenchmarkTable::fallback();
        let figure = fps_bar_figure(&table);

        assert_eq!(figure["data"][0]["type"], "bar");
        assert_eq!(
            figure["data"][0]["x"].as_array().unwrap().len(),
            table.rows.len()
        );
    }

    #[test]
    fn scatter_figure_nulls_out_missing_power_values() {
        let table = BenchmarkTable::new(vec![
            BenchmarkRow::new("A", Some(60.0), "16GB, 320W"),
            BenchmarkRow::new("B", Some(45.0), "no delimiters here at all"),
        ]);
        let figure = power_fps_scatter_figure(&table);

        assert_eq!(figure["data"][0]["x"][0], json!(320.0));
        assert_eq!(figure["data"][0]["x"][1], json!(null));
        assert_eq!(figure["data"][0]["text"][1], "B");
    }
}
