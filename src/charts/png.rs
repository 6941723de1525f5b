//! Server-side PNG rendering with plotters. The drawing is deliberately
//! label-free (bars, axes, no text) so the bitmap path never touches a
//! font backend.

use std::io::Cursor;

use plotters::prelude::*;
use thiserror::Error;

use crate::data::BenchmarkTable;

const WIDTH: u32 = 900;
const HEIGHT: u32 = 500;

#[derive(Error, Debug)]
pub enum PngError {
    #[error("chart drawing failed: {0}")]
    Draw(String),
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Renders the FPS-per-game bar chart into PNG bytes.
pub fn render_fps_bar_png(table: &BenchmarkTable) -> Result<Vec<u8>, PngError> {
    let mut raw = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut raw, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| PngError::Draw(e.to_string()))?;

        let bar_count = table.rows.len().max(1);
        let max_fps = table
            .rows
            .iter()
            .filter_map(|r| r.fps)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        let mut chart = ChartBuilder::on(&root)
            .margin(24)
            .build_cartesian_2d(0.0..bar_count as f64, 0.0..max_fps * 1.1)
            .map_err(|e| PngError::Draw(e.to_string()))?;

        chart
            .draw_series(table.rows.iter().enumerate().map(|(i, row)| {
                let fps = row.fps.unwrap_or(0.0);
                Rectangle::new(
                    [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, fps)],
                    BLUE.mix(0.6).filled(),
                )
            }))
            .map_err(|e| PngError::Draw(e.to_string()))?;

        // Axis frame, drawn by hand since the mesh is label-driven.
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![
                    (0.0, max_fps * 1.1),
                    (0.0, 0.0),
                    (bar_count as f64, 0.0),
                ],
                BLACK.stroke_width(1),
            )))
            .map_err(|e| PngError::Draw(e.to_string()))?;

        root.present().map_err(|e| PngError::Draw(e.to_string()))?;
    }

    let rgb = image::RgbImage::from_raw(WIDTH, HEIGHT, raw)
        .ok_or_else(|| PngError::Draw("pixel buffer size mismatch".to_string()))?;
    let mut png = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

    #[test]
    fn renders_fallback_table_to_a_png() {
        let png = render_fps_bar_png(&BenchmarkTable::fallback()).unwrap();

        assert!(png.len() > PNG_MAGIC.len());
        assert_eq!(&png[..4], &PNG_MAGIC);
    }

    #[test]
    fn renders_an_empty_table_without_error() {
        let png = render_fps_bar_png(&BenchmarkTable::default()).unwrap();

        assert_eq!(&png[..4], &PNG_MAGIC);
    }
}
