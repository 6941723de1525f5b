use serde::{Deserialize, Serialize};

/// One row of the benchmark sheet, plus the two columns derived from the
/// free-text specs field. The derived values are computed once at
/// construction and are `None` whenever the specs string does not carry
/// the expected delimiter or the token in front of it is not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub game: String,
    pub fps: Option<f64>,
    pub gpu_specs: String,
    pub vram_gb: Option<f64>,
    pub power_w: Option<f64>,
}

impl BenchmarkRow {
    pub fn new(game: impl Into<String>, fps: Option<f64>, gpu_specs: impl Into<String>) -> Self {
        let gpu_specs = gpu_specs.into();
        let vram_gb = number_before(&gpu_specs, "GB");
        let power_w = number_before(&gpu_specs, "W");
        Self {
            game: game.into(),
            fps,
            gpu_specs,
            vram_gb,
            power_w,
        }
    }
}

/// The token immediately preceding the first occurrence of `delim`,
/// parsed as a number. Missing delimiter or a non-numeric token yields
/// `None`, never an error.
fn number_before(text: &str, delim: &str) -> Option<f64> {
    let (prefix, _) = text.split_once(delim)?;
    let token = prefix
        .trim_end()
        .rsplit([' ', ','])
        .next()
        .unwrap_or_default();
    token.parse().ok()
}

/// The transient record set held in memory for the duration of one
/// request. Built either from a sheet fetch or from [`Self::fallback`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchmarkTable {
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkTable {
    pub fn new(rows: Vec<BenchmarkRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Placeholder rows served whenever external data is unavailable.
    pub fn fallback() -> Self {
        Self::new(vec![
            BenchmarkRow::new(
                "Cyberpunk 2077",
                Some(72.0),
                "AD102, 16384 shaders, 2520MHz, 24GB GDDR6X@21Gbps, 1008GB/s, 450W",
            ),
            BenchmarkRow::new(
                "Elden Ring",
                Some(60.0),
                "Navi 31, 6144 shaders, 2500MHz, 24GB GDDR6@20Gbps, 960GB/s, 355W",
            ),
            BenchmarkRow::new(
                "Starfield",
                Some(48.0),
                "AD103, 9728 shaders, 2505MHz, 16GB GDDR6X@22.4Gbps, 716GB/s, 320W",
            ),
            BenchmarkRow::new(
                "Baldur's Gate 3",
                Some(88.0),
                "Navi 32, 3840 shaders, 2430MHz, 16GB GDDR6@19.5Gbps, 624GB/s, 263W",
            ),
        ])
    }
}
