// File: crates/chart-core/src/record.rs
// Summary: Trail record model and CSV loader for the hike trails dataset.
// Notes:
// - Numeric cells are validated strictly: an empty, unparsable or non-finite
//   value fails the whole load. A half-loaded dataset never reaches the chart.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, Result};

pub const COL_REGION: &str = "region";
pub const COL_HIGHPOINT: &str = "mean_highpoint_m";
pub const COL_RATING: &str = "mean_rating";
pub const COL_FEATURES: &str = "features";

/// One row of the trails dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailRecord {
    pub region: String,
    /// Average highest point above sea level, in meters.
    pub mean_highpoint_m: f64,
    pub mean_rating: f64,
    pub features: String,
    /// 1-based rank by `mean_highpoint_m`; 0 until ranked.
    pub key: u32,
}

impl TrailRecord {
    pub fn new(
        region: impl Into<String>,
        mean_highpoint_m: f64,
        mean_rating: f64,
        features: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            mean_highpoint_m,
            mean_rating,
            features: features.into(),
            key: 0,
        }
    }
}

/// Reader settings for the delimited input.
#[derive(Clone, Copy, Debug)]
pub struct LoaderOptions {
    pub delimiter: u8,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Load trail records from a delimited file with a header row.
pub fn load_trails(path: impl AsRef<Path>, opts: &LoaderOptions) -> Result<Vec<TrailRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading trails");
    let file = std::fs::File::open(path)?;
    read_trails(file, opts)
}

/// Same as [`load_trails`] for any reader.
pub fn read_trails<R: Read>(input: R, opts: &LoaderOptions) -> Result<Vec<TrailRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "trail headers");

    let idx = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(ChartError::MissingColumn(name))
    };

    let i_region = idx(COL_REGION)?;
    let i_high = idx(COL_HIGHPOINT)?;
    let i_rating = idx(COL_RATING)?;
    let i_features = idx(COL_FEATURES)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let text = |i: usize| rec.get(i).unwrap_or("").to_string();
        let number = |i: usize, column: &'static str| -> Result<f64> {
            let raw = rec.get(i).unwrap_or("");
            parse_number(raw).ok_or_else(|| ChartError::InvalidNumber {
                line,
                column,
                value: raw.to_string(),
            })
        };

        out.push(TrailRecord {
            region: text(i_region),
            mean_highpoint_m: number(i_high, COL_HIGHPOINT)?,
            mean_rating: number(i_rating, COL_RATING)?,
            features: text(i_features),
            key: 0,
        });
    }
    debug!(count = out.len(), "loaded trail records");
    Ok(out)
}

fn parse_number(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}
