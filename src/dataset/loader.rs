use super::types::{Dataset, LaunchRecord, Outcome};
use crate::error::{DashError, DashResult};
use crate::filter::ALL_SITES;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

pub const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CATEGORY, COL_CLASS];

// Extra columns in the source (Flight Number, Booster Version, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    site: Option<String>,
    #[serde(rename = "Payload Mass (kg)")]
    payload: Option<String>,
    #[serde(rename = "Booster Version Category")]
    category: Option<String>,
    #[serde(rename = "class")]
    class: Option<String>,
}

impl RawLaunchRow {
    fn into_record(self) -> Result<LaunchRecord, String> {
        let site = self
            .site
            .filter(|s| !s.is_empty())
            .ok_or("missing launch site")?;
        if site == ALL_SITES {
            return Err(format!("site name '{}' is reserved for the all-sites entry", site));
        }

        let payload_raw = self.payload.ok_or("missing payload mass")?;
        let payload: f64 = payload_raw
            .parse()
            .map_err(|_| format!("payload '{}' is not a number", payload_raw))?;
        if !payload.is_finite() || payload < 0.0 {
            return Err(format!("payload '{}' is out of range", payload_raw));
        }

        let class_raw = self.class.ok_or("missing class")?;
        let outcome = class_raw
            .parse::<f64>()
            .ok()
            .filter(|c| c.fract() == 0.0 && (0.0..=1.0).contains(c))
            .and_then(|c| Outcome::from_class(c as u8))
            .ok_or_else(|| format!("class '{}' is not 0 or 1", class_raw))?;

        Ok(LaunchRecord {
            site,
            payload_mass_kg: payload,
            booster_category: self.category.unwrap_or_default(),
            outcome,
        })
    }
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> DashResult<Dataset> {
    let path = path.as_ref();
    info!("📂 Loading launch records from {:?}", path);
    let file = File::open(path)?;
    load_dataset_from_reader(file)
}

pub fn load_dataset_from_reader<R: Read>(reader: R) -> DashResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DashError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, result) in rdr.deserialize::<RawLaunchRow>().enumerate() {
        // Header is line 1.
        let line = row_idx + 2;
        match result.map_err(|e| e.to_string()).and_then(RawLaunchRow::into_record) {
            Ok(rec) => records.push(rec),
            Err(reason) => {
                skipped += 1;
                debug!("[Line {}] Skipping launch row: {}", line, reason);
            }
        }
    }

    if skipped > 0 {
        warn!("⚠️  Skipped {} invalid launch rows.", skipped);
    }

    let dataset = Dataset::new(records);
    let bounds = dataset.bounds();
    info!(
        "Loaded {} launches. min_payload: {} max_payload: {}",
        dataset.len(),
        bounds.min,
        bounds.max
    );

    Ok(dataset)
}
