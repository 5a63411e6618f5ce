use crate::error::{DashError, DashResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub layout: LayoutParams,
    #[command(flatten)]
    pub slider: SliderParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    #[arg(long, default_value = "SpaceX Launch Records Dashboard")]
    pub dashboard_title: String,
    #[arg(long, default_value = "Select a Launch Site here")]
    pub site_placeholder: String,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            dashboard_title: "SpaceX Launch Records Dashboard".to_string(),
            site_placeholder: "Select a Launch Site here".to_string(),
        }
    }
}

/// Payload range selector settings, in kg.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderParams {
    #[arg(long, default_value_t = 0.0)]
    pub slider_min: f64,
    #[arg(long, default_value_t = 10_000.0)]
    pub slider_max: f64,
    #[arg(long, default_value_t = 1_000.0)]
    pub slider_step: f64,
    #[arg(long, default_value = "0,2500,5000,7500,10000")]
    pub slider_marks: String,
}

impl Default for SliderParams {
    fn default() -> Self {
        Self {
            slider_min: 0.0,
            slider_max: 10_000.0,
            slider_step: 1_000.0,
            slider_marks: "0,2500,5000,7500,10000".to_string(),
        }
    }
}

impl SliderParams {
    pub fn get_marks(&self) -> DashResult<Vec<f64>> {
        parse_f64_list(&self.slider_marks, "slider_marks")
    }

    pub fn validate(&self) -> DashResult<()> {
        if !(self.slider_step.is_finite() && self.slider_step > 0.0) {
            return Err(DashError::Config(format!(
                "--slider-step must be positive, got {}",
                self.slider_step
            )));
        }
        if self.slider_min > self.slider_max {
            return Err(DashError::Config(format!(
                "--slider-min ({}) exceeds --slider-max ({})",
                self.slider_min, self.slider_max
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DashResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed on the command line over the
    /// file-provided one. Clap defaults never override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(layout.dashboard_title);
        update_if_present!(layout.site_placeholder);

        update_if_present!(slider.slider_min);
        update_if_present!(slider.slider_max);
        update_if_present!(slider.slider_step);
        update_if_present!(slider.slider_marks);
    }

    pub fn validate(&self) -> DashResult<()> {
        self.slider.validate()?;
        self.slider.get_marks()?;
        Ok(())
    }
}

fn parse_f64_list(s: &str, name: &str) -> DashResult<Vec<f64>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DashError::Config(format!("Invalid number '{}' in --{}", p.trim(), name)))
        })
        .collect()
}
