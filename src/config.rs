use std::path::PathBuf;

use serde::Deserialize;

/// Top-level model configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwmConfig {
    /// Input dataset paths.
    pub data: DataToml,

    /// Simulated period bounds.
    pub period: PeriodToml,

    /// Parameter sweep settings.
    #[serde(default)]
    pub sweep: SweepToml,

    /// Precipitation interpolation settings.
    #[serde(default)]
    pub idw: IdwToml,

    /// Which intermediate grids to keep.
    #[serde(default)]
    pub retain: RetainToml,

    /// Optional accumulation sub-period.
    #[serde(default)]
    pub accumulate: Option<AccumulateToml>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

/// Paths to the basin grids and the tabular inputs.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// Field capacity grid (ESRI ASCII).
    pub field_capacity: PathBuf,
    /// Wilting point grid.
    pub wilting_point: PathBuf,
    /// Effective root depth grid, in m.
    pub root_depth: PathBuf,
    /// Water mask grid (1 = open water).
    pub water_mask: PathBuf,
    /// Initial soil-moisture grid.
    pub initial_soil: PathBuf,
    /// Directory holding `haude_1.asc` .. `haude_12.asc`.
    pub haude_dir: PathBuf,
    /// Daily climate table CSV (`TagesID,Jahr,Monat,Tag,RelFeu,Temp`).
    pub climate: PathBuf,
    /// Station registry CSV (`Stationsnummer,X,Y`).
    pub stations: PathBuf,
    /// Daily observation CSV (`Stationsnummer,TagesID,Tagessumme_mm`).
    pub observations: PathBuf,
}

/// Inclusive simulation period, YYYYMMDD.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepToml {
    #[serde(default = "default_rp_min")]
    pub rp_factor_min: f64,
    #[serde(default = "default_rp_max")]
    pub rp_factor_max: f64,
    #[serde(default = "default_rp_step")]
    pub rp_factor_step: f64,
    #[serde(default = "default_shape_min")]
    pub shape_min: i64,
    #[serde(default = "default_shape_max")]
    pub shape_max: i64,
    #[serde(default = "default_shape_step")]
    pub shape_step: i64,
}

impl Default for SweepToml {
    fn default() -> Self {
        Self {
            rp_factor_min: default_rp_min(),
            rp_factor_max: default_rp_max(),
            rp_factor_step: default_rp_step(),
            shape_min: default_shape_min(),
            shape_max: default_shape_max(),
            shape_step: default_shape_step(),
        }
    }
}

fn default_rp_min() -> f64 {
    0.75
}
fn default_rp_max() -> f64 {
    0.85
}
fn default_rp_step() -> f64 {
    0.05
}
fn default_shape_min() -> i64 {
    150
}
fn default_shape_max() -> i64 {
    250
}
fn default_shape_step() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdwToml {
    #[serde(default = "default_idw_power")]
    pub power: f64,
    #[serde(default = "default_idw_radius")]
    pub radius: f64,
    #[serde(default = "default_idw_min_neighbors")]
    pub min_neighbors: usize,
}

impl Default for IdwToml {
    fn default() -> Self {
        Self {
            power: default_idw_power(),
            radius: default_idw_radius(),
            min_neighbors: default_idw_min_neighbors(),
        }
    }
}

fn default_idw_power() -> f64 {
    1.0
}
fn default_idw_radius() -> f64 {
    20_000.0
}
fn default_idw_min_neighbors() -> usize {
    5
}

/// All flags default to off: only streamflow series survive a run.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RetainToml {
    #[serde(default)]
    pub pet: bool,
    #[serde(default)]
    pub aet: bool,
    #[serde(default)]
    pub precipitation: bool,
    #[serde(default)]
    pub runoff: bool,
    #[serde(default)]
    pub soil_moisture: bool,
}

/// Inclusive accumulation window, YYYYMMDD.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccumulateToml {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Root output folder; rasters and series land under `folder/name`.
    #[serde(default = "default_output_folder")]
    pub folder: PathBuf,
    /// Run name, used as the subfolder for this sweep's artifacts.
    #[serde(default = "default_output_name")]
    pub name: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            folder: default_output_folder(),
            name: default_output_name(),
        }
    }
}

fn default_output_folder() -> PathBuf {
    PathBuf::from("output")
}
fn default_output_name() -> String {
    "sweep".to_string()
}
