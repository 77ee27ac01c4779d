use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use swm_calendar::DayId;
use swm_grid::Grid;
use swm_interpolate::{Observation, ObservationSet, Station};
use swm_store::{read_ascii_grid, read_climate_table, read_observation_table, read_station_table};
use swm_store::{CsvSink, DirectoryStore};
use swm_sweep::{BasinData, ClimateRecord, MonthlyGrids, SweepController};

use crate::cli::RunArgs;
use crate::config::SwmConfig;
use crate::convert;

/// Run the parameter sweep end to end.
pub fn run(args: RunArgs) -> Result<()> {
    // Step 1: Load configuration
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: SwmConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config: {}", args.config.display()))?;

    let (start, end) = convert::parse_period(&config.period)?;
    let sweep_cfg = convert::build_sweep_config(
        &config.sweep,
        &config.idw,
        &config.retain,
        config.accumulate.as_ref(),
    )?;

    // Step 2: Load basin grids
    info!("loading basin grids");
    let basin = load_basin(&config)?;
    basin
        .validate()
        .context("basin grids disagree in geometry")?;
    info!(cell_size = basin.cell_size(), "basin grids loaded");

    // Step 3: Read tables and filter to the period
    let climate = load_climate(&config, start, end)?;
    info!(
        days = climate.len(),
        start = %start,
        end = %end,
        "climate series loaded"
    );
    let observations = load_observations(&config)?;
    info!(stations = observations.n_stations(), "station data loaded");

    // Step 4: Open output store and sink
    let folder = args.output.unwrap_or_else(|| config.output.folder.clone());
    let run_dir = folder.join(&config.output.name);
    let mut store = DirectoryStore::new(run_dir.join("rasters"))
        .with_context(|| format!("failed to open raster store under {}", run_dir.display()))?;
    let mut sink = CsvSink::new(run_dir.join("series"))
        .with_context(|| format!("failed to open result sink under {}", run_dir.display()))?;

    // Step 5: Run the sweep
    let results = SweepController::new(&mut store, &mut sink)
        .run(&basin, &climate, &observations, &sweep_cfg)
        .context("parameter sweep failed")?;

    info!(
        combinations = results.len(),
        output = %run_dir.display(),
        "sweep complete"
    );
    Ok(())
}

/// Load the five basin grids plus the twelve monthly Haude grids.
fn load_basin(config: &SwmConfig) -> Result<BasinData> {
    let grid = |path: &Path| -> Result<Grid> {
        read_ascii_grid(path).with_context(|| format!("failed to read grid: {}", path.display()))
    };

    let mut haude = Vec::with_capacity(12);
    for month in 1..=12u8 {
        let path = config.data.haude_dir.join(format!("haude_{month}.asc"));
        haude.push(grid(&path)?);
    }
    let haude: [Grid; 12] = haude
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected 12 Haude grids"))?;

    Ok(BasinData {
        field_capacity: grid(&config.data.field_capacity)?,
        wilting_point: grid(&config.data.wilting_point)?,
        root_depth_m: grid(&config.data.root_depth)?,
        water_mask: grid(&config.data.water_mask)?,
        initial_soil: grid(&config.data.initial_soil)?,
        haude: MonthlyGrids::new(haude),
    })
}

/// Load the climate table and keep the rows inside the period.
fn load_climate(config: &SwmConfig, start: DayId, end: DayId) -> Result<Vec<ClimateRecord>> {
    let rows = read_climate_table(&config.data.climate).with_context(|| {
        format!(
            "failed to read climate table: {}",
            config.data.climate.display()
        )
    })?;

    let mut records = Vec::new();
    for row in rows {
        let date = DayId::from_yyyymmdd(row.tages_id)
            .with_context(|| format!("invalid TagesID in climate table: {}", row.tages_id))?;
        if date < start || date > end {
            continue;
        }
        records.push(ClimateRecord {
            date,
            temperature_c: row.temp,
            humidity_pct: row.rel_feu,
        });
    }
    Ok(records)
}

/// Load the station registry and the observation table into one set.
fn load_observations(config: &SwmConfig) -> Result<ObservationSet> {
    let stations: Vec<Station> = read_station_table(&config.data.stations)
        .with_context(|| {
            format!(
                "failed to read station table: {}",
                config.data.stations.display()
            )
        })?
        .into_iter()
        .map(|row| Station {
            id: row.stationsnummer,
            x: row.x,
            y: row.y,
        })
        .collect();

    let rows = read_observation_table(&config.data.observations).with_context(|| {
        format!(
            "failed to read observation table: {}",
            config.data.observations.display()
        )
    })?;
    let mut observations = Vec::with_capacity(rows.len());
    for row in rows {
        let date = DayId::from_yyyymmdd(row.tages_id)
            .with_context(|| format!("invalid TagesID in observation table: {}", row.tages_id))?;
        observations.push(Observation {
            station_id: row.stationsnummer,
            date,
            amount_mm: row.tagessumme_mm,
        });
    }
    Ok(ObservationSet::new(stations, observations))
}
