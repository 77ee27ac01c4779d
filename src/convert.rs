//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{bail, Context, Result};

use swm_accumulate::AccumulationWindow;
use swm_calendar::DayId;
use swm_interpolate::IdwConfig;
use swm_sweep::{RetainFlags, SweepConfig};

use crate::config::{AccumulateToml, IdwToml, PeriodToml, RetainToml, SweepToml};

/// Builds an [`IdwConfig`] from the TOML interpolation section.
pub fn build_idw_config(idw: &IdwToml) -> Result<IdwConfig> {
    let cfg = IdwConfig::new(idw.power)
        .with_radius(idw.radius)
        .with_min_neighbors(idw.min_neighbors);
    cfg.validate().context("invalid [idw] section")?;
    Ok(cfg)
}

/// Builds a [`RetainFlags`] from the TOML retain section.
pub fn build_retain_flags(retain: &RetainToml) -> RetainFlags {
    RetainFlags {
        pet: retain.pet,
        aet: retain.aet,
        precipitation: retain.precipitation,
        runoff: retain.runoff,
        soil_moisture: retain.soil_moisture,
    }
}

/// Builds an [`AccumulationWindow`] from the TOML accumulate section.
pub fn build_accumulation_window(acc: &AccumulateToml) -> Result<AccumulationWindow> {
    let start = DayId::from_yyyymmdd(acc.start)
        .with_context(|| format!("invalid [accumulate].start: {}", acc.start))?;
    let end = DayId::from_yyyymmdd(acc.end)
        .with_context(|| format!("invalid [accumulate].end: {}", acc.end))?;
    AccumulationWindow::new(start, end).context("invalid [accumulate] window")
}

/// Parses the simulated period bounds.
pub fn parse_period(period: &PeriodToml) -> Result<(DayId, DayId)> {
    let start = DayId::from_yyyymmdd(period.start)
        .with_context(|| format!("invalid [period].start: {}", period.start))?;
    let end = DayId::from_yyyymmdd(period.end)
        .with_context(|| format!("invalid [period].end: {}", period.end))?;
    if start > end {
        bail!("[period] start {start} is after end {end}");
    }
    Ok((start, end))
}

/// Builds the full [`SweepConfig`] from the TOML sections.
pub fn build_sweep_config(
    sweep: &SweepToml,
    idw: &IdwToml,
    retain: &RetainToml,
    accumulate: Option<&AccumulateToml>,
) -> Result<SweepConfig> {
    let accumulation = accumulate.map(build_accumulation_window).transpose()?;
    let cfg = SweepConfig {
        rp_factor_min: sweep.rp_factor_min,
        rp_factor_max: sweep.rp_factor_max,
        rp_factor_step: sweep.rp_factor_step,
        shape_min: sweep.shape_min,
        shape_max: sweep.shape_max,
        shape_step: sweep.shape_step,
        idw: build_idw_config(idw)?,
        retain: build_retain_flags(retain),
        accumulation,
    };
    cfg.validate().context("invalid [sweep] section")?;
    Ok(cfg)
}
