//! The per-combination accumulation state machine.

use swm_calendar::DayId;
use swm_grid::Grid;

use crate::error::AccumulateError;

/// Inclusive date bounds of the accumulation sub-period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulationWindow {
    start: DayId,
    end: DayId,
}

impl AccumulationWindow {
    /// Creates a window from inclusive start and end dates.
    ///
    /// # Errors
    ///
    /// Returns [`AccumulateError::InvalidWindow`] if `start > end`.
    pub fn new(start: DayId, end: DayId) -> Result<Self, AccumulateError> {
        if start > end {
            return Err(AccumulateError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start date.
    pub fn start(&self) -> DayId {
        self.start
    }

    /// Returns the inclusive end date.
    pub fn end(&self) -> DayId {
        self.end
    }

    /// Returns `true` if `date` falls inside the window.
    pub fn contains(&self, date: DayId) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Accumulator lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No in-window day observed yet.
    Inactive,
    /// Sums are running; the end date has not been reached.
    Accumulating,
    /// The window closed and the summary was emitted; further days are
    /// ignored until [`TemporalAccumulator::reset`].
    Finalized,
}

/// One day's grids, borrowed from the step outputs.
#[derive(Debug, Clone, Copy)]
pub struct DayFields<'a> {
    /// Potential evapotranspiration.
    pub pet: &'a Grid,
    /// Actual evapotranspiration.
    pub aet: &'a Grid,
    /// Interpolated precipitation.
    pub precipitation: &'a Grid,
    /// Total runoff.
    pub runoff: &'a Grid,
    /// Updated soil moisture.
    pub soil_moisture: &'a Grid,
}

/// Running totals while the window is open.
#[derive(Debug, Clone)]
pub struct RunningSums {
    /// PET total so far.
    pub pet: Grid,
    /// AET total so far.
    pub aet: Grid,
    /// Precipitation total so far.
    pub precipitation: Grid,
    /// Runoff total so far.
    pub runoff: Grid,
    /// Soil-moisture total so far (divided by the day count on finalize).
    pub soil_moisture: Grid,
    /// Number of days summed so far.
    pub n_days: usize,
}

impl RunningSums {
    fn first(fields: &DayFields<'_>) -> Self {
        Self {
            pet: fields.pet.clone(),
            aet: fields.aet.clone(),
            precipitation: fields.precipitation.clone(),
            runoff: fields.runoff.clone(),
            soil_moisture: fields.soil_moisture.clone(),
            n_days: 1,
        }
    }

    fn add(&mut self, fields: &DayFields<'_>) -> Result<(), AccumulateError> {
        self.pet = self.pet.add(fields.pet)?;
        self.aet = self.aet.add(fields.aet)?;
        self.precipitation = self.precipitation.add(fields.precipitation)?;
        self.runoff = self.runoff.add(fields.runoff)?;
        self.soil_moisture = self.soil_moisture.add(fields.soil_moisture)?;
        self.n_days += 1;
        Ok(())
    }
}

/// The five summary grids emitted when the window closes.
#[derive(Debug, Clone)]
pub struct AccumulationSummary {
    /// PET total over the window.
    pub pet_sum: Grid,
    /// AET total over the window.
    pub aet_sum: Grid,
    /// Precipitation total over the window.
    pub precipitation_sum: Grid,
    /// Runoff total over the window.
    pub runoff_sum: Grid,
    /// Mean soil moisture over the window.
    pub soil_moisture_mean: Grid,
    /// Number of days the window covered.
    pub n_days: usize,
}

/// Per-combination running sums over the accumulation window.
#[derive(Debug, Clone)]
pub struct TemporalAccumulator {
    window: AccumulationWindow,
    phase: Phase,
    sums: Option<RunningSums>,
}

impl TemporalAccumulator {
    /// Creates an inactive accumulator for the given window.
    pub fn new(window: AccumulationWindow) -> Self {
        Self {
            window,
            phase: Phase::Inactive,
            sums: None,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the window this accumulator covers.
    pub fn window(&self) -> AccumulationWindow {
        self.window
    }

    /// Returns the running totals while the window is open, for
    /// snapshot persistence by the caller.
    pub fn sums(&self) -> Option<&RunningSums> {
        self.sums.as_ref()
    }

    /// Feeds one day's grids to the accumulator.
    ///
    /// Days outside the window and days after finalization are ignored.
    /// Observing the window's end date closes the window and returns the
    /// summary: four variable totals plus the soil-moisture mean.
    pub fn observe(
        &mut self,
        date: DayId,
        fields: DayFields<'_>,
    ) -> Result<Option<AccumulationSummary>, AccumulateError> {
        if self.phase == Phase::Finalized || !self.window.contains(date) {
            return Ok(None);
        }

        match &mut self.sums {
            None => {
                self.sums = Some(RunningSums::first(&fields));
                self.phase = Phase::Accumulating;
            }
            Some(sums) => sums.add(&fields)?,
        }

        if date == self.window.end() {
            let sums = self.sums.take().expect("sums exist while accumulating");
            self.phase = Phase::Finalized;
            let n_days = sums.n_days;
            return Ok(Some(AccumulationSummary {
                pet_sum: sums.pet,
                aet_sum: sums.aet,
                precipitation_sum: sums.precipitation,
                runoff_sum: sums.runoff,
                soil_moisture_mean: sums.soil_moisture.div_scalar(n_days as f64),
                n_days,
            }));
        }
        Ok(None)
    }

    /// Returns the accumulator to `Inactive` for the next combination.
    pub fn reset(&mut self) {
        self.phase = Phase::Inactive;
        self.sums = None;
    }
}
