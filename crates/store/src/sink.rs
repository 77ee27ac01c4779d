//! Result sinks for per-combination streamflow series.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use swm_calendar::DayId;

use crate::error::StoreError;

/// Append-only destination for one combination's daily streamflow rows.
pub trait ResultSink {
    /// Writes a complete series under `name`, one row per day.
    fn write_series(&mut self, name: &str, rows: &[(DayId, f64)]) -> Result<(), StoreError>;
}

/// Sink collecting series in memory, for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    series: BTreeMap<String, Vec<(DayId, f64)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected series by name.
    pub fn series(&self) -> &BTreeMap<String, Vec<(DayId, f64)>> {
        &self.series
    }
}

impl ResultSink for MemorySink {
    fn write_series(&mut self, name: &str, rows: &[(DayId, f64)]) -> Result<(), StoreError> {
        self.series.insert(name.to_string(), rows.to_vec());
        Ok(())
    }
}

/// Sink writing one `{name}.csv` per combination with columns `Datum`
/// (`dd.mm.yyyy`) and `Q` (m³/s).
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    /// Opens (and creates if needed) a sink directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            path: dir.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }
}

impl ResultSink for CsvSink {
    fn write_series(&mut self, name: &str, rows: &[(DayId, f64)]) -> Result<(), StoreError> {
        let path = self.dir.join(format!("{name}.csv"));
        let csv_err = |reason: String| StoreError::Csv {
            path: path.clone(),
            reason,
        };

        let mut writer = csv::Writer::from_path(&path).map_err(|e| csv_err(e.to_string()))?;
        writer
            .write_record(["Datum", "Q"])
            .map_err(|e| csv_err(e.to_string()))?;
        for (date, q) in rows {
            writer
                .write_record([date.format_dotted(), q.to_string()])
                .map_err(|e| csv_err(e.to_string()))?;
        }
        writer.flush().map_err(|e| csv_err(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<(DayId, f64)> {
        vec![
            (DayId::new(2003, 1, 1).unwrap(), 0.125),
            (DayId::new(2003, 1, 2).unwrap(), 0.5),
        ]
    }

    #[test]
    fn memory_sink_collects_by_name() {
        let mut sink = MemorySink::new();
        sink.write_series("Q_rp85_c150", &rows()).unwrap();
        assert_eq!(sink.series()["Q_rp85_c150"].len(), 2);
    }

    #[test]
    fn csv_sink_writes_dotted_dates() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvSink::new(dir.path().join("results")).unwrap();
        sink.write_series("Q_rp85_c150_idw100_s20030101_e20030102", &rows())
            .unwrap();

        let text = fs::read_to_string(
            dir.path()
                .join("results/Q_rp85_c150_idw100_s20030101_e20030102.csv"),
        )
        .unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "Datum,Q");
        assert_eq!(lines.next().unwrap(), "01.01.2003,0.125");
        assert_eq!(lines.next().unwrap(), "02.01.2003,0.5");
    }
}
