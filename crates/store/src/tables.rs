//! CSV readers for the climate, station, and observation tables.
//!
//! Column names follow the established table schemas (`TagesID`,
//! `RelFeu`, `Stationsnummer`, `Tagessumme_mm`, ...) so existing data
//! exports load unchanged. Rows come back sorted by their day id where
//! the schema carries one.

use std::path::Path;

use serde::Deserialize;

use crate::error::StoreError;

/// One row of the daily climate table (`TempFeuchte`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClimateRow {
    /// Day id, YYYYMMDD.
    #[serde(rename = "TagesID")]
    pub tages_id: u32,
    /// Year.
    #[serde(rename = "Jahr")]
    pub jahr: i32,
    /// Month.
    #[serde(rename = "Monat")]
    pub monat: u8,
    /// Day of month.
    #[serde(rename = "Tag")]
    pub tag: u8,
    /// Relative humidity in percent.
    #[serde(rename = "RelFeu")]
    pub rel_feu: f64,
    /// Temperature in °C.
    #[serde(rename = "Temp")]
    pub temp: f64,
}

/// One row of the station registry (`N_Messstationen`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StationRow {
    /// Station identifier.
    #[serde(rename = "Stationsnummer")]
    pub stationsnummer: u32,
    /// Easting in grid length units.
    #[serde(rename = "X")]
    pub x: f64,
    /// Northing in grid length units.
    #[serde(rename = "Y")]
    pub y: f64,
}

/// One row of the daily observation table (`N_Zeitreihen`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ObservationRow {
    /// Station identifier.
    #[serde(rename = "Stationsnummer")]
    pub stationsnummer: u32,
    /// Day id, YYYYMMDD.
    #[serde(rename = "TagesID")]
    pub tages_id: u32,
    /// Daily precipitation total in mm.
    #[serde(rename = "Tagessumme_mm")]
    pub tagessumme_mm: f64,
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, StoreError> {
    let csv_err = |reason: String| StoreError::Csv {
        path: path.to_path_buf(),
        reason,
    };
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_err(e.to_string()))?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| csv_err(e.to_string()))?);
    }
    Ok(rows)
}

/// Reads the climate table, sorted ascending by day id.
pub fn read_climate_table(path: &Path) -> Result<Vec<ClimateRow>, StoreError> {
    let mut rows: Vec<ClimateRow> = read_rows(path)?;
    rows.sort_by_key(|r| r.tages_id);
    Ok(rows)
}

/// Reads the station registry.
pub fn read_station_table(path: &Path) -> Result<Vec<StationRow>, StoreError> {
    read_rows(path)
}

/// Reads the observation table, sorted ascending by (day id, station).
pub fn read_observation_table(path: &Path) -> Result<Vec<ObservationRow>, StoreError> {
    let mut rows: Vec<ObservationRow> = read_rows(path)?;
    rows.sort_by_key(|r| (r.tages_id, r.stationsnummer));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn climate_rows_sorted_by_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("TempFeuchte.csv");
        fs::write(
            &path,
            "TagesID,Jahr,Monat,Tag,RelFeu,Temp\n\
             20030102,2003,1,2,75.0,4.5\n\
             20030101,2003,1,1,80.5,3.0\n",
        )
        .unwrap();
        let rows = read_climate_table(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tages_id, 20030101);
        assert_eq!(rows[0].rel_feu, 80.5);
        assert_eq!(rows[1].temp, 4.5);
    }

    #[test]
    fn station_and_observation_rows() {
        let dir = tempfile::tempdir().unwrap();
        let stations = dir.path().join("N_Messstationen.csv");
        fs::write(
            &stations,
            "Stationsnummer,X,Y\n101,3500000.5,5540000.25\n",
        )
        .unwrap();
        let rows = read_station_table(&stations).unwrap();
        assert_eq!(rows[0].stationsnummer, 101);

        let obs = dir.path().join("N_Zeitreihen.csv");
        fs::write(
            &obs,
            "Stationsnummer,TagesID,Tagessumme_mm\n\
             102,20030101,4.2\n\
             101,20030101,0.0\n",
        )
        .unwrap();
        let rows = read_observation_table(&obs).unwrap();
        assert_eq!(rows[0].stationsnummer, 101);
        assert_eq!(rows[1].tagessumme_mm, 4.2);
    }

    #[test]
    fn malformed_table_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "TagesID,Jahr\nnot-a-number,2003\n").unwrap();
        assert!(matches!(
            read_climate_table(&path),
            Err(StoreError::Csv { .. })
        ));
    }
}
