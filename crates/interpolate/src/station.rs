//! Station registry and daily precipitation observations.

use std::collections::BTreeMap;

use tracing::warn;

use swm_calendar::DayId;

/// A precipitation gauge with planar coordinates in grid length units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Station identifier (`Stationsnummer`).
    pub id: u32,
    /// Easting of the gauge.
    pub x: f64,
    /// Northing of the gauge.
    pub y: f64,
}

/// One daily precipitation total for one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Station identifier (`Stationsnummer`).
    pub station_id: u32,
    /// Observation date (`TagesID`).
    pub date: DayId,
    /// Daily precipitation total in mm (`Tagessumme_mm`).
    pub amount_mm: f64,
}

/// A located observation ready for interpolation: station coordinates
/// joined with the day's amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSample {
    /// Station identifier, used as the deterministic tie-break.
    pub id: u32,
    /// Easting of the gauge.
    pub x: f64,
    /// Northing of the gauge.
    pub y: f64,
    /// Observed daily amount in mm.
    pub amount_mm: f64,
}

/// Station registry joined with the observation table, indexed by date.
///
/// Observations are unique per (station, date); a duplicate replaces the
/// earlier value. Observations for unknown stations are dropped with a
/// warning rather than failing the whole load.
#[derive(Debug, Clone, Default)]
pub struct ObservationSet {
    stations: BTreeMap<u32, Station>,
    by_date: BTreeMap<DayId, BTreeMap<u32, f64>>,
}

impl ObservationSet {
    /// Builds the set from a station registry and raw observation rows.
    pub fn new(stations: Vec<Station>, observations: Vec<Observation>) -> Self {
        let stations: BTreeMap<u32, Station> = stations.into_iter().map(|s| (s.id, s)).collect();
        let mut by_date: BTreeMap<DayId, BTreeMap<u32, f64>> = BTreeMap::new();
        for obs in observations {
            if !stations.contains_key(&obs.station_id) {
                warn!(
                    station = obs.station_id,
                    date = %obs.date,
                    "dropping observation for unknown station"
                );
                continue;
            }
            by_date
                .entry(obs.date)
                .or_default()
                .insert(obs.station_id, obs.amount_mm);
        }
        Self { stations, by_date }
    }

    /// Returns the number of registered stations.
    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    /// Returns the located observations for one date, ordered by
    /// ascending station id. Empty when no station reported.
    pub fn for_date(&self, date: DayId) -> Vec<StationSample> {
        let Some(day) = self.by_date.get(&date) else {
            return Vec::new();
        };
        day.iter()
            .map(|(&id, &amount_mm)| {
                let station = &self.stations[&id];
                StationSample {
                    id,
                    x: station.x,
                    y: station.y,
                    amount_mm,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(id: u32) -> DayId {
        DayId::from_yyyymmdd(id).unwrap()
    }

    fn registry() -> Vec<Station> {
        vec![
            Station { id: 2, x: 10.0, y: 0.0 },
            Station { id: 1, x: 0.0, y: 0.0 },
        ]
    }

    #[test]
    fn join_orders_by_station_id() {
        let obs = vec![
            Observation {
                station_id: 2,
                date: day(20030101),
                amount_mm: 5.0,
            },
            Observation {
                station_id: 1,
                date: day(20030101),
                amount_mm: 3.0,
            },
        ];
        let set = ObservationSet::new(registry(), obs);
        let samples = set.for_date(day(20030101));
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].id, 1);
        assert_eq!(samples[0].amount_mm, 3.0);
        assert_eq!(samples[1].id, 2);
    }

    #[test]
    fn missing_date_is_empty() {
        let set = ObservationSet::new(registry(), Vec::new());
        assert!(set.for_date(day(20030101)).is_empty());
    }

    #[test]
    fn unknown_station_is_dropped() {
        let obs = vec![Observation {
            station_id: 99,
            date: day(20030101),
            amount_mm: 1.0,
        }];
        let set = ObservationSet::new(registry(), obs);
        assert!(set.for_date(day(20030101)).is_empty());
        assert_eq!(set.n_stations(), 2);
    }

    #[test]
    fn duplicate_observation_replaces() {
        let obs = vec![
            Observation {
                station_id: 1,
                date: day(20030101),
                amount_mm: 1.0,
            },
            Observation {
                station_id: 1,
                date: day(20030101),
                amount_mm: 2.5,
            },
        ];
        let set = ObservationSet::new(registry(), obs);
        let samples = set.for_date(day(20030101));
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].amount_mm, 2.5);
    }
}
