//! Chart series for the dashboard.
//!
//! Bar and pie series are plain aggregates. The weekly series spreads a total
//! across seven days with a seeded pseudo-random weighting: it only smooths
//! the display and is not a record of when anything was earned.

use crate::core::access::{AccessView, WorkerView};
use crate::core::logic::Core;
use crate::models::{cell::Cell, row::Row, row_kind::RowKind, totals::ADMIN_SPLIT, worker::Worker};
use crate::utils::formatting::round2;
use serde::Serialize;
use std::collections::BTreeMap;

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Series name of a worker's own weekly share.
pub const OWN_SHARE_SERIES: &str = "My 50%";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub name: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiePoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub bar: Vec<BarPoint>,
    pub series_keys: Vec<String>,
    pub series: Vec<SeriesPoint>,
    pub pie: Vec<PiePoint>,
}

/// Value in `[0, 1)` derived from `seed` alone.
///
/// 32-bit wrapping string hash over UTF-16 units, fed through `sin`.
pub fn deterministic_random(seed: &str) -> f64 {
    let hash = seed.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32)
    });
    let x = f64::from(hash).sin() * 10000.0;
    x - x.floor()
}

/// Split `total` over the week. Each day is rounded to cents and the last day
/// absorbs the rounding remainder, so the days add back up to `total`.
pub fn distribute_total_across_week(seed: &str, total: f64) -> [f64; 7] {
    let mut days = [0.0; 7];
    if total == 0.0 {
        return days;
    }

    let weights: Vec<f64> = WEEK_DAYS
        .iter()
        .enumerate()
        .map(|(i, day)| deterministic_random(&format!("{seed}-{day}-{i}")) + 0.15)
        .collect();
    let weight_sum: f64 = weights.iter().sum();

    let mut remaining = total;
    let last = WEEK_DAYS.len() - 1;
    for (i, weight) in weights.iter().enumerate() {
        if i == last {
            days[i] = round2(remaining);
        } else {
            let rounded = round2(weight / weight_sum * total);
            remaining -= rounded;
            days[i] = rounded;
        }
    }

    days
}

/// Counts keyed by name, keeping first-seen order.
fn tally<'a>(names: impl Iterator<Item = &'a str>) -> Vec<BarPoint> {
    let mut points: Vec<BarPoint> = Vec::new();
    for name in names {
        match points.iter_mut().find(|p| p.name == name) {
            Some(point) => point.count += 1,
            None => points.push(BarPoint {
                name: name.to_string(),
                count: 1,
            }),
        }
    }
    points
}

fn weekly_series(per_key: &[(String, [f64; 7])]) -> Vec<SeriesPoint> {
    WEEK_DAYS
        .iter()
        .enumerate()
        .map(|(i, day)| SeriesPoint {
            name: day.to_string(),
            values: per_key
                .iter()
                .map(|(key, days)| (key.clone(), days[i]))
                .collect(),
        })
        .collect()
}

/// Admin charts: service frequency over all workers, each worker's total
/// spread over the week, and the split of totals between workers.
pub fn admin_charts(rows: &[Row]) -> ChartSet {
    let service_names = rows
        .iter()
        .filter(|r| r.is(RowKind::Service))
        .flat_map(|r| r.cells().map(|(_, c)| c))
        .filter_map(|c| match c {
            Cell::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        });
    let bar = tally(service_names);

    let summary = Core::summarize(rows);
    let total_of = |w: &Worker| summary.totals.get(w).map(|t| t.total).unwrap_or(0.0);

    let per_worker: Vec<(String, [f64; 7])> = Worker::ALL
        .iter()
        .map(|w| {
            let seed = format!("admin-{}", w.key());
            (w.key().to_string(), distribute_total_across_week(&seed, total_of(w)))
        })
        .collect();

    let pie = Worker::ALL
        .iter()
        .map(|w| PiePoint {
            name: w.key().to_string(),
            value: total_of(w),
        })
        .collect();

    ChartSet {
        bar,
        series_keys: Worker::ALL.iter().map(|w| w.key().to_string()).collect(),
        series: weekly_series(&per_worker),
        pie,
    }
}

/// Worker charts: own service frequency, own 50% spread over the week, and
/// own 50% split by service.
pub fn worker_charts(view: &WorkerView) -> ChartSet {
    let bar = tally(view.entries().map(|e| e.service.as_str()));

    let earned: f64 = view.entries().map(|e| e.earnings).sum();
    let share = round2(earned * (1.0 - ADMIN_SPLIT));
    let per_day = distribute_total_across_week("worker-share", share);

    let mut pie: Vec<PiePoint> = Vec::new();
    for entry in view.entries() {
        let part = entry.earnings * (1.0 - ADMIN_SPLIT);
        match pie.iter_mut().find(|p| p.name == entry.service) {
            Some(point) => point.value += part,
            None => pie.push(PiePoint {
                name: entry.service.clone(),
                value: part,
            }),
        }
    }

    ChartSet {
        bar,
        series_keys: vec![OWN_SHARE_SERIES.to_string()],
        series: weekly_series(&[(OWN_SHARE_SERIES.to_string(), per_day)]),
        pie,
    }
}

pub fn charts_for(view: &AccessView) -> ChartSet {
    match view {
        AccessView::Admin(admin) => admin_charts(&admin.rows),
        AccessView::Worker(worker) => worker_charts(worker),
    }
}
