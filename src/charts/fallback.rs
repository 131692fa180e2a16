//! Literal datasets shown when uploaded data cannot fill a chart.

use super::{ChartData, DisplayMetric, DistributionSlice, SeriesPoint};

const TIME_SERIES: [(&str, f64, f64); 7] = [
    ("Jan", 400.0, 240.0),
    ("Feb", 300.0, 456.0),
    ("Mar", 600.0, 321.0),
    ("Apr", 800.0, 567.0),
    ("May", 500.0, 432.0),
    ("Jun", 900.0, 678.0),
    ("Jul", 750.0, 543.0),
];

const CATEGORY_SERIES: [(&str, f64, f64); 7] = [
    ("Mon", 186.0, 80.0),
    ("Tue", 305.0, 200.0),
    ("Wed", 237.0, 120.0),
    ("Thu", 273.0, 190.0),
    ("Fri", 209.0, 130.0),
    ("Sat", 314.0, 140.0),
    ("Sun", 187.0, 100.0),
];

const DISTRIBUTION: [(&str, f64); 4] = [
    ("Marketing", 400.0),
    ("Sales", 300.0),
    ("Development", 300.0),
    ("Support", 200.0),
];

/// Dashboard figures for callers to show when `summary_metrics` is absent.
pub static DEFAULT_DISPLAY_METRICS: [DisplayMetric; 4] = [
    DisplayMetric {
        label: "Total Reports",
        value: "1,284",
    },
    DisplayMetric {
        label: "Data Processed",
        value: "847 GB",
    },
    DisplayMetric {
        label: "Active Users",
        value: "12,549",
    },
    DisplayMetric {
        label: "Growth Rate",
        value: "+24.5%",
    },
];

fn points(literal: &[(&str, f64, f64)]) -> Vec<SeriesPoint> {
    literal
        .iter()
        .map(|&(label, value, value2)| SeriesPoint {
            label: label.to_owned(),
            value,
            value2: Some(value2),
        })
        .collect()
}

pub fn time_series() -> Vec<SeriesPoint> {
    points(&TIME_SERIES)
}

pub fn category_series() -> Vec<SeriesPoint> {
    points(&CATEGORY_SERIES)
}

pub fn distribution() -> Vec<DistributionSlice> {
    DISTRIBUTION
        .iter()
        .map(|&(label, value)| DistributionSlice {
            label: label.to_owned(),
            value,
        })
        .collect()
}

/// The complete no-data dataset.
pub fn chart_data() -> ChartData {
    ChartData {
        time_series: time_series(),
        category_series: category_series(),
        distribution: distribution(),
        summary_metrics: None,
    }
}
