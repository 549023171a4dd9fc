use crate::aspects::AspectCalculator;
use crate::chart::{BirthInput, NatalChart};
use crate::ephemeris::ChartObject;
use crate::time::Accuracy;
use crate::western::Sign;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Placements summarised at the top of every report, in this order.
pub const BIG_SIX: [ChartObject; 6] = [
    ChartObject::Sun,
    ChartObject::Moon,
    ChartObject::Ascendant,
    ChartObject::Mercury,
    ChartObject::Venus,
    ChartObject::Mars,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    pub summary: String,
    pub big_six: Vec<String>,
    pub aspects: Vec<String>,
    pub accuracy: Accuracy,
}

/// Turns a computed chart into readable text.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    aspects: AspectCalculator,
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, chart: &NatalChart, input: &BirthInput) -> ChartReport {
        let big_six = self.big_six(chart);
        let aspects: Vec<String> = self
            .aspects
            .aspects_among(&chart.positions)
            .iter()
            .map(|a| a.to_string())
            .collect();
        let summary = compose_summary(chart, input, &big_six, &aspects);

        ChartReport {
            summary,
            big_six,
            aspects,
            accuracy: chart.result.accuracy,
        }
    }

    /// "Sun in Aquarius (House 8)" per big-six object, or
    /// "Sun - unavailable" when its lookup failed.
    pub fn big_six(&self, chart: &NatalChart) -> Vec<String> {
        BIG_SIX
            .iter()
            .map(|object| match chart.position(*object) {
                Some(pos) => format!(
                    "{} in {} (House {})",
                    object,
                    Sign::from_longitude(pos.lon).title(),
                    chart.houses.house_of(pos.lon)
                ),
                None => format!("{} - unavailable", object),
            })
            .collect()
    }
}

fn compose_summary(
    chart: &NatalChart,
    input: &BirthInput,
    big_six: &[String],
    aspects: &[String],
) -> String {
    let result = &chart.result;
    let mut out = String::from("Natal Chart Analysis\n\n");

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "Birth Data: {} at {} in {}",
        input.date.trim(),
        input.known_time().unwrap_or("time unknown"),
        place_label(&input.place_name)
    );
    let _ = writeln!(
        out,
        "Coordinates: {}, {}",
        format_coordinate(input.latitude, 'N', 'S'),
        format_coordinate(input.longitude, 'E', 'W')
    );
    let _ = writeln!(
        out,
        "Timezone: {} (UTC {})",
        result.timezone,
        result.utc_datetime.format("%Y-%m-%dT%H:%M:%SZ")
    );
    let _ = writeln!(out, "Accuracy: {}", result.accuracy);

    out.push_str("\nCore Planetary Placements:\n");
    for placement in big_six {
        let _ = writeln!(out, "• {placement}");
    }

    let _ = writeln!(out, "\nMajor Aspects ({} found):", aspects.len());
    if aspects.is_empty() {
        out.push_str("• None within standard orbs\n");
    }
    for aspect in aspects {
        let _ = writeln!(out, "• {aspect}");
    }

    if result.accuracy == Accuracy::Medium {
        out.push_str(
            "\nNote: Birth time unknown. Houses and the Ascendant assume local noon \
             and may be inaccurate.\n",
        );
    }

    out
}

fn place_label(place: &str) -> &str {
    let trimmed = place.trim();
    if trimmed.is_empty() {
        "unknown location"
    } else {
        trimmed
    }
}

/// 40.7128 -> "40.71°N", -74.006 -> "74.01°W"
fn format_coordinate(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    format!("{:.2}°{}", value.abs(), hemisphere)
}
