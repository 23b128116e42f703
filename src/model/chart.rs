use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use super::note::{LANE_COUNT, Note};

/// A note record as produced by an external chart parser, before
/// normalization. Lanes outside the playable range are filtered out.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawNote {
    pub lane: i64,
    pub time: f64,
    #[serde(default)]
    pub duration: f64,
}

/// Boundary to the external chart-parsing library. The runtime never parses
/// chart formats itself; it consumes the records a parser hands it.
pub trait ChartParser {
    fn parse(&self, text: &str) -> Result<Vec<RawNote>>;
}

/// Default feed: a JSON array of already-normalized `{lane, time, duration}`
/// records.
pub struct JsonChartParser;

impl ChartParser for JsonChartParser {
    fn parse(&self, text: &str) -> Result<Vec<RawNote>> {
        serde_json::from_str(text).context("chart payload is not a JSON note array")
    }
}

/// Run the parser and normalize its output into the chart sequence the
/// scheduler consumes: playable lanes only, non-decreasing in time.
///
/// An unparseable chart is a soft failure: it logs a diagnostic and yields an
/// empty sequence, so playback proceeds with zero notes instead of aborting.
pub fn process_chart<P: ChartParser>(parser: &P, text: &str) -> Vec<Note> {
    let raw = match parser.parse(text) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("no usable notes in chart: {e:#}");
            return Vec::new();
        }
    };

    let mut notes: Vec<Note> = raw
        .into_iter()
        .filter(|r| (0..LANE_COUNT as i64).contains(&r.lane))
        .map(|r| Note {
            lane: r.lane as usize,
            time: r.time,
            duration: r.duration,
        })
        .collect();

    notes.sort_by(|a, b| a.time.total_cmp(&b.time));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_json_chart() {
        let text = r#"[
            {"lane": 1, "time": 1.5, "duration": 0.0},
            {"lane": 0, "time": 1.0},
            {"lane": 4, "time": 3.0, "duration": 0.25}
        ]"#;
        let notes = process_chart(&JsonChartParser, text);
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].time, 1.0);
        assert_eq!(notes[1].time, 1.5);
        assert_eq!(notes[2].duration, 0.25);
    }

    #[test]
    fn filters_out_of_range_lanes() {
        let text = r#"[
            {"lane": -1, "time": 0.5},
            {"lane": 5, "time": 0.6},
            {"lane": 2, "time": 0.7}
        ]"#;
        let notes = process_chart(&JsonChartParser, text);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].lane, 2);
    }

    #[test]
    fn unparseable_chart_yields_empty_sequence() {
        let notes = process_chart(&JsonChartParser, "not a chart");
        assert!(notes.is_empty());
    }

    #[test]
    fn output_is_sorted_by_time() {
        let text = r#"[
            {"lane": 0, "time": 2.0},
            {"lane": 1, "time": 0.5},
            {"lane": 2, "time": 1.0}
        ]"#;
        let notes = process_chart(&JsonChartParser, text);
        assert!(notes.windows(2).all(|w| w[0].time <= w[1].time));
    }
}
