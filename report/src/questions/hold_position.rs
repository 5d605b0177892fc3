use super::*;

use analysis::heatmap::{self, HeatMap};

pub struct HoldPositionAnalysis {}

impl HoldPositionAnalysis {
    pub fn new() -> Self {
        Self {}
    }
}

fn filter(settings: &crate::Settings) -> EventFilter {
    EventFilter::new()
        .team(settings.team.clone())
        .side(settings.defend_side)
        .area(settings.target_area.clone())
}

/// Positions of the defending side inside the target area.
pub fn positions(input: &AnalysisInput<'_, '_>) -> Vec<(f64, f64)> {
    let filter = filter(input.settings);
    analysis::aggregate::positions(input.select(&filter), |_| true)
}

pub fn density(input: &AnalysisInput<'_, '_>) -> Option<HeatMap> {
    let config = heatmap::Config {
        cell_size: input.settings.cell_size,
    };
    HeatMap::from_positions(&config, &positions(input))
}

fn encode_png(heatmap: &HeatMap) -> Result<String, crate::ReportError> {
    use base64::Engine;

    let mut buffer = std::io::Cursor::new(Vec::new());
    heatmap
        .as_image()
        .write_to(&mut buffer, image::ImageFormat::Png)?;

    Ok(base64::prelude::BASE64_STANDARD.encode(buffer.into_inner()))
}

impl Analysis for HoldPositionAnalysis {
    fn name(&self) -> &'static str {
        "hold-position"
    }

    #[tracing::instrument(name = "HoldPosition", skip(self, input, report))]
    fn analyse(
        &self,
        input: &AnalysisInput<'_, '_>,
        report: &mut common::TacticalReport,
    ) -> Result<(), crate::ReportError> {
        let settings = input.settings;

        let samples = positions(input).len();
        let heatmap = density(input);

        let hottest = heatmap.as_ref().and_then(|h| h.hottest_cell()).map(|cell| common::HotCell {
            min_x: cell.min_x,
            min_y: cell.min_y,
            max_x: cell.max_x,
            max_y: cell.max_y,
            count: cell.count,
        });

        tracing::info!("{} samples, hottest cell {:?}", samples, hottest);

        let png_data = match heatmap.as_ref().filter(|_| settings.embed_png) {
            Some(h) => Some(encode_png(h)?),
            None => None,
        };

        report.hold_position = Some(common::HoldPositionAnswer {
            selection: selection(&settings.team, settings.defend_side),
            area: settings.target_area.clone(),
            samples,
            hottest,
            png_data,
        });

        Ok(())
    }
}
