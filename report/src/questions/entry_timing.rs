use super::*;

use analysis::aggregate::TimingOutcome;

pub struct EntryTimingAnalysis {}

impl EntryTimingAnalysis {
    pub fn new() -> Self {
        Self {}
    }
}

impl Analysis for EntryTimingAnalysis {
    fn name(&self) -> &'static str {
        "entry-timing"
    }

    #[tracing::instrument(name = "EntryTiming", skip(self, input, report))]
    fn analyse(
        &self,
        input: &AnalysisInput<'_, '_>,
        report: &mut common::TacticalReport,
    ) -> Result<(), crate::ReportError> {
        let settings = input.settings;
        let filter = EventFilter::new()
            .team(settings.team.clone())
            .side(settings.attack_side);

        let outcome = analysis::aggregate::average_latest_clock(
            input.select(&filter),
            analysis::aggregate::armed_in_area(&settings.target_area, settings.min_weapons),
        );

        let (latest, average_clock) = match outcome {
            TimingOutcome::NoOccurrence => {
                tracing::info!("Never in {} with enough weapons", settings.target_area);
                (Vec::new(), None)
            }
            TimingOutcome::Average { latest, mean } => {
                tracing::info!("Average over {} player rounds: {}", latest.len(), mean);

                let latest = latest
                    .into_iter()
                    .map(|((player, round_num), clock)| common::PlayerRoundClock {
                        player,
                        round_num,
                        clock_time: clock.to_string(),
                    })
                    .collect();
                (latest, Some(mean.to_string()))
            }
        };

        report.entry_timing = Some(common::EntryTimingAnswer {
            selection: selection(&settings.team, settings.attack_side),
            area: settings.target_area.clone(),
            weapon_classes: settings.weapon_classes.iter().map(str::to_owned).collect(),
            min_weapons: settings.min_weapons,
            latest,
            average_clock,
        });

        Ok(())
    }
}
