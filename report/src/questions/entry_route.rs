use super::*;

pub struct EntryRouteAnalysis {}

impl EntryRouteAnalysis {
    pub fn new() -> Self {
        Self {}
    }
}

impl Analysis for EntryRouteAnalysis {
    fn name(&self) -> &'static str {
        "entry-route"
    }

    #[tracing::instrument(name = "EntryRoute", skip(self, input, report))]
    fn analyse(
        &self,
        input: &AnalysisInput<'_, '_>,
        report: &mut common::TacticalReport,
    ) -> Result<(), crate::ReportError> {
        let settings = input.settings;
        let filter = EventFilter::new()
            .team(settings.team.clone())
            .side(settings.attack_side);

        let tally = analysis::aggregate::majority_tally(input.select(&filter));

        tracing::info!(
            "{} of {} player rounds favor the route",
            tally.favoring_inside,
            tally.pairs.len()
        );

        let pairs = tally
            .pairs
            .iter()
            .map(|((player, round_num), t)| common::PlayerRoundTally {
                player: player.clone(),
                round_num: *round_num,
                inside: t.inside,
                outside: t.outside,
            })
            .collect();

        report.entry_route = Some(common::EntryRouteAnswer {
            selection: selection(&settings.team, settings.attack_side),
            pairs,
            pairs_inside: tally.favoring_inside,
            pairs_outside: tally.favoring_outside,
            common: tally.is_common(),
        });

        Ok(())
    }
}
