use analysis::annotate::{AnnotatedEvent, Batch};
use analysis::event::EventFilter;

pub mod entry_route;
pub mod entry_timing;
pub mod hold_position;

pub struct AnalysisInput<'b, 'e> {
    pub batch: &'b Batch<'e>,
    pub settings: &'b crate::Settings,
}

impl<'b, 'e> AnalysisInput<'b, 'e> {
    pub fn select<'s>(&'s self, filter: &'s EventFilter) -> impl Iterator<Item = &'b AnnotatedEvent<'e>> + 's {
        self.batch.events.iter().filter(move |e| filter.matches(e.event))
    }
}

pub trait Analysis {
    fn name(&self) -> &'static str;

    fn analyse(
        &self,
        input: &AnalysisInput<'_, '_>,
        report: &mut common::TacticalReport,
    ) -> Result<(), crate::ReportError>;
}

pub static ANALYSIS_METHODS: std::sync::LazyLock<[std::sync::Arc<dyn Analysis + Send + Sync>; 3]> =
    std::sync::LazyLock::new(|| {
        [
            std::sync::Arc::new(entry_route::EntryRouteAnalysis::new()),
            std::sync::Arc::new(entry_timing::EntryTimingAnalysis::new()),
            std::sync::Arc::new(hold_position::HoldPositionAnalysis::new()),
        ]
    });

/// Runs every question on an already annotated batch.
#[tracing::instrument(skip(input), fields(rows = input.batch.events.len()))]
pub fn run(input: &AnalysisInput<'_, '_>) -> Result<common::TacticalReport, crate::ReportError> {
    let mut report = common::TacticalReport {
        rows: input.batch.events.len() + input.batch.rejected.len(),
        rejected_rows: input.batch.rejected.len(),
        ..Default::default()
    };

    for method in ANALYSIS_METHODS.iter() {
        let _guard = tracing::debug_span!("Analysis", name = method.name()).entered();
        method.analyse(input, &mut report)?;
    }

    Ok(report)
}

/// Annotates `events` with the zone and weapon classes of `settings` and
/// answers every question.
pub fn answer(
    events: &[analysis::event::Event],
    settings: &crate::Settings,
) -> Result<common::TacticalReport, crate::ReportError> {
    let batch = Batch::annotate(&settings.annotation(), events);

    run(&AnalysisInput {
        batch: &batch,
        settings,
    })
}

fn selection(team: &str, side: analysis::event::Side) -> common::TeamSelection {
    common::TeamSelection {
        team: team.to_owned(),
        side: side.to_string(),
    }
}
