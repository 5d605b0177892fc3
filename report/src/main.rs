use clap::Parser;
use tracing_subscriber::prelude::*;

fn main() -> std::process::ExitCode {
    let args = report::args::Args::parse();

    let level = match args.verbose {
        0 => tracing_subscriber::filter::LevelFilter::WARN,
        1 => tracing_subscriber::filter::LevelFilter::INFO,
        2 => tracing_subscriber::filter::LevelFilter::DEBUG,
        _ => tracing_subscriber::filter::LevelFilter::TRACE,
    };

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().starts_with("report") || meta.target().starts_with("analysis")
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Could not install logging: {}", e);
    }

    match run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(args: &report::args::Args) -> Result<(), report::ReportError> {
    let settings = args.settings();
    let events = report::input::load_events(&args.input)?;

    let batch = analysis::annotate::Batch::annotate(&settings.annotation(), &events);
    let input = report::questions::AnalysisInput {
        batch: &batch,
        settings: &settings,
    };

    let result = report::questions::run(&input)?;

    if let Some(path) = args.heatmap_out.as_ref() {
        match report::questions::hold_position::density(&input) {
            Some(heatmap) => {
                heatmap.as_image().save(path)?;
                tracing::info!("Wrote heatmap to {:?}", path);
            }
            None => tracing::warn!("No positions for a heatmap"),
        }
    }

    match args.format {
        report::args::Format::Text => println!("{}", report::render::text(&result)),
        report::args::Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
