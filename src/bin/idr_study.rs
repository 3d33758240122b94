use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing::info;
use tracing_subscriber::EnvFilter;

use idr_study_parser::error::StudyError;
use idr_study_parser::output::JsonOutput;
use idr_study_parser::report::AnnotationObject;
use idr_study_parser::schema::SchemaRegistry;
use idr_study_parser::study::ParsedStudy;

#[derive(Parser)]
#[command(name = "idr-study")]
#[command(about = "Parse IDR study description files and generate annotation reports")]
#[command(version, author)]
struct Cli {
    /// Study files to parse
    #[arg(required = true)]
    studyfile: Vec<Utf8PathBuf>,

    /// Create a report of the generated objects
    #[arg(long)]
    report: bool,

    /// Emit the report as JSON instead of tab-separated text
    #[arg(long, requires = "report")]
    json: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(study) = report.downcast_ref::<StudyError>() {
            return ExitCode::from(map_exit_code(study));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &StudyError) -> u8 {
    match error {
        StudyError::StudyRead(_) => 2,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = SchemaRegistry;

    for path in &cli.studyfile {
        let parsed = ParsedStudy::from_file(&registry, path)?;
        if !cli.report {
            continue;
        }

        let objects = parsed
            .components
            .iter()
            .map(AnnotationObject::build)
            .collect::<Result<Vec<_>, StudyError>>()?;

        if cli.json {
            JsonOutput::print_report(&objects).into_diagnostic()?;
        } else {
            for object in &objects {
                info!("generating annotations for {}", object.name);
                println!("description:\n{}\n", object.description);
                println!("map:");
                for (label, value) in &object.map {
                    println!("{label}\t{value}");
                }
            }
        }
    }
    Ok(())
}
