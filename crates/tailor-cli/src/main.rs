//! Command line front end for the resume tailoring workflow

use clap::{Arg, Command};
use tailor_core::{
    BackendStages, ResumeDocument, RunView, TailorConfig, TailoringInputs, WorkflowOrchestrator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("resume-tailor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Upload a resume, tailor it against a job description, export the result")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("JSON config file with the backend base URL (falls back to RESUME_TAILOR_BACKEND_URL)"),
        )
        .arg(
            Arg::new("resume")
                .long("resume")
                .short('r')
                .value_name("FILE")
                .required(true)
                .help("Resume document to upload (.docx)"),
        )
        .arg(
            Arg::new("jd-url")
                .long("jd-url")
                .value_name("URL")
                .help("Job description URL"),
        )
        .arg(
            Arg::new("jd-text")
                .long("jd-text")
                .value_name("TEXT")
                .help("Job description text"),
        )
        .arg(
            Arg::new("jd-file")
                .long("jd-file")
                .value_name("FILE")
                .conflicts_with("jd-text")
                .help("File containing the job description text"),
        )
        .arg(
            Arg::new("company-url")
                .long("company-url")
                .value_name("URL")
                .help("Company website URL"),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => TailorConfig::from_file(path)?,
        None => TailorConfig::from_env()?,
    };

    let resume_path = matches.get_one::<String>("resume").unwrap();
    let bytes = std::fs::read(resume_path)?;
    let filename = std::path::Path::new(resume_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.docx".to_string());
    let document = ResumeDocument::new(bytes, filename);

    let jd_text = match matches.get_one::<String>("jd-file") {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => matches.get_one::<String>("jd-text").cloned(),
    };

    let inputs = TailoringInputs {
        job_description_url: matches.get_one::<String>("jd-url").cloned(),
        job_description_text: jd_text,
        company_url: matches.get_one::<String>("company-url").cloned(),
    };

    let stages = BackendStages::new(config.backend)?;
    let orchestrator = WorkflowOrchestrator::new(stages);

    let outcome = orchestrator.run(Some(document), inputs).await;

    // Partial results (a tailoring result from a run whose export
    // failed) are still worth showing.
    let view = RunView::from_snapshot(&orchestrator.snapshot());
    print!("{}", view.render_text());

    outcome?;
    Ok(())
}
