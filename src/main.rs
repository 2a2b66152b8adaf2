mod cli;

use cli::Args;
use sbom_notice::adapters::outbound::console::StderrProgressReporter;
use sbom_notice::adapters::outbound::filesystem::{
    FileSystemLicenseTextStore, FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use sbom_notice::application::dto::{AttributionRequest, OutputFormat};
use sbom_notice::application::factories::FormatterFactory;
use sbom_notice::application::use_cases::GenerateAttributionUseCase;
use sbom_notice::attribution::domain::AttributionModel;
use sbom_notice::config::{self, AttributionConfig, ConfigFile};
use sbom_notice::ports::outbound::{OutputPresenter, RenderContext, TemplateReader};
use sbom_notice::shared::error::{AttributionError, ExitCode};
use sbom_notice::shared::Result;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help and --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    if args.stdout && config.format == OutputFormat::All {
        return Err(AttributionError::Validation {
            message: "--stdout needs a single format; pass --format notice or --format html"
                .to_string(),
        }
        .into());
    }

    // Create adapters (Dependency Injection)
    let sbom_reader = FileSystemReader::new();
    let license_text_store = FileSystemLicenseTextStore::new(config.out_licenses_dir.clone());
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        GenerateAttributionUseCase::new(sbom_reader, license_text_store, progress_reporter);

    let request = AttributionRequest::new(config.sbom_path.clone())
        .with_filters(config.filters.clone())
        .with_dry_run(args.dry_run);

    let response = use_case.execute(request)?;

    let Some(model) = response.model else {
        // Dry run: also check the templates the run would use
        for format in config.format.artifacts() {
            render_context(&config, format)?;
        }
        return Ok(());
    };

    for format in config.format.artifacts() {
        write_artifact(&config, format, &model, args.stdout)?;
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<AttributionConfig> {
    let file: Option<ConfigFile> = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };

    AttributionConfig::resolve(file, args.overrides())
}

fn render_context(config: &AttributionConfig, format: OutputFormat) -> Result<RenderContext> {
    let template = match config.template_path(format) {
        Some(path) => Some(FileSystemReader::new().read_template(path)?),
        None => None,
    };

    Ok(RenderContext::new(config.repo_name.clone(), config.spdx_version.clone())
        .with_template(template))
}

fn write_artifact(
    config: &AttributionConfig,
    format: OutputFormat,
    model: &AttributionModel,
    to_stdout: bool,
) -> Result<()> {
    let Some(formatter) = FormatterFactory::create(format) else {
        return Ok(());
    };

    eprintln!("{}", FormatterFactory::progress_message(format));

    let context = render_context(config, format)?;
    let output = formatter.format(model, &context)?;

    let presenter: Box<dyn OutputPresenter> = if to_stdout {
        Box::new(StdoutPresenter::new())
    } else {
        Box::new(FileSystemWriter::new(
            config.artifact_path(formatter.file_name()),
        ))
    };

    presenter.present(&output)
}
