use clap::Parser;
use std::path::PathBuf;

use sbom_notice::application::dto::OutputFormat;
use sbom_notice::attribution::domain::Filters;
use sbom_notice::config::ConfigOverrides;

/// Generate NOTICE files and HTML license reports from CycloneDX SBOMs
#[derive(Parser, Debug)]
#[command(name = "sbom-notice")]
#[command(version)]
#[command(
    about = "Generate NOTICE files and HTML license reports from CycloneDX SBOMs",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./sbom-notice.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the CycloneDX JSON SBOM [default: third_party/sbom]
    #[arg(short, long, value_name = "PATH")]
    pub sbom: Option<PathBuf>,

    /// Output directory for NOTICE and licenses.html [default: third_party]
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Directory holding license texts named <ID>.txt [default: <out-dir>/licenses]
    #[arg(short = 'l', long, value_name = "DIR")]
    pub licenses_dir: Option<PathBuf>,

    /// Repository name shown in the generated artifacts
    #[arg(short = 'n', long, value_name = "NAME")]
    pub repo_name: Option<String>,

    /// Template wrapping the HTML report; must contain {{content}}
    #[arg(long, value_name = "PATH")]
    pub html_template: Option<PathBuf>,

    /// Template wrapping the NOTICE file; must contain {{content}}
    #[arg(long, value_name = "PATH")]
    pub notice_template: Option<PathBuf>,

    /// Exclude components whose package URL matches this regex
    /// Can be specified multiple times: --exclude-purl "^pkg:npm/@internal/"
    #[arg(long = "exclude-purl", value_name = "REGEX")]
    pub exclude_purl: Vec<String>,

    /// Exclude components whose supplier matches this regex
    #[arg(long = "exclude-supplier", value_name = "REGEX")]
    pub exclude_supplier: Vec<String>,

    /// Artifacts to generate: notice, html or all [default: all]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print the selected artifact to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Validate configuration and the SBOM without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Parses the process arguments, leaving exit handling to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repo_name: self.repo_name.clone(),
            sbom_path: self.sbom.clone(),
            html_template_path: self.html_template.clone(),
            notice_template_path: self.notice_template.clone(),
            out_dir: self.out_dir.clone(),
            out_licenses_dir: self.licenses_dir.clone(),
            format: self.format,
            filters: Filters::new(self.exclude_purl.clone(), self.exclude_supplier.clone()),
        }
    }
}
