use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Args;
use email_normalizer::{DedupReport, NormalizationPolicy, Normalizer};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::types::error::{PracticeError, Result};

#[derive(Debug, Clone, Args)]
pub struct UniqueEmailsArg {
    /// Files with one address per line; stdin when omitted
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print every unique normalized address after the count
    #[arg(long, conflicts_with = "groups")]
    pub list: bool,

    /// Print every normalized address with the raw spellings that map to it
    #[arg(long)]
    pub groups: bool,

    /// Output format, overriding the configuration
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lowercase addresses before comparing
    #[arg(long)]
    pub lowercase: bool,

    /// Trim whitespace around each address
    #[arg(long)]
    pub trim: bool,
}

impl UniqueEmailsArg {
    /// Apply command-line switches on top of the configured policy
    pub fn policy(&self, configured: &NormalizationPolicy) -> NormalizationPolicy {
        let mut policy = configured.clone();
        policy.lowercase |= self.lowercase;
        policy.trim_whitespace |= self.trim;
        policy
    }
}

/// One address read from an input source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub source: String,
    pub line: usize,
    pub email: String,
}

/// Read addresses from `reader`, skipping blank lines and `#` comments
pub fn read_emails<R: BufRead>(reader: R, source: &str) -> Result<Vec<InputLine>> {
    let mut emails = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        emails.push(InputLine {
            source: source.to_string(),
            line: index + 1,
            email: line,
        });
    }

    Ok(emails)
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<InputLine>> {
    if files.is_empty() {
        debug!("Reading addresses from stdin");
        return read_emails(io::stdin().lock(), "<stdin>");
    }

    let mut emails = Vec::new();
    for path in files {
        debug!("Reading addresses from {:?}", path);
        let file = File::open(path).map_err(|e| {
            PracticeError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        emails.extend(read_emails(BufReader::new(file), &path.display().to_string())?);
    }
    Ok(emails)
}

/// Dedup `inputs`, pointing at the offending line when one is malformed
pub fn dedup_inputs(normalizer: &Normalizer, inputs: &[InputLine]) -> Result<DedupReport> {
    normalizer
        .dedup(inputs.iter().map(|input| input.email.as_str()))
        .map_err(|err| match inputs.iter().find(|input| input.email == err.input) {
            Some(input) => {
                PracticeError::InvalidInput(format!("{}:{}: {}", input.source, input.line, err))
            }
            None => err.into(),
        })
}

#[derive(Serialize)]
struct JsonReport<'a> {
    unique: usize,
    duplicates: usize,
    #[serde(flatten)]
    report: &'a DedupReport,
}

/// Write `report` to `out` in the requested shape
pub fn render<W: Write>(
    out: &mut W,
    report: &DedupReport,
    arg: &UniqueEmailsArg,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = JsonReport {
                unique: report.unique_count(),
                duplicates: report.duplicate_count(),
                report,
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", report.unique_count())?;
            if arg.list {
                for email in report.unique() {
                    writeln!(out, "{}", email)?;
                }
            }
            if arg.groups {
                for (email, raws) in &report.addresses {
                    writeln!(out, "{}: {}", email, raws.join(", "))?;
                }
            }
        }
    }
    Ok(())
}

pub fn unique_emails<W: Write>(
    arg: &UniqueEmailsArg,
    policy: &NormalizationPolicy,
    default_format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let inputs = read_inputs(&arg.files)?;
    let normalizer = Normalizer::new(arg.policy(policy));
    let report = dedup_inputs(&normalizer, &inputs)?;

    info!(
        "{} addresses read, {} unique, {} duplicates",
        report.total,
        report.unique_count(),
        report.duplicate_count()
    );

    render(out, &report, arg, arg.format.unwrap_or(default_format))
}
