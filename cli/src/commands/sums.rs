use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::types::error::Result;

#[derive(Debug, Clone, Args)]
pub struct DifferenceOfSumsArg {
    /// Upper bound of the range 1..=N
    pub n: u32,

    /// Divisor, must be positive
    pub m: u32,

    /// Output format, overriding the configuration
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct JsonDifference {
    n: u32,
    m: u32,
    difference: i64,
}

pub fn difference_of_sums<W: Write>(
    arg: &DifferenceOfSumsArg,
    default_format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let difference = ::difference_of_sums::difference_of_sums(arg.n, arg.m)?;

    match arg.format.unwrap_or(default_format) {
        OutputFormat::Text => writeln!(out, "{}", difference)?,
        OutputFormat::Json => {
            let json = JsonDifference {
                n: arg.n,
                m: arg.m,
                difference,
            };
            serde_json::to_writer(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::error::PracticeError;

    fn run(n: u32, m: u32, format: OutputFormat) -> Result<String> {
        let arg = DifferenceOfSumsArg { n, m, format: None };
        let mut out = Vec::new();
        difference_of_sums(&arg, format, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output() {
        assert_eq!(run(10, 3, OutputFormat::Text).unwrap(), "19\n");
        assert_eq!(run(8, 2, OutputFormat::Text).unwrap(), "-4\n");
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            run(20, 7, OutputFormat::Json).unwrap(),
            "{\"n\":20,\"m\":7,\"difference\":168}\n"
        );
    }

    #[test]
    fn test_flag_overrides_configured_format() {
        let arg = DifferenceOfSumsArg {
            n: 5,
            m: 5,
            format: Some(OutputFormat::Text),
        };
        let mut out = Vec::new();
        difference_of_sums(&arg, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(out, b"5\n");
    }

    #[test]
    fn test_zero_divisor() {
        let err = run(4, 0, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, PracticeError::Divisor(_)));
    }
}
