use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub command: String,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut input = PathBuf::from("benchmark_results.csv");
        let mut config = None;
        let mut output = PathBuf::from("plots");
        let mut format = OutputFormat::Table;
        let mut command = String::from("analyze");
        let mut command_set = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--input" | "-i" => {
                    input = PathBuf::from(
                        iter.next()
                            .ok_or_else(|| "--input requires a value".to_string())?,
                    );
                }
                "--config" => {
                    config = Some(PathBuf::from(
                        iter.next()
                            .ok_or_else(|| "--config requires a value".to_string())?,
                    ));
                }
                "--output" | "-o" => {
                    output = PathBuf::from(
                        iter.next()
                            .ok_or_else(|| "--output requires a value".to_string())?,
                    );
                }
                "--format" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--format requires a value".to_string())?;
                    format = match *value {
                        "table" => OutputFormat::Table,
                        "json" => OutputFormat::Json,
                        other => return Err(format!("unknown format {other}")),
                    };
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                    command_set = true;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ if command_set => {
                    return Err(format!("unexpected argument {arg} after command {command}"));
                }
                _ => {
                    command = arg.to_string();
                    command_set = true;
                }
            }
        }
        Ok(Self {
            input,
            config,
            output,
            format,
            command,
        })
    }

    pub fn help() -> &'static str {
        "Usage: benchscale [--input benchmark_results.csv] [--config PATH] [--output plots] \
         [--format table|json] [--command analyze|summary]\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CommandLineConfig::from_args(&["benchscale"]).unwrap();
        assert_eq!(cfg.input, PathBuf::from("benchmark_results.csv"));
        assert_eq!(cfg.format, OutputFormat::Table);
        assert_eq!(cfg.command, "analyze");
        assert!(cfg.config.is_none());
    }

    #[test]
    fn test_positional_command_and_flags() {
        let cfg = CommandLineConfig::from_args(&[
            "benchscale",
            "--input",
            "runs.csv",
            "--format",
            "json",
            "summary",
        ])
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("runs.csv"));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.command, "summary");
    }

    #[test]
    fn test_rejects_unknown_flag_and_missing_value() {
        assert!(CommandLineConfig::from_args(&["benchscale", "--bogus"]).is_err());
        assert!(CommandLineConfig::from_args(&["benchscale", "--input"]).is_err());
        assert!(CommandLineConfig::from_args(&["benchscale", "--format", "png"]).is_err());
    }

    #[test]
    fn test_rejects_second_command() {
        let err = CommandLineConfig::from_args(&["benchscale", "summary", "analyze"]).unwrap_err();
        assert!(err.contains("analyze"));
        assert!(
            CommandLineConfig::from_args(&["benchscale", "--command", "summary", "analyze"])
                .is_err()
        );
    }
}
