//! Runtime configuration from command-line flags.

use crate::core::constants::{DEFAULT_TARGET_FPS, MAX_TARGET_FPS, MIN_TARGET_FPS};
use std::path::PathBuf;

pub const USAGE: &str = "\
Arcade - terminal arcade collection

Usage: arcade [options]

Options:
  --fps <N>          Target frame rate (10-240, default 60)
  --log-file <PATH>  Write logs to PATH (filter with RUST_LOG)
  --version          Show version information
  --help             Show this help message";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub target_fps: u32,
    /// Logging is disabled unless a file is given; the terminal belongs to
    /// the game.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(AppConfig),
    Version,
    Help,
}

fn parse_fps(value: &str) -> Result<u32, String> {
    let fps: u32 = value
        .parse()
        .map_err(|_| format!("Invalid frame rate: {}", value))?;
    if !(MIN_TARGET_FPS..=MAX_TARGET_FPS).contains(&fps) {
        return Err(format!(
            "Frame rate must be between {} and {}, got {}",
            MIN_TARGET_FPS, MAX_TARGET_FPS, fps
        ));
    }
    Ok(fps)
}

/// Parse the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = AppConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--fps" => {
                let value = args.next().ok_or("--fps requires a value")?;
                config.target_fps = parse_fps(value.as_ref())?;
            }
            "--log-file" => {
                let value = args.next().ok_or("--log-file requires a path")?;
                config.log_file = Some(PathBuf::from(value.as_ref()));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliCommand::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cmd = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(cmd, CliCommand::Run(AppConfig::default()));
        if let CliCommand::Run(config) = cmd {
            assert_eq!(config.target_fps, 60);
            assert!(config.log_file.is_none());
        }
    }

    #[test]
    fn test_fps_and_log_file() {
        let cmd = parse_args(["--fps", "120", "--log-file", "/tmp/arcade.log"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run(AppConfig {
                target_fps: 120,
                log_file: Some(PathBuf::from("/tmp/arcade.log")),
            })
        );
    }

    #[test]
    fn test_version_and_help_short_circuit() {
        assert_eq!(parse_args(["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse_args(["-h", "--bogus"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse_args(["--fps"]).is_err());
        assert!(parse_args(["--fps", "fast"]).is_err());
        assert!(parse_args(["--fps", "5"]).is_err());
        assert!(parse_args(["--fps", "241"]).is_err());
        assert!(parse_args(["--log-file"]).is_err());

        let err = parse_args(["update"]).unwrap_err();
        assert_eq!(err, "Unknown argument: update");
    }
}
