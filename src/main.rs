//! marklite CLI - Markdown to HTML from a file or stdin
//!
//! Usage: `marklite [--json] [--info] [FILE|-]`

use std::io::{self, Read, Write};
use std::process::ExitCode;

const USAGE: &str = "usage: marklite [--json] [--info] [FILE|-]";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Info,
    Convert { json: bool, path: Option<String> },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut json = false;
    let mut info = false;
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--info" => info = true,
            "-h" | "--help" => return Ok(Command::Help),
            "-" => path = None,
            flag if flag.starts_with('-') => return Err(format!("unknown option: {flag}")),
            _ if path.is_some() => return Err(format!("unexpected argument: {arg}")),
            _ => path = Some(arg.clone()),
        }
    }
    if info {
        return Ok(Command::Info);
    }
    Ok(Command::Convert { json, path })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("marklite: {e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("marklite: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let (json, path) = match command {
        Command::Help => return writeln!(stdout, "{USAGE}"),
        Command::Info => {
            serde_json::to_writer_pretty(&mut stdout, marklite::describe())?;
            return stdout.write_all(b"\n");
        }
        Command::Convert { json, path } => (json, path),
    };

    let input = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    log::debug!("read {} bytes", input.len());

    if json {
        let result = marklite::ParseResult::success(marklite::convert(&input));
        serde_json::to_writer(&mut stdout, &result)?;
        stdout.write_all(b"\n")
    } else {
        stdout.write_all(marklite::to_html(&input).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults_to_stdin() {
        assert_eq!(
            parse(&[]),
            Ok(Command::Convert {
                json: false,
                path: None
            })
        );
        assert_eq!(
            parse(&["-"]),
            Ok(Command::Convert {
                json: false,
                path: None
            })
        );
    }

    #[test]
    fn test_json_and_path() {
        assert_eq!(
            parse(&["--json", "README.md"]),
            Ok(Command::Convert {
                json: true,
                path: Some("README.md".to_string())
            })
        );
    }

    #[test]
    fn test_info_and_help() {
        assert_eq!(parse(&["--info"]), Ok(Command::Info));
        assert_eq!(parse(&["--json", "--info"]), Ok(Command::Info));
        assert_eq!(parse(&["-h"]), Ok(Command::Help));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert_eq!(parse(&["--jsn"]), Err("unknown option: --jsn".to_string()));
        assert_eq!(parse(&["-x", "a.md"]), Err("unknown option: -x".to_string()));
    }

    #[test]
    fn test_second_path_is_rejected() {
        assert_eq!(
            parse(&["a.md", "b.md"]),
            Err("unexpected argument: b.md".to_string())
        );
    }
}
