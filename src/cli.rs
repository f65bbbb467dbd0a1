// src/cli.rs
use std::{env, fs, path::PathBuf};

use crate::params::Params;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let doc = fs::read_to_string(&params.input)
        .map_err(|e| format!("read {}: {}", params.input.display(), e))?;

    let result = if params.fragment_only {
        runner::fragment(&doc)
    } else {
        runner::augment(&doc)
    };

    let Some(output) = result else {
        // Zero bout rows is a clean no-op, not an error.
        eprintln!("No fight records found; nothing to do.");
        return Ok(());
    };

    match &params.out {
        Some(path) => {
            fs::write(path, output).map_err(|e| format!("write {}: {}", path.display(), e))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut input: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut fragment_only = false;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--fragment" => fragment_only = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if a.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => {
                if input.is_some() {
                    return Err("More than one input page given".into());
                }
                input = Some(PathBuf::from(a));
            }
        }
    }

    let input = input.ok_or("Specify a saved fighter page (see --help)")?;
    Ok(Params { input, out, fragment_only })
}
