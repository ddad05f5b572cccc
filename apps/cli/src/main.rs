//! `netpanel` command-line front end.

mod cli;
mod config;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use indexmap::IndexMap;
use netpanel_console::{ConsoleMode, console_routes};
use netpanel_validator::form::FormCheck;
use netpanel_validator::foundation::{ParamValue, Validate, Violation};
use netpanel_validator::settings::{RULE_NAMES, Rules};
use serde::Deserialize;
use serde_json::json;

use crate::cli::{Cli, Command};

/// One entry of a form file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldSpec {
    rule: String,
    value: String,
    #[serde(default)]
    other: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    config::init_tracing(cli.verbose);

    match cli.command {
        Command::Check {
            rule,
            value,
            other,
            json,
        } => {
            let rules = config::load_rules(cli.config.as_deref())?;
            check(&rules, &rule, &value, other.as_deref(), json)
        }
        Command::Form { file } => {
            let rules = config::load_rules(cli.config.as_deref())?;
            form(&rules, &file)
        }
        Command::Rules => {
            for name in RULE_NAMES {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Route { path, mode, json } => route(&path, mode.into(), json),
    }
}

fn verdict(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn check(
    rules: &Rules,
    name: &str,
    value: &str,
    other: Option<&str>,
    as_json: bool,
) -> anyhow::Result<ExitCode> {
    let rule = rules.resolve(name, other)?;
    let result = rule.validate(value);

    if as_json {
        let output = match &result {
            Ok(()) => json!({ "valid": true }),
            Err(violation) => {
                let params: IndexMap<&str, &ParamValue> = violation.params().collect();
                json!({
                    "valid": false,
                    "code": violation.code(),
                    "key": violation.i18n_key(),
                    "params": params,
                })
            }
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &result {
            Ok(()) => println!("ok"),
            Err(violation) => println!("{}", describe(violation)),
        }
    }
    Ok(verdict(result.is_ok()))
}

fn describe(violation: &Violation) -> String {
    let mut line = violation.i18n_key();
    for (key, value) in violation.params() {
        let _ = write!(line, " {key}={value}");
    }
    line
}

fn form(rules: &Rules, file: &Path) -> anyhow::Result<ExitCode> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read form file {}", file.display()))?;
    let fields: IndexMap<String, FieldSpec> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse form file {}", file.display()))?;

    let mut form = FormCheck::with_bag(rules.message_bag());
    for (field, entry) in &fields {
        let rule = rules
            .resolve(&entry.rule, entry.other.as_deref())
            .with_context(|| format!("field '{field}'"))?;
        form.check(field, entry.value.as_str(), rule.as_ref());
    }

    println!("{}", serde_json::to_string_pretty(form.bag())?);
    Ok(verdict(form.finish().is_ok()))
}

fn route(path: &str, mode: ConsoleMode, as_json: bool) -> anyhow::Result<ExitCode> {
    let table = console_routes(mode)?;
    let Some(hit) = table.resolve(path) else {
        eprintln!("no page at {path}");
        return Ok(ExitCode::FAILURE);
    };

    if as_json {
        let params: IndexMap<&str, &str> = hit
            .params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let output = json!({
            "path": hit.path(),
            "route": hit.route(),
            "params": params,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} -> {}",
            hit.path(),
            hit.route().name(),
            hit.route().view()
        );
    }
    Ok(ExitCode::SUCCESS)
}
