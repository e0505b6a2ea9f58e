// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decode every JSON value found in the files given as input parameters
//! against the known TDLib schema, and print the result.
//!
//! Values are decoded as the union given with `--union`, or as whichever
//! union their `"@type"` belongs to with `--union auto`. Any value that
//! fails to decode is reported, and makes the program exit with failure.
//!
//! If the file is "-", it is read from standard input instead.
use clap::{ArgAction, Parser};
use log::{debug, error, info, warn, LevelFilter};
use serde_json::{Deserializer, Value};
use simple_logger::SimpleLogger;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use tdjson_codec::{DecodeError, Object, TYPE_KEY};
use tdjson_types::schema;

const STDIN_NAME: &str = "-";
const AUTO_UNION: &str = "auto";

#[derive(Debug, Parser)]
#[command(version, about = "Decode TDLib JSON objects against the known schema")]
struct Args {
    /// Union to decode every value as, or "auto" to pick it from each value's "@type".
    #[arg(short, long, default_value = "Update")]
    union: String,

    /// Print every value re-encoded as JSON instead of its decoded form.
    #[arg(short, long)]
    reencode: bool,

    /// List the known unions along with their variants, and exit.
    #[arg(short, long)]
    list: bool,

    /// Log more details. Can be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Files containing JSON values, one after another.
    #[arg(default_value = STDIN_NAME)]
    files: Vec<String>,
}

#[derive(Debug, Default)]
struct Report {
    decoded: usize,
    null: usize,
    failed: usize,
}

fn read_input(name: &str) -> io::Result<String> {
    let mut text = String::new();
    if name == STDIN_NAME {
        io::stdin().read_to_string(&mut text)?;
    } else {
        text = fs::read_to_string(name)?;
    }
    Ok(text)
}

fn decode(union: &str, value: &Value) -> Result<Option<Box<dyn Object>>, DecodeError> {
    if union != AUTO_UNION {
        return schema::decode_by_name(union, value);
    }

    let tag = value
        .get(TYPE_KEY)
        .and_then(Value::as_str)
        .ok_or(DecodeError::MalformedUnion { union: AUTO_UNION })?;

    match schema::union_of_tag(tag) {
        Some(union) => schema::decode_by_name(union, value),
        None => Err(DecodeError::UnknownVariant {
            union: AUTO_UNION,
            tag: tag.to_string(),
        }),
    }
}

fn inspect(args: &Args, source: &str, text: &str, report: &mut Report) {
    let mut deserializer = Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    for (index, value) in deserializer.into_iter::<Value>().enumerate() {
        let value = match value {
            Ok(value) => value,
            Err(err) => {
                error!("{source}: value {index} is not valid json: {err}");
                report.failed += 1;
                return;
            }
        };

        match decode(&args.union, &value) {
            Ok(Some(object)) => {
                debug!("{source}: value {index} decoded as {}", object.type_tag());
                if args.reencode {
                    println!("{}", tdjson_codec::encode_string(&*object));
                } else {
                    println!("{object:#?}");
                }
                report.decoded += 1;
            }
            Ok(None) => {
                warn!("{source}: value {index} is null");
                report.null += 1;
            }
            Err(err) => {
                error!("{source}: value {index}: {err}");
                report.failed += 1;
            }
        }
    }
}

fn list_unions() {
    for entry in schema::UNIONS {
        println!("{}", entry.name());
        for tag in entry.tags() {
            println!("    {tag}");
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to set up logging: {err}");
    }

    if args.list {
        list_unions();
        return ExitCode::SUCCESS;
    }

    if args.union != AUTO_UNION && schema::find(&args.union).is_none() {
        error!("unknown union {}; use --list to see the known ones", args.union);
        return ExitCode::FAILURE;
    }

    let mut report = Report::default();
    for file in args.files.iter() {
        match read_input(file) {
            Ok(text) => inspect(&args, file, &text, &mut report),
            Err(err) => {
                error!("{file}: {err}");
                report.failed += 1;
            }
        }
    }

    info!(
        "{} decoded, {} null, {} failed",
        report.decoded,
        report.null,
        report.failed
    );

    if report.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tdjson_codec::ToJson;

    fn args(union: &str) -> Args {
        Args {
            union: union.to_string(),
            reencode: true,
            list: false,
            verbose: 0,
            files: Vec::new(),
        }
    }

    #[test]
    fn check_auto_union() {
        let value = json!({"@type": "pollTypeRegular", "allow_multiple_answers": true});
        let object = decode(AUTO_UNION, &value).unwrap().unwrap();
        assert_eq!(object.type_tag(), "pollTypeRegular");
        assert_eq!(object.to_json(), value);

        let err = decode(AUTO_UNION, &json!({"@type": "pollTypeSurvey"})).unwrap_err();
        assert_eq!(err.unknown_tag(), Some("pollTypeSurvey"));
    }

    #[test]
    fn check_report_counts() {
        let text = r#"
            {"@type": "updateConnectionState", "state": {"@type": "connectionStateReady"}}
            null
            {"@type": "updateChatTitle", "chat_id": 1, "title": ""}
        "#;

        let mut report = Report::default();
        inspect(&args("Update"), "test", text, &mut report);
        assert_eq!(report.decoded, 1);
        assert_eq!(report.null, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn check_deeply_nested_input() {
        let mut text = r#"{"@type": "richTextPlain", "text": "deep"}"#.to_string();
        for _ in 0..150 {
            text = format!(r#"{{"@type": "richTextItalic", "text": {text}}}"#);
        }

        let mut report = Report::default();
        inspect(&args(AUTO_UNION), "test", &text, &mut report);
        assert_eq!(report.decoded, 1);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn check_report_bad_json() {
        let mut report = Report::default();
        inspect(&args(AUTO_UNION), "test", "{\"@type\": ", &mut report);
        assert_eq!(report.failed, 1);
        assert_eq!(report.decoded, 0);
    }
}
