use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use kata_core::{Item, Operation, OutputFormat};

use crate::commands::eval;

pub fn handle(name: &str, matches: &ArgMatches, format: OutputFormat) -> Result<ExitCode> {
    let operation = operation_from_matches(name, matches)?;
    eval::run(&operation, format)
}

/// Build the library call a subcommand names.
fn operation_from_matches(name: &str, matches: &ArgMatches) -> Result<Operation> {
    let operation = match name {
        "add" => Operation::Add {
            a: integer(matches, "a")?,
            b: integer(matches, "b")?,
        },
        "multiply" => Operation::Multiply {
            a: integer(matches, "a")?,
            b: integer(matches, "b")?,
        },
        "is-even" => Operation::IsEven {
            n: integer(matches, "n")?,
        },
        "reverse" => Operation::Reverse {
            text: text(matches, "text")?,
        },
        "count-vowels" => Operation::CountVowels {
            text: text(matches, "text")?,
        },
        "factorial" => Operation::Factorial {
            n: integer(matches, "n")?,
        },
        "is-palindrome" => Operation::IsPalindrome {
            text: text(matches, "text")?,
        },
        "find-max" => Operation::FindMax {
            numbers: matches
                .get_many::<i64>("numbers")
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
        },
        "remove-duplicates" => Operation::RemoveDuplicates {
            items: matches
                .get_many::<String>("items")
                .map(|values| values.cloned().map(Item::Text).collect())
                .unwrap_or_default(),
        },
        "is-valid-email" => Operation::IsValidEmailFormat {
            email: text(matches, "email")?,
        },
        other => anyhow::bail!("Unknown command: {other}. Run 'kata --help' for usage."),
    };

    Ok(operation)
}

fn integer(matches: &ArgMatches, id: &str) -> Result<i64> {
    matches
        .get_one::<i64>(id)
        .copied()
        .ok_or_else(|| anyhow!("Missing argument <{id}>"))
}

fn text(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument <{id}>"))
}
