pub mod handlers;
pub mod setup;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("kata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate small utility functions and run their case battery")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print results as JSON lines"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level to stderr"),
        )
        .subcommand(cmd_pair("add", "Add two integers"))
        .subcommand(cmd_pair("multiply", "Multiply two integers"))
        .subcommand(cmd_integer("is-even", "Check whether an integer is even"))
        .subcommand(cmd_text("reverse", "Reverse the characters of a text"))
        .subcommand(cmd_text(
            "count-vowels",
            "Count a, e, i, o, u (case-insensitive)",
        ))
        .subcommand(cmd_integer("factorial", "Compute n!"))
        .subcommand(cmd_text(
            "is-palindrome",
            "Check for a palindrome, ignoring case and punctuation",
        ))
        .subcommand(cmd_find_max())
        .subcommand(cmd_remove_duplicates())
        .subcommand(
            Command::new("is-valid-email")
                .about("Check that an address has an '@' and a '.' after the last '@'")
                .arg(Arg::new("email").required(true)),
        )
        .subcommand(cmd_check())
}

fn integer_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
}

fn cmd_pair(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(integer_arg("a"))
        .arg(integer_arg("b"))
}

fn cmd_integer(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).arg(integer_arg("n"))
}

fn cmd_text(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(Arg::new("text").required(true).allow_hyphen_values(true))
}

fn cmd_find_max() -> Command {
    Command::new("find-max")
        .about("Print the largest of the given integers")
        .arg(
            Arg::new("numbers")
                .num_args(0..)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
}

fn cmd_remove_duplicates() -> Command {
    Command::new("remove-duplicates")
        .about("Print each distinct item once, in first-occurrence order")
        .arg(Arg::new("items").num_args(0..).allow_hyphen_values(true))
}

fn cmd_check() -> Command {
    Command::new("check")
        .about("Run a case battery and report PASS/FAIL per case")
        .arg(
            Arg::new("suite")
                .long("suite")
                .value_name("PATH")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("TOML or JSON suite file (defaults to the built-in battery)"),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .action(ArgAction::SetTrue)
                .help("Stop at the first failing case"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_negative_numbers_are_values() {
        let matches = build_cli()
            .try_get_matches_from(["kata", "add", "-1", "1"])
            .expect("parse");
        let (name, sub) = matches.subcommand().expect("subcommand");
        assert_eq!(name, "add");
        assert_eq!(sub.get_one::<i64>("a"), Some(&-1));
    }

    #[test]
    fn test_find_max_accepts_no_values() {
        let matches = build_cli()
            .try_get_matches_from(["kata", "find-max"])
            .expect("parse");
        assert!(matches.subcommand_matches("find-max").is_some());
    }

    #[test]
    fn test_global_json_flag_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["kata", "reverse", "abc", "--json"])
            .expect("parse");
        assert!(matches.get_flag("json"));
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let result = build_cli().try_get_matches_from(["kata", "factorial", "five"]);
        assert!(result.is_err());
    }
}
