//! Case battery
//!
//! Runs named calls against the library, compares each result for exact
//! equality with its expectation and aggregates PASS/FAIL counts.
//!
//! Batteries are either built in ([`Suite::builtin`]) or loaded from a
//! TOML or JSON file:
//!
//! ```toml
//! [[case]]
//! name = "add two positives"
//! op = "add"
//! a = 2
//! b = 3
//! expect = 5
//!
//! [[case]]
//! name = "max of nothing"
//! op = "find_max"
//! numbers = []
//! expect = { error = "empty_sequence" }
//! ```

use std::{fmt, path::Path};

use itertools::Itertools;
use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use tracing::{debug, info, warn};

use crate::{
    add, count_vowels, factorial, find_max, is_even, is_palindrome, is_valid_email_format,
    multiply, remove_duplicates, reverse, Error, Result,
};

// ═══════════════════════════════════════════════════════════════════════════
// VALUES
// ═══════════════════════════════════════════════════════════════════════════

/// A sequence element for [`Operation::RemoveDuplicates`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Int(i64),
    Text(String),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The value an operation produced.
///
/// Integers that fit in `i128` are always `Number`; `Unsigned` only holds
/// values above `i128::MAX`, so each integer has exactly one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Bool(bool),
    Number(i128),
    Unsigned(u128),
    Text(String),
    Items(Vec<Item>),
}

impl Outcome {
    /// Wrap an unsigned integer in its canonical variant.
    #[must_use]
    pub fn from_unsigned(n: u128) -> Self {
        i128::try_from(n).map_or(Self::Unsigned(n), Self::Number)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Items(items) => write!(f, "[{}]", items.iter().join(", ")),
        }
    }
}

// Buffered (untagged) deserialization does not reliably support `i128`,
// so integers are widened by hand.
impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OutcomeVisitor;

        impl<'de> Visitor<'de> for OutcomeVisitor {
            type Value = Outcome;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, an integer, a string or a list of items")
            }

            fn visit_bool<E>(self, v: bool) -> std::result::Result<Self::Value, E> {
                Ok(Outcome::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E> {
                Ok(Outcome::Number(i128::from(v)))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E> {
                Ok(Outcome::Number(i128::from(v)))
            }

            fn visit_i128<E>(self, v: i128) -> std::result::Result<Self::Value, E> {
                Ok(Outcome::Number(v))
            }

            fn visit_u128<E>(self, v: u128) -> std::result::Result<Self::Value, E> {
                Ok(Outcome::from_unsigned(v))
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E> {
                Ok(Outcome::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E> {
                Ok(Outcome::Text(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element::<Item>()? {
                    items.push(item);
                }
                Ok(Outcome::Items(items))
            }
        }

        deserializer.deserialize_any(OutcomeVisitor)
    }
}

/// What a case expects: an exact value, or an error identified by
/// [`Error::code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expectation {
    Error { error: String },
    Value(Outcome),
}

impl Expectation {
    /// Expect the given error code.
    pub fn error(code: impl Into<String>) -> Self {
        Self::Error { error: code.into() }
    }
}

impl From<Outcome> for Expectation {
    fn from(outcome: Outcome) -> Self {
        Self::Value(outcome)
    }
}

impl From<bool> for Expectation {
    fn from(b: bool) -> Self {
        Self::Value(Outcome::Bool(b))
    }
}

impl From<i128> for Expectation {
    fn from(n: i128) -> Self {
        Self::Value(Outcome::Number(n))
    }
}

impl From<&str> for Expectation {
    fn from(s: &str) -> Self {
        Self::Value(Outcome::Text(s.to_string()))
    }
}

impl From<Vec<Item>> for Expectation {
    fn from(items: Vec<Item>) -> Self {
        Self::Value(Outcome::Items(items))
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error { error } => write!(f, "error {error}"),
            Self::Value(outcome) => write!(f, "{outcome}"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OPERATIONS
// ═══════════════════════════════════════════════════════════════════════════

/// One call of one library function, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add { a: i64, b: i64 },
    Multiply { a: i64, b: i64 },
    IsEven { n: i64 },
    Reverse { text: String },
    CountVowels { text: String },
    Factorial { n: i64 },
    IsPalindrome { text: String },
    FindMax { numbers: Vec<i64> },
    RemoveDuplicates { items: Vec<Item> },
    IsValidEmailFormat { email: String },
}

impl Operation {
    /// The `op` tag of this operation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Multiply { .. } => "multiply",
            Self::IsEven { .. } => "is_even",
            Self::Reverse { .. } => "reverse",
            Self::CountVowels { .. } => "count_vowels",
            Self::Factorial { .. } => "factorial",
            Self::IsPalindrome { .. } => "is_palindrome",
            Self::FindMax { .. } => "find_max",
            Self::RemoveDuplicates { .. } => "remove_duplicates",
            Self::IsValidEmailFormat { .. } => "is_valid_email_format",
        }
    }

    /// Call the library function this operation names.
    ///
    /// # Errors
    ///
    /// Propagates the library's domain errors.
    pub fn evaluate(&self) -> Result<Outcome> {
        let outcome = match self {
            Self::Add { a, b } => Outcome::Number(add(*a, *b)),
            Self::Multiply { a, b } => Outcome::Number(multiply(*a, *b)),
            Self::IsEven { n } => Outcome::Bool(is_even(*n)),
            Self::Reverse { text } => Outcome::Text(reverse(text)),
            Self::CountVowels { text } => {
                Outcome::Number(narrow(self.name(), count_vowels(text))?)
            }
            Self::Factorial { n } => Outcome::from_unsigned(factorial(*n)?),
            Self::IsPalindrome { text } => Outcome::Bool(is_palindrome(text)),
            Self::FindMax { numbers } => Outcome::Number(i128::from(find_max(numbers)?)),
            Self::RemoveDuplicates { items } => Outcome::Items(remove_duplicates(items)),
            Self::IsValidEmailFormat { email } => Outcome::Bool(is_valid_email_format(email)),
        };
        Ok(outcome)
    }
}

fn narrow<T>(operation: &'static str, value: T) -> Result<i128>
where
    T: TryInto<i128> + fmt::Display + Copy,
{
    value.try_into().map_err(|_| Error::Overflow {
        operation,
        detail: format!("{value} does not fit in a signed 128-bit outcome"),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// CASES
// ═══════════════════════════════════════════════════════════════════════════

/// A named operation and the result it must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    #[serde(flatten)]
    pub operation: Operation,
    pub expect: Expectation,
}

impl Case {
    pub fn new(
        name: impl Into<String>,
        operation: Operation,
        expect: impl Into<Expectation>,
    ) -> Self {
        Self {
            name: name.into(),
            operation,
            expect: expect.into(),
        }
    }

    /// Evaluate the operation and compare it with the expectation.
    #[must_use]
    pub fn run(&self) -> CaseResult {
        let evaluated = self.operation.evaluate();

        let passed = match (&self.expect, &evaluated) {
            (Expectation::Value(expected), Ok(actual)) => expected == actual,
            (Expectation::Error { error }, Err(err)) => error == err.code(),
            _ => false,
        };

        let (actual, described) = match evaluated {
            Ok(outcome) => {
                let described = outcome.to_string();
                (Expectation::Value(outcome), described)
            }
            Err(err) => (
                Expectation::error(err.code()),
                format!("error {} ({err})", err.code()),
            ),
        };

        let (status, message) = if passed {
            (CaseStatus::Passed, None)
        } else {
            (
                CaseStatus::Failed,
                Some(format!("Expected: {}, Actual: {described}", self.expect)),
            )
        };

        CaseResult {
            name: self.name.clone(),
            operation: self.operation.name(),
            status,
            expected: self.expect.clone(),
            actual,
            message,
        }
    }
}

/// Pass/fail status of a single case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseStatus {
    Passed,
    Failed,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "PASS"),
            Self::Failed => write!(f, "FAIL"),
        }
    }
}

/// Result of running one case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub operation: &'static str,
    pub status: CaseStatus,
    pub expected: Expectation,
    pub actual: Expectation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// SUITES
// ═══════════════════════════════════════════════════════════════════════════

/// An ordered list of cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    #[serde(rename = "case", alias = "cases", default)]
    cases: Vec<Case>,
}

impl Suite {
    #[must_use]
    pub const fn new(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Parse a suite from `[[case]]` TOML tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] for malformed TOML or unknown operations.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ParseError(format!("Failed to parse suite: {e}")))
    }

    /// Parse a suite from JSON (`{"case": [...]}` or `{"cases": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] for malformed JSON or unknown operations.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::ParseError(format!("Failed to parse suite: {e}")))
    }

    /// Load a suite file. `.json` files are parsed as JSON, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// - [`Error::IoError`] if the file cannot be read
    /// - [`Error::ParseError`] if its contents do not parse
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::IoError(format!("Failed to read suite file {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), is_json, "loading suite");

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Run every case in order. With `fail_fast`, stop after the first
    /// failure; the remaining cases are counted as skipped.
    #[must_use]
    pub fn run(&self, fail_fast: bool) -> Report {
        let mut results = Vec::with_capacity(self.cases.len());

        for case in &self.cases {
            let result = case.run();
            match &result.message {
                None => debug!(case = %result.name, "passed"),
                Some(message) => warn!(case = %result.name, %message, "failed"),
            }

            let stop = fail_fast && result.status == CaseStatus::Failed;
            results.push(result);
            if stop {
                break;
            }
        }

        let report = Report::new(results, self.cases.len());
        info!(
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "battery finished"
        );
        report
    }

    /// The reference battery for the ten library functions.
    #[must_use]
    pub fn builtin() -> Self {
        use Operation::{
            Add, CountVowels, Factorial, FindMax, IsEven, IsPalindrome, IsValidEmailFormat,
            Multiply, RemoveDuplicates, Reverse,
        };

        fn text(s: &str) -> String {
            s.to_string()
        }
        fn ints(values: &[i64]) -> Vec<Item> {
            values.iter().copied().map(Item::Int).collect()
        }
        fn strs(values: &[&str]) -> Vec<Item> {
            values.iter().map(|s| Item::Text(text(s))).collect()
        }

        Self::new(vec![
            Case::new("add two positives", Add { a: 2, b: 3 }, 5),
            Case::new("add opposites", Add { a: -1, b: 1 }, 0),
            Case::new("add zeros", Add { a: 0, b: 0 }, 0),
            Case::new("multiply positives", Multiply { a: 3, b: 4 }, 12),
            Case::new("multiply by zero", Multiply { a: 0, b: 5 }, 0),
            Case::new("multiply mixed signs", Multiply { a: -2, b: 3 }, -6),
            Case::new("four is even", IsEven { n: 4 }, true),
            Case::new("seven is odd", IsEven { n: 7 }, false),
            Case::new("zero is even", IsEven { n: 0 }, true),
            Case::new("negative two is even", IsEven { n: -2 }, true),
            Case::new("negative five is odd", IsEven { n: -5 }, false),
            Case::new("reverse word", Reverse { text: text("hello") }, "olleh"),
            Case::new("reverse single char", Reverse { text: text("a") }, "a"),
            Case::new("reverse empty", Reverse { text: text("") }, ""),
            Case::new("reverse with space", Reverse { text: text("abc def") }, "fed cba"),
            Case::new("vowels in hello", CountVowels { text: text("hello") }, 2),
            Case::new("uppercase vowels", CountVowels { text: text("AEIOU") }, 5),
            Case::new("no vowels", CountVowels { text: text("xyz") }, 0),
            Case::new("mixed case vowels", CountVowels { text: text("Hello World") }, 3),
            Case::new("vowels in empty", CountVowels { text: text("") }, 0),
            Case::new("factorial of zero", Factorial { n: 0 }, 1),
            Case::new("factorial of one", Factorial { n: 1 }, 1),
            Case::new("factorial of three", Factorial { n: 3 }, 6),
            Case::new("factorial of five", Factorial { n: 5 }, 120),
            Case::new(
                "largest factorial",
                Factorial { n: 34 },
                Outcome::from_unsigned(295_232_799_039_604_140_847_618_609_643_520_000_000),
            ),
            Case::new(
                "factorial past u128",
                Factorial { n: 35 },
                Expectation::error("overflow"),
            ),
            Case::new(
                "factorial of negative",
                Factorial { n: -1 },
                Expectation::error("negative_factorial"),
            ),
            Case::new("racecar", IsPalindrome { text: text("racecar") }, true),
            Case::new("level", IsPalindrome { text: text("level") }, true),
            Case::new("single char palindrome", IsPalindrome { text: text("a") }, true),
            Case::new("empty palindrome", IsPalindrome { text: text("") }, true),
            Case::new("hello is not a palindrome", IsPalindrome { text: text("hello") }, false),
            Case::new("abc is not a palindrome", IsPalindrome { text: text("abc") }, false),
            Case::new(
                "palindrome ignoring punctuation",
                IsPalindrome {
                    text: text("A man, a plan, a canal, Panama"),
                },
                true,
            ),
            Case::new("max ascending", FindMax { numbers: vec![1, 2, 3, 4, 5] }, 5),
            Case::new("max all negative", FindMax { numbers: vec![-1, -2, -3] }, -1),
            Case::new("max mixed", FindMax { numbers: vec![3, -5, 10, 0] }, 10),
            Case::new("max single", FindMax { numbers: vec![42] }, 42),
            Case::new(
                "max of nothing",
                FindMax { numbers: Vec::new() },
                Expectation::error("empty_sequence"),
            ),
            Case::new(
                "dedupe runs",
                RemoveDuplicates {
                    items: ints(&[1, 2, 2, 3, 3, 3]),
                },
                ints(&[1, 2, 3]),
            ),
            Case::new(
                "dedupe nothing to remove",
                RemoveDuplicates {
                    items: ints(&[1, 2, 3]),
                },
                ints(&[1, 2, 3]),
            ),
            Case::new("dedupe empty", RemoveDuplicates { items: Vec::new() }, Vec::<Item>::new()),
            Case::new(
                "dedupe single",
                RemoveDuplicates { items: ints(&[5]) },
                ints(&[5]),
            ),
            Case::new(
                "dedupe strings",
                RemoveDuplicates {
                    items: strs(&["a", "b", "a"]),
                },
                strs(&["a", "b"]),
            ),
            Case::new(
                "valid email",
                IsValidEmailFormat {
                    email: text("user@example.com"),
                },
                true,
            ),
            Case::new(
                "valid org email",
                IsValidEmailFormat {
                    email: text("test@domain.org"),
                },
                true,
            ),
            Case::new(
                "email without at",
                IsValidEmailFormat {
                    email: text("invalid-email"),
                },
                false,
            ),
            Case::new(
                "email without dot in domain",
                IsValidEmailFormat {
                    email: text("user@domain"),
                },
                false,
            ),
            Case::new("empty email", IsValidEmailFormat { email: text("") }, false),
        ])
    }
}

/// Aggregated battery results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub results: Vec<CaseResult>,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Report {
    fn new(results: Vec<CaseResult>, total: usize) -> Self {
        let (passed, failed) = results.iter().fold((0, 0), |(p, f), r| match r.status {
            CaseStatus::Passed => (p + 1, f),
            CaseStatus::Failed => (p, f + 1),
        });
        let skipped = total.saturating_sub(results.len());

        Self {
            results,
            passed,
            failed,
            skipped,
        }
    }

    /// True when no case failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Failed results only
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| r.status == CaseStatus::Failed)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed)?;
        if self.skipped > 0 {
            write!(f, ", {} skipped", self.skipped)?;
        }
        Ok(())
    }
}
