use std::env;

use leet_kernels::problems::{no_zero::NoZeroProblem, sqrt::SqrtProblem, two_sum::TwoSumProblem};
use leet_kernels::{RunnerBuilder, SolveError, Split};

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let command = match Command::parse(env::args().skip(1)) {
        Ok(cmd) => cmd,
        Err(err) => {
            eprintln!("kata: {err}");
            Command::print_help();
            std::process::exit(2);
        }
    };

    match command.execute() {
        Ok(line) => println!("{line}"),
        Err(err) => {
            eprintln!("kata: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

enum Command {
    TwoSum { nums: Vec<i64>, target: i64 },
    Sqrt { x: i64 },
    NoZero { n: u64 },
}

impl Command {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let Some(first) = args.next().map(Into::<String>::into) else {
            // The classic demonstration input.
            return Ok(Command::TwoSum {
                nums: vec![2, 7, 11, 15],
                target: 9,
            });
        };

        let command = match first.as_str() {
            "-h" | "--help" => {
                Command::print_help();
                std::process::exit(0);
            }
            "two-sum" => {
                let nums = next_value(&mut args, "two-sum <values>")?;
                let target = next_value(&mut args, "two-sum <target>")?;
                Command::TwoSum {
                    nums: parse_list(&nums)?,
                    target: parse_int(&target, "target")?,
                }
            }
            "sqrt" => {
                let x = next_value(&mut args, "sqrt <x>")?;
                Command::Sqrt {
                    x: parse_int(&x, "x")?,
                }
            }
            "no-zero" => {
                let n = next_value(&mut args, "no-zero <n>")?;
                Command::NoZero {
                    n: n.parse::<u64>()
                        .map_err(|_| format!("n must be a non-negative integer, got '{n}'"))?,
                }
            }
            other => return Err(format!("unrecognized command '{other}'")),
        };

        if let Some(extra) = args.next() {
            let extra: String = extra.into();
            return Err(format!("unexpected argument '{extra}'"));
        }
        Ok(command)
    }

    fn execute(self) -> Result<String, SolveError> {
        match self {
            Command::TwoSum { nums, target } => {
                let (i, j) = RunnerBuilder::new(TwoSumProblem::new(nums, target))
                    .verify(true)
                    .build()
                    .run()?;
                Ok(format!("[{i}, {j}]"))
            }
            Command::Sqrt { x } => {
                let r = RunnerBuilder::new(SqrtProblem::new(x))
                    .verify(true)
                    .build()
                    .run()?;
                Ok(r.to_string())
            }
            Command::NoZero { n } => {
                let out = RunnerBuilder::new(NoZeroProblem::new(n))
                    .verify(true)
                    .build()
                    .run()?;
                Ok(match out {
                    Split::Found { a, b } => format!("[{a}, {b}]"),
                    Split::Fallback { a, b } => format!("[{a}, {b}] (fallback)"),
                })
            }
        }
    }

    fn print_help() {
        println!(
            "\
Usage: kata [<command> <args>]

Commands:
  two-sum <v1,v2,...> <target>   Positions of two values summing to target
  sqrt <x>                       Floor square root of x
  no-zero <n>                    Split n into two zero-digit-free summands
  -h, --help                     Print this help message

Without a command, runs two-sum on [2, 7, 11, 15] with target 9.

Examples:
  cargo run --bin kata
  cargo run --bin kata -- two-sum 3,2,4 6
  RUST_LOG=trace cargo run --bin kata -- no-zero 1010
"
        );
    }
}

fn next_value<I, T>(args: &mut I, what: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value for {what}"))
}

fn parse_int(value: &str, what: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("{what} must be an integer, got '{value}'"))
}

fn parse_list(value: &str) -> Result<Vec<i64>, String> {
    value
        .trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_int(s, "value"))
        .collect()
}
