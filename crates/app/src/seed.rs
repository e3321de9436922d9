use std::process;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

pub const DEFAULT_START_LEVEL: u32 = 1;

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    Ok(match flag_value(args, "seed")? {
        Some(value) => SeedChoice::Cli(parse_number(value, "seed")?),
        None => SeedChoice::Generated(generated_seed),
    })
}

/// Starting dungeon level from `--level`; levels count from 1.
pub fn resolve_level_from_args(args: &[String]) -> Result<u32, String> {
    match flag_value(args, "level")? {
        Some(value) => {
            let level: u32 = parse_number(value, "level")?;
            if level == 0 {
                return Err("level must be at least 1".to_string());
            }
            Ok(level)
        }
        None => Ok(DEFAULT_START_LEVEL),
    }
}

/// Value of `--name VALUE` or `--name=VALUE`, skipping the program name.
fn flag_value<'a>(args: &'a [String], name: &str) -> Result<Option<&'a str>, String> {
    let flag = format!("--{name}");
    let inline = format!("--{name}=");
    let mut selected = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == flag {
            let Some(value) = args.get(index + 1) else {
                return Err(format!("missing value for {flag}"));
            };
            if selected.is_some() {
                return Err(format!("{name} provided more than once"));
            }
            selected = Some(value.as_str());
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix(inline.as_str()) {
            if selected.is_some() {
                return Err(format!("{name} provided more than once"));
            }
            selected = Some(value);
        }
        index += 1;
    }

    Ok(selected)
}

fn parse_number<T: FromStr>(raw_value: &str, name: &str) -> Result<T, String> {
    raw_value.parse::<T>().map_err(|_| format!("{name} value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        let args = as_args(&["viewer"]);
        let choice =
            resolve_seed_from_args(&args, 9_876_543).expect("seed resolution should not fail");
        assert_eq!(choice, SeedChoice::Generated(9_876_543));
    }

    #[test]
    fn parses_seed_flag_with_separate_value() {
        let args = as_args(&["viewer", "--seed", "4242"]);
        let choice = resolve_seed_from_args(&args, 1).expect("valid --seed should parse");
        assert_eq!(choice, SeedChoice::Cli(4_242));
    }

    #[test]
    fn parses_seed_flag_with_inline_value() {
        let args = as_args(&["viewer", "--seed=2026", "--level", "3"]);
        let choice = resolve_seed_from_args(&args, 1).expect("valid --seed should parse");
        assert_eq!(choice, SeedChoice::Cli(2_026));
    }

    #[test]
    fn errors_when_seed_flag_has_no_value() {
        let args = as_args(&["viewer", "--seed"]);
        let err = resolve_seed_from_args(&args, 1).expect_err("missing seed value should error");
        assert!(err.contains("missing"), "error should explain missing value: {err}");
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let args = as_args(&["viewer", "--seed=abc"]);
        let err =
            resolve_seed_from_args(&args, 1).expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn errors_when_seed_is_provided_more_than_once() {
        let args = as_args(&["viewer", "--seed=1", "--seed", "2"]);
        let err =
            resolve_seed_from_args(&args, 1).expect_err("duplicate seed flags should be rejected");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");
    }

    #[test]
    fn level_defaults_to_one_and_rejects_zero() {
        assert_eq!(resolve_level_from_args(&as_args(&["viewer", "--seed", "5"])), Ok(1));
        assert_eq!(resolve_level_from_args(&as_args(&["viewer", "--level=7"])), Ok(7));
        let err = resolve_level_from_args(&as_args(&["viewer", "--level", "0"]))
            .expect_err("level zero should be rejected");
        assert!(err.contains("at least 1"), "unexpected message: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
