mod debug_report;

use recurra::{
    DateRange, DayOverflow, Frequency, Options, RecurrenceSettings, describe, generate_verbose_with,
};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RECURRA_LOG";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = config.settings.validate(config.frequency) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }

    let spec = config.settings.to_spec(config.frequency);
    let summary = describe(&spec);
    let res = generate_verbose_with(&spec, &config.range, &config.options);
    tracing::info!(frequency = %config.frequency, count = res.dates.len(), "run finished");

    if config.json {
        match serde_json::to_string(&res.dates) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to encode dates: {err}");
                std::process::exit(1);
            }
        }
    } else {
        let view = debug_report::View { calendar: config.calendar, color: config.color };
        debug_report::print_run(&summary, &config.range, &res, view);
    }

    if let Some(err) = res.error {
        if config.json {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

struct CliConfig {
    range: DateRange,
    frequency: Frequency,
    settings: RecurrenceSettings,
    options: Options,
    calendar: bool,
    json: bool,
    color: bool,
}

/// A pattern flag, replayed in command-line order on top of the `--settings`
/// base once the frequency is known.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit {
    Interval(u32),
    Days(Vec<u8>),
    DayOfMonth(u32),
    Week(u8),
    Weekday(u8),
    Month(u32),
    Day(u32),
}

impl Edit {
    fn apply(self, settings: &mut RecurrenceSettings, frequency: Frequency) {
        match self {
            Edit::Interval(interval) => settings.set_interval(frequency, interval),
            Edit::Days(mut days) => {
                days.sort_unstable();
                days.dedup();
                settings.days_of_week = days;
            }
            Edit::DayOfMonth(day) => settings.set_day_of_month(day),
            Edit::Week(week) => {
                let weekday = settings.day_of_week;
                settings.set_week_pattern(week, weekday);
            }
            Edit::Weekday(weekday) => {
                let week = settings.week_of_month.max(1);
                settings.set_week_pattern(week, weekday);
            }
            Edit::Month(month) => settings.month = month,
            Edit::Day(day) => settings.day = day,
        }
    }
}

fn parse_args() -> Result<CliConfig, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<CliConfig, String> {
    let mut range = DateRange::default();
    let mut frequency = Frequency::Daily;
    let mut base: Option<RecurrenceSettings> = None;
    let mut edits = Vec::new();
    let mut options = Options::default();
    let mut calendar = false;
    let mut json = false;
    let mut color = io::stdout().is_terminal();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or_else(|| format!("error: {name} expects a value")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("recurra {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--calendar" => calendar = true,
            "--json" => json = true,
            "--start" | "-s" => range.start = Some(value("--start")?),
            "--end" | "-e" => range.end = Some(value("--end")?),
            "--frequency" | "-f" => {
                let raw = value("--frequency")?;
                frequency = Frequency::from_name(&raw)
                    .ok_or_else(|| format!("error: unknown frequency '{raw}' (expected daily|weekly|monthly|yearly)"))?;
            }
            "--interval" | "-n" => edits.push(Edit::Interval(parse_number(&value("--interval")?, "--interval")?)),
            "--days" => {
                let raw = value("--days")?;
                let days = raw
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(parse_weekday)
                    .collect::<Result<Vec<_>, _>>()?;
                edits.push(Edit::Days(days));
            }
            "--day-of-month" => {
                edits.push(Edit::DayOfMonth(parse_number(&value("--day-of-month")?, "--day-of-month")?))
            }
            "--week" => edits.push(Edit::Week(parse_week(&value("--week")?)?)),
            "--weekday" => edits.push(Edit::Weekday(parse_weekday(&value("--weekday")?)?)),
            "--month" => edits.push(Edit::Month(parse_month(&value("--month")?)?)),
            "--day" => edits.push(Edit::Day(parse_number(&value("--day")?, "--day")?)),
            "--settings" => {
                if base.is_some() {
                    return Err("error: --settings given more than once".to_string());
                }
                let raw = value("--settings")?;
                let parsed = serde_json::from_str(&raw).map_err(|err| format!("error: invalid --settings JSON: {err}"))?;
                base = Some(parsed);
            }
            "--overflow" => {
                let raw = value("--overflow")?;
                let policy = DayOverflow::from_name(&raw)
                    .ok_or_else(|| format!("error: unknown overflow policy '{raw}' (expected skip|clamp|rollover)"))?;
                options.month_day_overflow = policy;
                options.leap_day_overflow = policy;
            }
            _ if flag.starts_with('-') => return Err(format!("error: unknown option '{flag}'")),
            _ => return Err(format!("error: unexpected argument '{arg}'\n\n{}", help_text())),
        }
    }

    let mut settings = base.unwrap_or_default();
    for edit in edits {
        edit.apply(&mut settings, frequency);
    }

    Ok(CliConfig { range, frequency, settings, options, calendar, json, color })
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value.trim().parse().map_err(|_| format!("error: invalid {flag} '{value}' (expected a number)"))
}

const WEEKDAY_NAMES: [&str; 7] = ["sunday", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday"];
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Index into `names` for a name or an unambiguous prefix of at least 3 letters.
fn lookup_name(names: &[&str], value: &str) -> Option<usize> {
    let value = value.trim().to_ascii_lowercase();
    if value.len() < 3 {
        return None;
    }
    names.iter().position(|name| name.starts_with(&value))
}

/// `0`-`6` (Sunday = 0) or a weekday name such as `mon`.
fn parse_weekday(value: &str) -> Result<u8, String> {
    if let Ok(index) = value.trim().parse::<u8>() {
        return Ok(index);
    }
    lookup_name(&WEEKDAY_NAMES, value)
        .map(|i| i as u8)
        .ok_or_else(|| format!("error: invalid weekday '{value}' (expected 0-6 or a name like 'mon')"))
}

/// `1`-`5` or `first`..`fourth`/`last`.
fn parse_week(value: &str) -> Result<u8, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "first" => Ok(1),
        "second" => Ok(2),
        "third" => Ok(3),
        "fourth" => Ok(4),
        "last" => Ok(5),
        other => parse_number(other, "--week"),
    }
}

/// `1`-`12` or a month name; returned zero-based.
fn parse_month(value: &str) -> Result<u32, String> {
    if let Ok(month) = value.trim().parse::<u32>() {
        return month.checked_sub(1).ok_or_else(|| format!("error: invalid --month '{value}' (months start at 1)"));
    }
    lookup_name(&MONTH_NAMES, value)
        .map(|i| i as u32)
        .ok_or_else(|| format!("error: invalid --month '{value}' (expected 1-12 or a name like 'dec')"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "recurra {version}

Recurring date generator.

Usage:
  recurra --start <date> [--end <date>] [PATTERN] [OPTIONS]

Range:
  -s, --start <date>         First day of the range (YYYY-MM-DD). Required.
  -e, --end <date>           Last day of the range. Default: one year after start.

Pattern:
  -f, --frequency <freq>     daily | weekly | monthly | yearly. Default: daily.
  -n, --interval <n>         Repeat every n days/weeks/months/years.
  --days <list>              Weekly: comma-separated weekdays (0-6 or names).
                             Empty means the start date's weekday.
  --day-of-month <d>         Monthly: fixed day of the month (1-31).
  --week <w>                 Monthly: first | second | third | fourth | last.
  --weekday <day>            Monthly: weekday for --week (0-6 or a name).
  --month <m>                Yearly: month (1-12 or a name).
  --day <d>                  Yearly: day of the month.
  --settings <json>          Base settings as JSON, e.g. '{{\"everyXWeeks\":2}}'.
                             Pattern flags are applied on top of it, in the
                             order given, wherever --settings appears.
  --overflow <policy>        skip | clamp | rollover, for days missing from a
                             month (day 31, February 29). Default: skip.

Output:
  --calendar                 Also draw a month grid for each month with dates.
  --json                     Print the dates as a JSON array only.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                Log filter (e.g. debug, recurra=trace). Default: warn.

Exit codes:
  0  Success.
  1  The date range is invalid.
  2  Invalid arguments or pattern settings.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        parse_args_from(args.iter().map(|a| a.to_string())).unwrap()
    }

    #[test]
    fn settings_json_keeps_earlier_pattern_flags() {
        let config = parse(&["-f", "weekly", "--days", "mon,wed", "--settings", r#"{"everyXWeeks":2}"#]);
        assert_eq!(config.settings.days_of_week, vec![1, 3]);
        assert_eq!(config.settings.every_x_weeks, 2);

        let config = parse(&["--month=dec", "--settings", r#"{"day":25}"#, "-f", "yearly"]);
        assert_eq!((config.settings.month, config.settings.day), (11, 25));
    }

    #[test]
    fn flags_override_settings_json() {
        let config = parse(&["--settings", r#"{"everyXMonths":3,"dayOfMonth":10,"weekOfMonth":0}"#, "--day-of-month", "20", "-f", "monthly"]);
        assert_eq!(config.settings.every_x_months, 3);
        assert_eq!(config.settings.day_of_month, 20);
        assert_eq!(config.settings.week_of_month, 0);
    }

    #[test]
    fn last_monthly_mode_flag_wins() {
        let config = parse(&["-f", "monthly", "--week", "last", "--weekday", "fri", "--day-of-month", "15"]);
        assert_eq!((config.settings.week_of_month, config.settings.day_of_month), (0, 15));

        let config = parse(&["-f", "monthly", "--day-of-month", "15", "--week", "2", "--weekday", "tue"]);
        assert_eq!((config.settings.week_of_month, config.settings.day_of_week), (2, 2));
        assert_eq!(config.settings.day_of_month, 1);
    }

    #[test]
    fn interval_applies_to_the_final_frequency() {
        let config = parse(&["-n", "4", "-f", "weekly"]);
        assert_eq!(config.settings.every_x_weeks, 4);
        assert_eq!(config.settings.every_x_days, 1);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args_from(["--settings".to_string(), "{".to_string()]).is_err());
        assert!(parse_args_from(["--settings={}".to_string(), "--settings={}".to_string()]).is_err());
        assert!(parse_args_from(["--frequency".to_string(), "hourly".to_string()]).is_err());
        assert!(parse_args_from(["--bogus".to_string()]).is_err());
    }
}
