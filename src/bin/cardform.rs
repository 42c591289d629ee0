//! CLI tool for the card form.
//!
//! # Usage
//!
//! ```bash
//! # Check a single field
//! cardform check number 1234567890123456
//! cardform check date 03/25 --today 2025-03
//!
//! # Submit the whole form
//! cardform submit --name "Jane Appleseed" --number 1234567890123456 --expiry 03/25 --cvc 123
//!
//! # Fill in the form on the terminal
//! cardform interactive
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use card_form::view::{render, Screen, ViewModel};
use card_form::{validate_field_with_rule, Event, Field, FormConfig, FormState, NameRule, YearMonth};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card entry form with live card preview")]
struct Cli {
    /// Current month as YYYY-MM (defaults to the local clock)
    #[arg(long, global = true, env = "CARD_FORM_TODAY", value_parser = YearMonth::parse)]
    today: Option<YearMonth>,

    /// Accepted characters for the cardholder name
    #[arg(long, global = true, env = "CARD_FORM_NAME_RULE", default_value = "letters")]
    name_rule: RuleArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single field
    Check {
        /// Field to validate (name, number, date, cvc)
        #[arg(value_parser = parse_field)]
        field: Field,

        /// Value to validate
        value: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Fill in and submit the whole form
    Submit {
        /// Cardholder name
        #[arg(long, default_value = "")]
        name: String,

        /// Card number
        #[arg(long, default_value = "")]
        number: String,

        /// Expiry date (MM/YY)
        #[arg(long, default_value = "")]
        expiry: String,

        /// CVC
        #[arg(long, default_value = "")]
        cvc: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Fill in the form interactively
    ///
    /// At each prompt, an empty answer keeps the value shown in brackets
    /// and `-` clears the field.
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    Letters,
    Legacy,
}

impl From<RuleArg> for NameRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Letters => NameRule::Letters,
            RuleArg::Legacy => NameRule::Legacy,
        }
    }
}

fn parse_field(s: &str) -> Result<Field, String> {
    s.parse::<Field>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(YearMonth::now);
    let rule = NameRule::from(cli.name_rule);
    tracing::debug!(%today, %rule, "starting");

    let ok = match cli.command {
        Commands::Check {
            field,
            value,
            output,
        } => cmd_check(field, &value, today, rule, output),
        Commands::Submit {
            name,
            number,
            expiry,
            cvc,
            output,
        } => {
            let values = [
                (Field::Name, name),
                (Field::CardNumber, number),
                (Field::Expiry, expiry),
                (Field::Cvc, cvc),
            ];
            cmd_submit(values, today, rule, output)
        }
        Commands::Interactive => match cmd_interactive(today, rule) {
            Ok(ok) => ok,
            Err(e) => {
                eprintln!("Error: {}", e);
                false
            }
        },
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_check(field: Field, value: &str, today: YearMonth, rule: NameRule, output: OutputFormat) -> bool {
    let result = validate_field_with_rule(field, value, today, rule);

    match output {
        OutputFormat::Text => match &result {
            Ok(()) => println!("Valid: yes"),
            Err(e) => {
                println!("Valid: no");
                println!("Error: {}", e);
                println!("Detail: {}", e.detail());
            }
        },
        OutputFormat::Json => {
            let json = match &result {
                Ok(()) => serde_json::json!({ "field": field, "valid": true }),
                Err(e) => serde_json::json!({
                    "field": field,
                    "valid": false,
                    "kind": e.kind(),
                    "error": e.to_string(),
                    "detail": e.detail(),
                }),
            };
            println!("{}", json);
        }
    }

    result.is_ok()
}

fn cmd_submit(
    values: [(Field, String); 4],
    today: YearMonth,
    rule: NameRule,
    output: OutputFormat,
) -> bool {
    let mut form = FormState::with_config(FormConfig::new().with_name_rule(rule));
    for (field, value) in values {
        form.apply(Event::Input { field, value }, today);
    }
    form.apply(Event::Submit, today);

    let view = render(&form);
    match output {
        OutputFormat::Text => print_view(&view),
        OutputFormat::Json => match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return false;
            }
        },
    }

    form.is_confirmed()
}

/// Answer that clears a field at an interactive prompt.
const CLEAR_ANSWER: &str = "-";

/// New value for a field from a prompt answer, or `None` to keep `current`.
fn answer_value(current: &str, answer: &str) -> Option<String> {
    match answer.trim_end_matches('\r') {
        CLEAR_ANSWER => Some(String::new()),
        "" if !current.is_empty() => None,
        answer => Some(answer.to_string()),
    }
}

fn cmd_interactive(today: YearMonth, rule: NameRule) -> io::Result<bool> {
    let mut form = FormState::with_config(FormConfig::new().with_name_rule(rule));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut pending: Vec<Field> = Field::ALL.to_vec();

    println!(
        "Press Enter to keep the value in brackets, or answer '{}' to clear it.",
        CLEAR_ANSWER
    );

    loop {
        print_view(&render(&form));

        for &field in &pending {
            let current = form.value(field).to_string();
            if current.is_empty() {
                print!("{}: ", field.label());
            } else {
                print!("{} [{}]: ", field.label(), current);
            }
            io::stdout().flush()?;

            let Some(line) = lines.next().transpose()? else {
                return Ok(form.is_confirmed());
            };
            if let Some(value) = answer_value(&current, &line) {
                form.apply(Event::input(field, value), today);
            }
        }

        form.apply(Event::Submit, today);
        if !form.is_confirmed() {
            pending = Field::ALL
                .into_iter()
                .filter(|&f| form.error(f).is_some())
                .collect();
            continue;
        }

        print_view(&render(&form));
        print!("[Enter] continue, [q] quit: ");
        io::stdout().flush()?;

        match lines.next().transpose()? {
            Some(line) if line.trim() != "q" => {
                form.apply(Event::Reset, today);
                pending = Field::ALL.to_vec();
            }
            _ => return Ok(true),
        }
    }
}

fn print_view(view: &ViewModel) {
    let preview = &view.preview;
    println!();
    println!("+------------------------------+");
    println!("| {:<28} |", preview.number);
    println!("| {:<21} {:>6} |", preview.name, preview.expiry);
    println!("+------------------------------+");
    println!("|                      CVC {:>3} |", preview.cvc);
    println!("+------------------------------+");
    println!();

    match &view.screen {
        Screen::Form(form) => {
            for field in form.fields.iter().filter(|f| f.error.is_some()) {
                println!("{}: {}", field.label, field.error.unwrap_or_default());
            }
        }
        Screen::Confirmation(panel) => {
            println!("{}", panel.heading.to_uppercase());
            println!("{}", panel.message);
        }
    }
}
