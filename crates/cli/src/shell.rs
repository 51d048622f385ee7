//! Interactive session. Holds one `FinanceToolkit` for the life of the
//! process: log in, keep an expense log, run the calculators, log out.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;

use finwise_core::forms::{self, BudgetForm, ExpenseForm, SavingsForm, SipForm};
use finwise_core::models::expense::{Expense, ExpenseCategory, ExpenseFilter};
use finwise_core::models::settings::Settings;
use finwise_core::FinanceToolkit;

use crate::output::{self, OutputFormat};

const HELP: &str = "\
Commands:
  login <email> <password>                 start a session
  logout                                   end the session (clears expenses)
  add <amount> <category> <date|today> <description...>
  list [from=YYYY-MM-DD] [to=YYYY-MM-DD] [cat=<category>]...
  summary [filters]                        spending per category
  delete <id-prefix>                       remove an expense by id
  delete #<n>                              remove the n-th logged expense
  budget <income> <savings>                suggested + custom allocation
  set <category>=<percent>                 edit the custom allocation
  reset                                    restore the default allocation
  sip <monthly> <rate%> <years> [target]
  savings <current> <monthly> <rate%> <years>
  guide                                    spending category guide
  help | quit

Use _ for spaces in cat= filters (cat=Debt_Payments).";

/// Outcome of a single shell command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run(settings: Settings, format: OutputFormat) -> Result<()> {
    let mut toolkit = FinanceToolkit::new(settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("finwise interactive session. Type 'help' for commands, 'login' to begin.");
    loop {
        print!("finwise> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match execute(&mut toolkit, format, line.trim()) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                tracing::debug!("Shell command rejected: {e:#}");
                println!("Error: {e}");
            }
        }
    }

    toolkit.logout();
    Ok(())
}

fn execute(toolkit: &mut FinanceToolkit, format: OutputFormat, line: &str) -> Result<Flow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((command, args)) = tokens.split_first() else {
        return Ok(Flow::Continue);
    };

    tracing::debug!(command = %command, args = args.len(), "shell command");
    match command.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" | "?" => println!("{HELP}"),
        "login" => {
            let [email, password] = args else {
                bail!("usage: login <email> <password>");
            };
            toolkit.login(email, password)?;
            println!("Welcome back, {email}!");
        }
        "logout" => {
            toolkit.logout();
            println!("Logged out.");
        }
        "guide" => output::print_guide(format)?,
        "add" => {
            let expense = parse_add(args, chrono::Local::now().date_naive())?;
            let id = toolkit.add_expense_record(expense)?;
            println!("Added expense {}", &id.to_string()[..8]);
        }
        "list" => {
            let filter = parse_filter(args)?;
            let view = toolkit.filtered_expenses(&filter)?;
            output::print_expenses(toolkit.settings(), format, &view)?;
        }
        "summary" => {
            let filter = parse_filter(args)?;
            let totals = toolkit.spending_by_category(&filter)?;
            output::print_summary(toolkit.settings(), format, &totals)?;
        }
        "delete" | "rm" => {
            let [target] = args else {
                bail!("usage: delete <id-prefix> | delete #<n>");
            };
            let removed = delete(toolkit, target)?;
            println!(
                "Deleted {} {} on {}",
                removed.category, removed.amount, removed.date
            );
        }
        "budget" => {
            let [income, savings] = args else {
                bail!("usage: budget <income> <savings>");
            };
            let (income, savings) = BudgetForm::new(*income, *savings).parse()?;
            let report = toolkit.generate_budget(income, savings)?;
            output::print_budget_report(toolkit.settings(), format, &report)?;
        }
        "set" => {
            let (category, pct) = crate::commands::parse_override(&args.join(" "))?;
            toolkit.set_custom_percentage(&category, pct)?;
            println!("{category} set to {pct}%");
        }
        "reset" => {
            toolkit.reset_custom_allocation()?;
            println!("Custom allocation restored to defaults.");
        }
        "sip" => {
            let form = match args {
                [monthly, rate, years] => SipForm {
                    monthly_investment: monthly.to_string(),
                    annual_rate: rate.to_string(),
                    years: years.to_string(),
                    target_corpus: String::new(),
                },
                [monthly, rate, years, target] => SipForm {
                    monthly_investment: monthly.to_string(),
                    annual_rate: rate.to_string(),
                    years: years.to_string(),
                    target_corpus: target.to_string(),
                },
                _ => bail!("usage: sip <monthly> <rate%> <years> [target]"),
            };
            let projection = toolkit.project_sip(&form.parse()?)?;
            output::print_sip(toolkit.settings(), format, &projection)?;
        }
        "savings" => {
            let [current, monthly, rate, years] = args else {
                bail!("usage: savings <current> <monthly> <rate%> <years>");
            };
            let form = SavingsForm {
                current_savings: current.to_string(),
                monthly_contribution: monthly.to_string(),
                annual_rate: rate.to_string(),
                years: years.to_string(),
            };
            let projection = toolkit.project_savings(&form.parse()?)?;
            output::print_savings(toolkit.settings(), format, &projection)?;
        }
        other => bail!("Unknown command '{other}'. Type 'help' for a list."),
    }

    Ok(Flow::Continue)
}

/// `add <amount> <category> <date|today> <description...>`.
/// Two-word categories ("Debt Payments") are matched before one-word ones.
fn parse_add(args: &[&str], today: NaiveDate) -> Result<Expense> {
    let [amount, rest @ ..] = args else {
        bail!("usage: add <amount> <category> <date|today> <description...>");
    };

    let is_category = |label: &str| label.parse::<ExpenseCategory>().is_ok();
    let (category, rest) = match rest {
        [first, second, tail @ ..] if is_category(&format!("{first} {second}")) => {
            (format!("{first} {second}"), tail)
        }
        [first, tail @ ..] => (first.to_string(), tail),
        [] => bail!("usage: add <amount> <category> <date|today> <description...>"),
    };

    let (date, description) = match rest {
        [date, description @ ..] => (date.to_string(), description.join(" ")),
        [] => (String::new(), String::new()),
    };

    let form = ExpenseForm {
        amount: amount.to_string(),
        category,
        date,
        description,
    };
    Ok(form.parse_on(today)?)
}

fn parse_filter(args: &[&str]) -> Result<ExpenseFilter> {
    let mut filter = ExpenseFilter::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| anyhow!("Filters look like from=..., to=... or cat=..., got '{arg}'"))?;
        match key.to_ascii_lowercase().as_str() {
            "from" => filter.start = Some(parse_filter_date(value)?),
            "to" => filter.end = Some(parse_filter_date(value)?),
            "cat" | "category" => {
                let category: ExpenseCategory = value.replace('_', " ").parse()?;
                filter.categories.insert(category);
            }
            other => bail!("Unknown filter '{other}'"),
        }
    }
    Ok(filter)
}

fn parse_filter_date(raw: &str) -> Result<NaiveDate> {
    Ok(forms::parse_date(raw, chrono::Local::now().date_naive())?)
}

/// `#n` deletes by 1-based position in the stored log; anything else is
/// matched as a unique id prefix.
fn delete(toolkit: &mut FinanceToolkit, target: &str) -> Result<Expense> {
    if let Some(position) = target.strip_prefix('#') {
        let n: usize = position
            .parse()
            .map_err(|_| anyhow!("'{target}' is not a valid position"))?;
        if n == 0 {
            bail!("Positions start at #1");
        }
        return Ok(toolkit.remove_expense_at(n - 1)?);
    }

    let prefix = target.to_ascii_lowercase();
    let matches: Vec<_> = toolkit
        .expenses()?
        .iter()
        .filter(|e| e.id.to_string().starts_with(&prefix))
        .map(|e| e.id)
        .collect();
    match matches.as_slice() {
        [id] => Ok(toolkit.remove_expense(*id)?),
        [] => bail!("No expense with id starting '{target}'"),
        _ => bail!("'{target}' matches {} expenses; use more characters", matches.len()),
    }
}
