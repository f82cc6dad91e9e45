//! Line-based console
//!
//! Reads commands and field values one line at a time, calls into the
//! ledger, service and report generator, and prints the results. Input and
//! output are generic so the whole session can be driven from tests.

pub mod commands;

pub use commands::{find_command, menu_text, Command, CommandAction, COMMANDS};

use std::io::{BufRead, Write};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::config::Settings;
use crate::display::{
    format_category_breakdown, format_monthly_report, format_summaries, format_transaction_list,
};
use crate::error::{PennywiseError, PennywiseResult};
use crate::ledger::{Ledger, TransactionFilter};
use crate::models::{
    Category, Currency, Money, NegativeAmountPolicy, NewTransaction, TransactionKind,
};
use crate::reports::ReportGenerator;
use crate::services::TransactionService;

/// Interactive session over one ledger
pub struct Console<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
    currency: Currency,
    policy: NegativeAmountPolicy,
    reports: ReportGenerator,
    finished: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with an empty ledger
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            input,
            output,
            ledger: Ledger::new(),
            currency: settings.default_currency.clone(),
            policy: settings.negative_amounts,
            reports: ReportGenerator::new(settings.reporting_currency().clone()),
            finished: false,
        }
    }

    /// The ledger built up during the session
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Consume the console, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> PennywiseResult<()> {
        info!(currency = %self.currency, policy = ?self.policy, "console session started");
        writeln!(self.output, "Welcome to Pennywise (console)")?;
        write!(self.output, "{}", menu_text())?;

        while !self.finished {
            let line = self.prompt("\nEnter command: ")?;
            if self.finished {
                break;
            }
            if line.is_empty() {
                continue;
            }

            match find_command(&line) {
                Some(cmd) => self.execute(cmd.action)?,
                None => writeln!(self.output, "Unknown command")?,
            }
        }

        info!(transactions = self.ledger.len(), "console session ended");
        Ok(())
    }

    /// Execute a single command
    pub fn execute(&mut self, action: CommandAction) -> PennywiseResult<()> {
        debug!(?action, "executing command");
        match action {
            CommandAction::AddTransaction => self.add_transaction(),
            CommandAction::ListTransactions => self.list_transactions(),
            CommandAction::FilterByCategory => self.filter_by_category(),
            CommandAction::MonthlyReport => self.monthly_report(),
            CommandAction::ShowTotal => self.show_total(),
            CommandAction::ClearLedger => {
                self.ledger.clear();
                writeln!(self.output, "Cleared ledger.")?;
                Ok(())
            }
            CommandAction::ShowSummaries => self.show_summaries(),
            CommandAction::Search => self.search(),
            CommandAction::Help => {
                write!(self.output, "{}", menu_text())?;
                Ok(())
            }
            CommandAction::Exit => {
                writeln!(self.output, "Goodbye.")?;
                self.finished = true;
                Ok(())
            }
        }
    }

    fn add_transaction(&mut self) -> PennywiseResult<()> {
        let kind = self.prompt("Kind (income/expense) [expense]: ")?;
        let description = self.prompt("Description: ")?;
        let amount = self.prompt("Amount (e.g. 12.34): ")?;
        let category = self.prompt(&format!("Category ({}): ", Category::names()))?;
        let date = self.prompt("Date (YYYY-MM-DD) leave empty for today: ")?;
        if self.finished {
            return Ok(());
        }

        let created =
            parse_new_transaction(&kind, description, &amount, &category, &date, &self.currency)
                .and_then(|input| {
                    TransactionService::new(&mut self.ledger, self.policy).create(input)
                });

        match created {
            Ok(txn) => writeln!(self.output, "Added transaction {}.", txn.id())?,
            Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
        }
        Ok(())
    }

    fn list_transactions(&mut self) -> PennywiseResult<()> {
        let all = self.ledger.all();
        write!(self.output, "{}", format_transaction_list(&all))?;
        Ok(())
    }

    fn filter_by_category(&mut self) -> PennywiseResult<()> {
        let text = self.prompt("Category to filter by (leave empty for none): ")?;
        let mut filter = TransactionFilter::new();

        if !text.is_empty() {
            match text.parse::<Category>() {
                Ok(category) => filter = filter.category(category),
                Err(_) => writeln!(self.output, "Unknown category; showing all.")?,
            }
        }

        let results = self.ledger.filter_by(&filter);
        write!(self.output, "{}", format_transaction_list(&results))?;
        Ok(())
    }

    fn monthly_report(&mut self) -> PennywiseResult<()> {
        let year = self.prompt("Year (e.g. 2025): ")?;
        let month = self.prompt("Month (1-12): ")?;
        if self.finished {
            return Ok(());
        }

        let (year, month) = match (year.parse::<i32>(), month.parse::<u32>()) {
            (Ok(y), Ok(m)) => (y, m),
            _ => {
                writeln!(self.output, "Invalid numbers.")?;
                return Ok(());
            }
        };

        let rendered = self
            .reports
            .monthly_report(&self.ledger, year, month)
            .and_then(|report| {
                let mut text = format_monthly_report(&report);
                text.push_str(&format_category_breakdown(&report)?);
                Ok(text)
            });

        match rendered {
            Ok(text) => write!(self.output, "{}", text)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn show_summaries(&mut self) -> PennywiseResult<()> {
        let all = self.ledger.all();
        if all.is_empty() {
            write!(self.output, "{}", format_transaction_list(&all))?;
            return Ok(());
        }

        let income = all.iter().filter(|t| t.is_income()).count();
        let expenses = all.iter().filter(|t| t.is_expense()).count();
        write!(self.output, "{}", format_summaries(&all))?;
        writeln!(self.output, "Income: {}, Expenses: {}", income, expenses)?;
        Ok(())
    }

    fn search(&mut self) -> PennywiseResult<()> {
        let kind = self.prompt("Kind (income/expense) leave empty for any: ")?;
        let text = self.prompt("Description contains: ")?;
        let month = self.prompt("Month (YYYY-MM) leave empty for any: ")?;
        let from = self.prompt("From date (YYYY-MM-DD): ")?;
        let to = self.prompt("To date (YYYY-MM-DD): ")?;
        if self.finished {
            return Ok(());
        }

        match parse_search(&kind, &text, &month, &from, &to) {
            Ok(filter) => {
                let results = self.ledger.filter_by(&filter);
                write!(self.output, "{}", format_transaction_list(&results))?;
            }
            Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
        }
        Ok(())
    }

    fn show_total(&mut self) -> PennywiseResult<()> {
        match self.reports.overall_total(&self.ledger) {
            Ok(total) => writeln!(self.output, "Total: {}", total)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    /// Print `message` and read one trimmed line
    ///
    /// End of input marks the session finished and yields an empty line.
    fn prompt(&mut self, message: &str) -> PennywiseResult<String> {
        if self.finished {
            return Ok(String::new());
        }

        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.finished = true;
            writeln!(self.output)?;
        }
        Ok(line.trim().to_string())
    }
}

/// Turn the raw field values of the add prompt into a transaction input
pub fn parse_new_transaction(
    kind: &str,
    description: String,
    amount: &str,
    category: &str,
    date: &str,
    currency: &Currency,
) -> PennywiseResult<NewTransaction> {
    let kind = if kind.is_empty() {
        TransactionKind::default()
    } else {
        kind.parse()?
    };
    let amount = Money::parse(amount, currency.clone())?;
    let category: Category = category.parse()?;

    let mut input = NewTransaction::new(amount, category)
        .kind(kind)
        .description(description);

    if !date.is_empty() {
        input = input.date(parse_date(date)?);
    }

    Ok(input)
}

/// Build a filter from the search prompts; blank fields match everything
pub fn parse_search(
    kind: &str,
    text: &str,
    month: &str,
    from: &str,
    to: &str,
) -> PennywiseResult<TransactionFilter> {
    let mut filter = TransactionFilter::new();

    if !kind.is_empty() {
        filter = filter.kind(kind.parse()?);
    }
    if !text.is_empty() {
        filter = filter.description_contains(text);
    }
    if !month.is_empty() {
        let first = parse_date(&format!("{}-01", month)).map_err(|_| {
            PennywiseError::validation(format!("Invalid month '{}': expected YYYY-MM", month))
        })?;
        filter = filter.month(first.year(), first.month());
    }
    match (from.is_empty(), to.is_empty()) {
        (true, true) => {}
        (false, false) => filter = filter.date_range(parse_date(from)?, parse_date(to)?),
        _ => {
            return Err(PennywiseError::validation(
                "Give both a from and a to date, or neither",
            ))
        }
    }

    Ok(filter)
}

fn parse_date(text: &str) -> PennywiseResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        PennywiseError::validation(format!("Invalid date '{}': expected YYYY-MM-DD", text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_session(script: &str, settings: &Settings) -> (String, Ledger) {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new(), settings);
        console.run().unwrap();
        let ledger = console.ledger().clone();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, ledger)
    }

    #[test]
    fn test_parse_new_transaction() {
        let gbp = Currency::default();
        let input =
            parse_new_transaction("", "Lunch".into(), "12.50", "food", "2025-06-15", &gbp).unwrap();

        assert_eq!(input.kind, TransactionKind::Expense);
        assert_eq!(input.amount.amount(), dec!(12.50));
        assert_eq!(input.category, Category::Food);
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2025, 6, 15));

        let no_date =
            parse_new_transaction("income", String::new(), "1", "salary", "", &gbp).unwrap();
        assert_eq!(no_date.kind, TransactionKind::Income);
        assert_eq!(no_date.date, None);
    }

    #[test]
    fn test_parse_new_transaction_errors() {
        let gbp = Currency::default();
        let rejected = [
            ("", "abc", "food", ""),
            ("", "1", "groceries", ""),
            ("", "1", "food", "15/06/2025"),
            ("gift", "1", "food", ""),
        ];
        for (kind, amount, category, date) in rejected {
            let err = parse_new_transaction(kind, String::new(), amount, category, date, &gbp)
                .unwrap_err();
            assert!(err.is_validation(), "{:?}", (kind, amount, category, date));
        }
    }

    #[test]
    fn test_add_list_and_exit() {
        let script = "add\n\nLunch\n12.50\nfood\n2025-06-15\nlist\nexit\n";
        let (output, ledger) = run_session(script, &Settings::default());

        assert_eq!(ledger.len(), 1);
        assert!(output.contains("Added transaction"));
        assert!(output.contains("Lunch | 12.50 GBP | FOOD | 2025-06-15"));
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_invalid_input_keeps_loop_running() {
        let script = "add\n\nLunch\nlots\nfood\n\nlist\n";
        let (output, ledger) = run_session(script, &Settings::default());

        assert!(ledger.is_empty());
        assert!(output.contains("Invalid input: Validation error: Invalid amount 'lots'"));
        assert!(output.contains("No transactions found."));
    }

    #[test]
    fn test_negative_amount_rejected_by_default() {
        let script = "add\n\nRefund\n-5\nmisc\n\n";
        let (output, ledger) = run_session(script, &Settings::default());

        assert!(ledger.is_empty());
        assert!(output.contains("Negative amount not allowed"));
    }

    #[test]
    fn test_filter_and_unknown_category() {
        let script = "add\n\nLunch\n12.50\nfood\n2025-06-15\n\
                      add\n\nBus\n2.40\ntransport\n2025-06-16\n\
                      filter\nTRANSPORT\n\
                      filter\nnonsense\n";
        let (output, _) = run_session(script, &Settings::default());

        let after_first_filter = output.split("Category to filter by").nth(1).unwrap();
        assert!(after_first_filter.contains("Bus"));
        assert!(!after_first_filter.contains("Lunch"));
        assert!(output.contains("Unknown category; showing all."));
    }

    #[test]
    fn test_report_and_total() {
        let script = "add\n\nLunch\n12.50\nfood\n2025-06-15\n\
                      add\n\nBus\n5.00\ntransport\n2025-07-01\n\
                      report\n2025\n6\n\
                      report\n2025\nJune\n\
                      report\n2025\n13\n\
                      total\n";
        let (output, _) = run_session(script, &Settings::default());

        assert!(output.contains("Report for 6/2025\nTotal: 12.50 GBP\nTransactions: 1\n"));
        assert!(output.contains("Invalid numbers."));
        assert!(output.contains("Error: Validation error: Month must be between 1 and 12, got 13"));
        assert!(output.contains("Total: 17.50 GBP"));
    }

    #[test]
    fn test_clear_and_unknown_command() {
        let script = "add\n\nLunch\n1\nfood\n\nclear\nlist\nfrobnicate\n";
        let (output, ledger) = run_session(script, &Settings::default());

        assert!(ledger.is_empty());
        assert!(output.contains("Cleared ledger."));
        assert!(output.contains("Unknown command"));
    }

    #[test]
    fn test_summary_shows_both_kinds() {
        let script = "add\nincome\nBonus\n250\nsalary\n2025-06-28\n\
                      add\n\nBus\n2.40\ntransport\n2025-06-16\n\
                      summary\n";
        let (output, _) = run_session(script, &Settings::default());

        assert!(output.contains("INCOME: Bonus | SALARY | 2025-06-28\n"));
        assert!(output.contains("EXPENSE: Bus | TRANSPORT | 2025-06-16\n"));
        assert!(output.contains("Income: 1, Expenses: 1"));
    }

    #[test]
    fn test_summary_of_empty_ledger() {
        let (output, _) = run_session("summary\n", &Settings::default());
        assert!(output.contains("No transactions found."));
        assert!(!output.contains("Income:"));
    }

    #[test]
    fn test_search_by_kind_text_and_dates() {
        let script = "add\nincome\nJune pay\n1500\nsalary\n2025-06-28\n\
                      add\n\nCoffee\n3\nfood\n2025-06-02\n\
                      add\n\nCoffee beans\n9\nfood\n2025-07-04\n\
                      search\nincome\n\n\n\n\n\
                      search\n\nCOFFEE\n2025-07\n\n\n\
                      search\n\n\n\n2025-06-01\n2025-06-30\n\
                      search\n\n\n\n2025-06-01\n\n";
        let (output, _) = run_session(script, &Settings::default());
        let sections: Vec<&str> = output.split("To date (YYYY-MM-DD): ").skip(1).collect();
        assert_eq!(sections.len(), 4);

        assert!(sections[0].contains("June pay"));
        assert!(!sections[0].contains("Coffee"));

        assert!(sections[1].contains("Coffee beans"));
        assert!(!sections[1].contains("| 3 GBP"));

        assert!(sections[2].contains("June pay"));
        assert!(sections[2].contains("Coffee | 3 GBP"));
        assert!(!sections[2].contains("Coffee beans"));

        assert!(sections[3].contains("Invalid input: Validation error: Give both a from"));
    }

    #[test]
    fn test_parse_search_errors() {
        assert!(parse_search("gift", "", "", "", "").unwrap_err().is_validation());
        assert!(parse_search("", "", "June", "", "").unwrap_err().is_validation());
        assert!(parse_search("", "", "2025-13", "", "").unwrap_err().is_validation());
        assert!(parse_search("", "", "", "2025-06-01", "soon").unwrap_err().is_validation());

        let filter = parse_search("expense", "tea", "2025-06", "", "").unwrap();
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.month, Some((2025, 6)));
        assert_eq!(filter.description.as_deref(), Some("tea"));
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        let (output, ledger) = run_session("add\nHalf", &Settings::default());
        assert!(ledger.is_empty());
        assert!(!output.contains("Added transaction"));
    }
}
