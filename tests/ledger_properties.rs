//! Behavioural guarantees of the ledger and monthly reports

use chrono::NaiveDate;
use pennywise::ledger::{Ledger, TransactionFilter};
use pennywise::models::{Category, Currency, Money, NewTransaction, Transaction, TransactionKind};
use pennywise::reports::ReportGenerator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn gbp(amount: Decimal) -> Money {
    Money::new(amount, Currency::default())
}

fn on(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    let categories = [Category::Food, Category::Rent, Category::Transport, Category::Food];
    for (i, category) in categories.into_iter().enumerate() {
        ledger.add(Transaction::with_details(
            format!("item {}", i),
            gbp(Decimal::new(100 * (i as i64 + 1), 2)),
            category,
            Some(on(2025, 5 + i as u32 % 2, 10)),
        ));
    }
    ledger
}

#[test]
fn all_preserves_insertion_order() {
    let ledger = sample_ledger();
    let names: Vec<String> = ledger.all().iter().map(|t| t.description().to_string()).collect();
    assert_eq!(names, vec!["item 0", "item 1", "item 2", "item 3"]);
}

#[test]
fn returned_sequences_are_copies() {
    let ledger = sample_ledger();
    let before = ledger.all();

    let mut all = ledger.all();
    all.reverse();
    all.truncate(1);
    let mut filtered = ledger.filter(|t| t.category() == Category::Food);
    filtered.clear();

    assert_eq!(ledger.all(), before);
}

#[test]
fn filter_returns_exact_subset_in_order() {
    let ledger = sample_ledger();
    let predicates: Vec<Box<dyn Fn(&Transaction) -> bool>> = vec![
        Box::new(|t: &Transaction| t.category() == Category::Food),
        Box::new(|t: &Transaction| t.falls_in(2025, 6)),
        Box::new(|t: &Transaction| t.amount().amount() > dec!(2.00)),
        Box::new(|_: &Transaction| true),
        Box::new(|_: &Transaction| false),
    ];

    for predicate in &predicates {
        let expected: Vec<Transaction> =
            ledger.all().into_iter().filter(|t| predicate(t)).collect();
        assert_eq!(ledger.filter(|t| predicate(t)), expected);
    }
}

#[test]
fn structured_filter_agrees_with_closure() {
    let ledger = sample_ledger();
    let filter = TransactionFilter::new()
        .category(Category::Food)
        .kind(TransactionKind::Expense);
    assert_eq!(
        ledger.filter_by(&filter),
        ledger.filter(|t| t.category() == Category::Food)
    );
}

#[test]
fn clear_empties_the_ledger() {
    let mut ledger = sample_ledger();
    ledger.clear();
    assert!(ledger.all().is_empty());
}

#[test]
fn money_addition_rejects_mixed_currencies() {
    let pounds = gbp(dec!(10.00));
    let dollars = Money::new(dec!(5.00), Currency::parse("USD").unwrap());
    assert!(pounds.add(&dollars).unwrap_err().is_currency_mismatch());
}

#[test]
fn june_report_excludes_july() {
    let mut ledger = Ledger::new();
    let june = Transaction::with_details(
        "June",
        gbp(dec!(12.50)),
        Category::Food,
        Some(on(2025, 6, 15)),
    );
    ledger.add(june.clone());
    ledger.add(Transaction::with_details(
        "July",
        gbp(dec!(5.00)),
        Category::Food,
        Some(on(2025, 7, 1)),
    ));

    let report = ReportGenerator::default().monthly_report(&ledger, 2025, 6).unwrap();
    assert_eq!(report.items(), &[june]);
    assert_eq!(report.total(), &gbp(dec!(12.50)));
}

#[test]
fn repeated_reports_are_equal() {
    let ledger = sample_ledger();
    let generator = ReportGenerator::default();
    let first = generator.monthly_report(&ledger, 2025, 5).unwrap();
    let second = generator.monthly_report(&ledger, 2025, 5).unwrap();

    assert_eq!(first.total(), second.total());
    assert_eq!(first.items(), second.items());
    assert_eq!(first, second);
}

#[test]
fn appended_transaction_found_by_id() {
    let mut ledger = sample_ledger();
    let original = Transaction::new(
        NewTransaction::new(gbp(dec!(1500)), Category::Salary)
            .kind(TransactionKind::Income)
            .description("Salary")
            .date(on(2025, 6, 28)),
    );
    let id = original.id();
    ledger.add(original.clone());

    let found = ledger.filter(|t| t.id() == id);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0], original);
    assert_eq!(found[0].description(), "Salary");
    assert_eq!(found[0].amount(), &gbp(dec!(1500)));
    assert_eq!(found[0].category(), Category::Salary);
    assert_eq!(found[0].date(), on(2025, 6, 28));
}
