//! Transaction display formatting
//!
//! Layout used by the console:
//! `[<id>] <description> | <money> | <category> | <date>`

use crate::models::Transaction;

/// Format a single transaction as one line
pub fn format_transaction_row(txn: &Transaction) -> String {
    txn.to_string()
}

/// Format a list of transactions, one per line
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }
    output
}

/// Format kind-headed summaries, one per line
pub fn format_summaries(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|t| format!("{}\n", t.summary()))
        .collect()
}
