//! Transaction service
//!
//! Builds transactions from caller input, applies the negative-amount policy
//! and appends them to the ledger.

use tracing::{info, warn};

use crate::error::PennywiseResult;
use crate::ledger::Ledger;
use crate::models::{NegativeAmountPolicy, NewTransaction, Transaction};

/// Service for recording transactions
pub struct TransactionService<'a> {
    ledger: &'a mut Ledger,
    policy: NegativeAmountPolicy,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(ledger: &'a mut Ledger, policy: NegativeAmountPolicy) -> Self {
        Self { ledger, policy }
    }

    /// Create and record a transaction
    pub fn create(&mut self, input: NewTransaction) -> PennywiseResult<Transaction> {
        let txn = self.build(input)?;
        self.ledger.add(txn.clone());
        info!(id = %txn.id(), amount = %txn.amount(), "recorded transaction");
        Ok(txn)
    }

    /// Create and record several transactions
    ///
    /// Every input is checked before anything is appended, so a rejected
    /// input leaves the ledger unchanged.
    pub fn create_many(
        &mut self,
        inputs: Vec<NewTransaction>,
    ) -> PennywiseResult<Vec<Transaction>> {
        let built = inputs
            .into_iter()
            .map(|input| self.build(input))
            .collect::<PennywiseResult<Vec<_>>>()?;

        self.ledger.add_many(built.iter().cloned());
        info!(count = built.len(), "recorded transactions");
        Ok(built)
    }

    /// Find recorded transactions matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Vec<Transaction>
    where
        P: Fn(&Transaction) -> bool,
    {
        self.ledger.filter(predicate)
    }

    fn build(&self, input: NewTransaction) -> PennywiseResult<Transaction> {
        if let Err(e) = self.policy.check(input.kind, &input.amount) {
            warn!(policy = ?self.policy, "rejected transaction: {}", e);
            return Err(e);
        }
        Ok(Transaction::new(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Currency, Money, TransactionKind};
    use rust_decimal_macros::dec;

    fn gbp(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::default())
    }

    #[test]
    fn test_create_appends_to_ledger() {
        let mut ledger = Ledger::new();
        let mut service = TransactionService::new(&mut ledger, NegativeAmountPolicy::RejectAll);

        let txn = service
            .create(
                NewTransaction::new(gbp(dec!(9.99)), Category::Entertainment).description("Film"),
            )
            .unwrap();

        let found = service.find(|t| t.id() == txn.id());
        assert_eq!(found, vec![txn.clone()]);
        assert_eq!(ledger.all(), vec![txn]);
    }

    #[test]
    fn test_create_rejects_negative_under_policy() {
        let mut ledger = Ledger::new();
        let mut service = TransactionService::new(&mut ledger, NegativeAmountPolicy::RejectAll);

        let err = service
            .create(NewTransaction::new(gbp(dec!(-1)), Category::Food))
            .unwrap_err();
        assert!(err.is_negative_amount());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_create_allows_negative_income_when_only_expenses_rejected() {
        let mut ledger = Ledger::new();
        let mut service =
            TransactionService::new(&mut ledger, NegativeAmountPolicy::RejectExpenses);

        let refund =
            NewTransaction::new(gbp(dec!(-20)), Category::Salary).kind(TransactionKind::Income);
        assert!(service.create(refund).is_ok());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_create_many_is_all_or_nothing() {
        let mut ledger = Ledger::new();
        let mut service = TransactionService::new(&mut ledger, NegativeAmountPolicy::RejectAll);

        let inputs = vec![
            NewTransaction::new(gbp(dec!(1)), Category::Food).description("ok"),
            NewTransaction::new(gbp(dec!(-2)), Category::Food).description("bad"),
        ];
        assert!(service.create_many(inputs).is_err());
        assert!(ledger.is_empty());

        let mut service = TransactionService::new(&mut ledger, NegativeAmountPolicy::RejectAll);
        let inputs = vec![
            NewTransaction::new(gbp(dec!(1)), Category::Food).description("one"),
            NewTransaction::new(gbp(dec!(2)), Category::Food).description("two"),
        ];
        let created = service.create_many(inputs).unwrap();
        assert_eq!(created.len(), 2);
        assert_eq!(ledger.all(), created);
    }
}
