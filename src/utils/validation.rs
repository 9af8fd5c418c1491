use crate::error::LedgerError;

/// Amounts entering a ledger must be strictly positive.
pub fn validate_positive_amount(amount: i64) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(())
}

/// Extra payout components may be zero but never negative.
pub fn validate_non_negative_amount(amount: i64) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::NegativeAmount(amount));
    }
    Ok(())
}

pub fn validate_daily_rate(rate: i64) -> Result<(), LedgerError> {
    if rate <= 0 {
        return Err(LedgerError::NonPositiveRate(rate));
    }
    Ok(())
}
