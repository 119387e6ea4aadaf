//! Extended asset: an amount of a token, tagged with its symbol, precision
//! and the contract that issues it on the native chain.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult, Uint128};

/// Largest precision a token may declare (CW20 caps decimals at 18).
pub const MAX_PRECISION: u8 = 18;

#[cw_serde]
pub struct ExtendedAsset {
    /// Amount in the smallest unit
    pub amount: Uint128,
    /// Number of decimal places
    pub precision: u8,
    /// Ticker symbol, e.g. "TOK"
    pub symbol: String,
    /// Issuing token contract on the native chain
    pub contract: String,
}

impl ExtendedAsset {
    pub fn new(
        amount: impl Into<Uint128>,
        precision: u8,
        symbol: impl Into<String>,
        contract: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            precision,
            symbol: symbol.into(),
            contract: contract.into(),
        }
    }

    /// Check the symbol/precision pair is one a CW20 token could carry.
    ///
    /// Symbols are 3-12 characters of ASCII letters or `-`.
    pub fn validate(&self) -> StdResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(StdError::generic_err(format!(
                "precision {} exceeds max {}",
                self.precision, MAX_PRECISION
            )));
        }
        let len = self.symbol.len();
        if !(3..=12).contains(&len)
            || !self
                .symbol
                .bytes()
                .all(|b| b.is_ascii_alphabetic() || b == b'-')
        {
            return Err(StdError::generic_err(format!(
                "invalid symbol: {:?}",
                self.symbol
            )));
        }
        if self.contract.is_empty() {
            return Err(StdError::generic_err("asset contract is empty"));
        }
        Ok(())
    }

    /// Render the amount with its decimal point, e.g. `100.0000 TOK`.
    pub fn quantity_string(&self) -> String {
        let digits = self.amount.to_string();
        let precision = self.precision as usize;
        if precision == 0 {
            return format!("{} {}", digits, self.symbol);
        }
        let padded = format!("{:0>width$}", digits, width = precision + 1);
        let (whole, frac) = padded.split_at(padded.len() - precision);
        format!("{}.{} {}", whole, frac, self.symbol)
    }
}

impl fmt::Display for ExtendedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.quantity_string(), self.contract)
    }
}
