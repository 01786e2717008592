//! Token deployment form.

use alloy::primitives::U256;
use thiserror::Error;

use crate::deploy::Constructor;

/// A form field the user can edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Token name.
    Name,
    /// Token symbol.
    Symbol,
    /// Initial supply, in whole tokens.
    Supply,
}

/// Reasons a form is not ready for deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is empty.
    #[error("Token name is required")]
    MissingName,
    /// The symbol is empty.
    #[error("Token symbol is required")]
    MissingSymbol,
    /// The supply is empty.
    #[error("Total supply is required")]
    MissingSupply,
    /// The supply is not an unsigned 256-bit decimal integer.
    #[error("Total supply must be a whole number")]
    InvalidSupply,
}

/// User input for a token deployment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenDeployForm {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Initial supply, as typed.
    pub supply: String,
}

impl TokenDeployForm {
    /// Create a form with every field filled in.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        supply: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), symbol: symbol.into(), supply: supply.into() }
    }

    /// Overwrites `field` with `value`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Symbol => &mut self.symbol,
            Field::Supply => &mut self.supply,
        };
        *slot = value.into();
    }

    /// Returns the current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Symbol => &self.symbol,
            Field::Supply => &self.supply,
        }
    }

    /// Checks that every field is filled in and turns the form into
    /// constructor arguments.
    ///
    /// Surrounding whitespace is ignored, so a blank field counts as empty.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::MissingName`] - If the name is empty.
    /// * [`ValidationError::MissingSymbol`] - If the symbol is empty.
    /// * [`ValidationError::MissingSupply`] - If the supply is empty.
    /// * [`ValidationError::InvalidSupply`] - If the supply is not a whole
    ///   number that fits in a `uint256`.
    pub fn validate(&self) -> Result<Constructor, ValidationError> {
        let name = self.name.trim();
        let symbol = self.symbol.trim();
        let supply = self.supply.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }
        if supply.is_empty() {
            return Err(ValidationError::MissingSupply);
        }

        if !supply.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidSupply);
        }
        let initial_supply = U256::from_str_radix(supply, 10)
            .map_err(|_| ValidationError::InvalidSupply)?;

        Ok(Constructor {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
            initial_supply,
        })
    }
}
