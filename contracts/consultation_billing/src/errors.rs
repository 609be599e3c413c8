use soroban_sdk::contracttype;

/// Error categories for classifying contract failures.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Rejected input: bad amounts, percentages, references or catalogue.
    Validation = 1,
    /// The caller does not own the draft.
    Authorization = 2,
    /// The referenced draft or consultation type does not exist.
    NotFound = 3,
    /// Lifecycle conflicts such as double initialisation.
    StateConflict = 4,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidPercentage = 5,
    UnknownConsultationType = 6,
    DuplicateConsultationType = 7,
    DraftNotFound = 8,
    MissingReference = 9,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidAmount
            | ContractError::InvalidPercentage
            | ContractError::DuplicateConsultationType
            | ContractError::MissingReference => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::UnknownConsultationType | ContractError::DraftNotFound => {
                ErrorCategory::NotFound
            }
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::StateConflict
            }
        }
    }
}
