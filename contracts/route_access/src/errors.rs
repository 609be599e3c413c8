use soroban_sdk::contracttype;

/// Error categories for classifying contract failures.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid configuration supplied at initialisation.
    Validation = 1,
    /// The caller's role is not allowed on the requested route.
    Authorization = 2,
    /// Lifecycle conflicts such as double initialisation.
    StateConflict = 3,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AccessDenied = 3,
    InvalidRoutePattern = 4,
    DuplicateRoute = 5,
    UnmappedMenuRoute = 6,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidRoutePattern
            | ContractError::DuplicateRoute
            | ContractError::UnmappedMenuRoute => ErrorCategory::Validation,
            ContractError::AccessDenied => ErrorCategory::Authorization,
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::StateConflict
            }
        }
    }
}
