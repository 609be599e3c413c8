use crate::roles::Role;
use soroban_sdk::{contracttype, String, Vec};

/// One entry of the route table: a route pattern and the roles allowed on it.
///
/// The pattern is a path, optionally ending in one `:param` segment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoutePermission {
    pub pattern: String,
    pub roles: Vec<Role>,
}

/// A parametric route as stored after loading, with its static prefix
/// precomputed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamRoute {
    pub pattern: String,
    pub prefix: String,
    pub roles: Vec<Role>,
}

/// A navigation entry as configured.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

/// A navigation entry resolved for one role.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,
    pub enabled: bool,
}
