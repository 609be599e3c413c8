use crate::roles::Role;
use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the route table is loaded.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub route_count: u32,
    pub menu_count: u32,
    pub timestamp: u64,
}

/// Publishes the one-time configuration event carrying the table sizes.
pub fn publish_initialized(env: &Env, admin: Address, route_count: u32, menu_count: u32) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        route_count,
        menu_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Event published when an audited check denies access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessDeniedEvent {
    pub role: Role,
    pub path: String,
    pub timestamp: u64,
}

pub fn publish_access_denied(env: &Env, role: Role, path: String) {
    let topics = (symbol_short!("ACC_DENY"), role);
    let data = AccessDeniedEvent {
        role,
        path,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
