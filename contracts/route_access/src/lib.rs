#![no_std]
//! Role-based route access for the benefits front end.
//!
//! The route table and the navigation menu are loaded once by
//! [`RouteAccessContract::initialize`] and never mutated afterwards. Both the
//! router guard and the navigation renderer resolve permissions through the
//! same [`RouteTable`], so the two call sites cannot drift apart.

pub mod errors;
pub mod events;
pub mod roles;
pub mod table;
pub mod types;

#[cfg(test)]
mod test_navigation;

use mutuelle_common::MAX_PATH_LEN;
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{ContractError, ErrorCategory};
pub use roles::Role;
pub use table::{read_str, RouteTable};
pub use types::{MenuEntry, MenuItem, ParamRoute, RoutePermission};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const MENU: Symbol = symbol_short!("MENU");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Extends the time-to-live (TTL) for instance storage, which holds the whole
/// configuration.
fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn load_menu(env: &Env) -> Vec<MenuItem> {
    env.storage()
        .instance()
        .get(&MENU)
        .unwrap_or(Vec::new(env))
}

#[contract]
pub struct RouteAccessContract;

#[contractimpl]
impl RouteAccessContract {
    /// Load the route table and navigation menu.
    ///
    /// May only be called once. Every menu item must resolve to a table
    /// entry, otherwise nothing is stored.
    pub fn initialize(
        env: Env,
        admin: Address,
        routes: Vec<RoutePermission>,
        menu: Vec<MenuItem>,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&ADMIN) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        let table = RouteTable::build(&env, &routes)?;
        for item in menu.iter() {
            if table.roles_for(&env, &item.path).is_none() {
                log!(&env, "menu item has no route entry", item.path);
                return Err(ContractError::UnmappedMenuRoute);
            }
        }

        table.save(&env);
        env.storage().instance().set(&MENU, &menu);
        env.storage().instance().set(&ADMIN, &admin);
        extend_ttl_instance(&env);

        log!(&env, "route table loaded", table.len(), menu.len());
        events::publish_initialized(&env, admin, table.len(), menu.len());

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&ADMIN)
    }

    /// Number of entries in the route table (0 before initialisation).
    pub fn route_count(env: Env) -> u32 {
        RouteTable::load(&env).map_or(0, |table| table.len())
    }

    /// Whether `role` may access `path`.
    ///
    /// Never fails: unmapped paths, oversized or non-UTF-8 paths and an
    /// uninitialised contract all resolve to `false`.
    pub fn is_allowed(env: Env, role: Role, path: String) -> bool {
        RouteTable::load(&env).is_some_and(|table| table.is_allowed(&env, role, &path))
    }

    /// Same as [`Self::is_allowed`] for the backend's session role tag.
    /// Unknown tags are denied everywhere.
    pub fn is_allowed_tag(env: Env, role_tag: String, path: String) -> bool {
        let mut buf = [0u8; MAX_PATH_LEN];
        match read_str(&role_tag, &mut buf).and_then(Role::from_tag) {
            Some(role) => Self::is_allowed(env, role, path),
            None => false,
        }
    }

    /// Roles allowed on `path`; empty when the path is unmapped.
    pub fn allowed_roles(env: Env, path: String) -> Vec<Role> {
        RouteTable::load(&env)
            .and_then(|table| table.roles_for(&env, &path))
            .unwrap_or(Vec::new(&env))
    }

    /// The table entry that decides access to `path`, if any.
    pub fn matched_route(env: Env, path: String) -> Option<RoutePermission> {
        RouteTable::load(&env).and_then(|table| table.lookup(&env, &path))
    }

    /// Router guard: `Ok` when `role` may access `path`, `AccessDenied`
    /// otherwise.
    ///
    /// A failed invocation discards its events, so denials here are only
    /// logged. Use [`Self::check`] where denials must be recorded.
    pub fn guard(env: Env, role: Role, path: String) -> Result<(), ContractError> {
        let table = RouteTable::load(&env).ok_or(ContractError::NotInitialized)?;
        if table.is_allowed(&env, role, &path) {
            return Ok(());
        }
        log!(&env, "route access denied", role, path);
        Err(ContractError::AccessDenied)
    }

    /// Same decision as [`Self::is_allowed`]; a denial publishes `ACC_DENY`.
    pub fn check(env: Env, role: Role, path: String) -> bool {
        let allowed = Self::is_allowed(env.clone(), role, path.clone());
        if !allowed {
            events::publish_access_denied(&env, role, path);
        }
        allowed
    }

    /// The configured navigation menu.
    pub fn menu(env: Env) -> Vec<MenuItem> {
        load_menu(&env)
    }

    /// The navigation menu resolved for `role`, in configured order.
    ///
    /// Each entry is enabled exactly when [`Self::is_allowed`] holds for its
    /// path.
    pub fn navigation(env: Env, role: Role) -> Vec<MenuEntry> {
        let mut entries = Vec::new(&env);
        let Some(table) = RouteTable::load(&env) else {
            return entries;
        };

        for item in load_menu(&env).iter() {
            let enabled = table.is_allowed(&env, role, &item.path);
            entries.push_back(MenuEntry {
                label: item.label,
                path: item.path,
                enabled,
            });
        }
        entries
    }
}
