//! The route table and the permission resolver built on it.
//!
//! Static routes are held in a map keyed by their pattern; parametric routes
//! are kept in declaration order with their static prefix precomputed, so a
//! lookup is one map probe followed by an ordered prefix scan.

use crate::errors::ContractError;
use crate::roles::Role;
use crate::types::{ParamRoute, RoutePermission};
use mutuelle_common::{matches_parameter, normalize_path, RoutePattern, MAX_PATH_LEN};
use soroban_sdk::{symbol_short, Env, Map, String, Symbol, Vec};

const EXACT_ROUTES: Symbol = symbol_short!("RT_EXACT");
const PARAM_ROUTES: Symbol = symbol_short!("RT_PARAM");

/// Copies `value` into `buf` and borrows it as `&str`.
///
/// Returns `None` for strings longer than [`MAX_PATH_LEN`] or that are not
/// valid UTF-8; callers treat both as "no match".
pub fn read_str<'b>(value: &String, buf: &'b mut [u8; MAX_PATH_LEN]) -> Option<&'b str> {
    let len = value.len() as usize;
    if len > MAX_PATH_LEN {
        return None;
    }
    value.copy_into_slice(&mut buf[..len]);
    core::str::from_utf8(&buf[..len]).ok()
}

pub struct RouteTable {
    exact: Map<String, Vec<Role>>,
    parametric: Vec<ParamRoute>,
}

impl RouteTable {
    /// Validates `routes` and builds a table from them.
    ///
    /// Fails on the first malformed pattern, or when two entries would match
    /// the same paths (identical static routes, or parametric routes sharing
    /// a prefix).
    pub fn build(env: &Env, routes: &Vec<RoutePermission>) -> Result<Self, ContractError> {
        let mut exact = Map::new(env);
        let mut parametric: Vec<ParamRoute> = Vec::new(env);

        for route in routes.iter() {
            let mut buf = [0u8; MAX_PATH_LEN];
            let pattern =
                read_str(&route.pattern, &mut buf).ok_or(ContractError::InvalidRoutePattern)?;

            match RoutePattern::parse(pattern).map_err(|_| ContractError::InvalidRoutePattern)? {
                RoutePattern::Exact(_) => {
                    if exact.contains_key(route.pattern.clone()) {
                        return Err(ContractError::DuplicateRoute);
                    }
                    exact.set(route.pattern, route.roles);
                }
                RoutePattern::Parameter { prefix, .. } => {
                    let prefix = String::from_str(env, prefix);
                    if parametric.iter().any(|existing| existing.prefix == prefix) {
                        return Err(ContractError::DuplicateRoute);
                    }
                    parametric.push_back(ParamRoute {
                        pattern: route.pattern,
                        prefix,
                        roles: route.roles,
                    });
                }
            }
        }

        Ok(Self { exact, parametric })
    }

    pub fn load(env: &Env) -> Option<Self> {
        let storage = env.storage().instance();
        Some(Self {
            exact: storage.get(&EXACT_ROUTES)?,
            parametric: storage.get(&PARAM_ROUTES)?,
        })
    }

    pub fn save(&self, env: &Env) {
        let storage = env.storage().instance();
        storage.set(&EXACT_ROUTES, &self.exact);
        storage.set(&PARAM_ROUTES, &self.parametric);
    }

    /// Number of entries in the table.
    pub fn len(&self) -> u32 {
        self.exact.len() + self.parametric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the table entry matching `path`, if any.
    ///
    /// Static routes are tried first; parametric routes are scanned in
    /// declaration order and the first structural match wins.
    pub fn lookup(&self, env: &Env, path: &String) -> Option<RoutePermission> {
        let mut buf = [0u8; MAX_PATH_LEN];
        let path = normalize_path(read_str(path, &mut buf)?);

        let key = String::from_str(env, path);
        if let Some(roles) = self.exact.get(key.clone()) {
            return Some(RoutePermission { pattern: key, roles });
        }

        self.parametric.iter().find_map(|route| {
            let mut prefix_buf = [0u8; MAX_PATH_LEN];
            let prefix = read_str(&route.prefix, &mut prefix_buf)?;
            matches_parameter(prefix, path).then(|| RoutePermission {
                pattern: route.pattern,
                roles: route.roles,
            })
        })
    }

    /// Returns the role set of the entry matching `path`, if any.
    pub fn roles_for(&self, env: &Env, path: &String) -> Option<Vec<Role>> {
        self.lookup(env, path).map(|entry| entry.roles)
    }

    /// Whether `role` may access `path`. Unmapped paths are denied.
    pub fn is_allowed(&self, env: &Env, role: Role, path: &String) -> bool {
        self.roles_for(env, path)
            .is_some_and(|roles| roles.contains(role))
    }
}
