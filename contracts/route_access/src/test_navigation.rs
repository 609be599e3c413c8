#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::test::setup;
use crate::{MenuEntry, Role};
use soroban_sdk::{Env, String};

fn entry(env: &Env, label: &str, path: &str, enabled: bool) -> MenuEntry {
    MenuEntry {
        label: String::from_str(env, label),
        path: String::from_str(env, path),
        enabled,
    }
}

#[test]
fn test_navigation_for_cashier() {
    let (env, client, _admin) = setup();

    let entries = client.navigation(&Role::Caissier);
    assert_eq!(entries.len(), 5);
    assert_eq!(
        entries.get(0).unwrap(),
        entry(&env, "Tableau de bord", "/tableau-de-bord", true)
    );
    assert_eq!(
        entries.get(1).unwrap(),
        entry(&env, "Bénéficiaires", "/beneficiaires", false)
    );
    assert_eq!(
        entries.get(2).unwrap(),
        entry(&env, "Nouvelle consultation", "/consultations/nouvelle", false)
    );
    assert_eq!(
        entries.get(3).unwrap(),
        entry(&env, "Facturation", "/facturation", true)
    );
    assert_eq!(entries.get(4).unwrap(), entry(&env, "Audit", "/audit", false));
}

#[test]
fn test_navigation_for_doctor() {
    let (_env, client, _admin) = setup();

    let entries = client.navigation(&Role::Medecin);
    let enabled: [bool; 5] = core::array::from_fn(|i| entries.get(i as u32).unwrap().enabled);
    assert_eq!(enabled, [true, true, true, false, false]);
}

#[test]
fn test_super_admin_sees_every_entry_listed_for_it() {
    let (_env, client, _admin) = setup();

    for item in client.navigation(&Role::SuperAdmin).iter() {
        assert!(item.enabled);
    }
}

#[test]
fn test_navigation_agrees_with_resolver() {
    let (_env, client, _admin) = setup();

    for role in Role::ALL {
        for item in client.navigation(&role).iter() {
            assert_eq!(item.enabled, client.is_allowed(&role, &item.path));
        }
    }
}

#[test]
fn test_menu_is_returned_in_configured_order() {
    let (env, client, _admin) = setup();

    let menu = client.menu();
    assert_eq!(menu.len(), 5);
    assert_eq!(
        menu.get(0).unwrap().path,
        String::from_str(&env, "/tableau-de-bord")
    );
    assert_eq!(menu.get(4).unwrap().path, String::from_str(&env, "/audit"));
}
