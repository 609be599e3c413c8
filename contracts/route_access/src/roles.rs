use soroban_sdk::contracttype;

/// Functional role of a signed-in user, assigned by the backend at login.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    SuperAdmin = 1,
    Admin = 2,
    Medecin = 3,
    Infirmier = 4,
    Secretaire = 5,
    Caissier = 6,
    Utilisateur = 7,
}

impl Role {
    /// Every role, in discriminant order.
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Medecin,
        Role::Infirmier,
        Role::Secretaire,
        Role::Caissier,
        Role::Utilisateur,
    ];

    /// Parses the backend's session role tag. Matching is exact; any other tag
    /// is an unknown role.
    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            "ADMIN" => Some(Role::Admin),
            "MEDECIN" => Some(Role::Medecin),
            "INFIRMIER" => Some(Role::Infirmier),
            "SECRETAIRE" => Some(Role::Secretaire),
            "CAISSIER" => Some(Role::Caissier),
            "UTILISATEUR" => Some(Role::Utilisateur),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Medecin => "MEDECIN",
            Role::Infirmier => "INFIRMIER",
            Role::Secretaire => "SECRETAIRE",
            Role::Caissier => "CAISSIER",
            Role::Utilisateur => "UTILISATEUR",
        }
    }
}
