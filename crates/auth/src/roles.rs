use serde::{Deserialize, Serialize};

/// Organizational role, ordered by rank.
///
/// The rank table is fixed configuration: a principal may only manage
/// principals whose role ranks strictly below its own. The owner sits at the
/// top of the management tree and bypasses scope resolution entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Manager,
    Provider,
    Customer,
}

impl Role {
    /// Every role, highest rank first.
    pub const ALL: [Role; 5] = [
        Role::Owner,
        Role::Admin,
        Role::Manager,
        Role::Provider,
        Role::Customer,
    ];

    /// Numeric rank used for management comparisons (higher outranks lower).
    pub fn rank(&self) -> u8 {
        match self {
            Role::Owner => 5,
            Role::Admin => 4,
            Role::Manager => 3,
            Role::Provider => 2,
            Role::Customer => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Provider => "provider",
            Role::Customer => "customer",
        }
    }

    /// True iff this role ranks strictly above `other`.
    pub fn outranks(&self, other: Role) -> bool {
        self.rank() > other.rank()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
