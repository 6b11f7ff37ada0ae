//! Basic types for the back-office domain

use serde::{Deserialize, Serialize};

/// Kind of client-facing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money transfer to a beneficiary in a province
    Remesa,
    /// Mobile phone recharge against a catalog offer
    Recarga,
}

impl std::str::FromStr for OperationKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remesa" => Ok(OperationKind::Remesa),
            "recarga" => Ok(OperationKind::Recarga),
            _ => Err(format!("Invalid operation kind: {}", s)),
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Remesa => write!(f, "remesa"),
            OperationKind::Recarga => write!(f, "recarga"),
        }
    }
}

/// Operation status as reported by the upstream API
///
/// The Spanish labels are wire values; an operation only ever moves
/// from `Pendiente` to `Realizado`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    /// Created, awaiting confirmation by a province worker
    Pendiente,
    /// Confirmed by a worker; terminal
    Realizado,
}

impl Default for OperationStatus {
    fn default() -> Self {
        OperationStatus::Pendiente
    }
}

impl std::str::FromStr for OperationStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pendiente" => Ok(OperationStatus::Pendiente),
            "Realizado" => Ok(OperationStatus::Realizado),
            _ => Err(format!("Invalid operation status: {}", s)),
        }
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationStatus::Pendiente => write!(f, "Pendiente"),
            OperationStatus::Realizado => write!(f, "Realizado"),
        }
    }
}

/// Kind of province-ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Manual cash entry recorded by an administrator
    Entrada,
    /// Movement generated by a remesa
    Remesa,
    /// Movement generated by a recarga
    Recarga,
}

impl std::str::FromStr for MovementKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entrada" => Ok(MovementKind::Entrada),
            "remesa" => Ok(MovementKind::Remesa),
            "recarga" => Ok(MovementKind::Recarga),
            _ => Err(format!("Invalid movement kind: {}", s)),
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementKind::Entrada => write!(f, "entrada"),
            MovementKind::Remesa => write!(f, "remesa"),
            MovementKind::Recarga => write!(f, "recarga"),
        }
    }
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full back-office access
    Admin,
    /// Scoped to a single province, confirms pending operations
    Worker,
    /// Client-facing account
    Client,
}

impl Default for Role {
    fn default() -> Self {
        Role::Client
    }
}

impl std::str::FromStr for Role {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "worker" => Ok(Role::Worker),
            "client" => Ok(Role::Client),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Worker => write!(f, "worker"),
            Role::Client => write!(f, "client"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_operation_status_wire_labels() {
        assert_eq!(OperationStatus::Pendiente.to_string(), "Pendiente");
        assert_eq!(OperationStatus::Realizado.to_string(), "Realizado");
        assert_eq!(
            OperationStatus::from_str("Realizado").unwrap(),
            OperationStatus::Realizado
        );
        assert!(OperationStatus::from_str("pendiente").is_err());
    }

    #[test]
    fn test_movement_kind_roundtrip() {
        for kind in [MovementKind::Entrada, MovementKind::Remesa, MovementKind::Recarga] {
            assert_eq!(MovementKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
        assert!(Role::from_str("manager").is_err());
    }
}
