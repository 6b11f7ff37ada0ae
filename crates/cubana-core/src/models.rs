//! Wire-format models of the upstream Cubana Express API
//!
//! Field names follow the upstream JSON (`_id`, camelCase); serde renames
//! keep the Rust side snake_case.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{MovementKind, OperationKind, OperationStatus, Role};
use cubana_utils::format_date;

/// Province reference embedded in operations and ledger entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Client reference embedded in operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Beneficiary of a remesa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beneficiary {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(
        rename = "cardNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card_number: Option<String>,
}

/// Money transfer operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remesa {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: Decimal,
    pub cost: Decimal,
    pub client: ClientRef,
    pub beneficiary: Beneficiary,
    pub date: DateTime<Utc>,
    #[serde(rename = "destinationProvince")]
    pub destination_province: ProvinceRef,
    pub status: OperationStatus,
    #[serde(default)]
    pub description: String,
    /// Set by the worker on confirmation; empty while pending
    #[serde(default)]
    pub confirmation: String,
}

/// Bundled bonus of a recharge offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bono {
    pub titulo: String,
    /// "Minutos", "Mensajes" or "Datos"
    pub tipo: String,
}

/// Recharge offer from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oferta {
    #[serde(rename = "_id")]
    pub id: String,
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    pub precio: Decimal,
    #[serde(default)]
    pub costo: Decimal,
    #[serde(default)]
    pub bonos: Vec<Bono>,
    #[serde(default)]
    pub activa: bool,
}

/// Phone recharge operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recarga {
    #[serde(rename = "_id")]
    pub id: String,
    pub oferta: Oferta,
    pub client: ClientRef,
    pub amount: Decimal,
    pub phone: String,
    pub date: DateTime<Utc>,
    pub status: OperationStatus,
    #[serde(default)]
    pub confirmation: String,
    #[serde(rename = "destinationProvince")]
    pub destination_province: ProvinceRef,
}

/// Single movement in a province ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    /// Signed: entradas are positive, remesas/recargas negative
    pub amount: Decimal,
    /// Present only when the movement was generated by an operation
    #[serde(
        rename = "operationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,
    pub date: DateTime<Utc>,
    /// Present on the combined finance-operations listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<ProvinceRef>,
}

/// Per-province ledger entry of the financial status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceStatus {
    pub province: ProvinceRef,
    #[serde(default)]
    pub movements: Vec<Movement>,
    /// Signed running balance reported by the server
    pub total: Decimal,
}

impl ProvinceStatus {
    /// Check the ledger invariant: total equals the sum of movement amounts
    pub fn is_consistent(&self) -> bool {
        let sum: Decimal = self.movements.iter().map(|m| m.amount).sum();
        sum == self.total
    }
}

/// Financial status across all provinces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialStatus {
    #[serde(rename = "byProvince")]
    pub by_province: Vec<ProvinceStatus>,
    pub total: Decimal,
}

/// Province as managed by administrators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub workers: Vec<WorkerRef>,
    #[serde(default)]
    pub active: bool,
}

/// Worker assigned to a province
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Remittance recipient stored under a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(
        rename = "bankCardNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_card_number: Option<String>,
}

/// Client account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub recipients: Vec<Recipient>,
}

/// Back-office user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

// ==================== Unified operation row ====================

/// Row unified over remesas and recargas for combined views
///
/// Search and pagination work over this shape; the type-specific detail
/// modals keep using the full `Remesa`/`Recarga` records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,
    pub kind: OperationKind,
    pub amount: Decimal,
    /// Service cost; recargas are priced by their oferta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    pub date: DateTime<Utc>,
    pub status: OperationStatus,
    /// Client name for remesas, recharge phone for recargas
    pub counterparty: String,
    pub province: String,
    #[serde(default)]
    pub confirmation: String,
}

impl Operation {
    /// Fields matched by the free-text search, evaluated independently
    pub fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![
            format_date(&self.date),
            self.kind.to_string(),
            self.counterparty.clone(),
            self.amount.to_string(),
            self.province.clone(),
            self.status.to_string(),
        ];
        if let Some(cost) = self.cost {
            fields.push(cost.to_string());
        }
        fields
    }

    /// Whether the row still awaits worker confirmation
    pub fn is_pending(&self) -> bool {
        self.status == OperationStatus::Pendiente
    }
}

impl From<&Remesa> for Operation {
    fn from(remesa: &Remesa) -> Self {
        Self {
            id: remesa.id.clone(),
            kind: OperationKind::Remesa,
            amount: remesa.amount,
            cost: Some(remesa.cost),
            date: remesa.date,
            status: remesa.status,
            counterparty: remesa.client.name.clone(),
            province: remesa.destination_province.name.clone(),
            confirmation: remesa.confirmation.clone(),
        }
    }
}

impl From<&Recarga> for Operation {
    fn from(recarga: &Recarga) -> Self {
        Self {
            id: recarga.id.clone(),
            kind: OperationKind::Recarga,
            amount: recarga.amount,
            cost: None,
            date: recarga.date,
            status: recarga.status,
            counterparty: recarga.phone.clone(),
            province: recarga.destination_province.name.clone(),
            confirmation: recarga.confirmation.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn province_ref() -> ProvinceRef {
        ProvinceRef {
            id: "prov-1".to_string(),
            name: "La Habana".to_string(),
            code: Some("HAB".to_string()),
        }
    }

    pub(crate) fn sample_remesa(id: &str, status: OperationStatus) -> Remesa {
        Remesa {
            id: id.to_string(),
            amount: Decimal::from(150),
            cost: Decimal::from(40),
            client: ClientRef {
                id: "client-1".to_string(),
                name: "Maria Perez".to_string(),
                email: "maria@example.com".to_string(),
                phone: None,
            },
            beneficiary: Beneficiary {
                id: None,
                name: "Jose Perez".to_string(),
                phone: "53512345".to_string(),
                address: "Calle 23".to_string(),
                card_number: None,
            },
            date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            destination_province: province_ref(),
            status,
            description: String::new(),
            confirmation: String::new(),
        }
    }

    #[test]
    fn test_operation_from_remesa() {
        let remesa = sample_remesa("r1", OperationStatus::Pendiente);
        let op = Operation::from(&remesa);
        assert_eq!(op.kind, OperationKind::Remesa);
        assert_eq!(op.counterparty, "Maria Perez");
        assert_eq!(op.cost, Some(Decimal::from(40)));
        assert!(op.is_pending());
    }

    #[test]
    fn test_search_fields_include_formatted_date() {
        let remesa = sample_remesa("r1", OperationStatus::Pendiente);
        let op = Operation::from(&remesa);
        assert!(op.search_fields().contains(&"01/03/2024".to_string()));
        assert!(op.search_fields().contains(&"Pendiente".to_string()));
    }

    #[test]
    fn test_province_status_consistency() {
        let entry = ProvinceStatus {
            province: province_ref(),
            movements: vec![
                Movement {
                    id: "m1".to_string(),
                    kind: MovementKind::Entrada,
                    amount: Decimal::from(500),
                    operation_id: None,
                    date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
                    province: None,
                },
                Movement {
                    id: "m2".to_string(),
                    kind: MovementKind::Remesa,
                    amount: Decimal::from(-150),
                    operation_id: Some("r1".to_string()),
                    date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
                    province: None,
                },
            ],
            total: Decimal::from(350),
        };
        assert!(entry.is_consistent());
    }

    #[test]
    fn test_remesa_wire_format() {
        let json = r#"{
            "_id": "abc",
            "amount": 150,
            "cost": 40,
            "client": {"_id": "c1", "name": "Maria", "email": "m@x.cu"},
            "beneficiary": {"name": "Jose", "phone": "535", "address": "Calle 23"},
            "date": "2024-03-01T12:00:00Z",
            "destinationProvince": {"_id": "p1", "name": "La Habana", "code": "HAB"},
            "status": "Pendiente"
        }"#;
        let remesa: Remesa = serde_json::from_str(json).unwrap();
        assert_eq!(remesa.id, "abc");
        assert_eq!(remesa.destination_province.name, "La Habana");
        assert_eq!(remesa.status, OperationStatus::Pendiente);
        assert!(remesa.confirmation.is_empty());
    }
}
