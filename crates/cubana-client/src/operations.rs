//! Remesa and recarga endpoints

use rust_decimal::Decimal;
use serde::Serialize;

use cubana_core::{Beneficiary, Recarga, Remesa};

use super::error::ClientResult;
use super::ApiClient;

/// Payload for creating or updating a remesa
#[derive(Debug, Clone, Serialize)]
pub struct RemesaInput {
    pub amount: Decimal,
    pub cost: Decimal,
    pub client: String,
    pub beneficiary: Beneficiary,
    #[serde(rename = "destinationProvince")]
    pub destination_province: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Payload for creating a recarga
#[derive(Debug, Clone, Serialize)]
pub struct RecargaInput {
    pub oferta: String,
    pub client: String,
    pub phone: String,
    #[serde(rename = "destinationProvince")]
    pub destination_province: String,
}

#[derive(Serialize)]
struct ConfirmBody<'a> {
    confirmation: &'a str,
}

impl ApiClient {
    // ==================== Remesas ====================

    pub async fn remesas(&self) -> ClientResult<Vec<Remesa>> {
        self.get("/remesas").await
    }

    pub async fn remesa(&self, id: &str) -> ClientResult<Remesa> {
        self.get(&format!("/remesas/{}", id)).await
    }

    /// Remesas destined for a province, for the worker dashboard
    pub async fn remesas_by_province(&self, province_id: &str) -> ClientResult<Vec<Remesa>> {
        self.get(&format!("/remesas/provincia/{}", province_id)).await
    }

    pub async fn create_remesa(&self, input: &RemesaInput) -> ClientResult<Remesa> {
        self.post("/remesas", input).await
    }

    pub async fn update_remesa(&self, id: &str, input: &RemesaInput) -> ClientResult<Remesa> {
        self.put(&format!("/remesas/{}", id), input).await
    }

    /// Confirm a pending remesa with the worker's delivery note
    pub async fn confirm_remesa(&self, id: &str, confirmation: &str) -> ClientResult<Remesa> {
        self.put(
            &format!("/remesas/{}/confirmar", id),
            &ConfirmBody { confirmation },
        )
        .await
    }

    pub async fn delete_remesa(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/remesas/{}", id)).await
    }

    // ==================== Recargas ====================

    pub async fn recargas(&self) -> ClientResult<Vec<Recarga>> {
        self.get("/recargas").await
    }

    pub async fn recarga(&self, id: &str) -> ClientResult<Recarga> {
        self.get(&format!("/recargas/{}", id)).await
    }

    pub async fn recargas_by_province(&self, province_id: &str) -> ClientResult<Vec<Recarga>> {
        self.get(&format!("/recargas/provincia/{}", province_id)).await
    }

    pub async fn create_recarga(&self, input: &RecargaInput) -> ClientResult<Recarga> {
        self.post("/recargas", input).await
    }

    /// Confirm a pending recarga; upstream uses PATCH here
    pub async fn confirm_recarga(&self, id: &str, confirmation: &str) -> ClientResult<Recarga> {
        self.patch(
            &format!("/recargas/{}/confirmar", id),
            &ConfirmBody { confirmation },
        )
        .await
    }

    pub async fn delete_recarga(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/recargas/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remesa_input_wire_names() {
        let input = RemesaInput {
            amount: Decimal::from(150),
            cost: Decimal::from(40),
            client: "c1".to_string(),
            beneficiary: Beneficiary {
                id: None,
                name: "Jose".to_string(),
                phone: "535".to_string(),
                address: "Calle 23".to_string(),
                card_number: None,
            },
            destination_province: "p1".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("destinationProvince").is_some());
        assert!(json.get("description").is_none());
    }
}
