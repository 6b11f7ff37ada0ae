//! Recharge-offer catalog endpoints

use rust_decimal::Decimal;
use serde::Serialize;

use cubana_core::{Bono, Oferta};

use super::error::ClientResult;
use super::ApiClient;

/// Payload for creating or updating a recharge offer
#[derive(Debug, Clone, Serialize)]
pub struct OfertaInput {
    pub titulo: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub descripcion: String,
    pub precio: Decimal,
    pub costo: Decimal,
    pub bonos: Vec<Bono>,
}

impl ApiClient {
    pub async fn ofertas(&self) -> ClientResult<Vec<Oferta>> {
        self.get("/ofertas-recargas").await
    }

    pub async fn create_oferta(&self, input: &OfertaInput) -> ClientResult<Oferta> {
        self.post("/ofertas-recargas", input).await
    }

    pub async fn update_oferta(&self, id: &str, input: &OfertaInput) -> ClientResult<Oferta> {
        self.put(&format!("/ofertas-recargas/{}", id), input).await
    }

    pub async fn delete_oferta(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/ofertas-recargas/{}", id)).await
    }

    /// Flip an offer between active and inactive
    pub async fn toggle_oferta(&self, id: &str) -> ClientResult<Oferta> {
        self.patch(&format!("/ofertas-recargas/{}/toggle", id), &serde_json::json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oferta_input_serializes_bonos() {
        let input = OfertaInput {
            titulo: "Recarga 500".to_string(),
            descripcion: String::new(),
            precio: Decimal::from(500),
            costo: Decimal::from(450),
            bonos: vec![Bono {
                titulo: "25 min".to_string(),
                tipo: "Minutos".to_string(),
            }],
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("descripcion").is_none());
        assert_eq!(json["bonos"][0]["tipo"], "Minutos");
    }
}
