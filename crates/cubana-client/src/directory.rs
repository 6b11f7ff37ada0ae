//! Directory endpoints: users, clients and provinces

use serde::{Deserialize, Serialize};

use cubana_core::{Client, Province, Recipient, Role, User, WorkerRef};

use super::error::ClientResult;
use super::ApiClient;

/// Payload for creating or updating a back-office user
#[derive(Debug, Clone, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

/// Payload for creating or updating a client account
#[derive(Debug, Clone, Serialize)]
pub struct ClientInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub department: String,
}

/// Payload for creating or updating a province
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceInput {
    pub name: String,
    pub code: String,
    pub active: bool,
}

#[derive(Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

#[derive(Serialize)]
struct WorkerBody<'a> {
    #[serde(rename = "workerId")]
    worker_id: &'a str,
}

#[derive(Deserialize)]
struct CountBody {
    count: u64,
}

impl ApiClient {
    // ==================== Users ====================

    pub async fn users(&self) -> ClientResult<Vec<User>> {
        self.get("/users").await
    }

    pub async fn create_user(&self, input: &UserInput) -> ClientResult<User> {
        self.post("/users", input).await
    }

    pub async fn update_user(&self, id: &str, input: &UserInput) -> ClientResult<User> {
        self.put(&format!("/users/{}", id), input).await
    }

    pub async fn change_password(&self, id: &str, password: &str) -> ClientResult<()> {
        let _: serde_json::Value = self
            .put(&format!("/users/{}/password", id), &PasswordBody { password })
            .await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/users/{}", id)).await
    }

    // ==================== Clients ====================

    pub async fn clients(&self) -> ClientResult<Vec<Client>> {
        self.get("/clients").await
    }

    pub async fn clients_count(&self) -> ClientResult<u64> {
        let body: CountBody = self.get("/clients/count").await?;
        Ok(body.count)
    }

    pub async fn create_client(&self, input: &ClientInput) -> ClientResult<Client> {
        self.post("/clients", input).await
    }

    pub async fn update_client(&self, id: &str, input: &ClientInput) -> ClientResult<Client> {
        self.put(&format!("/clients/{}", id), input).await
    }

    pub async fn delete_client(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/clients/{}", id)).await
    }

    /// Add a saved remittance recipient under a client
    pub async fn add_recipient(
        &self,
        client_id: &str,
        recipient: &Recipient,
    ) -> ClientResult<Client> {
        self.post(&format!("/clients/{}/recipients", client_id), recipient)
            .await
    }

    pub async fn delete_recipient(&self, client_id: &str, recipient_id: &str) -> ClientResult<()> {
        self.delete(&format!("/clients/{}/recipients/{}", client_id, recipient_id))
            .await
    }

    // ==================== Provinces ====================

    pub async fn provinces(&self) -> ClientResult<Vec<Province>> {
        self.get("/provinces").await
    }

    pub async fn create_province(&self, input: &ProvinceInput) -> ClientResult<Province> {
        self.post("/provinces", input).await
    }

    pub async fn update_province(&self, id: &str, input: &ProvinceInput) -> ClientResult<Province> {
        self.put(&format!("/provinces/{}", id), input).await
    }

    pub async fn delete_province(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/provinces/{}", id)).await
    }

    pub async fn province_workers(&self, id: &str) -> ClientResult<Vec<WorkerRef>> {
        self.get(&format!("/provinces/{}/workers", id)).await
    }

    pub async fn assign_worker(&self, province_id: &str, worker_id: &str) -> ClientResult<Province> {
        self.post(
            &format!("/provinces/{}/workers", province_id),
            &WorkerBody { worker_id },
        )
        .await
    }

    pub async fn remove_worker(&self, province_id: &str, worker_id: &str) -> ClientResult<()> {
        self.delete(&format!("/provinces/{}/workers/{}", province_id, worker_id))
            .await
    }
}
