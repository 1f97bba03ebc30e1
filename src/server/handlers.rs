//! MCP tool handlers for the contact CRM.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! Each tool runs its store operation on the blocking pool while holding the
//! store lock, so a lookup and the write that depends on it cannot interleave
//! with another call.

use crate::error::ContactStoreError;
use crate::models::Contact;
use crate::services::{ContactStore, SaveOutcome};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::{Arc, Mutex};

/// Contact store shared between the server and its owner.
pub type SharedContactStore = Arc<Mutex<ContactStore>>;

/// The MCP server that exposes the contact store as tools.
#[derive(Clone)]
pub struct ContactMcpServer {
    store: SharedContactStore,
    validate_on_add: bool,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-crm".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact CRM - list, add, and delete contacts identified by first and last name.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactToolParams {
    first_name: String,
    last_name: String,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    address: Option<String>,
    /// Check names and phone number before saving
    #[serde(default)]
    validate: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactNameParams {
    first_name: String,
    last_name: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn store_error_to_mcp(e: ContactStoreError) -> McpError {
    match e {
        ContactStoreError::Validation(v) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(v.to_string()),
            data: None,
        },
        ContactStoreError::Storage(s) => to_mcp_error(s),
    }
}

fn contact_json(contact: &Contact) -> Value {
    json!({
        "first_name": contact.first_name,
        "last_name": contact.last_name,
        "full_name": contact.full_name(),
        "phone_number": contact.phone_number,
        "address": contact.address,
    })
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl ContactMcpServer {
    /// Create a new contact MCP server over a shared store.
    pub fn new(store: SharedContactStore, validate_on_add: bool) -> Self {
        Self {
            store,
            validate_on_add,
            tool_router: Self::tool_router(),
        }
    }

    /// List every stored contact.
    #[tool(description = "List every stored contact in the order they were added")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let response = self.handle_list().await?;
        json_result(&response)
    }

    /// Add a contact unless one with the same first and last name exists.
    #[tool(
        description = "Add a contact. Contacts are identified by exact first and last name; adding a name pair that is already stored changes nothing and reports saved=false."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.handle_add(params.0).await.map_err(|e| {
            tracing::error!("add_contact failed: {}", e.message);
            e
        })?;
        json_result(&response)
    }

    /// Delete the contact with the given first and last name.
    #[tool(
        description = "Delete the contact with the given first and last name. Deleting a contact that is not stored is not an error; the deleted list is empty."
    )]
    async fn delete_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.handle_delete(params.0).await.map_err(|e| {
            tracing::error!("delete_contact failed: {}", e.message);
            e
        })?;
        json_result(&response)
    }

    /// Check whether a contact is stored.
    #[tool(description = "Check whether a contact with the given first and last name is stored")]
    async fn contact_exists(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self.handle_exists(params.0).await?;
        json_result(&response)
    }
}

impl ContactMcpServer {
    /// Run `op` against the store on the blocking pool, holding the lock for its duration.
    async fn with_store<T, F>(&self, op: F) -> Result<T, McpError>
    where
        F: FnOnce(&mut ContactStore) -> Result<T, ContactStoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || {
            let mut guard = store
                .lock()
                .map_err(|_| to_mcp_error("Contact store lock poisoned"))?;
            op(&mut guard).map_err(store_error_to_mcp)
        })
        .await
        .map_err(|e| to_mcp_error(format!("Task join error: {}", e)))?
    }

    async fn handle_list(&self) -> Result<Value, McpError> {
        tracing::debug!("MCP Handler: list_contacts called");

        let contacts = self
            .with_store(|store| Ok(store.list_all()?))
            .await?;

        Ok(json!({
            "count": contacts.len(),
            "contacts": contacts.iter().map(contact_json).collect::<Vec<_>>(),
        }))
    }

    async fn handle_add(&self, params: AddContactToolParams) -> Result<Value, McpError> {
        let validate = params.validate.unwrap_or(self.validate_on_add);
        let contact = Contact::with_details(
            params.first_name,
            params.last_name,
            params.phone_number.unwrap_or_default(),
            params.address.unwrap_or_default(),
        );

        tracing::info!("MCP Handler: add_contact called");
        tracing::debug!(
            "Parameters: name={}, validate={}",
            contact.full_name(),
            validate
        );

        let saved = contact.clone();
        let outcome = self
            .with_store(move |store| store.save(&saved, validate))
            .await?;

        Ok(match outcome {
            SaveOutcome::Inserted(id) => json!({
                "saved": true,
                "id": id,
                "contact": contact_json(&contact),
            }),
            SaveOutcome::AlreadyExists => json!({
                "saved": false,
                "reason": "already_exists",
                "contact": contact_json(&contact),
            }),
        })
    }

    async fn handle_delete(&self, params: ContactNameParams) -> Result<Value, McpError> {
        let contact = Contact::new(params.first_name, params.last_name);
        tracing::info!("MCP Handler: delete_contact called for {}", contact.full_name());

        let full_name = contact.full_name();
        let deleted = self
            .with_store(move |store| Ok(store.delete(&contact)?))
            .await?;

        let count = deleted.len();
        Ok(json!({
            "full_name": full_name,
            "deleted": deleted,
            "count": count,
        }))
    }

    async fn handle_exists(&self, params: ContactNameParams) -> Result<Value, McpError> {
        let contact = Contact::new(params.first_name, params.last_name);
        let full_name = contact.full_name();

        let exists = self
            .with_store(move |store| Ok(store.exists(&contact)?))
            .await?;

        Ok(json!({
            "full_name": full_name,
            "exists": exists,
        }))
    }
}
