//! User account management

use std::sync::Arc;

use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::models::UserRecord;
use crate::response::Envelope;

/// Coordinates user sign-up, updates and listing through the persistence
/// gateway.
///
/// Validation stops only blank required fields. Everything that passes,
/// including identifiers of users that do not exist, goes to the backend
/// as-is and the store decides what it matches.
#[derive(Clone)]
pub struct UserManager {
    gateway: Arc<dyn PersistenceGateway>,
}

impl UserManager {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    /// Register a new user with the auth provider.
    ///
    /// Creation counts as successful only when the provider reports a
    /// created identity back.
    pub async fn add_user(&self, email: &str, password: &str) -> Result<Envelope> {
        if email.is_empty() || password.is_empty() {
            return Ok(Envelope::fail("Email and password are required"));
        }

        let signup = self.gateway.create_user(email, password).await?;
        if signup.user.is_some() {
            Ok(Envelope::ok("User added successfully"))
        } else {
            Ok(Envelope::fail("Error creating user"))
        }
    }

    pub async fn edit_user(&self, user_id: &str, email: &str) -> Result<Envelope> {
        if email.is_empty() {
            return Ok(Envelope::fail("Email is required for update"));
        }

        self.gateway.update_user(user_id, email).await?;
        Ok(Envelope::ok("User updated successfully"))
    }

    /// Removing a user that does not exist still reports success; the
    /// delete simply matches no rows.
    pub async fn remove_user(&self, user_id: &str) -> Result<Envelope> {
        self.gateway.delete_user(user_id).await?;
        Ok(Envelope::ok("User deleted successfully"))
    }

    pub async fn list_users(&self) -> Result<Envelope<UserRecord>> {
        let users = self.gateway.get_all_users().await?;
        Ok(Envelope::ok_with_data("Users fetched successfully", users))
    }
}
