//! Admin account commands.

use clap::Subcommand;
use wisata_client::{ApiError, WisataClient};
use wisata_core::{AdminDraft, AdminPatch, AdminRole, AdminUserId};

#[derive(Subcommand)]
pub enum AdminAction {
    /// List admin accounts
    List,
    /// Register a new admin account
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Initial password
        #[arg(short, long)]
        password: String,

        /// Role (`super`, `normal`)
        #[arg(short, long, default_value = "normal")]
        role: AdminRole,
    },
    /// Update an admin account
    Update {
        /// Admin id
        id: i32,

        /// New email address
        #[arg(short, long)]
        email: Option<String>,

        /// New role (`super`, `normal`)
        #[arg(short, long)]
        role: Option<AdminRole>,
    },
    /// Delete an admin account
    Delete {
        /// Admin id
        id: i32,
    },
}

pub async fn run(client: &WisataClient, action: AdminAction) -> Result<(), ApiError> {
    match action {
        AdminAction::List => {
            let admins = client.list_admins().await?;
            for admin in &admins {
                tracing::info!("  [{}] {} ({})", admin.id, admin.email, admin.role.as_str());
            }
            tracing::info!("{} admin accounts", admins.len());
        }
        AdminAction::Create {
            email,
            password,
            role,
        } => {
            let admin = client
                .create_admin(&AdminDraft {
                    email,
                    password,
                    role,
                })
                .await?;
            tracing::info!("Admin created with id {}", admin.id);
        }
        AdminAction::Update { id, email, role } => {
            client
                .update_admin(
                    AdminUserId::new(id),
                    &AdminPatch {
                        email,
                        role,
                        password: None,
                    },
                )
                .await?;
            tracing::info!("Admin {id} updated");
        }
        AdminAction::Delete { id } => {
            client.delete_admin(AdminUserId::new(id)).await?;
            tracing::info!("Admin {id} deleted");
        }
    }
    Ok(())
}
