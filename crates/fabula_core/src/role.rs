//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// The sender of a conversation message.
///
/// Ordering of roles within a thread defines the model's conversational
/// context.
///
/// # Examples
///
/// ```
/// use fabula_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry prompts built from player actions
    User,
    /// Assistant messages are the model's replies
    Assistant,
}
