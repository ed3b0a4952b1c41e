//! Request Context
//!
//! The resolved credential + identity claims for one request. Built once by
//! the session layer and passed explicitly into every component entry point;
//! nothing downstream reads ambient session state. Never cached across
//! requests, because bearer tokens expire.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Domain role carried in token claims
///
/// Roles are issued by the identity provider and trusted as-is; this layer
/// makes no policy decisions beyond view branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    TeachingAssistant,
    Instructor,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Student => "student",
            TeachingAssistant => "teaching_assistant",
            Instructor => "instructor",
            Admin => "admin",
        }
    }

    /// Parse a role code from token claims
    ///
    /// Claims are untrusted input; unknown codes return `None` rather than
    /// panicking so the caller can fail closed.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "student" => Some(Student),
            "teaching_assistant" => Some(TeachingAssistant),
            "instructor" => Some(Instructor),
            "admin" => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_teaching_staff(&self) -> bool {
        use UserRole::*;
        matches!(self, TeachingAssistant | Instructor)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolved per-request credential bundle
///
/// Lifetime is one request: re-resolved on every call.
#[derive(Clone)]
pub struct RequestContext {
    token: String,
    pub user_id: UserId,
    pub role: UserRole,
}

impl RequestContext {
    pub fn new(token: impl Into<String>, user_id: UserId, role: UserRole) -> Self {
        Self {
            token: token.into(),
            user_id,
            role,
        }
    }

    /// Bearer credential for upstream `Authorization` headers
    #[inline]
    pub fn bearer_token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .finish()
    }
}
