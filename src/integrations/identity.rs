// ABOUTME: Identity provider capability for form prefill
// ABOUTME: Authentication semantics stay with the external identity service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Identity provider
//!
//! Authentication and authorization are delegated to an external identity
//! service; the booking flow only consumes a resolved identity, when one
//! exists, to prefill the form.

/// A resolved user identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Capability interface for resolving the current user
pub trait IdentityProvider: Send + Sync {
    /// The current identity, or `None` when unauthenticated
    fn current_identity(&self) -> Option<Identity>;
}

/// Provider used when no identity service is wired up
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn current_identity(&self) -> Option<Identity> {
        None
    }
}
