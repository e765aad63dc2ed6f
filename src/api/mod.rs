//
//  freshdesk-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client and the per-resource mappers for
//! the Freshdesk REST API (v2).
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication, request dispatch,
//!   and response classification
//! - [`common`]: Shared types (errors, list options, pagination rules)
//! - One module per resource family: [`tickets`], [`comments`],
//!   [`contacts`], [`companies`], [`customers`], [`agents`], [`groups`],
//!   [`roles`], [`time_entries`], [`ticket_fields`], [`solutions`]
//!
//! Every mapper is a stateless facade over one shared
//! [`FreshdeskClient`](client::FreshdeskClient): it builds resource URLs
//! and bodies, hands them to the client, and turns the decoded JSON into
//! domain records from [`crate::models`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use freshdesk_client::Freshdesk;
//!
//! # async fn example() -> freshdesk_client::Result<()> {
//! let freshdesk = Freshdesk::new("company.freshdesk.com", "api-key")?;
//!
//! let ticket = freshdesk.tickets.get(1, &["stats"]).await?;
//! let agent = freshdesk.agents.me().await?;
//! println!("{} is looking at {}", agent, ticket);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures surface as [`FreshdeskError`] variants classified from the HTTP
//! status and body shape: `BadRequest`, `Unauthorized`, `AccessDenied`,
//! `NotFound`, `RateLimited`, `ServerError`, plus local kinds raised before
//! any network call. Nothing is retried.

use std::sync::Arc;

/// Core HTTP client wrapper for the Freshdesk API.
pub mod client;

/// Shared types: the error taxonomy, list options, pagination rules.
pub mod common;

/// Agent operations.
pub mod agents;

/// Ticket conversation operations.
pub mod comments;

/// Company operations.
pub mod companies;

/// Contact operations, including the contact lifecycle.
pub mod contacts;

/// Customer operations.
pub mod customers;

/// Group operations.
pub mod groups;

/// Role operations.
pub mod roles;

/// Solution (knowledge base) operations.
pub mod solutions;

/// Ticket form field operations.
pub mod ticket_fields;

/// Ticket operations.
pub mod tickets;

/// Time entry operations.
pub mod time_entries;

pub use common::{FreshdeskError, ListOptions, Result};

use agents::AgentApi;
use client::FreshdeskClient;
use comments::CommentApi;
use companies::CompanyApi;
use contacts::ContactApi;
use customers::CustomerApi;
use groups::GroupApi;
use roles::RoleApi;
use solutions::SolutionApi;
use ticket_fields::TicketFieldApi;
use tickets::TicketApi;
use time_entries::TimeEntryApi;

/// A connection to one Freshdesk tenant.
///
/// `Freshdesk` owns the shared connection context and exposes one mapper
/// per resource family as a public field. The context (domain, credential,
/// headers) is read-only after construction, so a `Freshdesk` can be shared
/// across tasks behind an `Arc` and every mapper call stays independent.
///
/// # Creating a Connection
///
/// ```rust,no_run
/// use freshdesk_client::Freshdesk;
///
/// let freshdesk = Freshdesk::new("company.freshdesk.com", "your-api-key")?;
/// # Ok::<(), freshdesk_client::FreshdeskError>(())
/// ```
///
/// The domain must be the tenant's `freshdesk.com` domain; custom CNAMEs
/// are rejected before any request is made. For tests and API-compatible
/// proxies, [`Freshdesk::with_endpoint`] accepts an explicit base URL
/// instead.
///
/// # Notes
///
/// - Every operation is a fresh network round trip; nothing is cached
/// - Operations await their calls sequentially and return only after all
///   pages or attachments are processed
#[derive(Debug)]
pub struct Freshdesk {
    /// Ticket operations.
    pub tickets: TicketApi,

    /// Ticket conversation operations.
    pub comments: CommentApi,

    /// Contact operations.
    pub contacts: ContactApi,

    /// Company operations.
    pub companies: CompanyApi,

    /// Customer operations.
    pub customers: CustomerApi,

    /// Group operations.
    pub groups: GroupApi,

    /// Agent operations.
    pub agents: AgentApi,

    /// Role operations.
    pub roles: RoleApi,

    /// Ticket form field operations.
    pub ticket_fields: TicketFieldApi,

    /// Time entry operations.
    pub time_entries: TimeEntryApi,

    /// Knowledge-base operations.
    pub solutions: SolutionApi,
}

impl Freshdesk {
    /// Connects to a tenant by its Freshdesk domain.
    ///
    /// # Errors
    ///
    /// Returns [`FreshdeskError::InvalidArgument`] without any network call
    /// when the domain is outside the `freshdesk.com` managed-hosting
    /// suffix.
    pub fn new(domain: &str, api_key: &str) -> Result<Self> {
        Ok(Self::from_client(FreshdeskClient::new(domain, api_key)?))
    }

    /// Connects against an explicit endpoint URL, skipping the domain check.
    ///
    /// Intended for tests against a local mock server and for
    /// API-compatible proxies.
    pub fn with_endpoint(endpoint: &str, api_key: &str) -> Result<Self> {
        Ok(Self::from_client(FreshdeskClient::with_endpoint(
            endpoint, api_key,
        )?))
    }

    fn from_client(client: FreshdeskClient) -> Self {
        let client = Arc::new(client);
        Self {
            tickets: TicketApi::new(Arc::clone(&client)),
            comments: CommentApi::new(Arc::clone(&client)),
            contacts: ContactApi::new(Arc::clone(&client)),
            companies: CompanyApi::new(Arc::clone(&client)),
            customers: CustomerApi::new(Arc::clone(&client)),
            groups: GroupApi::new(Arc::clone(&client)),
            agents: AgentApi::new(Arc::clone(&client)),
            roles: RoleApi::new(Arc::clone(&client)),
            ticket_fields: TicketFieldApi::new(Arc::clone(&client)),
            time_entries: TimeEntryApi::new(Arc::clone(&client)),
            solutions: SolutionApi::new(client),
        }
    }
}
