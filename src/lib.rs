//
//  freshdesk-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Freshdesk Client Library
//!
//! A typed client for the Freshdesk helpdesk REST API (v2).
//!
//! ## Overview
//!
//! This crate translates method calls into HTTP requests against the
//! versioned Freshdesk endpoints, decodes the JSON payloads into typed
//! domain records, walks paginated listings into flat collections, and maps
//! failure responses onto a small taxonomy of typed errors.
//!
//! ## Features
//!
//! - **Resource mappers**: tickets, conversations, contacts, companies,
//!   customers, agents, groups, roles, time entries, ticket fields, and the
//!   knowledge base, each behind its own module
//! - **Typed domain records**: eager timestamp parsing, custom-field
//!   flattening, collision-safe field naming, decoded priority/status/source
//!   labels
//! - **Pagination built in**: list endpoints walk every page (or pin one);
//!   search endpoints respect the remote 10-page cap
//! - **Attachment uploads**: ticket creation re-encodes itself as multipart
//!   form data when files ride along
//! - **Typed errors**: rate limits carry their retry delay, auth failures
//!   distinguish bad credentials from denied access, local validation fails
//!   before the network is touched
//!
//! ## Module Structure
//!
//! - [`api`]: the HTTP client, error taxonomy, and per-resource mappers
//! - [`models`]: the domain records mapper calls return
//!
//! ## Example
//!
//! ```rust,no_run
//! use freshdesk_client::Freshdesk;
//!
//! # async fn example() -> freshdesk_client::Result<()> {
//! let freshdesk = Freshdesk::new("company.freshdesk.com", "your-api-key")?;
//!
//! let ticket = freshdesk.tickets.get(1, &[]).await?;
//! println!(
//!     "#{} {} [{} / {}]",
//!     ticket.id().unwrap_or_default(),
//!     ticket,
//!     ticket.priority()?,
//!     ticket.status()?,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## What This Crate Does Not Do
//!
//! No retries, no caching, no connection-pooling policy: a rate-limited or
//! failed call surfaces immediately as its typed error and the caller
//! decides. Timeouts are the transport's business; configure them there if
//! you need them.

/// API client implementations: the HTTP client and resource mappers.
pub mod api;

/// Typed domain records decoded from API payloads.
pub mod models;

/// Re-export of the main connection type.
///
/// [`Freshdesk`] is the entry point: construct one per tenant and reach
/// every resource mapper through its fields.
pub use api::Freshdesk;

/// Re-export of the error taxonomy and result alias.
pub use api::{FreshdeskError, ListOptions, Result};

/// Library version constant, derived from Cargo.toml at compile time.
///
/// Sent as part of the `User-Agent` header on every request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
