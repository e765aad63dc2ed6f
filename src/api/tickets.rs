//
//  freshdesk-client
//  api/tickets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Ticket Operations
//!
//! This module provides [`TicketApi`], the mapper for the `tickets` endpoint
//! family: fetching (optionally with inlined sub-resources), creation (JSON
//! or multipart when attachments ride along), outbound emails, partial
//! updates, deletion, view-filtered listing, and free-text search.
//!
//! ## Attachment Encoding
//!
//! A create with attachments cannot go out as JSON. The body is re-encoded
//! as multipart form data: list-valued fields are resent under a
//! bracket-suffixed key (`cc_emails[]`) so the encoder treats them as
//! repeated fields, the custom-field map is flattened into individually
//! keyed entries (`custom_fields[name]`), and each file becomes an
//! `attachments[]` part named after its basename. The JSON content type is
//! never set on this path; `reqwest` supplies the multipart boundary header
//! itself.
//!
//! ## Example
//!
//! ```rust,no_run
//! use freshdesk_client::api::tickets::{CreateTicket, TicketListOptions};
//! use freshdesk_client::Freshdesk;
//!
//! # async fn example() -> freshdesk_client::Result<()> {
//! let freshdesk = Freshdesk::new("company.freshdesk.com", "api-key")?;
//!
//! let ticket = freshdesk.tickets.create(&CreateTicket {
//!     subject: "Printer on fire".to_string(),
//!     description: Some("It looked fine this morning.".to_string()),
//!     email: Some("requester@example.com".to_string()),
//!     ..Default::default()
//! }).await?;
//!
//! let open = freshdesk.tickets.list(&TicketListOptions::default()).await?;
//! println!("created #{:?}, {} tickets in the default view", ticket.id(), open.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use super::client::FreshdeskClient;
use super::common::{FreshdeskError, PageWalk, Result};
use crate::models::Ticket;

/// Named server-side views a ticket listing can be filtered by.
///
/// [`TicketFilter::All`] suppresses the filter parameter entirely, which is
/// how the API exposes an unfiltered listing. The default view is
/// `new_and_my_open`, matching the API's own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketFilter {
    /// New tickets plus the caller's open tickets (the API default view).
    #[default]
    NewAndMyOpen,
    /// Tickets the caller watches.
    Watching,
    /// Tickets flagged as spam.
    Spam,
    /// Soft-deleted tickets.
    Deleted,
    /// No named view; list everything.
    All,
}

impl TicketFilter {
    /// The `filter` query value, or `None` for the unfiltered listing.
    fn as_param(self) -> Option<&'static str> {
        match self {
            Self::NewAndMyOpen => Some("new_and_my_open"),
            Self::Watching => Some("watching"),
            Self::Spam => Some("spam"),
            Self::Deleted => Some("deleted"),
            Self::All => None,
        }
    }
}

/// Options for [`TicketApi::list`].
///
/// # Example
///
/// ```rust
/// use freshdesk_client::api::tickets::{TicketFilter, TicketListOptions};
///
/// let options = TicketListOptions {
///     filter: TicketFilter::Deleted,
///     updated_since: Some("2022-01-01T00:00:00Z".to_string()),
///     ..Default::default()
/// };
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TicketListOptions {
    /// The named view to list. Defaults to the API's default view.
    pub filter: TicketFilter,

    /// Only tickets updated at or after this ISO-8601 timestamp.
    pub updated_since: Option<String>,

    /// Pin a specific page number (1-indexed). One request, no walk.
    pub page: Option<u32>,

    /// Items per page. Defaults to 100 when unset.
    pub per_page: Option<u32>,

    /// Additional query pairs forwarded verbatim.
    pub extra: Vec<(String, String)>,
}

/// A new ticket to create.
///
/// The recognized fields mirror what the create endpoint documents; anything
/// forward-compatible goes through `extra` and is merged into the body
/// verbatim (overriding a recognized field on collision). Attachments switch
/// the request to multipart encoding.
///
/// # Defaults
///
/// `Default` yields an open (`status` 2), low-priority (`priority` 1) ticket
/// with everything else empty.
#[derive(Debug, Clone)]
pub struct CreateTicket {
    /// The ticket subject line.
    pub subject: String,

    /// The ticket body.
    pub description: Option<String>,

    /// The requester's email address.
    pub email: Option<String>,

    /// Status code. Defaults to 2 (open).
    pub status: u8,

    /// Priority code. Defaults to 1 (low).
    pub priority: u8,

    /// Tags to apply.
    pub tags: Vec<String>,

    /// Addresses to copy on requester notifications.
    pub cc_emails: Vec<String>,

    /// Tenant custom fields, sent under the `custom_fields` key.
    pub custom_fields: Map<String, Value>,

    /// Local paths of files to attach. Non-empty switches the request to
    /// multipart form encoding.
    pub attachments: Vec<PathBuf>,

    /// Extra body fields merged in verbatim.
    pub extra: Map<String, Value>,
}

impl Default for CreateTicket {
    fn default() -> Self {
        Self {
            subject: String::new(),
            description: None,
            email: None,
            status: 2,
            priority: 1,
            tags: Vec::new(),
            cc_emails: Vec::new(),
            custom_fields: Map::new(),
            attachments: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl CreateTicket {
    /// Assembles the JSON body for the attachment-free path.
    fn json_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("subject".to_string(), Value::from(self.subject.clone()));
        body.insert("status".to_string(), Value::from(self.status));
        body.insert("priority".to_string(), Value::from(self.priority));
        if let Some(description) = &self.description {
            body.insert("description".to_string(), Value::from(description.clone()));
        }
        if let Some(email) = &self.email {
            body.insert("email".to_string(), Value::from(email.clone()));
        }
        if !self.tags.is_empty() {
            body.insert("tags".to_string(), Value::from(self.tags.clone()));
        }
        if !self.cc_emails.is_empty() {
            body.insert("cc_emails".to_string(), Value::from(self.cc_emails.clone()));
        }
        if !self.custom_fields.is_empty() {
            body.insert(
                "custom_fields".to_string(),
                Value::Object(self.custom_fields.clone()),
            );
        }
        for (key, value) in &self.extra {
            body.insert(key.clone(), value.clone());
        }
        Value::Object(body)
    }

    /// Flattens the ticket into multipart text fields.
    ///
    /// List values are repeated under a `[]`-suffixed key and map values are
    /// unrolled into `parent[child]` entries, since the form encoding cannot
    /// represent nested structures.
    fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        fields.push(("subject".to_string(), self.subject.clone()));
        fields.push(("status".to_string(), self.status.to_string()));
        fields.push(("priority".to_string(), self.priority.to_string()));
        if let Some(description) = &self.description {
            fields.push(("description".to_string(), description.clone()));
        }
        if let Some(email) = &self.email {
            fields.push(("email".to_string(), email.clone()));
        }
        for tag in &self.tags {
            fields.push(("tags[]".to_string(), tag.clone()));
        }
        for cc in &self.cc_emails {
            fields.push(("cc_emails[]".to_string(), cc.clone()));
        }
        for (name, value) in &self.custom_fields {
            fields.push((format!("custom_fields[{}]", name), form_scalar(value)));
        }
        for (key, value) in &self.extra {
            match value {
                Value::Array(items) => {
                    let key = if key.ends_with("[]") {
                        key.clone()
                    } else {
                        format!("{}[]", key)
                    };
                    for item in items {
                        fields.push((key.clone(), form_scalar(item)));
                    }
                }
                Value::Object(entries) => {
                    for (name, entry) in entries {
                        fields.push((format!("{}[{}]", key, name), form_scalar(entry)));
                    }
                }
                other => fields.push((key.clone(), form_scalar(other))),
            }
        }
        fields
    }

    /// Builds the multipart form, reading each attachment from disk.
    ///
    /// File bytes live only for the duration of the upload request.
    fn multipart_form(&self) -> Result<Form> {
        let mut form = Form::new();
        for (key, value) in self.form_fields() {
            form = form.text(key, value);
        }
        for path in &self.attachments {
            let bytes = std::fs::read(path).map_err(|source| FreshdeskError::AttachmentRead {
                path: path.display().to_string(),
                source,
            })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());
            form = form.part("attachments[]", Part::bytes(bytes).file_name(file_name));
        }
        Ok(form)
    }
}

/// An outbound email ticket: a thread the helpdesk starts itself.
#[derive(Debug, Clone)]
pub struct CreateOutboundEmail {
    /// The email subject line.
    pub subject: String,

    /// The email body.
    pub description: String,

    /// The recipient address.
    pub email: String,

    /// The sending email configuration to use.
    pub email_config_id: u64,

    /// Priority code. Defaults to 1 (low).
    pub priority: u8,

    /// Extra body fields merged in verbatim.
    pub extra: Map<String, Value>,
}

impl Default for CreateOutboundEmail {
    fn default() -> Self {
        Self {
            subject: String::new(),
            description: String::new(),
            email: String::new(),
            email_config_id: 0,
            priority: 1,
            extra: Map::new(),
        }
    }
}

impl CreateOutboundEmail {
    fn json_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("subject".to_string(), Value::from(self.subject.clone()));
        body.insert(
            "description".to_string(),
            Value::from(self.description.clone()),
        );
        body.insert("email".to_string(), Value::from(self.email.clone()));
        body.insert(
            "email_config_id".to_string(),
            Value::from(self.email_config_id),
        );
        body.insert("priority".to_string(), Value::from(self.priority));
        for (key, value) in &self.extra {
            body.insert(key.clone(), value.clone());
        }
        Value::Object(body)
    }
}

/// The mapper for the `tickets` endpoint family.
///
/// Stateless facade over the shared connection context; cheap to clone
/// around via [`Freshdesk`](crate::Freshdesk).
#[derive(Debug)]
pub struct TicketApi {
    client: Arc<FreshdeskClient>,
}

impl TicketApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one ticket by id.
    ///
    /// `include` names sub-resources to inline into the payload, sent as
    /// `?include=a,b`. The API currently understands `stats`,
    /// `conversations`, `requester`, and `company`.
    pub async fn get(&self, ticket_id: u64, include: &[&str]) -> Result<Ticket> {
        let path = format!("tickets/{}", ticket_id);
        let query = if include.is_empty() {
            Vec::new()
        } else {
            vec![("include".to_string(), include.join(","))]
        };
        Ticket::from_json(self.client.get(&path, &query).await?)
    }

    /// Creates a ticket.
    ///
    /// Goes out as JSON, or as multipart form data when attachments are
    /// present (see the module docs for the re-encoding rules).
    pub async fn create(&self, ticket: &CreateTicket) -> Result<Ticket> {
        if ticket.attachments.is_empty() {
            Ticket::from_json(self.client.post_json("tickets", &ticket.json_body()).await?)
        } else {
            let form = ticket.multipart_form()?;
            Ticket::from_json(self.client.post_multipart("tickets", form).await?)
        }
    }

    /// Starts an outbound email thread.
    pub async fn create_outbound_email(&self, email: &CreateOutboundEmail) -> Result<Ticket> {
        Ticket::from_json(
            self.client
                .post_json("tickets/outbound_email", &email.json_body())
                .await?,
        )
    }

    /// Applies a partial update and returns the resulting ticket.
    ///
    /// Only the fields present in `changes` are touched remotely.
    pub async fn update(&self, ticket_id: u64, changes: &Map<String, Value>) -> Result<Ticket> {
        let path = format!("tickets/{}", ticket_id);
        let body = Value::Object(changes.clone());
        Ticket::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Deletes a ticket.
    pub async fn delete(&self, ticket_id: u64) -> Result<()> {
        let path = format!("tickets/{}", ticket_id);
        self.client.delete(&path, &[]).await?;
        Ok(())
    }

    /// Lists tickets, filtered by a named view.
    ///
    /// Walks every page unless `options.page` pins one; see
    /// [`TicketListOptions`].
    pub async fn list(&self, options: &TicketListOptions) -> Result<Vec<Ticket>> {
        let mut params = Vec::new();
        if let Some(filter) = options.filter.as_param() {
            params.push(("filter".to_string(), filter.to_string()));
        }
        if let Some(updated_since) = &options.updated_since {
            params.push(("updated_since".to_string(), updated_since.clone()));
        }
        params.extend(options.extra.iter().cloned());

        let walk = PageWalk::list(options.page, options.per_page);
        let items = self.client.get_paged("tickets", &params, walk).await?;
        items.into_iter().map(Ticket::from_json).collect()
    }

    /// Lists the default view: new tickets plus the caller's open ones.
    pub async fn list_new_and_my_open(&self) -> Result<Vec<Ticket>> {
        self.list(&TicketListOptions::default()).await
    }

    /// Lists watched tickets, closed or open.
    pub async fn list_watched(&self) -> Result<Vec<Ticket>> {
        self.list(&TicketListOptions {
            filter: TicketFilter::Watching,
            ..Default::default()
        })
        .await
    }

    /// Lists soft-deleted tickets.
    pub async fn list_deleted(&self) -> Result<Vec<Ticket>> {
        self.list(&TicketListOptions {
            filter: TicketFilter::Deleted,
            ..Default::default()
        })
        .await
    }

    /// Searches tickets with a structured query string.
    ///
    /// The query uses the API's filter grammar, e.g.
    /// `"priority:3 AND status:2"`. Queries longer than 512 characters are
    /// rejected locally. Unpinned searches walk at most 10 pages of 30
    /// results, the most the remote search endpoint serves.
    pub async fn filter(&self, query: &str, page: Option<u32>) -> Result<Vec<Ticket>> {
        let walk = PageWalk::search(page);
        let items = self
            .client
            .get_search_paged("search/tickets", query, walk)
            .await?;
        items.into_iter().map(Ticket::from_json).collect()
    }
}

/// Renders a JSON scalar as a form-field value.
///
/// Strings go in bare; everything else uses its JSON rendering.
fn form_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
