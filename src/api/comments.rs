//
//  freshdesk-client
//  api/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Comment Operations
//!
//! [`CommentApi`] covers a ticket's conversation thread: listing the
//! existing entries and appending private notes or public replies.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::client::FreshdeskClient;
use super::common::{ListOptions, PageWalk, Result};
use crate::models::Comment;

/// The mapper for ticket conversations.
#[derive(Debug)]
pub struct CommentApi {
    client: Arc<FreshdeskClient>,
}

impl CommentApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Lists the conversation entries of a ticket, oldest first.
    pub async fn list(&self, ticket_id: u64, options: &ListOptions) -> Result<Vec<Comment>> {
        let path = format!("tickets/{}/conversations", ticket_id);
        let walk = PageWalk::list(options.page, options.per_page);
        let items = self.client.get_paged(&path, &options.extra, walk).await?;
        items.into_iter().map(Comment::from_json).collect()
    }

    /// Appends a private note to a ticket.
    ///
    /// `extra` fields (`private`, `notify_emails`, ...) are merged into the
    /// body verbatim.
    pub async fn create_note(
        &self,
        ticket_id: u64,
        body: &str,
        extra: &Map<String, Value>,
    ) -> Result<Comment> {
        let path = format!("tickets/{}/notes", ticket_id);
        Comment::from_json(self.client.post_json(&path, &comment_body(body, extra)).await?)
    }

    /// Appends a public reply to a ticket.
    pub async fn create_reply(
        &self,
        ticket_id: u64,
        body: &str,
        extra: &Map<String, Value>,
    ) -> Result<Comment> {
        let path = format!("tickets/{}/reply", ticket_id);
        Comment::from_json(self.client.post_json(&path, &comment_body(body, extra)).await?)
    }
}

/// Assembles a note/reply body around the mandatory `body` field.
fn comment_body(body: &str, extra: &Map<String, Value>) -> Value {
    let mut payload = Map::new();
    payload.insert("body".to_string(), Value::from(body));
    for (key, value) in extra {
        payload.insert(key.clone(), value.clone());
    }
    Value::Object(payload)
}
