//
//  freshdesk-client
//  api/solutions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Knowledge Base Operations
//!
//! The solutions API is a three-level hierarchy: categories hold folders,
//! folders hold articles. [`SolutionApi`] bundles one mapper per level.
//!
//! Every level supports language variants: the translated operations take a
//! language code (`fr`, `de`, ...) and address the variant at
//! `<resource>/<id>/<lang>`. Creating a translation writes the variant for
//! an existing resource; the primary language is addressed without a code.
//!
//! Creation and update bodies are plain JSON objects (`name`,
//! `description`, `title`, ...), forwarded verbatim.
//!
//! ## Example
//!
//! ```rust,no_run
//! use freshdesk_client::Freshdesk;
//!
//! # async fn example() -> freshdesk_client::Result<()> {
//! let freshdesk = Freshdesk::new("company.freshdesk.com", "api-key")?;
//!
//! for category in freshdesk.solutions.categories.list().await? {
//!     for folder in freshdesk.solutions.folders.list_from_category(category.id().unwrap()).await? {
//!         let articles = freshdesk.solutions.articles.list_from_folder(folder.id().unwrap()).await?;
//!         println!("{} / {}: {} articles", category, folder, articles.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

use super::client::FreshdeskClient;
use super::common::{FreshdeskError, Result};
use crate::models::{SolutionArticle, SolutionCategory, SolutionFolder};

/// Decodes an endpoint's JSON array into records.
fn collect<T>(items: Value, build: fn(Value) -> Result<T>, what: &str) -> Result<Vec<T>> {
    match items {
        Value::Array(items) => items.into_iter().map(build).collect(),
        other => Err(FreshdeskError::Record(format!(
            "expected a JSON array of {}, got {}",
            what, other
        ))),
    }
}

/// The mapper for solution categories.
#[derive(Debug)]
pub struct SolutionCategoryApi {
    client: Arc<FreshdeskClient>,
}

impl SolutionCategoryApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Lists every category.
    pub async fn list(&self) -> Result<Vec<SolutionCategory>> {
        let items = self.client.get("solutions/categories", &[]).await?;
        collect(items, SolutionCategory::from_json, "categories")
    }

    /// Fetches one category by id.
    pub async fn get(&self, category_id: u64) -> Result<SolutionCategory> {
        let path = format!("solutions/categories/{}", category_id);
        SolutionCategory::from_json(self.client.get(&path, &[]).await?)
    }

    /// Fetches a category's language variant.
    pub async fn get_translated(&self, category_id: u64, lang_code: &str) -> Result<SolutionCategory> {
        let path = format!("solutions/categories/{}/{}", category_id, lang_code);
        SolutionCategory::from_json(self.client.get(&path, &[]).await?)
    }

    /// Creates a category.
    pub async fn create(&self, category: &Map<String, Value>) -> Result<SolutionCategory> {
        let body = Value::Object(category.clone());
        SolutionCategory::from_json(self.client.post_json("solutions/categories", &body).await?)
    }

    /// Writes a category's language variant.
    pub async fn create_translation(
        &self,
        category_id: u64,
        lang_code: &str,
        category: &Map<String, Value>,
    ) -> Result<SolutionCategory> {
        let path = format!("solutions/categories/{}/{}", category_id, lang_code);
        let body = Value::Object(category.clone());
        SolutionCategory::from_json(self.client.post_json(&path, &body).await?)
    }

    /// Applies a partial update and returns the resulting category.
    pub async fn update(
        &self,
        category_id: u64,
        changes: &Map<String, Value>,
    ) -> Result<SolutionCategory> {
        let path = format!("solutions/categories/{}", category_id);
        let body = Value::Object(changes.clone());
        SolutionCategory::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Updates a category's language variant.
    pub async fn update_translation(
        &self,
        category_id: u64,
        lang_code: &str,
        changes: &Map<String, Value>,
    ) -> Result<SolutionCategory> {
        let path = format!("solutions/categories/{}/{}", category_id, lang_code);
        let body = Value::Object(changes.clone());
        SolutionCategory::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Deletes a category and everything under it.
    pub async fn delete(&self, category_id: u64) -> Result<()> {
        let path = format!("solutions/categories/{}", category_id);
        self.client.delete(&path, &[]).await?;
        Ok(())
    }
}

/// The mapper for solution folders.
#[derive(Debug)]
pub struct SolutionFolderApi {
    client: Arc<FreshdeskClient>,
}

impl SolutionFolderApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Lists the folders of a category.
    pub async fn list_from_category(&self, category_id: u64) -> Result<Vec<SolutionFolder>> {
        let path = format!("solutions/categories/{}/folders", category_id);
        let items = self.client.get(&path, &[]).await?;
        collect(items, SolutionFolder::from_json, "folders")
    }

    /// Lists a category's folders in a language variant.
    pub async fn list_from_category_translated(
        &self,
        category_id: u64,
        lang_code: &str,
    ) -> Result<Vec<SolutionFolder>> {
        let path = format!("solutions/categories/{}/folders/{}", category_id, lang_code);
        let items = self.client.get(&path, &[]).await?;
        collect(items, SolutionFolder::from_json, "folders")
    }

    /// Fetches one folder by id.
    pub async fn get(&self, folder_id: u64) -> Result<SolutionFolder> {
        let path = format!("solutions/folders/{}", folder_id);
        SolutionFolder::from_json(self.client.get(&path, &[]).await?)
    }

    /// Fetches a folder's language variant.
    pub async fn get_translated(&self, folder_id: u64, lang_code: &str) -> Result<SolutionFolder> {
        let path = format!("solutions/folders/{}/{}", folder_id, lang_code);
        SolutionFolder::from_json(self.client.get(&path, &[]).await?)
    }

    /// Creates a folder under a category.
    pub async fn create(
        &self,
        category_id: u64,
        folder: &Map<String, Value>,
    ) -> Result<SolutionFolder> {
        let path = format!("solutions/categories/{}/folders", category_id);
        let body = Value::Object(folder.clone());
        SolutionFolder::from_json(self.client.post_json(&path, &body).await?)
    }

    /// Writes a folder's language variant.
    pub async fn create_translation(
        &self,
        folder_id: u64,
        lang_code: &str,
        folder: &Map<String, Value>,
    ) -> Result<SolutionFolder> {
        let path = format!("solutions/folders/{}/{}", folder_id, lang_code);
        let body = Value::Object(folder.clone());
        SolutionFolder::from_json(self.client.post_json(&path, &body).await?)
    }

    /// Applies a partial update and returns the resulting folder.
    pub async fn update(
        &self,
        folder_id: u64,
        changes: &Map<String, Value>,
    ) -> Result<SolutionFolder> {
        let path = format!("solutions/folders/{}", folder_id);
        let body = Value::Object(changes.clone());
        SolutionFolder::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Updates a folder's language variant.
    pub async fn update_translation(
        &self,
        folder_id: u64,
        lang_code: &str,
        changes: &Map<String, Value>,
    ) -> Result<SolutionFolder> {
        let path = format!("solutions/folders/{}/{}", folder_id, lang_code);
        let body = Value::Object(changes.clone());
        SolutionFolder::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Deletes a folder and its articles.
    pub async fn delete(&self, folder_id: u64) -> Result<()> {
        let path = format!("solutions/folders/{}", folder_id);
        self.client.delete(&path, &[]).await?;
        Ok(())
    }
}

/// The mapper for solution articles.
#[derive(Debug)]
pub struct SolutionArticleApi {
    client: Arc<FreshdeskClient>,
}

impl SolutionArticleApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self { client }
    }

    /// Fetches one article by id.
    pub async fn get(&self, article_id: u64) -> Result<SolutionArticle> {
        let path = format!("solutions/articles/{}", article_id);
        SolutionArticle::from_json(self.client.get(&path, &[]).await?)
    }

    /// Fetches an article's language variant.
    pub async fn get_translated(
        &self,
        article_id: u64,
        lang_code: &str,
    ) -> Result<SolutionArticle> {
        let path = format!("solutions/articles/{}/{}", article_id, lang_code);
        SolutionArticle::from_json(self.client.get(&path, &[]).await?)
    }

    /// Lists the articles of a folder.
    pub async fn list_from_folder(&self, folder_id: u64) -> Result<Vec<SolutionArticle>> {
        let path = format!("solutions/folders/{}/articles", folder_id);
        let items = self.client.get(&path, &[]).await?;
        collect(items, SolutionArticle::from_json, "articles")
    }

    /// Lists a folder's articles in a language variant.
    pub async fn list_from_folder_translated(
        &self,
        folder_id: u64,
        lang_code: &str,
    ) -> Result<Vec<SolutionArticle>> {
        let path = format!("solutions/folders/{}/articles/{}", folder_id, lang_code);
        let items = self.client.get(&path, &[]).await?;
        collect(items, SolutionArticle::from_json, "articles")
    }

    /// Creates an article under a folder.
    pub async fn create(
        &self,
        folder_id: u64,
        article: &Map<String, Value>,
    ) -> Result<SolutionArticle> {
        let path = format!("solutions/folders/{}/articles", folder_id);
        let body = Value::Object(article.clone());
        SolutionArticle::from_json(self.client.post_json(&path, &body).await?)
    }

    /// Writes an article's language variant.
    pub async fn create_translation(
        &self,
        article_id: u64,
        lang_code: &str,
        article: &Map<String, Value>,
    ) -> Result<SolutionArticle> {
        let path = format!("solutions/articles/{}/{}", article_id, lang_code);
        let body = Value::Object(article.clone());
        SolutionArticle::from_json(self.client.post_json(&path, &body).await?)
    }

    /// Applies a partial update and returns the resulting article.
    pub async fn update(
        &self,
        article_id: u64,
        changes: &Map<String, Value>,
    ) -> Result<SolutionArticle> {
        let path = format!("solutions/articles/{}", article_id);
        let body = Value::Object(changes.clone());
        SolutionArticle::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Updates an article's language variant.
    pub async fn update_translation(
        &self,
        article_id: u64,
        lang_code: &str,
        changes: &Map<String, Value>,
    ) -> Result<SolutionArticle> {
        let path = format!("solutions/articles/{}/{}", article_id, lang_code);
        let body = Value::Object(changes.clone());
        SolutionArticle::from_json(self.client.put_json(&path, Some(&body)).await?)
    }

    /// Deletes an article.
    pub async fn delete(&self, article_id: u64) -> Result<()> {
        let path = format!("solutions/articles/{}", article_id);
        self.client.delete(&path, &[]).await?;
        Ok(())
    }

    /// Searches articles by keyword.
    pub async fn search(&self, keyword: &str) -> Result<Vec<SolutionArticle>> {
        let query = vec![("term".to_string(), keyword.to_string())];
        let items = self.client.get("search/solutions", &query).await?;
        collect(items, SolutionArticle::from_json, "articles")
    }
}

/// The knowledge-base mapper bundle.
///
/// One mapper per hierarchy level, all sharing the same connection context.
#[derive(Debug)]
pub struct SolutionApi {
    /// Category operations.
    pub categories: SolutionCategoryApi,

    /// Folder operations.
    pub folders: SolutionFolderApi,

    /// Article operations.
    pub articles: SolutionArticleApi,
}

impl SolutionApi {
    pub(crate) fn new(client: Arc<FreshdeskClient>) -> Self {
        Self {
            categories: SolutionCategoryApi::new(Arc::clone(&client)),
            folders: SolutionFolderApi::new(Arc::clone(&client)),
            articles: SolutionArticleApi::new(client),
        }
    }
}
