//! Typed wrappers for the REST API.
//!
//! Each wrapper validates required path parameters, builds the endpoint, and
//! hands off to [`super::http`]. Wrappers are stateless single calls: no
//! retries, caching, or batching. The one two-step flow is
//! [`download_file`], which fetches a signed URL and then navigates to it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{self, ApiError, require};
use super::query::QueryString;
use super::types::{
    AuditLog, DownloadResponse, LoginRequest, MatchingTask, NewMatchingTask, Page, RegisterRequest, Resume,
    ResumeDetail, Session, User, WeightTemplate, WeightTemplateInput,
};
use crate::util::download;
use crate::util::fault::UiFault;

const AUTH_LOGIN: &str = "/v1/auth/login";
const AUTH_REGISTER: &str = "/v1/auth/register";
const AUTH_LOGOUT: &str = "/v1/auth/logout";
const AUTH_ME: &str = "/v1/auth/me";
const RESUMES: &str = "/v1/resumes";
const MATCHING_TASKS: &str = "/v1/screening/tasks";
const WEIGHT_TEMPLATES: &str = "/v1/screening/weights/templates";
const AUDIT_LOGS: &str = "/v1/audit/logs";
const FILE_UPLOAD: &str = "/v1/file/upload";
const FILE_DOWNLOAD: &str = "/v1/file/download";

/// Paging and filtering shared by list endpoints.
///
/// `filter` maps onto the endpoint's own filter parameter (`name` for resumes
/// and weight templates, `status` for matching tasks, `action` for audit
/// logs). Blank filters are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub next_token: Option<String>,
    pub filter: Option<String>,
}

impl ListQuery {
    fn to_query(&self, filter_key: &str) -> QueryString {
        let non_blank = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);
        QueryString::new()
            .push_opt("page", self.page)
            .push_opt("size", self.size)
            .push_opt("next_token", non_blank(&self.next_token))
            .push_opt(filter_key, non_blank(&self.filter))
    }
}

fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", super::query::encode_component(id))
}

fn resumes_path(query: &ListQuery) -> String {
    query.to_query("name").apply(RESUMES)
}

fn matching_tasks_path(query: &ListQuery) -> String {
    query.to_query("status").apply(MATCHING_TASKS)
}

fn weight_templates_path(query: &ListQuery) -> String {
    query.to_query("name").apply(WEIGHT_TEMPLATES)
}

fn audit_logs_path(query: &ListQuery) -> String {
    query.to_query("action").apply(AUDIT_LOGS)
}

fn download_path(key: &str) -> String {
    QueryString::new().push("key", key).apply(FILE_DOWNLOAD)
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in via `POST /v1/auth/login`.
///
/// # Errors
///
/// Fails on blank credentials or any transport/server error.
pub async fn login(req: &LoginRequest) -> Result<Session, ApiError> {
    require("username", &req.username)?;
    require("password", &req.password)?;
    http::api_post(AUTH_LOGIN, req).await
}

/// Create an account via `POST /v1/auth/register`.
///
/// # Errors
///
/// Fails on blank credentials or any transport/server error.
pub async fn register(req: &RegisterRequest) -> Result<User, ApiError> {
    require("username", &req.username)?;
    require("password", &req.password)?;
    http::api_post(AUTH_REGISTER, req).await
}

/// End the session via `POST /v1/auth/logout`.
///
/// # Errors
///
/// Fails on any transport/server error.
pub async fn logout() -> Result<(), ApiError> {
    http::api_post_empty(AUTH_LOGOUT).await
}

/// Fetch the signed-in user from `GET /v1/auth/me`.
///
/// # Errors
///
/// Fails with a 401 status when there is no session.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    http::api_get(AUTH_ME).await
}

// =============================================================================
// RESUMES
// =============================================================================

/// List resumes, optionally filtered by candidate name.
///
/// # Errors
///
/// Fails on any transport/server error.
pub async fn list_resumes(query: &ListQuery) -> Result<Page<Resume>, ApiError> {
    http::api_get(&resumes_path(query)).await
}

/// Fetch one resume with parsed sections.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn get_resume(id: &str) -> Result<ResumeDetail, ApiError> {
    let id = require("id", id)?;
    http::api_get(&item_path(RESUMES, id)).await
}

/// Delete one resume.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn delete_resume(id: &str) -> Result<(), ApiError> {
    let id = require("id", id)?;
    http::api_delete(&item_path(RESUMES, id)).await
}

// =============================================================================
// MATCHING TASKS
// =============================================================================

/// List matching tasks, optionally filtered by status.
///
/// # Errors
///
/// Fails on any transport/server error.
pub async fn list_matching_tasks(query: &ListQuery) -> Result<Page<MatchingTask>, ApiError> {
    http::api_get(&matching_tasks_path(query)).await
}

/// Fetch one matching task.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn get_matching_task(id: &str) -> Result<MatchingTask, ApiError> {
    let id = require("id", id)?;
    http::api_get(&item_path(MATCHING_TASKS, id)).await
}

/// Start a matching task.
///
/// # Errors
///
/// Fails on a blank name or job description, or any transport/server error.
pub async fn create_matching_task(req: &NewMatchingTask) -> Result<MatchingTask, ApiError> {
    require("name", &req.name)?;
    require("job_description", &req.job_description)?;
    http::api_post(MATCHING_TASKS, req).await
}

// =============================================================================
// WEIGHT TEMPLATES
// =============================================================================

/// List weight templates with `page`, `size`, `next_token`, and `name`.
///
/// # Errors
///
/// Fails on any transport/server error.
pub async fn list_weight_templates(query: &ListQuery) -> Result<Page<WeightTemplate>, ApiError> {
    http::api_get(&weight_templates_path(query)).await
}

/// Fetch one weight template.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn get_weight_template(id: &str) -> Result<WeightTemplate, ApiError> {
    let id = require("id", id)?;
    http::api_get(&item_path(WEIGHT_TEMPLATES, id)).await
}

/// Create a weight template.
///
/// # Errors
///
/// Fails on any transport/server error.
pub async fn create_weight_template(input: &WeightTemplateInput) -> Result<WeightTemplate, ApiError> {
    http::api_post(WEIGHT_TEMPLATES, input).await
}

/// Replace a weight template.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn update_weight_template(id: &str, input: &WeightTemplateInput) -> Result<WeightTemplate, ApiError> {
    let id = require("id", id)?;
    http::api_put(&item_path(WEIGHT_TEMPLATES, id), input).await
}

/// Delete a weight template.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn delete_weight_template(id: &str) -> Result<(), ApiError> {
    let id = require("id", id)?;
    http::api_delete(&item_path(WEIGHT_TEMPLATES, id)).await
}

// =============================================================================
// AUDIT LOGS
// =============================================================================

/// List audit log entries, optionally filtered by action.
///
/// # Errors
///
/// Fails on any transport/server error.
pub async fn list_audit_logs(query: &ListQuery) -> Result<Page<AuditLog>, ApiError> {
    http::api_get(&audit_logs_path(query)).await
}

/// Fetch one audit log entry.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn get_audit_log(id: &str) -> Result<AuditLog, ApiError> {
    let id = require("id", id)?;
    http::api_get(&item_path(AUDIT_LOGS, id)).await
}

/// Delete one audit log entry.
///
/// # Errors
///
/// Fails on a blank id or any transport/server error.
pub async fn delete_audit_log(id: &str) -> Result<(), ApiError> {
    let id = require("id", id)?;
    http::api_delete(&item_path(AUDIT_LOGS, id)).await
}

// =============================================================================
// FILES
// =============================================================================

/// Upload `file` as multipart field `file`, with optional `kb_id`.
///
/// # Errors
///
/// Fails when the form cannot be built or on any transport/server error.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: &web_sys::File, kb_id: Option<&str>) -> Result<super::types::UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    if let Some(kb_id) = kb_id.map(str::trim).filter(|k| !k.is_empty()) {
        form.append_with_str("kb_id", kb_id)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    }
    http::api_upload(FILE_UPLOAD, form).await
}

/// Exchange a storage key for a short-lived signed download URL.
///
/// # Errors
///
/// Fails on a blank key or any transport/server error.
pub async fn file_download_url(key: &str) -> Result<String, ApiError> {
    let key = require("key", key)?;
    let resp: DownloadResponse = http::api_get(&download_path(key)).await?;
    Ok(resp.url)
}

/// Failure of the two-step download flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Fault(#[from] UiFault),
}

/// Fetch a signed URL for `key`, then hand it to the browser as a download.
///
/// `filename` defaults to the last segment of `key`.
///
/// # Errors
///
/// Fails with [`DownloadError::Api`] when the URL cannot be fetched and with
/// [`DownloadError::Fault`] when the browser rejects the URL.
pub async fn download_file(key: &str, filename: Option<&str>) -> Result<(), DownloadError> {
    let url = file_download_url(key).await?;
    let name = filename.or_else(|| download::filename_from_key(key));
    download::trigger_download(&url, name)?;
    Ok(())
}
