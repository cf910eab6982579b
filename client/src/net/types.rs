//! REST DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These are passive transfer shapes. The remote API owns their lifecycle; the
//! client holds request-scoped copies and only relies on field presence, so
//! optional fields default when the server omits them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Authenticated console user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Display name, falls back to `username` when absent.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Role names granted to the user (e.g. `"admin"`, `"recruiter"`).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Name to show in UI chrome.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Credentials posted to `/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Sign-up payload posted to `/v1/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Session {
    /// Bearer token for subsequent requests; absent when the API uses cookies only.
    #[serde(default)]
    pub access_token: Option<String>,
    pub user: User,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total matching rows, when the endpoint reports it.
    #[serde(default)]
    pub total: Option<u64>,
    /// Opaque cursor for the next page; `None` on the last page.
    #[serde(default)]
    pub next_token: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: None, next_token: None }
    }
}

impl<T> Page<T> {
    /// Whether another page can be requested.
    pub fn has_more(&self) -> bool {
        self.next_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

// =============================================================================
// RESUMES
// =============================================================================

/// Resume summary row as listed by `/v1/resumes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Position the candidate applied for or currently holds.
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<f32>,
    #[serde(default)]
    pub education_level: Option<String>,
    /// Storage key of the original upload, usable with `/v1/file/download`.
    #[serde(default)]
    pub file_key: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full resume as returned by `/v1/resumes/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeDetail {
    #[serde(flatten)]
    pub resume: Resume,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    /// Plain text extracted from the uploaded document.
    #[serde(default)]
    pub raw_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

// =============================================================================
// MATCHING TASKS
// =============================================================================

/// Lifecycle of a candidate-to-job matching task, owned by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingTaskStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
    /// Any status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl MatchingTaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the server will not change the task any further.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

/// Candidate-to-job matching task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: MatchingTaskStatus,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    /// Resumes scored so far.
    #[serde(default)]
    pub processed: u32,
    /// Resumes in scope for the task.
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
}

impl MatchingTask {
    /// Completion percentage in `0..=100`; zero when `total` is unknown.
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.processed.min(self.total) * 100) / self.total
    }
}

/// Payload for creating a matching task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMatchingTask {
    pub name: String,
    pub job_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Restrict matching to these resumes; empty means all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resume_ids: Vec<String>,
}

// =============================================================================
// WEIGHT TEMPLATES
// =============================================================================

/// Scoring weight for a single screening dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightItem {
    /// Dimension key (e.g. `"skills"`, `"experience"`, `"education"`).
    pub dimension: String,
    pub weight: f64,
}

/// Named screening weight template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<WeightItem>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload for weight templates.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WeightTemplateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<WeightItem>,
    pub is_default: bool,
}

impl WeightTemplateInput {
    /// Check the form before it is submitted.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for a blank name, a blank dimension, or
    /// a negative/non-finite weight.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Template name is required.");
        }
        if self.items.iter().any(|i| i.dimension.trim().is_empty()) {
            return Err("Every weight needs a dimension.");
        }
        if self.items.iter().any(|i| !i.weight.is_finite() || i.weight < 0.0) {
            return Err("Weights must be non-negative numbers.");
        }
        Ok(())
    }
}

impl From<&WeightTemplate> for WeightTemplateInput {
    fn from(t: &WeightTemplate) -> Self {
        Self {
            name: t.name.clone(),
            description: t.description.clone(),
            items: t.items.clone(),
            is_default: t.is_default,
        }
    }
}

// =============================================================================
// AUDIT LOGS
// =============================================================================

/// Audit trail entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Free-form JSON detail attached by the server.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// FILES
// =============================================================================

/// Response of `POST /v1/file/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub key: String,
}

/// Response of `GET /v1/file/download`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DownloadResponse {
    /// Short-lived signed URL.
    pub url: String,
}
