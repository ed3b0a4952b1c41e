//! API DTOs (Data Transfer Objects)
//!
//! View models are shape mapping only. The one rendering rule encoded
//! upstream of here is already decided: the assistants section of a group
//! card is omitted entirely when empty instead of rendering a bare heading.

use kernel::text::{BilingualText, Locale};
use serde::Serialize;

use crate::application::overview::OverviewData;
use crate::domain::entities::GraduationGroup;

/// Response for GET /api/graduation/overview
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduationViewResponse {
    pub authorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<OverviewBody>,
}

/// Body of an authorized graduation view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewBody {
    pub labels: GraduationLabels,
    pub groups: Vec<GroupCard>,
    /// The caller's own enrollments, as display context
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub my_enrollments: Vec<String>,
    /// Groups the caller supervises as instructor, as display context
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supervising: Vec<String>,
    /// Sections served as empty defaults after an upstream failure
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<String>,
}

/// Localized UI chrome for the graduation view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduationLabels {
    pub project_title: String,
    pub team: String,
    pub supervised_by: String,
    pub assistants: String,
}

/// One graduation group, localized
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCard {
    pub project_title: String,
    pub team: Vec<String>,
    pub supervisors: Vec<String>,
    /// Present only when the group actually has assistant teachings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistants: Option<Vec<String>>,
}

impl GraduationViewResponse {
    pub fn unauthorized() -> Self {
        Self {
            authorized: false,
            overview: None,
        }
    }

    /// Build the view model from merged overview data
    pub fn build(locale: Locale, data: &OverviewData) -> Self {
        let groups = data.groups.iter().map(GroupCard::from_group).collect();

        let my_enrollments = data
            .enrollments
            .iter()
            .map(|e| e.student.full_name.clone())
            .collect();

        let supervising = data
            .teachings
            .instructor_teachings
            .iter()
            .map(|t| t.instructor.full_name.clone())
            .collect();

        Self {
            authorized: true,
            overview: Some(OverviewBody {
                labels: GraduationLabels::localized(locale),
                groups,
                my_enrollments,
                supervising,
                degraded: data.degraded.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

impl GroupCard {
    fn from_group(group: &GraduationGroup) -> Self {
        let assistants: Vec<String> = group
            .assistant_teachings
            .iter()
            .map(|t| t.ta.full_name.clone())
            .collect();

        Self {
            project_title: group.project_title.clone(),
            team: group
                .enrollments
                .iter()
                .map(|e| e.student.full_name.clone())
                .collect(),
            supervisors: group
                .instructor_teachings
                .iter()
                .map(|t| t.instructor.full_name.clone())
                .collect(),
            assistants: if assistants.is_empty() {
                None
            } else {
                Some(assistants)
            },
        }
    }
}

impl GraduationLabels {
    fn localized(locale: Locale) -> Self {
        Self {
            project_title: locale
                .resolve(&BilingualText::new("Project Title", "عنوان المشروع"))
                .to_string(),
            team: locale
                .resolve(&BilingualText::new("Team", "الفريق"))
                .to_string(),
            supervised_by: locale
                .resolve(&BilingualText::new("Supervised By", "بإشراف"))
                .to_string(),
            assistants: locale
                .resolve(&BilingualText::new("Assistants", "المساعدون"))
                .to_string(),
        }
    }
}
