//! API DTOs (Data Transfer Objects)
//!
//! View models are shape mapping only: visibility decisions were already
//! made in the application layer, and every user-facing string is resolved
//! for the active locale here, at build time. Locale is never forwarded
//! upstream.

use kernel::page::{PAGE_LIMIT, PageResult};
use kernel::text::{BilingualText, Locale};
use serde::Serialize;

use crate::domain::entities::Teaching;

/// Response for GET /api/teachings/me
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingsViewResponse {
    pub labels: TeachingLabels,
    pub teachings: Vec<TeachingCard>,
    pub total_pages: u32,
}

/// Localized UI chrome for the teachings view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingLabels {
    pub title: String,
    pub code: String,
    pub name: String,
    pub credit_hours: String,
}

/// One teaching assignment, localized
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingCard {
    pub course_code: String,
    pub course_name: String,
    pub credit_hours: u32,
}

impl TeachingsViewResponse {
    /// Build the view model from an aggregated page
    pub fn build(locale: Locale, page: &PageResult<Teaching>) -> Self {
        let teachings = page
            .items()
            .iter()
            .map(|teaching| TeachingCard {
                course_code: teaching.course.code.clone(),
                course_name: locale.resolve(&teaching.course.name).to_string(),
                credit_hours: teaching.course.credit_hours,
            })
            .collect();

        Self {
            labels: TeachingLabels::localized(locale),
            teachings,
            total_pages: page.total_pages(PAGE_LIMIT),
        }
    }
}

impl TeachingLabels {
    fn localized(locale: Locale) -> Self {
        Self {
            title: locale
                .resolve(&BilingualText::new("My Courses", "مقرراتي"))
                .to_string(),
            code: locale
                .resolve(&BilingualText::new("Code", "الرمز"))
                .to_string(),
            name: locale
                .resolve(&BilingualText::new("Name", "الاسم"))
                .to_string(),
            credit_hours: locale
                .resolve(&BilingualText::new("Credit Hours", "عدد الساعات"))
                .to_string(),
        }
    }
}
