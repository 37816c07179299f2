use super::domain::{Recommendation, RecommendationResult, ResourceRecord};
use super::lookup::ReferenceData;

fn recommendation_reason(module_code: &str) -> String {
    format!("Recommended based on topics in {module_code}")
}

fn to_recommendation(resource: &ResourceRecord, reason: &str) -> Recommendation {
    Recommendation {
        resource_id: resource.resource_id,
        title: resource.title,
        url: resource.url,
        kind: resource.kind,
        reason: reason.to_string(),
    }
}

/// Topic-overlap matches for the module, in catalog order, tagged with a reason.
pub fn recommend<D>(
    data: &D,
    student_id: u32,
    module_code: &str,
    limit: usize,
) -> RecommendationResult
where
    D: ReferenceData + ?Sized,
{
    let reason = recommendation_reason(module_code);
    let recommendations = data
        .resources_for_module(module_code, limit)
        .iter()
        .map(|resource| to_recommendation(resource, &reason))
        .collect();

    RecommendationResult {
        student_id,
        module_code: module_code.to_string(),
        recommendations,
    }
}
