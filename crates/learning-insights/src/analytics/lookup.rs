use std::collections::HashSet;

use super::catalog::{MODULES, RESOURCES, STUDENTS};
use super::domain::{DifficultyTier, ModuleRecord, ResourceRecord, StudentRecord};

pub const DEFAULT_RESOURCE_LIMIT: usize = 5;

const GENERIC_MODULE_TOPICS: [&str; 3] = ["general", "learning", "development"];

/// Reference data source so the service can be exercised against doubles.
///
/// Implementors only answer exact lookups; the provided `resolve_*` methods substitute a
/// generic record for unknown identifiers, so callers never observe a miss.
pub trait ReferenceData: Send + Sync {
    fn find_student(&self, student_id: u32) -> Option<StudentRecord>;
    fn find_module(&self, module_code: &str) -> Option<ModuleRecord>;
    fn resources(&self) -> &[ResourceRecord];
    fn students(&self) -> Vec<StudentRecord>;
    fn modules(&self) -> Vec<ModuleRecord>;

    fn resolve_student(&self, student_id: u32) -> StudentRecord {
        self.find_student(student_id)
            .unwrap_or_else(|| generic_student(student_id))
    }

    fn resolve_module(&self, module_code: &str) -> ModuleRecord {
        self.find_module(module_code)
            .unwrap_or_else(|| generic_module(module_code))
    }

    /// Catalog entries sharing at least one topic with the module, in catalog order.
    ///
    /// Falls back to the head of the catalog when nothing overlaps.
    fn resources_for_module(&self, module_code: &str, limit: usize) -> Vec<ResourceRecord> {
        let module = self.resolve_module(module_code);
        let topics: HashSet<&str> = module.topics.iter().map(String::as_str).collect();

        let catalog = self.resources();
        let matched: Vec<ResourceRecord> = catalog
            .iter()
            .filter(|resource| resource.covers_any(topics.iter().copied()))
            .take(limit)
            .copied()
            .collect();

        if matched.is_empty() {
            return catalog.iter().take(limit).copied().collect();
        }
        matched
    }
}

pub fn generic_student(student_id: u32) -> StudentRecord {
    StudentRecord {
        student_id,
        name: format!("Student #{student_id}"),
        avg_score: 75.0,
        attendance_rate: 0.85,
        assignment_completion: 0.88,
        forum_participation: 20,
        study_hours_per_week: 12.0,
        previous_modules_passed: 5,
    }
}

pub fn generic_module(module_code: &str) -> ModuleRecord {
    ModuleRecord {
        module_code: module_code.to_string(),
        name: format!("Module {module_code}"),
        difficulty: DifficultyTier::Intermediate,
        topics: GENERIC_MODULE_TOPICS
            .iter()
            .map(|topic| topic.to_string())
            .collect(),
        avg_pass_rate: 0.75,
    }
}

/// Reference data backed by the embedded catalog tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl ReferenceData for StaticCatalog {
    fn find_student(&self, student_id: u32) -> Option<StudentRecord> {
        STUDENTS
            .iter()
            .find(|row| row.student_id == student_id)
            .map(|row| row.to_record())
    }

    fn find_module(&self, module_code: &str) -> Option<ModuleRecord> {
        let wanted = module_code.trim();
        MODULES
            .iter()
            .find(|row| row.module_code.eq_ignore_ascii_case(wanted))
            .map(|row| row.to_record())
    }

    fn resources(&self) -> &[ResourceRecord] {
        &RESOURCES
    }

    fn students(&self) -> Vec<StudentRecord> {
        STUDENTS.iter().map(|row| row.to_record()).collect()
    }

    fn modules(&self) -> Vec<ModuleRecord> {
        MODULES.iter().map(|row| row.to_record()).collect()
    }
}
