//! Embedded reference tables. Loaded with the binary and never mutated.

use super::domain::{DifficultyTier, ModuleRecord, ResourceKind, ResourceRecord, StudentRecord};

pub(crate) struct StudentRow {
    pub(crate) student_id: u32,
    pub(crate) name: &'static str,
    pub(crate) avg_score: f64,
    pub(crate) attendance_rate: f64,
    pub(crate) assignment_completion: f64,
    pub(crate) forum_participation: u32,
    pub(crate) study_hours_per_week: f64,
    pub(crate) previous_modules_passed: u32,
}

impl StudentRow {
    pub(crate) fn to_record(&self) -> StudentRecord {
        StudentRecord {
            student_id: self.student_id,
            name: self.name.to_string(),
            avg_score: self.avg_score,
            attendance_rate: self.attendance_rate,
            assignment_completion: self.assignment_completion,
            forum_participation: self.forum_participation,
            study_hours_per_week: self.study_hours_per_week,
            previous_modules_passed: self.previous_modules_passed,
        }
    }
}

pub(crate) struct ModuleRow {
    pub(crate) module_code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) difficulty: DifficultyTier,
    pub(crate) topics: &'static [&'static str],
    pub(crate) avg_pass_rate: f64,
}

impl ModuleRow {
    pub(crate) fn to_record(&self) -> ModuleRecord {
        ModuleRecord {
            module_code: self.module_code.to_string(),
            name: self.name.to_string(),
            difficulty: self.difficulty,
            topics: self.topics.iter().map(|topic| topic.to_string()).collect(),
            avg_pass_rate: self.avg_pass_rate,
        }
    }
}

pub(crate) static STUDENTS: [StudentRow; 3] = [
    StudentRow {
        student_id: 1,
        name: "Alice Johnson",
        avg_score: 85.5,
        attendance_rate: 0.92,
        assignment_completion: 0.95,
        forum_participation: 45,
        study_hours_per_week: 15.0,
        previous_modules_passed: 8,
    },
    StudentRow {
        student_id: 2,
        name: "Bob Smith",
        avg_score: 72.3,
        attendance_rate: 0.78,
        assignment_completion: 0.80,
        forum_participation: 12,
        study_hours_per_week: 10.0,
        previous_modules_passed: 6,
    },
    StudentRow {
        student_id: 3,
        name: "Carol Williams",
        avg_score: 91.2,
        attendance_rate: 0.98,
        assignment_completion: 1.0,
        forum_participation: 67,
        study_hours_per_week: 20.0,
        previous_modules_passed: 10,
    },
];

pub(crate) static MODULES: [ModuleRow; 4] = [
    ModuleRow {
        module_code: "CS101",
        name: "Introduction to Computer Science",
        difficulty: DifficultyTier::Beginner,
        topics: &["programming", "algorithms", "data-structures"],
        avg_pass_rate: 0.82,
    },
    ModuleRow {
        module_code: "CS201",
        name: "Data Structures and Algorithms",
        difficulty: DifficultyTier::Intermediate,
        topics: &["algorithms", "data-structures", "complexity"],
        avg_pass_rate: 0.75,
    },
    ModuleRow {
        module_code: "CS301",
        name: "Machine Learning Fundamentals",
        difficulty: DifficultyTier::Advanced,
        topics: &["machine-learning", "statistics", "python"],
        avg_pass_rate: 0.68,
    },
    ModuleRow {
        module_code: "MATH101",
        name: "Calculus I",
        difficulty: DifficultyTier::Beginner,
        topics: &["calculus", "mathematics", "derivatives"],
        avg_pass_rate: 0.79,
    },
];

/// Resource catalog in recommendation order.
pub static RESOURCES: [ResourceRecord; 8] = [
    ResourceRecord {
        resource_id: "vid_001",
        title: "Introduction to Python Programming",
        url: "https://example.com/videos/python-intro",
        kind: ResourceKind::Video,
        topics: &["programming", "python"],
        difficulty: DifficultyTier::Beginner,
    },
    ResourceRecord {
        resource_id: "art_001",
        title: "Understanding Big O Notation",
        url: "https://example.com/articles/big-o",
        kind: ResourceKind::Article,
        topics: &["algorithms", "complexity"],
        difficulty: DifficultyTier::Intermediate,
    },
    ResourceRecord {
        resource_id: "ex_001",
        title: "Binary Search Tree Exercises",
        url: "https://example.com/exercises/bst",
        kind: ResourceKind::Exercise,
        topics: &["data-structures", "algorithms"],
        difficulty: DifficultyTier::Intermediate,
    },
    ResourceRecord {
        resource_id: "quiz_001",
        title: "Algorithm Complexity Quiz",
        url: "https://example.com/quizzes/complexity",
        kind: ResourceKind::Quiz,
        topics: &["algorithms", "complexity"],
        difficulty: DifficultyTier::Intermediate,
    },
    ResourceRecord {
        resource_id: "vid_002",
        title: "Machine Learning Basics",
        url: "https://example.com/videos/ml-basics",
        kind: ResourceKind::Video,
        topics: &["machine-learning", "statistics"],
        difficulty: DifficultyTier::Advanced,
    },
    ResourceRecord {
        resource_id: "art_002",
        title: "Derivatives and Integrals Guide",
        url: "https://example.com/articles/calculus",
        kind: ResourceKind::Article,
        topics: &["calculus", "mathematics"],
        difficulty: DifficultyTier::Beginner,
    },
    ResourceRecord {
        resource_id: "ex_002",
        title: "Python Coding Challenges",
        url: "https://example.com/exercises/python",
        kind: ResourceKind::Exercise,
        topics: &["programming", "python"],
        difficulty: DifficultyTier::Beginner,
    },
    ResourceRecord {
        resource_id: "vid_003",
        title: "Advanced Data Structures",
        url: "https://example.com/videos/advanced-ds",
        kind: ResourceKind::Video,
        topics: &["data-structures", "algorithms"],
        difficulty: DifficultyTier::Advanced,
    },
];
