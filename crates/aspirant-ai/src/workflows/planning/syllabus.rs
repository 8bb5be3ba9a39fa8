use std::collections::BTreeMap;

use super::domain::SyllabusModule;

const DEFAULT_KEY: &str = "DEFAULT";

/// Role-keyed syllabus templates for candidates who have not picked a
/// specific examination yet.
#[derive(Debug, Clone)]
pub struct SyllabusCatalog {
    templates: BTreeMap<&'static str, Vec<SyllabusModule>>,
}

impl SyllabusCatalog {
    pub fn standard() -> Self {
        let mut templates = BTreeMap::new();

        templates.insert(
            "NDA",
            vec![
                SyllabusModule {
                    name: "Mathematics",
                    topics: &[
                        "Algebra",
                        "Matrices and Determinants",
                        "Trigonometry",
                        "Analytical Geometry (2D & 3D)",
                        "Differential Calculus",
                        "Integral Calculus",
                        "Vector Algebra",
                        "Statistics & Probability",
                    ],
                    hours_per_topic: 15.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "General Ability Test",
                    topics: &[
                        "English Grammar & Comprehension",
                        "General Knowledge",
                        "Physics",
                        "Chemistry",
                        "General Science",
                        "History",
                        "Geography",
                        "Current Affairs",
                    ],
                    hours_per_topic: 12.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "SSB Preparation",
                    topics: &[
                        "Psychological Tests (TAT, WAT, SRT)",
                        "Group Testing (GD, GPE, PGT, HGT)",
                        "Interview Techniques",
                        "Current Affairs & General Awareness",
                    ],
                    hours_per_topic: 10.0,
                    priority: 2,
                },
            ],
        );

        templates.insert(
            "CDS",
            vec![
                SyllabusModule {
                    name: "English",
                    topics: &[
                        "Grammar",
                        "Vocabulary",
                        "Comprehension",
                        "Spotting Errors",
                        "Sentence Improvement",
                        "Synonyms & Antonyms",
                    ],
                    hours_per_topic: 8.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "General Knowledge",
                    topics: &[
                        "Indian History",
                        "Geography",
                        "Indian Polity",
                        "Economics",
                        "General Science",
                        "Current Affairs",
                        "Defence Related Topics",
                    ],
                    hours_per_topic: 10.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Elementary Mathematics",
                    topics: &[
                        "Arithmetic",
                        "Algebra",
                        "Trigonometry",
                        "Geometry",
                        "Mensuration",
                        "Statistics",
                    ],
                    hours_per_topic: 12.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "SSB Preparation",
                    topics: &[
                        "Psychological Tests",
                        "Group Testing",
                        "Interview Skills",
                        "Personal Development",
                    ],
                    hours_per_topic: 10.0,
                    priority: 2,
                },
            ],
        );

        templates.insert(
            "AFCAT",
            vec![
                SyllabusModule {
                    name: "General Awareness",
                    topics: &[
                        "Current Affairs",
                        "History",
                        "Geography",
                        "Polity",
                        "Economics",
                        "Sports",
                        "Defence",
                        "Art & Culture",
                    ],
                    hours_per_topic: 8.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Verbal Ability",
                    topics: &[
                        "Comprehension",
                        "Error Detection",
                        "Sentence Completion",
                        "Synonyms & Antonyms",
                        "Idioms & Phrases",
                    ],
                    hours_per_topic: 7.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Numerical Ability",
                    topics: &[
                        "Number System",
                        "Percentage",
                        "Ratio & Proportion",
                        "Average",
                        "Time & Work",
                        "Speed & Distance",
                        "Profit & Loss",
                        "Data Interpretation",
                    ],
                    hours_per_topic: 8.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Reasoning & Military Aptitude",
                    topics: &[
                        "Verbal Reasoning",
                        "Non-Verbal Reasoning",
                        "Spatial Ability",
                        "Defence Terminology",
                    ],
                    hours_per_topic: 8.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "SSB Preparation",
                    topics: &[
                        "Psychological Tests",
                        "Group Tasks",
                        "Interview Preparation",
                        "PABT (for Flying)",
                    ],
                    hours_per_topic: 10.0,
                    priority: 2,
                },
            ],
        );

        templates.insert(
            "UPSC_CSE",
            vec![
                SyllabusModule {
                    name: "Preliminary Exam - GS Paper I",
                    topics: &[
                        "History",
                        "Geography",
                        "Polity",
                        "Economics",
                        "Environment",
                        "Science & Technology",
                        "Current Affairs",
                    ],
                    hours_per_topic: 20.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Preliminary Exam - CSAT",
                    topics: &[
                        "Comprehension",
                        "Logical Reasoning",
                        "Analytical Ability",
                        "Decision Making",
                        "Problem Solving",
                        "Basic Numeracy",
                    ],
                    hours_per_topic: 12.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Optional Subject",
                    topics: &[
                        "Paper I - Fundamentals",
                        "Paper I - Advanced Topics",
                        "Paper II - Core Concepts",
                        "Paper II - Applied Topics",
                    ],
                    hours_per_topic: 30.0,
                    priority: 2,
                },
                SyllabusModule {
                    name: "Essay Writing",
                    topics: &[
                        "Essay Structure",
                        "Content Development",
                        "Philosophical Essays",
                        "Social Issues",
                        "Practice",
                    ],
                    hours_per_topic: 10.0,
                    priority: 2,
                },
                SyllabusModule {
                    name: "Interview Preparation",
                    topics: &[
                        "Current Affairs",
                        "DAF Analysis",
                        "Mock Interviews",
                        "Personality Development",
                    ],
                    hours_per_topic: 15.0,
                    priority: 3,
                },
            ],
        );

        templates.insert(
            "ARMY_GD",
            vec![
                SyllabusModule {
                    name: "General Knowledge",
                    topics: &[
                        "Indian History",
                        "Geography",
                        "Current Affairs",
                        "Indian Armed Forces",
                        "Sports",
                        "General Science",
                    ],
                    hours_per_topic: 6.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "General Science",
                    topics: &[
                        "Physics Basics",
                        "Chemistry Basics",
                        "Biology Basics",
                        "Scientific Phenomena",
                    ],
                    hours_per_topic: 5.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Mathematics",
                    topics: &[
                        "Arithmetic",
                        "Basic Algebra",
                        "Percentage",
                        "Ratio & Proportion",
                        "Simple Interest",
                    ],
                    hours_per_topic: 6.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Physical Fitness",
                    topics: &[
                        "Running (1.6 km)",
                        "Pull-ups",
                        "9 feet Ditch",
                        "Zig-zag Balance",
                        "Strength Training",
                    ],
                    hours_per_topic: 15.0,
                    priority: 1,
                },
            ],
        );

        templates.insert(
            "AGNIVEER",
            vec![
                SyllabusModule {
                    name: "General Knowledge",
                    topics: &[
                        "Indian History",
                        "Geography",
                        "Current Affairs",
                        "Indian Armed Forces",
                        "Sports",
                    ],
                    hours_per_topic: 5.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Mathematics",
                    topics: &[
                        "Arithmetic",
                        "Algebra",
                        "Geometry",
                        "Mensuration",
                        "Statistics",
                    ],
                    hours_per_topic: 8.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Physical & Medical Fitness",
                    topics: &[
                        "Running Practice",
                        "Fitness Training",
                        "Medical Standards Preparation",
                    ],
                    hours_per_topic: 12.0,
                    priority: 1,
                },
            ],
        );

        templates.insert(
            DEFAULT_KEY,
            vec![
                SyllabusModule {
                    name: "General Knowledge & Current Affairs",
                    topics: &[
                        "Indian History",
                        "Geography",
                        "Polity",
                        "Economics",
                        "Current Affairs",
                        "Defence Topics",
                    ],
                    hours_per_topic: 10.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Quantitative Aptitude",
                    topics: &[
                        "Arithmetic",
                        "Algebra",
                        "Geometry",
                        "Data Interpretation",
                    ],
                    hours_per_topic: 10.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "Reasoning Ability",
                    topics: &[
                        "Logical Reasoning",
                        "Analytical Reasoning",
                        "Verbal Reasoning",
                    ],
                    hours_per_topic: 8.0,
                    priority: 1,
                },
                SyllabusModule {
                    name: "English Language",
                    topics: &["Grammar", "Vocabulary", "Comprehension"],
                    hours_per_topic: 8.0,
                    priority: 1,
                },
            ],
        );

        SyllabusCatalog { templates }
    }

    /// Resolve the template for a catalog role by keyword, falling back to
    /// the general preparation track.
    pub fn modules_for_role(&self, role_name: &str) -> &[SyllabusModule] {
        let key = template_key(role_name);
        self.templates
            .get(key)
            .or_else(|| self.templates.get(DEFAULT_KEY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn template_key(role_name: &str) -> &'static str {
    let role = role_name.to_lowercase();
    if role.contains("nda") {
        "NDA"
    } else if role.contains("cds") {
        "CDS"
    } else if role.contains("afcat") {
        "AFCAT"
    } else if role.contains("upsc") || role.contains("ias") || role.contains("ips") {
        "UPSC_CSE"
    } else if role.contains("general duty") || role.contains("soldier gd") {
        "ARMY_GD"
    } else if role.contains("agniveer") {
        "AGNIVEER"
    } else {
        DEFAULT_KEY
    }
}
