use serde::Serialize;

use super::domain::SyllabusModule;

/// Fallback per-topic cost when a subject publishes no topic breakdown.
const DEFAULT_TOPIC_HOURS: f32 = 10.0;

/// One scored subject within a competitive examination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamSubject {
    pub name: &'static str,
    pub topics: &'static [&'static str],
    pub study_hours: f32,
    pub difficulty: &'static str,
}

/// Reference data for a competitive examination candidates can plan against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub conducting_body: &'static str,
    pub frequency: &'static str,
    pub education_requirement: &'static str,
    pub age_limits: &'static str,
    pub subjects: &'static [ExamSubject],
}

/// Row in the exam listing endpoint; difficulty is taken from the leading
/// subject, which carries the most weight in every configured exam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamListEntry {
    pub exam_code: &'static str,
    pub exam_name: &'static str,
    pub conducting_body: &'static str,
    pub exam_frequency: &'static str,
    pub difficulty: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamSubjectView {
    pub name: &'static str,
    pub topics: &'static [&'static str],
    pub study_hours: f32,
    pub difficulty: &'static str,
}

/// Full projection served by the exam details endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamDetailsView {
    pub exam_code: &'static str,
    pub exam_name: &'static str,
    pub conducting_body: &'static str,
    pub exam_frequency: &'static str,
    pub education_requirement: &'static str,
    pub age_limits: &'static str,
    pub subjects: Vec<ExamSubjectView>,
}

impl ExamDefinition {
    pub fn details_view(&self) -> ExamDetailsView {
        ExamDetailsView {
            exam_code: self.code,
            exam_name: self.name,
            conducting_body: self.conducting_body,
            exam_frequency: self.frequency,
            education_requirement: self.education_requirement,
            age_limits: self.age_limits,
            subjects: self
                .subjects
                .iter()
                .map(|subject| ExamSubjectView {
                    name: subject.name,
                    topics: subject.topics,
                    study_hours: subject.study_hours,
                    difficulty: subject.difficulty,
                })
                .collect(),
        }
    }

    /// Derive plannable modules from the published subjects, spreading each
    /// subject's hours evenly across its topics.
    pub fn study_modules(&self) -> Vec<SyllabusModule> {
        self.subjects
            .iter()
            .map(|subject| SyllabusModule {
                name: subject.name,
                topics: subject.topics,
                hours_per_topic: if subject.topics.is_empty() {
                    DEFAULT_TOPIC_HOURS
                } else {
                    subject.study_hours / subject.topics.len() as f32
                },
                priority: 1,
            })
            .collect()
    }
}

/// Reference catalog of the examinations the planner understands.
#[derive(Debug, Clone)]
pub struct ExamCatalog {
    exams: Vec<ExamDefinition>,
}

impl ExamCatalog {
    pub fn standard() -> Self {
        ExamCatalog {
            exams: vec![
                ExamDefinition {
                    code: "NDA",
                    name: "National Defence Academy & Naval Academy Examination",
                    conducting_body: "UPSC",
                    frequency: "Twice a year (April & September)",
                    education_requirement: "12th Pass",
                    age_limits: "16.5-19.5",
                    subjects: &[
                        ExamSubject {
                            name: "Mathematics",
                            topics: &[
                                "Algebra: Sets, Relations, Functions, Complex Numbers, Quadratic Equations",
                                "Matrices & Determinants: Types, Operations, Inverse, Cramer's Rule",
                                "Trigonometry: Angles, Ratios, Identities, Equations, Heights & Distances",
                                "Analytical Geometry 2D & 3D: Straight Lines, Circles, Parabola, Ellipse, Hyperbola",
                                "Differential Calculus: Limits, Continuity, Differentiation, Applications",
                                "Integral Calculus: Integration methods, Definite Integrals, Applications",
                                "Vector Algebra: Vector operations, Scalar & Vector products",
                                "Statistics & Probability: Mean, Median, Mode, Variance, Probability theory",
                            ],
                            study_hours: 200.0,
                            difficulty: "High",
                        },
                        ExamSubject {
                            name: "English",
                            topics: &[
                                "Grammar: Tenses, Articles, Prepositions, Conjunctions",
                                "Vocabulary: Synonyms, Antonyms, One-word substitution",
                                "Comprehension: Paragraph reading and analysis",
                                "Sentence Correction & Improvement",
                                "Spotting Errors",
                                "Ordering of Sentences",
                            ],
                            study_hours: 80.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "Physics",
                            topics: &[
                                "Physical Properties of Matter",
                                "Motion of Objects, Force, Momentum",
                                "Work, Power, Energy",
                                "Heat & Temperature",
                                "Light: Reflection, Refraction",
                                "Electricity & Magnetism",
                                "Modern Physics basics",
                            ],
                            study_hours: 100.0,
                            difficulty: "High",
                        },
                        ExamSubject {
                            name: "Chemistry",
                            topics: &[
                                "Physical & Chemical changes",
                                "Elements, Mixtures, Compounds",
                                "Atomic Structure",
                                "Periodic Table",
                                "Chemical Bonding",
                                "Acids, Bases, Salts",
                                "Oxidation & Reduction",
                            ],
                            study_hours: 80.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "General Knowledge",
                            topics: &[
                                "Indian History: Ancient, Medieval, Modern",
                                "Geography: Physical, Economic, Social",
                                "Indian Polity & Constitution",
                                "Economics: Basic concepts",
                                "General Science",
                                "Current Affairs: National & International",
                            ],
                            study_hours: 120.0,
                            difficulty: "Medium",
                        },
                    ],
                },
                ExamDefinition {
                    code: "CDS",
                    name: "Combined Defence Services Examination",
                    conducting_body: "UPSC",
                    frequency: "Twice a year (February & November)",
                    education_requirement: "Graduation (IMA/INA/AFA), Graduation or equivalent (OTA)",
                    age_limits: "19-24 (IMA/INA), 20-24 (AFA), 19-25 (OTA)",
                    subjects: &[
                        ExamSubject {
                            name: "English",
                            topics: &[
                                "Grammar: Parts of Speech, Tenses, Voice, Narration",
                                "Vocabulary: Synonyms, Antonyms, Idioms, Phrases",
                                "Comprehension: Reading passages and inference",
                                "Sentence Arrangement",
                                "Error Spotting",
                                "Fill in the blanks",
                            ],
                            study_hours: 80.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "General Knowledge",
                            topics: &[
                                "History: Ancient, Medieval, Modern India, World History",
                                "Geography: Physical, Economic, Social, World Geography",
                                "Indian Polity: Constitution, Governance, Rights",
                                "Economics: Indian Economy, Budget, Banking",
                                "General Science: Physics, Chemistry, Biology, Technology",
                                "Current Affairs: National and International events",
                                "Defence Related Topics: Armed Forces, Weapons, Wars",
                            ],
                            study_hours: 150.0,
                            difficulty: "High",
                        },
                        ExamSubject {
                            name: "Elementary Mathematics",
                            topics: &[
                                "Arithmetic: Number Systems, HCF/LCM, Percentages, Profit/Loss, SI/CI",
                                "Algebra: Linear equations, Quadratic equations, Progressions",
                                "Trigonometry: Ratios, Identities, Heights & Distances",
                                "Geometry: Lines, Angles, Triangles, Circles, Areas, Volumes",
                                "Mensuration: 2D and 3D figures",
                                "Statistics & Probability: Mean, Median, Mode, Basic probability",
                            ],
                            study_hours: 120.0,
                            difficulty: "Medium",
                        },
                    ],
                },
                ExamDefinition {
                    code: "AFCAT",
                    name: "Air Force Common Admission Test",
                    conducting_body: "Indian Air Force",
                    frequency: "Twice a year (February & August)",
                    education_requirement: "Graduation in any discipline (specific branches for technical)",
                    age_limits: "20-24 (Flying Branch), 20-26 (Ground Duty)",
                    subjects: &[
                        ExamSubject {
                            name: "General Awareness",
                            topics: &[
                                "History: Indian and World",
                                "Geography: Physical, Economic",
                                "Polity: Indian Constitution, Governance",
                                "Current Affairs: National & International",
                                "Defence and Sports",
                                "Art and Culture",
                                "Environment and Ecology",
                            ],
                            study_hours: 100.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "Verbal Ability",
                            topics: &[
                                "Comprehension",
                                "Error Detection",
                                "Sentence Completion",
                                "Synonyms & Antonyms",
                                "Testing of Vocabulary",
                                "Idioms and Phrases",
                            ],
                            study_hours: 60.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "Numerical Ability",
                            topics: &[
                                "Decimal Fractions",
                                "Simplification",
                                "Average, Percentage",
                                "Profit & Loss",
                                "Ratio & Proportion",
                                "Time & Work",
                                "Time & Distance",
                            ],
                            study_hours: 80.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "Reasoning & Military Aptitude",
                            topics: &[
                                "Verbal and Non-Verbal Reasoning",
                                "Spatial Ability",
                                "Numerical Reasoning",
                                "Military Aptitude Test topics",
                            ],
                            study_hours: 80.0,
                            difficulty: "High",
                        },
                    ],
                },
                ExamDefinition {
                    code: "UPSC_CSE",
                    name: "Union Public Service Commission - Civil Services Examination",
                    conducting_body: "UPSC",
                    frequency: "Once a year (Prelims in June, Mains in September)",
                    education_requirement: "Graduation in any discipline",
                    age_limits: "21-32 (General), 21-35 (OBC), 21-37 (SC/ST)",
                    subjects: &[
                        ExamSubject {
                            name: "Prelims GS1",
                            topics: &[
                                "History of India and Indian National Movement",
                                "Indian and World Geography",
                                "Indian Polity and Governance",
                                "Economic and Social Development",
                                "Environmental Ecology, Biodiversity and Climate Change",
                                "General Science",
                            ],
                            study_hours: 400.0,
                            difficulty: "Very High",
                        },
                        ExamSubject {
                            name: "Prelims CSAT",
                            topics: &[
                                "Comprehension",
                                "Interpersonal skills",
                                "Logical reasoning and analytical ability",
                                "Decision making and problem solving",
                                "General mental ability",
                                "Basic numeracy",
                                "Data interpretation",
                            ],
                            study_hours: 150.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "Mains GS",
                            topics: &[
                                "Essay Writing",
                                "Indian Heritage and Culture, History and Geography",
                                "Governance, Constitution, Polity, Social Justice",
                                "Technology, Economic Development, Biodiversity, Environment",
                                "Ethics, Integrity, and Aptitude",
                            ],
                            study_hours: 800.0,
                            difficulty: "Very High",
                        },
                        ExamSubject {
                            name: "Optional Subject",
                            topics: &["Choose from 48 optional subjects"],
                            study_hours: 400.0,
                            difficulty: "Very High",
                        },
                    ],
                },
                ExamDefinition {
                    code: "SSC_CGL",
                    name: "Staff Selection Commission - Combined Graduate Level",
                    conducting_body: "Staff Selection Commission",
                    frequency: "Once a year",
                    education_requirement: "Graduation",
                    age_limits: "18-32",
                    subjects: &[
                        ExamSubject {
                            name: "Reasoning",
                            topics: &[
                                "Analogies",
                                "Similarities",
                                "Differences",
                                "Space visualization",
                                "Problem solving",
                                "Analysis",
                                "Judgment",
                                "Decision making",
                                "Visual memory",
                                "Discrimination",
                                "Observation",
                                "Relationship concepts",
                                "Verbal and figure classification",
                            ],
                            study_hours: 100.0,
                            difficulty: "Medium",
                        },
                        ExamSubject {
                            name: "Quantitative Aptitude",
                            topics: &[
                                "Number Systems",
                                "Computation of whole numbers",
                                "Decimals and fractions",
                                "Percentages",
                                "Ratio and Proportion",
                                "Averages",
                                "Interest",
                                "Profit and Loss",
                                "Discount",
                                "Time and Distance",
                                "Time and Work",
                                "Basic algebra",
                                "Geometry",
                                "Trigonometry",
                            ],
                            study_hours: 150.0,
                            difficulty: "Medium",
                        },
                    ],
                },
                ExamDefinition {
                    code: "State_PSC",
                    name: "State Public Service Commission Examinations",
                    conducting_body: "Respective State PSCs",
                    frequency: "Varies by state (Usually annually)",
                    education_requirement: "Graduation",
                    age_limits: "21-40",
                    subjects: &[ExamSubject {
                        name: "General Studies",
                        topics: &[
                            "State History and Culture",
                            "State Geography and Resources",
                            "State Polity and Administration",
                            "State Economy and Development",
                            "Current Affairs - State and National",
                            "Indian History, Geography, Polity",
                            "General Science and Environment",
                        ],
                        study_hours: 600.0,
                        difficulty: "High",
                    }],
                },
            ],
        }
    }

    pub fn list(&self) -> Vec<ExamListEntry> {
        self.exams
            .iter()
            .map(|exam| ExamListEntry {
                exam_code: exam.code,
                exam_name: exam.name,
                conducting_body: exam.conducting_body,
                exam_frequency: exam.frequency,
                difficulty: exam
                    .subjects
                    .first()
                    .map(|subject| subject.difficulty)
                    .unwrap_or("Medium"),
            })
            .collect()
    }

    pub fn find(&self, code: &str) -> Option<&ExamDefinition> {
        self.exams.iter().find(|exam| exam.code == code)
    }
}
