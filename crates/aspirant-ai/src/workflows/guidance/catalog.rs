use super::domain::{PhysicalStandardView, RoleCategory};

/// Published physical benchmarks for a role. The male height doubles as the
/// screening floor during eligibility checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalStandard {
    pub height_male_cm: Option<f32>,
    pub height_female_cm: Option<f32>,
    pub weight: &'static str,
    pub chest: Option<&'static str>,
    pub eyesight: &'static str,
}

impl PhysicalStandard {
    pub fn view(&self) -> PhysicalStandardView {
        PhysicalStandardView {
            height_male_cm: self.height_male_cm,
            height_female_cm: self.height_female_cm,
            weight: self.weight.to_string(),
            chest: self.chest.map(str::to_string),
            eyesight: self.eyesight.to_string(),
        }
    }
}

/// Catalog entry describing one entry route and its eligibility bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleDefinition {
    pub name: &'static str,
    pub entry_scheme: &'static str,
    pub category: RoleCategory,
    pub min_age: f32,
    pub max_age: f32,
    pub education_requirement: &'static str,
    pub min_olq: f32,
    pub physical: PhysicalStandard,
    pub selection_process: &'static [&'static str],
    pub priority: u8,
}

/// The curated defence and civil services entry routes every candidate is
/// screened against.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
}

impl RoleCatalog {
    /// Standard catalog mirroring the published recruitment notifications.
    pub fn standard() -> Self {
        RoleCatalog {
            roles: vec![
                RoleDefinition {
                    name: "Indian Army - NDA Entry",
                    entry_scheme: "National Defence Academy",
                    category: RoleCategory::Officer,
                    min_age: 16.5,
                    max_age: 19.5,
                    education_requirement: "12th Standard",
                    min_olq: 60.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(157.0),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/6 or correctable",
                    },
                    selection_process: &[
                        "Written Examination (UPSC)",
                        "SSB Interview (5 days)",
                        "Medical Examination",
                        "Final Merit List",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "Indian Army - CDS Entry",
                    entry_scheme: "Combined Defence Services",
                    category: RoleCategory::Officer,
                    min_age: 19.0,
                    max_age: 24.0,
                    education_requirement: "Graduation",
                    min_olq: 60.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(157.0),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/6 or correctable",
                    },
                    selection_process: &[
                        "Written Examination (UPSC)",
                        "SSB Interview (5 days)",
                        "Medical Examination",
                        "Final Merit List",
                    ],
                    priority: 2,
                },
                RoleDefinition {
                    name: "Indian Army - TGC Entry",
                    entry_scheme: "Technical Graduate Course",
                    category: RoleCategory::Officer,
                    min_age: 20.0,
                    max_age: 27.0,
                    education_requirement: "B.E/B.Tech",
                    min_olq: 55.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(157.0),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/6 or correctable",
                    },
                    selection_process: &[
                        "SSB Interview (5 days)",
                        "Medical Examination",
                        "Final Merit List",
                    ],
                    priority: 3,
                },
                RoleDefinition {
                    name: "Indian Navy - NDA Entry",
                    entry_scheme: "National Defence Academy (Navy)",
                    category: RoleCategory::Officer,
                    min_age: 16.5,
                    max_age: 19.5,
                    education_requirement: "12th Standard (PCM)",
                    min_olq: 60.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(157.0),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/6 or correctable",
                    },
                    selection_process: &[
                        "Written Examination (UPSC)",
                        "SSB Interview (5 days)",
                        "Medical Examination",
                        "Final Merit List",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "Indian Air Force - NDA Entry",
                    entry_scheme: "National Defence Academy (Air Force)",
                    category: RoleCategory::Officer,
                    min_age: 16.5,
                    max_age: 19.5,
                    education_requirement: "12th Standard (PCM)",
                    min_olq: 65.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(162.5),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/6 (Flying Branch)",
                    },
                    selection_process: &[
                        "Written Examination (UPSC)",
                        "SSB Interview (5 days)",
                        "PABT (Pilot Aptitude Battery Test)",
                        "Medical Examination",
                        "Final Merit List",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "Indian Air Force - AFCAT",
                    entry_scheme: "Air Force Common Admission Test",
                    category: RoleCategory::Officer,
                    min_age: 20.0,
                    max_age: 24.0,
                    education_requirement: "Graduation (Any Stream)",
                    min_olq: 60.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(162.5),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/6 or correctable",
                    },
                    selection_process: &[
                        "AFCAT Written Exam",
                        "EKT (Engineering Knowledge Test) for Technical",
                        "SSB Interview (5 days)",
                        "Medical Examination",
                        "Final Merit List",
                    ],
                    priority: 2,
                },
                RoleDefinition {
                    name: "Indian Army - Soldier General Duty",
                    entry_scheme: "Army Bharti Rally",
                    category: RoleCategory::Enlisted,
                    min_age: 17.5,
                    max_age: 21.0,
                    education_requirement: "10th Pass",
                    min_olq: 0.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(163.0),
                        height_female_cm: Some(157.0),
                        weight: "50 kg minimum",
                        chest: Some("77-82 cm"),
                        eyesight: "6/9 or correctable",
                    },
                    selection_process: &[
                        "Physical Fitness Test",
                        "Physical Measurement Test",
                        "Written Examination",
                        "Medical Examination",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "Indian Army - Agniveer",
                    entry_scheme: "Agnipath Scheme",
                    category: RoleCategory::Enlisted,
                    min_age: 17.5,
                    max_age: 21.0,
                    education_requirement: "10th/12th Pass",
                    min_olq: 0.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(163.0),
                        height_female_cm: Some(157.0),
                        weight: "Proportionate",
                        chest: Some("77-82 cm"),
                        eyesight: "6/9 or correctable",
                    },
                    selection_process: &[
                        "Physical Fitness Test",
                        "Physical Measurement Test",
                        "Written Examination",
                        "Medical Examination",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "Indian Army - Soldier Technical",
                    entry_scheme: "Army Technical Entry",
                    category: RoleCategory::Enlisted,
                    min_age: 17.5,
                    max_age: 23.0,
                    education_requirement: "12th Pass (PCM) with 50%",
                    min_olq: 30.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(163.0),
                        height_female_cm: Some(157.0),
                        weight: "50 kg minimum",
                        chest: Some("77-82 cm"),
                        eyesight: "6/9 or correctable",
                    },
                    selection_process: &[
                        "Physical Fitness Test",
                        "Physical Measurement Test",
                        "Written Examination",
                        "Medical Examination",
                    ],
                    priority: 2,
                },
                RoleDefinition {
                    name: "Indian Army - Soldier Clerk/SKT",
                    entry_scheme: "Army Clerical Entry",
                    category: RoleCategory::Enlisted,
                    min_age: 17.5,
                    max_age: 23.0,
                    education_requirement: "12th Pass with 60%",
                    min_olq: 25.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(163.0),
                        height_female_cm: Some(157.0),
                        weight: "50 kg minimum",
                        chest: Some("77-82 cm"),
                        eyesight: "6/9 or correctable",
                    },
                    selection_process: &[
                        "Physical Fitness Test",
                        "Physical Measurement Test",
                        "Written Examination",
                        "Typing Test",
                        "Medical Examination",
                    ],
                    priority: 2,
                },
                RoleDefinition {
                    name: "Indian Navy - Sailor Entry",
                    entry_scheme: "Indian Navy MR/NMR Entry",
                    category: RoleCategory::Enlisted,
                    min_age: 17.0,
                    max_age: 20.0,
                    education_requirement: "10th/12th Pass",
                    min_olq: 0.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(157.0),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/9 or correctable",
                    },
                    selection_process: &[
                        "Written Examination",
                        "Physical Fitness Test",
                        "Medical Examination",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "Indian Air Force - Airman",
                    entry_scheme: "Airman Selection Test",
                    category: RoleCategory::Enlisted,
                    min_age: 17.0,
                    max_age: 21.0,
                    education_requirement: "10th/12th Pass",
                    min_olq: 0.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(152.5),
                        height_female_cm: Some(152.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "6/9 or correctable",
                    },
                    selection_process: &[
                        "Online Test (Phase 1)",
                        "Adaptability Test (Phase 2)",
                        "Medical Examination",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "IAS/IPS/IFS - UPSC CSE",
                    entry_scheme: "Civil Services Examination",
                    category: RoleCategory::CivilServices,
                    min_age: 21.0,
                    max_age: 32.0,
                    education_requirement: "Graduation (Any Stream)",
                    min_olq: 70.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(165.0),
                        height_female_cm: Some(150.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "Varies by service",
                    },
                    selection_process: &[
                        "Preliminary Examination",
                        "Main Examination",
                        "Personality Test (Interview)",
                        "Medical Examination",
                        "Final Merit List",
                    ],
                    priority: 1,
                },
                RoleDefinition {
                    name: "State Civil Services",
                    entry_scheme: "State PSC Examination",
                    category: RoleCategory::CivilServices,
                    min_age: 21.0,
                    max_age: 35.0,
                    education_requirement: "Graduation",
                    min_olq: 60.0,
                    physical: PhysicalStandard {
                        height_male_cm: Some(165.0),
                        height_female_cm: Some(150.0),
                        weight: "Proportionate",
                        chest: None,
                        eyesight: "Normal",
                    },
                    selection_process: &[
                        "Preliminary Examination",
                        "Main Examination",
                        "Interview",
                        "Document Verification",
                    ],
                    priority: 2,
                },
            ],
        }
    }

    pub fn roles(&self) -> &[RoleDefinition] {
        &self.roles
    }
}

/// Rank of a catalog requirement string on the attainment ladder. Unknown
/// strings rank zero so an unrecognised requirement never blocks a candidate.
pub(crate) fn requirement_ordinal(requirement: &str) -> u8 {
    match requirement {
        "10th Pass" | "10th/12th Pass" => 1,
        "12th Standard" | "12th Standard (PCM)" | "12th Pass" | "12th Pass (PCM) with 50%"
        | "12th Pass with 60%" => 2,
        "Graduation" | "Graduation (Any Stream)" | "B.E/B.Tech" => 3,
        "Masters" => 4,
        "Doctorate" => 5,
        _ => 0,
    }
}
