use serde::{Deserialize, Serialize};

use super::domain::OlqResponse;

/// One situational judgement item in the officer-like-qualities questionnaire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlqQuestion {
    pub id: u8,
    /// Leadership trait the question probes.
    pub category: &'static str,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Zero-based index of the optimal answer.
    pub correct_option: u8,
    pub weight: f32,
}

/// Candidate-facing projection of a question with the answer key withheld.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OlqQuestionView {
    pub question_id: u8,
    pub category: &'static str,
    pub question: &'static str,
    pub options: Vec<&'static str>,
}

/// Performance band derived from the questionnaire percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OlqBand {
    Excellent,
    VeryGood,
    Good,
    Average,
    BelowAverage,
}

impl OlqBand {
    pub fn for_score(score: f32) -> Self {
        if score >= 80.0 {
            OlqBand::Excellent
        } else if score >= 65.0 {
            OlqBand::VeryGood
        } else if score >= 50.0 {
            OlqBand::Good
        } else if score >= 35.0 {
            OlqBand::Average
        } else {
            OlqBand::BelowAverage
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OlqBand::Excellent => "Excellent",
            OlqBand::VeryGood => "Very Good",
            OlqBand::Good => "Good",
            OlqBand::Average => "Average",
            OlqBand::BelowAverage => "Below Average",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            OlqBand::Excellent => {
                "Outstanding leadership potential with strong decision-making and interpersonal skills."
            }
            OlqBand::VeryGood => {
                "Strong leadership qualities with good situational awareness and problem-solving ability."
            }
            OlqBand::Good => {
                "Demonstrated leadership potential with room for development in specific areas."
            }
            OlqBand::Average => {
                "Basic leadership understanding but requires significant development and training."
            }
            OlqBand::BelowAverage => {
                "Limited demonstration of leadership qualities. Consider enlisted roles or further development."
            }
        }
    }
}

/// Trait-level readout attached to a recommendation when raw responses were
/// supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OlqAnalysis {
    pub score: f32,
    pub band: OlqBand,
    pub description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// The fixed questionnaire every candidate answers.
#[derive(Debug, Clone)]
pub struct OlqQuestionBank {
    questions: Vec<OlqQuestion>,
}

impl OlqQuestionBank {
    pub fn standard() -> Self {
        OlqQuestionBank {
            questions: vec![
                OlqQuestion {
                    id: 1,
                    category: "Leadership",
                    prompt: "You are leading a team on a challenging project with a tight deadline. One of your team members is struggling. What do you do?",
                    options: [
                        "Take over their work to ensure quality and meet the deadline",
                        "Provide guidance, redistribute tasks if needed, and monitor progress closely",
                        "Let them figure it out on their own to build independence",
                        "Report the issue to higher management immediately",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 2,
                    category: "Decision Making",
                    prompt: "During a high-pressure situation, your superior gives you an order that you believe might not be the most effective approach. What would you do?",
                    options: [
                        "Follow the order without question as they have more experience",
                        "Politely present your alternative suggestion with reasoning and follow their final decision",
                        "Refuse to follow and implement your own plan",
                        "Follow the order but document your concerns for later",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 3,
                    category: "Integrity",
                    prompt: "You witness a colleague taking credit for work that was actually done by your team. How do you respond?",
                    options: [
                        "Confront them publicly in the next meeting",
                        "Privately address the issue with them first, then escalate if needed",
                        "Ignore it to avoid conflict",
                        "Take credit for their work next time",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 4,
                    category: "Adaptability",
                    prompt: "You are assigned to work in a remote area with limited resources for an extended period. How do you feel about this?",
                    options: [
                        "Concerned and would try to get the assignment changed",
                        "View it as a challenge and opportunity to prove adaptability and leadership",
                        "Accept it reluctantly as part of duty",
                        "Would consider it a punishment",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 5,
                    category: "Innovation",
                    prompt: "You discover a more efficient process that could save time and resources, but it requires changing established procedures. What do you do?",
                    options: [
                        "Keep it to yourself to avoid complications",
                        "Document the proposal with data and present it through proper channels",
                        "Implement it immediately without approval",
                        "Share it informally with colleagues but take no formal action",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 6,
                    category: "Crisis Management",
                    prompt: "Your team is demoralized after a failed mission/project. As a leader, what is your priority?",
                    options: [
                        "Identify who made mistakes and take disciplinary action",
                        "Analyze what went wrong, learn from it, and motivate the team for future success",
                        "Move on quickly to the next task without discussion",
                        "Blame external factors to protect the team",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 7,
                    category: "Risk Taking",
                    prompt: "You have to choose between a comfortable desk job with better facilities or a challenging field position with more responsibility. What would you prefer?",
                    options: [
                        "Definitely the comfortable desk job",
                        "The challenging field position for growth and experience",
                        "Whichever pays more",
                        "Would try to negotiate for desk job with same responsibility",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 8,
                    category: "Decision Under Pressure",
                    prompt: "During a crisis, you need to make a quick decision with incomplete information. How do you proceed?",
                    options: [
                        "Wait for complete information even if it delays action",
                        "Assess available facts, consider risks, make the best possible decision and act",
                        "Pass the decision to someone else",
                        "Make a random choice and hope for the best",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 9,
                    category: "Self-Awareness",
                    prompt: "You are given feedback that your communication style is sometimes too direct and affects team morale. How do you respond?",
                    options: [
                        "Ignore the feedback as direct communication is effective",
                        "Reflect on it, seek specific examples, and work on balancing directness with empathy",
                        "Become overly cautious and stop giving honest feedback",
                        "Defend your style and explain why it's necessary",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
                OlqQuestion {
                    id: 10,
                    category: "Strategic Thinking",
                    prompt: "You have limited resources and must choose between two critical tasks. Both are important but you can only prioritize one. How do you decide?",
                    options: [
                        "Choose the easier task to ensure completion",
                        "Analyze impact, urgency, and long-term consequences, then decide based on overall benefit",
                        "Try to do both partially",
                        "Seek approval from superior without providing your analysis",
                    ],
                    correct_option: 1,
                    weight: 10.0,
                },
            ],
        }
    }

    pub fn questions(&self) -> &[OlqQuestion] {
        &self.questions
    }

    pub fn question(&self, id: u8) -> Option<&OlqQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn question_views(&self) -> Vec<OlqQuestionView> {
        self.questions
            .iter()
            .map(|question| OlqQuestionView {
                question_id: question.id,
                category: question.category,
                question: question.prompt,
                options: question.options.to_vec(),
            })
            .collect()
    }

    /// Percentage score over the answered questions. Responses referencing
    /// unknown question ids are ignored; an empty set scores zero.
    pub fn score_responses(&self, responses: &[OlqResponse]) -> f32 {
        let mut earned = 0.0f32;
        let mut maximum = 0.0f32;

        for response in responses {
            let Some(question) = self.question(response.question_id) else {
                continue;
            };

            // Full credit for the optimal option, half for an adjacent one.
            if response.selected_option == question.correct_option {
                earned += question.weight;
            } else if response.selected_option.abs_diff(question.correct_option) == 1 {
                earned += question.weight * 0.5;
            }
            maximum += question.weight;
        }

        if maximum > 0.0 {
            (earned / maximum) * 100.0
        } else {
            0.0
        }
    }

    /// Score the responses and name the traits behind the strongest and
    /// weakest answers, capped at three each.
    pub fn analysis(&self, responses: &[OlqResponse]) -> OlqAnalysis {
        let score = self.score_responses(responses);
        let band = OlqBand::for_score(score);

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        for response in responses {
            let Some(question) = self.question(response.question_id) else {
                continue;
            };
            if response.selected_option == question.correct_option {
                strengths.push(question.category.to_string());
            } else {
                weaknesses.push(question.category.to_string());
            }
        }
        strengths.truncate(3);
        weaknesses.truncate(3);
        if strengths.is_empty() {
            strengths.push("Basic awareness".to_string());
        }
        if weaknesses.is_empty() {
            weaknesses.push("None identified".to_string());
        }

        OlqAnalysis {
            score,
            band,
            description: band.description().to_string(),
            strengths,
            weaknesses,
        }
    }
}
