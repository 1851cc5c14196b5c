use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed vocabulary of technologies offered by the form's multiselect.
///
/// Serialized under the exact labels shown to the user, so an unknown label
/// in a request body fails deserialization instead of silently passing
/// through to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Technology {
    #[serde(rename = "Text Generation")]
    TextGeneration,
    #[serde(rename = "Image Generation")]
    ImageGeneration,
    #[serde(rename = "Speech to Text")]
    SpeechToText,
    #[serde(rename = "Text Summarization")]
    TextSummarization,
    #[serde(rename = "Key Point Extraction")]
    KeyPointExtraction,
    #[serde(rename = "Action Item Extraction")]
    ActionItemExtraction,
    #[serde(rename = "Sentiment Analysis")]
    SentimentAnalysis,
    #[serde(rename = "Language Translation")]
    LanguageTranslation,
    #[serde(rename = "Text to Speech")]
    TextToSpeech,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    #[serde(rename = "Chatbot")]
    Chatbot,
}

impl Technology {
    /// All labels, in the order the form presents them.
    pub const ALL: [Technology; 11] = [
        Technology::TextGeneration,
        Technology::ImageGeneration,
        Technology::SpeechToText,
        Technology::TextSummarization,
        Technology::KeyPointExtraction,
        Technology::ActionItemExtraction,
        Technology::SentimentAnalysis,
        Technology::LanguageTranslation,
        Technology::TextToSpeech,
        Technology::ComputerVision,
        Technology::Chatbot,
    ];

    /// The user-facing label for this technology.
    pub fn label(&self) -> &'static str {
        match self {
            Technology::TextGeneration => "Text Generation",
            Technology::ImageGeneration => "Image Generation",
            Technology::SpeechToText => "Speech to Text",
            Technology::TextSummarization => "Text Summarization",
            Technology::KeyPointExtraction => "Key Point Extraction",
            Technology::ActionItemExtraction => "Action Item Extraction",
            Technology::SentimentAnalysis => "Sentiment Analysis",
            Technology::LanguageTranslation => "Language Translation",
            Technology::TextToSpeech => "Text to Speech",
            Technology::ComputerVision => "Computer Vision",
            Technology::Chatbot => "Chatbot",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One form interaction's worth of field values
///
/// # Invariants
/// - Forwarded downstream only when `problem` is non-blank and at least
///   one technology is selected
/// - Never persisted; lives for a single request/response cycle
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    /// The community problem the user wants to solve (required).
    #[serde(default)]
    pub problem: String,
    /// Website links associated with the problem, treated as an opaque list.
    #[serde(default)]
    pub articles: String,
    /// Selected technologies from the fixed vocabulary (at least one required).
    #[serde(default)]
    pub technologies: Vec<Technology>,
    /// Free-text technologies not covered by the vocabulary.
    #[serde(default)]
    pub other_technologies: String,
    /// Datasets the user might consider including.
    #[serde(default)]
    pub datasets: String,
    /// Subject for the optional generated image; empty skips the image call.
    #[serde(default)]
    pub subject: String,
}

impl Submission {
    /// Returns the display names of required fields that are missing.
    ///
    /// An empty result means the submission may be forwarded downstream.
    /// `problem` is checked after trimming; `technologies` must contain at
    /// least one selection.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.problem.trim().is_empty() {
            missing.push("Problem");
        }
        if self.technologies.is_empty() {
            missing.push("Technologies");
        }

        missing
    }

    /// True when no required field is missing.
    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
