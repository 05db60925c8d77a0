use serde::{Deserialize, Serialize};

/// Expression producing a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NumberExpression {
    /// No number supplied yet
    Gap,

    /// Number literal
    Value { value: f64 },

    Add {
        op1: Box<NumberExpression>,
        op2: Box<NumberExpression>,
    },

    Subtract {
        op1: Box<NumberExpression>,
        op2: Box<NumberExpression>,
    },

    Multiply {
        op1: Box<NumberExpression>,
        op2: Box<NumberExpression>,
    },
}

/// Expression producing text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TextExpression {
    /// No text supplied yet
    Gap,

    /// Text literal
    Value { value: String },

    /// Title of a YouTube video
    YoutubeVideoGetTitle { video: Box<VideoExpression> },
}

/// Expression producing a single video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VideoExpression {
    /// No video supplied yet
    Gap,

    /// Video URL literal
    Value { value: String },

    /// Random video picked from a collection
    YoutubeVideoCollectionRandom {
        video_collection: Box<VideoCollectionExpression>,
    },
}

/// Expression producing a collection of videos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VideoCollectionExpression {
    /// No collection supplied yet
    Gap,

    /// Videos related to a video
    YoutubeVideoGetRelated { video: Box<VideoExpression> },
}

/// Anything that can appear in a command sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    GetVariable { name: String },

    SetVariable { name: String, value: NumberExpression },
}

/// Ordered list of statements run before or after a scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandSequence {
    pub commands: Vec<Statement>,
}

/// Scene displaying text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextScene {
    pub title: String,
    pub comment: String,
    pub duration: NumberExpression,
    pub pre_commands: CommandSequence,
    pub post_commands: CommandSequence,
    pub text: TextExpression,
}

/// Scene playing a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoScene {
    pub title: String,
    pub comment: String,
    pub duration: NumberExpression,
    pub pre_commands: CommandSequence,
    pub post_commands: CommandSequence,
    pub offset: NumberExpression,
    pub source: VideoExpression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Scene {
    Text(TextScene),
    Video(VideoScene),
}

/// Root of a script: scenes played in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Act {
    pub scenes: Vec<Scene>,
}

/// Any node of the language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum LanguageComponent {
    Number(NumberExpression),
    Text(TextExpression),
    Video(VideoExpression),
    VideoCollection(VideoCollectionExpression),
    Statement(Statement),
    Scene(Scene),
    CommandSequence(CommandSequence),
    Act(Act),
}

impl NumberExpression {
    pub fn value(value: f64) -> Self {
        Self::Value { value }
    }

    pub fn add(op1: NumberExpression, op2: NumberExpression) -> Self {
        Self::Add {
            op1: Box::new(op1),
            op2: Box::new(op2),
        }
    }

    pub fn subtract(op1: NumberExpression, op2: NumberExpression) -> Self {
        Self::Subtract {
            op1: Box::new(op1),
            op2: Box::new(op2),
        }
    }

    pub fn multiply(op1: NumberExpression, op2: NumberExpression) -> Self {
        Self::Multiply {
            op1: Box::new(op1),
            op2: Box::new(op2),
        }
    }
}

impl TextExpression {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value {
            value: value.into(),
        }
    }

    pub fn title_of(video: VideoExpression) -> Self {
        Self::YoutubeVideoGetTitle {
            video: Box::new(video),
        }
    }
}

impl VideoExpression {
    pub fn value(url: impl Into<String>) -> Self {
        Self::Value { value: url.into() }
    }

    pub fn random_from(video_collection: VideoCollectionExpression) -> Self {
        Self::YoutubeVideoCollectionRandom {
            video_collection: Box::new(video_collection),
        }
    }
}

impl VideoCollectionExpression {
    pub fn related_to(video: VideoExpression) -> Self {
        Self::YoutubeVideoGetRelated {
            video: Box::new(video),
        }
    }
}

impl Statement {
    pub fn get(name: impl Into<String>) -> Self {
        Self::GetVariable { name: name.into() }
    }

    pub fn set(name: impl Into<String>, value: NumberExpression) -> Self {
        Self::SetVariable {
            name: name.into(),
            value,
        }
    }
}

impl CommandSequence {
    pub fn new(commands: Vec<Statement>) -> Self {
        Self { commands }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl Scene {
    pub fn title(&self) -> &str {
        match self {
            Scene::Text(scene) => &scene.title,
            Scene::Video(scene) => &scene.title,
        }
    }
}

impl Act {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }
}
