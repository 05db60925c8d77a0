//! Category taxonomy of language components.
//!
//! Every component belongs to exactly one [`Category`] (the family of slots
//! it may occupy) and is an instance of exactly one [`ComponentKind`] (its
//! concrete node class). Gap sentinels belong to the category they stand in
//! for.

use crate::ast::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Family of components a slot or list accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    NumberExpression,
    TextExpression,
    VideoExpression,
    VideoCollectionExpression,
    Statement,
    Scene,
    CommandSequence,
    Act,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::NumberExpression,
        Category::TextExpression,
        Category::VideoExpression,
        Category::VideoCollectionExpression,
        Category::Statement,
        Category::Scene,
        Category::CommandSequence,
        Category::Act,
    ];

    /// Gap sentinel standing in for this category, if it has one
    pub fn gap(self) -> Option<LanguageComponent> {
        match self {
            Category::NumberExpression => Some(NumberExpression::Gap.into()),
            Category::TextExpression => Some(TextExpression::Gap.into()),
            Category::VideoExpression => Some(VideoExpression::Gap.into()),
            Category::VideoCollectionExpression => Some(VideoCollectionExpression::Gap.into()),
            Category::Statement | Category::Scene | Category::CommandSequence | Category::Act => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::NumberExpression => "number",
            Category::TextExpression => "text",
            Category::VideoExpression => "video",
            Category::VideoCollectionExpression => "video collection",
            Category::Statement => "statement",
            Category::Scene => "scene",
            Category::CommandSequence => "command sequence",
            Category::Act => "act",
        };
        f.write_str(name)
    }
}

/// Concrete node class of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    NumberGap,
    NumberValue,
    Add,
    Subtract,
    Multiply,
    TextGap,
    TextValue,
    YoutubeVideoGetTitle,
    VideoGap,
    VideoValue,
    YoutubeVideoCollectionRandom,
    VideoCollectionGap,
    YoutubeVideoGetRelated,
    GetVariable,
    SetVariable,
    CommandSequence,
    TextScene,
    VideoScene,
    Act,
}

impl ComponentKind {
    pub fn is_gap(self) -> bool {
        matches!(
            self,
            ComponentKind::NumberGap
                | ComponentKind::TextGap
                | ComponentKind::VideoGap
                | ComponentKind::VideoCollectionGap
        )
    }
}

impl LanguageComponent {
    pub fn category(&self) -> Category {
        match self {
            LanguageComponent::Number(_) => Category::NumberExpression,
            LanguageComponent::Text(_) => Category::TextExpression,
            LanguageComponent::Video(_) => Category::VideoExpression,
            LanguageComponent::VideoCollection(_) => Category::VideoCollectionExpression,
            LanguageComponent::Statement(_) => Category::Statement,
            LanguageComponent::Scene(_) => Category::Scene,
            LanguageComponent::CommandSequence(_) => Category::CommandSequence,
            LanguageComponent::Act(_) => Category::Act,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            LanguageComponent::Number(number) => match number {
                NumberExpression::Gap => ComponentKind::NumberGap,
                NumberExpression::Value { .. } => ComponentKind::NumberValue,
                NumberExpression::Add { .. } => ComponentKind::Add,
                NumberExpression::Subtract { .. } => ComponentKind::Subtract,
                NumberExpression::Multiply { .. } => ComponentKind::Multiply,
            },
            LanguageComponent::Text(text) => match text {
                TextExpression::Gap => ComponentKind::TextGap,
                TextExpression::Value { .. } => ComponentKind::TextValue,
                TextExpression::YoutubeVideoGetTitle { .. } => ComponentKind::YoutubeVideoGetTitle,
            },
            LanguageComponent::Video(video) => match video {
                VideoExpression::Gap => ComponentKind::VideoGap,
                VideoExpression::Value { .. } => ComponentKind::VideoValue,
                VideoExpression::YoutubeVideoCollectionRandom { .. } => {
                    ComponentKind::YoutubeVideoCollectionRandom
                }
            },
            LanguageComponent::VideoCollection(collection) => match collection {
                VideoCollectionExpression::Gap => ComponentKind::VideoCollectionGap,
                VideoCollectionExpression::YoutubeVideoGetRelated { .. } => {
                    ComponentKind::YoutubeVideoGetRelated
                }
            },
            LanguageComponent::Statement(statement) => match statement {
                Statement::GetVariable { .. } => ComponentKind::GetVariable,
                Statement::SetVariable { .. } => ComponentKind::SetVariable,
            },
            LanguageComponent::Scene(scene) => match scene {
                Scene::Text(_) => ComponentKind::TextScene,
                Scene::Video(_) => ComponentKind::VideoScene,
            },
            LanguageComponent::CommandSequence(_) => ComponentKind::CommandSequence,
            LanguageComponent::Act(_) => ComponentKind::Act,
        }
    }

    /// True for the "no value supplied here yet" sentinels
    pub fn is_gap(&self) -> bool {
        self.kind().is_gap()
    }
}

// Each category enum converts into the umbrella type, and back out of it
// when the category matches. A failed conversion hands the component back.

impl From<NumberExpression> for LanguageComponent {
    fn from(value: NumberExpression) -> Self {
        LanguageComponent::Number(value)
    }
}

impl TryFrom<LanguageComponent> for NumberExpression {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::Number(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl From<TextExpression> for LanguageComponent {
    fn from(value: TextExpression) -> Self {
        LanguageComponent::Text(value)
    }
}

impl TryFrom<LanguageComponent> for TextExpression {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::Text(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl From<VideoExpression> for LanguageComponent {
    fn from(value: VideoExpression) -> Self {
        LanguageComponent::Video(value)
    }
}

impl TryFrom<LanguageComponent> for VideoExpression {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::Video(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl From<VideoCollectionExpression> for LanguageComponent {
    fn from(value: VideoCollectionExpression) -> Self {
        LanguageComponent::VideoCollection(value)
    }
}

impl TryFrom<LanguageComponent> for VideoCollectionExpression {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::VideoCollection(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl From<Statement> for LanguageComponent {
    fn from(value: Statement) -> Self {
        LanguageComponent::Statement(value)
    }
}

impl TryFrom<LanguageComponent> for Statement {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::Statement(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl From<Scene> for LanguageComponent {
    fn from(value: Scene) -> Self {
        LanguageComponent::Scene(value)
    }
}

impl TryFrom<LanguageComponent> for Scene {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::Scene(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl From<CommandSequence> for LanguageComponent {
    fn from(value: CommandSequence) -> Self {
        LanguageComponent::CommandSequence(value)
    }
}

impl TryFrom<LanguageComponent> for CommandSequence {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::CommandSequence(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl From<Act> for LanguageComponent {
    fn from(value: Act) -> Self {
        LanguageComponent::Act(value)
    }
}

impl TryFrom<LanguageComponent> for Act {
    type Error = LanguageComponent;

    fn try_from(component: LanguageComponent) -> Result<Self, Self::Error> {
        match component {
            LanguageComponent::Act(value) => Ok(value),
            other => Err(other),
        }
    }
}
