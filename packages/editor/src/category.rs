//! Binding between AST categories and their editable representation.
//!
//! Slots and list editors are generic over the category they hold. The
//! category type decides which node enum stores an occupant, how a gap is
//! spelled, and what the empty widget shows.

use crate::editable::EditableNode;
use crate::nodes::{
    Node, NumberNode, SceneNode, StatementNode, TextNode, VideoCollectionNode, VideoNode,
};
use montage_language::{
    Category, LanguageComponent, NumberExpression, Scene, Statement, TextExpression,
    VideoCollectionExpression, VideoExpression,
};
use std::fmt;

/// AST category with an editable node family
pub trait EditableCategory:
    Clone + fmt::Debug + Into<LanguageComponent> + TryFrom<LanguageComponent, Error = LanguageComponent> + 'static
{
    type Node: EditableNode<Model = Self> + fmt::Debug + 'static;

    const CATEGORY: Category;

    /// Narrow a registry-built node to this category's family
    fn node_from(node: Node) -> Result<Self::Node, Node>;
}

/// Category that slots can hold, with a sentinel for "nothing here yet"
pub trait GapCategory: EditableCategory {
    /// Shown by an empty slot
    const PLACEHOLDER: &'static str;

    fn gap() -> Self;

    fn is_gap(&self) -> bool;
}

/// Category that list editors can append
pub trait ListCategory: EditableCategory {
    /// Shown by the trailing append gap
    const APPEND_LABEL: &'static str;
}

impl EditableCategory for NumberExpression {
    type Node = NumberNode;
    const CATEGORY: Category = Category::NumberExpression;

    fn node_from(node: Node) -> Result<Self::Node, Node> {
        match node {
            Node::Number(node) => Ok(node),
            other => Err(other),
        }
    }
}

impl GapCategory for NumberExpression {
    const PLACEHOLDER: &'static str = "number";

    fn gap() -> Self {
        NumberExpression::Gap
    }

    fn is_gap(&self) -> bool {
        matches!(self, NumberExpression::Gap)
    }
}

impl EditableCategory for TextExpression {
    type Node = TextNode;
    const CATEGORY: Category = Category::TextExpression;

    fn node_from(node: Node) -> Result<Self::Node, Node> {
        match node {
            Node::Text(node) => Ok(node),
            other => Err(other),
        }
    }
}

impl GapCategory for TextExpression {
    const PLACEHOLDER: &'static str = "text";

    fn gap() -> Self {
        TextExpression::Gap
    }

    fn is_gap(&self) -> bool {
        matches!(self, TextExpression::Gap)
    }
}

impl EditableCategory for VideoExpression {
    type Node = VideoNode;
    const CATEGORY: Category = Category::VideoExpression;

    fn node_from(node: Node) -> Result<Self::Node, Node> {
        match node {
            Node::Video(node) => Ok(node),
            other => Err(other),
        }
    }
}

impl GapCategory for VideoExpression {
    const PLACEHOLDER: &'static str = "video";

    fn gap() -> Self {
        VideoExpression::Gap
    }

    fn is_gap(&self) -> bool {
        matches!(self, VideoExpression::Gap)
    }
}

impl EditableCategory for VideoCollectionExpression {
    type Node = VideoCollectionNode;
    const CATEGORY: Category = Category::VideoCollectionExpression;

    fn node_from(node: Node) -> Result<Self::Node, Node> {
        match node {
            Node::VideoCollection(node) => Ok(node),
            other => Err(other),
        }
    }
}

impl GapCategory for VideoCollectionExpression {
    const PLACEHOLDER: &'static str = "video collection";

    fn gap() -> Self {
        VideoCollectionExpression::Gap
    }

    fn is_gap(&self) -> bool {
        matches!(self, VideoCollectionExpression::Gap)
    }
}

impl EditableCategory for Statement {
    type Node = StatementNode;
    const CATEGORY: Category = Category::Statement;

    fn node_from(node: Node) -> Result<Self::Node, Node> {
        match node {
            Node::Statement(node) => Ok(node),
            other => Err(other),
        }
    }
}

impl ListCategory for Statement {
    const APPEND_LABEL: &'static str = "drag command here";
}

impl EditableCategory for Scene {
    type Node = SceneNode;
    const CATEGORY: Category = Category::Scene;

    fn node_from(node: Node) -> Result<Self::Node, Node> {
        match node {
            Node::Scene(node) => Ok(node),
            other => Err(other),
        }
    }
}

impl ListCategory for Scene {
    const APPEND_LABEL: &'static str = "drag text or video scene here";
}
