//! # Editable Nodes
//!
//! One node family per AST category. Each family is an enum over the
//! concrete widgets that can stand for a component of that category, so a
//! slot can hold any of them while staying statically typed.
//!
//! ```text
//! Node
//!  ├─ Number ───────── Value | Operator
//!  ├─ Text ─────────── Value | Title
//!  ├─ Video ────────── Value | Random
//!  ├─ VideoCollection ─ Related
//!  ├─ Statement ────── Get | Set
//!  ├─ Scene ────────── Text | Video
//!  ├─ CommandSequence
//!  └─ Act
//! ```

pub mod act;
pub mod operator;
pub mod scene;
pub mod values;
pub mod variables;
pub mod youtube;

pub use act::ActNode;
pub use operator::{ArithmeticOperator, NumberOperatorNode};
pub use scene::{TextSceneNode, VideoSceneNode};
pub use values::{NumberValueNode, TextValueNode, VideoValueNode};
pub use variables::{GetNode, SetNode, VARIABLE_NAMES};
pub use youtube::{
    YoutubeVideoCollectionRandomNode, YoutubeVideoGetRelatedNode, YoutubeVideoGetTitleNode,
};

use crate::change::ChangeNotifier;
use crate::drag::{DragSource, DropTarget};
use crate::editable::EditableNode;
use crate::errors::{EditorError, EditorResult};
use crate::list::CommandSequenceEditor;
use montage_language::{
    Category, ComponentKind, LanguageComponent, NumberExpression, Scene, Statement,
    TextExpression, VideoCollectionExpression, VideoExpression,
};

/// Forward `EditableNode` and `DragSource` to whichever variant is live
macro_rules! dispatch_node {
    ($family:ident => $model:ty { $($variant:ident),+ $(,)? }) => {
        impl EditableNode for $family {
            type Model = $model;

            fn to_model(&self) -> $model {
                match self {
                    $($family::$variant(node) => node.to_model().into(),)+
                }
            }

            fn set_read_only(&mut self, read_only: bool) {
                match self {
                    $($family::$variant(node) => node.set_read_only(read_only),)+
                }
            }

            fn is_read_only(&self) -> bool {
                match self {
                    $($family::$variant(node) => node.is_read_only(),)+
                }
            }

            fn changes(&self) -> &ChangeNotifier {
                match self {
                    $($family::$variant(node) => node.changes(),)+
                }
            }

            fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
                match self {
                    $($family::$variant(node) => node.for_each_target(visit),)+
                }
            }
        }

        impl DragSource for $family {
            fn snapshot(&self) -> LanguageComponent {
                self.to_model().into()
            }
        }
    };
}

#[derive(Debug)]
pub enum NumberNode {
    Value(NumberValueNode),
    Operator(NumberOperatorNode),
}

impl NumberNode {
    pub fn new(expression: NumberExpression, owner: &ChangeNotifier) -> EditorResult<Self> {
        let (operator, op1, op2) = match expression {
            NumberExpression::Gap => {
                return Err(EditorError::UnsupportedComponent(ComponentKind::NumberGap))
            }
            NumberExpression::Value { value } => {
                return Ok(NumberNode::Value(NumberValueNode::new(value, owner)))
            }
            NumberExpression::Add { op1, op2 } => (ArithmeticOperator::Add, op1, op2),
            NumberExpression::Subtract { op1, op2 } => (ArithmeticOperator::Subtract, op1, op2),
            NumberExpression::Multiply { op1, op2 } => (ArithmeticOperator::Multiply, op1, op2),
        };

        NumberOperatorNode::new(operator, *op1, *op2, owner).map(NumberNode::Operator)
    }
}

dispatch_node!(NumberNode => NumberExpression { Value, Operator });

#[derive(Debug)]
pub enum TextNode {
    Value(TextValueNode),
    Title(YoutubeVideoGetTitleNode),
}

impl TextNode {
    pub fn new(expression: TextExpression, owner: &ChangeNotifier) -> EditorResult<Self> {
        match expression {
            TextExpression::Gap => Err(EditorError::UnsupportedComponent(ComponentKind::TextGap)),
            TextExpression::Value { value } => Ok(TextNode::Value(TextValueNode::new(value, owner))),
            TextExpression::YoutubeVideoGetTitle { video } => {
                YoutubeVideoGetTitleNode::new(*video, owner).map(TextNode::Title)
            }
        }
    }
}

dispatch_node!(TextNode => TextExpression { Value, Title });

#[derive(Debug)]
pub enum VideoNode {
    Value(VideoValueNode),
    Random(YoutubeVideoCollectionRandomNode),
}

impl VideoNode {
    pub fn new(expression: VideoExpression, owner: &ChangeNotifier) -> EditorResult<Self> {
        match expression {
            VideoExpression::Gap => Err(EditorError::UnsupportedComponent(ComponentKind::VideoGap)),
            VideoExpression::Value { value } => {
                Ok(VideoNode::Value(VideoValueNode::new(value, owner)))
            }
            VideoExpression::YoutubeVideoCollectionRandom { video_collection } => {
                YoutubeVideoCollectionRandomNode::new(*video_collection, owner)
                    .map(VideoNode::Random)
            }
        }
    }
}

dispatch_node!(VideoNode => VideoExpression { Value, Random });

#[derive(Debug)]
pub enum VideoCollectionNode {
    Related(YoutubeVideoGetRelatedNode),
}

impl VideoCollectionNode {
    pub fn new(expression: VideoCollectionExpression, owner: &ChangeNotifier) -> EditorResult<Self> {
        match expression {
            VideoCollectionExpression::Gap => Err(EditorError::UnsupportedComponent(
                ComponentKind::VideoCollectionGap,
            )),
            VideoCollectionExpression::YoutubeVideoGetRelated { video } => {
                YoutubeVideoGetRelatedNode::new(*video, owner).map(VideoCollectionNode::Related)
            }
        }
    }
}

dispatch_node!(VideoCollectionNode => VideoCollectionExpression { Related });

#[derive(Debug)]
pub enum StatementNode {
    Get(GetNode),
    Set(SetNode),
}

impl StatementNode {
    pub fn new(statement: Statement, owner: &ChangeNotifier) -> EditorResult<Self> {
        match statement {
            Statement::GetVariable { name } => GetNode::new(&name, owner).map(StatementNode::Get),
            Statement::SetVariable { name, value } => {
                SetNode::new(&name, value, owner).map(StatementNode::Set)
            }
        }
    }
}

dispatch_node!(StatementNode => Statement { Get, Set });

#[derive(Debug)]
pub enum SceneNode {
    Text(TextSceneNode),
    Video(VideoSceneNode),
}

impl SceneNode {
    pub fn new(scene: Scene, owner: &ChangeNotifier) -> EditorResult<Self> {
        match scene {
            Scene::Text(scene) => TextSceneNode::new(scene, owner).map(SceneNode::Text),
            Scene::Video(scene) => VideoSceneNode::new(scene, owner).map(SceneNode::Video),
        }
    }
}

dispatch_node!(SceneNode => Scene { Text, Video });

/// Any editable node, as produced by the registry
#[derive(Debug)]
pub enum Node {
    Number(NumberNode),
    Text(TextNode),
    Video(VideoNode),
    VideoCollection(VideoCollectionNode),
    Statement(StatementNode),
    Scene(SceneNode),
    CommandSequence(CommandSequenceEditor),
    Act(ActNode),
}

impl Node {
    pub fn category(&self) -> Category {
        match self {
            Node::Number(_) => Category::NumberExpression,
            Node::Text(_) => Category::TextExpression,
            Node::Video(_) => Category::VideoExpression,
            Node::VideoCollection(_) => Category::VideoCollectionExpression,
            Node::Statement(_) => Category::Statement,
            Node::Scene(_) => Category::Scene,
            Node::CommandSequence(_) => Category::CommandSequence,
            Node::Act(_) => Category::Act,
        }
    }
}

dispatch_node!(Node => LanguageComponent {
    Number,
    Text,
    Video,
    VideoCollection,
    Statement,
    Scene,
    CommandSequence,
    Act,
});
