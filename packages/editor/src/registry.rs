//! # Component Registry
//!
//! Process-wide lookup table from a component's concrete kind to the
//! constructor of its editable node. Built once on first use and read-only
//! afterwards.
//!
//! Gap sentinels have no entry: a gap is represented by an empty slot, never
//! by a node, so asking the registry to build one is an error like any other
//! unregistered kind.

use crate::category::EditableCategory;
use crate::change::ChangeNotifier;
use crate::errors::{EditorError, EditorResult};
use crate::list::CommandSequenceEditor;
use crate::nodes::{
    ActNode, Node, NumberNode, SceneNode, StatementNode, TextNode, VideoCollectionNode, VideoNode,
};
use montage_language::{
    Act, Category, CommandSequence, ComponentKind, LanguageComponent, NumberExpression, Scene,
    Statement, TextExpression, VideoCollectionExpression, VideoExpression,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, error};

/// Constructor of one node family, attached to `owner`
pub type Builder = fn(LanguageComponent, &ChangeNotifier) -> EditorResult<Node>;

static BUILDERS: Lazy<HashMap<ComponentKind, Builder>> = Lazy::new(|| {
    let entries: [(ComponentKind, Builder); 15] = [
        (ComponentKind::NumberValue, build_number),
        (ComponentKind::Add, build_number),
        (ComponentKind::Subtract, build_number),
        (ComponentKind::Multiply, build_number),
        (ComponentKind::TextValue, build_text),
        (ComponentKind::YoutubeVideoGetTitle, build_text),
        (ComponentKind::VideoValue, build_video),
        (ComponentKind::YoutubeVideoCollectionRandom, build_video),
        (ComponentKind::YoutubeVideoGetRelated, build_video_collection),
        (ComponentKind::GetVariable, build_statement),
        (ComponentKind::SetVariable, build_statement),
        (ComponentKind::TextScene, build_scene),
        (ComponentKind::VideoScene, build_scene),
        (ComponentKind::CommandSequence, build_command_sequence),
        (ComponentKind::Act, build_act),
    ];

    entries.into_iter().collect()
});

/// Build the editable node for `component`, reporting through `owner`
pub fn build(component: LanguageComponent, owner: &ChangeNotifier) -> EditorResult<Node> {
    let kind = component.kind();

    let builder = BUILDERS.get(&kind).ok_or_else(|| {
        error!(kind = ?kind, "No editable node registered");
        EditorError::UnsupportedComponent(kind)
    })?;

    debug!(kind = ?kind, "Building editable node");
    builder(component, owner)
}

/// `build`, narrowed to the node family of a statically known category
pub fn build_as<C: EditableCategory>(component: C, owner: &ChangeNotifier) -> EditorResult<C::Node> {
    let component: LanguageComponent = component.into();
    let kind = component.kind();

    C::node_from(build(component, owner)?).map_err(|_| EditorError::IncompatibleComponent {
        expected: C::CATEGORY,
        found: kind,
    })
}

pub fn is_registered(kind: ComponentKind) -> bool {
    BUILDERS.contains_key(&kind)
}

fn narrow<C>(component: LanguageComponent, expected: Category) -> EditorResult<C>
where
    C: TryFrom<LanguageComponent, Error = LanguageComponent>,
{
    C::try_from(component).map_err(|other| EditorError::IncompatibleComponent {
        expected,
        found: other.kind(),
    })
}

fn build_number(component: LanguageComponent, owner: &ChangeNotifier) -> EditorResult<Node> {
    let number: NumberExpression = narrow(component, Category::NumberExpression)?;
    NumberNode::new(number, owner).map(Node::Number)
}

fn build_text(component: LanguageComponent, owner: &ChangeNotifier) -> EditorResult<Node> {
    let text: TextExpression = narrow(component, Category::TextExpression)?;
    TextNode::new(text, owner).map(Node::Text)
}

fn build_video(component: LanguageComponent, owner: &ChangeNotifier) -> EditorResult<Node> {
    let video: VideoExpression = narrow(component, Category::VideoExpression)?;
    VideoNode::new(video, owner).map(Node::Video)
}

fn build_video_collection(
    component: LanguageComponent,
    owner: &ChangeNotifier,
) -> EditorResult<Node> {
    let collection: VideoCollectionExpression =
        narrow(component, Category::VideoCollectionExpression)?;
    VideoCollectionNode::new(collection, owner).map(Node::VideoCollection)
}

fn build_statement(component: LanguageComponent, owner: &ChangeNotifier) -> EditorResult<Node> {
    let statement: Statement = narrow(component, Category::Statement)?;
    StatementNode::new(statement, owner).map(Node::Statement)
}

fn build_scene(component: LanguageComponent, owner: &ChangeNotifier) -> EditorResult<Node> {
    let scene: Scene = narrow(component, Category::Scene)?;
    SceneNode::new(scene, owner).map(Node::Scene)
}

fn build_command_sequence(
    component: LanguageComponent,
    owner: &ChangeNotifier,
) -> EditorResult<Node> {
    let sequence: CommandSequence = narrow(component, Category::CommandSequence)?;
    CommandSequenceEditor::new(sequence, owner).map(Node::CommandSequence)
}

fn build_act(component: LanguageComponent, owner: &ChangeNotifier) -> EditorResult<Node> {
    let act: Act = narrow(component, Category::Act)?;
    ActNode::new(act, owner).map(Node::Act)
}
