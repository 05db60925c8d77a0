//! # Scene Nodes
//!
//! A scene is a comment block (title on the first line), a duration, a
//! pre-command list, the scene-specific content, and a post-command list.
//!
//! Drop targets are laid out top to bottom:
//!
//! ```text
//! TextScene                 VideoScene
//! ┌───────────────────┐     ┌───────────────────┐
//! │ title / comment   │     │ title / comment   │
//! │ pre-commands  [+] │     │ pre-commands  [+] │
//! │ text         [  ] │     │ source       [  ] │
//! │ duration     [  ] │     │ duration     [  ] │
//! │ post-commands [+] │     │ offset       [  ] │
//! └───────────────────┘     │ post-commands [+] │
//!                           └───────────────────┘
//! ```

use crate::change::ChangeNotifier;
use crate::controls::CommentBox;
use crate::drag::DropTarget;
use crate::editable::EditableNode;
use crate::errors::EditorResult;
use crate::list::CommandSequenceEditor;
use crate::slot::{NumberSlot, TextSlot, VideoSlot};
use montage_language::{CommandSequence, NumberExpression, Scene, TextScene, VideoScene};

/// Parts every scene kind shares
#[derive(Debug)]
struct SceneFrame {
    comment: CommentBox,
    duration: NumberSlot,
    pre_commands: CommandSequenceEditor,
    post_commands: CommandSequenceEditor,
}

impl SceneFrame {
    fn new(
        title: &str,
        comment: &str,
        duration: NumberExpression,
        pre_commands: CommandSequence,
        post_commands: CommandSequence,
        changes: &ChangeNotifier,
    ) -> EditorResult<Self> {
        Ok(Self {
            comment: CommentBox::new(title, comment, changes),
            duration: NumberSlot::new(duration, changes)?,
            pre_commands: CommandSequenceEditor::new(pre_commands, changes)?,
            post_commands: CommandSequenceEditor::new(post_commands, changes)?,
        })
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.comment.set_read_only(read_only);
        self.duration.set_read_only(read_only);
        self.pre_commands.set_read_only(read_only);
        self.post_commands.set_read_only(read_only);
    }
}

#[derive(Debug)]
pub struct TextSceneNode {
    frame: SceneFrame,
    text: TextSlot,
    changes: ChangeNotifier,
}

impl TextSceneNode {
    pub fn new(scene: TextScene, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();

        let frame = SceneFrame::new(
            &scene.title,
            &scene.comment,
            scene.duration,
            scene.pre_commands,
            scene.post_commands,
            &changes,
        )?;

        Ok(Self {
            frame,
            text: TextSlot::new(scene.text, &changes)?,
            changes,
        })
    }

    pub fn comment_box(&self) -> &CommentBox {
        &self.frame.comment
    }

    pub fn comment_box_mut(&mut self) -> &mut CommentBox {
        &mut self.frame.comment
    }

    pub fn duration_mut(&mut self) -> &mut NumberSlot {
        &mut self.frame.duration
    }

    pub fn pre_commands_mut(&mut self) -> &mut CommandSequenceEditor {
        &mut self.frame.pre_commands
    }

    pub fn post_commands_mut(&mut self) -> &mut CommandSequenceEditor {
        &mut self.frame.post_commands
    }

    pub fn text(&self) -> &TextSlot {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextSlot {
        &mut self.text
    }
}

impl EditableNode for TextSceneNode {
    type Model = Scene;

    fn to_model(&self) -> Scene {
        Scene::Text(TextScene {
            title: self.frame.comment.title().to_string(),
            comment: self.frame.comment.comment().to_string(),
            duration: self.frame.duration.to_model(),
            pre_commands: self.frame.pre_commands.to_model(),
            post_commands: self.frame.post_commands.to_model(),
            text: self.text.to_model(),
        })
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.frame.set_read_only(read_only);
        self.text.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.frame.comment.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.frame.pre_commands.for_each_target(visit);
        self.text.for_each_target(visit);
        self.frame.duration.for_each_target(visit);
        self.frame.post_commands.for_each_target(visit);
    }
}

#[derive(Debug)]
pub struct VideoSceneNode {
    frame: SceneFrame,
    source: VideoSlot,
    offset: NumberSlot,
    changes: ChangeNotifier,
}

impl VideoSceneNode {
    pub fn new(scene: VideoScene, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();

        let frame = SceneFrame::new(
            &scene.title,
            &scene.comment,
            scene.duration,
            scene.pre_commands,
            scene.post_commands,
            &changes,
        )?;

        Ok(Self {
            frame,
            source: VideoSlot::new(scene.source, &changes)?,
            offset: NumberSlot::new(scene.offset, &changes)?,
            changes,
        })
    }

    pub fn comment_box(&self) -> &CommentBox {
        &self.frame.comment
    }

    pub fn comment_box_mut(&mut self) -> &mut CommentBox {
        &mut self.frame.comment
    }

    pub fn duration_mut(&mut self) -> &mut NumberSlot {
        &mut self.frame.duration
    }

    pub fn pre_commands_mut(&mut self) -> &mut CommandSequenceEditor {
        &mut self.frame.pre_commands
    }

    pub fn post_commands_mut(&mut self) -> &mut CommandSequenceEditor {
        &mut self.frame.post_commands
    }

    pub fn source_mut(&mut self) -> &mut VideoSlot {
        &mut self.source
    }

    pub fn offset_mut(&mut self) -> &mut NumberSlot {
        &mut self.offset
    }
}

impl EditableNode for VideoSceneNode {
    type Model = Scene;

    fn to_model(&self) -> Scene {
        Scene::Video(VideoScene {
            title: self.frame.comment.title().to_string(),
            comment: self.frame.comment.comment().to_string(),
            duration: self.frame.duration.to_model(),
            pre_commands: self.frame.pre_commands.to_model(),
            post_commands: self.frame.post_commands.to_model(),
            offset: self.offset.to_model(),
            source: self.source.to_model(),
        })
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.frame.set_read_only(read_only);
        self.source.set_read_only(read_only);
        self.offset.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.frame.comment.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.frame.pre_commands.for_each_target(visit);
        self.source.for_each_target(visit);
        self.frame.duration.for_each_target(visit);
        self.offset.for_each_target(visit);
        self.frame.post_commands.for_each_target(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_language::{Category, Statement, TextExpression, VideoExpression};

    fn video_scene() -> VideoScene {
        VideoScene {
            title: "Opening".to_string(),
            comment: "Plays the intro clip".to_string(),
            duration: NumberExpression::value(10.0),
            pre_commands: CommandSequence::new(vec![Statement::get("item")]),
            post_commands: CommandSequence::empty(),
            offset: NumberExpression::value(3.0),
            source: VideoExpression::value("http://www.youtube.com/watch?v=9bZkp7q19f0"),
        }
    }

    #[test]
    fn test_video_scene_offset_is_its_own_value() {
        let owner = ChangeNotifier::root();
        let node = VideoSceneNode::new(video_scene(), &owner).unwrap();

        match node.to_model() {
            Scene::Video(scene) => {
                assert_eq!(scene.offset, NumberExpression::value(3.0));
                assert_eq!(scene.duration, NumberExpression::value(10.0));
            }
            other => panic!("Expected a video scene, got {:?}", other),
        }
    }

    #[test]
    fn test_video_scene_round_trip() {
        let owner = ChangeNotifier::root();
        let node = VideoSceneNode::new(video_scene(), &owner).unwrap();

        assert_eq!(node.to_model(), Scene::Video(video_scene()));
        assert_eq!(owner.emitted(), 0);
    }

    #[test]
    fn test_title_edit_changes_scene() {
        let owner = ChangeNotifier::root();
        let scene = TextScene {
            title: "Old".to_string(),
            comment: String::new(),
            duration: NumberExpression::Gap,
            pre_commands: CommandSequence::empty(),
            post_commands: CommandSequence::empty(),
            text: TextExpression::Gap,
        };
        let mut node = TextSceneNode::new(scene, &owner).unwrap();

        node.comment_box_mut().set_title("New").unwrap();
        node.comment_box_mut().set_comment("with a note").unwrap();

        match node.to_model() {
            Scene::Text(scene) => {
                assert_eq!(scene.title, "New");
                assert_eq!(scene.comment, "with a note");
            }
            other => panic!("Expected a text scene, got {:?}", other),
        }
        assert_eq!(owner.emitted(), 2);
    }

    #[test]
    fn test_multi_line_title_round_trips() {
        let owner = ChangeNotifier::root();
        let scene = TextScene {
            title: "Line one\nline two".to_string(),
            comment: "note".to_string(),
            duration: NumberExpression::value(2.0),
            pre_commands: CommandSequence::empty(),
            post_commands: CommandSequence::empty(),
            text: TextExpression::value("Hello"),
        };
        let node = TextSceneNode::new(scene.clone(), &owner).unwrap();

        assert_eq!(node.to_model(), Scene::Text(scene));
    }

    #[test]
    fn test_video_scene_target_order() {
        let owner = ChangeNotifier::root();
        let mut node = VideoSceneNode::new(video_scene(), &owner).unwrap();

        let mut categories = Vec::new();
        node.for_each_target(&mut |target: &mut dyn DropTarget| {
            categories.push(target.category())
        });

        assert_eq!(
            categories,
            vec![
                Category::Statement,
                Category::VideoExpression,
                Category::NumberExpression,
                Category::NumberExpression,
                Category::Statement,
            ]
        );
    }
}
