use crate::change::ChangeNotifier;
use crate::drag::DropTarget;
use crate::editable::EditableNode;
use crate::errors::EditorResult;
use crate::list::ListEditor;
use montage_language::{Act, Scene};

/// Root of a script: the act's scenes, in order
#[derive(Debug)]
pub struct ActNode {
    scenes: ListEditor<Scene>,
    changes: ChangeNotifier,
}

impl ActNode {
    pub fn new(act: Act, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();

        Ok(Self {
            scenes: ListEditor::new(act.scenes, &changes)?,
            changes,
        })
    }

    pub fn add_scene(&mut self, scene: Scene) -> EditorResult<()> {
        self.scenes.append(scene)
    }

    pub fn scenes(&self) -> &ListEditor<Scene> {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut ListEditor<Scene> {
        &mut self.scenes
    }
}

impl EditableNode for ActNode {
    type Model = Act;

    fn to_model(&self) -> Act {
        Act::new(self.scenes.to_model())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.scenes.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.scenes.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.scenes.for_each_target(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_language::{CommandSequence, NumberExpression, VideoExpression, VideoScene};

    fn scene(title: &str) -> Scene {
        Scene::Video(VideoScene {
            title: title.to_string(),
            comment: String::new(),
            duration: NumberExpression::value(1.0),
            pre_commands: CommandSequence::empty(),
            post_commands: CommandSequence::empty(),
            offset: NumberExpression::Gap,
            source: VideoExpression::Gap,
        })
    }

    #[test]
    fn test_added_scenes_follow_existing_ones() {
        let owner = ChangeNotifier::root();
        let mut act = ActNode::new(Act::new(vec![scene("first")]), &owner).unwrap();

        act.add_scene(scene("second")).unwrap();
        act.add_scene(scene("third")).unwrap();

        let titles: Vec<String> = act
            .to_model()
            .scenes
            .iter()
            .map(|scene| scene.title().to_string())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert_eq!(act.scenes().len(), 3);
        assert_eq!(owner.emitted(), 2);
    }
}
