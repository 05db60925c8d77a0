//! YouTube operations. Each wraps exactly one nested slot and forwards to it.

use crate::change::ChangeNotifier;
use crate::drag::DropTarget;
use crate::editable::EditableNode;
use crate::errors::EditorResult;
use crate::slot::{VideoCollectionSlot, VideoSlot};
use montage_language::{TextExpression, VideoCollectionExpression, VideoExpression};

/// Title of a video, as text
#[derive(Debug)]
pub struct YoutubeVideoGetTitleNode {
    video: VideoSlot,
    changes: ChangeNotifier,
}

impl YoutubeVideoGetTitleNode {
    pub fn new(video: VideoExpression, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();

        Ok(Self {
            video: VideoSlot::new(video, &changes)?,
            changes,
        })
    }

    pub fn video(&self) -> &VideoSlot {
        &self.video
    }

    pub fn video_mut(&mut self) -> &mut VideoSlot {
        &mut self.video
    }
}

impl EditableNode for YoutubeVideoGetTitleNode {
    type Model = TextExpression;

    fn to_model(&self) -> TextExpression {
        TextExpression::title_of(self.video.to_model())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.video.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.video.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.video.for_each_target(visit);
    }
}

/// Videos related to a video
#[derive(Debug)]
pub struct YoutubeVideoGetRelatedNode {
    video: VideoSlot,
    changes: ChangeNotifier,
}

impl YoutubeVideoGetRelatedNode {
    pub fn new(video: VideoExpression, owner: &ChangeNotifier) -> EditorResult<Self> {
        let changes = owner.child();

        Ok(Self {
            video: VideoSlot::new(video, &changes)?,
            changes,
        })
    }

    pub fn video(&self) -> &VideoSlot {
        &self.video
    }

    pub fn video_mut(&mut self) -> &mut VideoSlot {
        &mut self.video
    }
}

impl EditableNode for YoutubeVideoGetRelatedNode {
    type Model = VideoCollectionExpression;

    fn to_model(&self) -> VideoCollectionExpression {
        VideoCollectionExpression::related_to(self.video.to_model())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.video.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.video.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.video.for_each_target(visit);
    }
}

/// One video picked at random from a collection
#[derive(Debug)]
pub struct YoutubeVideoCollectionRandomNode {
    video_collection: VideoCollectionSlot,
    changes: ChangeNotifier,
}

impl YoutubeVideoCollectionRandomNode {
    pub fn new(
        video_collection: VideoCollectionExpression,
        owner: &ChangeNotifier,
    ) -> EditorResult<Self> {
        let changes = owner.child();

        Ok(Self {
            video_collection: VideoCollectionSlot::new(video_collection, &changes)?,
            changes,
        })
    }

    pub fn video_collection(&self) -> &VideoCollectionSlot {
        &self.video_collection
    }

    pub fn video_collection_mut(&mut self) -> &mut VideoCollectionSlot {
        &mut self.video_collection
    }
}

impl EditableNode for YoutubeVideoCollectionRandomNode {
    type Model = VideoExpression;

    fn to_model(&self) -> VideoExpression {
        VideoExpression::random_from(self.video_collection.to_model())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.video_collection.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.video_collection.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.video_collection.for_each_target(visit);
    }
}
