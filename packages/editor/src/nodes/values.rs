//! Literal value nodes: one primitive control each.

use crate::change::ChangeNotifier;
use crate::controls::{NumberField, TextField};
use crate::editable::EditableNode;
use montage_language::{NumberExpression, TextExpression, VideoExpression};

/// Number literal
#[derive(Debug)]
pub struct NumberValueNode {
    field: NumberField,
    changes: ChangeNotifier,
}

impl NumberValueNode {
    pub fn new(value: f64, owner: &ChangeNotifier) -> Self {
        let changes = owner.child();

        Self {
            field: NumberField::new(value, &changes),
            changes,
        }
    }

    pub fn field(&self) -> &NumberField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut NumberField {
        &mut self.field
    }
}

impl EditableNode for NumberValueNode {
    type Model = NumberExpression;

    fn to_model(&self) -> NumberExpression {
        NumberExpression::value(self.field.value())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.field.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.field.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }
}

/// Text literal
#[derive(Debug)]
pub struct TextValueNode {
    field: TextField,
    changes: ChangeNotifier,
}

impl TextValueNode {
    pub fn new(value: impl Into<String>, owner: &ChangeNotifier) -> Self {
        let changes = owner.child();

        Self {
            field: TextField::new(value, &changes),
            changes,
        }
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut TextField {
        &mut self.field
    }
}

impl EditableNode for TextValueNode {
    type Model = TextExpression;

    fn to_model(&self) -> TextExpression {
        TextExpression::value(self.field.text())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.field.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.field.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }
}

/// Video given by its URL
#[derive(Debug)]
pub struct VideoValueNode {
    url: TextField,
    changes: ChangeNotifier,
}

impl VideoValueNode {
    pub fn new(url: impl Into<String>, owner: &ChangeNotifier) -> Self {
        let changes = owner.child();

        Self {
            url: TextField::new(url, &changes),
            changes,
        }
    }

    pub fn url(&self) -> &TextField {
        &self.url
    }

    pub fn url_mut(&mut self) -> &mut TextField {
        &mut self.url
    }
}

impl EditableNode for VideoValueNode {
    type Model = VideoExpression;

    fn to_model(&self) -> VideoExpression {
        VideoExpression::value(self.url.text())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.url.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.url.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_value_reflects_committed_text() {
        let owner = ChangeNotifier::root();
        let mut node = NumberValueNode::new(10.0, &owner);

        assert!(node.field_mut().set_text("abc").is_err());
        assert_eq!(node.to_model(), NumberExpression::value(10.0));

        node.field_mut().set_text("12.5").unwrap();
        assert_eq!(node.to_model(), NumberExpression::value(12.5));
        assert_eq!(owner.emitted(), 1);
    }

    #[test]
    fn test_video_url_edit_reaches_owner() {
        let owner = ChangeNotifier::root();
        let mut node = VideoValueNode::new("http://www.youtube.com/watch?v=9bZkp7q19f0", &owner);

        node.url_mut()
            .set_text("http://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .unwrap();

        assert_eq!(
            node.to_model(),
            VideoExpression::value("http://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
        assert_eq!(owner.emitted(), 1);
    }

    #[test]
    fn test_read_only_text_value() {
        let owner = ChangeNotifier::root();
        let mut node = TextValueNode::new("hello", &owner);
        node.set_read_only(true);

        assert!(node.is_read_only());
        assert!(node.field_mut().set_text("bye").is_err());
        assert_eq!(node.to_model(), TextExpression::value("hello"));
    }
}
