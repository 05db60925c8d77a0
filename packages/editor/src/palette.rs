//! Fixed set of drag sources offered next to the script.
//!
//! Every entry produces a fresh component on each drag, so dropping the same
//! entry twice yields two independent nodes.

use crate::drag::DragSource;
use montage_language::{
    CommandSequence, LanguageComponent, NumberExpression, Scene, Statement, TextExpression,
    TextScene, VideoCollectionExpression, VideoExpression, VideoScene,
};

const GANGNAM_STYLE: &str = "http://www.youtube.com/watch?v=9bZkp7q19f0";

#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub label: &'static str,
    template: fn() -> LanguageComponent,
}

impl PaletteEntry {
    pub fn component(&self) -> LanguageComponent {
        (self.template)()
    }
}

impl DragSource for PaletteEntry {
    fn snapshot(&self) -> LanguageComponent {
        self.component()
    }
}

pub static PALETTE: [PaletteEntry; 11] = [
    PaletteEntry {
        label: "Number",
        template: || NumberExpression::value(0.0).into(),
    },
    PaletteEntry {
        label: "Arithmetic",
        template: || NumberExpression::add(NumberExpression::Gap, NumberExpression::Gap).into(),
    },
    PaletteEntry {
        label: "Text",
        template: || TextExpression::value("").into(),
    },
    PaletteEntry {
        label: "Video",
        template: || VideoExpression::value(GANGNAM_STYLE).into(),
    },
    PaletteEntry {
        label: "Get Variable",
        template: || Statement::get("item").into(),
    },
    PaletteEntry {
        label: "Set Variable",
        template: || Statement::set("item", NumberExpression::Gap).into(),
    },
    PaletteEntry {
        label: "Video Title",
        template: || TextExpression::title_of(VideoExpression::Gap).into(),
    },
    PaletteEntry {
        label: "Related Videos",
        template: || VideoCollectionExpression::related_to(VideoExpression::Gap).into(),
    },
    PaletteEntry {
        label: "Random Video",
        template: || VideoExpression::random_from(VideoCollectionExpression::Gap).into(),
    },
    PaletteEntry {
        label: "Video Scene",
        template: example_video_scene,
    },
    PaletteEntry {
        label: "Text Scene",
        template: example_text_scene,
    },
];

pub fn find(label: &str) -> Option<&'static PaletteEntry> {
    PALETTE
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(label))
}

fn example_video_scene() -> LanguageComponent {
    Scene::Video(VideoScene {
        title: "Example Video Scene".to_string(),
        comment: "Displays Gangnam Style video for 10 seconds from offset 0 seconds.".to_string(),
        duration: NumberExpression::value(10.0),
        pre_commands: CommandSequence::empty(),
        post_commands: CommandSequence::empty(),
        offset: NumberExpression::value(0.0),
        source: VideoExpression::value(GANGNAM_STYLE),
    })
    .into()
}

fn example_text_scene() -> LanguageComponent {
    Scene::Text(TextScene {
        title: "Example Text Scene".to_string(),
        comment: "Displays title of Gangnam Style video for 2 seconds.".to_string(),
        duration: NumberExpression::value(2.0),
        pre_commands: CommandSequence::empty(),
        post_commands: CommandSequence::empty(),
        text: TextExpression::title_of(VideoExpression::value(GANGNAM_STYLE)),
    })
    .into()
}
