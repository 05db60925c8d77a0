//! Integration tests for editor crate

use anyhow::Result;
use montage_editor::nodes::{ArithmeticOperator, NumberOperatorNode};
use montage_editor::{
    palette, registry, targets, CancelReason, ChangeNotifier, CommandSequenceEditor,
    DragController, DragEvent, DragOutcome, DragSource, DropTarget, EditableNode, GapCategory,
    NumberSlot, ScriptDocument, Slot,
};
use montage_language::{
    Act, Category, CommandSequence, LanguageComponent, NumberExpression, Scene, Statement,
    TextExpression, TextScene, VideoCollectionExpression, VideoExpression, VideoScene,
};
use std::cell::RefCell;
use std::rc::Rc;

const GANGNAM_STYLE: &str = "http://www.youtube.com/watch?v=9bZkp7q19f0";

struct Snapshot(LanguageComponent);

impl DragSource for Snapshot {
    fn snapshot(&self) -> LanguageComponent {
        self.0.clone()
    }
}

fn sample_act() -> Act {
    Act::new(vec![
        Scene::Video(VideoScene {
            title: "Opening".to_string(),
            comment: "Random related clip".to_string(),
            duration: NumberExpression::multiply(
                NumberExpression::value(2.0),
                NumberExpression::value(5.0),
            ),
            pre_commands: CommandSequence::new(vec![Statement::set(
                "curr_offset",
                NumberExpression::subtract(NumberExpression::value(30.0), NumberExpression::Gap),
            )]),
            post_commands: CommandSequence::new(vec![Statement::get("curr_video")]),
            offset: NumberExpression::value(0.0),
            source: VideoExpression::random_from(VideoCollectionExpression::related_to(
                VideoExpression::value(GANGNAM_STYLE),
            )),
        }),
        Scene::Text(TextScene {
            title: "Caption".to_string(),
            comment: String::new(),
            duration: NumberExpression::value(2.0),
            pre_commands: CommandSequence::empty(),
            post_commands: CommandSequence::empty(),
            text: TextExpression::title_of(VideoExpression::Gap),
        }),
    ])
}

/// One representative component per category, gaps included
fn representatives() -> Vec<LanguageComponent> {
    vec![
        NumberExpression::Gap.into(),
        NumberExpression::value(10.0).into(),
        NumberExpression::add(NumberExpression::value(1.0), NumberExpression::Gap).into(),
        TextExpression::Gap.into(),
        TextExpression::value("hello").into(),
        TextExpression::title_of(VideoExpression::value(GANGNAM_STYLE)).into(),
        VideoExpression::Gap.into(),
        VideoExpression::value(GANGNAM_STYLE).into(),
        VideoExpression::random_from(VideoCollectionExpression::Gap).into(),
        VideoCollectionExpression::Gap.into(),
        VideoCollectionExpression::related_to(VideoExpression::Gap).into(),
        Statement::get("item").into(),
        Statement::set("curr_duration", NumberExpression::value(3.0)).into(),
        CommandSequence::new(vec![Statement::get("item")]).into(),
        sample_act().scenes[0].clone().into(),
        sample_act().scenes[1].clone().into(),
        sample_act().into(),
    ]
}

#[test]
fn test_empty_number_slot_is_a_gap() {
    let owner = ChangeNotifier::root();
    let slot = NumberSlot::empty_slot(&owner);

    assert_eq!(slot.to_model(), NumberExpression::Gap);
}

#[test]
fn test_drag_number_onto_empty_slot() -> Result<()> {
    let owner = ChangeNotifier::root();
    let mut slot = NumberSlot::empty_slot(&owner);
    let mut drag = DragController::new();

    drag.start(&Snapshot(NumberExpression::value(10.0).into()))?;
    let outcome = drag.drop_on(&mut slot)?;

    assert_eq!(outcome, DragOutcome::Dropped);
    assert_eq!(slot.to_model(), NumberExpression::value(10.0));
    Ok(())
}

#[test]
fn test_drag_text_onto_number_slot_is_rejected() -> Result<()> {
    let owner = ChangeNotifier::root();
    let mut slot = NumberSlot::empty_slot(&owner);
    let mut drag = DragController::new();
    let text: LanguageComponent = TextExpression::value("ten").into();

    assert!(!slot.is_acceptable(&text));

    drag.start(&Snapshot(text))?;
    let outcome = drag.drop_on(&mut slot)?;

    assert_eq!(outcome, DragOutcome::Cancelled(CancelReason::Rejected));
    assert!(!slot.is_full());
    Ok(())
}

#[test]
fn test_operator_node_models_add() -> Result<()> {
    let owner = ChangeNotifier::root();
    let node = NumberOperatorNode::new(
        ArithmeticOperator::from_symbol("+")?,
        NumberExpression::value(2.0),
        NumberExpression::value(3.0),
        &owner,
    )?;

    assert_eq!(
        node.to_model(),
        NumberExpression::add(NumberExpression::value(2.0), NumberExpression::value(3.0))
    );
    Ok(())
}

#[test]
fn test_three_commands_append_in_order() -> Result<()> {
    let owner = ChangeNotifier::root();
    let mut editor = CommandSequenceEditor::new(CommandSequence::empty(), &owner)?;
    let commands = vec![
        Statement::get("item"),
        Statement::set("curr_duration", NumberExpression::value(4.0)),
        Statement::get("curr_offset"),
    ];

    for command in commands.clone() {
        editor.add_command(command)?;
    }

    assert_eq!(editor.to_model(), CommandSequence::new(commands));
    Ok(())
}

#[test]
fn test_every_buildable_component_round_trips() -> Result<()> {
    let owner = ChangeNotifier::root();

    for component in representatives().into_iter().filter(|c| !c.is_gap()) {
        let node = registry::build(component.clone(), &owner)?;
        assert_eq!(node.to_model(), component);
    }
    assert_eq!(owner.emitted(), 0);
    Ok(())
}

fn acceptance<C: GapCategory>() -> Vec<(Category, bool)> {
    let owner = ChangeNotifier::root();
    let slot = Slot::<C>::empty_slot(&owner);

    representatives()
        .iter()
        .map(|component| (component.category(), slot.is_acceptable(component)))
        .collect()
}

fn assert_accepts_only<C: GapCategory>(expected: Category) {
    for (category, accepted) in acceptance::<C>() {
        assert_eq!(
            accepted,
            category == expected,
            "{} slot given a {}",
            expected,
            category
        );
    }
}

#[test]
fn test_slot_acceptance_is_exactly_category_match() {
    assert_accepts_only::<NumberExpression>(Category::NumberExpression);
    assert_accepts_only::<TextExpression>(Category::TextExpression);
    assert_accepts_only::<VideoExpression>(Category::VideoExpression);
    assert_accepts_only::<VideoCollectionExpression>(Category::VideoCollectionExpression);
}

#[test]
fn test_refill_discards_previous_occupant() -> Result<()> {
    let owner = ChangeNotifier::root();
    let mut slot = NumberSlot::new(NumberExpression::value(1.0), &owner)?;

    slot.fill(NumberExpression::multiply(
        NumberExpression::value(6.0),
        NumberExpression::value(7.0),
    ))?;

    assert_eq!(
        slot.to_model(),
        NumberExpression::multiply(NumberExpression::value(6.0), NumberExpression::value(7.0))
    );
    assert!(slot.is_full());
    Ok(())
}

#[test]
fn test_read_only_document_disables_every_target() -> Result<()> {
    let mut document = ScriptDocument::new(sample_act())?;
    document.set_read_only(true);

    for component in representatives() {
        let mut accepted = 0;
        document
            .root_mut()
            .for_each_target(&mut |target: &mut dyn DropTarget| {
                if target.is_acceptable(&component) {
                    accepted += 1;
                }
            });
        assert_eq!(accepted, 0, "read-only tree accepted {:?}", component.kind());
    }

    assert!(document.targets().iter().all(|target| !target.enabled));
    Ok(())
}

#[test]
fn test_document_round_trip_and_drop() -> Result<()> {
    let mut document = ScriptDocument::new(sample_act())?;
    assert_eq!(document.to_model(), sample_act());

    let changes = Rc::new(RefCell::new(0));
    let counter = changes.clone();
    document.subscribe(move |_| *counter.borrow_mut() += 1);

    let mut drag = DragController::new();
    drag.start(palette::find("Get Variable").expect("palette entry"))?;

    let gap = document
        .targets()
        .into_iter()
        .find(|target| target.category == Category::Statement)
        .expect("command gap");
    let outcome = document.drop_at(&mut drag, gap.index)?;

    assert_eq!(outcome, DragOutcome::Dropped);
    assert!(*changes.borrow() >= 1);
    assert!(document.is_dirty());

    match &document.to_model().scenes[0] {
        Scene::Video(scene) => assert_eq!(scene.pre_commands.commands.len(), 2),
        other => panic!("Expected a video scene, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_drag_events_bracket_each_gesture() -> Result<()> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut drag = DragController::new();
    let sink = events.clone();
    drag.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let owner = ChangeNotifier::root();
    let mut slot = NumberSlot::empty_slot(&owner);
    let five: LanguageComponent = NumberExpression::value(5.0).into();

    drag.start(&Snapshot(five.clone()))?;
    drag.drop_on(&mut slot)?;
    drag.start(&Snapshot(TextExpression::value("x").into()))?;
    drag.drop_on(&mut slot)?;

    assert_eq!(
        *events.borrow(),
        vec![
            DragEvent::Started(five),
            DragEvent::Finished(DragOutcome::Dropped),
            DragEvent::Started(TextExpression::value("x").into()),
            DragEvent::Finished(DragOutcome::Cancelled(CancelReason::Rejected)),
        ]
    );
    Ok(())
}

#[test]
fn test_payload_is_detached_from_source() -> Result<()> {
    let owner = ChangeNotifier::root();
    let mut source = NumberSlot::new(NumberExpression::value(1.0), &owner)?;
    let mut target = NumberSlot::empty_slot(&owner);
    let mut drag = DragController::new();

    let node = source.occupant().expect("occupied");
    drag.start(node)?;
    source.fill(NumberExpression::value(99.0))?;
    drag.drop_on(&mut target)?;

    assert_eq!(target.to_model(), NumberExpression::value(1.0));
    assert_eq!(source.to_model(), NumberExpression::value(99.0));
    Ok(())
}

#[test]
fn test_highlights_cleared_after_drop() -> Result<()> {
    let mut document = ScriptDocument::new(sample_act())?;
    let mut drag = DragController::new();

    drag.start(palette::find("Number").expect("palette entry"))?;
    let payload = drag.payload().cloned().expect("active drag");
    let highlighted = document.highlight_for(&payload)?;

    let number_targets = document
        .targets()
        .iter()
        .filter(|target| target.category == Category::NumberExpression)
        .count();
    assert_eq!(highlighted, number_targets);

    let first = document
        .targets()
        .into_iter()
        .find(|target| target.highlighted)
        .expect("highlighted target");
    document.drop_at(&mut drag, first.index)?;

    assert!(document.targets().iter().all(|target| !target.highlighted));
    assert!(targets::collect_targets(document.root_mut()).len() >= number_targets);
    Ok(())
}

#[test]
fn test_demo_document_survives_editor() -> Result<()> {
    let act = Act::from_json(include_str!("../../../demos/gangnam.act.json"))?;
    let document = ScriptDocument::new(act.clone())?;

    assert_eq!(document.to_model(), act);
    assert!(!document.is_dirty());
    Ok(())
}
