//! # Drag Transfer Protocol
//!
//! ```text
//!          start()                 drop_on() accepted
//! Idle ───────────────► Dragging ─────────────────────► Dropped ──► Idle
//!                          │
//!                          │ drop_on() rejected / read-only, cancel()
//!                          └──────────────────────────► Cancelled ─► Idle
//! ```
//!
//! Starting a drag snapshots the source's current component into a
//! [`DragPayload`]: a detached, serialized copy tagged with
//! [`LC_MIME_FORMAT`]. The payload is consumed by at most one target and
//! is discarded when the drag ends either way. Only one drag may be active
//! at a time.
//!
//! Listeners see `Started` with the snapshot, then exactly one `Finished`.

use crate::errors::{EditorError, EditorResult};
use montage_language::{Category, LanguageComponent};
use tracing::{debug, info, warn};

/// Transfer format of a serialized language component
pub const LC_MIME_FORMAT: &str = "application/x-language-component";

/// Detached snapshot of one component, valid for a single drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    format: String,
    data: Vec<u8>,
}

impl DragPayload {
    pub fn encode(component: &LanguageComponent) -> EditorResult<Self> {
        Ok(Self {
            format: LC_MIME_FORMAT.to_string(),
            data: serde_json::to_vec(component)?,
        })
    }

    /// Payload handed over by the platform, in any format
    pub fn from_raw(format: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            format: format.into(),
            data,
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn has_format(&self, format: &str) -> bool {
        self.format == format
    }

    pub fn decode(&self) -> EditorResult<LanguageComponent> {
        if !self.has_format(LC_MIME_FORMAT) {
            return Err(EditorError::UnknownPayloadFormat(self.format.clone()));
        }
        Ok(serde_json::from_slice(&self.data)?)
    }
}

/// Something the user can start a drag from
pub trait DragSource {
    /// Current component, copied
    fn snapshot(&self) -> LanguageComponent;
}

/// Something a payload can be dropped onto: a slot or a list's append gap
pub trait DropTarget {
    fn category(&self) -> Category;

    /// Placeholder or prompt shown by the target
    fn label(&self) -> &'static str;

    /// Whether the target currently shows content (slots only)
    fn is_full(&self) -> bool {
        false
    }

    /// False while the target's owner is read-only
    fn is_drop_enabled(&self) -> bool;

    fn is_acceptable(&self, component: &LanguageComponent) -> bool;

    /// Take ownership of a dropped component
    fn accept(&mut self, component: LanguageComponent) -> EditorResult<()>;

    fn is_highlighted(&self) -> bool;

    fn set_highlighted(&mut self, highlighted: bool);

    /// Acceptance query made when a payload hovers the target
    fn drag_enter(&self, payload: &DragPayload) -> bool {
        if !self.is_drop_enabled() || !payload.has_format(LC_MIME_FORMAT) {
            return false;
        }

        match payload.decode() {
            Ok(component) => self.is_acceptable(&component),
            Err(_) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Released over nothing
    NoTarget,

    /// Released over a read-only target
    ReadOnly,

    /// Released over a target that does not take this category
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Dropped,
    Cancelled(CancelReason),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Started(LanguageComponent),
    Finished(DragOutcome),
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

/// Drives one drag gesture at a time
#[derive(Default)]
pub struct DragController {
    state: DragState,
    listeners: Vec<Box<dyn Fn(&DragEvent)>>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&DragEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Dragging(payload) => Some(payload),
            DragState::Idle => None,
        }
    }

    /// Idle → Dragging: snapshot `source` into the payload
    pub fn start(&mut self, source: &dyn DragSource) -> EditorResult<()> {
        if self.is_dragging() {
            return Err(EditorError::DragInProgress);
        }

        let snapshot = source.snapshot();
        let payload = DragPayload::encode(&snapshot)?;

        info!(kind = ?snapshot.kind(), bytes = payload.data.len(), "Drag started");
        self.state = DragState::Dragging(payload);
        self.emit(&DragEvent::Started(snapshot));
        Ok(())
    }

    /// Dragging → Dropped or Cancelled: release the payload over `target`
    pub fn drop_on(&mut self, target: &mut dyn DropTarget) -> EditorResult<DragOutcome> {
        let payload = self.take_payload()?;
        let result = Self::resolve(&payload, target);

        let outcome = match &result {
            Ok(outcome) => *outcome,
            Err(e) => {
                warn!(error = %e, category = %target.category(), "Drop failed");
                DragOutcome::Cancelled(CancelReason::Rejected)
            }
        };
        self.finish(outcome);
        result
    }

    /// Dragging → Cancelled: released over no target
    pub fn cancel(&mut self) -> EditorResult<DragOutcome> {
        self.take_payload()?;

        let outcome = DragOutcome::Cancelled(CancelReason::NoTarget);
        self.finish(outcome);
        Ok(outcome)
    }

    fn resolve(payload: &DragPayload, target: &mut dyn DropTarget) -> EditorResult<DragOutcome> {
        if !target.is_drop_enabled() {
            return Ok(DragOutcome::Cancelled(CancelReason::ReadOnly));
        }

        if !target.drag_enter(payload) {
            return Ok(DragOutcome::Cancelled(CancelReason::Rejected));
        }

        // Decoded once more so the target owns a fresh copy.
        let component = payload.decode()?;
        target.accept(component)?;
        Ok(DragOutcome::Dropped)
    }

    fn take_payload(&mut self) -> EditorResult<DragPayload> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(payload) => Ok(payload),
            DragState::Idle => Err(EditorError::NoActiveDrag),
        }
    }

    fn finish(&mut self, outcome: DragOutcome) {
        debug!(?outcome, "Drag finished");
        self.emit(&DragEvent::Finished(outcome));
    }

    fn emit(&self, event: &DragEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::ChangeNotifier;
    use crate::editable::EditableNode;
    use crate::slot::{NumberSlot, TextSlot};
    use montage_language::{NumberExpression, TextExpression};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Fixed(LanguageComponent);

    impl DragSource for Fixed {
        fn snapshot(&self) -> LanguageComponent {
            self.0.clone()
        }
    }

    fn ten() -> Fixed {
        Fixed(NumberExpression::value(10.0).into())
    }

    #[test]
    fn test_payload_round_trip() {
        let component: LanguageComponent = TextExpression::value("hello").into();
        let payload = DragPayload::encode(&component).unwrap();

        assert!(payload.has_format(LC_MIME_FORMAT));
        assert_eq!(payload.decode().unwrap(), component);
    }

    #[test]
    fn test_foreign_payload_format_is_refused() {
        let payload = DragPayload::from_raw("text/plain", b"10".to_vec());
        assert!(matches!(
            payload.decode(),
            Err(EditorError::UnknownPayloadFormat(_))
        ));

        let owner = ChangeNotifier::root();
        let slot = NumberSlot::empty_slot(&owner);
        assert!(!slot.drag_enter(&payload));
    }

    #[test]
    fn test_drop_fills_compatible_slot() {
        let owner = ChangeNotifier::root();
        let mut slot = NumberSlot::empty_slot(&owner);
        let mut drag = DragController::new();

        drag.start(&ten()).unwrap();
        let outcome = drag.drop_on(&mut slot).unwrap();

        assert_eq!(outcome, DragOutcome::Dropped);
        assert_eq!(slot.to_model(), NumberExpression::value(10.0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_on_wrong_category_is_cancelled() {
        let owner = ChangeNotifier::root();
        let mut slot = TextSlot::empty_slot(&owner);
        let mut drag = DragController::new();

        drag.start(&ten()).unwrap();
        let outcome = drag.drop_on(&mut slot).unwrap();

        assert_eq!(outcome, DragOutcome::Cancelled(CancelReason::Rejected));
        assert!(!slot.is_full());
        assert_eq!(owner.emitted(), 0);
    }

    #[test]
    fn test_drop_on_read_only_slot_is_cancelled() {
        let owner = ChangeNotifier::root();
        let mut slot = NumberSlot::empty_slot(&owner);
        slot.set_read_only(true);
        let mut drag = DragController::new();

        drag.start(&ten()).unwrap();
        let outcome = drag.drop_on(&mut slot).unwrap();

        assert_eq!(outcome, DragOutcome::Cancelled(CancelReason::ReadOnly));
        assert!(!slot.is_full());
    }

    #[test]
    fn test_only_one_drag_at_a_time() {
        let mut drag = DragController::new();
        drag.start(&ten()).unwrap();

        assert!(matches!(drag.start(&ten()), Err(EditorError::DragInProgress)));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_drop_without_drag_fails() {
        let owner = ChangeNotifier::root();
        let mut slot = NumberSlot::empty_slot(&owner);
        let mut drag = DragController::new();

        assert!(matches!(drag.drop_on(&mut slot), Err(EditorError::NoActiveDrag)));
        assert!(matches!(drag.cancel(), Err(EditorError::NoActiveDrag)));
    }

    #[test]
    fn test_events_bracket_the_gesture() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut drag = DragController::new();

        let sink = events.clone();
        drag.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        drag.start(&ten()).unwrap();
        drag.cancel().unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                DragEvent::Started(NumberExpression::value(10.0).into()),
                DragEvent::Finished(DragOutcome::Cancelled(CancelReason::NoTarget)),
            ]
        );
    }
}
