use pretty_assertions::assert_eq;

use super::*;
use crate::visual_editor::component::ComponentKind;
use crate::visual_editor::factory::create;
use crate::visual_editor::style::StyleObject;

#[test]
fn session_default_is_idle() {
    let session = DragSession::default();
    assert!(!session.is_active());
    assert!(!session.is_over(&ZoneId::Root));
}

#[test]
fn hover_requires_active_drag() {
    let mut session = DragSession::default();
    session.hover(ZoneId::Root);
    assert!(!session.is_over(&ZoneId::Root));

    session.begin(DragPayload::from_palette(ComponentType::Text));
    session.hover(ZoneId::Root);
    assert!(session.is_over(&ZoneId::Root));
}

#[test]
fn leave_only_clears_matching_zone() {
    let mut session = DragSession::default();
    session.begin(DragPayload::from_palette(ComponentType::Text));
    session.hover(ZoneId::Container("box".into()));

    session.leave(&ZoneId::Root);
    assert!(session.is_over(&ZoneId::Container("box".into())));

    session.leave(&ZoneId::Container("box".into()));
    assert!(!session.is_over(&ZoneId::Container("box".into())));
}

#[test]
fn finish_consumes_payload() {
    let mut session = DragSession::default();
    session.begin(DragPayload::from_palette(ComponentType::Image));
    session.hover(ZoneId::Root);

    let end = session.finish(DropTarget::append(ZoneId::Root)).unwrap();

    assert_eq!(end.payload.component_type, ComponentType::Image);
    assert!(!session.is_active());
    assert!(!session.is_over(&ZoneId::Root));
    assert!(session.finish(DropTarget::append(ZoneId::Root)).is_none());
}

#[test]
fn palette_drag_becomes_create_intent() {
    let end = DragEnd {
        payload: DragPayload::from_palette(ComponentType::Button),
        target: DropTarget::append(ZoneId::Root),
    };
    assert_eq!(
        end.intent(),
        DropIntent::Create {
            component_type: ComponentType::Button,
            target: DropTarget::append(ZoneId::Root),
        }
    );
}

#[test]
fn canvas_drag_becomes_move_intent() {
    let record = create(ComponentType::Text);
    let payload = DragPayload::from_canvas(&record).unwrap();
    let target = DropTarget::before(ZoneId::Container("box".into()), "sib".into());

    let intent = DragEnd { payload, target: target.clone() }.intent();

    assert_eq!(intent, DropIntent::Move { id: record.id, target });
}

#[test]
fn unknown_records_are_not_draggable() {
    let record = Component {
        id: "u".into(),
        kind: ComponentKind::Unknown,
        styles: StyleObject::new(),
        content: None,
    };
    assert!(DragPayload::from_canvas(&record).is_none());
}

#[test]
fn zone_parent() {
    assert_eq!(ZoneId::Root.parent(), None);
    assert_eq!(ZoneId::Container("c".into()).parent(), Some(&"c".into()));
}
