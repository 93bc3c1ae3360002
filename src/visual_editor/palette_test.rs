use std::collections::HashSet;

use super::*;
use crate::visual_editor::dnd::DragOrigin;

#[test]
fn one_template_per_creatable_type() {
    let types: HashSet<_> = PALETTE.iter().map(|t| t.component_type).collect();
    assert_eq!(types.len(), PALETTE.len());
    for ty in ComponentType::ALL {
        assert!(types.contains(&ty), "{ty} missing from palette");
    }
}

#[test]
fn palette_follows_creatable_order() {
    let order: Vec<_> = PALETTE.iter().map(|t| t.component_type).collect();
    assert_eq!(order, ComponentType::ALL.to_vec());
}

#[test]
fn payloads_are_marked_as_palette_origin() {
    for template in PALETTE {
        let payload = template.payload();
        assert_eq!(payload.origin, DragOrigin::Palette);
        assert_eq!(payload.component_type, template.component_type);
    }
}
