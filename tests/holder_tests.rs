mod support;

use holder::{
    CSGOps,
    design::{
        HolderParams, Variant,
        assembly::{board_tray, board_cutout, holder, jack_tray, slot_and_shield, tray_shell, usb_cutout},
        export::{render, scaled_holder},
    },
    errors::{HolderError, ValidationError},
};
use nalgebra::Point3;

use crate::support::{aabb_approx_eq, approx_eq};

fn low_res(variant: Variant) -> HolderParams {
    HolderParams {
        resolution: 48,
        ..variant.params()
    }
}

#[test]
fn board_tray_outer_width_before_translation() {
    let p = HolderParams::full();
    let shell = tray_shell(&p, &p.board).unwrap();
    assert!(approx_eq(shell.bounding_box().extents().x, 20.65, 1e-9));
    // pin channels and the push hole never widen the tray
    let tray = board_tray(&p).unwrap();
    assert!(approx_eq(tray.bounding_box().extents().x, 20.65, 1e-9));
    assert!(approx_eq(tray.bounding_box().maxs.y, 0.0, 1e-9));
    assert!(approx_eq(tray.bounding_box().mins.y, -36.5, 1e-9));
}

#[test]
fn shrink_compensation_of_assembled_tray() {
    let p = HolderParams::full();
    let tray = board_tray(&p).unwrap();
    let scaled = tray.scale_uniform(p.shrink).unwrap();
    assert!(approx_eq(scaled.bounding_box().extents().x, 20.6707, 1e-4));
}

#[test]
fn full_holder_bounding_box() {
    let p = HolderParams::full();
    let bb = holder(&p).unwrap().bounding_box();
    // ramps stick out past the shield on both sides
    assert!(approx_eq(bb.mins.x, -16.0, 1e-9));
    assert!(approx_eq(bb.maxs.x, 16.0, 1e-9));
    assert!(approx_eq(bb.mins.y, -36.5, 1e-9));
    assert!(approx_eq(bb.maxs.y, 5.5, 1e-9));
    assert!(approx_eq(bb.mins.z, 0.0, 1e-9));
    assert!(approx_eq(bb.maxs.z, 15.0, 1e-9));
}

#[test]
fn board_tray_features() {
    let solid = holder(&HolderParams::full()).unwrap();
    // floor under the board
    assert!(solid.contains(&Point3::new(3.7, -15.0, 1.0)));
    // cavity above the floor
    assert!(!solid.contains(&Point3::new(3.7, -15.0, 4.0)));
    // push-button hole goes through the floor
    assert!(!solid.contains(&Point3::new(3.7, -25.875, 1.0)));
    // back pin channel sits above the floor by the pin offset
    assert!(!solid.contains(&Point3::new(3.7, -32.5, 1.0)));
    assert!(solid.contains(&Point3::new(3.7, -32.5, 0.1)));
}

#[test]
fn slot_features() {
    let solid = holder(&HolderParams::full()).unwrap();
    // solid slot material away from every cutout
    assert!(solid.contains(&Point3::new(12.0, 1.0, 9.0)));
    // USB tunnel runs through slot and shield
    assert!(!solid.contains(&Point3::new(3.7, 5.0, 4.0)));
    // USB pocket
    assert!(!solid.contains(&Point3::new(3.7, 3.0, 1.0)));
    // material above the pocket stays
    assert!(solid.contains(&Point3::new(3.7, 2.0, 10.0)));
    // left guide ramp
    assert!(solid.contains(&Point3::new(-14.5, -1.5, 6.0)));
    // board edge clearance
    assert!(!solid.contains(&Point3::new(3.7, -1.0, 3.0)));
}

#[test]
fn jack_features_only_in_full() {
    let full = holder(&HolderParams::full()).unwrap();
    let compact = holder(&HolderParams::compact()).unwrap();

    let jack_floor = Point3::new(-10.05, -10.0, 1.0);
    assert!(full.contains(&jack_floor));
    assert!(!compact.contains(&jack_floor));

    let barrel = Point3::new(-10.05, 1.0, 5.375);
    assert!(!full.contains(&barrel));
    assert!(compact.contains(&barrel));
}

#[test]
fn jack_tray_sits_behind_slot() {
    let p = HolderParams::full();
    let jack = p.jack.unwrap();
    let t = p.tray.wall_thickness;
    let bb = jack_tray(&p, &jack).unwrap().bounding_box();
    let outer_length = jack.footprint.length + 2.0 * t;
    let shift = jack.footprint.length + jack.tray_gap + 2.0 * t;
    assert!(approx_eq(bb.maxs.y, outer_length / 2.0 - shift, 1e-9));
    assert!(bb.maxs.y < p.slot.offset_y);
}

#[test]
fn compact_is_centered_on_slot() {
    let p = HolderParams::compact();
    let tray = board_tray(&p).unwrap().bounding_box();
    assert!(approx_eq(tray.center().x, 0.0, 1e-9));
    let usb = usb_cutout(&p).unwrap().bounding_box();
    assert!(approx_eq(usb.center().x, 0.0, 1e-9));
    let board = board_cutout(&p).unwrap().bounding_box();
    assert!(approx_eq(board.mins.y, p.slot.offset_y, 1e-9));
}

#[test]
fn cutouts_are_aligned_with_board_column() {
    let p = HolderParams::full();
    let usb = usb_cutout(&p).unwrap().bounding_box();
    let board = board_cutout(&p).unwrap().bounding_box();
    assert!(approx_eq(usb.center().x, p.board_translate_x, 1e-9));
    assert!(approx_eq(board.center().x, p.board_translate_x, 1e-9));
}

#[test]
fn slot_and_shield_stack() {
    let p = HolderParams::full();
    let bb = slot_and_shield(&p).unwrap().bounding_box();
    assert!(approx_eq(bb.mins.y, p.slot.offset_y, 1e-9));
    assert!(approx_eq(bb.maxs.y, p.slot.offset_y + p.slot.length + p.shield.length, 1e-9));
    assert!(approx_eq(bb.maxs.z, p.shield.height, 1e-9));
}

#[test]
fn assembly_is_deterministic() {
    for variant in [Variant::Full, Variant::Compact] {
        let p = low_res(variant);
        let a = scaled_holder(&p).unwrap();
        let b = scaled_holder(&p).unwrap();
        assert_eq!(a.bounding_box(), b.bounding_box());

        let ma = render(&a, p.resolution).unwrap();
        let mb = render(&b, p.resolution).unwrap();
        assert_eq!(ma.len(), mb.len());
        assert_eq!(ma.bounding_box(), mb.bounding_box());
    }
}

#[test]
fn rendered_mesh_fits_scaled_solid() {
    let p = low_res(Variant::Full);
    let solid = scaled_holder(&p).unwrap();
    let bb = solid.bounding_box();
    let mesh = render(&solid, p.resolution).unwrap();
    let size = bb.extents();
    let step = size.x.max(size.y).max(size.z) / p.resolution as holder::float_types::Real;
    assert!(aabb_approx_eq(&mesh.bounding_box().unwrap(), &bb, step + 1e-6));
}

#[test]
fn bad_dimension_aborts_assembly() {
    let mut p = HolderParams::full();
    p.board.width = -1.0;
    assert!(matches!(
        holder(&p),
        Err(ValidationError::InvalidDimension { .. })
    ));
    assert!(matches!(
        scaled_holder(&p),
        Err(HolderError::Validation(ValidationError::InvalidDimension { .. }))
    ));
}

#[test]
fn bad_shrink_is_rejected() {
    let p = HolderParams {
        shrink: 0.0,
        ..HolderParams::compact()
    };
    assert!(matches!(
        scaled_holder(&p),
        Err(HolderError::Validation(ValidationError::InvalidDimension { .. }))
    ));
}

#[test]
fn oversized_resolution_is_rejected() {
    let p = HolderParams {
        resolution: usize::MAX,
        ..HolderParams::compact()
    };
    let solid = scaled_holder(&p).unwrap();
    assert!(matches!(
        render(&solid, p.resolution),
        Err(HolderError::Validation(ValidationError::InvalidResolution(usize::MAX)))
    ));
}
