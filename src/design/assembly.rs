//! Placement and boolean composition of the holder.
//!
//! Each builder returns its part in "design coordinates": X centered on the
//! slot, Y = 0 at the slot's front face (trays extend towards -Y), Z = 0 on the
//! build plate. Column offsets along X are applied by [`holder`].

use super::params::{Footprint, HolderParams, JackParams};
use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::sdf::Solid;
use crate::sketch::Polygon2;
use crate::traits::CSGOps;
use nalgebra::Vector3;
use tracing::{debug, info};

/// Positive volumes and cutouts collected separately.
///
/// Cutouts are only subtracted in [`Assembly::finish`], after every part has
/// been unioned, so no part added later can refill a cutout.
#[derive(Clone, Debug, Default)]
pub struct Assembly {
    parts: Vec<Solid>,
    cutouts: Vec<Solid>,
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, part: Solid) -> Self {
        self.parts.push(part);
        self
    }

    pub fn cut(mut self, cutout: Solid) -> Self {
        self.cutouts.push(cutout);
        self
    }

    /// Union every part in insertion order, then subtract every cutout.
    pub fn finish(self) -> Result<Solid, ValidationError> {
        let mut parts = self.parts.into_iter();
        let first = parts.next().ok_or(ValidationError::EmptyAssembly)?;
        let positive = parts.fold(first, CSGOps::union);
        Ok(self.cutouts.into_iter().fold(positive, CSGOps::difference))
    }
}

fn cuboid(x: Real, y: Real, z: Real, rounding: Real) -> Result<Solid, ValidationError> {
    Solid::cuboid(Vector3::new(x, y, z), rounding)
}

/// Open-top tray around `inner`, sitting on z=0 and centered on the origin in XY.
///
/// The cavity is shifted back by one wall thickness, so the front wall is open
/// and the back wall is doubled.
pub fn tray_shell(params: &HolderParams, inner: &Footprint) -> Result<Solid, ValidationError> {
    let outer = params.tray_outer(inner);
    let tray = &params.tray;

    let shell = cuboid(outer.width, outer.length, tray.height, 0.0)?.float();
    let cavity = cuboid(inner.width, inner.length, tray.height, 0.0)?
        .float()
        .translate(0.0, tray.wall_thickness, tray.bottom_height);

    Ok(shell.difference(cavity))
}

/// Board tray with its front face at y=0, pin channels and push-button hole cut.
pub fn board_tray(params: &HolderParams) -> Result<Solid, ValidationError> {
    let board = &params.board;
    let t = params.tray.wall_thickness;
    let height = params.tray.height;
    let clearance = params.pins.clearance;

    let outer = params.tray_outer(board);
    let tray = tray_shell(params, board)?.translate(0.0, -outer.length / 2.0, 0.0);

    let pin = cuboid(clearance, board.length, height, 0.0)?;
    let pin_size = pin.bounding_box().extents();
    let pin_y = t - pin_size.y / 2.0;
    let pin_z = params.pins.offset + pin_size.z / 2.0;
    let pin_x = board.width / 2.0 - clearance / 2.0;
    let pin_left = pin.clone().translate(-pin_x, pin_y, pin_z);
    let pin_right = pin.translate(pin_x, pin_y, pin_z);

    let pin_back = cuboid(board.width - clearance / 2.0, clearance, height, 0.0)?
        .translate(0.0, -board.length + 2.0 * t, pin_z);

    let push = &params.push_hole;
    let push_hole = Solid::cylinder(push.height, push.radius, 0.0)?
        .translate(0.0, -board.length * push.position, 0.0);
    debug!(
        pin_x,
        pin_y,
        push_y = -board.length * push.position,
        "placed board tray cutouts"
    );

    Ok(tray
        .difference(pin_left)
        .difference(pin_right)
        .difference(pin_back)
        .difference(push_hole))
}

/// Jack tray, shifted back past the slot by the jack length plus a gap.
pub fn jack_tray(params: &HolderParams, jack: &JackParams) -> Result<Solid, ValidationError> {
    let t = params.tray.wall_thickness;
    let shell = tray_shell(params, &jack.footprint)?;
    Ok(shell.translate(0.0, -(jack.footprint.length + jack.tray_gap + 2.0 * t), 0.0))
}

/// Board guide slot with a ramp on each side plus the shield plate behind it.
pub fn slot_and_shield(params: &HolderParams) -> Result<Solid, ValidationError> {
    let slot = &params.slot;
    let shield = &params.shield;
    let r = slot.ramp;

    let body = cuboid(slot.width, slot.length, slot.height, 0.0)?
        .translate(0.0, slot.length / 2.0 + slot.offset_y, slot.height / 2.0);

    let mut left = Polygon2::new();
    left.add(0.0, 0.0).add(0.0, r).add(-r, 0.0).close();
    let ramp_left = Solid::extrude(&left.build()?, slot.height)?;
    let left_size = ramp_left.bounding_box().extents();
    let ramp_left = ramp_left.translate(-slot.width / 2.0, -left_size.y, left_size.z / 2.0);

    let mut right = Polygon2::new();
    right.add(0.0, 0.0).add(0.0, -r).add(r, -r).close();
    let ramp_right = Solid::extrude(&right.build()?, slot.height)?;
    let right_size = ramp_right.bounding_box().extents();
    let ramp_right = ramp_right.translate(slot.width / 2.0, 0.0, right_size.z / 2.0);

    let plate = cuboid(shield.width, shield.length, shield.height, 0.0)?.translate(
        0.0,
        shield.length / 2.0 + slot.length + slot.offset_y,
        shield.height / 2.0,
    );

    Ok(body.union(ramp_left).union(ramp_right).union(plate))
}

/// Stepped USB cutout through the slot and shield, aligned with the board column.
pub fn usb_cutout(params: &HolderParams) -> Result<Solid, ValidationError> {
    let usb = &params.usb;
    let depth = params.slot.length + params.shield.length;
    let bottom = params.tray.bottom_height;
    let x = params.board_translate_x;

    let pocket = cuboid(
        usb.pocket_width,
        depth - usb.pocket_wall,
        usb.pocket_height + bottom,
        usb.pocket_rounding,
    )?;
    let pocket_size = pocket.bounding_box().extents();
    let pocket = pocket.translate(x, usb.pocket_wall + pocket_size.y / 2.0, 0.0);

    let tunnel = cuboid(
        usb.tunnel_width,
        depth + 2.0 * usb.overhang,
        usb.tunnel_height,
        usb.tunnel_rounding,
    )?;
    let tunnel_size = tunnel.bounding_box().extents();
    let tunnel = tunnel.translate(
        x,
        tunnel_size.y / 2.0 - usb.overhang,
        bottom + tunnel_size.z / 2.0,
    );

    Ok(tunnel.union(pocket))
}

/// Board-edge clearance in the slot face, starting at the slot's front face.
pub fn board_cutout(params: &HolderParams) -> Result<Solid, ValidationError> {
    let cut = &params.board_cutout;
    let cutout = cuboid(params.board.width, cut.length, cut.height, 0.0)?;
    let size = cutout.bounding_box().extents();
    Ok(cutout.translate(
        params.board_translate_x,
        size.y / 2.0 + params.slot.offset_y,
        params.tray.bottom_height + size.z / 2.0,
    ))
}

/// Jack barrel (along Y) plus a box for the jack body, in jack-column coordinates.
pub fn jack_cutout(jack: &JackParams) -> Result<Solid, ValidationError> {
    let radius = jack.barrel_diameter / 2.0;
    // axis height is the mean of the barrel and neck radii
    let barrel_z = radius - (radius - jack.neck_diameter / 2.0) / 2.0;
    let barrel = Solid::cylinder(jack.barrel_length, radius, 0.0)?
        .rotate_x(90.0)
        .translate(0.0, jack.barrel_offset_y, barrel_z);

    let body = cuboid(jack.footprint.width, jack.body_depth, jack.height, 0.0)?
        .translate(0.0, -jack.body_depth / 2.0, jack.height / 2.0);

    Ok(barrel.union(body))
}

/// X of the jack column's center.
pub fn jack_column_x(jack: &JackParams) -> Real {
    -(jack.footprint.width + jack.translate_x)
}

/// The complete holder, unscaled.
pub fn holder(params: &HolderParams) -> Result<Solid, ValidationError> {
    let t = params.tray.wall_thickness;

    let mut assembly = Assembly::new().add(board_tray(params)?.translate(
        params.board_translate_x,
        0.0,
        0.0,
    ));
    if let Some(jack) = &params.jack {
        let tray = jack_tray(params, jack)?;
        assembly = assembly.add(tray.translate(
            jack_column_x(jack),
            jack.footprint.length - 2.0 * t,
            0.0,
        ));
    }
    assembly = assembly
        .add(slot_and_shield(params)?)
        .cut(usb_cutout(params)?)
        .cut(board_cutout(params)?);
    if let Some(jack) = &params.jack {
        let cutout = jack_cutout(jack)?;
        assembly = assembly.cut(cutout.translate(
            jack_column_x(jack),
            0.0,
            params.tray.bottom_height,
        ));
    }

    let solid = assembly.finish()?;
    let bb = solid.bounding_box();
    info!(
        variant = ?params.variant,
        size_x = bb.extents().x,
        size_y = bb.extents().y,
        size_z = bb.extents().z,
        "assembled holder"
    );
    Ok(solid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn assembly_without_parts_fails() {
        let cut = cuboid(1.0, 1.0, 1.0, 0.0).unwrap();
        assert_eq!(
            Assembly::new().cut(cut).finish().unwrap_err(),
            ValidationError::EmptyAssembly
        );
    }

    #[test]
    fn cutouts_apply_after_all_parts() {
        let a = cuboid(2.0, 2.0, 2.0, 0.0).unwrap();
        let hole = cuboid(1.0, 1.0, 1.0, 0.0).unwrap();
        let b = cuboid(2.0, 2.0, 2.0, 0.0).unwrap();
        // part added after the cut still gets cut
        let solid = Assembly::new().add(a).cut(hole).add(b).finish().unwrap();
        assert!(!solid.contains(&Point3::origin()));
    }

    #[test]
    fn tray_floor_and_cavity() {
        let p = HolderParams::full();
        let tray = tray_shell(&p, &p.board).unwrap();
        // floor
        assert!(tray.contains(&Point3::new(0.0, 0.0, 1.0)));
        // cavity above the floor
        assert!(!tray.contains(&Point3::new(0.0, 0.0, 4.0)));
        // side wall
        assert!(tray.contains(&Point3::new(-9.8, 0.0, 4.0)));
    }

    #[test]
    fn ramps_sit_outside_slot_edges() {
        let p = HolderParams::full();
        let slot = slot_and_shield(&p).unwrap();
        let bb = slot.bounding_box();
        // right ramp extends past the slot half width
        assert!((bb.maxs.x - (p.shield.width / 2.0).max(p.slot.width / 2.0 + p.slot.ramp)).abs() < 1e-9);
        assert!(slot.contains(&Point3::new(14.3, -1.5, 6.0)));
    }

    #[test]
    fn jack_barrel_points_forward() {
        let p = HolderParams::full();
        let jack = p.jack.unwrap();
        let bb = jack_cutout(&jack).unwrap().bounding_box();
        assert!((bb.maxs.y - (jack.barrel_offset_y + jack.barrel_length / 2.0)).abs() < 1e-9);
        assert!((bb.mins.y + jack.body_depth).abs() < 1e-9);
    }
}
