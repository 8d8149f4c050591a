//! Dimensional parameters of the holder, one value per physical feature.
//!
//! Everything the assembly places is derived from these numbers. Offsets that
//! only make sense relative to another feature say so on the field.

use crate::float_types::{PLA_SHRINK_RATIO, Real, shrink_compensation};

/// Which holder to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Board tray plus a second tray and cutout for a TRS audio jack.
    Full,
    /// Board tray only.
    Compact,
}

impl Variant {
    pub fn params(self) -> HolderParams {
        match self {
            Variant::Full => HolderParams::full(),
            Variant::Compact => HolderParams::compact(),
        }
    }
}

/// Footprint of a component sitting in a tray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub width: Real,
    pub length: Real,
}

/// Shared tray construction values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrayParams {
    pub wall_thickness: Real,
    pub height: Real,
    /// Floor thickness under the cavity.
    pub bottom_height: Real,
}

/// Pin-clearance channels cut into the board tray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinParams {
    /// Width of each channel.
    pub clearance: Real,
    /// Height of the channel floor above the build plate.
    pub offset: Real,
}

/// Reset button access hole through the tray floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PushHoleParams {
    pub height: Real,
    pub radius: Real,
    /// Distance behind the tray front face as a fraction of board length.
    pub position: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotParams {
    pub width: Real,
    pub length: Real,
    pub height: Real,
    /// Y of the slot's front face.
    pub offset_y: Real,
    /// Leg length of the two guide ramp triangles.
    pub ramp: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShieldParams {
    pub width: Real,
    pub length: Real,
    pub height: Real,
}

/// Stepped USB port cutout: a tall rounded pocket plus a narrow rounded tunnel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsbCutoutParams {
    pub pocket_width: Real,
    /// Pocket height above the tray floor.
    pub pocket_height: Real,
    pub pocket_rounding: Real,
    /// Material left between the pocket and the slot front face.
    pub pocket_wall: Real,
    pub tunnel_width: Real,
    pub tunnel_height: Real,
    pub tunnel_rounding: Real,
    /// How far the tunnel reaches in front of and behind the slot/shield stack.
    pub overhang: Real,
}

/// Clearance cut into the slot face for the board edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCutoutParams {
    pub length: Real,
    pub height: Real,
}

/// TRS audio jack tray and cutout, present only in [`Variant::Full`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JackParams {
    pub footprint: Footprint,
    /// Height of the jack body cutout.
    pub height: Real,
    /// Extra X offset of the jack column beyond its own width.
    pub translate_x: Real,
    /// Gap between the jack tray and the slot face.
    pub tray_gap: Real,
    pub barrel_diameter: Real,
    pub barrel_length: Real,
    /// Y of the barrel center in front of the jack body.
    pub barrel_offset_y: Real,
    /// Diameter of the jack's threaded neck the barrel is centered on.
    pub neck_diameter: Real,
    /// Depth of the box cut behind the slot face for the jack body.
    pub body_depth: Real,
}

/// Every dimension of one holder design.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HolderParams {
    pub variant: Variant,
    pub board: Footprint,
    pub tray: TrayParams,
    pub pins: PinParams,
    pub push_hole: PushHoleParams,
    pub slot: SlotParams,
    pub shield: ShieldParams,
    pub usb: UsbCutoutParams,
    pub board_cutout: BoardCutoutParams,
    /// X shift of the board column (tray and every cutout aligned with it).
    pub board_translate_x: Real,
    pub jack: Option<JackParams>,
    /// Uniform pre-scale applied before export.
    pub shrink: Real,
    /// Mesh cells along the longest axis.
    pub resolution: usize,
}

impl HolderParams {
    /// Holder for an 18.65 x 34.5 board next to a TRS jack.
    pub fn full() -> Self {
        HolderParams {
            variant: Variant::Full,
            board: Footprint {
                width: 18.65,
                length: 34.5,
            },
            tray: TrayParams {
                wall_thickness: 1.0,
                height: 5.0,
                bottom_height: 2.5,
            },
            pins: PinParams {
                clearance: 2.8,
                offset: 0.15,
            },
            push_hole: PushHoleParams {
                height: 10.0,
                radius: 2.5,
                position: 0.75,
            },
            slot: SlotParams {
                width: 28.0,
                length: 3.9 + 2.0,
                height: 12.0,
                offset_y: -2.0,
                ramp: 2.0,
            },
            shield: ShieldParams {
                width: 31.0,
                length: 1.6,
                height: 15.0,
            },
            usb: UsbCutoutParams {
                pocket_width: 11.5,
                pocket_height: 13.0,
                pocket_rounding: 2.5,
                pocket_wall: 0.5,
                tunnel_width: 9.4,
                tunnel_height: 3.5,
                tunnel_rounding: 1.8,
                overhang: 3.0,
            },
            board_cutout: BoardCutoutParams {
                length: 1.5,
                height: 1.8,
            },
            board_translate_x: 3.70,
            jack: Some(JackParams {
                footprint: Footprint {
                    width: 6.15,
                    length: 14.3,
                },
                height: 5.0,
                translate_x: 3.9,
                tray_gap: 3.8,
                barrel_diameter: 6.5,
                barrel_length: 12.0,
                barrel_offset_y: 5.0,
                neck_diameter: 5.0,
                body_depth: 3.0,
            }),
            shrink: shrink_compensation(PLA_SHRINK_RATIO),
            resolution: 300,
        }
    }

    /// Holder for an 18.0 x 33.3 board with no jack, centered on the slot.
    pub fn compact() -> Self {
        HolderParams {
            variant: Variant::Compact,
            board: Footprint {
                width: 18.0,
                length: 33.3,
            },
            board_translate_x: 0.0,
            jack: None,
            ..Self::full()
        }
    }

    /// Outer footprint of a tray around `inner`.
    pub fn tray_outer(&self, inner: &Footprint) -> Footprint {
        let t = self.tray.wall_thickness;
        Footprint {
            width: inner.width + 2.0 * t,
            length: inner.length + 2.0 * t,
        }
    }
}

impl Default for HolderParams {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_the_jack_only() {
        let full = HolderParams::full();
        let compact = HolderParams::compact();
        assert!(full.jack.is_some());
        assert!(compact.jack.is_none());
        assert_eq!(compact.slot, full.slot);
        assert_eq!(compact.tray, full.tray);
        assert_eq!(compact.shrink, full.shrink);
    }

    #[test]
    fn variant_selects_params() {
        assert_eq!(Variant::Full.params(), HolderParams::full());
        assert_eq!(Variant::Compact.params().variant, Variant::Compact);
    }

    #[test]
    fn full_tray_outer_width() {
        let p = HolderParams::full();
        assert!((p.tray_outer(&p.board).width - 20.65).abs() < 1e-9);
    }
}
