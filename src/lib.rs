//! Thin marshaling layer over PROJ's 4D coordinate transform.
//!
//! The bridge borrows `PJ` objects owned elsewhere and moves scalar
//! coordinates across the C boundary verbatim. Nothing here inspects
//! error state or guards concurrent use; callers keep those concerns.
//! Requires PROJ 5 or newer.

use std::ffi::{CStr, c_char};

use proj_bridge_sys::{
    PJ, PJ_COORD, PJ_DIRECTION, PJ_DIRECTION_PJ_FWD, PJ_DIRECTION_PJ_INV, PJ_UVWT, proj_info,
    proj_lp_dist, proj_lpz_dist, proj_pj_info, proj_trans,
};

pub use proj_bridge_sys as sys;

/// Which way to run an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    fn to_raw(self) -> PJ_DIRECTION {
        match self {
            Direction::Forward => PJ_DIRECTION_PJ_FWD,
            Direction::Inverse => PJ_DIRECTION_PJ_INV,
        }
    }
}

/// One 4D coordinate in PROJ's generic `(u, v, w, t)` naming.
///
/// The slots mean whatever the operation says they mean: longitude or
/// easting in `u`, latitude or northing in `v`, height in `w`, epoch
/// in `t`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    pub u: f64,
    pub v: f64,
    pub w: f64,
    pub t: f64,
}

impl Coord {
    pub fn new(u: f64, v: f64, w: f64, t: f64) -> Self {
        Self { u, v, w, t }
    }
}

impl From<Coord> for PJ_COORD {
    fn from(coord: Coord) -> Self {
        make_coord(coord.u, coord.v, coord.w, coord.t)
    }
}

impl From<PJ_COORD> for Coord {
    fn from(coord: PJ_COORD) -> Self {
        // Every view of the union is four consecutive doubles, so reading
        // `uvwt` back is sound regardless of which view was written.
        let uvwt = unsafe { coord.uvwt };
        Self {
            u: uvwt.u,
            v: uvwt.v,
            w: uvwt.w,
            t: uvwt.t,
        }
    }
}

/// Packs four scalars into a native `PJ_COORD`, in slot order.
///
/// Values are stored as given. Sentinels such as `f64::INFINITY`
/// (C `HUGE_VAL`) survive the trip untouched.
pub fn make_coord(u: f64, v: f64, w: f64, t: f64) -> PJ_COORD {
    PJ_COORD {
        uvwt: PJ_UVWT { u, v, w, t },
    }
}

/// Borrowed handle to a `PJ` transformation object owned elsewhere.
///
/// Copying the handle copies the pointer, never the object. A null
/// handle is a valid value; PROJ treats it as the do-nothing operation.
#[derive(Clone, Copy, Debug)]
pub struct ProjRef {
    raw: *mut PJ,
}

impl ProjRef {
    /// Wraps a raw pointer handed over from the owning side.
    ///
    /// # Safety
    ///
    /// `raw` must be null or point to a `PJ` that stays alive for every
    /// later call through this handle. Destruction remains the owner's
    /// job; this type never frees or mutates the object.
    pub unsafe fn from_raw(raw: *mut PJ) -> Self {
        Self { raw }
    }

    pub fn as_ptr(self) -> *mut PJ {
        self.raw
    }

    /// Reports whether the underlying pointer is null.
    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }

    /// Runs the operation on one coordinate given as four scalars.
    ///
    /// Input and output are in the units the operation expects, radians
    /// for angular slots. No error state is consulted; whatever PROJ
    /// returns, sentinel or not, is passed back as-is.
    pub fn transform(
        self,
        direction: Direction,
        u1: f64,
        v1: f64,
        w1: f64,
        t1: f64,
    ) -> (f64, f64, f64, f64) {
        let out = self.trans(direction, Coord::new(u1, v1, w1, t1));
        (out.u, out.v, out.w, out.t)
    }

    /// Forward transform of one coordinate.
    pub fn fwd(self, coord: Coord) -> Coord {
        self.trans(Direction::Forward, coord)
    }

    /// Inverse transform of one coordinate.
    pub fn inv(self, coord: Coord) -> Coord {
        self.trans(Direction::Inverse, coord)
    }

    fn trans(self, direction: Direction, coord: Coord) -> Coord {
        let out = unsafe { proj_trans(self.raw, direction.to_raw(), coord.into()) };
        out.into()
    }

    /// Geodesic distance in meters between two points given as
    /// longitude/latitude in radians.
    pub fn lp_dist(self, u1: f64, v1: f64, u2: f64, v2: f64) -> f64 {
        unsafe {
            proj_lp_dist(
                self.raw,
                make_coord(u1, v1, 0.0, 0.0),
                make_coord(u2, v2, 0.0, 0.0),
            )
        }
    }

    /// Like [`lp_dist`](Self::lp_dist) with the vertical separation
    /// folded in.
    pub fn lpz_dist(self, u1: f64, v1: f64, w1: f64, u2: f64, v2: f64, w2: f64) -> f64 {
        unsafe {
            proj_lpz_dist(
                self.raw,
                make_coord(u1, v1, w1, 0.0),
                make_coord(u2, v2, w2, 0.0),
            )
        }
    }

    /// Describes the operation behind this handle.
    ///
    /// On a null handle every text field comes back `None` and
    /// `accuracy` is `-1.0`, matching what PROJ reports.
    pub fn info(self) -> ProjInfo {
        let raw = unsafe { proj_pj_info(self.raw) };
        ProjInfo {
            id: opt_string(raw.id),
            description: opt_string(raw.description),
            definition: opt_string(raw.definition),
            has_inverse: raw.has_inverse != 0,
            accuracy: raw.accuracy,
        }
    }
}

/// Description of one transformation object, from `proj_pj_info`.
#[derive(Clone, Debug)]
pub struct ProjInfo {
    pub id: Option<String>,
    pub description: Option<String>,
    pub definition: Option<String>,
    pub has_inverse: bool,
    /// Expected accuracy in meters, `-1.0` when unknown.
    pub accuracy: f64,
}

/// Version and resource-path report for the linked PROJ library.
#[derive(Clone, Debug)]
pub struct LibInfo {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub release: String,
    pub version: String,
    pub searchpath: String,
}

/// Reports which PROJ release this crate is linked against.
pub fn lib_info() -> LibInfo {
    let raw = unsafe { proj_info() };
    LibInfo {
        major: raw.major,
        minor: raw.minor,
        patch: raw.patch,
        release: opt_string(raw.release).unwrap_or_default(),
        version: opt_string(raw.version).unwrap_or_default(),
        searchpath: opt_string(raw.searchpath).unwrap_or_default(),
    }
}

fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(ptr) };
    Some(text.to_string_lossy().into_owned())
}
