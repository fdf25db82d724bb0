#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use core::ffi::{c_char, c_double, c_int};

#[repr(C)]
pub struct PJ_CONTEXT {
    _private: [u8; 0],
}

#[repr(C)]
pub struct PJconsts {
    _private: [u8; 0],
}

pub type PJ = PJconsts;

pub type PJ_DIRECTION = c_int;
pub const PJ_DIRECTION_PJ_INV: PJ_DIRECTION = -1;
pub const PJ_DIRECTION_PJ_IDENT: PJ_DIRECTION = 0;
pub const PJ_DIRECTION_PJ_FWD: PJ_DIRECTION = 1;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct PJ_UVWT {
    pub u: c_double,
    pub v: c_double,
    pub w: c_double,
    pub t: c_double,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct PJ_XYZT {
    pub x: c_double,
    pub y: c_double,
    pub z: c_double,
    pub t: c_double,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct PJ_LPZT {
    pub lam: c_double,
    pub phi: c_double,
    pub z: c_double,
    pub t: c_double,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union PJ_COORD {
    pub uvwt: PJ_UVWT,
    pub xyzt: PJ_XYZT,
    pub lpzt: PJ_LPZT,
    pub v: [c_double; 4],
}

// Full PROJ 5 layout. proj_info returns this by value, so the trailing
// path fields must be present even where callers never look at them.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct PJ_INFO {
    pub major: c_int,
    pub minor: c_int,
    pub patch: c_int,
    pub release: *const c_char,
    pub version: *const c_char,
    pub searchpath: *const c_char,
    pub paths: *const *const c_char,
    pub path_count: usize,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct PJ_PROJ_INFO {
    pub id: *const c_char,
    pub description: *const c_char,
    pub definition: *const c_char,
    pub has_inverse: c_int,
    pub accuracy: c_double,
}

unsafe extern "C" {
    pub fn proj_context_create() -> *mut PJ_CONTEXT;
    pub fn proj_context_destroy(ctx: *mut PJ_CONTEXT);

    pub fn proj_create(ctx: *mut PJ_CONTEXT, definition: *const c_char) -> *mut PJ;
    pub fn proj_destroy(obj: *mut PJ) -> *mut PJ;

    pub fn proj_trans(p: *mut PJ, direction: PJ_DIRECTION, coord: PJ_COORD) -> PJ_COORD;

    pub fn proj_lp_dist(p: *const PJ, a: PJ_COORD, b: PJ_COORD) -> c_double;
    pub fn proj_lpz_dist(p: *const PJ, a: PJ_COORD, b: PJ_COORD) -> c_double;

    pub fn proj_info() -> PJ_INFO;
    pub fn proj_pj_info(p: *mut PJ) -> PJ_PROJ_INFO;
}
