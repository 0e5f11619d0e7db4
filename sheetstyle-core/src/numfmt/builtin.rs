//! Built-in number formats
//!
//! Ids below [`CUSTOM_NUM_FMT_START`] are reserved by the file format. Only the
//! locale-independent subset is listed here; reserved ids without an entry
//! (5-8, 23-36, 41-44, 50-163) still never get allocated to custom formats.

/// First id handed out to a custom number format.
pub const CUSTOM_NUM_FMT_START: u32 = 164;

/// Id of the `General` format.
pub const GENERAL_NUM_FMT_ID: u32 = 0;

// See https://github.com/dtjohnson/xlsx-populate/blob/master/lib/NumFmt.js
const BUILTIN_NUM_FMTS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Look up the built-in format code for a reserved id
pub fn builtin_format_code(id: u32) -> Option<&'static str> {
    if id >= CUSTOM_NUM_FMT_START {
        return None;
    }
    BUILTIN_NUM_FMTS
        .iter()
        .find(|(builtin_id, _)| *builtin_id == id)
        .map(|(_, code)| *code)
}

/// Look up the reserved id of a built-in format code
pub fn builtin_format_id(code: &str) -> Option<u32> {
    BUILTIN_NUM_FMTS
        .iter()
        .find(|(_, builtin_code)| *builtin_code == code)
        .map(|(id, _)| *id)
}

/// Check whether an id falls in the reserved built-in range
pub fn is_reserved_id(id: u32) -> bool {
    id < CUSTOM_NUM_FMT_START
}
