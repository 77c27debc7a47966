//! GST state and union-territory codes.
//!
//! The two-digit code is the first segment of every GSTIN and doubles as the
//! jurisdiction code for place-of-supply decisions.

/// (code, name) pairs. Sorted by code for binary search.
static STATES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
    ("99", "Centre Jurisdiction"),
];

/// State name for a two-digit GST state code.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| STATES[i].1)
}

/// GST state code for a state name (case-insensitive, surrounding whitespace ignored).
pub fn state_code(name: &str) -> Option<&'static str> {
    let name = name.trim();
    STATES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(c, _)| *c)
}

pub fn is_known_state_code(code: &str) -> bool {
    state_name(code).is_some()
}

/// Map a raw jurisdiction (state code or state name) to its canonical name.
///
/// Tax apportionment compares jurisdictions as exact strings; hosts that take
/// free-form input should pass it through here first.
pub fn canonical_jurisdiction(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    if raw.len() == 1 && raw.as_bytes()[0].is_ascii_digit() {
        return state_name(&format!("0{raw}"));
    }
    state_name(raw).or_else(|| state_code(raw).and_then(state_name))
}
