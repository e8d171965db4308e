//! Reference data tables for plywood dimensions and quality grades
//!
//! The tables are process-wide constants. Lookups scan in declaration order
//! and return the first match, so duplicate rows never change behavior.

use serde::Serialize;

/// A canonical `WIDTHxLENGTH` dimension and its short numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionEntry {
    /// Dimension string without whitespace, e.g. `"1250x2500"`
    pub value: &'static str,
    /// Short numeric code, e.g. `"05"`
    pub code: &'static str,
}

impl DimensionEntry {
    const fn new(value: &'static str, code: &'static str) -> Self {
        Self { value, code }
    }
}

/// A quality grade ("DQ option") and its short numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityEntry {
    /// Human-readable grade, e.g. `"B/BB"`
    pub display: &'static str,
    /// Short numeric code, e.g. `"02"`
    pub value: &'static str,
}

impl QualityEntry {
    const fn new(display: &'static str, value: &'static str) -> Self {
        Self { display, value }
    }

    /// Case-insensitive match against either the display text or the code
    pub fn matches(&self, text: &str) -> bool {
        self.display.eq_ignore_ascii_case(text) || self.value.eq_ignore_ascii_case(text)
    }
}

/// Thickness values offered by the form picker (millimetres)
pub const PREDEFINED_THICKNESS_VALUES: &[&str] = &[
    "3", "4", "5", "6", "6.5", "8", "9", "10", "12", "15", "18", "21", "24", "27", "30", "40", "50",
];

/// Most frequently used dimensions (picker subset)
pub const FREQUENTLY_USED_DIMENSIONS: &[DimensionEntry] = &[
    DimensionEntry::new("1525x1525", "02"),
    DimensionEntry::new("1220x2440", "03"),
    DimensionEntry::new("2440x1220", "04"),
    DimensionEntry::new("1250x2500", "05"),
    DimensionEntry::new("2500x1250", "06"),
    DimensionEntry::new("1500x2500", "07"),
    DimensionEntry::new("1500x3000", "12"),
    DimensionEntry::new("1525x3050", "11"),
    DimensionEntry::new("1525x3340", "90"),
    DimensionEntry::new("1525x3660", "76"),
    DimensionEntry::new("1250x3050", "29"),
    DimensionEntry::new("1250x3340", "98"),
    DimensionEntry::new("1250x3660", "94"),
    DimensionEntry::new("2150x3050", "62"),
    DimensionEntry::new("2150x3340", "57"),
    DimensionEntry::new("2150x3850", "27"),
    DimensionEntry::new("2150x4000", "75"),
];

/// Full dimension table used for code derivation
pub const ALL_DIMENSIONS: &[DimensionEntry] = &[
    DimensionEntry::new("1475x1475", "01"),
    DimensionEntry::new("1525x1525", "02"),
    DimensionEntry::new("1220x2440", "03"),
    DimensionEntry::new("2440x1220", "04"),
    DimensionEntry::new("1250x2500", "05"),
    DimensionEntry::new("2500x1250", "06"),
    DimensionEntry::new("1500x2500", "07"),
    DimensionEntry::new("2500x1500", "08"),
    DimensionEntry::new("1525x2500", "09"),
    DimensionEntry::new("2500x1525", "10"),
    DimensionEntry::new("1525x3050", "11"),
    DimensionEntry::new("1500x3000", "12"),
    DimensionEntry::new("1240x1240", "13"),
    DimensionEntry::new("1220x3050", "14"),
    DimensionEntry::new("1550x3000", "15"),
    DimensionEntry::new("1500x2400", "16"),
    DimensionEntry::new("1550x2500", "17"),
    DimensionEntry::new("1550x3080", "18"),
    DimensionEntry::new("1300x3050", "19"),
    DimensionEntry::new("2130x1250", "20"),
    DimensionEntry::new("1200x2500", "21"),
    DimensionEntry::new("1525x2440", "22"),
    DimensionEntry::new("1500x2700", "23"),
    DimensionEntry::new("1525x2230", "24"),
    DimensionEntry::new("1250x2230", "25"),
    DimensionEntry::new("2150x1250", "26"),
    DimensionEntry::new("2150x3850", "27"),
    DimensionEntry::new("1525x3000", "28"),
    DimensionEntry::new("1250x3050", "29"),
    DimensionEntry::new("1250x3000", "30"),
    DimensionEntry::new("1220x3000", "31"),
    DimensionEntry::new("1200x3000", "32"),
    DimensionEntry::new("1560x3080", "33"),
    DimensionEntry::new("1220x3080", "34"),
    DimensionEntry::new("1560x2750", "35"),
    DimensionEntry::new("2540x1270", "36"),
    DimensionEntry::new("1270x2540", "37"),
    DimensionEntry::new("1220x2400", "38"),
    DimensionEntry::new("1220x2500", "39"),
    DimensionEntry::new("1270x2550", "40"),
    DimensionEntry::new("1200x2700", "41"),
    DimensionEntry::new("1500x1500", "42"),
    DimensionEntry::new("1525x1475", "43"),
    DimensionEntry::new("1220x2700", "44"),
    DimensionEntry::new("1560x2500", "45"),
    DimensionEntry::new("2400x1220", "46"),
    DimensionEntry::new("1250x2440", "47"),
    DimensionEntry::new("1500x2499", "48"),
    DimensionEntry::new("2000x1500", "49"),
    DimensionEntry::new("1500x2100", "50"),
    DimensionEntry::new("1220x2750", "51"),
    DimensionEntry::new("1500x2750", "52"),
    DimensionEntry::new("1550x1550", "53"),
    DimensionEntry::new("2500x1220", "54"),
    DimensionEntry::new("1525x2745", "55"),
    DimensionEntry::new("1525x2750", "56"),
    DimensionEntry::new("2150x3340", "57"),
    DimensionEntry::new("1250x3030", "58"),
    DimensionEntry::new("1200x2440", "59"),
    DimensionEntry::new("1250x2750", "60"),
    DimensionEntry::new("1500x2600", "61"),
    DimensionEntry::new("2150x3050", "62"),
    DimensionEntry::new("1250x2700", "63"),
    DimensionEntry::new("1200x2400", "64"),
    DimensionEntry::new("1525x2150", "65"),
    DimensionEntry::new("1500x3300", "66"),
    DimensionEntry::new("1350x2700", "67"),
    DimensionEntry::new("1190x2676", "68"),
    DimensionEntry::new("2150x1525", "69"),
    DimensionEntry::new("1530x2230", "70"),
    DimensionEntry::new("1520x2200", "71"),
    DimensionEntry::new("625x2500", "72"),
    DimensionEntry::new("2400x1200", "73"),
    DimensionEntry::new("1110x2400", "74"),
    DimensionEntry::new("2150x4000", "75"),
    DimensionEntry::new("1525x3660", "76"),
    DimensionEntry::new("2290x4000", "77"),
    DimensionEntry::new("1200x3300", "78"),
    DimensionEntry::new("675x2500", "79"),
    DimensionEntry::new("1525x2700", "80"),
    DimensionEntry::new("1500x1220", "81"),
    DimensionEntry::new("1500x3600", "82"),
    DimensionEntry::new("1250x3300", "83"),
    DimensionEntry::new("1700x2500", "84"),
    DimensionEntry::new("1900x3850", "85"),
    DimensionEntry::new("1220x3660", "86"),
    DimensionEntry::new("1250x2800", "87"),
    DimensionEntry::new("1500x3660", "88"),
    DimensionEntry::new("1200x2750", "89"),
    DimensionEntry::new("1525x3340", "90"),
    DimensionEntry::new("1900x3340", "91"),
    DimensionEntry::new("1900x3050", "92"),
    DimensionEntry::new("1900x4000", "93"),
    DimensionEntry::new("1250x3660", "94"),
    DimensionEntry::new("1860x4000", "95"),
    DimensionEntry::new("1850x1525", "96"),
    DimensionEntry::new("2000x4000", "97"),
    DimensionEntry::new("1250x3340", "98"),
    DimensionEntry::new("1250x3600", "99"),
    DimensionEntry::new("2150x3660", "100"),
    DimensionEntry::new("1280x2550", "101"),
    DimensionEntry::new("1830x1525", "102"),
    DimensionEntry::new("2000x2500", "103"),
    DimensionEntry::new("1850x3660", "104"),
    DimensionEntry::new("2000x5400", "105"),
    DimensionEntry::new("1850x1220", "106"),
    DimensionEntry::new("1500x3050", "107"),
    DimensionEntry::new("1900x3000", "108"),
    DimensionEntry::new("1850x3050", "109"),
    DimensionEntry::new("1850x1250", "110"),
    DimensionEntry::new("2350x4150", "111"),
    DimensionEntry::new("1825x3340", "112"),
    DimensionEntry::new("1830x3660", "113"),
    DimensionEntry::new("1500x2570", "114"),
    DimensionEntry::new("1540x3065", "115"),
    DimensionEntry::new("1670x3305", "116"),
    DimensionEntry::new("1250x3075", "117"),
    DimensionEntry::new("1245x2465", "118"),
    DimensionEntry::new("1240x2450", "119"),
    DimensionEntry::new("1850x3340", "120"),
    DimensionEntry::new("1205x2500", "121"),
    DimensionEntry::new("1220x1830", "122"),
    // Duplicate of "67"; lookups return the first match.
    DimensionEntry::new("1350x2700", "123"),
    DimensionEntry::new("1190x3276", "124"),
    DimensionEntry::new("1326x3276", "125"),
    DimensionEntry::new("1500x3500", "126"),
    DimensionEntry::new("1545x3080", "127"),
    DimensionEntry::new("2750x1520", "128"),
    DimensionEntry::new("1540x3080", "129"),
    DimensionEntry::new("1350x2346", "130"),
    DimensionEntry::new("1350x2674", "131"),
    DimensionEntry::new("1250x2070", "132"),
    DimensionEntry::new("1500x2674", "133"),
    DimensionEntry::new("1500x320", "134"),
    DimensionEntry::new("2000x3850", "135"),
    DimensionEntry::new("1250x2455", "136"),
    DimensionEntry::new("2000x3000", "137"),
    DimensionEntry::new("1500x2440", "138"),
    DimensionEntry::new("1826x3070", "139"),
    DimensionEntry::new("1826x3670", "140"),
    DimensionEntry::new("2022x3047", "141"),
    DimensionEntry::new("2104x3511", "142"),
    DimensionEntry::new("1250x1990", "143"),
    DimensionEntry::new("1525x3300", "144"),
    DimensionEntry::new("1205x3020", "145"),
    DimensionEntry::new("1270x1525", "147"),
    DimensionEntry::new("1500x3340", "148"),
    DimensionEntry::new("1320x3050", "149"),
    DimensionEntry::new("1850x3100", "150"),
    DimensionEntry::new("1850x2700", "151"),
    DimensionEntry::new("1305x2875", "152"),
    DimensionEntry::new("1305x2525", "153"),
    DimensionEntry::new("2000x1250", "154"),
    DimensionEntry::new("1500x3365", "155"),
    DimensionEntry::new("1000x3000", "156"),
    DimensionEntry::new("1710x3000", "157"),
    DimensionEntry::new("1525x2464", "158"),
    DimensionEntry::new("2000x4150", "159"),
    DimensionEntry::new("1900x4150", "160"),
    DimensionEntry::new("1800x3050", "161"),
    DimensionEntry::new("1290x2500", "162"),
    DimensionEntry::new("1830x3340", "163"),
];

/// Most frequently used quality grades (picker subset)
///
/// Display texts here are the shop-floor spellings and do not always match
/// [`ALL_QUALITIES`] (e.g. `"BB/BB"` is `"BB"` in the full table).
pub const FREQUENTLY_USED_QUALITIES: &[QualityEntry] = &[
    QualityEntry::new("B/BB", "02"),
    QualityEntry::new("BB/BB", "04"),
    QualityEntry::new("BB/CP", "05"),
    QualityEntry::new("CP/C", "18"),
    QualityEntry::new("F/W", "14"),
    QualityEntry::new("F/F", "12"),
    QualityEntry::new("BB/WG", "06"),
    QualityEntry::new("CP", "07"),
    QualityEntry::new("WG", "09"),
    QualityEntry::new("F/W II", "15"),
    QualityEntry::new("F/F II", "13"),
    QualityEntry::new("C", "10"),
    QualityEntry::new("KILO", "11"),
];

/// Full quality table used for code derivation and display
pub const ALL_QUALITIES: &[QualityEntry] = &[
    QualityEntry::new("B", "01"),
    QualityEntry::new("B/BB", "02"),
    QualityEntry::new("S/BB", "03"),
    QualityEntry::new("BB", "04"),
    QualityEntry::new("BB/CP", "05"),
    QualityEntry::new("BB/WG", "06"),
    QualityEntry::new("CP", "07"),
    QualityEntry::new("WGE", "08"),
    QualityEntry::new("WG", "09"),
    QualityEntry::new("C", "10"),
    QualityEntry::new("KILO", "11"),
    QualityEntry::new("F/F I", "12"),
    QualityEntry::new("F/F II", "13"),
    QualityEntry::new("F/W I", "14"),
    QualityEntry::new("F/W II", "15"),
    QualityEntry::new("W/W I", "16"),
    QualityEntry::new("W/W II", "17"),
    QualityEntry::new("CP/C", "18"),
    QualityEntry::new("M/WG", "19"),
    QualityEntry::new("F/BB", "20"),
    QualityEntry::new("F/WG", "21"),
    QualityEntry::new("BB/C", "22"),
    QualityEntry::new("W/BB", "23"),
    QualityEntry::new("W/WG", "24"),
    QualityEntry::new("B/WG", "25"),
    QualityEntry::new("F/WH", "26"),
    QualityEntry::new("W/CP", "27"),
    QualityEntry::new("S/WG", "28"),
    QualityEntry::new("S/CP", "29"),
    QualityEntry::new("V/V", "30"),
];

/// Find the code for an exact dimension string, falling back to the input
pub fn find_dimension_code(value: &str) -> &str {
    ALL_DIMENSIONS
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.code)
        .unwrap_or(value)
}

/// Find the first quality entry matching `text` on display or code, ignoring case
pub fn find_quality_match(text: &str) -> Option<&'static QualityEntry> {
    ALL_QUALITIES.iter().find(|entry| entry.matches(text))
}

/// Resolve a quality code (or text) to its display form
///
/// Unknown values are returned unchanged.
pub fn quality_display_text(code_or_text: &str) -> &str {
    find_quality_match(code_or_text)
        .map(|entry| entry.display)
        .unwrap_or(code_or_text)
}
