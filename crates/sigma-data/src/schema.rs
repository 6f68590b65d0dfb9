//! Column names of the parsed datasets.

// Diary columns.
pub const DATE: &str = "date";
pub const MASK_TYPE: &str = "masktype";
pub const SHAVING: &str = "shaving";
pub const FACIAL_HYGIENE: &str = "facial_hygiene";
pub const MAKE_UP: &str = "make_up";
pub const TEMPERATURE: &str = "temperature";
pub const ENVIRONMENT: &str = "environment";
pub const SKIN_NOTE: &str = "note";
pub const ACNE: &str = "acne";
pub const STRESS_LEVEL: &str = "stress_level";
pub const SLEEP: &str = "sleep";
pub const SPO2_M1_RIGHT: &str = "spo2_m1_r";
pub const SPO2_M1_LEFT: &str = "spo2_m1_l";
pub const SPO2_M2_RIGHT: &str = "spo2_m2_r";
pub const SPO2_M2_LEFT: &str = "spo2_m2_l";
pub const SPO2_M3_RIGHT: &str = "spo2_m3_r";
pub const SPO2_M3_LEFT: &str = "spo2_m3_l";
pub const START: &str = "start";
pub const FINISH: &str = "finish";

/// Diary columns in file order.
pub const DIARY_COLUMNS: [&str; 19] = [
    DATE,
    MASK_TYPE,
    SHAVING,
    FACIAL_HYGIENE,
    MAKE_UP,
    TEMPERATURE,
    ENVIRONMENT,
    SKIN_NOTE,
    ACNE,
    STRESS_LEVEL,
    SLEEP,
    SPO2_M1_RIGHT,
    SPO2_M1_LEFT,
    SPO2_M2_RIGHT,
    SPO2_M2_LEFT,
    SPO2_M3_RIGHT,
    SPO2_M3_LEFT,
    START,
    FINISH,
];

/// SpO2 readings as `(right, left)` pairs for measurement moments 1 to 3.
pub const SPO2_MOMENTS: [(&str, &str); 3] = [
    (SPO2_M1_RIGHT, SPO2_M1_LEFT),
    (SPO2_M2_RIGHT, SPO2_M2_LEFT),
    (SPO2_M3_RIGHT, SPO2_M3_LEFT),
];

/// Diary columns holding numeric self-reports and readings.
pub const DIARY_NUMERIC_COLUMNS: [&str; 12] = [
    SHAVING,
    FACIAL_HYGIENE,
    MAKE_UP,
    ACNE,
    STRESS_LEVEL,
    SLEEP,
    SPO2_M1_RIGHT,
    SPO2_M1_LEFT,
    SPO2_M2_RIGHT,
    SPO2_M2_LEFT,
    SPO2_M3_RIGHT,
    SPO2_M3_LEFT,
];

// Barcode (sequencing) columns.
pub const SPECIES: &str = "species";
pub const BARCODE: &str = "barcode";
