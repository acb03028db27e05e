/// Solver constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Largest difference between provided and calculated CP still treated
    /// as consistent when all three quantities are given.
    pub cp_tolerance: f64,
}

impl SolverConfig {
    // ===== fixed game rules =====
    pub const IV_MIN: u8 = 0;
    pub const IV_MAX: u8 = 15;
    /// Number of distinct IV values per stat.
    pub const IV_VALUES: usize = (Self::IV_MAX - Self::IV_MIN) as usize + 1;
    /// Size of the Search A space (every attack/defense/stamina triple).
    pub const IV_COMBINATIONS: usize = Self::IV_VALUES * Self::IV_VALUES * Self::IV_VALUES;
    /// CP is never reported below this value.
    pub const MIN_CP: u32 = 10;
    /// Candidates kept for ambiguity messages.
    pub const AMBIGUITY_SAMPLE: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CP_TOLERANCE: f64 = 1e-2;

    pub fn new() -> Self {
        Self {
            cp_tolerance: Self::DEFAULT_CP_TOLERANCE,
        }
    }

    pub fn with_cp_tolerance(cp_tolerance: f64) -> Self {
        Self { cp_tolerance }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
