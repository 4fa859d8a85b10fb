// Single source of truth for all default values.

// --- API ---
pub const DEFAULT_INSTANCE_URL: &str = "https://fritz.science";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_SECS: u64 = 30;

// --- Polling ---
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 120; // 2 minutes
pub const DEFAULT_LOOKBACK_DAYS: i64 = 1;
pub const DEFAULT_ERROR_RETRY_SECS: u64 = 10;
/// LRIS, KAST, SPRAT, SEDM, ALFOSC, DBSP, NGPS, GHTS.
/// TODO: add KCWI (1102) and Binospec (1076) once the model is validated on them.
pub const DEFAULT_INSTRUMENT_IDS: [i64; 8] = [7, 9, 35, 2, 26, 3, 1117, 1108];

// --- Model ---
pub const DEFAULT_MODEL_PATH: &str = "SpectraCNN1D_4650.onnx";
pub const DEFAULT_GRID_MIN_ANGSTROM: f64 = 3850.0;
pub const DEFAULT_GRID_MAX_ANGSTROM: f64 = 8500.0;
pub const DEFAULT_GRID_POINTS: usize = 4650;
pub const DEFAULT_INTRA_THREADS: usize = 2;

// --- Cache ---
pub const DEFAULT_CACHE_DIR: &str = "cache";
pub const DEFAULT_CACHE_FILENAME: &str = "processed_spectra.txt";

// --- Reporting ---
pub const DEFAULT_RESULTS_LOG: &str = "ml_results.log";
