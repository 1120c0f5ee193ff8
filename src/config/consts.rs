// src/config/consts.rs

// Feed
pub const FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRjYETNmIABbU9kSn86fRD9p1v_TCcCXeTzC5qBRoMiAWgvO-HJeljEGgwy5H-dVCCkH5dDDlGEwhur/pub?gid=66268568&single=true&output=csv";
pub const CACHE_BUST_PARAM: &str = "cacheBust";
pub const REFRESH_INTERVAL_SECS: u64 = 120;
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Grouping tokens (normalized forms)
pub const UNASSIGNED_CONTRACT: &str = "Sin OM asignado";
pub const STATUS_EXPEDITED: &str = "expedida";
pub const STATUS_IN_PROCESS: &str = "en expedicion";
pub const STATUS_NOT_ISSUED: &str = "sin expedir";
pub const PAYMENT_YES: &str = "si";
pub const PAYMENT_NO: &str = "no";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DETAIL_FILE_PREFIX: &str = "Detalle_";
pub const FALLBACK_FILE_STEM: &str = "Sin_OM";
