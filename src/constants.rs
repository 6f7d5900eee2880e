//! File-layout constants and the fixed job-type category list.

/// Directory under the public root that holds uploaded logo assets.
pub const ASSET_DIR_NAME: &str = "image";

/// URL prefix under which stored assets are served.
pub const PUBLIC_ASSET_PREFIX: &str = "/image";

/// File name of the durable supplier list under the public root.
pub const LIST_FILE_NAME: &str = "suppliers.json";

/// Suffix appended to the list path for the sidecar advisory lock file.
pub const LOCK_FILE_SUFFIX: &str = ".lock";

/// Upper bound (inclusive) of the random component in generated asset names.
pub const ASSET_NONCE_MAX: u32 = 1_000_000_000;

/// The fixed service categories offered on the registration form.
///
/// Preserved verbatim (Thai labels) for compatibility with existing
/// `suppliers.json` data: mechanical, electrical, civil, administrative,
/// accounting, personnel, marketing, sales, IT.
pub const JOB_TYPES: &[&str] = &[
    "งานเครื่องกล",
    "งานไฟฟ้า",
    "งานโยธา",
    "งานธุรการ",
    "งานบัญชี",
    "งานบุคคล",
    "งานการตลาด",
    "งานขาย",
    "งานไอที",
];
