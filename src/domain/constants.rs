pub const NOT_INDICATED: &str = "Not indicated";

pub const EXPORT_TITLE: &str = "Kawasaki Disease Plan";

pub const SOURCE_NOTE: &str = "Adapted from AHA Kawasaki Disease long-term management guidance (Table 2). Use clinical judgment and patient-specific factors.";

pub const DISCLAIMER: &str =
    "This tool is for education and quick reference. It does not replace guidelines or individualized care.";

pub const CONFIG_ENV: &str = "KDPLAN_CONFIG";
