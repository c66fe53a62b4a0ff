/// Versions in strictly ascending order.
///
/// Includes versions that are equal by the Debian rules but spelled differently
/// (`1.0`, `1.0-0`, `1.00`), which are ordered by their raw bytes.
pub const ASCENDING_VERSIONS: &[&str] = &[
    "0~",
    "0",
    "0.1",
    "0.9.2-5",
    "0.9.2+cvs.1.0.dev.2004.07.28-1.5",
    "1.0~beta1",
    "1.0~rc1",
    "1.0",
    "1.0-0",
    "1.00",
    "1.0-0.1",
    "1.0-1",
    "1.0-2",
    "1.0a7-2",
    "1.0final-5",
    "1.0final-5sarge1",
    "1.0pre7-2",
    "1.0.4-2",
    "1.2",
    "1.5~dev0",
    "1.5~rc1",
    "1.5",
    "1.5+b1",
    "1.9",
    "1.10",
    "1.11",
    "2.0",
    "1:0.1",
    "1:500",
    "1:5000",
    "2:0.1",
    "11:5000",
    "100:500",
];

/// Inputs that are not well-formed versions but still have to be ordered
pub const MALFORMED_VERSIONS: &[&str] = &[
    "", "-", ":", ":-", "--", "a:b", "~:", "-1:0", "1::2", "1.0-", "-1.0", " 1:0", "~", "~~", "+",
];
