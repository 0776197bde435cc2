//! IOC-style franchise aliases.
//!
//! An IOC alias is a broad shorthand ("TBC", "LA") that resolves to exactly
//! one canonical code. Several aliases may point at the same code;
//! [`IOC_CODES`] names the one reported for each code.

/// Alias to canonical code.
pub static IOC_ALIASES: &[(&str, &str)] = &[
    ("WOW", "WOW"),
    ("WOW RETAIL", "WOW"),
    ("DFL", "DFL"),
    ("DRAGONFLIGHT", "DFL"),
    ("TWW", "TWW"),
    ("WARWITHIN", "TWW"),
    ("MDN", "MDN"),
    ("MIDNIGHT", "MDN"),
    ("TLT", "TLT"),
    ("TITAN", "TLT"),
    ("WOWC", "WOWC"),
    ("CLASSIC", "WOWC"),
    ("ERA", "ERA"),
    ("HC", "HC"),
    ("HARDCORE", "HC"),
    ("SOD", "SOD"),
    ("TBCC", "TBCC"),
    ("TBC", "TBCC"),
    ("WOTLKC", "WOTLKC"),
    ("CATAC", "CATAC"),
    ("MOPC", "MOPC"),
    ("WODC", "WODC"),
    ("LEGC", "LEGC"),
    ("PRS", "PRS"),
    ("ANV", "ANV"),
    ("DIABLO", "D1"),
    ("D1", "D1"),
    ("D2R", "D2R"),
    ("D3", "D3"),
    ("D4", "D4"),
    ("D4VH", "D4VH"),
    ("POE", "POE"),
    ("POE2", "POE2"),
    ("PO2", "POE2"),
    ("LARK", "LARK"),
    ("LOSTARK", "LARK"),
    ("LAK", "LARK"),
    ("LA", "LARK"),
    ("AION", "AION"),
    ("AIONC", "AIC"),
    ("AIC", "AIC"),
    ("ALB", "ALB"),
    ("AA", "AA"),
    ("AAW", "AAW"),
    ("BNS", "BNS"),
    ("BNS2", "BNS2"),
    ("BDO", "BDO"),
    ("BDM", "BDM"),
    ("CO", "CO"),
    ("CORE", "CORE"),
    ("DAD", "DAD"),
    ("EVE", "EVE"),
    ("ESO", "ESO"),
    ("FFXIV", "FFXIV"),
    ("GW2", "GW2"),
    ("RO", "RO"),
    ("RVD", "RVD"),
    ("RS3", "RS3"),
    ("OSRS", "OSRS"),
    ("RPL", "RPL"),
    ("SRO", "SRO"),
    ("SWTOR", "SWTOR"),
    ("TRS", "TRS"),
    ("TIB", "TIB"),
    ("TL", "TL"),
    ("VR", "VR"),
    ("ABI", "ABI"),
    ("APEX", "APEX"),
    ("BS", "BS"),
    ("COC", "COC"),
    ("CR", "CR"),
    ("CS2", "CS2"),
    ("DBD", "DBD"),
    ("DESTINY", "D2"),
    ("D2", "D2"),
    ("DT", "DT"),
    ("EFT", "EFT"),
    ("FIN", "FIN"),
    ("F76", "F76"),
    ("FH5", "FH5"),
    ("GEN", "GEN"),
    ("HSR", "HSR"),
    ("HD", "HD"),
    ("LOL", "LOL"),
    ("MS", "MS"),
    ("NBA2K", "NBA2K"),
    ("OH", "OH"),
    ("OW2", "OW2"),
    ("PAL", "PAL"),
    ("PZ", "PZ"),
    ("QF", "QF"),
    ("REM2", "REM2"),
    ("RUST", "RUST"),
    ("SOT", "SOT"),
    ("TF2", "TF2"),
    ("TFD", "TFD"),
    ("VAL", "VAL"),
    ("WF", "WF"),
    ("WW", "WW"),
    ("ZZZ", "ZZZ"),
    ("AQW", "AQW"),
    ("ROR", "ROR"),
];

/// Canonical code to its reported alias (the shortest one).
pub static IOC_CODES: &[(&str, &str)] = &[
    ("WOW", "WOW"),
    ("DFL", "DFL"),
    ("TWW", "TWW"),
    ("MDN", "MDN"),
    ("TLT", "TLT"),
    ("WOWC", "WOWC"),
    ("ERA", "ERA"),
    ("HC", "HC"),
    ("SOD", "SOD"),
    ("TBCC", "TBC"),
    ("WOTLKC", "WOTLKC"),
    ("CATAC", "CATAC"),
    ("MOPC", "MOPC"),
    ("WODC", "WODC"),
    ("LEGC", "LEGC"),
    ("PRS", "PRS"),
    ("ANV", "ANV"),
    ("D1", "D1"),
    ("D2R", "D2R"),
    ("D3", "D3"),
    ("D4", "D4"),
    ("D4VH", "D4VH"),
    ("AION", "AION"),
    ("AIC", "AIC"),
    ("ALB", "ALB"),
    ("AA", "AA"),
    ("AAW", "AAW"),
    ("BNS", "BNS"),
    ("BNS2", "BNS2"),
    ("BDO", "BDO"),
    ("BDM", "BDM"),
    ("CO", "CO"),
    ("CORE", "CORE"),
    ("DAD", "DAD"),
    ("EVE", "EVE"),
    ("ESO", "ESO"),
    ("FFXIV", "FFXIV"),
    ("GW2", "GW2"),
    ("LARK", "LA"),
    ("POE", "POE"),
    ("POE2", "PO2"),
    ("RO", "RO"),
    ("RVD", "RVD"),
    ("RS3", "RS3"),
    ("OSRS", "OSRS"),
    ("RPL", "RPL"),
    ("SRO", "SRO"),
    ("SWTOR", "SWTOR"),
    ("TRS", "TRS"),
    ("TIB", "TIB"),
    ("TL", "TL"),
    ("VR", "VR"),
    ("ABI", "ABI"),
    ("APEX", "APEX"),
    ("BS", "BS"),
    ("COC", "COC"),
    ("CR", "CR"),
    ("CS2", "CS2"),
    ("DBD", "DBD"),
    ("D2", "D2"),
    ("DT", "DT"),
    ("EFT", "EFT"),
    ("FIN", "FIN"),
    ("F76", "F76"),
    ("FH5", "FH5"),
    ("GEN", "GEN"),
    ("HSR", "HSR"),
    ("HD", "HD"),
    ("LOL", "LOL"),
    ("MS", "MS"),
    ("NBA2K", "NBA2K"),
    ("OH", "OH"),
    ("OW2", "OW2"),
    ("PAL", "PAL"),
    ("PZ", "PZ"),
    ("QF", "QF"),
    ("REM2", "REM2"),
    ("RUST", "RUST"),
    ("SOT", "SOT"),
    ("TF2", "TF2"),
    ("TFD", "TFD"),
    ("VAL", "VAL"),
    ("WF", "WF"),
    ("WW", "WW"),
    ("ZZZ", "ZZZ"),
    ("AQW", "AQW"),
    ("ROR", "ROR"),
];

/// Historical aliases still accepted from older imports.
pub static IOC_HISTORICAL: &[(&str, &str)] = &[
    ("WOWR", "DFL"),
    ("WOWCL", "WOWC"),
    ("WOWHC", "HC"),
    ("WOWSD", "SOD"),
    ("POEX", "POE"),
    ("DIAB", "D1"),
    ("DIIV", "D4"),
    ("AIONC", "AIC"),
    ("FF14", "FFXIV"),
    ("GWII", "GW2"),
];
