//! Static registry tables.
//!
//! These tables are process-wide and read-only. Every [`Games`](crate::Games)
//! instance derives its effective entry set from them.
//!
//! - [`GAMES`] - canonical code to display name, in registry order
//! - [`COMMON_NAMES`] - friendlier display names for some codes
//! - [`OLD_NAMES`] - superseded names, consulted as translation fallbacks
//! - [`ALT_CODES`] - three-letter and numeric alternate codes
//! - [`LEGACY_CODES`] - codes retired from earlier releases of the table
//! - [`ioc`] - IOC-style franchise aliases

pub mod ioc;

/// Canonical game codes and display names.
pub static GAMES: &[(&str, &str)] = &[
    // World of Warcraft retail
    ("WOW", "World of Warcraft"),
    ("DFL", "World of Warcraft: Dragonflight"),
    ("TWW", "World of Warcraft: The War Within"),
    ("MDN", "World of Warcraft: Midnight"),
    ("TLT", "World of Warcraft: The Last Titan"),

    // World of Warcraft classic
    ("WOWC", "World of Warcraft Classic"),
    ("ERA", "World of Warcraft Classic Era"),
    ("HC", "World of Warcraft Classic Hardcore"),
    ("SOD", "World of Warcraft: Season of Discovery"),

    // Classic expansions
    ("TBCC", "World of Warcraft: The Burning Crusade Classic"),
    ("WOTLKC", "World of Warcraft: Wrath of the Lich King Classic"),
    ("CATAC", "World of Warcraft: Cataclysm Classic"),
    ("MOPC", "World of Warcraft: Mists of Pandaria Classic"),
    ("WODC", "World of Warcraft: Warlords of Draenor Classic"),
    ("LEGC", "World of Warcraft: Legion Classic"),

    // Private and special
    ("PRS", "World of Warcraft Private Server"),
    ("ANV", "World of Warcraft Classic Anniversary Edition"),

    // Diablo series
    ("D1", "Diablo"),
    ("D2R", "Diablo II: Resurrected"),
    ("D3", "Diablo III"),
    ("D4", "Diablo IV"),
    ("D4VH", "Diablo IV: Vessel of Hatred"),

    // MMORPGs
    ("AION", "Aion"),
    ("AIC", "Aion Classic"),
    ("ALB", "Albion Online"),
    ("AA", "ArcheAge"),
    ("AAW", "ArcheAge War"),
    ("BNS", "Blade & Soul"),
    ("BNS2", "Blade & Soul 2"),
    ("BDO", "Black Desert Online"),
    ("BDM", "Black Desert Mobile"),
    ("CO", "Conquer Online"),
    ("CORE", "Corepunk"),
    ("DAD", "Dark and Darker"),
    ("EVE", "EVE Online"),
    ("ESO", "The Elder Scrolls Online"),
    ("FFXIV", "Final Fantasy XIV: A Realm Reborn"),
    ("GE", "Granado Espada"),
    ("GW2", "Guild Wars 2"),
    ("LARK", "Lost Ark"),
    ("LEP", "Last Epoch"),
    ("L2", "Lineage II"),
    ("L2C", "Lineage II Classic"),
    ("SKY", "Minecraft: Hypixel SkyBlock"),
    ("MHW", "Monster Hunter Wilds"),
    ("MO2", "Mortal Online 2"),
    ("MOE", "Myth of Empires"),
    ("NST", "Neo Steam: The Shattered Continent"),
    ("NEW", "New World"),
    ("NWA", "New World: Aeternum"),
    ("PKMMO", "PokeMMO"),
    ("POE", "Path of Exile"),
    ("POE2", "Path of Exile 2"),
    ("RO", "Ragnarok Online"),
    ("RVD", "Ravendawn"),
    ("RS3", "RuneScape 3"),
    ("OSRS", "Old School RuneScape"),
    ("RPL", "Rappelz Online"),
    ("SRO", "Silkroad Online"),
    ("SWTOR", "Star Wars: The Old Republic"),
    ("TRS", "Tarisland"),
    ("TIB", "Tibia"),
    ("TL", "Throne and Liberty"),
    ("VR", "V Rising"),

    // Shooters, survival and action
    ("ABI", "Arena Breakout: Infinite"),
    ("APEX", "Apex Legends"),
    ("BS", "Brawl Stars"),
    ("COC", "Clash of Clans"),
    ("CR", "Clash Royale"),
    ("CS2", "Counter-Strike 2"),
    ("DBD", "Dead by Daylight"),
    ("D2", "Destiny 2"),
    ("DT", "Warhammer 40,000: Darktide"),
    ("EFT", "Escape from Tarkov"),
    ("FIN", "THE FINALS"),
    ("F76", "Fallout 76"),
    ("FH5", "Forza Horizon 5"),
    ("GEN", "Genshin Impact"),
    ("HSR", "Honkai: Star Rail"),
    ("HD", "Hay Day"),
    ("LOL", "League of Legends"),
    ("MS", "MapleStory"),
    ("NBA2K", "NBA 2K"),
    ("OH", "Once Human"),
    ("OW2", "Overwatch 2"),
    ("PAL", "Palworld"),
    ("PZ", "Project Zomboid"),
    ("QF", "The Quinfall"),
    ("REM2", "Remnant II"),
    ("RUST", "Rust"),
    ("SOT", "Sea of Thieves"),
    ("TF2", "Team Fortress 2"),
    ("TFD", "The First Descendant"),
    ("VAL", "VALORANT"),
    ("WF", "Warframe"),
    ("WW", "Wuthering Waves"),
    ("ZZZ", "Zenless Zone Zero"),

    // Legacy MMORPGs
    ("AQW", "AdventureQuest Worlds"),
    ("ROR", "Warhammer Online: Return of Reckoning"),
];

/// Friendly display names applied over [`GAMES`] when `common_names` is on.
pub static COMMON_NAMES: &[(&str, &str)] = &[
    ("WOW", "World of Warcraft"),
    ("POE", "Path of Exile"),
    ("ABI", "Arena Breakout Infinite"),
    ("BNS", "Blade and Soul"),
    ("DT", "Darktide"),
    ("ESO", "Elder Scrolls Online"),
    ("FFXIV", "Final Fantasy XIV Online"),
    ("SWTOR", "SWTOR"),
];

/// Superseded names (historical titles, betas, earlier editions), newest first.
pub static OLD_NAMES: &[(&str, &[&str])] = &[
    ("WOW", &["World of Warcraft Vanilla", "World of Warcraft Beta"]),
    ("POE", &["Path of Exile Closed Beta", "Path of Exile Legacy League"]),
    ("D2R", &["Diablo II", "Diablo II: Lord of Destruction"]),
    ("ESO", &["The Elder Scrolls Online: Tamriel Unlimited"]),
    ("GW2", &["Guild Wars", "Guild Wars Factions"]),
    ("RS3", &["RuneScape 2", "RuneScape HD"]),
    ("OSRS", &["RuneScape 2007"]),
    ("AION", &["Aion 1.x", "Aion 2.x"]),
];

/// Alternate codes: `(code, alpha3, numeric)`.
///
/// Numeric codes are grouped by family: 1xx Warcraft, 2xx Diablo, 3xx
/// MMORPGs, 4xx shooters and action games, 5xx legacy MMORPGs.
pub static ALT_CODES: &[(&str, &str, u16)] = &[
    ("WOW", "WOW", 100),
    ("DFL", "DFL", 101),
    ("TWW", "TWW", 102),
    ("MDN", "MDN", 103),
    ("TLT", "TLT", 104),
    ("WOWC", "CLA", 110),
    ("ERA", "ERA", 111),
    ("HC", "HDC", 112),
    ("SOD", "SOD", 113),
    ("TBCC", "TBC", 120),
    ("WOTLKC", "WLK", 121),
    ("CATAC", "CTC", 122),
    ("MOPC", "MPC", 123),
    ("WODC", "WDC", 124),
    ("LEGC", "LGC", 125),
    ("PRS", "PRS", 130),
    ("ANV", "ANV", 131),
    ("D1", "DIA", 200),
    ("D2R", "D2R", 201),
    ("D3", "DIT", 202),
    ("D4", "DIV", 203),
    ("D4VH", "VOH", 204),
    ("AION", "AIO", 300),
    ("AIC", "AIC", 301),
    ("ALB", "ALB", 302),
    ("AA", "ARA", 303),
    ("AAW", "AAW", 304),
    ("BNS", "BNS", 305),
    ("BNS2", "BN2", 306),
    ("BDO", "BDO", 307),
    ("BDM", "BDM", 308),
    ("CO", "CON", 309),
    ("CORE", "CRP", 310),
    ("DAD", "DAD", 311),
    ("EVE", "EVE", 312),
    ("ESO", "ESO", 313),
    ("FFXIV", "FFX", 314),
    ("GE", "GRE", 315),
    ("GW2", "GW2", 316),
    ("LARK", "LAR", 317),
    ("LEP", "LEP", 318),
    ("L2", "LN2", 319),
    ("L2C", "L2C", 320),
    ("SKY", "SKY", 321),
    ("MHW", "MHW", 322),
    ("MO2", "MO2", 323),
    ("MOE", "MOE", 324),
    ("NST", "NST", 325),
    ("NEW", "NEW", 326),
    ("NWA", "NWA", 327),
    ("PKMMO", "PKM", 328),
    ("POE", "POE", 329),
    ("POE2", "POT", 330),
    ("RO", "RAG", 331),
    ("RVD", "RVD", 332),
    ("RS3", "RS3", 333),
    ("OSRS", "OSR", 334),
    ("RPL", "RPL", 335),
    ("SRO", "SRO", 336),
    ("SWTOR", "SWT", 337),
    ("TRS", "TRS", 338),
    ("TIB", "TIB", 339),
    ("TL", "TNL", 340),
    ("VR", "VRI", 341),
    ("ABI", "ABI", 400),
    ("APEX", "APX", 401),
    ("BS", "BRS", 402),
    ("COC", "COC", 403),
    ("CR", "CRY", 404),
    ("CS2", "CS2", 405),
    ("DBD", "DBD", 406),
    ("D2", "DS2", 407),
    ("DT", "DKT", 408),
    ("EFT", "EFT", 409),
    ("FIN", "FIN", 410),
    ("F76", "F76", 411),
    ("FH5", "FH5", 412),
    ("GEN", "GEN", 413),
    ("HSR", "HSR", 414),
    ("HD", "HAY", 415),
    ("LOL", "LOL", 416),
    ("MS", "MPS", 417),
    ("NBA2K", "NBA", 418),
    ("OH", "ONH", 419),
    ("OW2", "OW2", 420),
    ("PAL", "PAL", 421),
    ("PZ", "PZD", 422),
    ("QF", "QNF", 423),
    ("REM2", "RM2", 424),
    ("RUST", "RST", 425),
    ("SOT", "SOT", 426),
    ("TF2", "TF2", 427),
    ("TFD", "TFD", 428),
    ("VAL", "VAL", 429),
    ("WF", "WFR", 430),
    ("WW", "WUW", 431),
    ("ZZZ", "ZZZ", 432),
    ("AQW", "AQW", 500),
    ("ROR", "ROR", 501),
];

/// Retired codes still accepted on input: `(legacy, code)`.
///
/// Consulted after direct and alternate-code hits, so a live code always
/// wins. A few entries map a code to itself and are kept for completeness.
pub static LEGACY_CODES: &[(&str, &str)] = &[
    // World of Warcraft expansions folded into retail
    ("WTB", "WOW"),
    ("WOT", "WOW"),
    ("CAT", "WOW"),
    ("MOP", "WOW"),
    ("WOD", "WOW"),
    ("LEG", "WOW"),
    ("BFA", "WOW"),
    ("SDL", "WOW"),
    ("DFL", "DFL"),
    ("MDN", "MDN"),
    ("TLT", "TLT"),

    // Classic
    ("CLASSIC", "WOWC"),
    ("WOWC", "WOWC"),
    ("CLA", "WOWC"),
    ("HDC", "HC"),
    ("WHC", "HC"),
    ("TBC", "TBCC"),
    ("WOTLK", "WOTLKC"),
    ("CATA", "CATAC"),
    ("WOWP", "PRS"),

    // Diablo
    ("DIA", "D1"),
    ("DIR", "D2R"),
    ("DIT", "D3"),
    ("DIV", "D4"),
    ("VOH", "D4VH"),
    ("D4VH", "D4VH"),

    // Everything else
    ("FF14", "FFXIV"),
    ("FFX", "FFXIV"),
    ("FF", "FFXIV"),
    ("VALO", "VAL"),
    ("APX", "APEX"),
    ("OVW", "OW2"),
    ("OW", "OW2"),
    ("CSR", "CS2"),
    ("LOSTARK", "LARK"),
    ("LA", "LARK"),
    ("LAR", "LARK"),
    ("LAK", "LARK"),
    ("PKM", "PKMMO"),
    ("POT", "POE2"),
    ("OSR", "OSRS"),
    ("RSC", "RS3"),
    ("TARI", "TRS"),
    ("LE", "LEP"),
    ("WOR", "ROR"),
    ("MO", "MO2"),
    ("CO1", "CO"),
    ("CO2", "CO"),
    ("PLW", "PAL"),
    ("T1D", "TFD"),
    ("NBA", "NBA2K"),
    ("2K", "NBA2K"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use games_core::{FxHashSet, fx_hash_set};

    fn canonical() -> FxHashSet<&'static str> {
        GAMES.iter().map(|(code, _)| *code).collect()
    }

    #[test]
    fn test_codes_are_unique_and_upper_case() {
        let codes = canonical();
        assert_eq!(codes.len(), GAMES.len());
        for code in &codes {
            assert_eq!(code.to_uppercase(), *code);
        }
    }

    #[test]
    fn test_every_game_has_alt_codes() {
        let alt: FxHashSet<&str> = ALT_CODES.iter().map(|(code, _, _)| *code).collect();
        assert_eq!(alt, canonical());
    }

    #[test]
    fn test_alt_codes_are_unique() {
        let mut alpha3 = fx_hash_set();
        let mut numeric = fx_hash_set();
        for (code, a3, num) in ALT_CODES {
            assert_eq!(a3.len(), 3, "{code}");
            assert!(alpha3.insert(*a3), "duplicate alpha3 {a3}");
            assert!(numeric.insert(*num), "duplicate numeric {num}");
        }
    }

    #[test]
    fn test_alpha3_never_shadows_another_code() {
        let codes = canonical();
        for (code, a3, _) in ALT_CODES {
            assert!(a3 == code || !codes.contains(a3), "{a3} shadows a code");
        }
    }

    #[test]
    fn test_overlay_tables_reference_known_codes() {
        let codes = canonical();
        for (code, _) in COMMON_NAMES {
            assert!(codes.contains(code), "{code}");
        }
        for (code, names) in OLD_NAMES {
            assert!(codes.contains(code), "{code}");
            assert!(!names.is_empty());
        }
    }

    #[test]
    fn test_legacy_codes_agree_with_live_tables() {
        let codes = canonical();
        for (legacy, code) in LEGACY_CODES {
            assert!(codes.contains(code), "{legacy} -> unknown {code}");
            assert!(legacy == code || !codes.contains(legacy), "{legacy} is a live code");
            let alt = ALT_CODES.iter().find(|(_, a3, _)| a3 == legacy);
            assert!(alt.is_none_or(|(target, _, _)| target == code), "{legacy} disagrees");
        }
    }

    #[test]
    fn test_display_names_are_unique() {
        let mut seen = fx_hash_set();
        for (_, name) in GAMES {
            assert!(seen.insert(name.to_lowercase()), "duplicate name {name}");
        }
    }
}
