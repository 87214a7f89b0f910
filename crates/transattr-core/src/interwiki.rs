//! Interlanguage link detection in edit summaries.
//!
//! A summary such as "Translated from [[:de:Beispiel]]" names its source with
//! the `lang:Title` interwiki prefix. Only the prefix is checked; whatever
//! follows the colon is not validated.

use std::sync::LazyLock;

use regex::Regex;

/// Wikipedia language editions usable as interwiki prefixes.
///
/// English is absent: an `en:` prefix never points at a foreign source.
pub const LANGUAGE_CODES: &[&str] = &[
    "aa", "ab", "ace", "ady", "af", "ak", "als", "alt", "am", "ami", "an", "ang", "ar", "arc",
    "ary", "arz", "as", "ast", "atj", "av", "avk", "awa", "ay", "az", "azb", "ba", "ban", "bar",
    "bat-smg", "bcl", "be", "be-tarask", "be-x-old", "bg", "bh", "bi", "bjn", "blk", "bm", "bn",
    "bo", "bpy", "br", "bs", "bug", "bxr", "ca", "cbk-zam", "cdo", "ce", "ceb", "ch", "cho",
    "chr", "chy", "ckb", "co", "cr", "crh", "cs", "csb", "cu", "cv", "cy", "da", "dag", "de",
    "din", "diq", "dsb", "dty", "dv", "dz", "ee", "el", "eml", "eo", "es", "et", "eu", "ext",
    "fa", "ff", "fi", "fiu-vro", "fj", "fo", "fr", "frp", "frr", "fur", "fy", "ga", "gag", "gan",
    "gcr", "gd", "gl", "glk", "gn", "gom", "gor", "got", "gu", "guw", "gv", "ha", "hak", "haw",
    "he", "hi", "hif", "ho", "hr", "hsb", "ht", "hu", "hy", "hyw", "hz", "ia", "id", "ie", "ig",
    "ii", "ik", "ilo", "inh", "io", "is", "it", "iu", "ja", "jam", "jbo", "jv", "ka", "kaa",
    "kab", "kbd", "kbp", "kcg", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "koi", "kr",
    "krc", "ks", "ksh", "ku", "kv", "kw", "ky", "la", "lad", "lb", "lbe", "lez", "lfn", "lg",
    "li", "lij", "lld", "lmo", "ln", "lo", "lrc", "lt", "ltg", "lv", "mad", "mai", "map-bms",
    "mdf", "mg", "mh", "mhr", "mi", "min", "mk", "ml", "mn", "mni", "mnw", "mo", "mr", "mrj",
    "ms", "mt", "mus", "mwl", "my", "myv", "mzn", "na", "nah", "nap", "nds", "nds-nl", "ne",
    "new", "ng", "nia", "nl", "nn", "no", "nov", "nqo", "nrm", "nso", "nv", "ny", "oc", "olo",
    "om", "or", "os", "pa", "pag", "pam", "pap", "pcd", "pcm", "pdc", "pfl", "pi", "pih", "pl",
    "pms", "pnb", "pnt", "ps", "pt", "pwn", "qu", "rm", "rmy", "rn", "ro", "roa-rup",
    "roa-tara", "ru", "rue", "rw", "sa", "sah", "sat", "sc", "scn", "sco", "sd", "se", "sg",
    "sh", "shi", "shn", "shy", "si", "simple", "sk", "skr", "sl", "sm", "smn", "sn", "so", "sq",
    "sr", "srn", "ss", "st", "stq", "su", "sv", "sw", "szl", "szy", "ta", "tay", "tcy", "te",
    "tet", "tg", "th", "ti", "tk", "tl", "tn", "to", "tpi", "tr", "trv", "ts", "tt", "tum", "tw",
    "ty", "tyv", "udm", "ug", "uk", "ur", "uz", "ve", "vec", "vep", "vi", "vls", "vo", "wa",
    "war", "wo", "wuu", "xal", "xh", "xmf", "yi", "yo", "yue", "za", "zea", "zh",
    "zh-classical", "zh-min-nan", "zh-yue", "zu",
];

/// A known code followed by a colon, case-insensitive.
///
/// The code must not follow an ASCII letter, digit or underscore. Other
/// characters, accented letters included, count as a boundary.
static INTERWIKI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:^|[^A-Za-z0-9_])({}):",
        LANGUAGE_CODES.join("|")
    ))
    .unwrap()
});

/// True when `summary` contains a known language code followed by a colon.
pub fn contains_interwiki_link(summary: &str) -> bool {
    interwiki_prefix(summary).is_some()
}

/// The first interwiki prefix in `summary`, as written.
pub fn interwiki_prefix(summary: &str) -> Option<&str> {
    INTERWIKI_PREFIX
        .captures(summary)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
