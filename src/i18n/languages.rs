//! Language code to English name table used in prompts

/// Codes known to the prompt builder. Unknown codes pass through verbatim.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("tr", "Turkish"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("fa", "Persian"),
    ("he", "Hebrew"),
    ("ur", "Urdu"),
    ("bn", "Bengali"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("mr", "Marathi"),
    ("gu", "Gujarati"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
    ("pa", "Punjabi"),
    ("si", "Sinhala"),
    ("ne", "Nepali"),
    ("my", "Burmese"),
    ("km", "Khmer"),
    ("lo", "Lao"),
    ("mn", "Mongolian"),
    ("uk", "Ukrainian"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("el", "Greek"),
    ("sv", "Swedish"),
    ("no", "Norwegian"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("is", "Icelandic"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("et", "Estonian"),
    ("hr", "Croatian"),
    ("sr", "Serbian"),
    ("bs", "Bosnian"),
    ("sl", "Slovenian"),
    ("mk", "Macedonian"),
    ("sq", "Albanian"),
    ("mt", "Maltese"),
    ("cy", "Welsh"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("eu", "Basque"),
    ("ca", "Catalan"),
    ("af", "Afrikaans"),
    ("sw", "Swahili"),
    ("zu", "Zulu"),
    ("xh", "Xhosa"),
    ("st", "Sesotho"),
    ("tn", "Tswana"),
    ("sn", "Shona"),
    ("so", "Somali"),
    ("am", "Amharic"),
    ("ha", "Hausa"),
    ("yo", "Yoruba"),
    ("ig", "Igbo"),
    ("mg", "Malagasy"),
    ("tl", "Tagalog"),
    ("mi", "Maori"),
    ("haw", "Hawaiian"),
    ("sm", "Samoan"),
    ("to", "Tongan"),
    ("fj", "Fijian"),
    ("ty", "Tahitian"),
    ("hy", "Armenian"),
    ("ka", "Georgian"),
    ("az", "Azerbaijani"),
    ("uz", "Uzbek"),
    ("kk", "Kazakh"),
    ("ky", "Kyrgyz"),
    ("tg", "Tajik"),
    ("tk", "Turkmen"),
    ("tt", "Tatar"),
    ("ug", "Uyghur"),
    ("bo", "Tibetan"),
    ("dz", "Dzongkha"),
    ("jv", "Javanese"),
    ("su", "Sundanese"),
    ("la", "Latin"),
    ("grc", "Ancient Greek"),
    ("sa", "Sanskrit"),
    ("yi", "Yiddish"),
    ("eo", "Esperanto"),
];

/// English name for a language code, if known
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Name to put in a prompt: the English name, or the code itself
pub fn display_name(code: &str) -> &str {
    language_name(code).unwrap_or(code)
}

/// All known codes
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    LANGUAGE_NAMES.iter().map(|(code, _)| *code)
}
