//! Display icons for well-known category names.

/// Icon used for categories without a dedicated entry.
pub const DEFAULT_ICON: &str = "🛠️";

const ICONS: &[(&str, &str)] = &[
    ("Training", "📚"),
    ("Documentation / Evidence Capture", "📑"),
    ("OpSec", "🔒"),
    ("Threat Intelligence", "🕵️‍♂️"),
    ("Exploits & Advisories", "⚠️"),
    ("Malicious File Analysis", "🛡️"),
    ("AI Tools", "🤖"),
    ("Tools", "🛠️"),
    ("Encoding / Decoding", "🔐"),
    ("Classifieds", "📢"),
    ("Digital Currency", "💸"),
    ("Dark Web", "🌑"),
    ("Terrorism", "🚨"),
    ("Mobile Emulation", "📱"),
    ("Metadata", "🔍"),
    ("Language Translation", "🌐"),
    ("Archives", "📦"),
    ("Forums / Blogs / IRC", "💬"),
    ("Search Engines", "🔎"),
    ("Geolocation Tools / Maps", "📍"),
    ("Transportation", "🚗"),
    ("Business Records", "🏢"),
    ("Public Records", "📜"),
    ("Telephone Numbers", "📞"),
    ("Dating", "❤️"),
    ("People Search Engines", "👥"),
    ("Instant Messaging", "💬"),
    ("Social Networks", "🌐"),
    ("Images / Videos / Docs", "🖼️"),
    ("IP & MAC Address", "🌐"),
    ("Domain Name", "🌍"),
    ("Email Address", "📧"),
    ("Username", "👤"),
];

/// Icon for a category name; exact, case-sensitive match.
pub fn category_icon(category: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_ICON, |(_, icon)| icon)
}
