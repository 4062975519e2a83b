/// Derive a best-effort API slug from a room title.
///
/// Trims, lowercases and turns each space into a hyphen. Punctuation is left
/// alone, so the slug may not match any real room.
pub fn slugify_room_name(room: &str) -> String {
    room.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify_room_name("Intro to Pentesting"), "intro-to-pentesting");
        assert_eq!(slugify_room_name("  Nmap  "), "nmap");
    }

    #[test]
    fn test_each_space_becomes_hyphen() {
        assert_eq!(slugify_room_name("Linux  Fundamentals"), "linux--fundamentals");
    }

    #[test]
    fn test_punctuation_is_kept() {
        assert_eq!(slugify_room_name("OWASP Top 10: 2021!"), "owasp-top-10:-2021!");
        assert_eq!(slugify_room_name(""), "");
    }
}
