//! Property test generators for link and text helpers
//!
//! Strategies produce base prefixes and fragments with and without slash noise,
//! plus free text for the slug and email helpers.

use proptest::prelude::*;

/// Generators for link building scenarios
pub struct LinkGenerators;

impl LinkGenerators {
    /// A single path segment without slashes
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9_-]{0,15}"
    }

    /// File names as they appear in asset links
    pub fn file_name() -> impl Strategy<Value = String> {
        (
            Self::segment(),
            prop_oneof![
                Just("css".to_string()),
                Just("png".to_string()),
                Just("webp".to_string()),
                Just("svg".to_string()),
                Just("js".to_string()),
            ],
        )
            .prop_map(|(name, ext)| format!("{}.{}", name, ext))
    }

    /// Clean page fragments such as `flores/rock-rose/`, possibly empty
    pub fn page_fragment() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 0..=3).prop_map(|segments| {
            segments
                .iter()
                .map(|s| format!("{}/", s))
                .collect::<String>()
        })
    }

    /// Clean asset fragments such as `styles/global.css`
    pub fn asset_fragment() -> impl Strategy<Value = String> {
        (prop::collection::vec(Self::segment(), 0..=2), Self::file_name()).prop_map(
            |(dirs, file)| {
                let mut parts = dirs;
                parts.push(file);
                parts.join("/")
            },
        )
    }

    /// Clean fragments of either kind
    pub fn clean_fragment() -> impl Strategy<Value = String> {
        prop_oneof![Self::page_fragment(), Self::asset_fragment()]
    }

    /// Clean base prefixes: `/` or `/a/b/`
    pub fn clean_base() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 0..=2).prop_map(|segments| {
            let mut base = String::from("/");
            for segment in segments {
                base.push_str(&segment);
                base.push('/');
            }
            base
        })
    }

    /// Number of extra slashes to add as noise
    pub fn slash_noise() -> impl Strategy<Value = usize> {
        0usize..4
    }

    /// Fragment paired with the same fragment carrying leading-slash noise
    pub fn noisy_fragment() -> impl Strategy<Value = (String, String)> {
        (Self::clean_fragment(), Self::slash_noise())
            .prop_map(|(clean, n)| (clean.clone(), format!("{}{}", "/".repeat(n), clean)))
    }

    /// Base paired with the same base carrying trailing-slash noise, or none
    pub fn noisy_base() -> impl Strategy<Value = (String, String)> {
        (Self::clean_base(), Self::slash_noise(), any::<bool>()).prop_map(
            |(clean, n, drop_slash)| {
                let trimmed = clean.trim_end_matches('/');
                let noisy = if drop_slash && !trimmed.is_empty() {
                    trimmed.to_string()
                } else {
                    format!("{}{}", clean, "/".repeat(n))
                };
                (clean, noisy)
            },
        )
    }

    /// Anything at all, for totality checks
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => ".*",
            2 => "[/a-z.]{0,20}",
            1 => Just(String::new()),
            1 => Just("///".to_string()),
        ]
    }
}

/// Generators for the text helpers
pub struct TextGenerators;

impl TextGenerators {
    /// Display names with mixed case, accents, punctuation and whitespace
    pub fn display_name() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Za-z0-9 ]{0,30}",
            "[A-Za-zÁÉÍÓÚáéíóúñ .()!@#-]{0,30}",
            Just("Star of Bethlehem".to_string()),
            Just("  Wild Oat  ".to_string()),
            Just("Álamo Temblón".to_string()),
        ]
    }

    /// Addresses shaped like `local@domain.tld`
    pub fn email_like() -> impl Strategy<Value = String> {
        ("[a-z0-9.+_]{1,12}", "[a-z0-9-]{1,12}", "[a-z]{1,6}")
            .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn clean_bases_are_rooted_and_slashed(base in LinkGenerators::clean_base()) {
            prop_assert!(base.starts_with('/'));
            prop_assert!(base.ends_with('/'));
            prop_assert!(!base.contains("//"));
        }

        #[test]
        fn clean_fragments_have_no_leading_slash(fragment in LinkGenerators::clean_fragment()) {
            prop_assert!(!fragment.starts_with('/'));
            prop_assert!(!fragment.contains("//"));
        }

        #[test]
        fn email_like_contains_one_at(email in TextGenerators::email_like()) {
            prop_assert_eq!(email.matches('@').count(), 1);
        }

        #[test]
        fn generators_dont_panic(_text in LinkGenerators::any_text(), _name in TextGenerators::display_name()) {
        }
    }
}
