//! Separation variant catalog
//!
//! Maps each supported variant to its ordered stem names. The enum is
//! closed and the catalog is an exhaustive match, so adding a variant is
//! a compile-time-checked change everywhere it matters.

use std::fmt;
use std::str::FromStr;

/// A named configuration selecting which and how many stems to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparationVariant {
    /// Vocals / accompaniment
    TwoStems,
    /// Vocals / drums / bass / other
    FourStems,
    /// Vocals / drums / bass / piano / other
    FiveStems,
}

impl SeparationVariant {
    /// All supported variants, in ascending stem count.
    pub const ALL: [SeparationVariant; 3] = [
        SeparationVariant::TwoStems,
        SeparationVariant::FourStems,
        SeparationVariant::FiveStems,
    ];

    /// Ordered stem names for this variant.
    ///
    /// The separation engine must return exactly these stems in exactly
    /// this order; output files are named after them.
    pub fn stem_names(&self) -> &'static [&'static str] {
        match self {
            SeparationVariant::TwoStems => &["vocals", "accompaniment"],
            SeparationVariant::FourStems => &["vocals", "drums", "bass", "other"],
            SeparationVariant::FiveStems => &["vocals", "drums", "bass", "piano", "other"],
        }
    }

    /// Number of stems this variant produces.
    #[inline]
    pub fn stem_count(&self) -> usize {
        self.stem_names().len()
    }
}

impl fmt::Display for SeparationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SeparationVariant::TwoStems => "2stems",
            SeparationVariant::FourStems => "4stems",
            SeparationVariant::FiveStems => "5stems",
        };
        f.write_str(token)
    }
}

impl FromStr for SeparationVariant {
    type Err = String;

    /// Parse a CLI variant token. Unknown tokens are rejected here, at
    /// the input-parsing boundary, before the pipeline runs.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "2stems" => Ok(SeparationVariant::TwoStems),
            "4stems" => Ok(SeparationVariant::FourStems),
            "5stems" => Ok(SeparationVariant::FiveStems),
            other => Err(format!(
                "invalid stem variant '{}' (use: 2stems, 4stems, or 5stems)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(SeparationVariant::TwoStems, 2; "two stems")]
    #[test_case(SeparationVariant::FourStems, 4; "four stems")]
    #[test_case(SeparationVariant::FiveStems, 5; "five stems")]
    fn test_stem_counts(variant: SeparationVariant, expected: usize) {
        assert_eq!(variant.stem_count(), expected);
        assert_eq!(variant.stem_names().len(), expected);
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(
            SeparationVariant::TwoStems.stem_names(),
            &["vocals", "accompaniment"]
        );
        assert_eq!(
            SeparationVariant::FourStems.stem_names(),
            &["vocals", "drums", "bass", "other"]
        );
        assert_eq!(
            SeparationVariant::FiveStems.stem_names(),
            &["vocals", "drums", "bass", "piano", "other"]
        );
    }

    #[test_case("2stems", SeparationVariant::TwoStems)]
    #[test_case("4stems", SeparationVariant::FourStems)]
    #[test_case("5stems", SeparationVariant::FiveStems)]
    fn test_parse_tokens(token: &str, expected: SeparationVariant) {
        assert_eq!(token.parse::<SeparationVariant>().unwrap(), expected);
        // Display renders the same token back
        assert_eq!(expected.to_string(), token);
    }

    #[test_case("3stems")]
    #[test_case("2Stems")]
    #[test_case("vocals")]
    #[test_case("")]
    fn test_parse_rejects_unknown(token: &str) {
        assert!(token.parse::<SeparationVariant>().is_err());
    }

    #[test]
    fn test_every_variant_has_unique_stem_names() {
        for variant in SeparationVariant::ALL {
            let names = variant.stem_names();
            let mut deduped: Vec<&str> = names.to_vec();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), names.len(), "{} has duplicate stems", variant);
            // Every variant isolates vocals
            assert_eq!(names[0], "vocals");
        }
    }
}
