use std::fmt::{Formatter, Result as FmtResult};

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single plural-range rule: an inclusive/open count range and its template.
///
/// Rules are evaluated in list order; the first rule whose range contains the
/// count wins. An absent bound leaves that side of the range open:
///
/// - `low` and `high` both present: matches `low <= count <= high`.
/// - `low` only: matches `count >= low` ("N or more").
/// - `high` only: matches `count <= high`.
/// - Neither bound: matches only an *absent* count.
///
/// # Example
///
/// ```
/// use idiom::PluralRule;
///
/// let rule = PluralRule::new(2, None, "%n comments");
/// assert!(rule.matches(Some(2)));
/// assert!(rule.matches(Some(10)));
/// assert!(!rule.matches(Some(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    /// Inclusive lower bound, or open when absent.
    pub low: Option<i64>,
    /// Inclusive upper bound, or open when absent.
    pub high: Option<i64>,
    /// Template text, with `%n` / `-%n` still unsubstituted.
    pub text: String,
}

impl PluralRule {
    /// Create a rule from bounds and template text.
    ///
    /// Bounds accept either a plain integer or `None` for an open bound.
    pub fn new(
        low: impl Into<Option<i64>>,
        high: impl Into<Option<i64>>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
            text: text.into(),
        }
    }

    /// Check whether this rule's range contains `count`.
    ///
    /// A fully open rule (no bounds) matches only an absent count; a rule with
    /// any bound never matches an absent count.
    pub fn matches(&self, count: Option<i64>) -> bool {
        match (count, self.low, self.high) {
            (None, None, None) => true,
            (None, _, _) | (Some(_), None, None) => false,
            (Some(n), Some(low), None) => n >= low,
            (Some(n), Some(low), Some(high)) => n >= low && n <= high,
            (Some(n), None, Some(high)) => n <= high,
        }
    }
}

impl Serialize for PluralRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.low)?;
        seq.serialize_element(&self.high)?;
        seq.serialize_element(&self.text)?;
        seq.end()
    }
}

/// Deserializes a `[low, high, text]` triple permissively: a bound that is not
/// an integer (null, float, string, ...) becomes an open bound, non-string
/// text becomes empty, missing trailing elements default, and extra elements
/// are ignored. Malformed rule data degrades instead of failing.
impl<'de> Deserialize<'de> for PluralRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleVisitor;

        impl<'de> Visitor<'de> for RuleVisitor {
            type Value = PluralRule;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a [low, high, text] plural rule triple")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<PluralRule, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let low = seq.next_element::<LooseBound>()?.and_then(|b| b.0);
                let high = seq.next_element::<LooseBound>()?.and_then(|b| b.0);
                let text = seq
                    .next_element::<LooseText>()?
                    .map(|t| t.0)
                    .unwrap_or_default();
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(PluralRule { low, high, text })
            }
        }

        deserializer.deserialize_seq(RuleVisitor)
    }
}

/// A range bound that tolerates any input shape: integers are kept, everything
/// else collapses to an open bound.
struct LooseBound(Option<i64>);

impl<'de> Deserialize<'de> for LooseBound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoundVisitor;

        impl<'de> Visitor<'de> for BoundVisitor {
            type Value = LooseBound;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("an integer bound or any non-integer value")
            }

            fn visit_i64<E>(self, v: i64) -> Result<LooseBound, E>
            where
                E: de::Error,
            {
                Ok(LooseBound(Some(v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<LooseBound, E>
            where
                E: de::Error,
            {
                Ok(LooseBound(i64::try_from(v).ok()))
            }

            fn visit_f64<E>(self, _: f64) -> Result<LooseBound, E>
            where
                E: de::Error,
            {
                Ok(LooseBound(None))
            }

            fn visit_bool<E>(self, _: bool) -> Result<LooseBound, E>
            where
                E: de::Error,
            {
                Ok(LooseBound(None))
            }

            fn visit_str<E>(self, _: &str) -> Result<LooseBound, E>
            where
                E: de::Error,
            {
                Ok(LooseBound(None))
            }

            fn visit_unit<E>(self) -> Result<LooseBound, E>
            where
                E: de::Error,
            {
                Ok(LooseBound(None))
            }

            fn visit_none<E>(self) -> Result<LooseBound, E>
            where
                E: de::Error,
            {
                Ok(LooseBound(None))
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<LooseBound, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                LooseBound::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<LooseBound, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LooseBound(None))
            }

            fn visit_map<A>(self, mut map: A) -> Result<LooseBound, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(LooseBound(None))
            }
        }

        deserializer.deserialize_any(BoundVisitor)
    }
}

/// A template slot that tolerates any input shape: strings are kept, anything
/// else collapses to the empty template.
struct LooseText(String);

impl<'de> Deserialize<'de> for LooseText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextVisitor;

        impl<'de> Visitor<'de> for TextVisitor {
            type Value = LooseText;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a template string or any non-string value")
            }

            fn visit_str<E>(self, v: &str) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(v))
            }

            fn visit_i64<E>(self, _: i64) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(String::new()))
            }

            fn visit_u64<E>(self, _: u64) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(String::new()))
            }

            fn visit_f64<E>(self, _: f64) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(String::new()))
            }

            fn visit_bool<E>(self, _: bool) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(String::new()))
            }

            fn visit_unit<E>(self) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(String::new()))
            }

            fn visit_none<E>(self) -> Result<LooseText, E>
            where
                E: de::Error,
            {
                Ok(LooseText(String::new()))
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<LooseText, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                LooseText::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<LooseText, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LooseText(String::new()))
            }

            fn visit_map<A>(self, mut map: A) -> Result<LooseText, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(LooseText(String::new()))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}
