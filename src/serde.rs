use serde::{
    de::{Deserializer, Error, Visitor},
    Deserialize,
};
use std::{fmt::Display, marker::PhantomData, str::FromStr};

/// Deserializes anything that implements `FromStr`, for config values that come in as strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<T>(pub T);

struct ParsedVisitor<T> {
    _ty: PhantomData<T>,
}

impl<T, SE> Visitor<'_> for ParsedVisitor<T>
where
    SE: Display,
    T: FromStr<Err = SE>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("A parseable string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.trim().parse().map_err(Error::custom)
    }
}

impl<'de, T, SE> Deserialize<'de> for Parsed<T>
where
    SE: Display,
    T: FromStr<Err = SE>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_str(ParsedVisitor { _ty: PhantomData })
            .map(Self)
    }
}

#[test]
fn parses_log_levels() {
    #[derive(Deserialize)]
    struct Test {
        level: Parsed<tracing::Level>,
    }

    let parsed: Test =
        envy::from_iter(vec![("LEVEL".to_owned(), " debug ".to_owned())]).unwrap();
    assert_eq!(parsed.level.0, tracing::Level::DEBUG);

    assert!(envy::from_iter::<_, Test>(vec![("LEVEL".to_owned(), "loud".to_owned())]).is_err());
}
