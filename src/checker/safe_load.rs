// ABOUTME: Serde visitor that walks a YAML document without building it
// ABOUTME: Accepts repeated mapping keys and rejects tags that have no safe constructor

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// A fully visited node. Nothing of the document is kept.
pub struct Node;

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor).map(|()| Node)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<(), E> {
        Ok(())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<(), E> {
        Ok(())
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> Result<(), E> {
        Ok(())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<(), E> {
        Ok(())
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> Result<(), E> {
        Ok(())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<(), E> {
        Ok(())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<(), E> {
        Ok(())
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_none<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer).map(drop)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<Node>()?.is_some() {}
        Ok(())
    }

    // keys are never compared, so a repeated key is simply visited again
    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_key::<Node>()?.is_some() {
            map.next_value::<Node>()?;
        }
        Ok(())
    }

    // serde_yaml hands local tags (`!Ref`, `!python/...`) to the visitor as an
    // enum whose variant is the tag without its leading `!`
    fn visit_enum<A>(self, data: A) -> Result<(), A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, _contents): (String, _) = data.variant()?;
        Err(de::Error::custom(format!(
            "could not determine a constructor for the tag '!{}'",
            tag
        )))
    }
}
