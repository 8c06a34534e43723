/// Serde adapter for boolean flags which the backend encodes as 0/1 integers.
pub mod int_bool {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::custom(format!("invalid boolean flag {other}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Flag {
        #[serde(with = "super::int_bool")]
        read: bool,
    }

    #[test]
    fn test_int_bool_roundtrip() {
        let read: Flag = serde_json::from_str(r#"{"read":1}"#).expect("deserialize");
        assert_eq!(Flag { read: true }, read);
        let unread: Flag = serde_json::from_str(r#"{"read":0}"#).expect("deserialize");
        assert_eq!(Flag { read: false }, unread);
        assert_eq!(r#"{"read":1}"#, serde_json::to_string(&read).expect("serialize"));
    }

    #[test]
    fn test_int_bool_rejects_other_values() {
        assert!(serde_json::from_str::<Flag>(r#"{"read":2}"#).is_err());
    }
}
