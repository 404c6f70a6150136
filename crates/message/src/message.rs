//! The `TestMessage` schema.

use std::fmt;

use prost::Message;

use crate::text::TextWriter;

/// The message produced by `toMyProtoMessage(STRUCT(word, CAST(word_count AS BIGNUMERIC)))`.
///
/// Equivalent to:
///
/// ```proto
/// message TestMessage {
///   string word = 1;
///   int64 word_count = 2;
/// }
/// ```
#[derive(Clone, PartialEq, Message)]
pub struct TestMessage {
    #[prost(string, tag = "1")]
    pub word: String,
    #[prost(int64, tag = "2")]
    pub word_count: i64,
}

/// Decode a payload against the `TestMessage` schema.
pub fn decode(payload: &[u8]) -> Result<TestMessage, prost::DecodeError> {
    TestMessage::decode(payload)
}

/// Renders the message in single-line protobuf text format, e.g. `word:"hamlet" word_count:95`.
impl fmt::Display for TestMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = TextWriter::new(f);
        writer.string_field("word", &self.word)?;
        writer.int_field("word_count", self.word_count)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn decodes_an_encoded_message() {
        let original = TestMessage {
            word: "hamlet".to_string(),
            word_count: 95,
        };
        let decoded = decode(&original.encode_to_vec()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn empty_payload_is_the_default_message() {
        let decoded = decode(&[]).unwrap();
        assert_eq!(decoded, TestMessage::default());
        assert!(decoded.to_string().is_empty());
    }

    #[test]
    fn truncated_payload_fails_to_decode() {
        // field 1, length-delimited, claims 5 bytes but carries 1
        let payload = [0x0a, 0x05, b'a'];
        assert!(decode(&payload).is_err());
    }

    #[test]
    fn wrong_wire_type_fails_to_decode() {
        // field 1 declared as varint, but `word` is a string
        let payload = [0x08, 0x01];
        assert!(decode(&payload).is_err());
    }

    #[test]
    fn renders_set_fields_in_tag_order() {
        let message = TestMessage {
            word: "the".to_string(),
            word_count: 995,
        };
        insta::assert_snapshot!(message.to_string(), @r#"word:"the" word_count:995"#);
    }

    #[test]
    fn omits_default_fields() {
        let only_word = TestMessage {
            word: "ay".to_string(),
            word_count: 0,
        };
        assert_eq!(only_word.to_string().as_str(), r#"word:"ay""#);

        let only_count = TestMessage {
            word: String::new(),
            word_count: -3,
        };
        assert_eq!(only_count.to_string().as_str(), "word_count:-3");
    }

    #[test]
    fn renders_strings_like_go_prototext() {
        let message = TestMessage {
            word: "o'er\u{1}\u{85}".to_string(),
            word_count: 1,
        };
        assert_eq!(
            message.to_string().as_str(),
            r#"word:"o'er\x01\u0085" word_count:1"#
        );
    }
}
