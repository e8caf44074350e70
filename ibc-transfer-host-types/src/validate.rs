use ibc_transfer_primitives::prelude::*;

use crate::error::IdentifierError as Error;
use crate::identifiers::ChannelId;

const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Checks if the identifier only contains valid characters as specified in the
/// [`ICS-24`](https://github.com/cosmos/ibc/tree/main/spec/core/ics-024-host-requirements#paths-identifiers-separators)
/// spec.
pub fn validate_identifier_chars(id: &str) -> Result<(), Error> {
    // Check that the identifier comprises only valid characters:
    // - Alphanumeric
    // - `.`, `_`, `+`, `-`, `#`
    // - `[`, `]`, `<`, `>`
    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::InvalidCharacter { id: id.into() });
    }

    // All good!
    Ok(())
}

/// Checks if the identifier forms a valid identifier with the given min/max length as specified in the
/// [`ICS-24`](https://github.com/cosmos/ibc/tree/main/spec/core/ics-024-host-requirements#paths-identifiers-separators)
/// spec.
pub fn validate_identifier_length(id: &str, min: u64, max: u64) -> Result<(), Error> {
    // Make sure min is at least one so we reject empty identifiers.
    let min = min.max(1);
    let length = id.len() as u64;
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            id: id.into(),
            min,
            max,
        })
    }
}

/// Checks if the identifier is a valid named u64 index: {name}-{u64}.
/// Example: "channel-0", "channel-100".
pub fn validate_named_u64_index(id: &str, name: &str) -> Result<(), Error> {
    let number_s = id
        .strip_prefix(name)
        .ok_or_else(|| Error::InvalidPrefix { prefix: id.into() })?
        .strip_prefix('-')
        .ok_or_else(|| Error::InvalidPrefix { prefix: id.into() })?;

    if number_s.starts_with('0') && number_s.len() > 1 {
        return Err(Error::InvalidPrefix { prefix: id.into() });
    }

    _ = number_s
        .parse::<u64>()
        .map_err(|_| Error::InvalidPrefix { prefix: id.into() })?;

    Ok(())
}

/// Default validator function for Port identifiers.
///
/// A valid port identifier must be between 2-128 characters as specified in the
/// ICS-24 spec.
pub fn validate_port_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 2, 128)
}

/// Default validator function for Channel identifiers.
///
/// A valid channel identifier must be between 8-64 characters as specified in
/// the ICS-24 spec.
pub fn validate_channel_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 8, 64)?;
    validate_named_u64_index(id, ChannelId::prefix())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn parse_invalid_port_id_min() {
        // invalid min port id
        let id = validate_port_identifier("p");
        assert!(id.is_err())
    }

    #[test]
    fn parse_invalid_port_id_max() {
        // invalid max port id (test string length is 130 chars)
        let id = validate_port_identifier(
            "9anxkcme6je544d5lnj46zqiiiygfqzf8w4bjecbnyj4lj6s7zlpst67yln64tixp9anxkcme6je544d5lnj46zqiiiygfqzf8w4bjecbnyj4lj6s7zlpst67yln64tixp",
        );
        assert!(id.is_err())
    }

    #[test]
    fn parse_invalid_channel_id_min() {
        // invalid channel id, must be at least 8 characters
        let id = validate_channel_identifier("channel");
        assert!(id.is_err())
    }

    #[test]
    fn parse_channel_id_max() {
        // invalid channel id (test string length is 65)
        let id = validate_channel_identifier(
            "ihhankr30iy4nna65hjl2wjod7182io1t2s7u3ip3wqtbbn1sl0rgcntqc540r36r",
        );
        assert!(id.is_err())
    }

    #[test]
    fn parse_valid_channel_id_indexed() {
        // valid channel id with index
        validate_channel_identifier("channel-0").expect("success");
        validate_channel_identifier("channel-123").expect("success");
        validate_channel_identifier("channel-18446744073709551615").expect("success");
    }

    #[test]
    fn parse_invalid_channel_id_non_indexed() {
        // invalid indexing for channel id
        validate_channel_identifier("channel-0123").expect_err("failure");
        validate_channel_identifier("channel0123").expect_err("failure");
        validate_channel_identifier("channel000").expect_err("failure");
        // 1 << 64 = 18446744073709551616
        validate_channel_identifier("channel-18446744073709551616").expect_err("failure");
    }

    #[test]
    fn parse_invalid_id_chars() {
        // invalid id chars
        let id = validate_identifier_chars("channel@01");
        assert!(id.is_err())
    }

    #[test]
    fn validate_chars_empty_id() {
        // validate_identifier_chars allows empty identifiers
        assert!(validate_identifier_chars("").is_ok());
    }

    #[test]
    fn validate_length_empty_id() {
        // validate_identifier_length does not allow empty identifiers
        assert!(validate_identifier_length("", 0, 64).is_err());
    }

    #[test]
    fn validate_min_gt_max_constraints() {
        // validate_identifier_length rejects the id if min > max.
        assert!(validate_identifier_length("foobar", 5, 3).is_err());
    }

    #[test]
    fn parse_invalid_id_path_separator() {
        // invalid id with path separator
        let id = validate_identifier_chars("id/1");
        assert!(id.is_err())
    }

    #[rstest]
    #[case::zero_padded("channel", "001", false)]
    #[case::only_zero("channel", "000", false)]
    #[case::zero("channel", "0", true)]
    #[case::one("channel", "1", true)]
    #[case::n1234("channel", "1234", true)]
    #[case::u64_max("chan", "18446744073709551615", true)]
    #[case::u64_max_plus_1("chan", "18446744073709551616", false)]
    fn test_named_index_validation(#[case] name: &str, #[case] id: &str, #[case] success: bool) {
        let result = validate_named_u64_index(format!("{name}-{id}").as_str(), name);
        assert_eq!(result.is_ok(), success, "{result:?}");
    }
}
