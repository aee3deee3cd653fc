use winnow::{
    Parser,
    binary::le_u8,
    binary::le_u16,
    token::take,
    error::ContextError,
};
use crate::types::header::{CONFIG_NAME_LEN, SERIAL_NUMBER_LEN, ScanConfigHead};

/// Parses the common configuration head.
///
/// The head layout is as follows:
/// - 1 byte: scan type tag
/// - 1 little-endian u16: configuration index
/// - 8 bytes: device serial number
/// - 40 bytes: configuration name
pub fn parse_config_head(input: &mut &[u8]) -> Result<ScanConfigHead, ContextError> {
    let scan_type = le_u8.parse_next(input)?;
    let scan_config_index = le_u16.parse_next(input)?;
    let serial_number = take(SERIAL_NUMBER_LEN).parse_next(input)?;
    let config_name = take(CONFIG_NAME_LEN).parse_next(input)?;

    let head = ScanConfigHead::builder()
        .scan_type(scan_type)
        .scan_config_index(scan_config_index)
        .serial_number(
            serial_number
                .try_into()
                .expect("Serial number field should be 8 bytes"),
        )
        .config_name(
            config_name
                .try_into()
                .expect("Config name field should be 40 bytes"),
        )
        .build();
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::header::CONFIG_HEAD_LEN;

    #[test]
    fn parses_head_fields_and_leaves_the_tail() {
        let mut bytes = vec![1u8, 0x2A, 0x00];
        bytes.extend_from_slice(b"NANO0001");
        let mut name = [0u8; CONFIG_NAME_LEN];
        name[..5].copy_from_slice(b"grain");
        bytes.extend_from_slice(&name);
        bytes.extend_from_slice(&[0xFF, 0xFF]);

        let mut input = bytes.as_slice();
        let head = parse_config_head(&mut input).unwrap();

        assert_eq!(head.scan_type, 1);
        assert_eq!(head.scan_config_index, 42);
        assert_eq!(&head.serial_number, b"NANO0001");
        assert_eq!(head.config_name_str(), "grain");
        assert_eq!(input.len(), 2);
        assert_eq!(bytes.len() - input.len(), CONFIG_HEAD_LEN);
    }
}
