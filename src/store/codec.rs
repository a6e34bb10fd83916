//! Binary encoding of the report list.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! [u64 record_count]
//! record_count times:
//!   [u64 id_len][id bytes]
//!   [u64 type_len][type bytes]
//!   [i64 generated_at]
//!   [u64 content_len][content bytes]
//! ```
//!
//! The format carries no magic, version or checksum. A truncated or
//! otherwise damaged file is only detected when a length prefix runs past
//! the end of the input.

use crate::errors::ReportError;
use crate::models::Report;

/// Smallest possible encoded record: three empty strings plus the timestamp.
const MIN_RECORD_SIZE: usize = 8 * 4;

pub fn encode(reports: &[Report]) -> Vec<u8> {
    let body: usize = reports
        .iter()
        .map(|r| MIN_RECORD_SIZE + r.id.len() + r.report_type.len() + r.content.len())
        .sum();
    let mut buf = Vec::with_capacity(8 + body);

    buf.extend_from_slice(&(reports.len() as u64).to_le_bytes());
    for report in reports {
        put_str(&mut buf, &report.id);
        put_str(&mut buf, &report.report_type);
        buf.extend_from_slice(&report.generated_at.to_le_bytes());
        put_str(&mut buf, &report.content);
    }
    buf
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Report>, ReportError> {
    let mut reader = Reader { bytes, pos: 0 };

    let count = reader.read_u64("record count")?;
    // A hostile count must not drive the allocation.
    let capacity = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(reader.remaining() / MIN_RECORD_SIZE);
    let mut reports = Vec::with_capacity(capacity);

    for index in 0..count {
        let id = reader.read_str("id", index)?;
        let report_type = reader.read_str("type", index)?;
        let generated_at = reader.read_i64("timestamp")?;
        let content = reader.read_str("content", index)?;
        reports.push(Report {
            id,
            report_type,
            generated_at,
            content,
        });
    }

    if reader.remaining() != 0 {
        return Err(ReportError::CorruptData(format!(
            "{} trailing bytes after {} records",
            reader.remaining(),
            count
        )));
    }

    Ok(reports)
}

fn put_str(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u64).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8], ReportError> {
        if len > self.remaining() {
            return Err(ReportError::CorruptData(format!(
                "{} needs {} bytes at offset {}, only {} left",
                what,
                len,
                self.pos,
                self.remaining()
            )));
        }
        let bytes = self.bytes;
        let slice = &bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_word(&mut self, what: &str) -> Result<[u8; 8], ReportError> {
        let mut word = [0u8; 8];
        word.copy_from_slice(self.take(8, what)?);
        Ok(word)
    }

    fn read_u64(&mut self, what: &str) -> Result<u64, ReportError> {
        self.read_word(what).map(u64::from_le_bytes)
    }

    fn read_i64(&mut self, what: &str) -> Result<i64, ReportError> {
        self.read_word(what).map(i64::from_le_bytes)
    }

    fn read_str(&mut self, field: &str, index: u64) -> Result<String, ReportError> {
        let what = format!("record {} {}", index, field);
        let len = self.read_u64(&what)?;
        let len = usize::try_from(len).map_err(|_| {
            ReportError::CorruptData(format!("{} length {} does not fit in memory", what, len))
        })?;
        let raw = self.take(len, &what)?;
        String::from_utf8(raw.to_vec())
            .map_err(|e| ReportError::CorruptData(format!("{} is not valid UTF-8: {}", what, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Report> {
        vec![
            Report::new("3800", "VENTAS", 1_717_171_717, "Total de ventas: Q30.00\n"),
            Report::new("3801", "INVENTARIO", -5, ""),
        ]
    }

    #[test]
    fn test_encode_empty_list_is_count_only() {
        assert_eq!(encode(&[]), 0u64.to_le_bytes().to_vec());
        assert!(decode(&encode(&[])).unwrap().is_empty());
    }

    #[test]
    fn test_encode_layout() {
        let bytes = encode(&[Report::new("3800", "AB", 7, "xyz")]);
        let mut expected = Vec::new();
        expected.extend_from_slice(&1u64.to_le_bytes());
        expected.extend_from_slice(&4u64.to_le_bytes());
        expected.extend_from_slice(b"3800");
        expected.extend_from_slice(&2u64.to_le_bytes());
        expected.extend_from_slice(b"AB");
        expected.extend_from_slice(&7i64.to_le_bytes());
        expected.extend_from_slice(&3u64.to_le_bytes());
        expected.extend_from_slice(b"xyz");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_decode_round_trip_with_multibyte_text() {
        let reports = vec![Report::new(
            "3802",
            "EVALUACIÓN",
            0,
            "Almacén: 1 - Zona 4\nCapacidad: 50 m²\n",
        )];
        assert_eq!(decode(&encode(&reports)).unwrap(), reports);
    }

    #[test]
    fn test_decode_empty_input_is_corrupt() {
        assert!(matches!(decode(&[]), Err(ReportError::CorruptData(_))));
    }

    #[test]
    fn test_decode_every_truncation_is_corrupt() {
        let bytes = encode(&sample());
        for cut in 0..bytes.len() {
            assert!(
                matches!(decode(&bytes[..cut]), Err(ReportError::CorruptData(_))),
                "truncation at {} was accepted",
                cut
            );
        }
    }

    #[test]
    fn test_decode_oversized_length_prefix() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(ReportError::CorruptData(_))));
    }

    #[test]
    fn test_decode_huge_count_does_not_allocate() {
        let bytes = u64::MAX.to_le_bytes();
        assert!(matches!(decode(&bytes), Err(ReportError::CorruptData(_))));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&2u64.to_le_bytes());
        bytes.extend_from_slice(&[0xff, 0xfe]);
        assert!(matches!(decode(&bytes), Err(ReportError::CorruptData(_))));
    }

    #[test]
    fn test_decode_trailing_bytes_rejected() {
        let mut bytes = encode(&sample());
        bytes.push(0);
        assert!(matches!(decode(&bytes), Err(ReportError::CorruptData(_))));
    }
}
