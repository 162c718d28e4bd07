use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::Field;
use crate::errors::{KpgError, Result};

/// Decode value meaning "no decode tone configured".
pub const NO_TONE: &str = "None";

/// ChannelRecord - one normalized channel entry from an export
///
/// Values are kept as extracted (strings, no numeric typing). Records are
/// never deduplicated: two entries with the same name and frequencies are
/// two records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub zone_number: String,
    pub zone_name: String,
    pub channel_number: String,
    pub channel_name: String,
    pub tx_frequency: String,
    pub rx_frequency: String,
    pub encode_tone: String,
    pub decode_tone: String,
    pub channel_spacing: String,
    pub ptt_id: String,
    pub scan_add: String,
}

impl ChannelRecord {
    /// Build a record from the key/value pairs of one export entry.
    ///
    /// Keys are the vendor labels returned by [`Field::source_key`]. Extra
    /// keys are ignored.
    ///
    /// # Errors
    /// `MissingField` naming the first absent field and the entry index.
    pub fn from_source_fields(fields: &BTreeMap<String, String>, entry: usize) -> Result<Self> {
        let take = |field: Field| -> Result<String> {
            fields
                .get(field.source_key())
                .cloned()
                .ok_or_else(|| KpgError::MissingField {
                    field: field.source_key().to_string(),
                    entry,
                })
        };

        Ok(Self {
            zone_number: take(Field::ZoneNumber)?,
            zone_name: take(Field::ZoneName)?,
            channel_number: take(Field::ChannelNumber)?,
            channel_name: take(Field::ChannelName)?,
            tx_frequency: take(Field::TxFrequency)?,
            rx_frequency: take(Field::RxFrequency)?,
            encode_tone: take(Field::EncodeTone)?,
            decode_tone: take(Field::DecodeTone)?,
            channel_spacing: take(Field::ChannelSpacing)?,
            ptt_id: take(Field::PttId)?,
            scan_add: take(Field::ScanAdd)?,
        })
    }

    /// Build a record from values given in canonical column order.
    pub fn from_columns(values: [&str; 11]) -> Self {
        let [zone_number, zone_name, channel_number, channel_name, tx, rx, enc, dec, spacing, ptt, scan] =
            values;
        Self {
            zone_number: zone_number.to_string(),
            zone_name: zone_name.to_string(),
            channel_number: channel_number.to_string(),
            channel_name: channel_name.to_string(),
            tx_frequency: tx.to_string(),
            rx_frequency: rx.to_string(),
            encode_tone: enc.to_string(),
            decode_tone: dec.to_string(),
            channel_spacing: spacing.to_string(),
            ptt_id: ptt.to_string(),
            scan_add: scan.to_string(),
        }
    }

    /// Return a copy with one field replaced.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::ZoneNumber => self.zone_number = value,
            Field::ZoneName => self.zone_name = value,
            Field::ChannelNumber => self.channel_number = value,
            Field::ChannelName => self.channel_name = value,
            Field::TxFrequency => self.tx_frequency = value,
            Field::RxFrequency => self.rx_frequency = value,
            Field::EncodeTone => self.encode_tone = value,
            Field::DecodeTone => self.decode_tone = value,
            Field::ChannelSpacing => self.channel_spacing = value,
            Field::PttId => self.ptt_id = value,
            Field::ScanAdd => self.scan_add = value,
        }
        self
    }

    /// Value of a field by name.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ZoneNumber => &self.zone_number,
            Field::ZoneName => &self.zone_name,
            Field::ChannelNumber => &self.channel_number,
            Field::ChannelName => &self.channel_name,
            Field::TxFrequency => &self.tx_frequency,
            Field::RxFrequency => &self.rx_frequency,
            Field::EncodeTone => &self.encode_tone,
            Field::DecodeTone => &self.decode_tone,
            Field::ChannelSpacing => &self.channel_spacing,
            Field::PttId => &self.ptt_id,
            Field::ScanAdd => &self.scan_add,
        }
    }

    /// All values in canonical column order.
    pub fn columns(&self) -> [&str; 11] {
        Field::ALL.map(|field| self.get(field))
    }

    /// Transmit and receive frequencies are identical.
    pub fn is_simplex(&self) -> bool {
        self.tx_frequency == self.rx_frequency
    }

    pub fn comparison_key(&self) -> ComparisonKey {
        ComparisonKey::new(&self.zone_name, &self.channel_name)
    }

    /// Human-readable position, e.g. `Zone 3 (North)  Channel 12`.
    pub fn location(&self) -> String {
        format!(
            "Zone {} ({})  Channel {}",
            self.zone_number, self.zone_name, self.channel_number
        )
    }
}

/// Stable cross-file identity of a record: `<zone name>:<channel name>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonKey(String);

impl ComparisonKey {
    pub fn new(zone_name: &str, channel_name: &str) -> Self {
        Self(format!("{}:{}", zone_name, channel_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComparisonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_fields() -> BTreeMap<String, String> {
        let values = [
            "1", "North", "2", "Lincoln", "146.52", "146.52", "None", "None", "12.5", "101",
            "Yes",
        ];
        Field::ALL
            .iter()
            .zip(values)
            .map(|(f, v)| (f.source_key().to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_source_fields_maps_every_field() {
        let record = ChannelRecord::from_source_fields(&source_fields(), 0).unwrap();
        assert_eq!(record.channel_name, "Lincoln");
        assert_eq!(record.ptt_id, "101");
        assert_eq!(record.columns()[9], "101");
        assert!(record.is_simplex());
    }

    #[test]
    fn test_from_source_fields_rejects_missing_field() {
        let mut fields = source_fields();
        fields.remove("PTT ID (Analog)");
        let err = ChannelRecord::from_source_fields(&fields, 7).unwrap_err();
        assert_eq!(
            err,
            KpgError::MissingField {
                field: "PTT ID (Analog)".to_string(),
                entry: 7
            }
        );
    }

    #[test]
    fn test_comparison_key_and_location() {
        let record = ChannelRecord::from_source_fields(&source_fields(), 0).unwrap();
        assert_eq!(record.comparison_key().as_str(), "North:Lincoln");
        assert_eq!(record.location(), "Zone 1 (North)  Channel 2");
    }

    #[test]
    fn test_with_replaces_single_field() {
        let record = ChannelRecord::from_source_fields(&source_fields(), 0).unwrap();
        let changed = record.clone().with(Field::RxFrequency, "147.12");
        assert!(!changed.is_simplex());
        assert_eq!(changed.tx_frequency, record.tx_frequency);
    }
}
