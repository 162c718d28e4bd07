use serde::{Deserialize, Serialize};

/// One of the eleven normalized channel fields.
///
/// Declaration order is the canonical output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    ZoneNumber,
    ZoneName,
    ChannelNumber,
    ChannelName,
    TxFrequency,
    RxFrequency,
    EncodeTone,
    DecodeTone,
    ChannelSpacing,
    PttId,
    ScanAdd,
}

impl Field {
    /// All fields in canonical column order.
    pub const ALL: [Field; 11] = [
        Field::ZoneNumber,
        Field::ZoneName,
        Field::ChannelNumber,
        Field::ChannelName,
        Field::TxFrequency,
        Field::RxFrequency,
        Field::EncodeTone,
        Field::DecodeTone,
        Field::ChannelSpacing,
        Field::PttId,
        Field::ScanAdd,
    ];

    /// Label of the field in the vendor export (the `td` key text).
    pub fn source_key(&self) -> &'static str {
        match self {
            Field::ZoneNumber => "Zone Number",
            Field::ZoneName => "Zone Name",
            Field::ChannelNumber => "Channel Number",
            Field::ChannelName => "Channel Name",
            Field::TxFrequency => "Transmit Frequency [MHz]",
            Field::RxFrequency => "Receive Frequency [MHz]",
            Field::EncodeTone => "QT/DQT Encode",
            Field::DecodeTone => "QT/DQT Decode",
            Field::ChannelSpacing => "Channel Spacing (Analog) [kHz]",
            Field::PttId => "PTT ID (Analog)",
            Field::ScanAdd => "Scan Add",
        }
    }

    /// Short column header used in tabular output and diff summaries.
    pub fn column(&self) -> &'static str {
        match self {
            Field::ZoneNumber => "Zone#",
            Field::ZoneName => "Zone Name",
            Field::ChannelNumber => "Chan#",
            Field::ChannelName => "Channel Name",
            Field::TxFrequency => "TX",
            Field::RxFrequency => "RX",
            Field::EncodeTone => "Enc",
            Field::DecodeTone => "Dec",
            Field::ChannelSpacing => "Spacing",
            Field::PttId => "PTT ID",
            Field::ScanAdd => "Scan Add",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source_key())
    }
}
