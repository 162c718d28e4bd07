use kpgcheck_core::{ChannelRecord, Field};

/// Build a record with sensible defaults for every field
///
/// Defaults describe a duplex analog channel in zone 1.
#[allow(dead_code)]
pub fn channel(zone_name: &str, channel_name: &str) -> ChannelRecord {
    ChannelRecord::from_columns([
        "1",
        zone_name,
        "1",
        channel_name,
        "155.1000",
        "155.7000",
        "None",
        "None",
        "12.5",
        "Off",
        "Yes",
    ])
}

/// A simplex channel on `freq` with the given tones
#[allow(dead_code)]
pub fn simplex(channel_name: &str, freq: &str, enc: &str, dec: &str) -> ChannelRecord {
    channel("Simplex", channel_name)
        .with(Field::TxFrequency, freq)
        .with(Field::RxFrequency, freq)
        .with(Field::EncodeTone, enc)
        .with(Field::DecodeTone, dec)
}

/// Place a record at a zone/channel position
#[allow(dead_code)]
pub fn at(record: ChannelRecord, zone_number: &str, channel_number: &str) -> ChannelRecord {
    record
        .with(Field::ZoneNumber, zone_number)
        .with(Field::ChannelNumber, channel_number)
}
