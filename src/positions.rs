use phf::phf_map;

/// Role names for the five positions
static POSITION_LABELS: phf::Map<u8, &'static str> = phf_map! {
    1u8 => "Carry",
    2u8 => "Mid",
    3u8 => "Offlane",
    4u8 => "Soft Support",
    5u8 => "Hard Support",
};

/// Short role names used on filter chips
static POSITION_SHORT_LABELS: phf::Map<u8, &'static str> = phf_map! {
    1u8 => "Carry",
    2u8 => "Mid",
    3u8 => "Off",
    4u8 => "Pos4",
    5u8 => "Pos5",
};

/// Map a position number to its role name
pub fn position_label(position: u8) -> Option<&'static str> {
    POSITION_LABELS.get(&position).copied()
}

pub fn position_short_label(position: u8) -> Option<&'static str> {
    POSITION_SHORT_LABELS.get(&position).copied()
}
