use crate::vessel::VesselClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [VesselClass; NUM_SHIPS] = [
    VesselClass::new("CARRIER", 5),
    VesselClass::new("BATTLESHIP", 4),
    VesselClass::new("CRUISER", 3),
    VesselClass::new("SUBMARINE", 3),
    VesselClass::new("DESTROYER", 2),
];

/// Longest vessel in the standard fleet.
pub const MAX_VESSEL_LEN: usize = 5;

/// Total number of vessel segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

