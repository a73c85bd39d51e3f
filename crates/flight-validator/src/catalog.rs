//! Carrier and Airport Catalog
//!
//! Codes offered by the flight input form. Both lists are sorted so
//! membership is a binary search.

/// Airline codes
pub const CARRIER_CODES: [&str; 22] = [
    "AA", "AQ", "AS", "B6", "CO", "DH", "DL", "EV", "F9", "FL", "HA", "HP", "MQ", "NW", "OH",
    "OO", "TZ", "UA", "US", "WN", "XE", "YV",
];

/// Airport codes, shared by origin and destination
pub const AIRPORT_CODES: [&str; 291] = [
    "ABE", "ABI", "ABQ", "ABY", "ACK", "ACT", "ACV", "ACY", "ADK", "ADQ", "AEX", "AGS",
    "AKN", "ALB", "AMA", "ANC", "APF", "ASE", "ATL", "ATW", "AUS", "AVL", "AVP", "AZO",
    "BDL", "BET", "BFL", "BGM", "BGR", "BHM", "BIL", "BIS", "BLI", "BMI", "BNA", "BOI",
    "BOS", "BPT", "BQK", "BQN", "BRO", "BRW", "BTM", "BTR", "BTV", "BUF", "BUR", "BWI",
    "BZN", "CAE", "CAK", "CDC", "CDV", "CEC", "CHA", "CHO", "CHS", "CIC", "CID", "CLD",
    "CLE", "CLL", "CLT", "CMH", "CMI", "COD", "COS", "CPR", "CRP", "CRW", "CSG", "CVG",
    "CWA", "DAB", "DAL", "DAY", "DBQ", "DCA", "DEN", "DFW", "DHN", "DLG", "DLH", "DRO",
    "DSM", "DTW", "EGE", "EKO", "ELP", "ERI", "EUG", "EVV", "EWR", "EYW", "FAI", "FAR",
    "FAT", "FAY", "FCA", "FLG", "FLL", "FLO", "FNT", "FSD", "FSM", "FWA", "GEG", "GFK",
    "GGG", "GJT", "GNV", "GPT", "GRB", "GRK", "GRR", "GSO", "GSP", "GST", "GTF", "GTR",
    "GUC", "HDN", "HKY", "HLN", "HNL", "HOU", "HPN", "HRL", "HSV", "HTS", "HVN", "IAD",
    "IAH", "ICT", "IDA", "ILG", "ILM", "IND", "IPL", "ISO", "ISP", "ITO", "IYK", "JAC",
    "JAN", "JAX", "JFK", "JNU", "KOA", "KTN", "LAN", "LAS", "LAW", "LAX", "LBB", "LCH",
    "LEX", "LFT", "LGA", "LGB", "LIH", "LIT", "LNK", "LRD", "LSE", "LWB", "LWS", "LYH",
    "MAF", "MBS", "MCI", "MCN", "MCO", "MDT", "MDW", "MEI", "MEM", "MFE", "MFR", "MGM",
    "MHT", "MIA", "MKE", "MLB", "MLI", "MLU", "MOB", "MOD", "MOT", "MQT", "MRY", "MSN",
    "MSO", "MSP", "MSY", "MTJ", "MYR", "OAJ", "OAK", "OGG", "OKC", "OMA", "OME", "ONT",
    "ORD", "ORF", "OTZ", "OXR", "PBI", "PDX", "PFN", "PHF", "PHL", "PHX", "PIA", "PIE",
    "PIH", "PIT", "PNS", "PSC", "PSE", "PSG", "PSP", "PVD", "PWM", "RAP", "RDD", "RDM",
    "RDU", "RFD", "RIC", "RNO", "ROA", "ROC", "RST", "RSW", "SAN", "SAT", "SAV", "SBA",
    "SBN", "SBP", "SCC", "SCE", "SDF", "SEA", "SFO", "SGF", "SGU", "SHV", "SIT", "SJC",
    "SJT", "SJU", "SLC", "SMF", "SMX", "SNA", "SOP", "SPI", "SPS", "SRQ", "STL", "STT",
    "STX", "SUN", "SWF", "SYR", "TEX", "TLH", "TOL", "TPA", "TRI", "TTN", "TUL", "TUP",
    "TUS", "TVC", "TWF", "TXK", "TYR", "TYS", "VCT", "VIS", "VLD", "VPS", "WRG", "WYS",
    "XNA", "YAK", "YUM",
];

/// Month names, index + 1 is the month number
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, index + 1 is the day-of-week number (Monday = 1)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Check a carrier code against the catalog
pub fn is_known_carrier(code: &str) -> bool {
    CARRIER_CODES.binary_search(&code).is_ok()
}

/// Check an airport code against the catalog
pub fn is_known_airport(code: &str) -> bool {
    AIRPORT_CODES.binary_search(&code).is_ok()
}

/// Month number for a month name (case-insensitive)
pub fn month_from_name(name: &str) -> Option<u8> {
    position_of(&MONTH_NAMES, name)
}

/// Day-of-week number for a weekday name (case-insensitive)
pub fn weekday_from_name(name: &str) -> Option<u8> {
    position_of(&WEEKDAY_NAMES, name)
}

fn position_of(names: &[&str], name: &str) -> Option<u8> {
    let name = name.trim();
    names
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|idx| idx as u8 + 1)
}
