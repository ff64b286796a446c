/// Plaintext password every fixture staff user is created with.
pub const TEST_PASSWORD: &str = "muster123";

pub const TEST_CREW_CODE: &str = "HGF-0001";
pub const TEST_CREW_NAME: &str = "Arief Santoso";
pub const TEST_VESSEL_NAME: &str = "MV Nordwind";
