pub const GIVE_FOOD_API_URL: &str = "https://www.givefood.org.uk/api/2/foodbanks";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
