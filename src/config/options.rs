// src/config/options.rs
use super::consts::*;

/// Where a query goes. Always the fixed school in practice; the struct
/// exists so the client can be aimed at a local endpoint in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub endpoint: String,
    pub district_code: String,
    pub school_code: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(ENDPOINT),
            district_code: s!(DISTRICT_CODE),
            school_code: s!(SCHOOL_CODE),
        }
    }
}

impl QueryOptions {
    /// Query pairs for one lookup, in the order the API documents them.
    pub fn query_pairs<'a>(&'a self, api_date: &'a str) -> [(&'static str, &'a str); 4] {
        [
            (PARAM_DISTRICT, self.district_code.as_str()),
            (PARAM_SCHOOL, self.school_code.as_str()),
            (PARAM_DATE, api_date),
            (PARAM_FORMAT, RESPONSE_FORMAT),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_carry_fixed_codes_and_date() {
        let opts = QueryOptions::default();
        let pairs = opts.query_pairs("20240304");
        assert_eq!(pairs[0], ("ATPT_OFCDC_SC_CODE", "J10"));
        assert_eq!(pairs[1], ("SD_SCHUL_CODE", "7541012"));
        assert_eq!(pairs[2], ("MLSV_YMD", "20240304"));
        assert_eq!(pairs[3], ("Type", "json"));
    }
}
