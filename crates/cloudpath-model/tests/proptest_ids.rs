// SPDX-License-Identifier: Apache-2.0

use cloudpath_model::CertId;
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn cert_id_round_trips_through_json(raw in "[a-zA-Z0-9][a-zA-Z0-9_-]{0,40}") {
        let id = CertId::parse(&raw).expect("valid id");
        let json = serde_json::to_string(&id).expect("encode");
        let decoded: CertId = serde_json::from_str(&json).expect("decode");
        prop_assert_eq!(decoded.as_str(), raw.as_str());
        prop_assert!(id.eq_ignore_case(&raw.to_uppercase()));
    }

    #[test]
    fn padded_ids_are_rejected(raw in "[a-z0-9-]{1,20}") {
        let padded = format!(" {raw}");
        prop_assert!(CertId::parse(&padded).is_err());
    }
}
