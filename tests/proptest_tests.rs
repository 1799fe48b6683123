//! Property-based tests for field validation and the SOAP codec.
//!
//! Run with: `cargo test --test proptest_tests`

use paket::core::*;
use paket::core::{address, parcel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn name1_length_boundary(s in "\\PC{0,80}") {
        let mut builder = Address::builder();
        let result = builder.name1(s.clone());
        if s.chars().count() <= address::MAX_LENGTH_NAME1 {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.constraint, Constraint::MaxLength(address::MAX_LENGTH_NAME1));
        }
    }

    #[test]
    fn weight_ceiling(w in any::<u32>()) {
        let result = Parcel::builder().weight(w).map(|b| b.build());
        if w <= parcel::MAX_WEIGHT {
            prop_assert_eq!(result.unwrap().weight(), Some(w));
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn rejected_assignment_keeps_prior_value(
        good in "[A-Za-z ]{1,35}",
        bad in "[A-Za-z]{36,60}",
    ) {
        let mut b = Address::builder();
        b.street(good.clone()).unwrap();
        prop_assert!(b.street(bad).is_err());
        let built = b.build();
        prop_assert_eq!(built.street(), Some(good.as_str()));
    }

    #[test]
    fn country_accepts_exactly_two_upper_letters(s in "[A-Za-z]{1,4}") {
        let ok = s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase());
        prop_assert_eq!(Address::builder().country(s).is_ok(), ok);
    }

    #[test]
    fn delivery_days_keep_order(days in prop::collection::vec(0usize..7, 1..=10)) {
        let packed = days.iter().map(usize::to_string).collect::<Vec<_>>().join(",");
        let delivery = Delivery::builder().day(&packed).unwrap().build();
        let codes: Vec<&str> = delivery.day().iter().map(DeliveryDay::code).collect();
        prop_assert_eq!(codes.join(","), packed);
    }

    #[test]
    fn customs_papers_from_allowed_letters(s in "[A-I]{0,9}") {
        let international = International::builder().customs_paper(&s).unwrap().build();
        prop_assert_eq!(international.customs_paper().len(), s.len());
    }

    #[test]
    fn customs_paper_rejects_unknown_letters(s in "[A-I]{0,4}[J-Z][A-I]{0,4}") {
        prop_assert!(International::builder().customs_paper(&s).is_err());
    }

    #[test]
    fn proactive_rules_decompose_bitmask(rule in 0u8..=31) {
        let notification = ProactiveNotification::builder().rule(rule).unwrap().build();
        let sum: u8 = notification.rules().iter().map(ProactiveRule::bit).sum();
        prop_assert_eq!(sum, rule);
    }

    #[test]
    fn incremental_adds_stop_at_cap(extra in 1usize..5) {
        let mut b = ShipmentServiceData::builder();
        for _ in 0..paket::core::shipment::MAX_PARCELS {
            b.add_parcel(Parcel::default()).unwrap();
        }
        for _ in 0..extra {
            prop_assert!(b.add_parcel(Parcel::default()).is_err());
        }
        prop_assert_eq!(b.build().parcels().len(), paket::core::shipment::MAX_PARCELS);
    }
}

#[cfg(feature = "soap")]
mod soap {
    use paket::core::*;
    use paket::soap::{CallOutcome, XmlNode, decode_reply, tracking_envelope};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decoder_never_panics(input in "\\PC{0,200}") {
            let _ = decode_reply::<Login>(&input, "getAuthResponse", "return");
        }

        #[test]
        fn envelope_text_is_escaped(token in "[ -~]{1,64}") {
            let auth = Authentication::new("sandboxdpd", token.clone(), "de_DE").unwrap();
            let request = GetTrackingData::new("09981122334455").unwrap();
            let xml = tracking_envelope(&auth, &request).unwrap();
            let root = XmlNode::parse(&xml).unwrap();
            let header = root.child("Header").and_then(|h| h.child("authentication")).unwrap();
            prop_assert_eq!(header.text_of("authToken"), Some(token.trim().to_string()));
        }

        #[test]
        fn fault_detail_always_maps(code in "[A-Z_0-9]{1,12}", message in "[a-zA-Z .]{1,40}") {
            let xml = format!(
                "<Envelope><Body><Fault><faultcode>soap:Server</faultcode>\
                 <detail><authenticationFault><errorCode>{code}</errorCode>\
                 <errorMessage>{message}</errorMessage></authenticationFault></detail>\
                 </Fault></Body></Envelope>"
            );
            let outcome = decode_reply::<Login>(&xml, "getAuthResponse", "return").unwrap();
            let expected = AuthenticationFault::new(code, message.trim());
            prop_assert_eq!(outcome, CallOutcome::AuthenticationFault(expected));
        }
    }
}
