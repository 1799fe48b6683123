//! Boundary values for every kind of field constraint.

use chrono::NaiveDate;
use paket::core::*;
use paket::core::{address, international, parcel, services, shipment};
use rust_decimal_macros::dec;

fn chars(n: usize) -> String {
    "x".repeat(n)
}

// ---------------------------------------------------------------------------
// Lengths
// ---------------------------------------------------------------------------

#[test]
fn address_lengths() {
    let mut b = Address::builder();
    assert!(b.name1(chars(address::MAX_LENGTH_NAME1)).is_ok());
    assert!(b.name1(chars(address::MAX_LENGTH_NAME1 + 1)).is_err());
    assert!(b.name2(chars(address::MAX_LENGTH_NAME2)).is_ok());
    assert!(b.name2(chars(address::MAX_LENGTH_NAME2 + 1)).is_err());
    assert!(b.street(chars(35)).is_ok());
    assert!(b.street(chars(36)).is_err());
    assert!(b.house_no(chars(8)).is_ok());
    assert!(b.house_no(chars(9)).is_err());
    assert!(b.zip_code(chars(9)).is_ok());
    assert!(b.zip_code(chars(10)).is_err());
    assert!(b.city(chars(50)).is_ok());
    assert!(b.city(chars(51)).is_err());
    assert!(b.customer_number(chars(17)).is_ok());
    assert!(b.customer_number(chars(18)).is_err());
    assert!(b.comment(chars(70)).is_ok());
    assert!(b.comment(chars(71)).is_err());
    assert!(b.iaccount(chars(50)).is_ok());
    assert!(b.iaccount(chars(51)).is_err());
}

#[test]
fn lengths_count_characters_not_bytes() {
    let umlauts = "ä".repeat(address::MAX_LENGTH_NAME1);
    assert!(umlauts.len() > address::MAX_LENGTH_NAME1);
    assert!(Address::builder().name1(umlauts).is_ok());
}

#[test]
fn length_error_names_field_and_limit() {
    let err = Address::builder().house_no("123456789").unwrap_err();
    assert_eq!(err.field, "houseNo");
    assert_eq!(err.constraint, Constraint::MaxLength(8));
}

#[test]
fn parcel_lengths() {
    let mut b = Parcel::builder();
    assert!(b.content(chars(parcel::MAX_LENGTH_CONTENT)).is_ok());
    assert!(b.content(chars(parcel::MAX_LENGTH_CONTENT + 1)).is_err());
    assert!(b.info1(chars(29)).is_ok());
    assert!(b.info1(chars(30)).is_err());
    assert!(b.info2(chars(30)).is_ok());
    assert!(b.info2(chars(31)).is_err());
    assert!(b.parameter(chars(300)).is_ok());
    assert!(b.parameter(chars(301)).is_err());
}

#[test]
fn shipment_lengths() {
    let mut b = GeneralShipmentData::builder();
    assert!(b.mps_id(chars(shipment::MAX_LENGTH_MPS_ID)).is_ok());
    assert!(b.mps_id(chars(shipment::MAX_LENGTH_MPS_ID + 1)).is_err());
    assert!(b.c_user(chars(10)).is_ok());
    assert!(b.c_user(chars(11)).is_err());
    assert!(b.identification_number(chars(999)).is_ok());
    assert!(b.identification_number(chars(1000)).is_err());
}

#[test]
fn country_registration_number_is_fifteen() {
    let mut b = International::builder();
    assert!(b.country_registration_number(chars(15)).is_ok());
    assert!(b.country_registration_number(chars(16)).is_err());
}

#[test]
fn box_tan_and_pudo_id() {
    assert!(Pickup::builder().box_tan("123456").is_ok());
    assert!(Pickup::builder().box_tan("1234567").is_err());
    assert!(ParcelShopDelivery::builder().parcel_shop_pudo_id(chars(20)).is_ok());
    assert!(ParcelShopDelivery::builder().parcel_shop_pudo_id(chars(21)).is_err());
}

// ---------------------------------------------------------------------------
// Numeric ceilings
// ---------------------------------------------------------------------------

#[test]
fn parcel_weight_and_volume() {
    let mut b = Parcel::builder();
    assert!(b.weight(parcel::MAX_WEIGHT).is_ok());
    assert!(b.weight(parcel::MAX_WEIGHT + 1).is_err());
    assert!(b.volume(parcel::MIN_VOLUME).is_ok());
    assert!(b.volume(parcel::MIN_VOLUME - 1).is_err());
    assert!(b.volume(parcel::MAX_VOLUME).is_ok());
    assert!(b.volume(parcel::MAX_VOLUME + 1).is_err());
    assert!(b.message_number(99_999).is_ok());
    assert!(b.message_number(100_000).is_err());
}

#[test]
fn gln_and_business_unit() {
    assert!(Address::builder().gln(address::MAX_GLN).is_ok());
    assert!(Address::builder().gln(address::MAX_GLN + 1).is_err());

    let addr = Address::builder().build();
    let mut b = AddressWithType::builder(addr.clone());
    assert!(b.business_unit(address::MAX_BUSINESS_UNIT).is_ok());
    assert!(b.business_unit(address::MAX_BUSINESS_UNIT + 1).is_err());
    let mut b = AddressWithBusinessUnit::builder(addr);
    assert!(b.business_unit(999).is_ok());
    assert!(b.business_unit(1000).is_err());
}

#[test]
fn customs_amounts() {
    let mut b = International::builder();
    assert!(b.customs_amount(international::MAX_CUSTOMS_AMOUNT).is_ok());
    assert!(b.customs_amount(international::MAX_CUSTOMS_AMOUNT + 1).is_err());
    assert!(b.number_of_article(99).is_ok());
    assert!(b.number_of_article(100).is_err());

    let mut line = AdditionalInvoiceLine::builder();
    assert!(line.customs_origin(999).is_ok());
    assert!(line.customs_origin(1000).is_err());
    assert!(line.quantity_items(9_999).is_ok());
    assert!(line.quantity_items(10_000).is_err());
}

#[test]
fn insurance_amount() {
    assert!(HigherInsurance::new(parcel::MAX_INSURANCE_AMOUNT, "EUR").is_ok());
    assert!(HigherInsurance::new(parcel::MAX_INSURANCE_AMOUNT + 1, "EUR").is_err());
}

#[test]
fn pickup_ceilings() {
    let mut b = Pickup::builder();
    assert!(b.tour(services::MAX_TOUR).is_ok());
    assert!(b.tour(services::MAX_TOUR + 1).is_err());
    assert!(b.quantity(services::MAX_QUANTITY).is_ok());
    assert!(b.quantity(services::MAX_QUANTITY + 1).is_err());
}

#[test]
fn parcel_shop_id_ceiling() {
    let mut b = ParcelShopDelivery::builder();
    assert!(b.parcel_shop_id(services::MAX_PARCEL_SHOP_ID).is_ok());
    assert!(b.parcel_shop_id(services::MAX_PARCEL_SHOP_ID + 1).is_err());
}

#[test]
fn proactive_rule_ceiling() {
    let mut b = ProactiveNotification::builder();
    assert!(b.rule(31).is_ok());
    let err = b.rule(32).unwrap_err();
    assert_eq!(err.constraint, Constraint::Range);
    assert_eq!(b.build().rule(), Some(31));
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[test]
fn country_must_be_alpha2() {
    assert!(Address::builder().country("DE").is_ok());
    let err = Address::builder().country("DEU").unwrap_err();
    assert_eq!(err.field, "country");
    assert_eq!(err.constraint, Constraint::Pattern);
    assert!(Address::builder().country("de").is_err());
}

#[test]
fn email_format() {
    assert!(Address::builder().email("erika.mustermann@example.de").is_ok());
    assert!(Address::builder().email("no-at-sign.example.de").is_err());
    assert!(Address::builder().email("trailing@dot.").is_err());
}

#[test]
fn sending_depot_format() {
    assert!(GeneralShipmentData::builder().sending_depot("0163").is_ok());
    assert!(GeneralShipmentData::builder().sending_depot("163").is_err());
    assert!(GeneralShipmentData::builder().sending_depot("01634").is_err());
}

#[test]
fn sending_date_and_time_formats() {
    let mut b = GeneralShipmentData::builder();
    assert!(b.mps_expected_sending_date("20261019").is_ok());
    assert!(b.mps_expected_sending_date("20261319").is_err());
    assert!(b.mps_expected_sending_date("19991019").is_err());
    assert!(b.mps_expected_sending_time("235959").is_ok());
    assert!(b.mps_expected_sending_time("93000").is_ok());
    assert!(b.mps_expected_sending_time("240000").is_err());
    assert!(b.mps_expected_sending_time("1235959").is_err());
}

#[test]
fn pickup_date_digits() {
    let mut b = Pickup::builder();
    assert!(b.date(20_261_102).is_ok());
    assert!(b.date(261_102).is_ok());
    assert!(b.date(1_102).is_err());
    assert!(b.date(2_026_110_201).is_err());
}

#[test]
fn hour_minute_times() {
    let mut b = Pickup::builder();
    assert!(b.from_time1("0000").is_ok());
    assert!(b.from_time1("2359").is_ok());
    assert!(b.from_time1("2400").is_err());
    assert!(b.from_time1("800").is_err());
}

#[test]
fn hazardous_patterns() {
    let mut b = Hazardous::builder();
    assert!(b.identification_un_no("1203").is_ok());
    assert!(b.identification_un_no("UN1203").is_err());
    assert!(b.hazardous_weight(dec!(9999.99)).is_ok());
    assert!(b.hazardous_weight(dec!(10000.5)).is_err());
    assert!(b.hazardous_weight(dec!(1.234)).is_err());
    assert!(b.net_weight(dec!(0.5)).is_ok());
}

#[test]
fn customs_tarif_and_vat() {
    let mut line = AdditionalInvoiceLine::builder();
    assert!(line.customs_tarif("61091000").is_ok());
    assert!(line.customs_tarif("6109").is_err());

    let mut b = International::builder();
    assert!(b.commercial_invoice_consignor_vat_number("DE123456789").is_ok());
    assert!(b.commercial_invoice_consignor_vat_number("123456789").is_err());
}

#[test]
fn parcel_label_number_length() {
    let mut b = Parcel::builder();
    assert!(b.parcel_label_number("12345678901").is_ok());
    assert!(b.parcel_label_number("12345678901234").is_ok());
    assert!(b.parcel_label_number("1234567890").is_err());
    assert!(b.parcel_label_number("123456789012345").is_err());
}

#[test]
fn notification_language_upper_case() {
    assert!(Notification::builder().language("DE").is_ok());
    assert!(Notification::builder().language("de").is_err());
}

// ---------------------------------------------------------------------------
// Closed code lists
// ---------------------------------------------------------------------------

#[test]
fn every_listed_code_is_accepted() {
    for code in AddressType::allowed_codes() {
        assert!(AddressWithType::builder(Address::default()).address_type_code(code).is_ok());
    }
    for code in Product::allowed_codes() {
        assert!(GeneralShipmentData::builder().product_code(code).is_ok());
    }
    for code in OrderType::allowed_codes() {
        assert!(ProductAndServiceData::builder().order_type_code(code).is_ok());
    }
    for code in StartPosition::allowed_codes() {
        assert!(PrintOption::builder().start_position_code(code).is_ok());
    }
    for code in PackingCode::allowed_codes() {
        assert!(Hazardous::builder().packing_code_str(code).is_ok());
    }
    for code in TunnelRestrictionCode::allowed_codes() {
        assert!(Hazardous::builder().tunnel_restriction_code_str(code).is_ok());
    }
}

#[test]
fn hazardous_codes_from_wire_form() {
    let hazardous = Hazardous::builder()
        .packing_code_str("4G")
        .unwrap()
        .tunnel_restriction_code_str("D")
        .unwrap()
        .build();
    assert_eq!(hazardous.packing_code(), Some(PackingCode::CardboardCrate));
    assert_eq!(hazardous.tunnel_restriction_code(), Some(TunnelRestrictionCode::D));

    let err = Hazardous::builder().packing_code_str("4Z").unwrap_err();
    assert_eq!(err.field, "packingCode");
    assert_eq!(err.constraint, Constraint::NotAllowed);
    assert!(Hazardous::builder().tunnel_restriction_code_str("F").is_err());
}

#[test]
fn unknown_codes_are_rejected() {
    let err = AddressWithType::builder(Address::default())
        .address_type_code("XYZ")
        .unwrap_err();
    assert_eq!(err.field, "addressType");
    assert_eq!(err.constraint, Constraint::NotAllowed);
    assert!(Parcel::builder().add_service_code("9").is_err());
    assert!(Parcel::builder().function_code("LOCK").is_err());
    assert!(International::builder().customs_terms_code("04").is_err());
    assert!(International::builder().linehaul_code("SEA").is_err());
    assert!(PrintOption::builder().paper_format_code("A5").is_err());
    assert!(Printer::builder().connection_type_code("USB").is_err());
    assert!(Pickup::builder().extra_pickup_code("3").is_err());
    assert!(PersonalDelivery::builder().delivery_type_code("6").is_err());
    assert!(Notification::builder().channel_code("6").is_err());
    assert!(ProactiveNotification::builder().channel_code("6").is_ok());
}

#[test]
fn start_position_upper_right_keeps_its_code() {
    let option = PrintOption::builder()
        .start_position_code("UPPER_RIGHT")
        .unwrap()
        .build();
    assert_eq!(option.start_position(), Some(StartPosition::UpperRight));
    assert_eq!(StartPosition::UpperRight.code(), "UPPER_RIGHT");
}

// ---------------------------------------------------------------------------
// Packed fields
// ---------------------------------------------------------------------------

#[test]
fn customs_paper_validated_per_letter() {
    let mut b = International::builder();
    b.customs_paper("ABC").unwrap();
    assert!(b.customs_paper("AZ").is_err());
    assert_eq!(b.build().customs_paper().len(), 3);
    b.customs_paper("").unwrap();
    assert!(b.build().customs_paper().is_empty());
}

#[test]
fn delivery_days_validated_per_item() {
    let mut b = Delivery::builder();
    b.day("0,6").unwrap();
    assert!(b.day("1,7").is_err());
    assert!(b.day("1,,2").is_err());
    assert!(b.day("0,1,2,3,4,5,6,0,1,2,3").is_err());
    assert_eq!(b.build().day(), &[DeliveryDay::Sunday, DeliveryDay::Saturday]);
}

// ---------------------------------------------------------------------------
// Capped lists
// ---------------------------------------------------------------------------

#[test]
fn hazardous_cap() {
    let items = vec![Hazardous::default(); parcel::MAX_HAZARDOUS];
    let mut b = Parcel::builder();
    b.hazardous(items.clone()).unwrap();
    assert!(b.add_hazardous(Hazardous::default()).is_err());
    let mut too_many = items;
    too_many.push(Hazardous::default());
    assert!(Parcel::builder().hazardous(too_many).is_err());
}

#[test]
fn proactive_notification_cap() {
    let items = vec![ProactiveNotification::default(); services::MAX_PROACTIVE_NOTIFICATIONS];
    let mut b = ProductAndServiceData::builder();
    b.proactive_notifications(items).unwrap();
    let err = b.add_proactive_notification(ProactiveNotification::default()).unwrap_err();
    assert_eq!(err.constraint, Constraint::Cardinality(5));
}

#[test]
fn additional_invoice_line_cap() {
    let items = vec![AdditionalInvoiceLine::default(); international::MAX_ADDITIONAL_INVOICE_LINES];
    let mut b = International::builder();
    b.additional_invoice_lines(items).unwrap();
    assert!(b.add_additional_invoice_line(AdditionalInvoiceLine::default()).is_err());
}

#[test]
fn parcel_cap() {
    let items = vec![Parcel::default(); shipment::MAX_PARCELS];
    let mut b = ShipmentServiceData::builder();
    b.parcels(items).unwrap();
    assert!(b.add_parcel(Parcel::default()).is_err());
    assert_eq!(b.build().parcels().len(), 100);
}

#[test]
fn order_bulk_cap() {
    let orders = vec![ShipmentServiceData::default(); shipment::MAX_ORDERS + 1];
    let err = StoreOrders::builder().orders(orders).unwrap_err();
    assert_eq!(err.field, "order");
}

// ---------------------------------------------------------------------------
// Failed assignments keep the prior value
// ---------------------------------------------------------------------------

#[test]
fn rejected_value_does_not_overwrite() {
    let mut b = Address::builder();
    b.name1("Kunde AG").unwrap();
    assert!(b.name1(chars(51)).is_err());
    b.country("DE").unwrap();
    assert!(b.country("DEU").is_err());
    let addr = b.build();
    assert_eq!(addr.name1(), Some("Kunde AG"));
    assert_eq!(addr.country(), Some("DE"));
}

#[test]
fn unset_fields_read_none() {
    let addr = Address::builder().build();
    assert_eq!(addr.name1(), None);
    assert_eq!(addr.gln(), None);
    let parcel = Parcel::builder().build();
    assert_eq!(parcel.weight(), None);
    assert_eq!(parcel.swap(), None);
    assert!(parcel.hazardous().is_empty());
}

#[test]
fn dates_past_year_9999_are_rejected() {
    let far = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
    assert!(International::builder().customs_invoice_date_on(far).is_err());
    assert!(Pickup::builder().date_on(far).is_err());
}
