//! Parcels and their dangerous-goods and insurance attachments.

use rust_decimal::Decimal;
use serde::Serialize;

use super::check::{self, patterns};
use super::codes::{AddService, PackingCode, ParcelFunction, TunnelRestrictionCode};
use super::error::ValidationError;

pub const MAX_LENGTH_CUSTOMER_REFERENCE_NUMBER: usize = 35;
pub const MIN_VOLUME: u32 = 1_001_001;
pub const MAX_VOLUME: u32 = 999_999_999;
pub const MAX_WEIGHT: u32 = 99_999_999;
pub const MAX_LENGTH_CONTENT: usize = 50;
pub const MAX_MESSAGE_NUMBER: u32 = 99_999;
pub const DEFAULT_MESSAGE_NUMBER: u32 = 1;
pub const MAX_LENGTH_PARAMETER: usize = 300;
pub const MAX_HAZARDOUS: usize = 4;
pub const MAX_LENGTH_INFO1: usize = 29;
pub const MAX_LENGTH_INFO2: usize = 30;
pub const MAX_LENGTH_PARCEL_CLASS: usize = 50;

pub const MAX_INSURANCE_AMOUNT: u64 = 9_999_999_999;

pub const MAX_LENGTH_IDENTIFICATION_CLASS: usize = 6;
pub const MAX_LENGTH_CLASSIFICATION_CODE: usize = 5;
pub const MAX_LENGTH_PACKING_GROUP: usize = 5;
pub const MAX_LENGTH_DESCRIPTION: usize = 160;
pub const MAX_LENGTH_SUBSIDIARY_RISK: usize = 10;
pub const MAX_FACTOR: u32 = 999;
pub const MAX_LENGTH_NOT_OTHERWISE_SPECIFIED: usize = 150;

/// One physical parcel of a shipment.
///
/// Volume is given as `LLLWWWHHH` in centimetres, weight in decagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    parcel_label_number: Option<String>,
    customer_reference_number1: Option<String>,
    customer_reference_number2: Option<String>,
    customer_reference_number3: Option<String>,
    customer_reference_number4: Option<String>,
    swap: Option<bool>,
    volume: Option<u32>,
    weight: Option<u32>,
    hazardous_limited_quantities: bool,
    higher_insurance: Option<HigherInsurance>,
    content: Option<String>,
    add_service: Option<AddService>,
    message_number: u32,
    function: Option<ParcelFunction>,
    parameter: Option<String>,
    hazardous: Vec<Hazardous>,
    #[serde(rename = "printInfo1OnParcelLabel")]
    print_info1_on_parcel_label: bool,
    info1: Option<String>,
    info2: Option<String>,
    returns: bool,
    parcel_class: Option<String>,
}

impl Default for Parcel {
    fn default() -> Self {
        Self {
            parcel_label_number: None,
            customer_reference_number1: None,
            customer_reference_number2: None,
            customer_reference_number3: None,
            customer_reference_number4: None,
            swap: None,
            volume: None,
            weight: None,
            hazardous_limited_quantities: false,
            higher_insurance: None,
            content: None,
            add_service: None,
            message_number: DEFAULT_MESSAGE_NUMBER,
            function: None,
            parameter: None,
            hazardous: Vec::new(),
            print_info1_on_parcel_label: false,
            info1: None,
            info2: None,
            returns: false,
            parcel_class: None,
        }
    }
}

impl Parcel {
    pub fn builder() -> ParcelBuilder {
        ParcelBuilder::default()
    }

    pub fn parcel_label_number(&self) -> Option<&str> {
        self.parcel_label_number.as_deref()
    }

    pub fn customer_reference_number1(&self) -> Option<&str> {
        self.customer_reference_number1.as_deref()
    }

    pub fn customer_reference_number2(&self) -> Option<&str> {
        self.customer_reference_number2.as_deref()
    }

    pub fn customer_reference_number3(&self) -> Option<&str> {
        self.customer_reference_number3.as_deref()
    }

    pub fn customer_reference_number4(&self) -> Option<&str> {
        self.customer_reference_number4.as_deref()
    }

    pub fn swap(&self) -> Option<bool> {
        self.swap
    }

    pub fn volume(&self) -> Option<u32> {
        self.volume
    }

    pub fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub fn hazardous_limited_quantities(&self) -> bool {
        self.hazardous_limited_quantities
    }

    pub fn higher_insurance(&self) -> Option<&HigherInsurance> {
        self.higher_insurance.as_ref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn add_service(&self) -> Option<AddService> {
        self.add_service
    }

    pub fn message_number(&self) -> u32 {
        self.message_number
    }

    pub fn function(&self) -> Option<ParcelFunction> {
        self.function
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    pub fn hazardous(&self) -> &[Hazardous] {
        &self.hazardous
    }

    pub fn print_info1_on_parcel_label(&self) -> bool {
        self.print_info1_on_parcel_label
    }

    pub fn info1(&self) -> Option<&str> {
        self.info1.as_deref()
    }

    pub fn info2(&self) -> Option<&str> {
        self.info2.as_deref()
    }

    pub fn returns(&self) -> bool {
        self.returns
    }

    pub fn parcel_class(&self) -> Option<&str> {
        self.parcel_class.as_deref()
    }
}

/// Builder for [`Parcel`].
#[derive(Debug, Clone, Default)]
pub struct ParcelBuilder {
    inner: Parcel,
}

impl ParcelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parcel_label_number(
        &mut self,
        number: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.parcel_label_number = Some(check::matches(
            "parcelLabelNumber",
            number.into(),
            &patterns::PARCEL_LABEL_NUMBER,
        )?);
        Ok(self)
    }

    pub fn customer_reference_number1(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customer_reference_number1 = Some(check::max_chars(
            "customerReferenceNumber1",
            reference.into(),
            MAX_LENGTH_CUSTOMER_REFERENCE_NUMBER,
        )?);
        Ok(self)
    }

    pub fn customer_reference_number2(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customer_reference_number2 = Some(check::max_chars(
            "customerReferenceNumber2",
            reference.into(),
            MAX_LENGTH_CUSTOMER_REFERENCE_NUMBER,
        )?);
        Ok(self)
    }

    pub fn customer_reference_number3(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customer_reference_number3 = Some(check::max_chars(
            "customerReferenceNumber3",
            reference.into(),
            MAX_LENGTH_CUSTOMER_REFERENCE_NUMBER,
        )?);
        Ok(self)
    }

    pub fn customer_reference_number4(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customer_reference_number4 = Some(check::max_chars(
            "customerReferenceNumber4",
            reference.into(),
            MAX_LENGTH_CUSTOMER_REFERENCE_NUMBER,
        )?);
        Ok(self)
    }

    pub fn swap(&mut self, swap: bool) -> &mut Self {
        self.inner.swap = Some(swap);
        self
    }

    pub fn volume(&mut self, volume: u32) -> Result<&mut Self, ValidationError> {
        self.inner.volume = Some(check::within("volume", volume, MIN_VOLUME, MAX_VOLUME)?);
        Ok(self)
    }

    pub fn weight(&mut self, weight: u32) -> Result<&mut Self, ValidationError> {
        self.inner.weight = Some(check::at_most("weight", weight, MAX_WEIGHT)?);
        Ok(self)
    }

    pub fn hazardous_limited_quantities(&mut self, limited: bool) -> &mut Self {
        self.inner.hazardous_limited_quantities = limited;
        self
    }

    pub fn higher_insurance(&mut self, insurance: HigherInsurance) -> &mut Self {
        self.inner.higher_insurance = Some(insurance);
        self
    }

    pub fn content(&mut self, content: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.content = Some(check::max_chars("content", content.into(), MAX_LENGTH_CONTENT)?);
        Ok(self)
    }

    pub fn add_service(&mut self, service: AddService) -> &mut Self {
        self.inner.add_service = Some(service);
        self
    }

    pub fn add_service_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.add_service = Some(code.parse()?);
        Ok(self)
    }

    pub fn message_number(&mut self, number: u32) -> Result<&mut Self, ValidationError> {
        self.inner.message_number = check::at_most("messageNumber", number, MAX_MESSAGE_NUMBER)?;
        Ok(self)
    }

    pub fn function(&mut self, function: ParcelFunction) -> &mut Self {
        self.inner.function = Some(function);
        self
    }

    pub fn function_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.function = Some(code.parse()?);
        Ok(self)
    }

    pub fn parameter(&mut self, parameter: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.parameter = Some(check::max_chars(
            "parameter",
            parameter.into(),
            MAX_LENGTH_PARAMETER,
        )?);
        Ok(self)
    }

    /// Replace the dangerous-goods list.
    pub fn hazardous(&mut self, hazardous: Vec<Hazardous>) -> Result<&mut Self, ValidationError> {
        self.inner.hazardous = check::capped("hazardous", hazardous, MAX_HAZARDOUS)?;
        Ok(self)
    }

    pub fn add_hazardous(&mut self, hazardous: Hazardous) -> Result<&mut Self, ValidationError> {
        check::push_capped("hazardous", &mut self.inner.hazardous, hazardous, MAX_HAZARDOUS)?;
        Ok(self)
    }

    pub fn print_info1_on_parcel_label(&mut self, print: bool) -> &mut Self {
        self.inner.print_info1_on_parcel_label = print;
        self
    }

    pub fn info1(&mut self, info: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.info1 = Some(check::max_chars("info1", info.into(), MAX_LENGTH_INFO1)?);
        Ok(self)
    }

    pub fn info2(&mut self, info: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.info2 = Some(check::max_chars("info2", info.into(), MAX_LENGTH_INFO2)?);
        Ok(self)
    }

    pub fn returns(&mut self, returns: bool) -> &mut Self {
        self.inner.returns = returns;
        self
    }

    pub fn parcel_class(&mut self, class: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.parcel_class = Some(check::max_chars(
            "parcelClass",
            class.into(),
            MAX_LENGTH_PARCEL_CLASS,
        )?);
        Ok(self)
    }

    pub fn build(&self) -> Parcel {
        self.inner.clone()
    }
}

/// Declared value above the carrier's standard liability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HigherInsurance {
    amount: u64,
    currency: String,
}

impl HigherInsurance {
    /// `amount` is given in the currency's minor unit.
    pub fn new(amount: u64, currency: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            amount: check::at_most("amount", amount, MAX_INSURANCE_AMOUNT)?,
            currency: check::matches("currency", currency.into(), &patterns::CURRENCY)?,
        })
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// ADR dangerous-goods declaration for a parcel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hazardous {
    identification_un_no: Option<String>,
    identification_class: Option<String>,
    classification_code: Option<String>,
    packing_group: Option<String>,
    packing_code: Option<PackingCode>,
    description: Option<String>,
    subsidiary_risk: Option<String>,
    tunnel_restriction_code: Option<TunnelRestrictionCode>,
    hazardous_weight: Option<Decimal>,
    net_weight: Option<Decimal>,
    factor: Option<u32>,
    not_otherwise_specified: Option<String>,
}

impl Hazardous {
    pub fn builder() -> HazardousBuilder {
        HazardousBuilder::default()
    }

    /// Four-digit UN number.
    pub fn identification_un_no(&self) -> Option<&str> {
        self.identification_un_no.as_deref()
    }

    pub fn identification_class(&self) -> Option<&str> {
        self.identification_class.as_deref()
    }

    pub fn classification_code(&self) -> Option<&str> {
        self.classification_code.as_deref()
    }

    pub fn packing_group(&self) -> Option<&str> {
        self.packing_group.as_deref()
    }

    pub fn packing_code(&self) -> Option<PackingCode> {
        self.packing_code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn subsidiary_risk(&self) -> Option<&str> {
        self.subsidiary_risk.as_deref()
    }

    pub fn tunnel_restriction_code(&self) -> Option<TunnelRestrictionCode> {
        self.tunnel_restriction_code
    }

    pub fn hazardous_weight(&self) -> Option<Decimal> {
        self.hazardous_weight
    }

    pub fn net_weight(&self) -> Option<Decimal> {
        self.net_weight
    }

    pub fn factor(&self) -> Option<u32> {
        self.factor
    }

    pub fn not_otherwise_specified(&self) -> Option<&str> {
        self.not_otherwise_specified.as_deref()
    }
}

/// Builder for [`Hazardous`].
#[derive(Debug, Clone, Default)]
pub struct HazardousBuilder {
    inner: Hazardous,
}

impl HazardousBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identification_un_no(
        &mut self,
        un_no: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.identification_un_no = Some(check::matches(
            "identificationUnNo",
            un_no.into(),
            &patterns::UN_NUMBER,
        )?);
        Ok(self)
    }

    pub fn identification_class(
        &mut self,
        class: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.identification_class = Some(check::max_chars(
            "identificationClass",
            class.into(),
            MAX_LENGTH_IDENTIFICATION_CLASS,
        )?);
        Ok(self)
    }

    pub fn classification_code(
        &mut self,
        code: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.classification_code = Some(check::max_chars(
            "classificationCode",
            code.into(),
            MAX_LENGTH_CLASSIFICATION_CODE,
        )?);
        Ok(self)
    }

    pub fn packing_group(&mut self, group: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.packing_group = Some(check::max_chars(
            "packingGroup",
            group.into(),
            MAX_LENGTH_PACKING_GROUP,
        )?);
        Ok(self)
    }

    pub fn packing_code(&mut self, code: PackingCode) -> &mut Self {
        self.inner.packing_code = Some(code);
        self
    }

    /// Set the packing code from its wire form, e.g. `"4G"`.
    pub fn packing_code_str(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.packing_code = Some(code.parse()?);
        Ok(self)
    }

    pub fn description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.description = Some(check::max_chars(
            "description",
            description.into(),
            MAX_LENGTH_DESCRIPTION,
        )?);
        Ok(self)
    }

    pub fn subsidiary_risk(&mut self, risk: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.subsidiary_risk = Some(check::max_chars(
            "subsidiaryRisk",
            risk.into(),
            MAX_LENGTH_SUBSIDIARY_RISK,
        )?);
        Ok(self)
    }

    pub fn tunnel_restriction_code(&mut self, code: TunnelRestrictionCode) -> &mut Self {
        self.inner.tunnel_restriction_code = Some(code);
        self
    }

    /// Set the tunnel restriction code from its wire form, e.g. `"D"`.
    pub fn tunnel_restriction_code_str(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.tunnel_restriction_code = Some(code.parse()?);
        Ok(self)
    }

    /// Weight in kilograms with one or two decimal places, e.g. `12.5`.
    pub fn hazardous_weight(&mut self, weight: Decimal) -> Result<&mut Self, ValidationError> {
        self.inner.hazardous_weight = Some(check::decimal_matches(
            "hazardousWeight",
            weight,
            &patterns::HAZARDOUS_WEIGHT,
        )?);
        Ok(self)
    }

    pub fn net_weight(&mut self, weight: Decimal) -> Result<&mut Self, ValidationError> {
        self.inner.net_weight = Some(check::decimal_matches(
            "netWeight",
            weight,
            &patterns::HAZARDOUS_WEIGHT,
        )?);
        Ok(self)
    }

    pub fn factor(&mut self, factor: u32) -> Result<&mut Self, ValidationError> {
        self.inner.factor = Some(check::at_most("factor", factor, MAX_FACTOR)?);
        Ok(self)
    }

    pub fn not_otherwise_specified(
        &mut self,
        text: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.not_otherwise_specified = Some(check::max_chars(
            "notOtherwiseSpecified",
            text.into(),
            MAX_LENGTH_NOT_OTHERWISE_SPECIFIED,
        )?);
        Ok(self)
    }

    pub fn build(&self) -> Hazardous {
        self.inner.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Constraint;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults() {
        let parcel = Parcel::builder().build();
        assert_eq!(parcel.message_number(), 1);
        assert!(!parcel.hazardous_limited_quantities());
        assert!(!parcel.print_info1_on_parcel_label());
        assert!(!parcel.returns());
        assert!(parcel.swap().is_none());
        assert!(parcel.hazardous().is_empty());
    }

    #[test]
    fn volume_has_a_floor() {
        let mut b = Parcel::builder();
        assert!(b.volume(MIN_VOLUME - 1).is_err());
        assert!(b.volume(MIN_VOLUME).is_ok());
        assert!(b.volume(MAX_VOLUME + 1).is_err());
        assert_eq!(b.build().volume(), Some(MIN_VOLUME));
    }

    #[test]
    fn label_number_length() {
        let mut b = Parcel::builder();
        assert!(b.parcel_label_number("0123456789").is_err());
        assert!(b.parcel_label_number("01234567890").is_ok());
        assert!(b.parcel_label_number("01234567890123").is_ok());
        assert!(b.parcel_label_number("012345678901234").is_err());
    }

    #[test]
    fn hazardous_cap() {
        let item = Hazardous::builder().identification_un_no("1203").unwrap().build();
        let mut b = Parcel::builder();
        b.hazardous(vec![item.clone(); MAX_HAZARDOUS]).unwrap();
        let err = b.add_hazardous(item.clone()).unwrap_err();
        assert_eq!(err.constraint, Constraint::Cardinality(MAX_HAZARDOUS));
        assert!(b.hazardous(vec![item; MAX_HAZARDOUS + 1]).is_err());
        assert_eq!(b.build().hazardous().len(), MAX_HAZARDOUS);
    }

    #[test]
    fn hazardous_weights_need_decimal_places() {
        let mut b = Hazardous::builder();
        assert!(b.net_weight(dec!(12.5)).is_ok());
        assert!(b.net_weight(dec!(9999.99)).is_ok());
        assert!(b.net_weight(dec!(12)).is_err());
        assert!(b.net_weight(dec!(10000.00)).is_err());
        assert!(b.hazardous_weight(dec!(1.234)).is_err());
        assert_eq!(b.build().net_weight(), Some(dec!(9999.99)));
    }

    #[test]
    fn higher_insurance() {
        let insurance = HigherInsurance::new(50_000, "EUR").unwrap();
        assert_eq!(insurance.amount(), 50_000);
        assert!(HigherInsurance::new(MAX_INSURANCE_AMOUNT + 1, "EUR").is_err());
        assert!(HigherInsurance::new(100, "euro").is_err());
    }

    #[test]
    fn raw_codes() {
        let mut b = Parcel::builder();
        b.add_service_code("6").unwrap().function_code("LOCKSHOP").unwrap();
        assert!(b.add_service_code("0").is_err());
        let parcel = b.build();
        assert_eq!(parcel.add_service(), Some(AddService::ParcelBox));
        assert_eq!(parcel.function(), Some(ParcelFunction::LockShop));
    }
}
